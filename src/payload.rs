//! Wire-level `setPilot` parameter shapes.

use serde::Serialize;

use crate::types::{Brightness, Color, Kelvin};

/// Parameters of one `setPilot` command.
///
/// Fields are declared in wire order (`state`, `r`, `g`, `b`, `temp`,
/// `dimming`) and unset fields are skipped, so serializing a given
/// parameter set always yields byte-identical text.
#[serde_with::skip_serializing_none]
#[derive(Default, Debug, Serialize, Clone, PartialEq, Eq)]
pub struct PilotParams {
    pub(crate) state: Option<bool>,
    #[serde(rename = "r")]
    pub(crate) red: Option<u8>,
    #[serde(rename = "g")]
    pub(crate) green: Option<u8>,
    #[serde(rename = "b")]
    pub(crate) blue: Option<u8>,
    pub(crate) temp: Option<u16>,
    pub(crate) dimming: Option<u8>,
}

impl PilotParams {
    /// Power on/off only.
    pub fn power(on: bool) -> Self {
        PilotParams {
            state: Some(on),
            ..Default::default()
        }
    }

    /// Brightness only, leaving the power state untouched.
    pub fn brightness(brightness: Brightness) -> Self {
        PilotParams {
            dimming: Some(brightness.value()),
            ..Default::default()
        }
    }

    /// RGB color at the given brightness. Implies power on.
    pub fn rgb(color: Color, brightness: Brightness) -> Self {
        PilotParams {
            state: Some(true),
            red: Some(color.red()),
            green: Some(color.green()),
            blue: Some(color.blue()),
            dimming: Some(brightness.value()),
            ..Default::default()
        }
    }

    /// White color temperature at the given brightness. Implies power on.
    pub fn temperature(kelvin: Kelvin, brightness: Brightness) -> Self {
        PilotParams {
            state: Some(true),
            temp: Some(kelvin.kelvin()),
            dimming: Some(brightness.value()),
            ..Default::default()
        }
    }
}

/// The full `setPilot` envelope around [`PilotParams`].
#[derive(Debug, Serialize)]
pub(crate) struct SetPilot<'a> {
    pub(crate) method: &'static str,
    pub(crate) params: &'a PilotParams,
}

impl<'a> SetPilot<'a> {
    pub(crate) fn new(params: &'a PilotParams) -> Self {
        SetPilot {
            method: "setPilot",
            params,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_shape() {
        let msg = serde_json::to_string(&SetPilot::new(&PilotParams::power(true))).unwrap();
        assert_eq!(msg, r#"{"method":"setPilot","params":{"state":true}}"#);
    }

    #[test]
    fn test_brightness_shape() {
        let params = PilotParams::brightness(Brightness::clamping(75));
        let msg = serde_json::to_string(&SetPilot::new(&params)).unwrap();
        assert_eq!(msg, r#"{"method":"setPilot","params":{"dimming":75}}"#);
    }

    #[test]
    fn test_rgb_shape_preserves_field_order() {
        let params = PilotParams::rgb(Color::rgb(255, 128, 0), Brightness::clamping(100));
        let msg = serde_json::to_string(&SetPilot::new(&params)).unwrap();
        assert_eq!(
            msg,
            r#"{"method":"setPilot","params":{"state":true,"r":255,"g":128,"b":0,"dimming":100}}"#
        );
    }

    #[test]
    fn test_temperature_shape() {
        let params = PilotParams::temperature(Kelvin::clamping(2200), Brightness::clamping(100));
        let msg = serde_json::to_string(&SetPilot::new(&params)).unwrap();
        assert_eq!(
            msg,
            r#"{"method":"setPilot","params":{"state":true,"temp":2200,"dimming":100}}"#
        );
    }
}
