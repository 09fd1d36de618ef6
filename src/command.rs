//! Semantic light commands and their wire encoding.

use serde::{Deserialize, Serialize};

use crate::convert;
use crate::errors::Error;
use crate::payload::{PilotParams, SetPilot};
use crate::types::{Brightness, Color, Kelvin};

type Result<T> = std::result::Result<T, Error>;

/// One semantic command for a group of lights.
///
/// Commands are produced by the attribute router (or constructed directly)
/// and encoded into a single `setPilot` datagram. HSV carries raw
/// protocol-scale components because it is converted to RGB at encode time,
/// the same path the lights ultimately see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LightCommand {
    /// Turn the whole group on or off.
    Power(bool),
    /// Change brightness without touching color or power state.
    Brightness(Brightness),
    /// Set an RGB color at the given brightness.
    Rgb {
        color: Color,
        brightness: Brightness,
    },
    /// Set a white color temperature at the given brightness.
    Temperature {
        kelvin: Kelvin,
        brightness: Brightness,
    },
    /// Set a color from hue (0-360 degrees), saturation and value (0-100
    /// percent, clamped). Encodes as RGB with value doubling as dimming.
    Hsv {
        hue: u16,
        saturation: u8,
        value: u8,
    },
}

impl LightCommand {
    /// Encode this command into its wire form.
    pub fn encode(&self) -> Result<EncodedCommand> {
        let params = match self {
            LightCommand::Power(on) => PilotParams::power(*on),
            LightCommand::Brightness(brightness) => PilotParams::brightness(*brightness),
            LightCommand::Rgb { color, brightness } => PilotParams::rgb(*color, *brightness),
            LightCommand::Temperature { kelvin, brightness } => {
                PilotParams::temperature(*kelvin, *brightness)
            }
            LightCommand::Hsv {
                hue,
                saturation,
                value,
            } => {
                let color = convert::hsv_to_rgb(*hue, *saturation, *value);
                PilotParams::rgb(color, Brightness::clamping(*value))
            }
        };

        let text = serde_json::to_string(&SetPilot::new(&params)).map_err(Error::JsonDump)?;
        debug_assert!(
            text.len() <= self.max_encoded_len(),
            "encoded command exceeds its size bound: {text}"
        );
        Ok(EncodedCommand { text })
    }

    /// Upper bound on the encoded size of this command kind.
    ///
    /// Switch-style commands (power, brightness) fit 128 bytes; color
    /// commands fit 256. Verified against worst-case field widths in the
    /// tests below; any change to field ranges must re-verify the bound.
    pub fn max_encoded_len(&self) -> usize {
        match self {
            LightCommand::Power(_) | LightCommand::Brightness(_) => 128,
            _ => 256,
        }
    }
}

/// An immutable, fully serialized `setPilot` payload.
///
/// Built once per send and handed to the dispatcher; never persisted.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct EncodedCommand {
    text: String,
}

impl EncodedCommand {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl std::fmt::Display for EncodedCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_encoding_is_exact() {
        let cmd = LightCommand::Power(true).encode().unwrap();
        assert_eq!(
            cmd.as_str(),
            r#"{"method":"setPilot","params":{"state":true}}"#
        );
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let a = LightCommand::Rgb {
            color: Color::rgb(10, 20, 30),
            brightness: Brightness::clamping(40),
        };
        assert_eq!(a.encode().unwrap(), a.clone().encode().unwrap());
    }

    #[test]
    fn test_hsv_encodes_through_rgb() {
        let cmd = LightCommand::Hsv {
            hue: 0,
            saturation: 100,
            value: 100,
        }
        .encode()
        .unwrap();
        assert_eq!(
            cmd.as_str(),
            r#"{"method":"setPilot","params":{"state":true,"r":255,"g":0,"b":0,"dimming":100}}"#
        );
    }

    #[test]
    fn test_worst_case_widths_fit_bounds() {
        // Widest possible field values for each command shape.
        let cases = [
            LightCommand::Power(false),
            LightCommand::Brightness(Brightness::clamping(100)),
            LightCommand::Rgb {
                color: Color::rgb(255, 255, 255),
                brightness: Brightness::clamping(100),
            },
            LightCommand::Temperature {
                kelvin: Kelvin::clamping(6500),
                brightness: Brightness::clamping(100),
            },
            LightCommand::Hsv {
                hue: 359,
                saturation: 100,
                value: 100,
            },
        ];
        for case in cases {
            let encoded = case.encode().unwrap();
            assert!(
                encoded.len() <= case.max_encoded_len(),
                "{case:?} encodes to {} bytes",
                encoded.len()
            );
        }
    }
}
