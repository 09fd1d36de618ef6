//! Routes host attribute-store notifications onto light commands.
//!
//! The host model reports attribute changes as `(endpoint, cluster,
//! attribute, value)` tuples. A [`LightRouter`] owns the per-group color
//! state those notifications accumulate into (hue, saturation, brightness,
//! x, y) and turns each known tuple into one [`LightCommand`] dispatched
//! through the group driver. Unknown tuples are ignored without error.

use log::{error, warn};

use crate::command::LightCommand;
use crate::convert;
use crate::driver::GroupDriver;
use crate::errors::Error;
use crate::remap::remap;
use crate::types::{Brightness, Kelvin};

type Result<T> = std::result::Result<T, Error>;

/// Cluster identifiers of the host attribute model.
pub mod cluster {
    pub const ON_OFF: u32 = 0x0006;
    pub const LEVEL_CONTROL: u32 = 0x0008;
    pub const COLOR_CONTROL: u32 = 0x0300;
}

/// Attribute identifiers, scoped by cluster.
pub mod attribute {
    pub const ON_OFF: u32 = 0x0000;
    pub const CURRENT_LEVEL: u32 = 0x0000;
    pub const CURRENT_HUE: u32 = 0x0000;
    pub const CURRENT_SATURATION: u32 = 0x0001;
    pub const CURRENT_X: u32 = 0x0003;
    pub const CURRENT_Y: u32 = 0x0004;
    pub const COLOR_TEMPERATURE_MIREDS: u32 = 0x0007;
}

// Host-model attribute scales and their wire-protocol counterparts.
const HOST_BRIGHTNESS_MAX: u32 = 254;
const HOST_HUE_MAX: u32 = 254;
const HOST_SATURATION_MAX: u32 = 254;
const WIRE_BRIGHTNESS_MAX: u32 = 100;
const WIRE_HUE_MAX: u32 = 360;
const WIRE_SATURATION_MAX: u32 = 100;

/// A value carried by an attribute notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrValue {
    Bool(bool),
    U8(u8),
    U16(u16),
    U32(u32),
}

impl AttrValue {
    fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    fn as_u8(&self) -> Option<u8> {
        match self {
            AttrValue::U8(v) => Some(*v),
            _ => None,
        }
    }

    fn as_u16(&self) -> Option<u16> {
        match self {
            AttrValue::U16(v) => Some(*v),
            _ => None,
        }
    }
}

/// Tagged handler selected for a known (cluster, attribute) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route {
    Power,
    Brightness,
    Hue,
    Saturation,
    ColorTemperature,
    CurrentX,
    CurrentY,
}

/// Lookup table from (cluster, attribute) to handler.
const ROUTES: &[((u32, u32), Route)] = &[
    ((cluster::ON_OFF, attribute::ON_OFF), Route::Power),
    (
        (cluster::LEVEL_CONTROL, attribute::CURRENT_LEVEL),
        Route::Brightness,
    ),
    ((cluster::COLOR_CONTROL, attribute::CURRENT_HUE), Route::Hue),
    (
        (cluster::COLOR_CONTROL, attribute::CURRENT_SATURATION),
        Route::Saturation,
    ),
    (
        (cluster::COLOR_CONTROL, attribute::COLOR_TEMPERATURE_MIREDS),
        Route::ColorTemperature,
    ),
    ((cluster::COLOR_CONTROL, attribute::CURRENT_X), Route::CurrentX),
    ((cluster::COLOR_CONTROL, attribute::CURRENT_Y), Route::CurrentY),
];

fn lookup(cluster_id: u32, attribute_id: u32) -> Option<Route> {
    ROUTES
        .iter()
        .find(|((c, a), _)| *c == cluster_id && *a == attribute_id)
        .map(|(_, route)| *route)
}

/// Color snapshot used to replay the host store's state at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitialColor {
    HueSaturation { hue: u8, saturation: u8 },
    Temperature { mireds: u16 },
    Xy { x: u16, y: u16 },
}

/// A startup snapshot of the host attribute store.
///
/// `brightness` is on the host scale (0-254). An absent color means the
/// store reported a mode this bridge does not support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitialState {
    pub power: bool,
    pub brightness: u8,
    pub color: Option<InitialColor>,
}

/// Maps attribute notifications for one endpoint onto group commands.
pub struct LightRouter {
    endpoint_id: u16,
    driver: GroupDriver,
    // Wire-scale color state, accumulated across notifications.
    hue: u16,
    saturation: u8,
    brightness: u8,
    // Raw chromaticity coordinates, recombined on either axis change.
    x: u16,
    y: u16,
}

impl LightRouter {
    pub fn new(endpoint_id: u16, driver: GroupDriver) -> Self {
        LightRouter {
            endpoint_id,
            driver,
            hue: 0,
            saturation: 0,
            brightness: 100,
            x: 0,
            y: 0,
        }
    }

    pub fn endpoint_id(&self) -> u16 {
        self.endpoint_id
    }

    /// Handle one attribute notification.
    ///
    /// Notifications for other endpoints and unknown (cluster, attribute)
    /// pairs are ignored without error; everything else is converted and
    /// fanned out to the group.
    pub async fn update(
        &mut self,
        endpoint_id: u16,
        cluster_id: u32,
        attribute_id: u32,
        value: AttrValue,
    ) -> Result<()> {
        if endpoint_id != self.endpoint_id {
            return Ok(());
        }
        match self.route(cluster_id, attribute_id, value) {
            Some(command) => self.driver.send(&command).await,
            None => Ok(()),
        }
    }

    /// Select the command for a notification and fold it into the cached
    /// color state. Returns None for unknown pairs or mismatched value tags.
    pub fn route(
        &mut self,
        cluster_id: u32,
        attribute_id: u32,
        value: AttrValue,
    ) -> Option<LightCommand> {
        let route = lookup(cluster_id, attribute_id)?;
        let command = match route {
            Route::Power => LightCommand::Power(self.expect(route, value.as_bool())?),
            Route::Brightness => {
                let level = self.expect(route, value.as_u8())?;
                self.brightness = remap(
                    level as u32,
                    0..=HOST_BRIGHTNESS_MAX,
                    0..=WIRE_BRIGHTNESS_MAX,
                ) as u8;
                LightCommand::Brightness(Brightness::clamping(self.brightness))
            }
            Route::Hue => {
                let hue = self.expect(route, value.as_u8())?;
                self.hue = remap(hue as u32, 0..=HOST_HUE_MAX, 0..=WIRE_HUE_MAX) as u16;
                self.hsv_command()
            }
            Route::Saturation => {
                let saturation = self.expect(route, value.as_u8())?;
                self.saturation = remap(
                    saturation as u32,
                    0..=HOST_SATURATION_MAX,
                    0..=WIRE_SATURATION_MAX,
                ) as u8;
                self.hsv_command()
            }
            Route::ColorTemperature => {
                let mireds = self.expect(route, value.as_u16())?;
                LightCommand::Temperature {
                    kelvin: Kelvin::from_mireds(mireds),
                    brightness: Brightness::clamping(self.brightness),
                }
            }
            Route::CurrentX => {
                self.x = self.expect(route, value.as_u16())?;
                self.xy_command()
            }
            Route::CurrentY => {
                self.y = self.expect(route, value.as_u16())?;
                self.xy_command()
            }
        };
        Some(command)
    }

    /// Replay a startup snapshot: brightness first, then the mode-specific
    /// color, then power, mirroring how the host store initializes.
    pub async fn apply_initial(&mut self, state: &InitialState) -> Result<()> {
        self.brightness = remap(
            state.brightness as u32,
            0..=HOST_BRIGHTNESS_MAX,
            0..=WIRE_BRIGHTNESS_MAX,
        ) as u8;
        self.driver
            .set_brightness(Brightness::clamping(self.brightness))
            .await?;

        match state.color {
            Some(InitialColor::HueSaturation { hue, saturation }) => {
                self.hue = remap(hue as u32, 0..=HOST_HUE_MAX, 0..=WIRE_HUE_MAX) as u16;
                self.saturation = remap(
                    saturation as u32,
                    0..=HOST_SATURATION_MAX,
                    0..=WIRE_SATURATION_MAX,
                ) as u8;
                let command = self.hsv_command();
                self.driver.send(&command).await?;
            }
            Some(InitialColor::Temperature { mireds }) => {
                self.driver
                    .set_temperature(
                        Kelvin::from_mireds(mireds),
                        Brightness::clamping(self.brightness),
                    )
                    .await?;
            }
            Some(InitialColor::Xy { x, y }) => {
                self.x = x;
                self.y = y;
                let command = self.xy_command();
                self.driver.send(&command).await?;
            }
            None => {
                error!("color mode not supported");
            }
        }

        self.driver.set_power(state.power).await
    }

    fn hsv_command(&self) -> LightCommand {
        LightCommand::Hsv {
            hue: self.hue,
            saturation: self.saturation,
            value: self.brightness,
        }
    }

    fn xy_command(&self) -> LightCommand {
        LightCommand::Rgb {
            color: convert::xy_to_rgb(self.x, self.y),
            brightness: Brightness::clamping(self.brightness),
        }
    }

    /// Known pair carrying the wrong value tag: log and drop.
    fn expect<T>(&self, route: Route, value: Option<T>) -> Option<T> {
        if value.is_none() {
            warn!("attribute value has wrong type for {route:?}; ignoring");
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GroupConfig;

    fn router() -> LightRouter {
        let config =
            GroupConfig::from_strs(&["127.0.0.1"], GroupConfig::DEFAULT_PORT).unwrap();
        LightRouter::new(1, GroupDriver::new(config).unwrap())
    }

    #[test]
    fn test_power_route() {
        let mut r = router();
        let cmd = r.route(cluster::ON_OFF, attribute::ON_OFF, AttrValue::Bool(true));
        assert_eq!(cmd, Some(LightCommand::Power(true)));
    }

    #[test]
    fn test_brightness_route_remaps_host_scale() {
        let mut r = router();
        let cmd = r.route(
            cluster::LEVEL_CONTROL,
            attribute::CURRENT_LEVEL,
            AttrValue::U8(254),
        );
        assert_eq!(
            cmd,
            Some(LightCommand::Brightness(Brightness::clamping(100)))
        );
    }

    #[test]
    fn test_hue_route_uses_cached_saturation_and_brightness() {
        let mut r = router();
        r.route(
            cluster::LEVEL_CONTROL,
            attribute::CURRENT_LEVEL,
            AttrValue::U8(127),
        );
        r.route(
            cluster::COLOR_CONTROL,
            attribute::CURRENT_SATURATION,
            AttrValue::U8(254),
        );
        let cmd = r.route(
            cluster::COLOR_CONTROL,
            attribute::CURRENT_HUE,
            AttrValue::U8(127),
        );
        assert_eq!(
            cmd,
            Some(LightCommand::Hsv {
                hue: 180,
                saturation: 100,
                value: 50,
            })
        );
    }

    #[test]
    fn test_temperature_route_clamps_mireds() {
        let mut r = router();
        // 666 mireds is 1501K, below the bulbs' floor.
        let cmd = r.route(
            cluster::COLOR_CONTROL,
            attribute::COLOR_TEMPERATURE_MIREDS,
            AttrValue::U16(666),
        );
        assert_eq!(
            cmd,
            Some(LightCommand::Temperature {
                kelvin: Kelvin::clamping(2200),
                brightness: Brightness::clamping(100),
            })
        );
    }

    #[test]
    fn test_xy_routes_recombine_both_axes() {
        let mut r = router();
        r.route(
            cluster::COLOR_CONTROL,
            attribute::CURRENT_X,
            AttrValue::U16(41942),
        );
        let cmd = r.route(
            cluster::COLOR_CONTROL,
            attribute::CURRENT_Y,
            AttrValue::U16(21627),
        );
        let Some(LightCommand::Rgb { color, brightness }) = cmd else {
            panic!("expected an RGB command, got {cmd:?}");
        };
        assert_eq!(color, convert::xy_to_rgb(41942, 21627));
        assert_eq!(brightness.value(), 100);
    }

    #[test]
    fn test_unknown_pair_is_ignored() {
        let mut r = router();
        assert_eq!(r.route(0x1234, 0x0000, AttrValue::U8(1)), None);
        assert_eq!(
            r.route(cluster::COLOR_CONTROL, 0x00FF, AttrValue::U16(7)),
            None
        );
    }

    #[test]
    fn test_mismatched_value_tag_is_ignored() {
        let mut r = router();
        let cmd = r.route(cluster::ON_OFF, attribute::ON_OFF, AttrValue::U16(1));
        assert_eq!(cmd, None);
    }

    #[tokio::test]
    async fn test_wrong_endpoint_filtered_without_transport() {
        // update() for a foreign endpoint must not touch the socket.
        let mut r = router();
        let result = r
            .update(99, cluster::ON_OFF, attribute::ON_OFF, AttrValue::Bool(true))
            .await;
        assert!(result.is_ok());
    }
}
