//! Color temperature control.

use serde::{Deserialize, Serialize};

/// Color temperature in Kelvin, with valid values from 2200K to 6500K.
///
/// Lower values produce warmer (more yellow/orange) light, while higher
/// values produce cooler (more blue) light. The range matches what Wiz
/// bulbs accept in a `setPilot` temp field. Typical values:
/// - 2700K: Warm white (incandescent-like)
/// - 4000K: Neutral white
/// - 6500K: Daylight
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Kelvin {
    pub(crate) kelvin: u16,
}

impl Kelvin {
    const MIN: u16 = 2200;
    const MAX: u16 = 6500;

    /// Fallback temperature when the host reports 0 mireds.
    const DEFAULT_KELVIN: u16 = 4000;

    /// Create a new Kelvin with the default neutral value (4000K).
    pub fn new() -> Self {
        Kelvin {
            kelvin: Self::DEFAULT_KELVIN,
        }
    }

    /// Get the kelvin value.
    pub fn kelvin(&self) -> u16 {
        self.kelvin
    }

    /// Create a new Kelvin with the given value.
    ///
    /// Returns `None` if value is outside the valid range (2200-6500).
    ///
    /// # Examples
    ///
    /// ```
    /// use wiz_bridge_rs::Kelvin;
    ///
    /// assert!(Kelvin::create(2199).is_none());
    /// assert!(Kelvin::create(2200).is_some());
    /// assert!(Kelvin::create(6500).is_some());
    /// assert!(Kelvin::create(6501).is_none());
    /// ```
    pub fn create(kelvin: u16) -> Option<Self> {
        if (Self::MIN..=Self::MAX).contains(&kelvin) {
            Some(Kelvin { kelvin })
        } else {
            None
        }
    }

    /// Clamp an arbitrary temperature into the supported range.
    pub fn clamping(kelvin: u16) -> Self {
        Kelvin {
            kelvin: kelvin.clamp(Self::MIN, Self::MAX),
        }
    }

    /// Convert a host-model mireds value (kelvin = 1,000,000 / mireds)
    /// and clamp into the supported range. Zero mireds falls back to 4000K.
    ///
    /// # Examples
    ///
    /// ```
    /// use wiz_bridge_rs::Kelvin;
    ///
    /// assert_eq!(Kelvin::from_mireds(250).kelvin(), 4000);
    /// assert_eq!(Kelvin::from_mireds(666).kelvin(), 2200); // 1501K, clamped
    /// assert_eq!(Kelvin::from_mireds(0).kelvin(), 4000);
    /// ```
    pub fn from_mireds(mireds: u16) -> Self {
        let kelvin = if mireds > 0 {
            (1_000_000u32 / mireds as u32).min(u16::MAX as u32) as u16
        } else {
            Self::DEFAULT_KELVIN
        };
        Self::clamping(kelvin)
    }
}

impl Default for Kelvin {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamping() {
        assert_eq!(Kelvin::clamping(1000).kelvin(), 2200);
        assert_eq!(Kelvin::clamping(9000).kelvin(), 6500);
        assert_eq!(Kelvin::clamping(3000).kelvin(), 3000);
    }

    #[test]
    fn test_from_mireds() {
        // 153 mireds is the cool end of most host models: 6535K, clamped.
        assert_eq!(Kelvin::from_mireds(153).kelvin(), 6500);
        assert_eq!(Kelvin::from_mireds(370).kelvin(), 2702);
    }
}
