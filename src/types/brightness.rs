//! Brightness control for Wiz lights.

use serde::{Deserialize, Serialize};

/// Brightness level from 0 to 100 percent.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Brightness {
    pub(crate) value: u8,
}

impl Brightness {
    const MAX: u8 = 100;

    /// Create a new Brightness at the maximum (100%).
    pub fn new() -> Self {
        Brightness { value: Self::MAX }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    /// Returns None if value is above the valid range (0-100).
    pub fn create(value: u8) -> Option<Self> {
        if value <= Self::MAX {
            Some(Brightness { value })
        } else {
            None
        }
    }

    /// Saturate an out-of-range value to 100%.
    ///
    /// The attribute pipeline always clamps rather than rejects, matching
    /// what the lights themselves do with over-range dimming values.
    pub fn clamping(value: u8) -> Self {
        Brightness {
            value: value.min(Self::MAX),
        }
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Self::new()
    }
}
