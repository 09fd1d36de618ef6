//! # wiz_bridge_rs
//!
//! An async Rust library that bridges a generic smart-lighting attribute
//! model (power, brightness, hue/saturation, color temperature, CIE xy)
//! onto Wiz smart bulbs over UDP, fanning each command out to a fixed
//! group of lights.
//!
//! The crate has two halves:
//!
//! - **Conversion**: pure numeric translation from the host model's scales
//!   to the wire protocol's scales — CIE xy → sRGB ([`convert::xy_to_rgb`]),
//!   integer HSV → RGB ([`convert::hsv_to_rgb`]), mireds → Kelvin
//!   ([`Kelvin::from_mireds`]) and generic interval remapping
//!   ([`remap::remap`]).
//! - **Dispatch**: the [`GroupDriver`] encodes a [`LightCommand`] as one
//!   `setPilot` JSON datagram and delivers it best-effort to every
//!   configured target, pacing sends 50 ms apart and succeeding when at
//!   least one target accepts.
//!
//! A [`LightRouter`] ties the two together for hosts that report attribute
//! changes as `(endpoint, cluster, attribute, value)` notifications.
//!
//! ## Quick Start
//!
//! ```ignore
//! use wiz_bridge_rs::{GroupConfig, GroupDriver, LightRouter, AttrValue, cluster, attribute};
//!
//! async fn bridge() -> Result<(), wiz_bridge_rs::Error> {
//!     let config = GroupConfig::from_strs(
//!         &["192.168.0.155", "192.168.0.139"],
//!         GroupConfig::DEFAULT_PORT,
//!     )?;
//!     let driver = GroupDriver::new(config)?;
//!     let mut router = LightRouter::new(1, driver);
//!
//!     // A host notification: OnOff attribute flipped to true.
//!     router.update(1, cluster::ON_OFF, attribute::ON_OFF, AttrValue::Bool(true)).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Communication
//!
//! All communication with Wiz bulbs occurs over UDP on port 38899 (or a
//! configured alternative). One datagram per target per command, no reply
//! expected or read; delivery is fire-and-forget with at-least-one-target
//! success semantics.
//!
//! ## Runtime Selection
//!
//! This library is runtime-agnostic. Select your preferred runtime using
//! feature flags:
//!
//! - `runtime-tokio` (default): Use the tokio async runtime
//! - `runtime-async-std`: Use the async-std runtime
//! - `runtime-smol`: Use the smol runtime

mod command;
mod config;
pub mod convert;
mod driver;
mod errors;
mod payload;
pub mod remap;
mod router;
pub mod runtime;
mod types;

// Re-export public API
pub use command::{EncodedCommand, LightCommand};
pub use config::GroupConfig;
pub use driver::GroupDriver;
pub use errors::Error;
pub use payload::PilotParams;
pub use router::{AttrValue, InitialColor, InitialState, LightRouter, attribute, cluster};
pub use types::{Brightness, Color, Kelvin};
