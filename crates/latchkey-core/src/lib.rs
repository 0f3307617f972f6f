//! Core types for the Latchkey door-lock controller.
//!
//! This crate defines the vocabulary shared by every other Latchkey crate:
//! the closed set of door [`Action`]s, the calibration and pin
//! [`config`]uration, the default [`constants`] they are built from, and the
//! shared [`Error`] type.
//!
//! # Examples
//!
//! ```
//! use latchkey_core::{Action, LockConfig};
//!
//! let action: Action = "TOGGLE".parse().unwrap();
//! assert_eq!(action, Action::Toggle);
//!
//! let config = LockConfig::default();
//! assert_eq!(config.calibration.pwm_frequency_hz, 50);
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod types;

pub use config::{Calibration, LockConfig, PinConfig};
pub use error::{Error, Result};
pub use types::Action;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
