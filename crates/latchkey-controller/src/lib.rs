//! Action controller for the Latchkey door lock.
//!
//! This crate sequences the servo, status LED, and buzzer into the named
//! door actions, persists the lock flag through [`latchkey_state`], and
//! guarantees that the actuator is released on every exit path.
//!
//! # Invocation lifecycle
//!
//! One invocation moves through four phases:
//!
//! ```text
//! Uninitialized → Configured → Executing → TornDown
//! ```
//!
//! Setup configures the pins and starts the servo's PWM channel. Exactly one
//! action body runs in `Executing`. Teardown stops the PWM channel exactly
//! once per invocation, whether the action succeeded or failed; the LED and
//! buzzer keep their last driven level on purpose — the LED reflects the
//! lock state after the process exits.
//!
//! # Ordering contracts
//!
//! Every hold is an awaited sleep on the current task; nothing is spawned,
//! so the sequences are strictly ordered. In particular `BUZZ_AND_UNLOCK`
//! completes the full buzz hold before the unlock drive begins.
//!
//! # Examples
//!
//! ```
//! use latchkey_controller::execute;
//! use latchkey_core::LockConfig;
//! use latchkey_hardware::mock::MockGpio;
//! use latchkey_state::StateStore;
//!
//! # #[tokio::main(flavor = "current_thread", start_paused = true)]
//! # async fn main() -> Result<(), latchkey_controller::ControllerError> {
//! let dir = tempfile::TempDir::new().unwrap();
//! let mut config = LockConfig::default();
//! config.state_file = dir.path().join("state.json");
//!
//! let (mut gpio, _handle) = MockGpio::new();
//! let store = StateStore::new(&config.state_file);
//!
//! execute(&mut gpio, &store, &config, "LOCK").await?;
//! assert!(store.is_locked()?);
//! # Ok(())
//! # }
//! ```

pub mod controller;
pub mod error;
pub mod phase;

pub use controller::{ActuatorHandle, LockController, execute};
pub use error::{ControllerError, Result};
pub use phase::InvocationPhase;
