//! GPIO hardware abstraction for the Latchkey door-lock controller.
//!
//! This crate defines the contract between the action controller and the
//! board's GPIO driver: digital outputs for the status LED and buzzer, an
//! input path for the push buttons, and a PWM channel that encodes the
//! servo's commanded angle as a duty cycle.
//!
//! # Design Philosophy
//!
//! - **Trait seams, concrete dispatch**: the controller is generic over
//!   [`GpioDriver`]; deployments pick a backend through the
//!   [`AnyGpioDriver`] enum wrapper, keeping dispatch monomorphic.
//! - **Synchronous operations**: a GPIO register write has no await point,
//!   so every trait method is a plain `fn`. All timing (settle holds, buzz
//!   durations, blink intervals) belongs to the controller, not the driver.
//! - **Error-aware**: every operation returns [`Result<T>`][error::Result];
//!   a failed pin write is fatal for the invocation and is never retried.
//!
//! # Mock backend
//!
//! [`MockGpio`] simulates a board without hardware. It records every
//! operation in a log that its paired [`MockGpioHandle`] can inspect, so
//! tests assert exact hardware sequences:
//!
//! ```
//! use latchkey_hardware::mock::{GpioOp, MockGpio};
//! use latchkey_hardware::{GpioDriver, Pin, PwmChannel};
//!
//! # fn main() -> latchkey_hardware::Result<()> {
//! let (mut gpio, handle) = MockGpio::new();
//! let servo = Pin::new(11);
//!
//! gpio.configure_output(servo)?;
//! let mut pwm = gpio.start_pwm(servo, 50)?;
//! pwm.set_duty_cycle(8.0)?;
//! pwm.stop()?;
//!
//! assert_eq!(handle.pwm_stop_count(servo), 1);
//! assert!(handle.operations().contains(&GpioOp::PwmSetDuty {
//!     pin: servo,
//!     percent: 8.0,
//! }));
//! # Ok(())
//! # }
//! ```
//!
//! # Real hardware
//!
//! The `hardware-rpi` cargo feature is reserved for a Raspberry Pi backend;
//! until it lands, [`AnyGpioDriver`] exposes the mock only.

pub mod devices;
pub mod error;
pub mod mock;
pub mod traits;
pub mod types;

// Re-export commonly used types for convenience
pub use devices::{AnyGpioDriver, AnyPwmChannel};
pub use error::{HardwareError, Result};
pub use mock::{GpioOp, MockGpio, MockGpioHandle};
pub use traits::{GpioDriver, PwmChannel};
pub use types::{Level, Pin, Pull};
