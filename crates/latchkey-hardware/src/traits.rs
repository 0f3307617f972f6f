//! GPIO driver trait definitions.
//!
//! These traits establish the contract between the action controller and a
//! concrete GPIO backend, enabling substitution between the mock driver and
//! real hardware without touching controller code.
//!
//! The controller owns a driver for the lifetime of one invocation; there is
//! no global driver state. Pin numbering and platform concerns (safety
//! warnings, chip handles) live entirely inside the backend.

use crate::error::Result;
use crate::types::{Level, Pin, Pull};

/// A running PWM signal generator bound to one pin.
///
/// For the lock servo the duty cycle encodes the commanded angle; the two
/// calibrated positions are plain percent values handed down from the
/// configuration.
pub trait PwmChannel {
    /// Update the duty cycle, in percent of the carrier period.
    ///
    /// # Errors
    ///
    /// Returns [`HardwareError::InvalidDutyCycle`] if `percent` is outside
    /// 0.0-100.0 and [`HardwareError::ChannelStopped`] if the channel was
    /// already stopped.
    ///
    /// [`HardwareError::InvalidDutyCycle`]: crate::HardwareError::InvalidDutyCycle
    /// [`HardwareError::ChannelStopped`]: crate::HardwareError::ChannelStopped
    fn set_duty_cycle(&mut self, percent: f64) -> Result<()>;

    /// Stop signal generation. Idempotent: stopping a stopped channel is a
    /// no-op.
    fn stop(&mut self) -> Result<()>;
}

/// A GPIO backend: digital I/O plus PWM channel creation.
///
/// Implementations are synchronous; none of these operations blocks on
/// anything but the register access itself. Timed holds are the caller's
/// responsibility.
pub trait GpioDriver {
    /// The PWM channel type this backend produces.
    type Pwm: PwmChannel;

    /// Configure a pin as a digital output.
    fn configure_output(&mut self, pin: Pin) -> Result<()>;

    /// Configure a pin as a digital input with the given pull resistor.
    fn configure_input(&mut self, pin: Pin, pull: Pull) -> Result<()>;

    /// Drive an output pin to a level.
    fn write(&mut self, pin: Pin, level: Level) -> Result<()>;

    /// Read the level of an input pin.
    fn read(&mut self, pin: Pin) -> Result<Level>;

    /// Start a continuous PWM signal on an output pin.
    ///
    /// The channel starts with a 0% duty cycle; callers set the first real
    /// duty explicitly.
    fn start_pwm(&mut self, pin: Pin, frequency_hz: u32) -> Result<Self::Pwm>;
}
