//! Enum wrappers for GPIO backend dispatch.
//!
//! The controller is generic over [`GpioDriver`], but binaries need one
//! concrete type to construct from configuration. These wrappers provide
//! that concrete dispatch without boxing, and give real hardware backends an
//! obvious place to slot in behind cargo features.

use crate::error::Result;
use crate::mock::{MockGpio, MockPwm};
use crate::traits::{GpioDriver, PwmChannel};
use crate::types::{Level, Pin, Pull};

/// Enum wrapper for GPIO backend dispatch.
///
/// # Examples
///
/// ```
/// use latchkey_hardware::devices::AnyGpioDriver;
/// use latchkey_hardware::mock::MockGpio;
/// use latchkey_hardware::{GpioDriver, Pin};
///
/// # fn main() -> latchkey_hardware::Result<()> {
/// let (gpio, _handle) = MockGpio::new();
/// let mut any_gpio = AnyGpioDriver::Mock(gpio);
///
/// any_gpio.configure_output(Pin::new(13))?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
#[non_exhaustive]
pub enum AnyGpioDriver {
    /// Mock backend for development and testing.
    Mock(MockGpio),
    // Planned variants, behind the reserved cargo features:
    // - Rpi(RpiGpio) — Raspberry Pi GPIO character device (hardware-rpi)
}

impl AnyGpioDriver {
    /// Create the mock backend together with its inspection handle.
    pub fn mock() -> (Self, crate::mock::MockGpioHandle) {
        let (gpio, handle) = MockGpio::new();
        (Self::Mock(gpio), handle)
    }
}

impl GpioDriver for AnyGpioDriver {
    type Pwm = AnyPwmChannel;

    fn configure_output(&mut self, pin: Pin) -> Result<()> {
        match self {
            Self::Mock(driver) => driver.configure_output(pin),
        }
    }

    fn configure_input(&mut self, pin: Pin, pull: Pull) -> Result<()> {
        match self {
            Self::Mock(driver) => driver.configure_input(pin, pull),
        }
    }

    fn write(&mut self, pin: Pin, level: Level) -> Result<()> {
        match self {
            Self::Mock(driver) => driver.write(pin, level),
        }
    }

    fn read(&mut self, pin: Pin) -> Result<Level> {
        match self {
            Self::Mock(driver) => driver.read(pin),
        }
    }

    fn start_pwm(&mut self, pin: Pin, frequency_hz: u32) -> Result<Self::Pwm> {
        match self {
            Self::Mock(driver) => Ok(AnyPwmChannel::Mock(driver.start_pwm(pin, frequency_hz)?)),
        }
    }
}

/// Enum wrapper for PWM channel dispatch, paired with [`AnyGpioDriver`].
#[derive(Debug)]
#[non_exhaustive]
pub enum AnyPwmChannel {
    /// Channel produced by the mock backend.
    Mock(MockPwm),
}

impl PwmChannel for AnyPwmChannel {
    fn set_duty_cycle(&mut self, percent: f64) -> Result<()> {
        match self {
            Self::Mock(channel) => channel.set_duty_cycle(percent),
        }
    }

    fn stop(&mut self) -> Result<()> {
        match self {
            Self::Mock(channel) => channel.stop(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_dispatch_round_trip() {
        let (mut gpio, handle) = AnyGpioDriver::mock();
        let servo = Pin::new(11);

        gpio.configure_output(servo).unwrap();
        let mut pwm = gpio.start_pwm(servo, 50).unwrap();
        pwm.set_duty_cycle(3.5).unwrap();
        pwm.stop().unwrap();

        assert_eq!(handle.duty_history(servo), vec![3.5]);
        assert_eq!(handle.pwm_stop_count(servo), 1);
    }
}
