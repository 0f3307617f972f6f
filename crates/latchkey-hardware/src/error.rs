//! Error types for GPIO operations.

use crate::types::Pin;

/// Result type alias for hardware operations.
pub type Result<T> = std::result::Result<T, HardwareError>;

/// Errors that can occur while driving GPIO pins or PWM channels.
#[derive(Debug, thiserror::Error)]
pub enum HardwareError {
    /// Pin was used before being configured for that direction.
    #[error("Pin {pin} is not configured as {expected}")]
    UnconfiguredPin { pin: Pin, expected: &'static str },

    /// Duty cycle outside the 0.0-100.0 percent range.
    #[error("Invalid duty cycle {percent}: must be within 0.0-100.0")]
    InvalidDutyCycle { percent: f64 },

    /// PWM channel was driven after being stopped.
    #[error("PWM channel on pin {pin} is stopped")]
    ChannelStopped { pin: Pin },

    /// Backend driver fault (chip access, kernel interface, simulation).
    #[error("GPIO backend error: {message}")]
    Backend { message: String },

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl HardwareError {
    /// Create an unconfigured-pin error.
    pub fn unconfigured(pin: Pin, expected: &'static str) -> Self {
        Self::UnconfiguredPin { pin, expected }
    }

    /// Create an invalid-duty-cycle error.
    pub fn invalid_duty_cycle(percent: f64) -> Self {
        Self::InvalidDutyCycle { percent }
    }

    /// Create a stopped-channel error.
    pub fn channel_stopped(pin: Pin) -> Self {
        Self::ChannelStopped { pin }
    }

    /// Create a backend fault error.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconfigured_pin_error() {
        let error = HardwareError::unconfigured(Pin::new(13), "output");
        assert!(matches!(error, HardwareError::UnconfiguredPin { .. }));
        assert_eq!(error.to_string(), "Pin 13 is not configured as output");
    }

    #[test]
    fn test_invalid_duty_cycle_error() {
        let error = HardwareError::invalid_duty_cycle(250.0);
        assert_eq!(
            error.to_string(),
            "Invalid duty cycle 250: must be within 0.0-100.0"
        );
    }

    #[test]
    fn test_channel_stopped_error() {
        let error = HardwareError::channel_stopped(Pin::new(11));
        assert_eq!(error.to_string(), "PWM channel on pin 11 is stopped");
    }

    #[test]
    fn test_backend_error() {
        let error = HardwareError::backend("chip busy");
        assert_eq!(error.to_string(), "GPIO backend error: chip busy");
    }
}
