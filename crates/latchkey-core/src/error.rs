//! Shared error type for the Latchkey crates.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // Action errors
    #[error("Unsupported action: {identifier}")]
    UnsupportedAction { identifier: String },

    // Invocation lifecycle errors
    #[error("Invalid phase transition from {from} to {to}")]
    InvalidPhaseTransition { from: String, to: String },

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid duty cycle {value}: must be within 0.0-100.0")]
    InvalidDutyCycle { value: f64 },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an unsupported-action error from the offending identifier.
    pub fn unsupported_action(identifier: impl Into<String>) -> Self {
        Self::UnsupportedAction {
            identifier: identifier.into(),
        }
    }

    /// Create an invalid-phase-transition error.
    pub fn invalid_phase_transition(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::InvalidPhaseTransition {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an invalid-duty-cycle error.
    pub fn invalid_duty_cycle(value: f64) -> Self {
        Self::InvalidDutyCycle { value }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_action_display() {
        let error = Error::unsupported_action("OPEN_SESAME");
        assert!(matches!(error, Error::UnsupportedAction { .. }));
        assert_eq!(error.to_string(), "Unsupported action: OPEN_SESAME");
    }

    #[test]
    fn test_invalid_phase_transition_display() {
        let error = Error::invalid_phase_transition("Configured", "TornDown");
        assert_eq!(
            error.to_string(),
            "Invalid phase transition from Configured to TornDown"
        );
    }

    #[test]
    fn test_invalid_duty_cycle_display() {
        let error = Error::invalid_duty_cycle(128.0);
        assert_eq!(
            error.to_string(),
            "Invalid duty cycle 128: must be within 0.0-100.0"
        );
    }
}
