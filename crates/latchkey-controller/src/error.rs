//! Error types for action execution.

use latchkey_hardware::HardwareError;
use latchkey_state::StateError;

/// Result type alias for controller operations.
pub type Result<T> = std::result::Result<T, ControllerError>;

/// Errors that can abort an action invocation.
///
/// Hardware and state failures are fatal for the invocation and are never
/// retried; partial hardware state (say, a bolt driven to a new angle with
/// the state file not yet updated) is a documented, acceptable
/// inconsistency.
#[derive(Debug, thiserror::Error)]
pub enum ControllerError {
    /// Unknown action identifier, or invocation-lifecycle misuse.
    #[error("Action error: {0}")]
    Action(#[from] latchkey_core::Error),

    /// Pin or PWM operation failed.
    #[error("Hardware error: {0}")]
    Hardware(#[from] HardwareError),

    /// Persisted lock state could not be read or written.
    #[error("State store error: {0}")]
    State(#[from] StateError),
}

impl ControllerError {
    /// Whether this is the unsupported-action failure of the entry
    /// dispatcher (as opposed to a mid-sequence fault).
    #[must_use]
    pub fn is_unsupported_action(&self) -> bool {
        matches!(
            self,
            ControllerError::Action(latchkey_core::Error::UnsupportedAction { .. })
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_action_classification() {
        let error = ControllerError::from(latchkey_core::Error::unsupported_action("BOGUS"));
        assert!(error.is_unsupported_action());
        assert_eq!(error.to_string(), "Action error: Unsupported action: BOGUS");

        let error = ControllerError::from(HardwareError::backend("chip busy"));
        assert!(!error.is_unsupported_action());
    }
}
