//! Invocation phase machine.
//!
//! One action invocation is a straight line through four phases; the machine
//! exists to make lifecycle misuse (dispatching before setup, executing
//! twice, touching hardware after teardown) a checked error instead of a
//! silent bug.

use latchkey_core::{Error, Result};
use std::fmt;

/// Phase of one action invocation.
///
/// # Valid transitions
///
/// - `Uninitialized → Configured` (setup completed)
/// - `Configured → Executing` (action body entered, once)
/// - `Executing → TornDown` (actuator released; runs on success and failure)
///
/// # Examples
///
/// ```
/// use latchkey_controller::InvocationPhase;
///
/// let phase = InvocationPhase::Uninitialized;
/// assert!(phase.can_transition_to(InvocationPhase::Configured));
/// assert!(!phase.can_transition_to(InvocationPhase::Executing));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvocationPhase {
    /// No hardware touched yet.
    Uninitialized,

    /// Pins configured, PWM running, buzzer forced low.
    Configured,

    /// The single action body is running.
    Executing,

    /// Actuator released; the invocation is over.
    TornDown,
}

impl InvocationPhase {
    /// Check if transition to `target` is valid from this phase.
    #[must_use]
    pub fn can_transition_to(self, target: InvocationPhase) -> bool {
        use InvocationPhase::{Configured, Executing, TornDown, Uninitialized};
        matches!(
            (self, target),
            (Uninitialized, Configured) | (Configured, Executing) | (Executing, TornDown)
        )
    }

    /// Transition to `target`, returning the new phase.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPhaseTransition`] for any transition not
    /// listed in the type docs.
    pub fn transition_to(self, target: InvocationPhase) -> Result<InvocationPhase> {
        if self.can_transition_to(target) {
            Ok(target)
        } else {
            Err(Error::invalid_phase_transition(
                self.to_string(),
                target.to_string(),
            ))
        }
    }
}

impl fmt::Display for InvocationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phase = match self {
            InvocationPhase::Uninitialized => "Uninitialized",
            InvocationPhase::Configured => "Configured",
            InvocationPhase::Executing => "Executing",
            InvocationPhase::TornDown => "TornDown",
        };
        write!(f, "{phase}")
    }
}

#[cfg(test)]
mod tests {
    use super::InvocationPhase::{Configured, Executing, TornDown, Uninitialized};
    use latchkey_core::Error;

    #[test]
    fn test_happy_path_transitions() {
        let phase = Uninitialized
            .transition_to(Configured)
            .and_then(|p| p.transition_to(Executing))
            .and_then(|p| p.transition_to(TornDown))
            .unwrap();
        assert_eq!(phase, TornDown);
    }

    #[test]
    fn test_invalid_transitions_rejected() {
        for (from, to) in [
            (Uninitialized, Executing), // dispatch before setup
            (Uninitialized, TornDown),
            (Configured, Configured), // double setup
            (Configured, TornDown),   // teardown without executing
            (Executing, Executing),   // double dispatch
            (TornDown, Executing),    // reuse after teardown
            (TornDown, Configured),
        ] {
            let result = from.transition_to(to);
            assert!(
                matches!(result, Err(Error::InvalidPhaseTransition { .. })),
                "{from} -> {to} should be rejected"
            );
        }
    }
}
