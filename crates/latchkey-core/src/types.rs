//! Door action vocabulary.

use crate::{Result, error::Error};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A door action requested by the caller.
///
/// This is a closed set: every action the controller can perform is a
/// variant here, and dispatch over it is an exhaustive `match`, so adding a
/// new action is a compile-time-checked change rather than a string
/// comparison scattered through the code.
///
/// The external identifiers (CLI argument, button-loop commands) are the
/// SCREAMING_SNAKE_CASE forms accepted by [`FromStr`](std::str::FromStr):
/// `LOCK`, `UNLOCK`, `BUZZ`, `BUZZ_AND_UNLOCK`, `TOGGLE`, `DELAY_LOCK`.
///
/// # Examples
///
/// ```
/// use latchkey_core::Action;
///
/// let action: Action = "BUZZ_AND_UNLOCK".parse().unwrap();
/// assert_eq!(action, Action::BuzzAndUnlock);
/// assert_eq!(action.as_str(), "BUZZ_AND_UNLOCK");
///
/// assert!("OPEN".parse::<Action>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Rotate the bolt to the locked position and light the status LED.
    Lock,

    /// Rotate the bolt to the unlocked position and turn the status LED off.
    Unlock,

    /// Sound the buzzer for the configured buzz duration.
    Buzz,

    /// Sound the buzzer to completion, then run a delayed lock.
    BuzzAndUnlock,

    /// Unlock if currently locked, otherwise lock. Absent persisted state
    /// counts as "not locked".
    Toggle,

    /// Unlock, hold the door open for the configured delay while blinking
    /// the status LED, then lock again.
    ///
    /// External identifier is `DELAY_LOCK` (historical command name).
    #[serde(rename = "DELAY_LOCK")]
    DelayedLock,
}

impl Action {
    /// All actions, in dispatch order.
    pub const ALL: [Action; 6] = [
        Action::Lock,
        Action::Unlock,
        Action::Buzz,
        Action::BuzzAndUnlock,
        Action::Toggle,
        Action::DelayedLock,
    ];

    /// The external identifier for this action.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Lock => "LOCK",
            Action::Unlock => "UNLOCK",
            Action::Buzz => "BUZZ",
            Action::BuzzAndUnlock => "BUZZ_AND_UNLOCK",
            Action::Toggle => "TOGGLE",
            Action::DelayedLock => "DELAY_LOCK",
        }
    }

}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Action {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "LOCK" => Ok(Action::Lock),
            "UNLOCK" => Ok(Action::Unlock),
            "BUZZ" => Ok(Action::Buzz),
            "BUZZ_AND_UNLOCK" => Ok(Action::BuzzAndUnlock),
            "TOGGLE" => Ok(Action::Toggle),
            "DELAY_LOCK" => Ok(Action::DelayedLock),
            other => Err(Error::unsupported_action(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("LOCK", Action::Lock)]
    #[case("UNLOCK", Action::Unlock)]
    #[case("BUZZ", Action::Buzz)]
    #[case("BUZZ_AND_UNLOCK", Action::BuzzAndUnlock)]
    #[case("TOGGLE", Action::Toggle)]
    #[case("DELAY_LOCK", Action::DelayedLock)]
    fn test_action_parse_valid(#[case] input: &str, #[case] expected: Action) {
        let action: Action = input.parse().unwrap();
        assert_eq!(action, expected);
        assert_eq!(action.as_str(), input);
        assert_eq!(action.to_string(), input);
    }

    #[rstest]
    #[case("")]
    #[case("lock")] // identifiers are case-sensitive
    #[case("LOCK ")] // no trimming
    #[case("DELAYED_LOCK")] // close but not the external identifier
    #[case("BOGUS")]
    fn test_action_parse_invalid(#[case] input: &str) {
        let result: Result<Action> = input.parse();
        match result {
            Err(Error::UnsupportedAction { identifier }) => assert_eq!(identifier, input),
            other => panic!("expected UnsupportedAction, got {other:?}"),
        }
    }

    #[test]
    fn test_action_serde_round_trip() {
        for action in Action::ALL {
            let json = serde_json::to_string(&action).unwrap();
            assert_eq!(json, format!("\"{}\"", action.as_str()));
            let back: Action = serde_json::from_str(&json).unwrap();
            assert_eq!(back, action);
        }
    }
}
