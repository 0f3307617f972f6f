//! Common types shared across GPIO driver implementations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Not;

/// A physical pin, BOARD-numbered (position on the 40-pin header).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pin(u8);

impl Pin {
    /// Create a pin from its BOARD number.
    #[must_use]
    pub const fn new(number: u8) -> Self {
        Pin(number)
    }

    /// Get the BOARD number.
    #[must_use]
    pub const fn number(&self) -> u8 {
        self.0
    }
}

impl From<u8> for Pin {
    fn from(number: u8) -> Self {
        Pin(number)
    }
}

impl fmt::Display for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Logic level of a digital pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Low,
    High,
}

impl Level {
    /// `true` for [`Level::High`].
    #[must_use]
    pub fn is_high(&self) -> bool {
        matches!(self, Level::High)
    }
}

impl Not for Level {
    type Output = Level;

    fn not(self) -> Level {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high { Level::High } else { Level::Low }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Low => write!(f, "low"),
            Level::High => write!(f, "high"),
        }
    }
}

/// Internal pull resistor setting for an input pin.
///
/// The lock's push buttons are wired active-low with the internal pull-up
/// enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pull {
    Up,
    Down,
    Off,
}

impl Pull {
    /// The level an unconnected input rests at under this pull setting.
    ///
    /// A floating pin has no defined level; the mock backend treats it as
    /// low.
    #[must_use]
    pub fn idle_level(&self) -> Level {
        match self {
            Pull::Up => Level::High,
            Pull::Down | Pull::Off => Level::Low,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_display_and_number() {
        let pin = Pin::new(11);
        assert_eq!(pin.number(), 11);
        assert_eq!(pin.to_string(), "11");
        assert_eq!(Pin::from(13u8), Pin::new(13));
    }

    #[test]
    fn test_level_not() {
        assert_eq!(!Level::High, Level::Low);
        assert_eq!(!Level::Low, Level::High);
        assert!(Level::High.is_high());
        assert!(!Level::Low.is_high());
    }

    #[test]
    fn test_level_from_bool() {
        assert_eq!(Level::from(true), Level::High);
        assert_eq!(Level::from(false), Level::Low);
    }

    #[test]
    fn test_pull_idle_levels() {
        assert_eq!(Pull::Up.idle_level(), Level::High);
        assert_eq!(Pull::Down.idle_level(), Level::Low);
        assert_eq!(Pull::Off.idle_level(), Level::Low);
    }

    #[test]
    fn test_serde_forms() {
        assert_eq!(serde_json::to_string(&Level::High).unwrap(), "\"high\"");
        assert_eq!(serde_json::to_string(&Pull::Up).unwrap(), "\"up\"");
        assert_eq!(serde_json::to_string(&Pin::new(15)).unwrap(), "15");
    }
}
