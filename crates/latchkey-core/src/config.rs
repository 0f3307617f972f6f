//! Lock controller configuration.
//!
//! Configuration is a single JSON document with three sections: pin
//! assignments, servo/timing calibration, and the state-file path. Every
//! field has a default taken from [`constants`](crate::constants), so a
//! missing file or a partial document is always usable.
//!
//! # Examples
//!
//! ```
//! use latchkey_core::LockConfig;
//!
//! let config: LockConfig = serde_json::from_str(
//!     r#"{ "calibration": { "buzz_secs": 0.5 } }"#,
//! ).unwrap();
//!
//! assert_eq!(config.calibration.buzz_secs, 0.5);
//! // Everything else keeps its default.
//! assert_eq!(config.pins.servo, 11);
//! ```

use crate::{Result, constants, error::Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// BOARD-numbered pin assignments.
///
/// The button pins are documented here for the external button-polling loop;
/// the action controller itself only uses `servo`, `status_led`, and
/// `buzzer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PinConfig {
    /// Servo signal pin (PWM output).
    pub servo: u8,

    /// Lock-status LED pin (digital output).
    pub status_led: u8,

    /// Buzzer pin (digital output).
    pub buzzer: u8,

    /// Toggle-lock push button (input, pull-up, active low).
    pub toggle_button: u8,

    /// Delayed-lock push button (input, pull-up, active low).
    pub delay_lock_button: u8,
}

impl Default for PinConfig {
    fn default() -> Self {
        Self {
            servo: constants::DEFAULT_SERVO_PIN,
            status_led: constants::DEFAULT_STATUS_LED_PIN,
            buzzer: constants::DEFAULT_BUZZER_PIN,
            toggle_button: constants::DEFAULT_TOGGLE_BUTTON_PIN,
            delay_lock_button: constants::DEFAULT_DELAY_LOCK_BUTTON_PIN,
        }
    }
}

/// Servo calibration and action timing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Calibration {
    /// PWM carrier frequency in hertz. 50 Hz for hobby servos.
    pub pwm_frequency_hz: u32,

    /// Duty cycle (percent) for the locked bolt position.
    pub locked_duty: f64,

    /// Duty cycle (percent) for the unlocked bolt position.
    pub unlocked_duty: f64,

    /// Servo rotation settle time in seconds.
    pub settle_secs: f64,

    /// Buzz duration in seconds.
    pub buzz_secs: f64,

    /// Delayed-lock hold duration in seconds.
    pub delayed_lock_hold_secs: f64,

    /// Status-LED blink half-period during a delayed lock, in seconds.
    pub blink_interval_secs: f64,
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            pwm_frequency_hz: constants::PWM_FREQUENCY_HZ,
            locked_duty: constants::SERVO_LOCKED_DUTY,
            unlocked_duty: constants::SERVO_UNLOCKED_DUTY,
            settle_secs: constants::SERVO_SETTLE_SECS,
            buzz_secs: constants::BUZZ_SECS,
            delayed_lock_hold_secs: constants::DELAYED_LOCK_HOLD_SECS,
            blink_interval_secs: constants::BLINK_INTERVAL_SECS,
        }
    }
}

impl Calibration {
    /// Servo settle hold.
    #[must_use]
    pub fn settle(&self) -> Duration {
        Duration::from_secs_f64(self.settle_secs)
    }

    /// Buzz hold.
    #[must_use]
    pub fn buzz(&self) -> Duration {
        Duration::from_secs_f64(self.buzz_secs)
    }

    /// Delayed-lock hold.
    #[must_use]
    pub fn delayed_lock_hold(&self) -> Duration {
        Duration::from_secs_f64(self.delayed_lock_hold_secs)
    }

    /// Blink half-period.
    #[must_use]
    pub fn blink_interval(&self) -> Duration {
        Duration::from_secs_f64(self.blink_interval_secs)
    }

    /// Validate calibration values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDutyCycle`] if a duty value is outside
    /// 0.0-100.0, and [`Error::Config`] if a duration is not a positive
    /// finite number or the blink interval exceeds the delayed-lock hold.
    pub fn validate(&self) -> Result<()> {
        for duty in [self.locked_duty, self.unlocked_duty] {
            if !duty.is_finite() || !(0.0..=100.0).contains(&duty) {
                return Err(Error::invalid_duty_cycle(duty));
            }
        }
        for (name, secs) in [
            ("settle_secs", self.settle_secs),
            ("buzz_secs", self.buzz_secs),
            ("delayed_lock_hold_secs", self.delayed_lock_hold_secs),
            ("blink_interval_secs", self.blink_interval_secs),
        ] {
            if !secs.is_finite() || secs <= 0.0 {
                return Err(Error::config(format!(
                    "{name} must be a positive number of seconds, got {secs}"
                )));
            }
        }
        if self.pwm_frequency_hz == 0 {
            return Err(Error::config("pwm_frequency_hz must be non-zero"));
        }
        if self.blink_interval_secs > self.delayed_lock_hold_secs {
            return Err(Error::config(format!(
                "blink_interval_secs ({}) exceeds delayed_lock_hold_secs ({})",
                self.blink_interval_secs, self.delayed_lock_hold_secs
            )));
        }
        Ok(())
    }
}

/// Complete controller configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LockConfig {
    /// Pin assignments.
    pub pins: PinConfig,

    /// Servo calibration and timing.
    pub calibration: Calibration,

    /// Path of the persisted state file.
    pub state_file: PathBuf,
}

impl Default for LockConfig {
    fn default() -> Self {
        Self {
            pins: PinConfig::default(),
            calibration: Calibration::default(),
            state_file: PathBuf::from(constants::DEFAULT_STATE_FILE),
        }
    }
}

impl LockConfig {
    /// Load configuration from a JSON file, falling back to defaults when
    /// the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file exists but cannot be read,
    /// [`Error::Config`] if it cannot be parsed, and validation errors per
    /// [`Calibration::validate`].
    pub fn load(path: &Path) -> Result<Self> {
        let config = if path.exists() {
            let raw = std::fs::read_to_string(path)?;
            serde_json::from_str(&raw)
                .map_err(|e| Error::config(format!("{}: {e}", path.display())))?
        } else {
            Self::default()
        };
        config.calibration.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_defaults_match_constants() {
        let config = LockConfig::default();
        assert_eq!(config.pins.servo, constants::DEFAULT_SERVO_PIN);
        assert_eq!(config.calibration.locked_duty, constants::SERVO_LOCKED_DUTY);
        assert_eq!(
            config.calibration.unlocked_duty,
            constants::SERVO_UNLOCKED_DUTY
        );
        assert_eq!(
            config.state_file,
            PathBuf::from(constants::DEFAULT_STATE_FILE)
        );
        assert!(config.calibration.validate().is_ok());
    }

    #[test]
    fn test_partial_document_keeps_defaults() {
        let config: LockConfig =
            serde_json::from_str(r#"{ "pins": { "servo": 12 } }"#).unwrap();
        assert_eq!(config.pins.servo, 12);
        assert_eq!(config.pins.buzzer, constants::DEFAULT_BUZZER_PIN);
        assert_eq!(config.calibration.buzz_secs, constants::BUZZ_SECS);
    }

    #[rstest]
    #[case(-0.5, 3.5)]
    #[case(8.0, 101.0)]
    #[case(f64::NAN, 3.5)]
    fn test_duty_out_of_range_rejected(#[case] locked: f64, #[case] unlocked: f64) {
        let calibration = Calibration {
            locked_duty: locked,
            unlocked_duty: unlocked,
            ..Calibration::default()
        };
        assert!(matches!(
            calibration.validate(),
            Err(Error::InvalidDutyCycle { .. })
        ));
    }

    #[rstest]
    #[case(0.0)]
    #[case(-1.0)]
    fn test_non_positive_durations_rejected(#[case] secs: f64) {
        let calibration = Calibration {
            settle_secs: secs,
            ..Calibration::default()
        };
        assert!(matches!(calibration.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_blink_longer_than_hold_rejected() {
        let calibration = Calibration {
            delayed_lock_hold_secs: 1.0,
            blink_interval_secs: 2.0,
            ..Calibration::default()
        };
        assert!(matches!(calibration.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = LockConfig::load(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, LockConfig::default());
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(LockConfig::load(&path), Err(Error::Config(_))));
    }

    #[test]
    fn test_durations_convert() {
        let calibration = Calibration::default();
        assert_eq!(calibration.settle(), Duration::from_secs(1));
        assert_eq!(calibration.buzz(), Duration::from_secs(4));
        assert_eq!(calibration.delayed_lock_hold(), Duration::from_secs(15));
        assert_eq!(calibration.blink_interval(), Duration::from_millis(500));
    }
}
