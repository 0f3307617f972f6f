//! Default calibration and pin constants for the lock controller.
//!
//! These values are the defaults baked into [`LockConfig::default`]; every
//! one of them can be overridden through the JSON configuration file, so
//! nothing outside this crate should reference them directly for behavior.
//!
//! # Servo calibration
//!
//! The servo is driven with a 50 Hz PWM signal whose duty cycle encodes the
//! commanded angle. On the reference hardware the usable band is roughly
//!
//! ```text
//! duty 2.5% .. 10.5%  ==  0° .. 180°
//! ```
//!
//! The two named positions below were calibrated against the physical bolt,
//! not computed from angles. Re-calibrate them when changing the servo horn
//! or the bolt linkage.
//!
//! # Pin numbering
//!
//! Pin numbers use the physical BOARD numbering of the 40-pin header. The two
//! button pins are consumed by the external button-polling loop, not by the
//! core action controller; they are kept here so one configuration file
//! describes the whole board.
//!
//! [`LockConfig::default`]: crate::config::LockConfig

/// PWM carrier frequency for hobby servos, in hertz.
pub const PWM_FREQUENCY_HZ: u32 = 50;

/// Duty cycle (percent) that rotates the bolt into the locked position.
pub const SERVO_LOCKED_DUTY: f64 = 8.0;

/// Duty cycle (percent) that rotates the bolt into the unlocked position.
pub const SERVO_UNLOCKED_DUTY: f64 = 3.5;

/// Hold time allowing the servo to physically reach a commanded position,
/// in seconds.
pub const SERVO_SETTLE_SECS: f64 = 1.0;

/// How long the buzzer sounds for a buzz action, in seconds.
pub const BUZZ_SECS: f64 = 4.0;

/// How long a delayed lock keeps the door unlocked before re-locking,
/// in seconds.
pub const DELAYED_LOCK_HOLD_SECS: f64 = 15.0;

/// Status-LED blink half-period while a delayed lock is pending, in seconds.
pub const BLINK_INTERVAL_SECS: f64 = 0.5;

/// Default state-file path, relative to the working directory.
pub const DEFAULT_STATE_FILE: &str = "latchkey_state.json";

/// Servo signal pin (BOARD numbering).
pub const DEFAULT_SERVO_PIN: u8 = 11;

/// Lock-status LED pin (BOARD numbering).
pub const DEFAULT_STATUS_LED_PIN: u8 = 13;

/// Buzzer pin (BOARD numbering).
pub const DEFAULT_BUZZER_PIN: u8 = 15;

/// Toggle-lock push-button pin, input with pull-up, active low
/// (BOARD numbering).
pub const DEFAULT_TOGGLE_BUTTON_PIN: u8 = 16;

/// Delayed-lock push-button pin, input with pull-up, active low
/// (BOARD numbering).
pub const DEFAULT_DELAY_LOCK_BUTTON_PIN: u8 = 18;
