//! Mock GPIO backend for testing and development.
//!
//! This module provides a simulated GPIO driver that records every hardware
//! operation and can be scripted programmatically, without requiring a
//! physical board.

pub mod gpio;

// Re-export commonly used types
pub use gpio::{GpioOp, MockGpio, MockGpioHandle, MockPwm};
