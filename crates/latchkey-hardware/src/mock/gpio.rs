//! Mock GPIO driver implementation.
//!
//! The mock enforces the same discipline a real chip driver would: pins must
//! be configured before use, duty cycles are range-checked, and a stopped
//! PWM channel cannot be driven again. Everything it is asked to do lands in
//! an operation log shared with a [`MockGpioHandle`], which tests use to
//! assert exact hardware sequences.

use crate::error::{HardwareError, Result};
use crate::traits::{GpioDriver, PwmChannel};
use crate::types::{Level, Pin, Pull};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};

/// One recorded hardware operation.
#[derive(Debug, Clone, PartialEq)]
pub enum GpioOp {
    /// Pin configured as digital output.
    ConfigureOutput(Pin),

    /// Pin configured as digital input with a pull setting.
    ConfigureInput(Pin, Pull),

    /// Output pin driven to a level.
    Write(Pin, Level),

    /// Input pin read.
    Read(Pin),

    /// PWM signal generation started.
    PwmStart { pin: Pin, frequency_hz: u32 },

    /// PWM duty cycle updated.
    PwmSetDuty { pin: Pin, percent: f64 },

    /// PWM signal generation stopped.
    PwmStop(Pin),
}

#[derive(Debug, Default)]
struct Inner {
    operations: Vec<GpioOp>,
    output_pins: HashSet<Pin>,
    output_levels: HashMap<Pin, Level>,
    input_levels: HashMap<Pin, Level>,
    failing_writes: HashSet<Pin>,
    pwm_stops: HashMap<Pin, usize>,
}

/// Mock GPIO driver for testing and development.
///
/// Construction returns a `(MockGpio, MockGpioHandle)` pair; the driver is
/// handed to the controller while the handle stays with the test to script
/// inputs and inspect what the controller did.
///
/// # Examples
///
/// ```
/// use latchkey_hardware::mock::MockGpio;
/// use latchkey_hardware::{GpioDriver, Level, Pin};
///
/// # fn main() -> latchkey_hardware::Result<()> {
/// let (mut gpio, handle) = MockGpio::new();
/// let led = Pin::new(13);
///
/// gpio.configure_output(led)?;
/// gpio.write(led, Level::High)?;
///
/// assert_eq!(handle.level(led), Some(Level::High));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct MockGpio {
    inner: Arc<Mutex<Inner>>,
}

impl MockGpio {
    /// Create a mock driver and its inspection handle.
    pub fn new() -> (Self, MockGpioHandle) {
        let inner = Arc::new(Mutex::new(Inner::default()));
        let handle = MockGpioHandle {
            inner: Arc::clone(&inner),
        };
        (Self { inner }, handle)
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().expect("mock gpio state poisoned")
    }
}

impl GpioDriver for MockGpio {
    type Pwm = MockPwm;

    fn configure_output(&mut self, pin: Pin) -> Result<()> {
        let mut inner = self.lock();
        inner.operations.push(GpioOp::ConfigureOutput(pin));
        inner.output_pins.insert(pin);
        Ok(())
    }

    fn configure_input(&mut self, pin: Pin, pull: Pull) -> Result<()> {
        let mut inner = self.lock();
        inner.operations.push(GpioOp::ConfigureInput(pin, pull));
        inner.input_levels.entry(pin).or_insert(pull.idle_level());
        Ok(())
    }

    fn write(&mut self, pin: Pin, level: Level) -> Result<()> {
        let mut inner = self.lock();
        if !inner.output_pins.contains(&pin) {
            return Err(HardwareError::unconfigured(pin, "output"));
        }
        if inner.failing_writes.contains(&pin) {
            return Err(HardwareError::backend(format!(
                "injected write failure on pin {pin}"
            )));
        }
        inner.operations.push(GpioOp::Write(pin, level));
        inner.output_levels.insert(pin, level);
        Ok(())
    }

    fn read(&mut self, pin: Pin) -> Result<Level> {
        let mut inner = self.lock();
        let level = *inner
            .input_levels
            .get(&pin)
            .ok_or_else(|| HardwareError::unconfigured(pin, "input"))?;
        inner.operations.push(GpioOp::Read(pin));
        Ok(level)
    }

    fn start_pwm(&mut self, pin: Pin, frequency_hz: u32) -> Result<Self::Pwm> {
        let mut inner = self.lock();
        if !inner.output_pins.contains(&pin) {
            return Err(HardwareError::unconfigured(pin, "output"));
        }
        inner.operations.push(GpioOp::PwmStart { pin, frequency_hz });
        Ok(MockPwm {
            pin,
            inner: Arc::clone(&self.inner),
            stopped: false,
        })
    }
}

/// PWM channel produced by [`MockGpio::start_pwm`].
#[derive(Debug)]
pub struct MockPwm {
    pin: Pin,
    inner: Arc<Mutex<Inner>>,
    stopped: bool,
}

impl PwmChannel for MockPwm {
    fn set_duty_cycle(&mut self, percent: f64) -> Result<()> {
        if self.stopped {
            return Err(HardwareError::channel_stopped(self.pin));
        }
        if !percent.is_finite() || !(0.0..=100.0).contains(&percent) {
            return Err(HardwareError::invalid_duty_cycle(percent));
        }
        let mut inner = self.inner.lock().expect("mock gpio state poisoned");
        inner.operations.push(GpioOp::PwmSetDuty {
            pin: self.pin,
            percent,
        });
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        if self.stopped {
            return Ok(());
        }
        self.stopped = true;
        let mut inner = self.inner.lock().expect("mock gpio state poisoned");
        inner.operations.push(GpioOp::PwmStop(self.pin));
        *inner.pwm_stops.entry(self.pin).or_insert(0) += 1;
        Ok(())
    }
}

/// Handle for scripting and inspecting a [`MockGpio`].
///
/// Cloneable; all clones observe the same simulated board.
#[derive(Debug, Clone)]
pub struct MockGpioHandle {
    inner: Arc<Mutex<Inner>>,
}

impl MockGpioHandle {
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().expect("mock gpio state poisoned")
    }

    /// Snapshot of every operation recorded so far, in order.
    #[must_use]
    pub fn operations(&self) -> Vec<GpioOp> {
        self.lock().operations.clone()
    }

    /// Last level driven on an output pin, if any.
    #[must_use]
    pub fn level(&self, pin: Pin) -> Option<Level> {
        self.lock().output_levels.get(&pin).copied()
    }

    /// Script the level a subsequent [`GpioDriver::read`] observes.
    ///
    /// Implicitly configures the pin as an input if the driver has not.
    pub fn set_input_level(&self, pin: Pin, level: Level) {
        self.lock().input_levels.insert(pin, level);
    }

    /// Make every future write to `pin` fail with a backend error.
    pub fn fail_writes(&self, pin: Pin) {
        self.lock().failing_writes.insert(pin);
    }

    /// How many times PWM generation on `pin` has been stopped.
    #[must_use]
    pub fn pwm_stop_count(&self, pin: Pin) -> usize {
        self.lock().pwm_stops.get(&pin).copied().unwrap_or(0)
    }

    /// Duty cycles driven on `pin`, in order.
    #[must_use]
    pub fn duty_history(&self, pin: Pin) -> Vec<f64> {
        self.lock()
            .operations
            .iter()
            .filter_map(|op| match op {
                GpioOp::PwmSetDuty { pin: p, percent } if *p == pin => Some(*percent),
                _ => None,
            })
            .collect()
    }
}
