//! Action sequencing over the GPIO facade.

use crate::error::Result;
use crate::phase::InvocationPhase;
use latchkey_core::{Action, LockConfig};
use latchkey_hardware::{GpioDriver, Level, Pin, PwmChannel};
use latchkey_state::StateStore;
use tokio::time::sleep;
use tracing::{debug, error, info};

/// The initialized lock actuator: a running PWM channel on the servo pin.
///
/// Created by [`LockController::setup`], used by exactly one action body,
/// consumed by teardown. Owning it is the proof that setup ran.
#[derive(Debug)]
pub struct ActuatorHandle<P: PwmChannel> {
    servo: P,
}

impl<P: PwmChannel> ActuatorHandle<P> {
    fn new(servo: P) -> Self {
        Self { servo }
    }

    /// Command a servo position by duty cycle.
    fn set_duty(&mut self, percent: f64) -> latchkey_hardware::Result<()> {
        self.servo.set_duty_cycle(percent)
    }

    /// Stop the PWM channel, consuming the handle.
    fn release(mut self) -> latchkey_hardware::Result<()> {
        self.servo.stop()
    }
}

/// Sequences one door action over a GPIO driver, a state store, and a
/// configuration.
///
/// A controller executes at most one action; the phase machine rejects
/// reuse. The usual entry point is the free function [`execute`], which owns
/// the whole parse → setup → dispatch → teardown flow.
#[derive(Debug)]
pub struct LockController<'a, G: GpioDriver> {
    gpio: &'a mut G,
    store: &'a StateStore,
    config: &'a LockConfig,
    phase: InvocationPhase,
}

impl<'a, G: GpioDriver> LockController<'a, G> {
    /// Create a controller for one invocation.
    pub fn new(gpio: &'a mut G, store: &'a StateStore, config: &'a LockConfig) -> Self {
        Self {
            gpio,
            store,
            config,
            phase: InvocationPhase::Uninitialized,
        }
    }

    /// Current phase of this invocation.
    #[must_use]
    pub fn phase(&self) -> InvocationPhase {
        self.phase
    }

    fn transition(&mut self, target: InvocationPhase) -> Result<()> {
        self.phase = self.phase.transition_to(target)?;
        Ok(())
    }

    fn servo_pin(&self) -> Pin {
        Pin::new(self.config.pins.servo)
    }

    fn led_pin(&self) -> Pin {
        Pin::new(self.config.pins.status_led)
    }

    fn buzzer_pin(&self) -> Pin {
        Pin::new(self.config.pins.buzzer)
    }

    /// Run one action: setup, dispatch, guaranteed teardown.
    ///
    /// Teardown runs whenever setup completed, even if the action body
    /// failed, and the action body's error wins over a teardown error.
    ///
    /// # Errors
    ///
    /// Propagates the first hardware or state-store failure of the
    /// sequence, after the actuator has been released.
    pub async fn run(&mut self, action: Action) -> Result<()> {
        let mut actuator = self.setup()?;
        let outcome = match self.transition(InvocationPhase::Executing) {
            Ok(()) => self.dispatch(action, &mut actuator).await,
            Err(e) => Err(e),
        };
        self.teardown(actuator, outcome)
    }

    /// Configure pins and start the servo's PWM channel.
    ///
    /// Transitions `Uninitialized → Configured`. The buzzer is forced low so
    /// an invocation never inherits a sounding buzzer from a crashed
    /// predecessor.
    fn setup(&mut self) -> Result<ActuatorHandle<G::Pwm>> {
        self.transition(InvocationPhase::Configured)?;
        debug!(
            servo = %self.servo_pin(),
            led = %self.led_pin(),
            buzzer = %self.buzzer_pin(),
            "configuring pins"
        );

        self.gpio.configure_output(self.servo_pin())?;
        let mut servo = self
            .gpio
            .start_pwm(self.servo_pin(), self.config.calibration.pwm_frequency_hz)?;

        if let Err(e) = self.configure_peripherals() {
            // The channel already runs; don't leak it on a failed setup.
            if let Err(stop_err) = servo.stop() {
                error!(error = %stop_err, "failed to release actuator after setup failure");
            }
            return Err(e);
        }

        Ok(ActuatorHandle::new(servo))
    }

    fn configure_peripherals(&mut self) -> Result<()> {
        self.gpio.configure_output(self.led_pin())?;
        self.gpio.configure_output(self.buzzer_pin())?;
        self.gpio.write(self.buzzer_pin(), Level::Low)?;
        Ok(())
    }

    async fn dispatch(
        &mut self,
        action: Action,
        actuator: &mut ActuatorHandle<G::Pwm>,
    ) -> Result<()> {
        info!(%action, "executing action");
        match action {
            Action::Lock => self.lock(actuator).await,
            Action::Unlock => self.unlock(actuator).await,
            Action::Buzz => self.buzz().await,
            Action::Toggle => self.toggle(actuator).await,
            Action::DelayedLock => self.delayed_lock(actuator).await,
            Action::BuzzAndUnlock => {
                self.buzz().await?;
                self.delayed_lock(actuator).await
            }
        }
    }

    /// Drive the bolt to the locked position, light the LED, wait for the
    /// servo to settle, then commit `locked = true`.
    async fn lock(&mut self, actuator: &mut ActuatorHandle<G::Pwm>) -> Result<()> {
        let calibration = &self.config.calibration;
        actuator.set_duty(calibration.locked_duty)?;
        self.gpio.write(self.led_pin(), Level::High)?;
        sleep(calibration.settle()).await;
        self.store.set_locked(true)?;
        info!("door locked");
        Ok(())
    }

    /// Drive the bolt to the unlocked position, darken the LED, wait for
    /// the servo to settle, then commit `locked = false`.
    async fn unlock(&mut self, actuator: &mut ActuatorHandle<G::Pwm>) -> Result<()> {
        let calibration = &self.config.calibration;
        actuator.set_duty(calibration.unlocked_duty)?;
        self.gpio.write(self.led_pin(), Level::Low)?;
        sleep(calibration.settle()).await;
        self.store.set_locked(false)?;
        info!("door unlocked");
        Ok(())
    }

    /// Sound the buzzer for the configured duration. The buzzer-low write
    /// is issued immediately after the hold, before anything else can run.
    async fn buzz(&mut self) -> Result<()> {
        self.gpio.write(self.buzzer_pin(), Level::High)?;
        sleep(self.config.calibration.buzz()).await;
        self.gpio.write(self.buzzer_pin(), Level::Low)?;
        debug!("buzz complete");
        Ok(())
    }

    /// Unlock if locked, lock otherwise. Absent persisted state counts as
    /// "not locked", so a first-run toggle locks the door.
    async fn toggle(&mut self, actuator: &mut ActuatorHandle<G::Pwm>) -> Result<()> {
        if self.store.is_locked()? {
            self.unlock(actuator).await
        } else {
            self.lock(actuator).await
        }
    }

    /// Unlock, blink the LED through the whole hold window, then lock.
    async fn delayed_lock(&mut self, actuator: &mut ActuatorHandle<G::Pwm>) -> Result<()> {
        self.unlock(actuator).await?;

        let calibration = &self.config.calibration;
        let interval = calibration.blink_interval();
        let hold = calibration.delayed_lock_hold();
        // Rounded so the blink window covers the whole hold even when the
        // interval does not evenly divide it. Validation guarantees
        // interval <= hold, so this is at least 1.
        let steps = (hold.as_secs_f64() / interval.as_secs_f64()).round() as u64;
        debug!(steps, "holding before re-lock");

        let mut level = Level::High;
        for _ in 0..steps {
            self.gpio.write(self.led_pin(), level)?;
            sleep(interval).await;
            level = !level;
        }

        self.lock(actuator).await
    }

    /// Release the actuator and settle the invocation's outcome.
    ///
    /// The LED and buzzer deliberately keep their last driven level: the
    /// LED must go on showing the lock state after the process exits, so
    /// there is no blanket pin reset here.
    fn teardown(
        &mut self,
        actuator: ActuatorHandle<G::Pwm>,
        outcome: Result<()>,
    ) -> Result<()> {
        let released = actuator.release();
        if self.phase == InvocationPhase::Executing {
            self.transition(InvocationPhase::TornDown)?;
        }
        debug!("actuator released");

        match (outcome, released) {
            (Ok(()), Ok(())) => Ok(()),
            (Ok(()), Err(stop_err)) => Err(stop_err.into()),
            (Err(action_err), Ok(())) => Err(action_err),
            (Err(action_err), Err(stop_err)) => {
                // The action's own failure is the one the caller needs.
                error!(error = %stop_err, "failed to release actuator");
                Err(action_err)
            }
        }
    }
}

/// Entry dispatcher: parse an action identifier and run it end to end.
///
/// An unrecognized identifier fails with
/// [`UnsupportedAction`](latchkey_core::Error::UnsupportedAction) before any
/// hardware is touched. Once setup has completed, teardown runs no matter
/// how the action body ends, and the body's error is propagated afterwards.
///
/// # Errors
///
/// See [`LockController::run`].
pub async fn execute<G: GpioDriver>(
    gpio: &mut G,
    store: &StateStore,
    config: &LockConfig,
    identifier: &str,
) -> Result<()> {
    let action: Action = identifier.parse().map_err(crate::ControllerError::from)?;
    LockController::new(gpio, store, config).run(action).await
}
