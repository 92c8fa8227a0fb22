// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Boot cycle supervision: waiting loop, mode dispatch, fault loop.
//!
//! The supervisor owns the decision FSM and the LED bank and talks to
//! the outside world through two traits: [`BootPlatform`] for GPIO,
//! time, sleeping and diagnostics, and [`ImageLoader`] for the terminal
//! load operations. Both loaders take over the core on success, so a
//! plain return is always a failure; the supervisor absorbs it into the
//! permanent fault state.

use core::convert::Infallible;

use crate::config::BootConfig;
use crate::fsm::{BootFsm, BootOutcome};
use crate::led::{Led, LedBank};

/// Hardware and scheduling services the boot cycle depends on.
pub trait BootPlatform {
    /// Raw button line state with polarity already resolved
    /// (true = pressed).
    fn button_is_active(&mut self) -> bool;

    /// Drive one LED line.
    fn set_led(&mut self, led: Led, on: bool);

    /// Monotonic, wrapping millisecond tick.
    fn now_ms(&mut self) -> u32;

    /// Cooperative delay, yielding to the rest of the system.
    fn sleep_ms(&mut self, ms: u32);

    /// Best-effort diagnostic output.
    fn log(&mut self, message: &str);
}

/// Terminal load operations. Success never returns control.
pub trait ImageLoader {
    /// Start the USB recovery/flashing mode.
    fn enter_recovery(&mut self) -> Result<Infallible, LoadError>;

    /// Load and start the resident application image.
    fn load_application(&mut self) -> Result<Infallible, LoadError>;
}

/// Status reported by a loader that failed to take over the core.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadError {
    /// Raw status code from the loader entry point.
    pub code: i32,
}

impl LoadError {
    pub const fn new(code: i32) -> Self {
        Self { code }
    }
}

/// The two ways a boot cycle can fail. Both are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BootFault {
    RecoveryLoadFailed,
    ApplicationLoadFailed,
}

/// Drives one complete boot cycle from reset to handoff or fault.
#[derive(Debug)]
pub struct Supervisor {
    fsm: BootFsm,
    leds: LedBank,
    config: BootConfig,
}

impl Supervisor {
    pub fn new(config: BootConfig) -> Self {
        Self {
            fsm: BootFsm::new(&config),
            leds: LedBank::new(),
            config,
        }
    }

    /// Run the boot cycle to its end state. A successful loader takes
    /// over the core; a failed one leaves the device in the fault loop
    /// until an external reset.
    pub fn run<P, L>(mut self, platform: &mut P, loader: &mut L) -> !
    where
        P: BootPlatform,
        L: ImageLoader,
    {
        let outcome = self.await_outcome(platform);
        let fault = self.dispatch(platform, loader, outcome);
        self.fault_loop(platform, fault)
    }

    /// Poll the button until either a debounced press or window expiry
    /// selects a boot path, blinking the waiting LED the whole time.
    pub fn await_outcome<P: BootPlatform>(&mut self, platform: &mut P) -> BootOutcome {
        loop {
            let now = platform.now_ms();

            let level = self.leds.waiting.toggle(now, self.config.waiting_blink_ms);
            platform.set_led(Led::Waiting, level);

            let active = platform.button_is_active();
            if let Some(outcome) = self.fsm.step(active, now) {
                return outcome;
            }

            platform.sleep_ms(self.config.poll_interval_ms);
        }
    }

    /// Enter the selected mode. Only comes back if the loader fails.
    pub fn dispatch<P, L>(
        &mut self,
        platform: &mut P,
        loader: &mut L,
        outcome: BootOutcome,
    ) -> BootFault
    where
        P: BootPlatform,
        L: ImageLoader,
    {
        match outcome {
            BootOutcome::EnterRecovery => {
                platform.log("user button pressed, entering recovery mode");
                let waiting = self.leds.waiting.set(false);
                platform.set_led(Led::Waiting, waiting);
                // Steady downloading LED acknowledges the press.
                let downloading = self.leds.downloading.set(true);
                platform.set_led(Led::Downloading, downloading);

                match loader.enter_recovery() {
                    Ok(never) => match never {},
                    Err(_) => BootFault::RecoveryLoadFailed,
                }
            }
            BootOutcome::LoadApplication => {
                platform.log("no button press, loading application image");
                let waiting = self.leds.waiting.set(false);
                platform.set_led(Led::Waiting, waiting);

                match loader.load_application() {
                    Ok(never) => match never {},
                    Err(_) => BootFault::ApplicationLoadFailed,
                }
            }
        }
    }

    /// One fault-loop iteration: assert the error indication, repeat the
    /// diagnostic, then sleep for the configured cadence.
    pub fn fault_step<P: BootPlatform>(&mut self, platform: &mut P, fault: BootFault) {
        let error = self.leds.error.set(true);
        platform.set_led(Led::Error, error);
        let downloading = self.leds.downloading.set(false);
        platform.set_led(Led::Downloading, downloading);

        match fault {
            BootFault::RecoveryLoadFailed => {
                platform.log("recovery mode failed to start, the flasher image needs re-flashing");
            }
            BootFault::ApplicationLoadFailed => {
                platform.log("application image failed to start, waiting for re-flash");
            }
        }
        platform.log("press reset, hold the user button, then run the flash script");

        platform.sleep_ms(self.config.fault_retry_ms);
    }

    /// Terminal fault state. Only an external reset leaves this loop.
    pub fn fault_loop<P: BootPlatform>(mut self, platform: &mut P, fault: BootFault) -> ! {
        loop {
            self.fault_step(platform, fault);
        }
    }
}
