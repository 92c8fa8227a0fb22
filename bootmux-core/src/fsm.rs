// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Boot mode decision FSM - pure logic without hardware dependencies.
//!
//! This module combines the debounced button state with the bounded
//! decision window and produces the single, irrevocable outcome for this
//! boot cycle. The firmware loop feeds in raw samples and timestamps;
//! nothing here touches GPIO or the scheduler.

use crate::button::ButtonMonitor;
use crate::config::BootConfig;

/// Which terminal boot path was chosen. Decided at most once per cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BootOutcome {
    /// A debounced button press selects the USB recovery/flashing path.
    EnterRecovery,
    /// The window elapsed without a press; load the resident application.
    LoadApplication,
}

/// Bounded wait for a button press, counted in polling iterations.
#[derive(Clone, Copy, Debug)]
pub struct DecisionWindow {
    elapsed: u32,
    threshold: u32,
}

impl DecisionWindow {
    pub const fn new(threshold: u32) -> Self {
        Self {
            elapsed: 0,
            threshold,
        }
    }

    /// Account for one polling iteration. Returns true once the window
    /// has expired; the caller must stop ticking after that.
    pub fn tick(&mut self) -> bool {
        self.elapsed = self.elapsed.saturating_add(1);
        self.elapsed > self.threshold
    }

    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }
}

/// The boot mode decision machine.
///
/// `step` is called once per polling iteration. The button is evaluated
/// before the window, so if a press latches on the same iteration the
/// window would expire, recovery wins.
#[derive(Clone, Copy, Debug)]
pub struct BootFsm {
    button: ButtonMonitor,
    window: DecisionWindow,
    decided: Option<BootOutcome>,
}

impl BootFsm {
    pub fn new(config: &BootConfig) -> Self {
        Self {
            button: ButtonMonitor::new(config.debounce_ms),
            window: DecisionWindow::new(config.window_iterations()),
            decided: None,
        }
    }

    /// Feed one button sample and advance the decision window.
    ///
    /// Once an outcome has been produced it is latched; further calls
    /// return the same outcome without re-evaluating either input.
    pub fn step(&mut self, button_active: bool, now_ms: u32) -> Option<BootOutcome> {
        if self.decided.is_some() {
            return self.decided;
        }

        if self.button.sample(button_active, now_ms) {
            self.decided = Some(BootOutcome::EnterRecovery);
        } else if self.window.tick() {
            self.decided = Some(BootOutcome::LoadApplication);
        }

        self.decided
    }

    /// The latched outcome, if the machine has decided.
    pub fn outcome(&self) -> Option<BootOutcome> {
        self.decided
    }
}
