// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Indicator LED state.
//!
//! Each channel tracks its own level and the time of its last blink
//! flip; the firmware performs the actual hardware write from the level
//! returned here, once per polling iteration.

/// The three indicator channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Led {
    /// Blinks while the decision window is open.
    Waiting,
    /// Steady on while the recovery flasher is active.
    Downloading,
    /// Steady on in the fault state.
    Error,
}

/// One LED line: current level plus the time of the last blink flip.
#[derive(Clone, Copy, Debug)]
pub struct LedChannel {
    level: bool,
    last_toggle_ms: u32,
}

impl LedChannel {
    pub const fn new(initial: bool) -> Self {
        Self {
            level: initial,
            last_toggle_ms: 0,
        }
    }

    /// Steady write. Returns the level to drive onto the line.
    pub fn set(&mut self, level: bool) -> bool {
        self.level = level;
        self.level
    }

    /// Blink driver, called once per polling iteration.
    ///
    /// Re-asserts the current level on every call and flips it once more
    /// than `period_ms` has passed since the previous flip, so the line
    /// blinks at the configured period no matter how often this runs.
    pub fn toggle(&mut self, now_ms: u32, period_ms: u32) -> bool {
        let level = self.level;
        if now_ms.wrapping_sub(self.last_toggle_ms) > period_ms {
            self.last_toggle_ms = now_ms;
            self.level = !self.level;
        }
        level
    }

    pub fn level(&self) -> bool {
        self.level
    }
}

/// All three channels with the power-on policy applied.
///
/// The waiting channel starts high so the first blink phase is visible
/// immediately after reset; the other channels start dark.
#[derive(Clone, Copy, Debug)]
pub struct LedBank {
    pub waiting: LedChannel,
    pub downloading: LedChannel,
    pub error: LedChannel,
}

impl LedBank {
    pub const fn new() -> Self {
        Self {
            waiting: LedChannel::new(true),
            downloading: LedChannel::new(false),
            error: LedChannel::new(false),
        }
    }
}

impl Default for LedBank {
    fn default() -> Self {
        Self::new()
    }
}
