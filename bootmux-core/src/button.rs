// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! User button debouncing.

/// Debounced press detection for the user button.
///
/// The button is sampled once per polling iteration. A press is accepted
/// only after the raw line has stayed active for a continuous minimum
/// duration; once accepted it stays latched, since the boot decision is
/// irrevocable within one cycle.
#[derive(Clone, Copy, Debug)]
pub struct ButtonMonitor {
    debounce_ms: u32,
    press_start_ms: Option<u32>,
    latched: bool,
}

impl ButtonMonitor {
    pub const fn new(debounce_ms: u32) -> Self {
        Self {
            debounce_ms,
            press_start_ms: None,
            latched: false,
        }
    }

    /// Feed one raw sample. Returns the debounced pressed state.
    ///
    /// Tick arithmetic is wrapping, so a timer rollover between the press
    /// start and `now_ms` still yields the right elapsed time.
    pub fn sample(&mut self, active: bool, now_ms: u32) -> bool {
        if self.latched {
            return true;
        }

        if active {
            let start = *self.press_start_ms.get_or_insert(now_ms);
            if now_ms.wrapping_sub(start) >= self.debounce_ms {
                self.latched = true;
            }
        } else {
            // A release below the threshold restarts the measurement;
            // separate short blips must not add up to a press.
            self.press_start_ms = None;
        }

        self.latched
    }

    /// Whether a debounced press has been latched this boot cycle.
    pub fn is_latched(&self) -> bool {
        self.latched
    }
}
