// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Boot selection tunables.

/// Minimum continuous press duration before a press is accepted.
pub const DEBOUNCE_MS: u32 = 200;
/// How long to wait for a press before loading the application.
pub const DECISION_WINDOW_MS: u32 = 5_000;
/// Cooperative sleep between polling iterations.
pub const POLL_INTERVAL_MS: u32 = 1;
/// Waiting LED toggle period while the decision window is open.
pub const WAITING_BLINK_MS: u32 = 200;
/// Delay between diagnostic repeats in the fault loop.
pub const FAULT_RETRY_MS: u32 = 5_000;

/// Timing configuration for one boot cycle, all fields in milliseconds.
///
/// The decision window is configured in milliseconds but enforced as a
/// loop-iteration count derived from the poll interval, so the two time
/// units stay explicit rather than conflated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BootConfig {
    pub debounce_ms: u32,
    pub decision_window_ms: u32,
    pub poll_interval_ms: u32,
    pub waiting_blink_ms: u32,
    pub fault_retry_ms: u32,
}

impl BootConfig {
    pub const fn new() -> Self {
        Self {
            debounce_ms: DEBOUNCE_MS,
            decision_window_ms: DECISION_WINDOW_MS,
            poll_interval_ms: POLL_INTERVAL_MS,
            waiting_blink_ms: WAITING_BLINK_MS,
            fault_retry_ms: FAULT_RETRY_MS,
        }
    }

    /// Decision window expressed in polling iterations.
    ///
    /// A zero poll interval is treated as 1 ms so the window stays finite.
    pub const fn window_iterations(&self) -> u32 {
        let poll = if self.poll_interval_ms == 0 {
            1
        } else {
            self.poll_interval_ms
        };
        self.decision_window_ms / poll
    }
}

impl Default for BootConfig {
    fn default() -> Self {
        Self::new()
    }
}
