// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Supervisor tests against a scripted platform and stub loaders.

use core::convert::Infallible;

use bootmux_core::{
    BootConfig, BootFault, BootOutcome, BootPlatform, ImageLoader, Led, LoadError, Supervisor,
};

/// Scripted platform: time advances only through `sleep_ms`, the button
/// is active inside one configured interval, and every side effect is
/// recorded for assertions.
struct ScriptedPlatform {
    now: u32,
    press: Option<(u32, u32)>,
    led_writes: Vec<(Led, bool)>,
    messages: Vec<String>,
    sleeps: Vec<u32>,
}

impl ScriptedPlatform {
    fn new() -> Self {
        Self {
            now: 0,
            press: None,
            led_writes: Vec::new(),
            messages: Vec::new(),
            sleeps: Vec::new(),
        }
    }

    fn with_press(from_ms: u32, until_ms: u32) -> Self {
        let mut platform = Self::new();
        platform.press = Some((from_ms, until_ms));
        platform
    }

    fn last_level(&self, led: Led) -> Option<bool> {
        self.led_writes
            .iter()
            .rev()
            .find(|(line, _)| *line == led)
            .map(|(_, on)| *on)
    }

    fn levels_of(&self, led: Led) -> Vec<bool> {
        self.led_writes
            .iter()
            .filter(|(line, _)| *line == led)
            .map(|(_, on)| *on)
            .collect()
    }
}

impl BootPlatform for ScriptedPlatform {
    fn button_is_active(&mut self) -> bool {
        matches!(self.press, Some((from, until)) if self.now >= from && self.now < until)
    }

    fn set_led(&mut self, led: Led, on: bool) {
        self.led_writes.push((led, on));
    }

    fn now_ms(&mut self) -> u32 {
        self.now
    }

    fn sleep_ms(&mut self, ms: u32) {
        self.sleeps.push(ms);
        self.now += ms;
    }

    fn log(&mut self, message: &str) {
        self.messages.push(message.to_owned());
    }
}

/// Loader stub that always fails with the given status codes.
struct FailingLoader {
    recovery_code: i32,
    application_code: i32,
    recovery_calls: u32,
    application_calls: u32,
}

impl FailingLoader {
    fn new() -> Self {
        Self {
            recovery_code: -1,
            application_code: -1,
            recovery_calls: 0,
            application_calls: 0,
        }
    }
}

impl ImageLoader for FailingLoader {
    fn enter_recovery(&mut self) -> Result<Infallible, LoadError> {
        self.recovery_calls += 1;
        Err(LoadError::new(self.recovery_code))
    }

    fn load_application(&mut self) -> Result<Infallible, LoadError> {
        self.application_calls += 1;
        Err(LoadError::new(self.application_code))
    }
}

// =============================================================================
// Waiting loop tests
// =============================================================================

#[test]
fn test_held_button_enters_recovery_before_window() {
    let mut platform = ScriptedPlatform::with_press(0, 250);
    let mut supervisor = Supervisor::new(BootConfig::new());

    let outcome = supervisor.await_outcome(&mut platform);

    assert_eq!(outcome, BootOutcome::EnterRecovery);
    assert_eq!(platform.now, 200, "press accepted at the debounce threshold");
}

#[test]
fn test_mid_window_press_enters_recovery() {
    let mut platform = ScriptedPlatform::with_press(1_000, 1_300);
    let mut supervisor = Supervisor::new(BootConfig::new());

    let outcome = supervisor.await_outcome(&mut platform);

    assert_eq!(outcome, BootOutcome::EnterRecovery);
    assert_eq!(platform.now, 1_200);
}

#[test]
fn test_silent_boot_expires_into_application_load() {
    let mut platform = ScriptedPlatform::new();
    let mut supervisor = Supervisor::new(BootConfig::new());

    let outcome = supervisor.await_outcome(&mut platform);

    assert_eq!(outcome, BootOutcome::LoadApplication);
    assert_eq!(platform.now, 5_000);
}

#[test]
fn test_waiting_led_blinks_while_window_is_open() {
    let mut platform = ScriptedPlatform::new();
    let mut supervisor = Supervisor::new(BootConfig::new());

    supervisor.await_outcome(&mut platform);

    let levels = platform.levels_of(Led::Waiting);
    assert!(levels[0], "waiting LED starts high");

    let changes = levels.windows(2).filter(|pair| pair[0] != pair[1]).count();
    // One flip per 201 ms across the five second window.
    assert_eq!(changes, 24);
}

#[test]
fn test_waiting_loop_sleeps_each_iteration() {
    let mut platform = ScriptedPlatform::new();
    let mut supervisor = Supervisor::new(BootConfig::new());

    supervisor.await_outcome(&mut platform);

    assert_eq!(platform.sleeps.len(), 5_000);
    assert!(platform.sleeps.iter().all(|&ms| ms == 1));
}

// =============================================================================
// Dispatch tests
// =============================================================================

#[test]
fn test_recovery_dispatch_applies_led_policy_before_loading() {
    let mut platform = ScriptedPlatform::with_press(0, 250);
    let mut loader = FailingLoader::new();
    let mut supervisor = Supervisor::new(BootConfig::new());

    let outcome = supervisor.await_outcome(&mut platform);
    let fault = supervisor.dispatch(&mut platform, &mut loader, outcome);

    assert_eq!(fault, BootFault::RecoveryLoadFailed);
    assert_eq!(loader.recovery_calls, 1);
    assert_eq!(loader.application_calls, 0);
    assert_eq!(platform.last_level(Led::Waiting), Some(false));
    assert_eq!(platform.last_level(Led::Downloading), Some(true));
    assert!(platform.messages.iter().any(|m| m.contains("recovery")));
}

#[test]
fn test_application_dispatch_turns_waiting_led_off() {
    let mut platform = ScriptedPlatform::new();
    let mut loader = FailingLoader::new();
    let mut supervisor = Supervisor::new(BootConfig::new());

    let outcome = supervisor.await_outcome(&mut platform);
    let fault = supervisor.dispatch(&mut platform, &mut loader, outcome);

    assert_eq!(fault, BootFault::ApplicationLoadFailed);
    assert_eq!(loader.application_calls, 1);
    assert_eq!(loader.recovery_calls, 0);
    assert_eq!(platform.last_level(Led::Waiting), Some(false));
    assert!(platform.messages.iter().any(|m| m.contains("application")));
}

#[test]
fn test_dispatch_invokes_exactly_one_loader() {
    for press in [None, Some((0, 250))] {
        let mut platform = ScriptedPlatform::new();
        platform.press = press;
        let mut loader = FailingLoader::new();
        let mut supervisor = Supervisor::new(BootConfig::new());

        let outcome = supervisor.await_outcome(&mut platform);
        supervisor.dispatch(&mut platform, &mut loader, outcome);

        assert_eq!(loader.recovery_calls + loader.application_calls, 1);
    }
}

// =============================================================================
// Fault loop tests
// =============================================================================

#[test]
fn test_fault_step_asserts_error_indication() {
    let mut platform = ScriptedPlatform::new();
    let mut loader = FailingLoader::new();
    let mut supervisor = Supervisor::new(BootConfig::new());

    let outcome = supervisor.await_outcome(&mut platform);
    let fault = supervisor.dispatch(&mut platform, &mut loader, outcome);

    supervisor.fault_step(&mut platform, fault);

    assert_eq!(platform.last_level(Led::Error), Some(true));
    assert_eq!(platform.last_level(Led::Downloading), Some(false));
    assert_eq!(platform.sleeps.last(), Some(&5_000));
}

#[test]
fn test_fault_loop_repeats_diagnostics_on_cadence() {
    let mut platform = ScriptedPlatform::new();
    let mut loader = FailingLoader::new();
    let mut supervisor = Supervisor::new(BootConfig::new());

    let outcome = supervisor.await_outcome(&mut platform);
    let fault = supervisor.dispatch(&mut platform, &mut loader, outcome);

    let logged_before = platform.messages.len();
    for _ in 0..3 {
        supervisor.fault_step(&mut platform, fault);
    }

    // Two diagnostic lines per iteration, one 5 s sleep each.
    assert_eq!(platform.messages.len(), logged_before + 6);
    assert_eq!(
        platform.sleeps.iter().filter(|&&ms| ms == 5_000).count(),
        3
    );
    assert!(platform
        .messages
        .iter()
        .any(|m| m.contains("failed to start")));
}

#[test]
fn test_fault_state_is_absorbing() {
    // A press during the fault loop must not start a new decision cycle
    // or reach a loader again.
    let mut platform = ScriptedPlatform::new();
    let mut loader = FailingLoader::new();
    let mut supervisor = Supervisor::new(BootConfig::new());

    let outcome = supervisor.await_outcome(&mut platform);
    let fault = supervisor.dispatch(&mut platform, &mut loader, outcome);

    platform.press = Some((platform.now, u32::MAX));
    for _ in 0..5 {
        supervisor.fault_step(&mut platform, fault);
        assert_eq!(platform.last_level(Led::Error), Some(true));
    }

    assert_eq!(loader.application_calls, 1);
    assert_eq!(loader.recovery_calls, 0);
}

#[test]
fn test_recovery_failure_uses_its_own_diagnostic() {
    let mut platform = ScriptedPlatform::with_press(0, 300);
    let mut loader = FailingLoader::new();
    let mut supervisor = Supervisor::new(BootConfig::new());

    let outcome = supervisor.await_outcome(&mut platform);
    let fault = supervisor.dispatch(&mut platform, &mut loader, outcome);
    supervisor.fault_step(&mut platform, fault);

    assert_eq!(fault, BootFault::RecoveryLoadFailed);
    assert!(platform
        .messages
        .iter()
        .any(|m| m.contains("re-flashing")));
}
