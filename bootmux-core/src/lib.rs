// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Boot-mode selection logic for the bootmux bootloader.
//!
//! Everything here is pure state machine logic with no hardware
//! dependencies: the firmware feeds in raw button samples and tick
//! timestamps and drives the LED lines from the levels computed here.
//! That keeps the whole boot decision testable on the host.

#![no_std]

pub mod button;
pub mod config;
pub mod fsm;
pub mod led;
pub mod supervisor;

// Re-export commonly used types
pub use button::ButtonMonitor;
pub use config::BootConfig;
pub use fsm::{BootFsm, BootOutcome, DecisionWindow};
pub use led::{Led, LedBank, LedChannel};
pub use supervisor::{BootFault, BootPlatform, ImageLoader, LoadError, Supervisor};

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

/// Blink an LED a specified number of times.
pub fn blink(led: &mut impl OutputPin, delay: &mut impl DelayNs, count: u32, period_ms: u32) {
    for _ in 0..count {
        led.set_high().ok();
        delay.delay_ms(period_ms);
        led.set_low().ok();
        delay.delay_ms(period_ms);
    }
}
