// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! [`BootPlatform`] implementation over the RP2040 pins and timer.

use bootmux_core::{BootPlatform, Led};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use crate::peripherals::Peripherals;

pub struct Board {
    p: Peripherals,
}

impl Board {
    pub fn new(p: Peripherals) -> Self {
        Self { p }
    }
}

fn drive(pin: &mut impl OutputPin, on: bool) {
    if on {
        pin.set_high().ok();
    } else {
        pin.set_low().ok();
    }
}

impl BootPlatform for Board {
    fn button_is_active(&mut self) -> bool {
        // Active low: pressing the button shorts the line to ground.
        self.p.button.is_low().unwrap_or(false)
    }

    fn set_led(&mut self, led: Led, on: bool) {
        match led {
            Led::Waiting => drive(&mut self.p.waiting_led, on),
            Led::Downloading => drive(&mut self.p.downloading_led, on),
            Led::Error => drive(&mut self.p.error_led, on),
        }
    }

    fn now_ms(&mut self) -> u32 {
        (self.p.timer.get_counter().ticks() / 1_000) as u32
    }

    fn sleep_ms(&mut self, ms: u32) {
        self.p.timer.delay_ms(ms);
    }

    fn log(&mut self, message: &str) {
        defmt::println!("{=str}", message);
    }
}
