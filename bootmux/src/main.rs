// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Bootmux: boot-mode selector with button-triggered USB recovery.
//!
//! On reset the selector waits a bounded window for the user button. A
//! debounced press hands the core to the USB flasher; expiry hands it to
//! the resident application. If either loader comes back, the device
//! parks in a permanent fault indication until reset.

#![no_std]
#![no_main]

mod board;
mod loaders;
mod peripherals;

use bootmux_core::{BootConfig, Supervisor};
use defmt_rtt as _;
use panic_probe as _;

defmt::timestamp!("{=u64:us}", { 0 });

use cortex_m_rt::entry;

#[unsafe(link_section = ".boot2")]
#[used]
pub static BOOT2: [u8; 256] = rp2040_boot2::BOOT_LOADER_GENERIC_03H;

#[entry]
fn main() -> ! {
    defmt::println!("Bootmux init");

    let mut p = peripherals::init();

    bootmux_core::blink(&mut p.waiting_led, &mut p.timer, 3, 100);

    let config = BootConfig::new();
    defmt::println!(
        "Waiting {}ms for the user button (debounce {}ms)",
        config.decision_window_ms,
        config.debounce_ms
    );

    let mut board = board::Board::new(p);
    Supervisor::new(config).run(&mut board, &mut loaders::SdkLoader)
}
