// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Peripheral initialization and pin assignment.

use rp2040_hal as hal;

pub type ButtonPin =
    hal::gpio::Pin<hal::gpio::bank0::Gpio2, hal::gpio::FunctionSioInput, hal::gpio::PullUp>;
pub type WaitingLedPin =
    hal::gpio::Pin<hal::gpio::bank0::Gpio25, hal::gpio::FunctionSioOutput, hal::gpio::PullDown>;
pub type DownloadingLedPin =
    hal::gpio::Pin<hal::gpio::bank0::Gpio16, hal::gpio::FunctionSioOutput, hal::gpio::PullDown>;
pub type ErrorLedPin =
    hal::gpio::Pin<hal::gpio::bank0::Gpio17, hal::gpio::FunctionSioOutput, hal::gpio::PullDown>;

pub struct Peripherals {
    pub button: ButtonPin,
    pub waiting_led: WaitingLedPin,
    pub downloading_led: DownloadingLedPin,
    pub error_led: ErrorLedPin,
    pub timer: hal::Timer,
}

pub fn init() -> Peripherals {
    let mut pac = unsafe { hal::pac::Peripherals::steal() };

    let mut watchdog = hal::Watchdog::new(pac.WATCHDOG);
    let clocks = hal::clocks::init_clocks_and_plls(
        12_000_000u32,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .unwrap();

    let timer = hal::Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);
    let sio = hal::Sio::new(pac.SIO);
    let pins = hal::gpio::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    Peripherals {
        button: pins.gpio2.into_pull_up_input(),
        waiting_led: pins.gpio25.into_push_pull_output(),
        downloading_led: pins.gpio16.into_push_pull_output(),
        error_led: pins.gpio17.into_push_pull_output(),
        timer,
    }
}
