// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Bindings to the platform SDK's image loaders.
//!
//! Both entry points hand the core over to the loaded image and never
//! return on success; a return value is a failure report.

use core::convert::Infallible;
use core::ffi::c_int;

use bootmux_core::{ImageLoader, LoadError};

unsafe extern "C" {
    /// USB flasher entry point provided by the platform SDK.
    fn load_usb_flasher() -> c_int;
    /// Application image loader provided by the platform SDK.
    fn load_m4app() -> c_int;
}

pub struct SdkLoader;

impl ImageLoader for SdkLoader {
    fn enter_recovery(&mut self) -> Result<Infallible, LoadError> {
        let code = unsafe { load_usb_flasher() };
        Err(LoadError::new(code))
    }

    fn load_application(&mut self) -> Result<Infallible, LoadError> {
        let code = unsafe { load_m4app() };
        Err(LoadError::new(code))
    }
}
