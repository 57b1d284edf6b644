//! LS-8 emulator library.
//!
//! Provides the LS-8 virtual machine core plus logging utilities.

pub mod emulator;
pub mod utils;
