//! WebAssembly bindings for the mini6502 core.
//!
//! This module provides JavaScript-callable interfaces to the CPU, enabling
//! browser-based stepping through small programs.

pub mod api;

pub use api::Emulator6502;
