//! Board-specific helpers and pin mappings.
//!
//! Opinionated wiring defaults for common W5500 shield hookups, to
//! reduce boilerplate in bring-up code.
//!
//! # Supported Boards
//!
//! - ESP32 dev board + W5500 shield on VSPI (the classic wiring)

pub mod esp32_w5500;
