//! Platform Abstraction Layer
//!
//! The W5500 bring-up sequence leans on three platform capabilities that
//! this crate does not implement itself: the SPI master peripheral, the
//! generic Ethernet driver-install machinery, and the IP stack. The
//! first two live here as traits; the IP stack adapter lives in
//! [`net::stack`](crate::net::stack).
//!
//! # Modules
//!
//! - [`spi`]: SPI bus/device acquisition ([`SpiHal`])
//! - [`eth`]: MAC/PHY construction and driver lifecycle ([`EthHal`])
//!
//! Implementations wrap the target platform's primitives (on ESP32,
//! `spi_bus_initialize`/`spi_bus_add_device` and the `esp_eth` driver
//! entry points). Host tests use recording mocks instead.

pub mod eth;
pub mod spi;

pub use eth::{EthHal, MacConfig, PhyConfig};
pub use spi::SpiHal;
