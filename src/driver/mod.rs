//! Core W5500 bring-up components.
//!
//! The essential building blocks for putting a W5500 on the air:
//!
//! - [`config`] - Configuration types and builder patterns
//! - [`error`] - Error types and result aliases
//! - [`timing`] - Chip-select hold time calculation
//! - [`spi`] - SPI device descriptor and acquisition
//! - [`eth`] - The controller facade
//!
//! # Example
//!
//! ```ignore
//! use ph_esp32_w5500::driver::{EthConfig, SpiHost, SpiPins, W5500Eth};
//!
//! let config = EthConfig::new(SpiHost::Spi3, SpiPins::new(19, 23, 18, 5, 4))
//!     .with_clock_mhz(16);
//! ```

// Submodules
pub mod config;
pub mod error;
pub mod eth;
pub mod spi;
pub mod timing;

pub(crate) mod factory;

// Re-exports for convenience
pub use config::{
    DEFAULT_FALLBACK_MAC, DEFAULT_SPI_CLOCK_MHZ, Duplex, EthConfig, LinkState, SPI_CLOCK_MAX_MHZ,
    SPI_CLOCK_MIN_MHZ, Speed, SpiHost, SpiPins, State,
};
pub use error::{
    BringUpError, BringUpResult, ConfigError, ConfigResult, Error, NetError, NetResult, Result,
    SpiError, SpiResult,
};
pub use eth::{MacAddr, W5500Eth};
pub use spi::SpiDeviceConfig;
pub use timing::{CS_HOLD_CLOCK_MAX_MHZ, CS_HOLD_TIME_MIN_NS, cs_hold_cycles};
