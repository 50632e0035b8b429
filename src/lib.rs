//! ESP32 W5500 Ethernet Bring-Up
//!
//! A `no_std`, `no_alloc` Rust implementation of bring-up and link
//! supervision for the WIZnet W5500 SPI Ethernet controller on ESP32.
//!
//! This crate owns the sequencing that gets a W5500 from powered
//! silicon to a running network interface, and the event plumbing that
//! tracks the link afterwards. The platform specifics (SPI master,
//! driver install, IP stack) sit behind traits, so the sequencing and
//! its failure unwinding are testable on the host.
//!
//! # Architecture
//!
//! 1. **Driver Layer** ([`driver`]): Timing math, SPI device
//!    acquisition, MAC/PHY composition, and the [`W5500Eth`] facade
//! 2. **HAL Layer** ([`hal`]): Platform traits for the SPI master and
//!    the Ethernet driver lifecycle
//! 3. **Net Layer** ([`net`]): IP stack adapter trait and subnet
//!    arithmetic
//! 4. **Event Layer** ([`event`]): Lifecycle event queue, supervisor,
//!    and the connectivity flag
//!
//! # Features
//!
//! - `defmt`: Enable defmt logging and formatting for crate types
//! - `async`: Enable the awaitable connectivity wait
//!
//! # Example
//!
//! ```ignore
//! use ph_esp32_w5500::{ConnectivityFlag, Supervisor, W5500Eth};
//! use ph_esp32_w5500::boards::esp32_w5500::Esp32W5500;
//!
//! static CONNECTED: ConnectivityFlag = ConnectivityFlag::new();
//!
//! // Platform adapters (SPI master + IP stack) for your target.
//! let mut eth = W5500Eth::new(hal, stack);
//! eth.begin(&Esp32W5500::eth_config(), &mut delay)?;
//!
//! // Static addressing; pass unspecified addresses for DHCP.
//! eth.config(
//!     "192.168.1.50".parse()?,
//!     "192.168.1.1".parse()?,
//!     "255.255.255.0".parse()?,
//!     "1.1.1.1".parse()?,
//!     "8.8.8.8".parse()?,
//! )?;
//!
//! // Drive the supervisor from the platform's event stream, then:
//! CONNECTED.wait_for_connect(&mut delay);
//! ```

#![no_std]
#![deny(missing_docs)]
#![allow(unsafe_code)]
#![deny(unsafe_op_in_unsafe_fn)]
// Clippy lint levels live here; thresholds and config are in clippy.toml.
#![deny(clippy::correctness)]
#![warn(
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::cloned_instead_of_copied,
    clippy::explicit_iter_loop,
    clippy::implicit_clone,
    clippy::inconsistent_struct_constructor,
    clippy::manual_assert,
    clippy::manual_let_else,
    clippy::match_same_arms,
    clippy::needless_pass_by_value,
    clippy::semicolon_if_nothing_returned,
    clippy::uninlined_format_args,
    clippy::unnested_or_patterns,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]
#![allow(
    clippy::mod_module_files,
    clippy::self_named_module_files,
    clippy::similar_names,
    clippy::struct_excessive_bools,
    clippy::fn_params_excessive_bools,
    clippy::must_use_candidate,
    clippy::cast_possible_truncation,
    clippy::module_name_repetitions,
    clippy::items_after_statements
)]

// =============================================================================
// Modules
// =============================================================================

pub mod boards;
pub mod driver;
pub mod event;
pub mod hal;
pub mod net;
pub mod sync;

// Test utilities (only available during testing)
#[cfg(test)]
pub mod testing;

// =============================================================================
// Re-exports
// =============================================================================

pub use driver::config::{
    DEFAULT_FALLBACK_MAC, DEFAULT_HOSTNAME, DEFAULT_SETTLE_DELAY_MS, DEFAULT_SPI_CLOCK_MHZ, Duplex,
    EthConfig, LinkState, SPI_CLOCK_MAX_MHZ, SPI_CLOCK_MIN_MHZ, Speed, SpiHost, SpiPins, State,
};
pub use driver::error::{
    BringUpError, BringUpResult, ConfigError, ConfigResult, Error, NetError, NetResult, Result,
    SpiError, SpiResult,
};
pub use driver::eth::{MacAddr, W5500Eth};
pub use driver::spi::SpiDeviceConfig;
pub use driver::timing::{CS_HOLD_CLOCK_MAX_MHZ, CS_HOLD_TIME_MIN_NS, cs_hold_cycles};

pub use hal::{EthHal, MacConfig, PhyConfig, SpiHal};

pub use net::stack::{DhcpChange, IpInfo, NetStack};

pub use event::{CONNECT_POLL_INTERVAL_MS, ConnectivityFlag, EventQueue, LinkEvent, Supervisor};
