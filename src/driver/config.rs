//! Configuration types for W5500 bring-up

use super::error::{ConfigError, ConfigResult};

// =============================================================================
// Defaults
// =============================================================================

/// Lowest SPI clock the driver accepts, in MHz.
///
/// Below this the interrupt-driven receive path cannot keep up with a
/// saturated 100 Mbps link.
pub const SPI_CLOCK_MIN_MHZ: u32 = 14;

/// Highest SPI clock the driver accepts, in MHz.
///
/// This is the upper end of the range for which the chip-select hold
/// computation is defined; see [`timing`](super::timing).
pub const SPI_CLOCK_MAX_MHZ: u32 = 20;

/// Default SPI clock in MHz.
pub const DEFAULT_SPI_CLOCK_MHZ: u32 = 20;

/// Default fallback MAC address (locally administered).
///
/// Used only when the platform exposes no factory-programmed address.
pub const DEFAULT_FALLBACK_MAC: [u8; 6] = [0x02, 0x00, 0x00, 0x00, 0x00, 0x01];

/// Default hostname assigned to the interface on the `Started` event.
pub const DEFAULT_HOSTNAME: &str = "esp32-w5500";

/// Default settling delay after driver start, in milliseconds.
///
/// Lets the DHCP client enter a stable state before `begin` returns.
pub const DEFAULT_SETTLE_DELAY_MS: u32 = 50;

/// Default receive task priority (low).
pub const DEFAULT_RX_TASK_PRIORITY: u8 = 1;

// =============================================================================
// Link Enums
// =============================================================================

/// Ethernet link speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Speed {
    /// 10 Mbps
    Mbps10,
    /// 100 Mbps
    #[default]
    Mbps100,
}

impl Speed {
    /// Speed in Mbps, for logging and telemetry.
    #[must_use]
    pub const fn mbps(self) -> u32 {
        match self {
            Speed::Mbps10 => 10,
            Speed::Mbps100 => 100,
        }
    }
}

/// Ethernet duplex mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Duplex {
    /// Half duplex
    Half,
    /// Full duplex
    #[default]
    Full,
}

/// Physical link state, distinct from IP address acquisition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkState {
    /// No carrier
    #[default]
    Down,
    /// Carrier present
    Up,
}

/// Facade lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// `begin` has not run
    #[default]
    Uninitialized,
    /// Resources acquired, driver installed but not started
    Initialized,
    /// Driver started
    Running,
    /// Driver stopped but resources still held
    Stopped,
}

// =============================================================================
// SPI Host and Pins
// =============================================================================

/// SPI host peripheral selector
///
/// The two general-purpose SPI hosts on ESP32-class parts; the W5500
/// is conventionally wired to the third host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpiHost {
    /// HSPI / SPI2
    Spi2,
    /// VSPI / SPI3
    #[default]
    Spi3,
}

/// GPIO assignments for the W5500 wiring
///
/// The quad write-protect and quad hold lines of the bus are left
/// unassigned; the W5500 is a plain single-line SPI peripheral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpiPins {
    /// Data in (controller <- W5500 MISO)
    pub miso: u8,
    /// Data out (controller -> W5500 MOSI)
    pub mosi: u8,
    /// Serial clock
    pub sclk: u8,
    /// Chip select
    pub cs: u8,
    /// W5500 interrupt line
    pub int: u8,
}

impl SpiPins {
    /// Create a pin assignment.
    #[must_use]
    pub const fn new(miso: u8, mosi: u8, sclk: u8, cs: u8, int: u8) -> Self {
        Self {
            miso,
            mosi,
            sclk,
            cs,
            int,
        }
    }
}

// =============================================================================
// Bring-Up Configuration
// =============================================================================

/// Complete bring-up configuration for [`W5500Eth::begin`]
///
/// [`W5500Eth::begin`]: crate::W5500Eth::begin
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EthConfig {
    /// SPI host the W5500 is wired to
    pub host: SpiHost,
    /// GPIO assignments
    pub pins: SpiPins,
    /// SPI clock in MHz (valid 14..=20)
    pub clock_mhz: u32,
    /// MAC address used when no factory-programmed address exists
    pub fallback_mac: [u8; 6],
    /// Hostname assigned on the `Started` event
    pub hostname: &'static str,
    /// Receive task priority handed to the MAC driver
    pub rx_task_priority: u8,
    /// Delay after driver start before `begin` returns, in ms
    pub settle_delay_ms: u32,
}

impl EthConfig {
    /// Create a configuration with the given pin assignment and defaults
    /// for everything else.
    #[must_use]
    pub const fn new(host: SpiHost, pins: SpiPins) -> Self {
        Self {
            host,
            pins,
            clock_mhz: DEFAULT_SPI_CLOCK_MHZ,
            fallback_mac: DEFAULT_FALLBACK_MAC,
            hostname: DEFAULT_HOSTNAME,
            rx_task_priority: DEFAULT_RX_TASK_PRIORITY,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
        }
    }

    // =========================================================================
    // Builder Methods
    // =========================================================================

    /// Set the SPI clock frequency in MHz
    #[must_use]
    pub const fn with_clock_mhz(mut self, clock_mhz: u32) -> Self {
        self.clock_mhz = clock_mhz;
        self
    }

    /// Set the fallback MAC address
    #[must_use]
    pub const fn with_fallback_mac(mut self, mac: [u8; 6]) -> Self {
        self.fallback_mac = mac;
        self
    }

    /// Set the hostname assigned on the `Started` event
    #[must_use]
    pub const fn with_hostname(mut self, hostname: &'static str) -> Self {
        self.hostname = hostname;
        self
    }

    /// Set the receive task priority
    #[must_use]
    pub const fn with_rx_task_priority(mut self, priority: u8) -> Self {
        self.rx_task_priority = priority;
        self
    }

    /// Set the post-start settling delay in milliseconds
    #[must_use]
    pub const fn with_settle_delay_ms(mut self, ms: u32) -> Self {
        self.settle_delay_ms = ms;
        self
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Validate operating parameters.
    ///
    /// Rejects a clock outside 14..=20 MHz before any SPI traffic is
    /// issued: running the bus outside that range would silently
    /// violate the chip's electrical timing and corrupt frames rather
    /// than fail cleanly.
    ///
    /// # Errors
    ///
    /// `ClockOutOfRange` if `clock_mhz` is outside the documented range.
    pub const fn validate(&self) -> ConfigResult<()> {
        if self.clock_mhz < SPI_CLOCK_MIN_MHZ || self.clock_mhz > SPI_CLOCK_MAX_MHZ {
            return Err(ConfigError::ClockOutOfRange);
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
