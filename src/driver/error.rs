//! Error types for W5500 bring-up and supervision
//!
//! Errors are organized by domain for better diagnostics:
//! - [`ConfigError`]: Invalid operating parameters, lifecycle misuse
//! - [`SpiError`]: SPI bus/device resource acquisition failures
//! - [`BringUpError`]: MAC/PHY/driver construction and start failures
//! - [`NetError`]: IP stack configuration rejections
//!
//! The unified [`Error`] enum wraps all domain errors and is returned
//! by the facade methods.
//!
//! No error here triggers an automatic retry; bring-up is all-or-nothing
//! and the caller may re-invoke it wholesale after a failure.

// =============================================================================
// Configuration Errors
// =============================================================================

/// Configuration and lifecycle errors
///
/// These errors are caller bugs or misuse, detected before any SPI
/// traffic is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// SPI clock frequency outside the supported 14..=20 MHz range
    ClockOutOfRange,
    /// Bring-up already completed; call `teardown` first
    AlreadyInitialized,
    /// Operation requires a completed bring-up
    NotInitialized,
    /// Invalid configuration parameter
    InvalidConfig,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ConfigError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ConfigError::ClockOutOfRange => "SPI clock outside 14..=20 MHz",
            ConfigError::AlreadyInitialized => "already initialized",
            ConfigError::NotInitialized => "not initialized",
            ConfigError::InvalidConfig => "invalid configuration",
        }
    }
}

// =============================================================================
// SPI Resource Errors
// =============================================================================

/// SPI bus/device resource acquisition errors
///
/// Each bring-up stage reports a distinct failure so the caller can
/// tell a pin conflict from queue exhaustion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpiError {
    /// GPIO interrupt dispatch service could not be installed
    IsrServiceUnavailable,
    /// SPI bus initialization failed (pin conflict, host in use)
    BusInitFailed,
    /// Logical device could not be attached to the bus
    DeviceAttachFailed,
}

impl core::fmt::Display for SpiError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl SpiError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            SpiError::IsrServiceUnavailable => "interrupt service unavailable",
            SpiError::BusInitFailed => "SPI bus initialization failed",
            SpiError::DeviceAttachFailed => "SPI device attach failed",
        }
    }
}

// =============================================================================
// Bring-Up Errors
// =============================================================================

/// MAC/PHY/driver construction and start errors
///
/// These occur after the SPI device exists. Whichever stage fails,
/// the facade releases every handle constructed before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BringUpError {
    /// MAC driver construction failed
    MacInitFailed,
    /// PHY driver construction failed
    PhyInitFailed,
    /// Composed Ethernet driver could not be installed
    DriverInstallFailed,
    /// Hardware MAC address was rejected by the driver
    MacAddressRejected,
    /// Driver could not be attached to the network interface
    AttachFailed,
    /// Driver refused to start
    StartFailed,
}

impl core::fmt::Display for BringUpError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl BringUpError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            BringUpError::MacInitFailed => "MAC construction failed",
            BringUpError::PhyInitFailed => "PHY construction failed",
            BringUpError::DriverInstallFailed => "driver install failed",
            BringUpError::MacAddressRejected => "MAC address rejected",
            BringUpError::AttachFailed => "netif attach failed",
            BringUpError::StartFailed => "driver start failed",
        }
    }
}

// =============================================================================
// Network Stack Errors
// =============================================================================

/// IP stack configuration rejections
///
/// Returned when the underlying stack refuses a static/DHCP transition
/// or a hostname/IPv6 request. "Already in the target state" DHCP
/// answers are tolerated by the facade and never reach the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NetError {
    /// DHCP client could not be stopped
    DhcpStopRejected,
    /// DHCP client could not be started
    DhcpStartRejected,
    /// Static IP info was rejected
    IpInfoRejected,
    /// Hostname was rejected
    HostnameRejected,
    /// IPv6 link-local address could not be created
    Ipv6Unavailable,
}

impl core::fmt::Display for NetError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl NetError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            NetError::DhcpStopRejected => "DHCP stop rejected",
            NetError::DhcpStartRejected => "DHCP start rejected",
            NetError::IpInfoRejected => "IP info rejected",
            NetError::HostnameRejected => "hostname rejected",
            NetError::Ipv6Unavailable => "IPv6 unavailable",
        }
    }
}

// =============================================================================
// Unified Error Type
// =============================================================================

/// This enum wraps all domain-specific errors for unified error handling.
///
/// Match on the inner domain error for specific handling:
/// ```ignore
/// match result {
///     Err(Error::Config(ConfigError::ClockOutOfRange)) => { /* ... */ }
///     Err(Error::Spi(SpiError::BusInitFailed)) => { /* ... */ }
///     Err(Error::BringUp(BringUpError::PhyInitFailed)) => { /* ... */ }
///     _ => {}
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Configuration error
    Config(ConfigError),
    /// SPI resource error
    Spi(SpiError),
    /// MAC/PHY/driver bring-up error
    BringUp(BringUpError),
    /// Network stack error
    Net(NetError),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Config(e) => write!(f, "config: {}", e.as_str()),
            Error::Spi(e) => write!(f, "spi: {}", e.as_str()),
            Error::BringUp(e) => write!(f, "bringup: {}", e.as_str()),
            Error::Net(e) => write!(f, "net: {}", e.as_str()),
        }
    }
}

// From impls for automatic conversion
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<SpiError> for Error {
    fn from(e: SpiError) -> Self {
        Error::Spi(e)
    }
}

impl From<BringUpError> for Error {
    fn from(e: BringUpError) -> Self {
        Error::BringUp(e)
    }
}

impl From<NetError> for Error {
    fn from(e: NetError) -> Self {
        Error::Net(e)
    }
}

/// Result type alias for facade operations
pub type Result<T> = core::result::Result<T, Error>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = core::result::Result<T, ConfigError>;

/// Result type alias for SPI resource operations
pub type SpiResult<T> = core::result::Result<T, SpiError>;

/// Result type alias for bring-up operations
pub type BringUpResult<T> = core::result::Result<T, BringUpError>;

/// Result type alias for network stack operations
pub type NetResult<T> = core::result::Result<T, NetError>;

// =============================================================================
// Unit Tests
// =============================================================================
