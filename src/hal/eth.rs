//! Ethernet driver-install abstraction
//!
//! The platform provides a generic Ethernet driver layer: construct a
//! MAC driver bound to the SPI device, construct a PHY driver, compose
//! the two into an installed driver, attach that to a network
//! interface, and start it. [`EthHal`] models exactly that surface so
//! the bring-up sequencing and the failure unwinding stay in this
//! crate where they can be tested.
//!
//! # Handle ownership
//!
//! [`Mac`](EthHal::Mac), [`Phy`](EthHal::Phy) and
//! [`Driver`](EthHal::Driver) are opaque capability handles owned
//! exclusively by the caller until consumed. The contracts below spell
//! out who releases what on each failure, which is what lets
//! [`W5500Eth::begin`](crate::W5500Eth::begin) guarantee that no
//! handle leaks on any exit path.

use super::spi::SpiHal;
use crate::driver::config::{Duplex, Speed};
use crate::driver::error::BringUpResult;

// =============================================================================
// MAC / PHY Configuration
// =============================================================================

/// MAC driver construction parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MacConfig {
    /// GPIO carrying the W5500 interrupt line
    pub int_gpio: u8,
    /// Priority of the receive task spawned by the driver
    pub rx_task_priority: u8,
    /// Station-management (MDC/MDIO) interface present.
    ///
    /// Always `false` for the W5500, which has no SMI pins.
    pub smi: bool,
}

impl MacConfig {
    /// MAC configuration for a W5500: no SMI, caller-chosen interrupt
    /// pin and receive priority.
    #[must_use]
    pub const fn for_w5500(int_gpio: u8, rx_task_priority: u8) -> Self {
        Self {
            int_gpio,
            rx_task_priority,
            smi: false,
        }
    }
}

/// PHY driver construction parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhyConfig {
    /// Autonegotiation timeout in milliseconds; `0` disables
    /// autonegotiation entirely.
    pub autonego_timeout_ms: u32,
    /// GPIO wired to the PHY reset line, if any.
    pub reset_gpio: Option<u8>,
}

impl PhyConfig {
    /// PHY configuration for a W5500: no autonegotiation (the chip
    /// cannot do it) and no reset line (the internal PHY has none).
    #[must_use]
    pub const fn w5500() -> Self {
        Self {
            autonego_timeout_ms: 0,
            reset_gpio: None,
        }
    }
}

// =============================================================================
// Driver Lifecycle Trait
// =============================================================================

/// Platform Ethernet driver lifecycle, layered on [`SpiHal`].
pub trait EthHal: SpiHal {
    /// Opaque MAC driver handle.
    type Mac;
    /// Opaque PHY driver handle.
    type Phy;
    /// Opaque installed-driver handle.
    type Driver;

    /// Construct a MAC driver bound to the SPI device.
    ///
    /// Consumes the device registration. On failure the implementation
    /// releases the device registration before returning; the bus
    /// itself stays initialized and is freed by the caller.
    fn new_mac(&mut self, device: Self::Device, config: &MacConfig)
    -> BringUpResult<Self::Mac>;

    /// Construct a PHY driver.
    fn new_phy(&mut self, config: &PhyConfig) -> BringUpResult<Self::Phy>;

    /// Release a MAC handle (and the SPI device registration it owns).
    fn release_mac(&mut self, mac: Self::Mac);

    /// Release a PHY handle.
    fn release_phy(&mut self, phy: Self::Phy);

    /// Compose MAC and PHY into an installed driver.
    ///
    /// Consumes both handles. On failure the implementation releases
    /// both before returning.
    fn install(&mut self, mac: Self::Mac, phy: Self::Phy) -> BringUpResult<Self::Driver>;

    /// Uninstall a driver, releasing its MAC, PHY and SPI device
    /// registration.
    fn uninstall(&mut self, driver: Self::Driver);

    /// Factory-programmed hardware address, when the platform has one.
    fn factory_mac(&mut self) -> Option<[u8; 6]>;

    /// Register the platform-wide base MAC address.
    ///
    /// Must happen before [`attach_netif`](EthHal::attach_netif): the
    /// stack derives other identifiers from the base address at attach
    /// time.
    fn set_base_mac(&mut self, mac: [u8; 6]) -> BringUpResult<()>;

    /// Program the driver's hardware address.
    fn set_mac_address(&mut self, driver: &mut Self::Driver, mac: [u8; 6]) -> BringUpResult<()>;

    /// Attach the driver to a fresh network interface.
    fn attach_netif(&mut self, driver: &mut Self::Driver) -> BringUpResult<()>;

    /// Start frame reception/transmission.
    fn start(&mut self, driver: &mut Self::Driver) -> BringUpResult<()>;

    /// Stop frame reception/transmission.
    fn stop(&mut self, driver: &mut Self::Driver) -> BringUpResult<()>;

    /// Current negotiated link speed.
    fn link_speed(&self, driver: &Self::Driver) -> Speed;

    /// Current duplex mode.
    fn duplex(&self, driver: &Self::Driver) -> Duplex;

    /// Hardware address currently programmed into the driver.
    fn mac_address(&self, driver: &Self::Driver) -> [u8; 6];
}
