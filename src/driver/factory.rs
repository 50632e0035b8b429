//! MAC/PHY driver composition
//!
//! Builds the MAC driver bound to the SPI device, the PHY driver, and
//! composes them into an installed Ethernet driver. Every stage can
//! fail independently; a handle constructed before a failing stage is
//! released before the error propagates, so no partial state survives
//! a failed bring-up.
//!
//! After install the hardware address is programmed: the
//! factory-provisioned address when the platform has one, the
//! caller-supplied fallback otherwise. The same address is registered
//! as the platform base MAC here, before the facade attaches the
//! driver to a network interface — the stack derives other identifiers
//! from the base address at attach time.

use super::config::EthConfig;
use super::error::BringUpResult;
use crate::hal::{EthHal, MacConfig, PhyConfig};

/// Construct and install the Ethernet driver for the W5500.
///
/// Returns the installed driver handle and the hardware address it was
/// programmed with. On any failure all handles constructed so far are
/// released and the SPI device registration is gone; the caller only
/// has the bus left to free.
pub(crate) fn install_driver<H: EthHal>(
    hal: &mut H,
    device: H::Device,
    config: &EthConfig,
) -> BringUpResult<(H::Driver, [u8; 6])> {
    let mac_config = MacConfig::for_w5500(config.pins.int, config.rx_task_priority);
    let phy_config = PhyConfig::w5500();

    let mac = hal.new_mac(device, &mac_config)?;

    let phy = match hal.new_phy(&phy_config) {
        Ok(phy) => phy,
        Err(e) => {
            hal.release_mac(mac);
            return Err(e);
        }
    };

    // install() releases both handles itself on failure.
    let mut driver = hal.install(mac, phy)?;

    let addr = match hal.factory_mac() {
        Some(addr) => {
            #[cfg(feature = "defmt")]
            defmt::info!("using factory MAC {=[u8; 6]:x}", addr);
            addr
        }
        None => {
            #[cfg(feature = "defmt")]
            defmt::info!("no factory MAC, using fallback {=[u8; 6]:x}", config.fallback_mac);
            config.fallback_mac
        }
    };

    if let Err(e) = hal.set_mac_address(&mut driver, addr) {
        hal.uninstall(driver);
        return Err(e);
    }

    if let Err(e) = hal.set_base_mac(addr) {
        hal.uninstall(driver);
        return Err(e);
    }

    Ok((driver, addr))
}
