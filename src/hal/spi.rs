//! SPI master abstraction
//!
//! The W5500 hangs off a platform SPI master. This trait covers the
//! resource-acquisition half of that relationship: bus pin routing,
//! logical device registration, and the interrupt dispatch service the
//! receive path depends on. Transaction framing (the 16-bit command +
//! 8-bit address protocol) is fixed by the chip and never crosses this
//! boundary; the [`Device`](SpiHal::Device) handle is opaque.

use crate::driver::config::{SpiHost, SpiPins};
use crate::driver::error::SpiResult;
use crate::driver::spi::SpiDeviceConfig;

/// Platform SPI master operations used during bring-up and teardown.
///
/// Each method maps to a distinct failure in
/// [`SpiError`](crate::SpiError); none is retried by this crate.
pub trait SpiHal {
    /// Opaque handle for a registered logical device.
    type Device;

    /// Install the process-wide GPIO interrupt dispatch service.
    ///
    /// The service is a prerequisite for the W5500 interrupt line.
    /// Installation must be idempotent: a second bring-up attempt (for
    /// example after [`teardown`](crate::W5500Eth::teardown)) calls
    /// this again and must not fail merely because the service already
    /// exists.
    fn install_interrupt_service(&mut self) -> SpiResult<()>;

    /// Route the bus pins and initialize the SPI host.
    ///
    /// Fails when a pin is already claimed or the host is in use.
    fn bus_initialize(&mut self, host: SpiHost, pins: &SpiPins) -> SpiResult<()>;

    /// Register a logical device on an initialized bus.
    ///
    /// Fails on transaction-queue or descriptor exhaustion.
    fn bus_add_device(&mut self, host: SpiHost, config: &SpiDeviceConfig)
    -> SpiResult<Self::Device>;

    /// Release an initialized bus and its pin routing.
    ///
    /// Called on teardown and when a later bring-up stage fails.
    fn bus_free(&mut self, host: SpiHost);
}
