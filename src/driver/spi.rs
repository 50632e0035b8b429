//! SPI device acquisition for the W5500
//!
//! Builds the logical device descriptor the chip's command framing
//! requires (16-bit command, 8-bit address, mode 0) and walks the
//! three-stage acquisition: interrupt service, bus, device. Each stage
//! failure is reported distinctly and nothing is retried; the caller
//! retries bring-up wholesale if it wants resilience.

use super::config::EthConfig;
use super::error::SpiResult;
use super::timing::cs_hold_cycles;
use crate::hal::SpiHal;

/// SPI command field width fixed by the W5500 frame format.
pub const W5500_COMMAND_BITS: u8 = 16;

/// SPI address field width fixed by the W5500 frame format.
pub const W5500_ADDRESS_BITS: u8 = 8;

/// Clock polarity/phase mode the W5500 samples at.
pub const W5500_SPI_MODE: u8 = 0;

/// Transaction queue depth registered with the bus.
pub const W5500_QUEUE_SIZE: u8 = 20;

/// Logical SPI device descriptor handed to the platform.
///
/// The command/address widths and mode are chip-fixed constants; only
/// clock, chip select and the computed post-transaction hold vary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpiDeviceConfig {
    /// Clock frequency in Hz
    pub clock_hz: u32,
    /// Command field width in bits
    pub command_bits: u8,
    /// Address field width in bits
    pub address_bits: u8,
    /// Clock polarity/phase mode
    pub mode: u8,
    /// Chip-select GPIO
    pub cs_gpio: u8,
    /// Transaction queue depth
    pub queue_size: u8,
    /// Chip-select hold after each transaction, in clock cycles
    pub cs_post_hold_cycles: u8,
}

impl SpiDeviceConfig {
    /// Build the W5500 device descriptor for a clock in MHz.
    ///
    /// The hold cycles come from
    /// [`cs_hold_cycles`](super::timing::cs_hold_cycles); the caller is
    /// responsible for having validated the clock range first.
    #[must_use]
    pub const fn for_w5500(clock_mhz: u32, cs_gpio: u8) -> Self {
        Self {
            clock_hz: clock_mhz * 1_000_000,
            command_bits: W5500_COMMAND_BITS,
            address_bits: W5500_ADDRESS_BITS,
            mode: W5500_SPI_MODE,
            cs_gpio,
            queue_size: W5500_QUEUE_SIZE,
            cs_post_hold_cycles: cs_hold_cycles(clock_mhz),
        }
    }
}

/// Acquire the SPI device for the W5500.
///
/// Sequence: interrupt dispatch service (idempotent) → bus
/// initialization → device registration. If the device registration
/// fails, the freshly initialized bus is freed again so a later
/// bring-up attempt starts clean.
pub(crate) fn acquire_device<H: SpiHal>(hal: &mut H, config: &EthConfig) -> SpiResult<H::Device> {
    hal.install_interrupt_service()?;
    hal.bus_initialize(config.host, &config.pins)?;

    let device = SpiDeviceConfig::for_w5500(config.clock_mhz, config.pins.cs);
    match hal.bus_add_device(config.host, &device) {
        Ok(handle) => Ok(handle),
        Err(e) => {
            hal.bus_free(config.host);
            Err(e)
        }
    }
}
