//! ESP32 + W5500 shield wiring (VSPI, classic pin mapping).
//!
//! Constants and helpers for the common W5500 shield hookup on an
//! ESP32 dev board, intended as the canonical "happy path" for
//! bring-up code.

use crate::driver::config::{EthConfig, SpiHost, SpiPins};

/// ESP32 + W5500 shield configuration constants and helpers.
pub struct Esp32W5500;

impl Esp32W5500 {
    // =========================================================================
    // SPI Pins
    // =========================================================================

    /// MISO GPIO.
    pub const MISO_GPIO: u8 = 19;

    /// MOSI GPIO.
    pub const MOSI_GPIO: u8 = 23;

    /// SCLK GPIO.
    pub const SCLK_GPIO: u8 = 18;

    /// Chip select GPIO.
    pub const CS_GPIO: u8 = 5;

    /// Interrupt GPIO (W5500 INTn, active low).
    pub const INT_GPIO: u8 = 4;

    // =========================================================================
    // Bus Configuration
    // =========================================================================

    /// SPI host (VSPI on the classic ESP32).
    pub const SPI_HOST: SpiHost = SpiHost::Spi3;

    /// SPI clock in MHz.
    pub const SPI_CLOCK_MHZ: u32 = 20;

    // =========================================================================
    // Board Identification
    // =========================================================================

    /// Shield identifier.
    pub const SHIELD_TYPE: &'static str = "ESP32_W5500";

    /// Default interface hostname.
    pub const HOSTNAME: &'static str = "esp32-w5500";

    // =========================================================================
    // Helper Methods
    // =========================================================================

    /// Pin set for the classic wiring.
    #[must_use]
    pub const fn pins() -> SpiPins {
        SpiPins::new(
            Self::MISO_GPIO,
            Self::MOSI_GPIO,
            Self::SCLK_GPIO,
            Self::CS_GPIO,
            Self::INT_GPIO,
        )
    }

    /// Default bring-up configuration for the shield.
    #[must_use]
    pub const fn eth_config() -> EthConfig {
        EthConfig::new(Self::SPI_HOST, Self::pins())
            .with_clock_mhz(Self::SPI_CLOCK_MHZ)
            .with_hostname(Self::HOSTNAME)
    }

    /// Human-readable description of the wiring.
    #[must_use]
    pub const fn description() -> &'static str {
        "ESP32 + W5500 shield (VSPI: MISO 19, MOSI 23, SCLK 18, CS 5, INT 4)"
    }
}
