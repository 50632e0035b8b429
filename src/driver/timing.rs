//! W5500 SPI chip-select timing
//!
//! The W5500 requires the chip-select line to stay asserted for a
//! minimum hold time after a transaction completes. The SPI master
//! expresses that hold as a whole number of post-transaction clock
//! cycles, so the nanosecond floor has to be converted with a ceiling
//! division. Truncating instead of rounding up would violate the hold
//! floor and corrupt SPI framing intermittently at high clock speeds.

/// Minimum chip-select hold time after a transaction, from the W5500
/// datasheet (t_CSHD).
pub const CS_HOLD_TIME_MIN_NS: u32 = 210;

/// Largest clock frequency (MHz) for which a hold-cycle count is defined.
pub const CS_HOLD_CLOCK_MAX_MHZ: u32 = 20;

/// Compute the post-transaction chip-select hold in SPI clock cycles.
///
/// Returns the smallest cycle count whose duration meets
/// [`CS_HOLD_TIME_MIN_NS`] at the given clock, i.e.
/// `ceil(clock_mhz * 210 / 1000)`.
///
/// For `clock_mhz` outside `(0, 20]` the result is `0` — an
/// "unconstrained" sentinel, not an error. Callers are expected to
/// validate the operating range independently (see
/// [`EthConfig::validate`](crate::EthConfig::validate)) before relying
/// on this value.
#[must_use]
pub const fn cs_hold_cycles(clock_mhz: u32) -> u8 {
    if clock_mhz == 0 || clock_mhz > CS_HOLD_CLOCK_MAX_MHZ {
        return 0;
    }

    let ns = clock_mhz * CS_HOLD_TIME_MIN_NS;
    (ns.div_ceil(1000)) as u8
}
