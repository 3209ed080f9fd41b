//! Unified error type for the glass-light firmware.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.

use defmt::Format;

/// Top-level error type used across the application.
///
/// SoftDevice failures are handled at their call sites (fatal ones
/// halt via `unwrap!`, advertising timeouts restart the window), so
/// only the peripheral drivers report through here.
#[derive(Debug, Format)]
pub enum Error {
    // LED output
    /// The WS2812 PWM driver rejected a frame flush.
    Strip,

    // SPI
    /// SPI transfer to the accelerometer failed.
    Spi,

    /// The accelerometer answered the WHO_AM_I probe with an
    /// unexpected value.
    AccelNotFound,
}
