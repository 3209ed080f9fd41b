//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and protocol
//! constants live here so they can be tuned in one place.

// BLE

/// GAP device name, included in full in the advertising data.
pub const DEVICE_NAME: &str = "glass_light";

/// Glass Light service UUID, advertised in the scan response.  The
/// vendor base is `28d40000-...`; the color characteristic sits at
/// index 0x0002 (see `ble::service`).
pub const SERVICE_UUID: u128 = 0x28d40001_4ca6_4b4d_9f0e_29cdb15ae435;

/// Advertising interval (in 625 µs units). 320 = 200 ms.
pub const ADV_INTERVAL: u32 = 320;

/// Advertising timeout (in 10 ms units). 18000 = 180 s.
/// Advertising restarts immediately when the window closes.
pub const ADV_TIMEOUT: u16 = 18_000;

/// Preferred connection interval range (in 1.25 ms units).
/// 16 = 20 ms, 60 = 75 ms.
pub const CONN_INTERVAL_MIN: u16 = 16;
pub const CONN_INTERVAL_MAX: u16 = 60;

/// Slave latency (number of connection events the peripheral can skip).
pub const SLAVE_LATENCY: u16 = 0;

/// Connection supervision timeout (in 10 ms units). 400 = 4 s.
pub const CONN_SUP_TIMEOUT: u16 = 400;

/// ATT MTU. The color payload is 3 bytes; the default 23 is plenty.
pub const ATT_MTU: u16 = 23;

// LED strip

/// Number of WS2812 pixels on the strip.
pub const NUM_PIXELS: usize = 5;

/// PWM sample buffer length for the WS2812 driver (24 bits per pixel).
pub const STRIP_BUFFER_LEN: usize = NUM_PIXELS * 24;

// Charge detection

/// Interval of the repeating charge-blink tick (ms).
pub const CHARGE_TICK_MS: u64 = 1000;

/// Length of the LED pulse within each charge tick (ms); the LEDs are
/// blanked when this one-shot fires.
pub const CHARGE_PULSE_MS: u64 = 50;

// Fade engine

/// Total duration of a full fade (ms).
pub const FADE_TOTAL_MS: u64 = 4000;

// Accelerometer (LIS3DH, 4-wire SPI)

/// WHO_AM_I register address.
pub const LIS3DH_REG_WHO_AM_I: u8 = 0x0F;

/// Expected WHO_AM_I value for a LIS3DH.
pub const LIS3DH_WHO_AM_I: u8 = 0x33;

// GPIO pin assignments (custom glass-light PCB)
//
// These are logical names; actual `embassy_nrf::peripherals::*` types are
// selected in `main.rs`.  The `gpio-leds` feature instead drives the
// nRF52-DK LEDs on P0.17/P0.18/P0.19 (active-low) and leaves the charge
// and accelerometer pins unwired (P0.17 is shared with the SPI MOSI).
//
//   WS2812 data    → P0.29
//   Charge status  → P0.08 (input, pull-up; low while charging)
//   Accel CS       → P0.15
//   Accel SCK      → P0.31
//   Accel MOSI     → P0.17
//   Accel MISO     → P0.13
