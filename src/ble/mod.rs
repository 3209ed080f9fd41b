//! Bluetooth Low Energy subsystem.
//!
//! This module drives the Nordic SoftDevice S140 in **Peripheral** role:
//!
//! 1. **Advertising** - broadcasts the device name and the Glass Light
//!    service UUID until a central connects, restarting whenever the
//!    window times out or the connection drops.
//! 2. **GATT server** - one custom service with a single 3-byte color
//!    control-point characteristic.
//!
//! Raw color writes are forwarded to the light task via the frame
//! channel defined in `light`.  Stack-level bookkeeping (pairing
//! refusal, system attributes, MTU replies, GATT timeouts) is handled
//! inside the SoftDevice bindings' own event loop.

pub mod advertising;
pub mod service;
