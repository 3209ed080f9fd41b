//! Glass Light GATT service.
//!
//! One read/write characteristic carries a raw (red, green, blue)
//! triplet.  Writes whose length is not exactly one pixel are dropped
//! without surfacing an error to the peer.

use defmt::warn;
use heapless::Vec;

use crate::light::pixel::{pixel_from_raw, PIXEL_SIZE};
use crate::light::FrameSender;

#[nrf_softdevice::gatt_service(uuid = "28d40001-4ca6-4b4d-9f0e-29cdb15ae435")]
pub struct GlassLightService {
    /// Color control point: raw `[red, green, blue]`.
    #[characteristic(uuid = "28d40002-4ca6-4b4d-9f0e-29cdb15ae435", read, write)]
    color: Vec<u8, PIXEL_SIZE>,
}

#[nrf_softdevice::gatt_server]
pub struct Server {
    pub glass_light: GlassLightService,
}

/// Dispatch one event from the GATT server run loop.
pub fn handle_event(event: ServerEvent, frames: &FrameSender) {
    match event {
        ServerEvent::GlassLight(GlassLightServiceEvent::ColorWrite(data)) => {
            match pixel_from_raw(&data) {
                Some(color) => {
                    // try_send keeps the event callback non-blocking;
                    // if the light task lags, the frame is dropped.
                    if frames.try_send(color).is_err() {
                        warn!("frame channel full - color write dropped");
                    }
                }
                None => warn!("color write of {} bytes ignored", data.len()),
            }
        }
    }
}
