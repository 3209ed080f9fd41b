//! Advertising payloads and the advertise call.
//!
//! The device name goes in the ADV packet; the 128-bit service UUID
//! does not fit next to it in a legacy packet, so it rides in the scan
//! response.

use nrf_softdevice::ble::advertisement_builder::{
    Flag, LegacyAdvertisementBuilder, LegacyAdvertisementPayload, ServiceList,
};
use nrf_softdevice::ble::peripheral::{self, AdvertiseError};
use nrf_softdevice::ble::Connection;
use nrf_softdevice::Softdevice;

use crate::config;

static ADV_DATA: LegacyAdvertisementPayload = LegacyAdvertisementBuilder::new()
    .flags(&[Flag::LimitedDiscovery, Flag::LE_Only])
    .full_name(config::DEVICE_NAME)
    .build();

static SCAN_DATA: LegacyAdvertisementPayload = LegacyAdvertisementBuilder::new()
    .services_128(ServiceList::Complete, &[config::SERVICE_UUID.to_le_bytes()])
    .build();

/// Advertise until a central connects.
///
/// Returns `Err(Timeout)` when the advertising window closes so the
/// caller can reopen it.
pub async fn advertise(sd: &Softdevice) -> Result<Connection, AdvertiseError> {
    let adv_config = peripheral::Config {
        interval: config::ADV_INTERVAL,
        timeout: Some(config::ADV_TIMEOUT),
        ..Default::default()
    };
    let adv = peripheral::ConnectableAdvertisement::ScannableUndirected {
        adv_data: &ADV_DATA,
        scan_data: &SCAN_DATA,
    };
    peripheral::advertise_connectable(sd, adv, &adv_config).await
}
