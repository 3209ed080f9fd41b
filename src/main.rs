//! Glass light firmware entry point.
//!
//! Boots the SoftDevice, registers the Glass Light GATT service and
//! spawns the worker tasks:
//!
//! - `softdevice_task` - runs the BLE stack.
//! - `light_task`      - owns the LED backend, applies color frames.
//! - `charger_task`    - charge-status pin watcher + blink cycle.
//!
//! The main task then loops advertising and serving GATT connections;
//! on disconnect the LEDs are blanked and advertising restarts.

#![no_std]
#![no_main]

#[cfg(not(feature = "gpio-leds"))]
mod accel;
mod ble;
#[cfg(not(feature = "gpio-leds"))]
mod charge_logic;
#[cfg(not(feature = "gpio-leds"))]
mod charger;
mod config;
mod error;
mod light;

use core::mem;

use defmt::{info, unwrap, warn};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_nrf::gpio::Pin as _;
use embassy_nrf::interrupt::Priority;
use nrf_softdevice::ble::gatt_server;
use nrf_softdevice::{raw, Softdevice};
use panic_probe as _;

use crate::ble::advertising;
use crate::ble::service::{self, Server};
use crate::light::pixel;

#[cfg(not(feature = "gpio-leds"))]
use {
    crate::accel::Lis3dh,
    embassy_nrf::gpio::{Level, Output, OutputDrive},
    embassy_nrf::{bind_interrupts, peripherals, spim},
    embassy_nrf_ws2812_pwm::Ws2812,
    static_cell::StaticCell,
};

#[cfg(not(feature = "gpio-leds"))]
bind_interrupts!(struct Irqs {
    SPIM2_SPIS2_SPI2 => spim::InterruptHandler<peripherals::SPI2>;
});

/// Frames queued for the light task (GATT writes, charge blink,
/// disconnect blanking).
static FRAMES: light::FrameChannel = light::FrameChannel::new();

#[cfg(not(feature = "gpio-leds"))]
static STRIP_BUFFER: StaticCell<[u16; config::STRIP_BUFFER_LEN]> = StaticCell::new();

#[embassy_executor::task]
async fn softdevice_task(sd: &'static Softdevice) -> ! {
    sd.run().await
}

fn softdevice_config() -> nrf_softdevice::Config {
    nrf_softdevice::Config {
        clock: Some(raw::nrf_clock_lf_cfg_t {
            source: raw::NRF_CLOCK_LF_SRC_RC as u8,
            rc_ctiv: 16,
            rc_temp_ctiv: 2,
            accuracy: raw::NRF_CLOCK_LF_ACCURACY_500_PPM as u8,
        }),
        conn_gap: Some(raw::ble_gap_conn_cfg_t {
            conn_count: 1,
            event_length: 24,
        }),
        conn_gatt: Some(raw::ble_gatt_conn_cfg_t {
            att_mtu: config::ATT_MTU,
        }),
        gatts_attr_tab_size: Some(raw::ble_gatts_cfg_attr_tab_size_t {
            attr_tab_size: raw::BLE_GATTS_ATTR_TAB_SIZE_DEFAULT,
        }),
        gap_role_count: Some(raw::ble_gap_cfg_role_count_t {
            adv_set_count: 1,
            periph_role_count: 1,
            central_role_count: 0,
            central_sec_count: 0,
            _bitfield_1: raw::ble_gap_cfg_role_count_t::new_bitfield_1(0),
        }),
        gap_device_name: Some(raw::ble_gap_cfg_device_name_t {
            p_value: config::DEVICE_NAME.as_ptr() as _,
            current_len: config::DEVICE_NAME.len() as u16,
            max_len: config::DEVICE_NAME.len() as u16,
            write_perm: unsafe { mem::zeroed() },
            _bitfield_1: raw::ble_gap_cfg_device_name_t::new_bitfield_1(
                raw::BLE_GATTS_VLOC_STACK as u8,
            ),
        }),
        ..Default::default()
    }
}

fn preferred_conn_params() -> raw::ble_gap_conn_params_t {
    raw::ble_gap_conn_params_t {
        min_conn_interval: config::CONN_INTERVAL_MIN,
        max_conn_interval: config::CONN_INTERVAL_MAX,
        slave_latency: config::SLAVE_LATENCY,
        conn_sup_timeout: config::CONN_SUP_TIMEOUT,
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("glass light v1.0");

    // Interrupt priorities P0/P1/P4 are reserved by the SoftDevice.
    let mut hw_config = embassy_nrf::config::Config::default();
    hw_config.gpiote_interrupt_priority = Priority::P2;
    hw_config.time_interrupt_priority = Priority::P2;
    let p = embassy_nrf::init(hw_config);

    // LED backend: WS2812 strip on the glass-light PCB, discrete LEDs
    // on the DK.
    #[cfg(not(feature = "gpio-leds"))]
    let backend = {
        let buf = STRIP_BUFFER.init([0u16; config::STRIP_BUFFER_LEN]);
        light::strip::Strip::new(Ws2812::new(p.PWM0, p.P0_29, buf))
    };
    #[cfg(feature = "gpio-leds")]
    let backend = light::gpio::Leds::new(p.P0_17.degrade(), p.P0_18.degrade(), p.P0_19.degrade());

    let sd = Softdevice::enable(&softdevice_config());
    let server = unwrap!(Server::new(sd));
    unwrap!(spawner.spawn(softdevice_task(sd)));

    unwrap!(spawner.spawn(light::light_task(FRAMES.receiver(), backend)));

    #[cfg(not(feature = "gpio-leds"))]
    unwrap!(spawner.spawn(charger::charger_task(p.P0_08.degrade(), FRAMES.sender())));

    // Accelerometer: probed once at boot, otherwise idle.  A missing or
    // silent sensor is logged, not fatal.
    #[cfg(not(feature = "gpio-leds"))]
    {
        let mut spi_config = spim::Config::default();
        spi_config.frequency = spim::Frequency::M8;
        let spi = spim::Spim::new(p.SPI2, Irqs, p.P0_31, p.P0_13, p.P0_17, spi_config);
        let cs = Output::new(p.P0_15, Level::High, OutputDrive::Standard);

        let mut accel = Lis3dh::new(spi, cs);
        match accel.probe().await {
            Ok(()) => info!("accelerometer online"),
            Err(e) => warn!("accelerometer probe failed: {:?}", e),
        }
    }

    let frames = FRAMES.sender();
    loop {
        let conn = match advertising::advertise(sd).await {
            Ok(conn) => conn,
            Err(nrf_softdevice::ble::peripheral::AdvertiseError::Timeout) => {
                info!("advertising window closed - restarting");
                continue;
            }
            Err(e) => {
                defmt::panic!("advertising failed: {:?}", e);
            }
        };
        info!("connected: {:?}", conn.peer_address());

        // Request the preferred connection parameters; the central may
        // refuse, which is not fatal.
        if let Err(e) = conn.set_conn_params(preferred_conn_params()) {
            warn!("conn param request failed: {:?}", e);
        }

        let reason = gatt_server::run(&conn, &server, |event| {
            service::handle_event(event, &frames);
        })
        .await;
        info!("disconnected: {:?}", reason);

        // Blank the LEDs whenever the central goes away.
        frames.send(pixel::OFF).await;
    }
}
