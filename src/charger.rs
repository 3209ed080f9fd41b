//! Charge-detection subsystem.
//!
//! The charger status pin is sampled on every toggle edge: low means a
//! charge is in progress and starts the 1 s blink tick; high stops it.
//! Each tick stages the next cycle color and blanks it again after the
//! 50 ms pulse window, so the strip gives one short colored pulse per
//! second while charging.

use defmt::info;
use embassy_futures::select::{select, Either};
use embassy_nrf::gpio::{AnyPin, Input, Pull};
use embassy_time::{Duration, Ticker, Timer};
use smart_leds::RGB8;

use crate::charge_logic::{ChargeCycle, ChargePhase};
use crate::config::{CHARGE_PULSE_MS, CHARGE_TICK_MS};
use crate::light::pixel::{BLUE, GREEN, OFF, RED};
use crate::light::FrameSender;

fn phase_color(phase: ChargePhase) -> RGB8 {
    match phase {
        ChargePhase::Red => RED,
        ChargePhase::Green => GREEN,
        ChargePhase::Blue => BLUE,
    }
}

/// Watch the charge-status pin and drive the blink cycle.
///
/// The pin is pulled up; the charger pulls it low while charging.
#[embassy_executor::task]
pub async fn charger_task(pin: AnyPin, frames: FrameSender) -> ! {
    let mut status = Input::new(pin, Pull::Up);
    let mut cycle = ChargeCycle::new();

    loop {
        if status.is_high() {
            status.wait_for_low().await;
        }
        info!("charging - blink cycle started");

        let mut ticker = Ticker::every(Duration::from_millis(CHARGE_TICK_MS));
        loop {
            match select(status.wait_for_high(), ticker.next()).await {
                Either::First(()) => break,
                Either::Second(()) => {
                    let color = phase_color(cycle.advance());
                    if frames.try_send(color).is_err() {
                        continue;
                    }
                    // One-shot pulse: blank again after the pulse window.
                    Timer::after(Duration::from_millis(CHARGE_PULSE_MS)).await;
                    let _ = frames.try_send(OFF);
                }
            }
        }

        info!("charge complete - blink cycle stopped");
    }
}
