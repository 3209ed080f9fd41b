//! Discrete-LED backend for the nRF52-DK board variant.
//!
//! Three of the DK's active-low LEDs stand in for the strip; a color
//! channel is lit iff its byte is nonzero.

use embassy_nrf::gpio::{AnyPin, Level, Output, OutputDrive};
use smart_leds::RGB8;

pub struct Leds {
    red: Output<'static>,
    green: Output<'static>,
    blue: Output<'static>,
}

impl Leds {
    /// Configure the three LED pins, starting high (off).
    pub fn new(red: AnyPin, green: AnyPin, blue: AnyPin) -> Self {
        Self {
            red: Output::new(red, Level::High, OutputDrive::Standard),
            green: Output::new(green, Level::High, OutputDrive::Standard),
            blue: Output::new(blue, Level::High, OutputDrive::Standard),
        }
    }

    pub fn apply(&mut self, color: RGB8) {
        set_channel(&mut self.red, color.r);
        set_channel(&mut self.green, color.g);
        set_channel(&mut self.blue, color.b);
    }
}

// active-low: LOW = ON, HIGH = OFF
fn set_channel(pin: &mut Output<'static>, value: u8) {
    if value != 0 {
        pin.set_low();
    } else {
        pin.set_high();
    }
}
