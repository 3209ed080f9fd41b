//! WS2812 strip backend - a pending frame buffer over the PWM driver.
//!
//! Set-pixel calls only stage data; nothing reaches the LEDs until
//! `show()` flushes the whole frame in one PWM sequence (the strip has
//! no way to address a single pixel in place).

use embassy_nrf::peripherals::PWM0;
use embassy_nrf_ws2812_pwm::Ws2812;
use smart_leds::{SmartLedsWriteAsync, RGB8};

use crate::config::NUM_PIXELS;
use crate::error::Error;
use crate::light::pixel::OFF;

pub struct Strip {
    driver: Ws2812<'static, PWM0>,
    frame: [RGB8; NUM_PIXELS],
}

impl Strip {
    pub fn new(driver: Ws2812<'static, PWM0>) -> Self {
        Self {
            driver,
            frame: [OFF; NUM_PIXELS],
        }
    }

    /// Stage one pixel of the pending frame.  Out-of-range indices are
    /// ignored.
    pub fn set_pixel(&mut self, index: usize, color: RGB8) {
        if let Some(px) = self.frame.get_mut(index) {
            *px = color;
        }
    }

    /// Stage the same color on every pixel.
    pub fn set_all(&mut self, color: RGB8) {
        for i in 0..NUM_PIXELS {
            self.set_pixel(i, color);
        }
    }

    /// Flush the pending frame to the strip.
    pub async fn show(&mut self) -> Result<(), Error> {
        self.driver
            .write(self.frame.iter().copied())
            .await
            .map_err(|_| Error::Strip)
    }
}
