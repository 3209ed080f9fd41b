//! LED output subsystem.
//!
//! Color frames arrive on a channel as single RGB values; the light
//! task applies each one uniformly to every pixel and flushes
//! immediately.  Two backends exist:
//!
//! - **WS2812 strip** (default): 5 pixels driven over PWM.  A pending
//!   frame buffer is mutated by set-pixel calls and only becomes
//!   visible on an explicit flush.
//! - **Discrete LEDs** (`gpio-leds` feature): the nRF52-DK's three
//!   active-low LEDs; a color channel is lit iff its byte is nonzero.

pub mod fade;
pub mod pixel;

#[cfg(feature = "gpio-leds")]
pub mod gpio;
#[cfg(not(feature = "gpio-leds"))]
pub mod strip;

use defmt::info;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};
use embassy_time::{Duration, Timer};
use smart_leds::RGB8;

use crate::config::FADE_TOTAL_MS;
use crate::light::fade::{Fade, FADE_STEPS};
use crate::light::pixel::{BLUE, GREEN, OFF, RED};

/// Depth of the frame channel.  Writers `try_send` from event context
/// and drop frames when the light task lags.
pub const FRAME_QUEUE_DEPTH: usize = 4;

pub type FrameChannel = Channel<CriticalSectionRawMutex, RGB8, FRAME_QUEUE_DEPTH>;
pub type FrameReceiver = Receiver<'static, CriticalSectionRawMutex, RGB8, FRAME_QUEUE_DEPTH>;
pub type FrameSender = Sender<'static, CriticalSectionRawMutex, RGB8, FRAME_QUEUE_DEPTH>;

/// LED backend selected at compile time.
#[cfg(not(feature = "gpio-leds"))]
pub type Light = strip::Strip;
#[cfg(feature = "gpio-leds")]
pub type Light = gpio::Leds;

/// Delay between fade steps so a full fade spans `FADE_TOTAL_MS`.
const FADE_STEP_MS: u64 = FADE_TOTAL_MS / FADE_STEPS as u64;

/// Owns the LED backend: runs the boot self-test, then applies every
/// frame received on the channel until the end of time.
#[embassy_executor::task]
pub async fn light_task(frames: FrameReceiver, mut light: Light) -> ! {
    self_test(&mut light).await;

    loop {
        let color = frames.receive().await;
        apply(&mut light, color).await;
    }
}

/// Boot self-test: red, green and blue for one second each, then fade
/// back out so the device starts dark.
async fn self_test(light: &mut Light) {
    info!("LED self-test");

    for color in [RED, GREEN, BLUE] {
        apply(light, color).await;
        Timer::after(Duration::from_secs(1)).await;
    }

    let fade_out = Fade::new(BLUE, OFF);
    for n in 0..=FADE_STEPS {
        apply(light, fade_out.step(n)).await;
        Timer::after(Duration::from_millis(FADE_STEP_MS)).await;
    }
}

async fn apply(light: &mut Light, color: RGB8) {
    #[cfg(not(feature = "gpio-leds"))]
    {
        light.set_all(color);
        if light.show().await.is_err() {
            defmt::warn!("strip flush failed - frame dropped");
        }
    }

    #[cfg(feature = "gpio-leds")]
    light.apply(color);
}
