//! Linear fade between two colors.
//!
//! A fade spans [`FADE_STEPS`] equal steps; `step(n)` returns the
//! interpolated color for tick `n` and clamps at the target once the
//! fade has run out, so driving it from a timer needs no end-of-fade
//! bookkeeping.

use smart_leds::RGB8;

/// Number of interpolation steps in a full fade.
pub const FADE_STEPS: u16 = 256;

/// A linear interpolation from one color to another.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Fade {
    from: RGB8,
    to: RGB8,
}

impl Fade {
    pub const fn new(from: RGB8, to: RGB8) -> Self {
        Self { from, to }
    }

    /// Color at tick `n`.  `step(0)` is the start color; any
    /// `n >= FADE_STEPS` yields the target.
    pub fn step(&self, n: u16) -> RGB8 {
        if n >= FADE_STEPS {
            return self.to;
        }
        RGB8 {
            r: lerp(self.from.r, self.to.r, n),
            g: lerp(self.from.g, self.to.g, n),
            b: lerp(self.from.b, self.to.b, n),
        }
    }
}

fn lerp(from: u8, to: u8, n: u16) -> u8 {
    let delta = to as i32 - from as i32;
    (from as i32 + delta * n as i32 / FADE_STEPS as i32) as u8
}
