//! Charge-blink color cycle.
//!
//! While the battery charges, each tick lights the next color of a
//! fixed red → green → blue cycle.  The cycle is a plain counter so it
//! can be tested on the host; mapping phases to actual pixel values is
//! the charger task's job.

/// One phase of the charge-blink cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChargePhase {
    Red,
    Green,
    Blue,
}

/// Cyclic phase counter advanced once per charge tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChargeCycle {
    state: u8,
}

impl ChargeCycle {
    pub const fn new() -> Self {
        Self { state: 0 }
    }

    /// Phase for the next tick.  The first tick is red.
    pub fn advance(&mut self) -> ChargePhase {
        let phase = match self.state {
            0 => ChargePhase::Red,
            1 => ChargePhase::Green,
            _ => ChargePhase::Blue,
        };
        self.state = if self.state >= 2 { 0 } else { self.state + 1 };
        phase
    }
}
