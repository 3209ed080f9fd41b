//! Test-only library interface for glass-light.
//!
//! This module re-exports the pure logic modules that can be tested
//! on the host (no embedded hardware required).
//!
//! Usage: `cargo test --lib`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main].
//! This lib.rs provides a separate entry point for host-based testing.

#![cfg_attr(not(test), no_std)]

// Internal module paths for the actual implementations
#[path = "accel/protocol.rs"]
mod accel_protocol_impl;
#[path = "charge_logic.rs"]
mod charge_logic_impl;
#[path = "light/fade.rs"]
mod light_fade_impl;
#[path = "light/pixel.rs"]
mod light_pixel_impl;

pub mod light {
    pub mod pixel {
        pub use crate::light_pixel_impl::*;
    }
    pub mod fade {
        pub use crate::light_fade_impl::*;
    }
}

pub mod charge_logic {
    pub use crate::charge_logic_impl::*;
}

pub mod accel {
    pub mod protocol {
        pub use crate::accel_protocol_impl::*;
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::accel::protocol;
    use super::charge_logic::{ChargeCycle, ChargePhase};
    use super::light::fade::{Fade, FADE_STEPS};
    use super::light::pixel::*;
    use smart_leds::RGB8;

    // ════════════════════════════════════════════════════════════════════════
    // Named Color Table Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn color_table_channel_values() {
        assert_eq!(RED, RGB8 { r: 255, g: 0, b: 0 });
        assert_eq!(YELLOW, RGB8 { r: 255, g: 255, b: 0 });
        assert_eq!(GREEN, RGB8 { r: 0, g: 255, b: 0 });
        assert_eq!(CYAN, RGB8 { r: 0, g: 255, b: 255 });
        assert_eq!(BLUE, RGB8 { r: 0, g: 0, b: 255 });
        assert_eq!(PURPLE, RGB8 { r: 255, g: 0, b: 255 });
        assert_eq!(WHITE, RGB8 { r: 255, g: 255, b: 255 });
        assert_eq!(OFF, RGB8 { r: 0, g: 0, b: 0 });
    }

    #[test]
    fn color_by_name_all_known_names() {
        assert_eq!(color_by_name(b"red"), RED);
        assert_eq!(color_by_name(b"yellow"), YELLOW);
        assert_eq!(color_by_name(b"green"), GREEN);
        assert_eq!(color_by_name(b"cyan"), CYAN);
        assert_eq!(color_by_name(b"blue"), BLUE);
        assert_eq!(color_by_name(b"purple"), PURPLE);
        assert_eq!(color_by_name(b"white"), WHITE);
    }

    #[test]
    fn color_by_name_matches_on_prefix() {
        // Only the leading name bytes are compared - trailing junk is
        // ignored, as is anything after a terminator.
        assert_eq!(color_by_name(b"redxyz"), RED);
        assert_eq!(color_by_name(b"blue\0\0\0"), BLUE);
        assert_eq!(color_by_name(b"white please"), WHITE);
    }

    #[test]
    fn color_by_name_rejects_partial_names() {
        // A command shorter than the color name never matches.
        assert_eq!(color_by_name(b"re"), OFF);
        assert_eq!(color_by_name(b"yell"), OFF);
        assert_eq!(color_by_name(b"purpl"), OFF);
    }

    #[test]
    fn color_by_name_unknown_yields_off() {
        assert_eq!(color_by_name(b"magenta"), OFF);
        assert_eq!(color_by_name(b"off"), OFF);
        assert_eq!(color_by_name(b""), OFF);
        assert_eq!(color_by_name(&[0xFF, 0xFE]), OFF);
    }

    #[test]
    fn color_by_name_is_case_sensitive() {
        assert_eq!(color_by_name(b"RED"), OFF);
        assert_eq!(color_by_name(b"Blue"), OFF);
    }

    // ════════════════════════════════════════════════════════════════════════
    // Raw Pixel Payload Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn pixel_from_raw_exact_length() {
        let px = pixel_from_raw(&[10, 20, 30]).unwrap();
        assert_eq!(px, RGB8 { r: 10, g: 20, b: 30 });
    }

    #[test]
    fn pixel_from_raw_channel_order_is_rgb() {
        let px = pixel_from_raw(&[255, 0, 0]).unwrap();
        assert_eq!(px, RED);
        let px = pixel_from_raw(&[0, 0, 255]).unwrap();
        assert_eq!(px, BLUE);
    }

    #[test]
    fn pixel_from_raw_wrong_length_dropped() {
        assert!(pixel_from_raw(&[]).is_none());
        assert!(pixel_from_raw(&[1]).is_none());
        assert!(pixel_from_raw(&[1, 2]).is_none());
        assert!(pixel_from_raw(&[1, 2, 3, 4]).is_none());
    }

    #[test]
    fn pixel_size_matches_rgb8() {
        assert_eq!(PIXEL_SIZE, core::mem::size_of::<RGB8>());
    }

    // ════════════════════════════════════════════════════════════════════════
    // Charge Cycle Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn charge_cycle_starts_red() {
        let mut cycle = ChargeCycle::new();
        assert_eq!(cycle.advance(), ChargePhase::Red);
    }

    #[test]
    fn charge_cycle_order_red_green_blue() {
        let mut cycle = ChargeCycle::new();
        assert_eq!(cycle.advance(), ChargePhase::Red);
        assert_eq!(cycle.advance(), ChargePhase::Green);
        assert_eq!(cycle.advance(), ChargePhase::Blue);
    }

    #[test]
    fn charge_cycle_wraps_around() {
        let mut cycle = ChargeCycle::new();
        for _ in 0..3 {
            cycle.advance();
        }
        // Fourth tick starts the cycle over.
        assert_eq!(cycle.advance(), ChargePhase::Red);
        assert_eq!(cycle.advance(), ChargePhase::Green);
    }

    #[test]
    fn charge_cycle_default_equals_new() {
        assert_eq!(ChargeCycle::default(), ChargeCycle::new());
    }

    // ════════════════════════════════════════════════════════════════════════
    // Fade Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn fade_step_zero_is_start_color() {
        let fade = Fade::new(BLUE, OFF);
        assert_eq!(fade.step(0), BLUE);
    }

    #[test]
    fn fade_clamps_at_target() {
        let fade = Fade::new(BLUE, OFF);
        assert_eq!(fade.step(FADE_STEPS), OFF);
        assert_eq!(fade.step(FADE_STEPS + 100), OFF);
        assert_eq!(fade.step(u16::MAX), OFF);
    }

    #[test]
    fn fade_midpoint_is_half_way() {
        let fade = Fade::new(OFF, WHITE);
        let mid = fade.step(FADE_STEPS / 2);
        assert_eq!(mid, RGB8 { r: 127, g: 127, b: 127 });
    }

    #[test]
    fn fade_between_equal_colors_is_constant() {
        let fade = Fade::new(GREEN, GREEN);
        for n in [0, 1, 100, 255, 256] {
            assert_eq!(fade.step(n), GREEN);
        }
    }

    #[test]
    fn fade_is_monotonic_per_channel() {
        let fade = Fade::new(RED, OFF);
        let mut prev = fade.step(0).r;
        for n in 1..=FADE_STEPS {
            let cur = fade.step(n).r;
            assert!(cur <= prev, "red channel rose at step {}", n);
            prev = cur;
        }
    }

    // ════════════════════════════════════════════════════════════════════════
    // Accelerometer Protocol Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn read_command_single_byte() {
        assert_eq!(protocol::read_command(0x0F, 1), 0x8F);
    }

    #[test]
    fn read_command_two_bytes_no_auto_increment() {
        assert_eq!(protocol::read_command(0x0F, 2), 0x8F);
    }

    #[test]
    fn read_command_multi_byte_sets_auto_increment() {
        assert_eq!(protocol::read_command(0x28, 6), 0x28 | 0xA0);
        assert_eq!(protocol::read_command(0x0F, 3), 0x0F | 0xA0);
    }

    #[test]
    fn read_command_masks_address_to_six_bits() {
        // Address bits above 0x3F must not leak into the command bits.
        assert_eq!(protocol::read_command(0xFF, 1), 0x3F | 0x80);
        assert_eq!(protocol::read_command(0xFF, 4), 0x3F | 0xA0);
    }
}
