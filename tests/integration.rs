//! Integration tests for glass-light host-testable logic.

use glass_light::charge_logic::{ChargeCycle, ChargePhase};
use glass_light::light::fade::{Fade, FADE_STEPS};
use glass_light::light::pixel::{self, color_by_name, pixel_from_raw};

#[test]
fn ble_write_path_applies_raw_color() {
    // A central writes [r, g, b] to the color characteristic.
    let payload = [0x00, 0xFF, 0x00];
    let color = pixel_from_raw(&payload).expect("3-byte write must be accepted");
    assert_eq!(color, pixel::GREEN);
}

#[test]
fn ble_write_path_accepts_characteristic_buffer() {
    // The characteristic value arrives as a heapless vec with capacity
    // of one pixel; a full buffer parses, a partial write does not.
    let mut payload: heapless::Vec<u8, 3> = heapless::Vec::new();
    payload.extend_from_slice(&[0x12, 0x34, 0x56]).unwrap();
    let color = pixel_from_raw(&payload).unwrap();
    assert_eq!((color.r, color.g, color.b), (0x12, 0x34, 0x56));

    payload.pop();
    assert!(pixel_from_raw(&payload).is_none());
}

#[test]
fn ble_write_path_drops_bad_lengths() {
    // Anything that is not exactly one pixel is ignored, with no error
    // surfaced to the peer.
    assert!(pixel_from_raw(&[0xFF]).is_none());
    assert!(pixel_from_raw(&[0xFF, 0x00]).is_none());
    assert!(pixel_from_raw(&[0xFF, 0x00, 0x00, 0x00]).is_none());
}

#[test]
fn named_command_path_matches_table() {
    // Free-text commands resolve through the same table the status
    // indications use.
    assert_eq!(color_by_name(b"purple"), pixel::PURPLE);
    assert_eq!(color_by_name(b"nope"), pixel::OFF);
}

#[test]
fn charge_blink_sequence_over_five_ticks() {
    let mut cycle = ChargeCycle::new();
    let phases: Vec<ChargePhase> = (0..5).map(|_| cycle.advance()).collect();
    assert_eq!(
        phases,
        [
            ChargePhase::Red,
            ChargePhase::Green,
            ChargePhase::Blue,
            ChargePhase::Red,
            ChargePhase::Green,
        ]
    );
}

#[test]
fn boot_fade_ramps_blue_to_dark() {
    // The self-test fades the last test color back out.
    let fade = Fade::new(pixel::BLUE, pixel::OFF);
    assert_eq!(fade.step(0), pixel::BLUE);
    assert!(fade.step(FADE_STEPS / 2).b < pixel::BLUE.b);
    assert_eq!(fade.step(FADE_STEPS), pixel::OFF);
}
