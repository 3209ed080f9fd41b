//! Color model for the glass light.
//!
//! A pixel is a 3-byte (red, green, blue) tuple; `smart_leds::RGB8` is
//! used directly so frames feed the strip driver without conversion.
//! The named color table serves both free-text color commands and the
//! hard-coded status colors (charge blink, disconnect-off).

use smart_leds::RGB8;

/// Size in bytes of one raw pixel as written over BLE.
pub const PIXEL_SIZE: usize = 3;

pub const RED: RGB8 = RGB8 { r: 255, g: 0, b: 0 };
pub const YELLOW: RGB8 = RGB8 { r: 255, g: 255, b: 0 };
pub const GREEN: RGB8 = RGB8 { r: 0, g: 255, b: 0 };
pub const CYAN: RGB8 = RGB8 { r: 0, g: 255, b: 255 };
pub const BLUE: RGB8 = RGB8 { r: 0, g: 0, b: 255 };
pub const PURPLE: RGB8 = RGB8 { r: 255, g: 0, b: 255 };
pub const WHITE: RGB8 = RGB8 { r: 255, g: 255, b: 255 };
pub const OFF: RGB8 = RGB8 { r: 0, g: 0, b: 0 };

/// Command vocabulary, in match order.  First match wins.
const NAMED_COLORS: [(&[u8], RGB8); 7] = [
    (b"red", RED),
    (b"yellow", YELLOW),
    (b"green", GREEN),
    (b"cyan", CYAN),
    (b"blue", BLUE),
    (b"purple", PURPLE),
    (b"white", WHITE),
];

/// Resolve a free-text color command.
///
/// A command matches a color if it *starts with* that color's name;
/// trailing bytes are ignored.  Commands that match nothing resolve to
/// [`OFF`].  Input is raw bytes - no UTF-8 validation.
pub fn color_by_name(cmd: &[u8]) -> RGB8 {
    for (name, color) in NAMED_COLORS {
        if cmd.len() >= name.len() && &cmd[..name.len()] == name {
            return color;
        }
    }
    OFF
}

/// Parse a raw BLE color payload.
///
/// Returns `Some` only for a payload of exactly [`PIXEL_SIZE`] bytes;
/// anything else is dropped without an error to the peer.
pub fn pixel_from_raw(data: &[u8]) -> Option<RGB8> {
    if data.len() != PIXEL_SIZE {
        return None;
    }
    Some(RGB8 {
        r: data[0],
        g: data[1],
        b: data[2],
    })
}
