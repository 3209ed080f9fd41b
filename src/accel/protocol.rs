//! LIS3DH SPI register protocol.
//!
//! The first byte of every transaction is a command: the read bit plus
//! a 6-bit register address.  Transfers longer than two bytes also set
//! the auto-increment bit so consecutive registers stream out in one
//! transaction.

/// Register addresses are 6 bits wide.
pub const ADDR_MASK: u8 = 0x3F;

/// Single-register read command bits.
pub const CMD_READ: u8 = 0x80;

/// Multi-register read command bits (read + address auto-increment).
pub const CMD_READ_INC: u8 = 0xA0;

/// Build the command byte for reading `len` bytes starting at `addr`.
pub fn read_command(addr: u8, len: usize) -> u8 {
    if len > 2 {
        (addr & ADDR_MASK) | CMD_READ_INC
    } else {
        (addr & ADDR_MASK) | CMD_READ
    }
}
