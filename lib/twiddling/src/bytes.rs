//! # bytes.rs
//!
//! Bit addressing over plain byte buffers.
//!
//! Bit `index` lives in byte `index >> 3` at position `index & 7`, so bit 0 is
//! the least significant bit of the first byte. Indices past the end of the
//! slice panic like any slice index.

#[inline(always)]
pub fn set_bit(bytes: &mut [u8], index: usize) {
    bytes[index >> 3] |= 1 << (index & 7);
}

#[inline(always)]
pub fn clear_bit(bytes: &mut [u8], index: usize) {
    bytes[index >> 3] &= !(1 << (index & 7));
}

#[inline(always)]
pub fn get_bit(bytes: &[u8], index: usize) -> bool {
    bytes[index >> 3] & (1 << (index & 7)) != 0
}
