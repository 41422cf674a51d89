//! Fixed-width bit sets, byte-array bit addressing and power-of-two rounding.
//!
//! Everything in this crate is a pure value operation: nothing allocates,
//! blocks or shares state. Bit sets are owned by whoever holds them and need
//! external locking if mutated from several threads.

pub mod bitset;
pub mod bytes;
pub mod pow2;

pub use bitset::{BitSet, BitStore, Bits16, Bits256, Bits32, Bits64};
pub use pow2::{next_pow2, next_pow2_u64, prev_pow2, prev_pow2_u64};
