//! # bitset.rs
//!
//! Defines a fixed-capacity bit set over scalar or multi-word storage.
//!
//! `BitSet<S>` wraps one storage value `S` implementing [`BitStore`]. Scalar
//! storage (`u16`, `u32`, `u64`) masks the index to the storage width, so an
//! out-of-range index wraps around instead of faulting. Word-array storage
//! (`BUintD32<N>`, i.e. `N` little-endian `u32` words) splits the index into
//! word `index >> 5` and bit `index & 31`, and panics when the index lies past
//! the last word.
//!
//! The 256-bit shape is `BUintD32<8>`: bit 200 lives in word 6, bit 8.

use bnum::BUintD32;
use std::fmt;

/// Backing storage of a [`BitSet`].
pub trait BitStore: Copy + Eq + fmt::Debug {
    /// Storage word returned by [`BitStore::masked_word`].
    type Word: Copy + Eq + Default + fmt::Debug;

    /// Number of addressable bits.
    const BITS: u32;

    /// Storage with every bit cleared.
    const ZERO: Self;

    fn set(&mut self, index: u32);

    fn clear(&mut self, index: u32);

    /// The storage word holding `index`, masked down to that single bit.
    fn masked_word(&self, index: u32) -> Self::Word;

    fn count_ones(&self) -> u32;

    fn trailing_zeros(&self) -> u32;

    fn leading_zeros(&self) -> u32;
}

macro_rules! scalar_store {
    ($($t:ty),*) => {
        $(
            impl BitStore for $t {
                type Word = $t;

                const BITS: u32 = <$t>::BITS;
                const ZERO: Self = 0;

                #[inline(always)]
                fn set(&mut self, index: u32) {
                    *self |= (1 as $t) << (index & (<$t>::BITS - 1));
                }

                #[inline(always)]
                fn clear(&mut self, index: u32) {
                    *self &= !((1 as $t) << (index & (<$t>::BITS - 1)));
                }

                #[inline(always)]
                fn masked_word(&self, index: u32) -> $t {
                    *self & ((1 as $t) << (index & (<$t>::BITS - 1)))
                }

                #[inline(always)]
                fn count_ones(&self) -> u32 {
                    <$t>::count_ones(*self)
                }

                #[inline(always)]
                fn trailing_zeros(&self) -> u32 {
                    <$t>::trailing_zeros(*self)
                }

                #[inline(always)]
                fn leading_zeros(&self) -> u32 {
                    <$t>::leading_zeros(*self)
                }
            }
        )*
    };
}

scalar_store!(u16, u32, u64);

impl<const N: usize> BitStore for BUintD32<N> {
    type Word = u32;

    const BITS: u32 = 32 * N as u32;
    const ZERO: Self = BUintD32::ZERO;

    #[inline(always)]
    fn set(&mut self, index: u32) {
        assert!(index < Self::BITS, "Bit {index} out of bounds.");
        self.digits_mut()[(index >> 5) as usize] |= 1u32 << (index & 31);
    }

    #[inline(always)]
    fn clear(&mut self, index: u32) {
        assert!(index < Self::BITS, "Bit {index} out of bounds.");
        self.digits_mut()[(index >> 5) as usize] &= !(1u32 << (index & 31));
    }

    #[inline(always)]
    fn masked_word(&self, index: u32) -> u32 {
        assert!(index < Self::BITS, "Bit {index} out of bounds.");
        self.digits()[(index >> 5) as usize] & (1u32 << (index & 31))
    }

    fn count_ones(&self) -> u32 {
        BUintD32::count_ones(*self)
    }

    fn trailing_zeros(&self) -> u32 {
        BUintD32::trailing_zeros(*self)
    }

    fn leading_zeros(&self) -> u32 {
        BUintD32::leading_zeros(*self)
    }
}

/// A set of `S::BITS` boolean flags packed into a single storage value.
#[derive(Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct BitSet<S: BitStore> {
    store: S,
}

pub type Bits16 = BitSet<u16>;
pub type Bits32 = BitSet<u32>;
pub type Bits64 = BitSet<u64>;
pub type Bits256 = BitSet<BUintD32<8>>;

impl<S: BitStore> BitSet<S> {
    pub const fn new() -> Self {
        BitSet { store: S::ZERO }
    }

    pub const fn from_store(store: S) -> Self {
        BitSet { store }
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    pub const fn capacity(&self) -> u32 {
        S::BITS
    }

    #[inline(always)]
    pub fn set(&mut self, index: u32) {
        self.store.set(index);
    }

    #[inline(always)]
    pub fn clear(&mut self, index: u32) {
        self.store.clear(index);
    }

    /// Whether bit `index` is set, normalized to a `bool` for every shape.
    #[inline(always)]
    pub fn get(&self, index: u32) -> bool {
        self.store.masked_word(index) != S::Word::default()
    }

    /// The raw storage word containing `index`, masked to that bit.
    ///
    /// Non-zero means set. The value is the bit's weight inside its word,
    /// not 0/1: bit 200 of a [`Bits256`] reads back as `1 << 8`.
    #[inline(always)]
    pub fn masked_word(&self, index: u32) -> S::Word {
        self.store.masked_word(index)
    }

    #[inline(always)]
    pub fn clear_all(&mut self) {
        self.store = S::ZERO;
    }

    pub fn is_empty(&self) -> bool {
        self.store == S::ZERO
    }

    pub fn count(&self) -> u32 {
        self.store.count_ones()
    }

    /// Index of the lowest set bit.
    pub fn lsb(&self) -> Option<u32> {
        if self.is_empty() {
            None
        } else {
            Some(self.store.trailing_zeros())
        }
    }

    /// Index of the highest set bit.
    pub fn msb(&self) -> Option<u32> {
        if self.is_empty() {
            None
        } else {
            Some(S::BITS - 1 - self.store.leading_zeros())
        }
    }

    /// Indices of all set bits, ascending.
    pub fn ones(&self) -> impl Iterator<Item = u32> + '_ {
        (0..S::BITS).filter(move |&i| self.get(i))
    }
}

impl<S: BitStore> Default for BitSet<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: BitStore> fmt::Debug for BitSet<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.ones()).finish()
    }
}

impl<S: BitStore> Extend<u32> for BitSet<S> {
    fn extend<I: IntoIterator<Item = u32>>(&mut self, iter: I) {
        for index in iter {
            self.set(index);
        }
    }
}

impl<S: BitStore> FromIterator<u32> for BitSet<S> {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        let mut bits = Self::new();
        bits.extend(iter);
        bits
    }
}
