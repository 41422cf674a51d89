//! `min`/`max` over `PartialOrd`, so they also accept floats.
//!
//! On a tie, or when the values are unordered (NaN), both return `b`.

#[inline]
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if a > b {
        a
    } else {
        b
    }
}

#[inline]
pub fn min<T: PartialOrd>(a: T, b: T) -> T {
    if a < b {
        a
    } else {
        b
    }
}
