//! # pow2.rs
//!
//! Rounds unsigned integers to neighbouring powers of two.
//!
//! Both directions use the bit-smear trick: OR the value with right-shifted
//! copies of itself until every bit below the highest set bit is one. The
//! 32-bit and 64-bit variants are separate functions; nothing here widens or
//! truncates silently.
//!
//! `next_pow2(0)` is `0`, not `1`. The initial decrement wraps to all ones and
//! the final increment wraps back to zero. Callers sizing buffers from a
//! possibly-zero length must handle that case themselves.

/// Smallest power of two `>= v`, for `v` in `1..=1 << 31`.
///
/// Returns `0` for `v == 0` and for any `v > 1 << 31`.
#[inline]
pub const fn next_pow2(v: u32) -> u32 {
    let mut v = v.wrapping_sub(1);
    v |= v >> 1;
    v |= v >> 2;
    v |= v >> 4;
    v |= v >> 8;
    v |= v >> 16;
    v.wrapping_add(1)
}

/// Largest power of two `<= v`. Returns `0` for `v == 0`.
#[inline]
pub const fn prev_pow2(v: u32) -> u32 {
    let mut v = v;
    v |= v >> 1;
    v |= v >> 2;
    v |= v >> 4;
    v |= v >> 8;
    v |= v >> 16;
    v - (v >> 1)
}

/// 64-bit [`next_pow2`], for `v` in `1..=1 << 63`.
#[inline]
pub const fn next_pow2_u64(v: u64) -> u64 {
    let mut v = v.wrapping_sub(1);
    v |= v >> 1;
    v |= v >> 2;
    v |= v >> 4;
    v |= v >> 8;
    v |= v >> 16;
    v |= v >> 32;
    v.wrapping_add(1)
}

/// 64-bit [`prev_pow2`].
#[inline]
pub const fn prev_pow2_u64(v: u64) -> u64 {
    let mut v = v;
    v |= v >> 1;
    v |= v >> 2;
    v |= v >> 4;
    v |= v >> 8;
    v |= v >> 16;
    v |= v >> 32;
    v - (v >> 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    const RNG_SEED: u64 = 0xDEADBEEFCAFEBABE;

    fn check_next(v: u32) {
        let p = next_pow2(v);
        assert!(p.is_power_of_two(), "next_pow2({v}) = {p}");
        assert!(p >= v);
        // The power of two just below `p` must not reach `v`.
        assert!(p == 1 || p / 2 < v, "next_pow2({v}) = {p} is not minimal");
    }

    fn check_prev(v: u32) {
        let p = prev_pow2(v);
        assert!(p.is_power_of_two(), "prev_pow2({v}) = {p}");
        assert!(p <= v);
        assert!((p as u64) * 2 > v as u64, "prev_pow2({v}) = {p} is not maximal");
    }

    #[test]
    fn concrete_cases() {
        assert_eq!(next_pow2(1), 1);
        assert_eq!(next_pow2(2), 2);
        assert_eq!(next_pow2(5), 8);
        assert_eq!(next_pow2(256), 256);
        assert_eq!(next_pow2(257), 512);
        assert_eq!(next_pow2(1 << 31), 1 << 31);

        assert_eq!(prev_pow2(1), 1);
        assert_eq!(prev_pow2(5), 4);
        assert_eq!(prev_pow2(256), 256);
        assert_eq!(prev_pow2(257), 256);
        assert_eq!(prev_pow2(u32::MAX), 1 << 31);
    }

    #[test]
    fn zero_edge_cases() {
        assert_eq!(next_pow2(0), 0);
        assert_eq!(prev_pow2(0), 0);
        assert_eq!(next_pow2_u64(0), 0);
        assert_eq!(prev_pow2_u64(0), 0);
    }

    #[test]
    fn past_top_power_wraps_to_zero() {
        assert_eq!(next_pow2((1 << 31) + 1), 0);
        assert_eq!(next_pow2(u32::MAX), 0);
    }

    #[test]
    fn boundaries_around_every_power() {
        for shift in 0..32 {
            let p = 1u32 << shift;
            for v in [p - 1, p, p.saturating_add(1)] {
                if v == 0 {
                    continue;
                }
                check_prev(v);
                if v <= 1 << 31 {
                    check_next(v);
                }
            }
        }
    }

    #[test]
    fn sampled_domain() {
        let mut rng = StdRng::seed_from_u64(RNG_SEED);
        for _ in 0..100_000 {
            let v = rng.gen_range(1..=1u32 << 31);
            check_next(v);
            check_prev(v);
        }
        for v in 1..=4096 {
            check_next(v);
            check_prev(v);
        }
    }

    #[test]
    fn wide_variants_agree_and_extend() {
        let mut rng = StdRng::seed_from_u64(RNG_SEED);
        for _ in 0..10_000 {
            let v = rng.gen_range(1..=1u32 << 31);
            assert_eq!(next_pow2_u64(v as u64), next_pow2(v) as u64);
            assert_eq!(prev_pow2_u64(v as u64), prev_pow2(v) as u64);
        }

        assert_eq!(next_pow2_u64((1 << 32) + 1), 1 << 33);
        assert_eq!(next_pow2_u64(1 << 63), 1 << 63);
        assert_eq!(prev_pow2_u64(u64::MAX), 1 << 63);
        assert_eq!(prev_pow2_u64((1 << 40) + 12345), 1 << 40);
    }

    #[test]
    fn usable_in_const_context() {
        const SIZE: u32 = next_pow2(600);
        const FLOOR: u64 = prev_pow2_u64(600);
        assert_eq!(SIZE, 1024);
        assert_eq!(FLOOR, 512);
    }
}
