//! # render.rs
//!
//! Dumps a bit set as a grid of `0`/`1` cells, lowest index first, wrapping
//! every `row_width` bits. The last row is cut short when the capacity is not
//! a multiple of the row width.

use twiddling::{BitSet, BitStore};

pub fn render<S: BitStore>(bits: &BitSet<S>, row_width: u32) -> String {
    assert!(row_width > 0, "Row width must be positive.");

    let capacity = bits.capacity();
    let mut result = String::new();
    let mut start = 0;
    while start < capacity {
        let end = capacity.min(start.saturating_add(row_width));
        for i in start..end {
            if bits.get(i) {
                result.push_str("1 ");
            } else {
                result.push_str("0 ");
            }
        }
        result.push('\n');
        start = end;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use twiddling::{Bits16, Bits256};

    #[test]
    fn renders_rows_low_bits_first() {
        let bits: Bits16 = [0, 5, 15].into_iter().collect();
        assert_eq!(
            render(&bits, 8),
            "1 0 0 0 0 1 0 0 \n0 0 0 0 0 0 0 1 \n"
        );
    }

    #[test]
    fn short_last_row() {
        let bits: Bits16 = [15].into_iter().collect();
        let text = render(&bits, 6);
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2], "0 0 0 1 ");
    }

    #[test]
    fn wide_row_is_single_line() {
        let mut bits = Bits256::new();
        bits.set(200);
        let text = render(&bits, u32::MAX);
        assert_eq!(text.lines().count(), 1);
        assert_eq!(text.matches('1').count(), 1);
        assert_eq!(text.find('1'), Some(400));
    }

    #[test]
    #[should_panic(expected = "Row width")]
    fn zero_width_panics() {
        render(&Bits16::new(), 0);
    }
}
