//! # parse.rs
//!
//! Parses comma separated bit index lists such as `"0, 3, 8..12"`.
//!
//! Each entry is a single index or a half-open range `a..b`. Whitespace
//! around entries and around `..` is ignored, and an empty or all-blank input
//! yields no indices. Every index must fit the capacity of the target set.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;
use twiddling::{BitSet, BitStore};

lazy_static! {
    static ref ENTRY_PATTERN: Regex = Regex::new(
        r"^\s*([0-9]+)\s*(?:\.\.\s*([0-9]+)\s*)?$"
    ).unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty entry at position {position}")]
    EmptyEntry { position: usize },
    #[error("malformed entry `{entry}`")]
    Malformed { entry: String },
    #[error("index `{digits}` does not fit in 32 bits")]
    Overflow { digits: String },
    #[error("range {start}..{end} is inverted")]
    InvertedRange { start: u32, end: u32 },
    #[error("bit {index} out of bounds for a {capacity}-bit set")]
    OutOfBounds { index: u32, capacity: u32 },
}

fn number(digits: &str) -> Result<u32, ParseError> {
    digits.parse().map_err(|_| ParseError::Overflow {
        digits: digits.to_string(),
    })
}

/// Expands `input` into indices below `capacity`, in the order written.
pub fn parse_indices(input: &str, capacity: u32) -> Result<Vec<u32>, ParseError> {
    let mut indices = Vec::new();
    if input.trim().is_empty() {
        return Ok(indices);
    }

    for (position, entry) in input.split(',').enumerate() {
        if entry.trim().is_empty() {
            return Err(ParseError::EmptyEntry { position });
        }

        let caps = ENTRY_PATTERN
            .captures(entry)
            .ok_or_else(|| ParseError::Malformed {
                entry: entry.trim().to_string(),
            })?;

        let start = number(&caps[1])?;
        let end = match caps.get(2) {
            Some(end) => {
                let end = number(end.as_str())?;
                if start > end {
                    return Err(ParseError::InvertedRange { start, end });
                }
                end
            }
            None => start.saturating_add(1),
        };

        // Empty ranges still have to start inside the set.
        if start >= capacity {
            return Err(ParseError::OutOfBounds {
                index: start,
                capacity,
            });
        }
        for index in start..end {
            if index >= capacity {
                return Err(ParseError::OutOfBounds { index, capacity });
            }
            indices.push(index);
        }
    }

    Ok(indices)
}

/// Parses `input` straight into a bit set of the matching capacity.
pub fn parse_bitset<S: BitStore>(input: &str) -> Result<BitSet<S>, ParseError> {
    Ok(parse_indices(input, S::BITS)?.into_iter().collect())
}
