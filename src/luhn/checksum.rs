//! Parity-weighted decimal checksum.

use std::fmt;
use std::str::FromStr;

use crate::error::{ProbekitError, Result};

/// A non-empty sequence of decimal digits, most significant first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitSequence {
    digits: Vec<u8>,
}

impl DigitSequence {
    /// Parse a numeral's text into digits.
    ///
    /// Rejects empty input and any character outside `0-9`. Positions in
    /// errors are zero-based character offsets.
    pub fn parse(input: &str) -> Result<Self> {
        let digits = parse_digits(input)?;
        if digits.is_empty() {
            return Err(ProbekitError::EmptySequence);
        }
        Ok(Self { digits })
    }

    /// Digits, most significant first.
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Checksum of this sequence.
    pub fn checksum(&self) -> u8 {
        weighted_sum(&self.digits)
    }

    /// Whether the checksum is zero.
    pub fn is_valid(&self) -> bool {
        self.checksum() == 0
    }
}

impl FromStr for DigitSequence {
    type Err = ProbekitError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for DigitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in &self.digits {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

/// Parse text into digits without the non-empty requirement.
pub(crate) fn parse_digits(input: &str) -> Result<Vec<u8>> {
    input
        .chars()
        .enumerate()
        .map(|(position, character)| {
            character
                .to_digit(10)
                .map(|d| d as u8)
                .ok_or(ProbekitError::InvalidDigit {
                    character,
                    position,
                })
        })
        .collect()
}

/// Compute the checksum of a digit sequence.
///
/// Counting from the rightmost digit, digits at odd distance are summed as-is
/// and digits at even distance are doubled, with doubles above 9 reduced to
/// the sum of their own digits. The result is the total modulo 10; a
/// sequence is valid when it is 0.
///
/// # Errors
///
/// Returns `EmptySequence` for zero digits and `InvalidDigit` for any element
/// above 9.
pub fn checksum(digits: &[u8]) -> Result<u8> {
    if digits.is_empty() {
        return Err(ProbekitError::EmptySequence);
    }
    if let Some(position) = digits.iter().position(|&d| d > 9) {
        return Err(ProbekitError::InvalidDigit {
            // Out-of-range values have no single-character form.
            character: '?',
            position,
        });
    }
    Ok(weighted_sum(digits))
}

/// Check whether a numeral passes the checksum.
pub fn is_valid(input: &str) -> Result<bool> {
    Ok(DigitSequence::parse(input)?.is_valid())
}

/// Digit to append to `partial` so the whole sequence validates.
///
/// Computed as the checksum of `partial` followed by a placeholder `0`,
/// subtracted from 10 and reduced modulo 10.
pub fn check_digit(partial: &[u8]) -> Result<u8> {
    if let Some(position) = partial.iter().position(|&d| d > 9) {
        return Err(ProbekitError::InvalidDigit {
            character: '?',
            position,
        });
    }
    let mut padded = Vec::with_capacity(partial.len() + 1);
    padded.extend_from_slice(partial);
    padded.push(0);
    Ok((10 - weighted_sum(&padded)) % 10)
}

fn weighted_sum(digits: &[u8]) -> u8 {
    let total: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            let d = u32::from(d);
            if i % 2 == 0 {
                d
            } else {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            }
        })
        .sum();
    (total % 10) as u8
}
