//! Checksum-valid test card generation.
//!
//! Generated numbers are synthetic test data. The random source is injectable
//! so tests can use a fixed seed; nothing here is suitable for cryptographic
//! use.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{ProbekitError, Result};

use super::checksum::{check_digit, parse_digits};

/// Upper bound on cards produced by a single batch request.
pub const MAX_BATCH_SIZE: usize = 50;

/// First year of the expiry window when none is configured.
pub const DEFAULT_EXPIRY_START_YEAR: u16 = 2024;

/// Number of years, inclusive, that expiry dates are drawn from.
pub const EXPIRY_WINDOW_YEARS: u16 = 7;

/// An illustrative expiration date. Carries no validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryDate {
    /// Month in `1..=12`.
    pub month: u8,
    /// Four-digit year.
    pub year: u16,
}

impl fmt::Display for ExpiryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}|{}", self.month, self.year)
    }
}

/// A generated number with its expiry, rendered as `NUMBER|MM|YYYY`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedCard {
    pub number: String,
    pub expiry: ExpiryDate,
}

impl fmt::Display for GeneratedCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.number, self.expiry)
    }
}

/// Generates numbers that pass the decimal checksum.
///
/// # Example
///
/// ```
/// use probekit::luhn::CardGenerator;
///
/// let mut a = CardGenerator::seeded(42);
/// let mut b = CardGenerator::seeded(42);
/// assert_eq!(a.generate("4", 16).unwrap(), b.generate("4", 16).unwrap());
/// ```
#[derive(Debug)]
pub struct CardGenerator<R = StdRng> {
    rng: R,
    expiry_start_year: u16,
}

impl CardGenerator<StdRng> {
    /// Create a generator seeded from the operating system.
    ///
    /// Output is not reproducible across runs.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Create a generator with a fixed seed for reproducible output.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for CardGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> CardGenerator<R> {
    /// Create a generator around any random source.
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            expiry_start_year: DEFAULT_EXPIRY_START_YEAR,
        }
    }

    /// Set the first year of the expiry window.
    pub fn with_expiry_start_year(mut self, year: u16) -> Self {
        self.expiry_start_year = year;
        self
    }

    /// First year of the expiry window.
    pub fn expiry_start_year(&self) -> u16 {
        self.expiry_start_year
    }

    /// Generate a number of exactly `length` digits starting with `prefix`.
    ///
    /// The digits between the prefix and the final check digit are uniform
    /// random.
    ///
    /// # Errors
    ///
    /// Returns `InvalidLength` if `length <= prefix.len()` and `InvalidDigit`
    /// if the prefix contains a non-digit.
    pub fn generate(&mut self, prefix: &str, length: usize) -> Result<String> {
        let mut digits = parse_digits(prefix)?;
        if length <= digits.len() {
            return Err(ProbekitError::InvalidLength {
                prefix_len: digits.len(),
                length,
            });
        }

        let filler = length - digits.len() - 1;
        digits.extend((0..filler).map(|_| self.rng.random_range(0..10u8)));
        digits.push(check_digit(&digits)?);

        Ok(digits.iter().map(|d| char::from(b'0' + d)).collect())
    }

    /// Draw a month in `1..=12` and a year from the fixed window.
    pub fn generate_expiry(&mut self) -> ExpiryDate {
        let first_year = self.expiry_start_year;
        let last_year = first_year.saturating_add(EXPIRY_WINDOW_YEARS - 1);
        ExpiryDate {
            month: self.rng.random_range(1..=12u8),
            year: self.rng.random_range(first_year..=last_year),
        }
    }

    /// Generate a number together with an expiry date.
    pub fn generate_card(&mut self, prefix: &str, length: usize) -> Result<GeneratedCard> {
        let number = self.generate(prefix, length)?;
        let expiry = self.generate_expiry();
        Ok(GeneratedCard { number, expiry })
    }

    /// Generate up to [`MAX_BATCH_SIZE`] cards.
    ///
    /// Requests above the limit are clamped; callers that care can compare
    /// `count` against the returned length.
    pub fn generate_batch(
        &mut self,
        count: usize,
        prefix: &str,
        length: usize,
    ) -> Result<Vec<GeneratedCard>> {
        let count = count.min(MAX_BATCH_SIZE);
        tracing::debug!(count, prefix, length, "generating card batch");
        (0..count)
            .map(|_| self.generate_card(prefix, length))
            .collect()
    }
}
