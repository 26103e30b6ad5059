//! Decimal checksum validation and test card generation.
//!
//! - [`checksum`] - Parity-weighted checksum over a digit sequence
//! - [`DigitSequence`] - Parsed, non-empty run of decimal digits
//! - [`CardGenerator`] - Random numbers that pass the checksum
//!
//! # Example
//!
//! ```
//! use probekit::luhn::{is_valid, CardGenerator};
//!
//! assert!(is_valid("4539148803436467").unwrap());
//! assert!(!is_valid("4539148803436468").unwrap());
//!
//! let mut generator = CardGenerator::seeded(7);
//! let number = generator.generate("4", 16).unwrap();
//! assert_eq!(number.len(), 16);
//! assert!(is_valid(&number).unwrap());
//! ```

mod checksum;
mod generator;

pub use checksum::{check_digit, checksum, is_valid, DigitSequence};
pub use generator::{
    CardGenerator, ExpiryDate, GeneratedCard, DEFAULT_EXPIRY_START_YEAR, EXPIRY_WINDOW_YEARS,
    MAX_BATCH_SIZE,
};
