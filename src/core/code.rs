//! Four-digit code representation
//!
//! A Code is both the secret the player is trying to break and every guess
//! they submit. Parsing lives here so that format validation has exactly one
//! definition.

use super::{CODE_LENGTH, MAX_DIGIT};
use std::fmt;
use std::str::FromStr;

/// A 4-digit Mastermind code
///
/// Digits are stored as values `0..=9`, not ASCII bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code([u8; CODE_LENGTH]);

/// Error type for unparsable codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    InvalidLength(usize),
    InvalidCharacters,
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Code must be exactly {CODE_LENGTH} digits, got {len}")
            }
            Self::InvalidCharacters => write!(f, "Code must contain only the digits 0-9"),
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    /// Number of distinct codes (10^4)
    pub const COUNT: usize = 10_000;

    /// Parse a code from player input
    ///
    /// Surrounding whitespace is ignored. Leading zeros are kept, sign
    /// characters are rejected.
    ///
    /// # Errors
    /// Returns `CodeError` if:
    /// - Length is not exactly 4 after trimming
    /// - Contains anything other than ASCII digits
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Code;
    ///
    /// let code = Code::new(" 0042 ").unwrap();
    /// assert_eq!(code.to_string(), "0042");
    ///
    /// assert!(Code::new("123").is_err());
    /// assert!(Code::new("-123").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, CodeError> {
        let text = text.trim();

        let len = text.chars().count();
        if len != CODE_LENGTH {
            return Err(CodeError::InvalidLength(len));
        }

        let mut digits = [0u8; CODE_LENGTH];
        for (slot, ch) in digits.iter_mut().zip(text.chars()) {
            let value = ch.to_digit(10).ok_or(CodeError::InvalidCharacters)?;
            // to_digit accepts only ASCII '0'..='9' for radix 10
            *slot = value as u8;
        }

        Ok(Self(digits))
    }

    /// Build a code from raw digit values
    ///
    /// # Panics
    /// Panics if any digit is greater than 9
    #[inline]
    #[must_use]
    pub(crate) const fn from_digits(digits: [u8; CODE_LENGTH]) -> Self {
        let mut i = 0;
        while i < CODE_LENGTH {
            assert!(digits[i] <= MAX_DIGIT, "Code digits must be 0-9");
            i += 1;
        }
        Self(digits)
    }

    /// Build the code whose decimal reading is `index` (0 ↔ "0000", 9999 ↔ "9999")
    ///
    /// # Panics
    /// Panics if `index >= 10_000`
    #[must_use]
    pub const fn from_index(index: u16) -> Self {
        assert!((index as usize) < Self::COUNT, "Code index must be < 10000");
        let mut digits = [0u8; CODE_LENGTH];
        let mut rest = index;
        let mut i = CODE_LENGTH;
        while i > 0 {
            i -= 1;
            digits[i] = (rest % 10) as u8;
            rest /= 10;
        }
        Self(digits)
    }

    /// Decimal reading of the code, the inverse of [`Code::from_index`]
    #[must_use]
    pub fn index(self) -> u16 {
        self.0
            .iter()
            .fold(0u16, |acc, &digit| acc * 10 + u16::from(digit))
    }

    /// Every possible code in ascending order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..Self::COUNT as u16).map(Self::from_index)
    }

    /// Get the digits as an array
    #[inline]
    #[must_use]
    pub const fn digits(&self) -> &[u8; CODE_LENGTH] {
        &self.0
    }

    /// Get the digit at a specific position (0-3)
    ///
    /// # Panics
    /// Panics if position >= 4
    #[inline]
    #[must_use]
    pub const fn digit_at(&self, position: usize) -> u8 {
        self.0[position]
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.0 {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

impl FromStr for Code {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Check whether player input is an acceptable guess
///
/// True iff the trimmed input is exactly four ASCII digits.
///
/// # Examples
/// ```
/// use mastermind::core::is_valid_format;
///
/// assert!(is_valid_format("4815"));
/// assert!(!is_valid_format("123a"));
/// ```
#[must_use]
pub fn is_valid_format(input: &str) -> bool {
    Code::new(input).is_ok()
}
