//! Secret code generation
//!
//! The round engine never touches a random number generator directly; it asks
//! a [`SecretSource`] so tests can pin the secret.

use crate::core::{CODE_LENGTH, Code, MAX_DIGIT};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Something that can produce the secret for a new game
pub trait SecretSource {
    /// Produce the secret for the next game
    fn generate(&mut self) -> Code;
}

/// Secrets drawn uniformly from all 10,000 codes
///
/// Each digit is drawn independently from `0..=9`.
pub struct RandomSecret {
    rng: StdRng,
}

impl RandomSecret {
    /// Seed from operating system entropy
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seed deterministically, so the same seed yields the same sequence of games
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSecret {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl SecretSource for RandomSecret {
    fn generate(&mut self) -> Code {
        let digits: [u8; CODE_LENGTH] =
            std::array::from_fn(|_| self.rng.random_range(0..=MAX_DIGIT));
        Code::from_digits(digits)
    }
}

/// Predetermined secrets, handed out in order and repeated cyclically
#[derive(Debug, Clone)]
pub struct FixedSecret {
    codes: Vec<Code>,
    next: usize,
}

impl FixedSecret {
    /// Always yield the same secret
    #[must_use]
    pub fn new(code: Code) -> Self {
        Self {
            codes: vec![code],
            next: 0,
        }
    }

    /// Yield each code in turn, starting over after the last one
    ///
    /// Returns `None` if `codes` is empty.
    #[must_use]
    pub fn cycle(codes: Vec<Code>) -> Option<Self> {
        if codes.is_empty() {
            None
        } else {
            Some(Self { codes, next: 0 })
        }
    }
}

impl SecretSource for FixedSecret {
    fn generate(&mut self) -> Code {
        let code = self.codes[self.next];
        self.next = (self.next + 1) % self.codes.len();
        code
    }
}

impl<T: SecretSource + ?Sized> SecretSource for Box<T> {
    fn generate(&mut self) -> Code {
        (**self).generate()
    }
}
