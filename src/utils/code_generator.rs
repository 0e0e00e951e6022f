//! Short key generation.
//!
//! Keys are drawn uniformly, one character at a time, from the 62-symbol
//! alphanumeric alphabet. The entropy source is a pluggable [`KeyGenerator`]
//! so the store can be driven deterministically in tests.

use crate::domain::short_key::{ALPHABET, KEY_LENGTH};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of candidate short keys.
///
/// # Implementations
///
/// - [`RandomKeyGenerator`] - production generator backed by a CSPRNG
/// - [`SeededKeyGenerator`] - reproducible sequence for tests
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait KeyGenerator: Send + Sync {
    /// Produces one candidate key of [`KEY_LENGTH`] characters.
    ///
    /// Candidates are not guaranteed to be free; the caller checks for
    /// collisions.
    fn generate(&self) -> String;
}

/// Generates keys from `rand`'s thread-local CSPRNG.
///
/// The thread-local generator is seeded from OS entropy and reseeded
/// periodically, so keys are not predictable from earlier ones or from the
/// wall clock.
///
/// # Examples
///
/// ```
/// use quick_shortener::utils::code_generator::{KeyGenerator, RandomKeyGenerator};
///
/// let key = RandomKeyGenerator.generate();
/// assert_eq!(key.len(), 6);
/// assert!(key.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomKeyGenerator;

impl KeyGenerator for RandomKeyGenerator {
    fn generate(&self) -> String {
        sample_key(&mut rand::rng())
    }
}

/// Generates a reproducible key sequence from a fixed seed.
///
/// Not suitable for production: anyone who knows the seed can enumerate
/// every key.
#[derive(Debug)]
pub struct SeededKeyGenerator {
    rng: Mutex<StdRng>,
}

impl SeededKeyGenerator {
    /// Creates a generator whose output depends only on `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl KeyGenerator for SeededKeyGenerator {
    fn generate(&self) -> String {
        sample_key(&mut *self.rng.lock())
    }
}

/// Draws [`KEY_LENGTH`] independent, uniformly distributed symbols.
fn sample_key<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..KEY_LENGTH)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}
