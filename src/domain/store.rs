//! In-memory short key to URL mapping.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::domain::error::StoreError;
use crate::domain::short_key::{is_reserved, is_well_formed};
use crate::utils::code_generator::{KeyGenerator, RandomKeyGenerator};

/// Default number of candidate keys tried before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Process-wide store of short key to target URL mappings.
///
/// Entries are created once by [`ShortenerStore::shorten`] and never
/// reassigned or removed. The map grows without bound for the lifetime of
/// the process.
///
/// # Locking
///
/// `shorten` holds the write lock across generate, check and insert, so two
/// concurrent calls can never bind the same key. `resolve` only takes the
/// read lock and runs in parallel with other lookups.
pub struct ShortenerStore {
    links: RwLock<HashMap<String, String>>,
    generator: Arc<dyn KeyGenerator>,
    max_attempts: usize,
}

impl ShortenerStore {
    /// Creates an empty store.
    ///
    /// `max_attempts` is clamped to at least one.
    pub fn new(generator: Arc<dyn KeyGenerator>, max_attempts: usize) -> Self {
        Self {
            links: RwLock::new(HashMap::new()),
            generator,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Binds `long_url` to a freshly generated short key and returns the key.
    ///
    /// A candidate that is already bound or reserved is discarded and a new
    /// one drawn, up to `max_attempts` candidates in total.
    ///
    /// # Errors
    ///
    /// - [`StoreError::EmptyInput`] if `long_url` is empty
    /// - [`StoreError::KeyGenerationExhausted`] if every candidate collided
    ///
    /// No entry is created on error.
    pub fn shorten(&self, long_url: &str) -> Result<String, StoreError> {
        if long_url.is_empty() {
            return Err(StoreError::EmptyInput);
        }

        let mut links = self.links.write();

        for _ in 0..self.max_attempts {
            let candidate = self.generator.generate();

            if is_reserved(&candidate) || links.contains_key(&candidate) {
                continue;
            }

            links.insert(candidate.clone(), long_url.to_owned());
            return Ok(candidate);
        }

        Err(StoreError::KeyGenerationExhausted {
            attempts: self.max_attempts,
        })
    }

    /// Returns the target URL bound to `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no entry exists for `key`.
    pub fn resolve(&self, key: &str) -> Result<String, StoreError> {
        let not_found = || StoreError::NotFound {
            key: key.to_owned(),
        };

        if !is_well_formed(key) {
            return Err(not_found());
        }

        self.links.read().get(key).cloned().ok_or_else(not_found)
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.links.read().len()
    }

    /// Returns true if nothing has been shortened yet.
    pub fn is_empty(&self) -> bool {
        self.links.read().is_empty()
    }

    /// Retry bound applied by [`Self::shorten`].
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }
}

impl Default for ShortenerStore {
    fn default() -> Self {
        Self::new(Arc::new(RandomKeyGenerator), DEFAULT_MAX_ATTEMPTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::short_key::{ALPHABET, KEY_LENGTH};
    use crate::utils::code_generator::{MockKeyGenerator, SeededKeyGenerator};
    use std::collections::HashSet;

    fn seeded_store(seed: u64) -> ShortenerStore {
        ShortenerStore::new(Arc::new(SeededKeyGenerator::new(seed)), DEFAULT_MAX_ATTEMPTS)
    }

    fn scripted_generator(keys: &[&str]) -> MockKeyGenerator {
        let mut keys: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
        keys.reverse();

        let mut generator = MockKeyGenerator::new();
        generator
            .expect_generate()
            .returning(move || keys.pop().expect("generator script exhausted"));
        generator
    }

    #[test]
    fn test_shorten_then_resolve_round_trip() {
        let store = ShortenerStore::default();

        let key = store.shorten("https://example.com/a").unwrap();

        assert_eq!(store.resolve(&key).unwrap(), "https://example.com/a");
    }

    #[test]
    fn test_shorten_returns_key_of_expected_shape() {
        let store = ShortenerStore::default();

        for i in 0..200 {
            let key = store.shorten(&format!("https://example.com/{i}")).unwrap();
            assert_eq!(key.len(), KEY_LENGTH);
            assert!(key.bytes().all(|b| ALPHABET.contains(&b)));
        }
    }

    #[test]
    fn test_resolve_unknown_key() {
        let store = seeded_store(1);
        store.shorten("https://example.com/a").unwrap();

        let err = store.resolve("zzzzzz").unwrap_err();

        assert_eq!(
            err,
            StoreError::NotFound {
                key: "zzzzzz".to_string()
            }
        );
    }

    #[test]
    fn test_resolve_malformed_key() {
        let store = seeded_store(1);

        assert!(matches!(store.resolve(""), Err(StoreError::NotFound { .. })));
        assert!(matches!(
            store.resolve("favicon.ico"),
            Err(StoreError::NotFound { .. })
        ));
    }

    #[test]
    fn test_shorten_empty_input_is_rejected() {
        let mut generator = MockKeyGenerator::new();
        generator.expect_generate().times(0);
        let store = ShortenerStore::new(Arc::new(generator), DEFAULT_MAX_ATTEMPTS);

        let err = store.shorten("").unwrap_err();

        assert_eq!(err, StoreError::EmptyInput);
        assert!(store.is_empty());
    }

    #[test]
    fn test_shorten_accepts_any_non_empty_string() {
        let store = seeded_store(3);

        let key = store.shorten("not a url at all").unwrap();

        assert_eq!(store.resolve(&key).unwrap(), "not a url at all");
    }

    #[test]
    fn test_same_url_twice_gets_two_keys() {
        let store = seeded_store(5);

        let first = store.shorten("https://example.com").unwrap();
        let second = store.shorten("https://example.com").unwrap();

        assert_ne!(first, second);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_shorten_many_keys_are_unique() {
        let store = ShortenerStore::default();
        let count = 10_000;

        let keys: Vec<String> = (0..count)
            .map(|i| store.shorten(&format!("https://example.com/{i}")).unwrap())
            .collect();

        let distinct: HashSet<&String> = keys.iter().collect();
        assert_eq!(distinct.len(), count);
        assert_eq!(store.len(), count);

        for (i, key) in keys.iter().enumerate() {
            assert_eq!(store.resolve(key).unwrap(), format!("https://example.com/{i}"));
        }
    }

    #[test]
    fn test_collision_is_rerolled_not_overwritten() {
        let generator = scripted_generator(&["aaaaaa", "aaaaaa", "bbbbbb"]);
        let store = ShortenerStore::new(Arc::new(generator), DEFAULT_MAX_ATTEMPTS);

        let first = store.shorten("https://first.com").unwrap();
        let second = store.shorten("https://second.com").unwrap();

        assert_eq!(first, "aaaaaa");
        assert_eq!(second, "bbbbbb");
        assert_eq!(store.resolve("aaaaaa").unwrap(), "https://first.com");
        assert_eq!(store.resolve("bbbbbb").unwrap(), "https://second.com");
    }

    #[test]
    fn test_reserved_key_is_skipped() {
        let generator = scripted_generator(&["health", "cccccc"]);
        let store = ShortenerStore::new(Arc::new(generator), DEFAULT_MAX_ATTEMPTS);

        let key = store.shorten("https://example.com").unwrap();

        assert_eq!(key, "cccccc");
        assert!(store.resolve("health").is_err());
    }

    #[test]
    fn test_exhausted_attempts() {
        let mut generator = MockKeyGenerator::new();
        generator
            .expect_generate()
            .times(1 + 3)
            .returning(|| "dddddd".to_string());
        let store = ShortenerStore::new(Arc::new(generator), 3);

        store.shorten("https://first.com").unwrap();
        let err = store.shorten("https://second.com").unwrap_err();

        assert_eq!(err, StoreError::KeyGenerationExhausted { attempts: 3 });
        assert_eq!(store.len(), 1);
        assert_eq!(store.resolve("dddddd").unwrap(), "https://first.com");
    }

    #[test]
    fn test_max_attempts_clamped_to_one() {
        let store = ShortenerStore::new(Arc::new(SeededKeyGenerator::new(9)), 0);

        assert_eq!(store.max_attempts(), 1);
        assert!(store.shorten("https://example.com").is_ok());
    }

    #[test]
    fn test_concurrent_shorten_and_resolve() {
        let store = Arc::new(ShortenerStore::default());
        let threads = 8;
        let per_thread = 500;

        let results: Vec<(String, String)> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..threads)
                .map(|t| {
                    let store = Arc::clone(&store);
                    scope.spawn(move || {
                        (0..per_thread)
                            .map(|i| {
                                let url = format!("https://example.com/{t}/{i}");
                                let key = store.shorten(&url).unwrap();
                                // Interleave reads with other threads' writes.
                                assert_eq!(store.resolve(&key).unwrap(), url);
                                (key, url)
                            })
                            .collect::<Vec<_>>()
                    })
                })
                .collect();

            handles
                .into_iter()
                .flat_map(|h| h.join().unwrap())
                .collect()
        });

        let distinct: HashSet<&String> = results.iter().map(|(k, _)| k).collect();
        assert_eq!(distinct.len(), threads * per_thread);
        assert_eq!(store.len(), threads * per_thread);

        for (key, url) in &results {
            assert_eq!(&store.resolve(key).unwrap(), url);
        }
    }
}
