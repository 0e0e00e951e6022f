//! Short key shape and reserved values.

/// Number of characters in every generated short key.
pub const KEY_LENGTH: usize = 6;

/// Symbols a short key is drawn from: lowercase, uppercase, digits.
pub const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Keys that collide with fixed route segments and can never be served
/// through `GET /{code}`.
pub const RESERVED_KEYS: &[&str] = &["health"];

/// Returns true if `key` has the shape of a generated short key.
///
/// Anything else can never be present in the store.
pub fn is_well_formed(key: &str) -> bool {
    key.len() == KEY_LENGTH && key.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// Returns true if `key` is shadowed by a fixed route.
pub fn is_reserved(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}
