/// Builds the public short URL for `code` under `base_url`.
///
/// A trailing slash on `base_url` is tolerated.
pub fn build_short_url(base_url: &str, code: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), code)
}
