//! Namespaced tag-key splitting.

use osmrel_model::DEFAULT_TAG_TYPE;

/// Split a raw tag key into its `(type, key)` pair on the first `:` only.
///
/// A key with no separator yields the [`DEFAULT_TAG_TYPE`] sentinel and
/// the key unchanged; a key with several separators keeps everything
/// after the first one inside `key`, so `type:key` always reproduces the
/// raw key exactly when `type` is not the sentinel.
pub fn split_namespaced_key(raw: &str) -> (String, String) {
    match raw.split_once(':') {
        Some((namespace, local)) => (namespace.to_string(), local.to_string()),
        None => (DEFAULT_TAG_TYPE.to_string(), raw.to_string()),
    }
}
