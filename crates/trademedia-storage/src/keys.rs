//! Object key generation.
//!
//! Key format: `trade-{timestamp_millis}-{random}.{ext}`. The timestamp and
//! random suffix together carry enough entropy that concurrent uploads never
//! need to coordinate to avoid collisions.

use chrono::Utc;
use rand::Rng;
use trademedia_core::constants::{DEFAULT_EXTENSION, KEY_PREFIX, KEY_RANDOM_LEN};

const SUFFIX_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Generate a collision-resistant storage key for an upload.
///
/// The extension is taken from the original file name's suffix after the
/// last `.`, lowercased; names without a usable suffix fall back to
/// [`DEFAULT_EXTENSION`].
pub fn generate_object_key(original_file_name: &str) -> String {
    format!(
        "{}-{}-{}.{}",
        KEY_PREFIX,
        Utc::now().timestamp_millis(),
        random_suffix(KEY_RANDOM_LEN),
        file_extension(original_file_name)
    )
}

/// Lowercase alphanumeric token of the given length.
fn random_suffix(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| SUFFIX_CHARSET[rng.random_range(0..SUFFIX_CHARSET.len())] as char)
        .collect()
}

/// Extension of the original file name, or the default when the name has no
/// suffix. Only alphanumeric suffixes are accepted so the key stays safe for
/// every backend.
pub fn file_extension(file_name: &str) -> String {
    let suffix = match file_name.rsplit_once('.') {
        Some((_, suffix)) => suffix.to_ascii_lowercase(),
        None => return DEFAULT_EXTENSION.to_string(),
    };

    if suffix.is_empty() || !suffix.chars().all(|c| c.is_ascii_alphanumeric()) {
        DEFAULT_EXTENSION.to_string()
    } else {
        suffix
    }
}
