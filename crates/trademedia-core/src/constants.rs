//! Shared constants.

/// Prefix for every generated storage key.
pub const KEY_PREFIX: &str = "trade";

/// Extension applied when the original file name has no usable suffix.
pub const DEFAULT_EXTENSION: &str = "jpg";

/// Length of the random suffix in generated storage keys. Together with the
/// millisecond timestamp this makes key collisions negligible under
/// concurrent uploads.
pub const KEY_RANDOM_LEN: usize = 12;

/// Prefix for all API routes.
pub const API_PREFIX: &str = "/api";
