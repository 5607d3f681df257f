//! Configuration types for archive loading.
//!
//! Output settings live in [`OutputConfig`](crate::core::OutputConfig).
//!
//! # Example
//!
//! ```rust
//! use hangstats::config::ArchiveConfig;
//!
//! let config = ArchiveConfig::new()
//!     .with_skip_invalid(false)
//!     .with_require_json_extension(false);
//!
//! assert!(!config.skip_invalid);
//! ```

use serde::{Deserialize, Serialize};

/// Configuration for reading a Hangouts takeout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveConfig {
    /// Reject paths that don't end in `.json` (default: true)
    pub require_json_extension: bool,

    /// Skip conversations that fail to decode instead of returning an
    /// error (default: true)
    pub skip_invalid: bool,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            require_json_extension: true,
            skip_invalid: true,
        }
    }
}

impl ArchiveConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration that fails on the first malformed conversation.
    pub fn strict() -> Self {
        Self {
            skip_invalid: false,
            ..Self::default()
        }
    }

    /// Sets whether the archive path must end in `.json`.
    #[must_use]
    pub fn with_require_json_extension(mut self, required: bool) -> Self {
        self.require_json_extension = required;
        self
    }

    /// Sets whether to skip malformed conversations.
    #[must_use]
    pub fn with_skip_invalid(mut self, skip: bool) -> Self {
        self.skip_invalid = skip;
        self
    }
}
