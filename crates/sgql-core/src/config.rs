//! Decode configuration.

use serde::{Deserialize, Serialize};

/// What to do when a connection's `nodes` disagree with its `edges`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MismatchPolicy {
    /// Log a warning and rebuild `nodes` from `edges`.
    #[default]
    Warn,
    /// Fail the decode with `ConnectionMismatch`.
    Reject,
}

/// Options for the framework-level decoders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeConfig {
    /// Node/edge disagreement handling.
    #[serde(default)]
    pub mismatch_policy: MismatchPolicy,

    /// Log when an empty page still carries cursors.
    #[serde(default = "default_warn_on_empty_page_cursors")]
    pub warn_on_empty_page_cursors: bool,
}

const fn default_warn_on_empty_page_cursors() -> bool {
    true
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            mismatch_policy: MismatchPolicy::default(),
            warn_on_empty_page_cursors: default_warn_on_empty_page_cursors(),
        }
    }
}

impl DecodeConfig {
    /// Strict configuration: node/edge disagreement is an error.
    #[must_use]
    pub fn strict() -> Self {
        Self::default().with_mismatch_policy(MismatchPolicy::Reject)
    }

    /// Set the node/edge mismatch policy.
    #[must_use]
    pub const fn with_mismatch_policy(mut self, policy: MismatchPolicy) -> Self {
        self.mismatch_policy = policy;
        self
    }

    /// Enable or disable the empty-page cursor warning.
    #[must_use]
    pub const fn with_empty_page_cursor_warnings(mut self, enabled: bool) -> Self {
        self.warn_on_empty_page_cursors = enabled;
        self
    }
}
