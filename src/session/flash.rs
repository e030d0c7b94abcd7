//! One-shot notices carried across a redirect.
//!
//! A handler queues a flash with [`AuthContext::flash`](super::AuthContext::flash)
//! before redirecting; the next rendered page takes every pending flash out of
//! the session cookie and shows it once.

use serde::{Deserialize, Serialize};

/// Styling category of a notice. The name doubles as a CSS class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Success,
    Info,
    Warning,
    Danger,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Success => "success",
            Level::Info => "info",
            Level::Warning => "warning",
            Level::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub level: Level,
    pub message: String,
}
