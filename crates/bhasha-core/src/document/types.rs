//! Values exchanged with the document host

use serde::{Deserialize, Serialize};
use std::fmt;

/// Options for a host search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchOptions {
    pub match_case: bool,
    pub whole_word: bool,
}

/// Opaque reference to one search hit; valid until the host invalidates it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchHandle(u64);

impl MatchHandle {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// What a highlight change applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightTarget {
    Match(MatchHandle),
    WholeDocument,
}

/// Highlight color as a CSS hex string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HighlightColor(String);

impl HighlightColor {
    pub const SPELLING: &'static str = "#fee2e2";
    pub const TONE: &'static str = "#fef3c7";
    pub const STYLE: &'static str = "#ccfbf1";

    pub fn new(color: impl Into<String>) -> Self {
        Self(color.into())
    }

    pub fn spelling() -> Self {
        Self::new(Self::SPELLING)
    }

    pub fn tone() -> Self {
        Self::new(Self::TONE)
    }

    pub fn style() -> Self {
        Self::new(Self::STYLE)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HighlightColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Text currently exposed by the host
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostText {
    pub selection: Option<String>,
    pub body: String,
}

/// One entry of a highlight batch; equal entries are highlighted once
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HighlightItem {
    pub text: String,
    pub color: HighlightColor,
    pub position: usize,
}

impl HighlightItem {
    pub fn new(text: impl Into<String>, color: HighlightColor, position: usize) -> Self {
        Self {
            text: text.into(),
            color,
            position,
        }
    }
}

const NOTICE_REPLACED: &str = "সংশোধিত হয়েছে ✓";
const NOTICE_NOT_FOUND: &str = "শব্দটি ডকুমেন্টে খুঁজে পাওয়া যায়নি।";

/// Result of a first-match replacement; a miss is a value, not an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplaceOutcome {
    Replaced,
    NotFound,
}

impl ReplaceOutcome {
    pub fn is_replaced(&self) -> bool {
        matches!(self, Self::Replaced)
    }

    /// Localized notice for the user
    pub fn notice(&self) -> &'static str {
        match self {
            Self::Replaced => NOTICE_REPLACED,
            Self::NotFound => NOTICE_NOT_FOUND,
        }
    }
}
