use crate::error::BhashaError;
use crate::suggestion::Category;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which categories the suggestion list shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewFilter {
    #[default]
    All,
    Spelling,
    Punctuation,
}

impl ViewFilter {
    pub fn shows(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Spelling => category == Category::Spelling,
            Self::Punctuation => category == Category::Punctuation,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Spelling => "spelling",
            Self::Punctuation => "punctuation",
        }
    }
}

impl fmt::Display for ViewFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewFilter {
    type Err = BhashaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "spelling" => Ok(Self::Spelling),
            "punct" | "punctuation" => Ok(Self::Punctuation),
            other => Err(BhashaError::invalid_input_field(
                format!("unknown view filter '{}'", other),
                "filter",
            )),
        }
    }
}
