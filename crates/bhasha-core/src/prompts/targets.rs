//! Document types and rewrite targets

use crate::error::BhashaError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of document being checked; selects the reviewer persona
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocType {
    #[default]
    Generic,
    Academic,
    Official,
    Marketing,
    Social,
}

impl DocType {
    pub const ALL: [DocType; 5] = [
        DocType::Generic,
        DocType::Academic,
        DocType::Official,
        DocType::Marketing,
        DocType::Social,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Academic => "academic",
            Self::Official => "official",
            Self::Marketing => "marketing",
            Self::Social => "social",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Generic => "সাধারণ",
            Self::Academic => "একাডেমিক",
            Self::Official => "অফিশিয়াল",
            Self::Marketing => "মার্কেটিং",
            Self::Social => "সোশ্যাল মিডিয়া",
        }
    }

    /// Persona the model is asked to adopt
    pub fn role(&self) -> &'static str {
        match self {
            Self::Generic => {
                "You are a meticulous Bengali copy editor who keeps text grammatical and natural."
            }
            Self::Academic => {
                "You are a Bengali academic reviewer. Favour precision, objectivity and formal vocabulary."
            }
            Self::Official => {
                "You are an editor of Bengali government correspondence. Protocol and courtesy matter most."
            }
            Self::Marketing => {
                "You are a senior Bengali copywriter. The text must attract and convert readers."
            }
            Self::Social => {
                "You edit Bengali social media posts. Keep the voice conversational and engaging."
            }
        }
    }

    /// What the reviewer should pay most attention to
    pub fn focus(&self) -> &'static str {
        match self {
            Self::Generic => "Standard grammar, Bangla Academy spelling and clarity.",
            Self::Academic => {
                "Consistent sentence structure, correct terminology and logical flow."
            }
            Self::Official => "Honorifics, formal verb forms and concise wording.",
            Self::Marketing => "Flow, strong word choice and a clear call to action.",
            Self::Social => {
                "Real typos only; creative punctuation and informal words are acceptable."
            }
        }
    }

    /// The tone a document of this type usually wants
    pub fn default_tone(&self) -> Tone {
        match self {
            Self::Generic => Tone::Neutral,
            Self::Academic => Tone::Academic,
            Self::Official => Tone::Formal,
            Self::Marketing => Tone::Persuasive,
            Self::Social => Tone::Informal,
        }
    }
}

impl fmt::Display for DocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocType {
    type Err = BhashaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocType::ALL
            .into_iter()
            .find(|d| d.as_str() == s.trim().to_lowercase())
            .ok_or_else(|| {
                BhashaError::invalid_input_field(format!("unknown document type '{}'", s), "doc_type")
            })
    }
}

/// Target communicative register for tone rewrites
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Formal,
    Informal,
    Professional,
    Friendly,
    Respectful,
    Persuasive,
    Neutral,
    Academic,
}

impl Tone {
    pub const ALL: [Tone; 8] = [
        Tone::Formal,
        Tone::Informal,
        Tone::Professional,
        Tone::Friendly,
        Tone::Respectful,
        Tone::Persuasive,
        Tone::Neutral,
        Tone::Academic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Formal => "formal",
            Self::Informal => "informal",
            Self::Professional => "professional",
            Self::Friendly => "friendly",
            Self::Respectful => "respectful",
            Self::Persuasive => "persuasive",
            Self::Neutral => "neutral",
            Self::Academic => "academic",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Formal => "আনুষ্ঠানিক",
            Self::Informal => "অনানুষ্ঠানিক",
            Self::Professional => "পেশাদার",
            Self::Friendly => "বন্ধুত্বপূর্ণ",
            Self::Respectful => "সম্মানজনক",
            Self::Persuasive => "প্রভাবশালী",
            Self::Neutral => "নিরপেক্ষ",
            Self::Academic => "শিক্ষামূলক",
        }
    }

    pub(crate) fn instruction(&self) -> &'static str {
        match self {
            Self::Formal => "Address the reader as 'apni', avoid slang, stay polite and distant.",
            Self::Informal => "Use 'tumi', contractions and the rhythm of speech between friends.",
            Self::Professional => "Be brief and businesslike; no emotional colouring.",
            Self::Friendly => "Be warm and welcoming; prefer positive words.",
            Self::Respectful => "Use high honorifics and humble self-reference, as toward elders.",
            Self::Persuasive => "Prefer action verbs, stress benefits and create urgency.",
            Self::Neutral => "Objective, journalistic wording without bias.",
            Self::Academic => "Scholarly vocabulary and third-person perspective.",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tone {
    type Err = BhashaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tone::ALL
            .into_iter()
            .find(|t| t.as_str() == s.trim().to_lowercase())
            .ok_or_else(|| BhashaError::invalid_input_field(format!("unknown tone '{}'", s), "tone"))
    }
}

/// Sadhu (literary) or Cholito (colloquial) register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleTarget {
    Sadhu,
    Cholito,
}

impl StyleTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sadhu => "sadhu",
            Self::Cholito => "cholito",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Sadhu => "সাধু রীতি",
            Self::Cholito => "চলিত রীতি",
        }
    }

    pub(crate) fn instruction(&self) -> &'static str {
        match self {
            Self::Sadhu => {
                "Use full classical verb forms (korchi -> koritechi) and classical pronouns (tar -> tahar)."
            }
            Self::Cholito => {
                "Use short modern verb forms (koritechi -> korchi) and standard pronouns (tahar -> tar)."
            }
        }
    }
}

impl fmt::Display for StyleTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StyleTarget {
    type Err = BhashaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sadhu" => Ok(Self::Sadhu),
            "cholito" | "chalito" => Ok(Self::Cholito),
            other => Err(BhashaError::invalid_input_field(
                format!("unknown style '{}'", other),
                "style",
            )),
        }
    }
}

/// Which optional rewrites a run should ask for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalysisTargets {
    pub tone: Option<Tone>,
    pub style: Option<StyleTarget>,
}

impl AnalysisTargets {
    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = Some(tone);
        self
    }

    pub fn with_style(mut self, style: StyleTarget) -> Self {
        self.style = Some(style);
        self
    }
}
