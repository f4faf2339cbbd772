//! The shipped prompt wording

use super::targets::{DocType, StyleTarget, Tone};
use super::PromptSet;

const LANGUAGE_RULES: &str = "\
Rules for Bengali text:
- Follow the Bangla Academy standard spelling.
- Do not flag correct words, proper nouns or well-known loanwords.
- A word you echo back must be copied exactly as it appears in the text, character for character.
- Positions are zero-based word indices.
- Give every item a confidenceScore between 0 and 1. Omit items you are unsure about.";

const MAIN_SCHEMA: &str = r#"{
  "_analysis": {
    "detectedTone": "formal | informal | ...",
    "detectedStyle": "sadhu | cholito | mixed",
    "overallQuality": "short assessment"
  },
  "spellingErrors": [
    { "wrong": "word as written", "suggestions": ["fix"], "explanation": "why", "position": 0, "confidenceScore": 0.9, "severity": "critical | minor" }
  ],
  "languageStyleMixing": {
    "detected": false,
    "recommendedStyle": "sadhu | cholito",
    "reason": "why",
    "corrections": [
      { "current": "text", "suggestion": "replacement", "type": "verb | pronoun | other", "position": 0, "confidenceScore": 0.9 }
    ]
  },
  "punctuationIssues": [
    { "issue": "what is wrong", "currentSentence": "sentence as written", "correctedSentence": "fixed sentence", "explanation": "why", "position": 0, "confidenceScore": 0.9 }
  ],
  "euphonyImprovements": [
    { "current": "phrase", "suggestions": ["better phrase"], "reason": "why", "position": 0, "confidenceScore": 0.9 }
  ]
}"#;

const TONE_SCHEMA: &str = r#"{
  "toneConversions": [
    { "current": "text as written", "suggestion": "rewritten text", "reason": "why", "position": 0, "confidenceScore": 0.9 }
  ]
}"#;

const STYLE_SCHEMA: &str = r#"{
  "styleConversions": [
    { "current": "text as written", "suggestion": "converted text", "type": "verb | pronoun | other", "position": 0, "confidenceScore": 0.9 }
  ]
}"#;

const CONTENT_SCHEMA: &str = r#"{
  "contentType": "letter | report | essay | ...",
  "description": "one line",
  "missingElements": ["element"],
  "suggestions": ["suggestion"]
}"#;

/// Prompts sent to the hosted model unless the caller supplies its own set
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPrompts;

impl DefaultPrompts {
    pub fn new() -> Self {
        Self
    }
}

impl PromptSet for DefaultPrompts {
    fn main(&self, text: &str, doc_type: DocType) -> String {
        format!(
            "{role}\nDocument type: {label}. Focus: {focus}\n\n\
             First describe the text in \"_analysis\", then list spelling errors, \
             Sadhu/Cholito mixing, punctuation issues and euphony improvements.\n\n\
             {rules}\n\nAnswer with JSON only, in this shape:\n{schema}\n\nText:\n\"\"\"\n{text}\n\"\"\"",
            role = doc_type.role(),
            label = doc_type.label(),
            focus = doc_type.focus(),
            rules = LANGUAGE_RULES,
            schema = MAIN_SCHEMA,
            text = text,
        )
    }

    fn tone(&self, text: &str, tone: Tone) -> String {
        format!(
            "You rewrite Bengali text toward a target tone: {label} ({name}).\n{instruction}\n\
             Only list passages that do not already match the tone.\n\n\
             {rules}\n\nAnswer with JSON only, in this shape:\n{schema}\n\nText:\n\"\"\"\n{text}\n\"\"\"",
            label = tone.label(),
            name = tone.as_str(),
            instruction = tone.instruction(),
            rules = LANGUAGE_RULES,
            schema = TONE_SCHEMA,
            text = text,
        )
    }

    fn style(&self, text: &str, style: StyleTarget) -> String {
        format!(
            "Convert Bengali text to {label}.\n{instruction}\n\
             List each word or phrase that must change; leave words that already fit.\n\n\
             {rules}\n\nAnswer with JSON only, in this shape:\n{schema}\n\nText:\n\"\"\"\n{text}\n\"\"\"",
            label = style.label(),
            instruction = style.instruction(),
            rules = LANGUAGE_RULES,
            schema = STYLE_SCHEMA,
            text = text,
        )
    }

    fn content(&self, text: &str, doc_type: DocType) -> String {
        format!(
            "{role}\nIdentify what kind of {label} document this is and which structural \
             elements it lacks (salutation, subject line, closing and the like). \
             Write descriptions and suggestions in Bengali.\n\n\
             Answer with JSON only, in this shape:\n{schema}\n\nText:\n\"\"\"\n{text}\n\"\"\"",
            role = doc_type.role(),
            label = doc_type.label(),
            schema = CONTENT_SCHEMA,
            text = text,
        )
    }
}
