use super::filter::ViewFilter;
use crate::document::{DocumentHost, DocumentSync, ReplaceOutcome};
use crate::error::BhashaResult;
use crate::normalizer::MainFindings;
use crate::suggestion::{
    AnalysisMeta, AnalysisStats, Category, ContentAnalysis, EuphonyImprovement, NormalizedKey,
    PunctuationIssue, SpellingSuggestion, StyleMixingReport, StyleSuggestion, Suggestion,
    SuggestionRecord, ToneSuggestion,
};
use serde::Serialize;
use tracing::debug;

/// Identifies one analysis run; bumped by every `reset`
pub type RunId = u64;

/// The six category lists, stats and extras of the current run.
///
/// Cloning yields a snapshot for the UI.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionStore {
    run_id: RunId,
    spelling: Vec<SpellingSuggestion>,
    tone: Vec<ToneSuggestion>,
    style: Vec<StyleSuggestion>,
    mixing: Option<StyleMixingReport>,
    punctuation: Vec<PunctuationIssue>,
    euphony: Vec<EuphonyImprovement>,
    stats: AnalysisStats,
    content: Option<ContentAnalysis>,
    meta: Option<AnalysisMeta>,
}

impl SuggestionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear everything and start a new run
    pub fn reset(&mut self) -> RunId {
        let run_id = self.run_id + 1;
        *self = Self {
            run_id,
            ..Self::default()
        };
        run_id
    }

    pub fn run_id(&self) -> RunId {
        self.run_id
    }

    fn is_current(&self, run_id: RunId, slice: &str) -> bool {
        if run_id != self.run_id {
            debug!(run_id, current = self.run_id, slice, "discarding stale result");
            return false;
        }
        true
    }

    /// Write the main task's slices; false when `run_id` is stale
    pub fn set_main(&mut self, run_id: RunId, findings: MainFindings) -> bool {
        if !self.is_current(run_id, "main") {
            return false;
        }
        self.spelling = findings.spelling;
        self.punctuation = findings.punctuation;
        self.euphony = findings.euphony;
        self.mixing = findings.mixing;
        self.stats = findings.stats;
        self.meta = findings.meta;
        true
    }

    pub fn set_tone(&mut self, run_id: RunId, tone: Vec<ToneSuggestion>) -> bool {
        if !self.is_current(run_id, "tone") {
            return false;
        }
        self.tone = tone;
        true
    }

    pub fn set_style(&mut self, run_id: RunId, style: Vec<StyleSuggestion>) -> bool {
        if !self.is_current(run_id, "style") {
            return false;
        }
        self.style = style;
        true
    }

    pub fn set_content(&mut self, run_id: RunId, content: Option<ContentAnalysis>) -> bool {
        if !self.is_current(run_id, "content") {
            return false;
        }
        self.content = content;
        true
    }

    /// Replace the first occurrence of `old` in the document; on success
    /// drop every suggestion targeting `old` from every category.
    ///
    /// A miss leaves the store untouched.
    pub async fn replace<H: DocumentHost>(
        &mut self,
        sync: &DocumentSync<H>,
        old: &str,
        new: &str,
    ) -> BhashaResult<ReplaceOutcome> {
        let outcome = sync.replace_first(old, new).await?;
        if outcome.is_replaced() {
            let removed = self.invalidate(old);
            debug!(removed, "invalidated suggestions for replaced text");
        }
        Ok(outcome)
    }

    /// Remove items whose identity normalizes like `raw`, in all categories.
    /// Returns the number of removed items.
    pub fn invalidate(&mut self, raw: &str) -> usize {
        let key = NormalizedKey::new(raw);
        Category::ALL
            .into_iter()
            .map(|category| self.remove_matching(category, &key))
            .sum()
    }

    /// Remove items whose identity normalizes like `raw`, in one category
    pub fn dismiss(&mut self, category: Category, raw: &str) -> usize {
        let key = NormalizedKey::new(raw);
        self.remove_matching(category, &key)
    }

    fn remove_matching(&mut self, category: Category, key: &NormalizedKey) -> usize {
        match category {
            Category::Spelling => retain_unmatched(&mut self.spelling, key),
            Category::Tone => retain_unmatched(&mut self.tone, key),
            Category::Style => retain_unmatched(&mut self.style, key),
            Category::Punctuation => retain_unmatched(&mut self.punctuation, key),
            Category::Euphony => retain_unmatched(&mut self.euphony, key),
            Category::Mixing => {
                let Some(report) = self.mixing.take() else {
                    return 0;
                };
                let before = report.corrections.len();
                self.mixing = report.retain_corrections(|c| !key.matches(c.identity_text()));
                before - self.mixing.as_ref().map_or(0, |r| r.corrections.len())
            }
        }
    }

    /// Flattened suggestions for display, in category order
    pub fn visible(&self, filter: ViewFilter) -> Vec<Suggestion> {
        let mut out = Vec::new();
        for category in Category::ALL {
            if !filter.shows(category) {
                continue;
            }
            match category {
                Category::Spelling => extend(&mut out, &self.spelling),
                Category::Tone => extend(&mut out, &self.tone),
                Category::Style => extend(&mut out, &self.style),
                Category::Mixing => {
                    if let Some(report) = &self.mixing {
                        extend(&mut out, &report.corrections);
                    }
                }
                Category::Punctuation => extend(&mut out, &self.punctuation),
                Category::Euphony => extend(&mut out, &self.euphony),
            }
        }
        out
    }

    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::Spelling => self.spelling.len(),
            Category::Tone => self.tone.len(),
            Category::Style => self.style.len(),
            Category::Mixing => self.mixing.as_ref().map_or(0, |r| r.corrections.len()),
            Category::Punctuation => self.punctuation.len(),
            Category::Euphony => self.euphony.len(),
        }
    }

    pub fn total(&self) -> usize {
        Category::ALL.into_iter().map(|c| self.count(c)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn spelling(&self) -> &[SpellingSuggestion] {
        &self.spelling
    }

    pub fn tone(&self) -> &[ToneSuggestion] {
        &self.tone
    }

    pub fn style(&self) -> &[StyleSuggestion] {
        &self.style
    }

    pub fn mixing(&self) -> Option<&StyleMixingReport> {
        self.mixing.as_ref()
    }

    pub fn punctuation(&self) -> &[PunctuationIssue] {
        &self.punctuation
    }

    pub fn euphony(&self) -> &[EuphonyImprovement] {
        &self.euphony
    }

    pub fn stats(&self) -> AnalysisStats {
        self.stats
    }

    pub fn content(&self) -> Option<&ContentAnalysis> {
        self.content.as_ref()
    }

    pub fn meta(&self) -> Option<&AnalysisMeta> {
        self.meta.as_ref()
    }
}

fn retain_unmatched<T: SuggestionRecord>(items: &mut Vec<T>, key: &NormalizedKey) -> usize {
    let before = items.len();
    items.retain(|item| !key.matches(item.identity_text()));
    before - items.len()
}

fn extend<T: SuggestionRecord>(out: &mut Vec<Suggestion>, items: &[T]) {
    out.extend(items.iter().cloned().map(SuggestionRecord::into_suggestion));
}
