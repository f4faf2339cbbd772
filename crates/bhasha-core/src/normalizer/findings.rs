use crate::suggestion::{
    AnalysisMeta, AnalysisStats, EuphonyImprovement, PunctuationIssue, SpellingSuggestion,
    StyleMixingReport,
};

/// Everything the main task contributes to the store
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MainFindings {
    pub spelling: Vec<SpellingSuggestion>,
    pub punctuation: Vec<PunctuationIssue>,
    pub euphony: Vec<EuphonyImprovement>,
    pub mixing: Option<StyleMixingReport>,
    pub stats: AnalysisStats,
    pub meta: Option<AnalysisMeta>,
}

impl MainFindings {
    pub fn is_empty(&self) -> bool {
        self.spelling.is_empty()
            && self.punctuation.is_empty()
            && self.euphony.is_empty()
            && self.mixing.is_none()
    }
}
