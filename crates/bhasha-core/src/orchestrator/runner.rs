use super::notice::{NOTICE_NO_TEXT, NOTICE_RUN_DONE, Notice};
use super::task::{RunSummary, TaskFailure, TaskKind};
use crate::config::AnalysisConfig;
use crate::document::{
    DocumentHost, DocumentSync, HighlightColor, HighlightItem, HoverHighlighter, ReplaceOutcome,
};
use crate::error::{BhashaError, BhashaResult};
use crate::llm::{CallOptions, ModelClient};
use crate::normalizer::ResponseNormalizer;
use crate::prompts::{AnalysisTargets, DefaultPrompts, DocType, PromptSet};
use crate::store::{RunId, SuggestionStore, ViewFilter};
use crate::suggestion::{Category, Suggestion, count_words};
use futures::StreamExt;
use futures::stream::FuturesUnordered;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::time::sleep;
use tracing::{debug, info, instrument, warn};

/// Drives analysis runs and the user actions on their results
pub struct Orchestrator<H: DocumentHost + 'static> {
    client: ModelClient,
    prompts: Arc<dyn PromptSet>,
    normalizer: ResponseNormalizer,
    sync: Arc<DocumentSync<H>>,
    store: Arc<RwLock<SuggestionStore>>,
    hover: HoverHighlighter<H>,
    config: AnalysisConfig,
    doc_type: DocType,
}

impl<H: DocumentHost + 'static> Orchestrator<H> {
    pub fn new(client: ModelClient, host: Arc<H>, config: AnalysisConfig, doc_type: DocType) -> Self {
        let sync = Arc::new(DocumentSync::with_chunk_size(host, config.highlight_chunk_size));
        let hover = HoverHighlighter::new(Arc::clone(&sync), config.hover_debounce);
        Self {
            client,
            prompts: Arc::new(DefaultPrompts),
            normalizer: ResponseNormalizer::new(config.thresholds),
            sync,
            store: Arc::new(RwLock::new(SuggestionStore::new())),
            hover,
            config,
            doc_type,
        }
    }

    /// Use a different prompt wording
    pub fn with_prompts(mut self, prompts: Arc<dyn PromptSet>) -> Self {
        self.prompts = prompts;
        self
    }

    pub fn doc_type(&self) -> DocType {
        self.doc_type
    }

    pub fn sync(&self) -> &Arc<DocumentSync<H>> {
        &self.sync
    }

    /// Shared handle for readers that poll during a run
    pub fn store(&self) -> Arc<RwLock<SuggestionStore>> {
        Arc::clone(&self.store)
    }

    /// Read the active text from the document and analyse it
    pub async fn check_document(&self, targets: AnalysisTargets) -> BhashaResult<RunSummary> {
        let text = self.sync.read_active_text().await?;
        if text.trim().is_empty() {
            return Err(BhashaError::invalid_input_field(NOTICE_NO_TEXT, "text"));
        }
        self.run_analysis(&text, targets).await
    }

    /// Run every applicable task against `text`.
    ///
    /// Task errors do not fail the run; they are collected in the summary
    /// and the first one becomes the notice. Host errors while resetting
    /// highlights abort the run.
    #[instrument(skip(self, text), fields(words = count_words(text)))]
    pub async fn run_analysis(
        &self,
        text: &str,
        targets: AnalysisTargets,
    ) -> BhashaResult<RunSummary> {
        let run_id = self.store.write().await.reset();
        self.hover.cancel();
        self.sync.clear_all_highlights().await?;
        info!(run_id, "analysis started");

        let client = &self.client;
        let mut tasks = FuturesUnordered::new();
        for task in TaskKind::ALL {
            let Some(prompt) = self.prompt_for(task, text, &targets) else {
                continue;
            };
            let delay = self.config.stagger_for(task);
            let options = CallOptions::new(self.config.temperatures.for_task(task));
            tasks.push(async move {
                if !delay.is_zero() {
                    sleep(delay).await;
                }
                debug!(task = %task, "task started");
                (task, client.analyze(&prompt, options).await)
            });
        }

        let mut completed = Vec::new();
        let mut failures = Vec::new();
        let mut highlights = WordHighlights::default();

        while let Some((task, result)) = tasks.next().await {
            match result {
                Ok(payload) => {
                    self.apply(run_id, task, text, payload.as_ref(), &mut highlights)
                        .await;
                    completed.push(task);
                }
                Err(error) => {
                    warn!(task = %task, error = %error, code = error.error_code(), "task failed");
                    failures.push(TaskFailure { task, error });
                }
            }
        }

        let mut highlight_error = None;
        let mut highlighted = 0;
        if self.store.read().await.run_id() == run_id {
            let items = highlights.into_items();
            if !items.is_empty() {
                match self.sync.highlight_batch(&items).await {
                    Ok(count) => highlighted = count,
                    Err(error) => {
                        warn!(error = %error, "highlighting failed");
                        highlight_error = Some(error);
                    }
                }
            }
        } else {
            debug!(run_id, "run superseded, skipping highlights");
        }

        let notice = match failures.first() {
            Some(failure) => Notice::from_error(&failure.error),
            None => match &highlight_error {
                Some(error) => Notice::from_error(error),
                None => Notice::success(NOTICE_RUN_DONE),
            },
        };

        info!(
            run_id,
            completed = completed.len(),
            failed = failures.len(),
            highlighted,
            "analysis finished"
        );

        Ok(RunSummary {
            run_id,
            completed,
            failures,
            highlighted,
            notice,
        })
    }

    fn prompt_for(&self, task: TaskKind, text: &str, targets: &AnalysisTargets) -> Option<String> {
        match task {
            TaskKind::Main => Some(self.prompts.main(text, self.doc_type)),
            TaskKind::Tone => targets.tone.map(|tone| self.prompts.tone(text, tone)),
            TaskKind::Style => targets.style.map(|style| self.prompts.style(text, style)),
            TaskKind::Content => Some(self.prompts.content(text, self.doc_type)),
        }
    }

    /// Normalize one task's payload and write its slice
    async fn apply(
        &self,
        run_id: RunId,
        task: TaskKind,
        text: &str,
        payload: Option<&Value>,
        highlights: &mut WordHighlights,
    ) {
        let Some(payload) = payload else {
            debug!(task = %task, "empty result");
            return;
        };

        let mut store = self.store.write().await;
        let written = match task {
            TaskKind::Main => {
                let findings = self.normalizer.normalize_main(payload, text);
                highlights.spelling = findings
                    .spelling
                    .iter()
                    .map(|s| HighlightItem::new(&s.wrong, HighlightColor::spelling(), s.position))
                    .collect();
                store.set_main(run_id, findings)
            }
            TaskKind::Tone => {
                let tone = self.normalizer.normalize_tone(payload);
                highlights.tone = tone
                    .iter()
                    .map(|t| HighlightItem::new(&t.current, HighlightColor::tone(), t.position))
                    .collect();
                store.set_tone(run_id, tone)
            }
            TaskKind::Style => {
                let style = self.normalizer.normalize_style(payload);
                highlights.style = style
                    .iter()
                    .map(|s| HighlightItem::new(&s.current, HighlightColor::style(), s.position))
                    .collect();
                store.set_style(run_id, style)
            }
            TaskKind::Content => {
                let content = self.normalizer.normalize_content(payload);
                store.set_content(run_id, content)
            }
        };

        if written {
            debug!(task = %task, total = store.total(), "slice written");
        }
    }

    /// Apply a replacement and invalidate every suggestion for `old`
    pub async fn accept(&self, old: &str, new: &str) -> BhashaResult<ReplaceOutcome> {
        self.hover.cancel();
        let mut store = self.store.write().await;
        let outcome = store.replace(&self.sync, old, new).await?;
        info!(replaced = outcome.is_replaced(), "suggestion accepted");
        Ok(outcome)
    }

    /// Drop matching suggestions from one category
    pub async fn dismiss(&self, category: Category, text: &str) -> usize {
        self.store.write().await.dismiss(category, text)
    }

    pub async fn snapshot(&self) -> SuggestionStore {
        self.store.read().await.clone()
    }

    pub async fn visible(&self, filter: ViewFilter) -> Vec<Suggestion> {
        self.store.read().await.visible(filter)
    }

    /// Debounced highlight of a single suggestion
    pub fn hover(&self, text: &str, color: HighlightColor, position: usize) {
        self.hover.schedule(HighlightItem::new(text, color, position));
    }
}

/// Word-level findings of the current run, merged in a fixed order
#[derive(Default)]
struct WordHighlights {
    spelling: Vec<HighlightItem>,
    tone: Vec<HighlightItem>,
    style: Vec<HighlightItem>,
}

impl WordHighlights {
    fn into_items(self) -> Vec<HighlightItem> {
        let mut items = self.spelling;
        items.extend(self.tone);
        items.extend(self.style);
        items
    }
}
