//! A `DocumentHost` over an in-memory string
//!
//! Mutations are queued and applied in order on `flush`, the way a real
//! word-processor host batches them. Searches run against the flushed text.

use super::host::DocumentHost;
use super::types::{HighlightColor, HighlightTarget, HostText, MatchHandle, SearchOptions};
use crate::error::{BhashaError, BhashaResult};
use async_trait::async_trait;
use parking_lot::Mutex;
use regex::RegexBuilder;
use std::collections::HashMap;
use std::ops::Range;

/// A highlighted byte range of the body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightSpan {
    pub range: Range<usize>,
    pub color: HighlightColor,
}

#[derive(Debug, Clone)]
enum PendingOp {
    Highlight {
        target: HighlightTarget,
        color: Option<HighlightColor>,
    },
    Replace {
        handle: MatchHandle,
        text: String,
    },
}

#[derive(Debug, Default)]
struct DocState {
    body: String,
    selection: Option<Range<usize>>,
    highlights: Vec<HighlightSpan>,
    handles: HashMap<u64, Range<usize>>,
    next_handle: u64,
    /// Handles below this id were found before the previous flush
    handle_floor: u64,
    pending: Vec<PendingOp>,
    flushes: usize,
}

/// Reference document host used by the CLI and the tests
#[derive(Debug, Default)]
pub struct InMemoryDocument {
    state: Mutex<DocState>,
}

impl InMemoryDocument {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            state: Mutex::new(DocState {
                body: body.into(),
                ..Default::default()
            }),
        }
    }

    /// Select the first occurrence of `needle`; false when absent
    pub fn select(&self, needle: &str) -> bool {
        let mut state = self.state.lock();
        match state.body.find(needle) {
            Some(start) if !needle.is_empty() => {
                state.selection = Some(start..start + needle.len());
                true
            }
            _ => false,
        }
    }

    pub fn clear_selection(&self) {
        self.state.lock().selection = None;
    }

    /// Flushed body text
    pub fn text(&self) -> String {
        self.state.lock().body.clone()
    }

    pub fn highlights(&self) -> Vec<HighlightSpan> {
        self.state.lock().highlights.clone()
    }

    /// Text under each highlight span, in document order
    pub fn highlighted_texts(&self) -> Vec<(String, HighlightColor)> {
        let state = self.state.lock();
        let mut spans = state.highlights.clone();
        spans.sort_by_key(|s| s.range.start);
        spans
            .into_iter()
            .filter_map(|s| {
                state
                    .body
                    .get(s.range.clone())
                    .map(|text| (text.to_string(), s.color))
            })
            .collect()
    }

    pub fn flush_count(&self) -> usize {
        self.state.lock().flushes
    }

    pub fn pending_ops(&self) -> usize {
        self.state.lock().pending.len()
    }

    #[cfg(test)]
    fn live_handles(&self) -> usize {
        self.state.lock().handles.len()
    }
}

#[async_trait]
impl DocumentHost for InMemoryDocument {
    async fn selection_or_body_text(&self) -> BhashaResult<HostText> {
        let state = self.state.lock();
        let selection = state
            .selection
            .clone()
            .and_then(|range| state.body.get(range))
            .map(str::to_string);
        Ok(HostText {
            selection,
            body: state.body.clone(),
        })
    }

    async fn search(&self, pattern: &str, options: SearchOptions) -> BhashaResult<Vec<MatchHandle>> {
        if pattern.is_empty() {
            return Ok(Vec::new());
        }
        let regex = RegexBuilder::new(&regex::escape(pattern))
            .case_insensitive(!options.match_case)
            .build()
            .map_err(|e| BhashaError::document(format!("invalid search pattern: {}", e)))?;

        let mut state = self.state.lock();
        let ranges: Vec<Range<usize>> = regex
            .find_iter(&state.body)
            .map(|m| m.range())
            .filter(|range| !options.whole_word || at_word_boundary(&state.body, range))
            .collect();

        let handles = ranges
            .into_iter()
            .map(|range| {
                let id = state.next_handle;
                state.next_handle += 1;
                state.handles.insert(id, range);
                MatchHandle::new(id)
            })
            .collect();
        Ok(handles)
    }

    async fn set_highlight(
        &self,
        target: HighlightTarget,
        color: Option<HighlightColor>,
    ) -> BhashaResult<()> {
        self.state
            .lock()
            .pending
            .push(PendingOp::Highlight { target, color });
        Ok(())
    }

    async fn replace_text(&self, handle: MatchHandle, text: &str) -> BhashaResult<()> {
        self.state.lock().pending.push(PendingOp::Replace {
            handle,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn flush(&self) -> BhashaResult<()> {
        let mut state = self.state.lock();
        state.flushes += 1;
        let pending = std::mem::take(&mut state.pending);
        let mut first_error = None;
        for op in pending {
            let applied = match op {
                PendingOp::Highlight { target, color } => state.apply_highlight(target, color),
                PendingOp::Replace { handle, text } => state.apply_replace(handle, &text),
            };
            if let Err(e) = applied {
                first_error.get_or_insert(e);
            }
        }
        state.prune_handles();

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl DocState {
    /// A handle is good until the flush after the one that followed its search
    fn prune_handles(&mut self) {
        let floor = self.handle_floor;
        self.handles.retain(|id, _| *id >= floor);
        self.handle_floor = self.next_handle;
    }

    fn range_of(&self, handle: MatchHandle) -> BhashaResult<Range<usize>> {
        self.handles.get(&handle.id()).cloned().ok_or_else(|| {
            BhashaError::document_with_context(
                "stale match handle",
                format!("handle {}", handle.id()),
            )
        })
    }

    fn apply_highlight(
        &mut self,
        target: HighlightTarget,
        color: Option<HighlightColor>,
    ) -> BhashaResult<()> {
        match target {
            HighlightTarget::WholeDocument => {
                self.highlights.clear();
                if let Some(color) = color {
                    self.highlights.push(HighlightSpan {
                        range: 0..self.body.len(),
                        color,
                    });
                }
            }
            HighlightTarget::Match(handle) => {
                let range = self.range_of(handle)?;
                self.highlights.retain(|s| s.range != range);
                if let Some(color) = color {
                    self.highlights.push(HighlightSpan { range, color });
                }
            }
        }
        Ok(())
    }

    fn apply_replace(&mut self, handle: MatchHandle, text: &str) -> BhashaResult<()> {
        let range = self.range_of(handle)?;
        self.body.replace_range(range.clone(), text);
        let replaced = range.start..range.start + text.len();

        self.handles.retain(|id, r| {
            if *id == handle.id() {
                *r = replaced.clone();
                true
            } else {
                shift_range(r, &range, text.len())
            }
        });
        self.highlights
            .retain_mut(|span| shift_range(&mut span.range, &range, text.len()));
        let selection_kept = self
            .selection
            .as_mut()
            .map(|selection| shift_range(selection, &range, text.len()));
        if selection_kept == Some(false) {
            self.selection = None;
        }
        Ok(())
    }
}

/// Move `r` to account for `edited` becoming `new_len` bytes long.
/// Ranges enclosing the edit grow or shrink with it; ranges cut by the
/// edit are dropped (false).
fn shift_range(r: &mut Range<usize>, edited: &Range<usize>, new_len: usize) -> bool {
    let old_len = edited.len();
    if r.end <= edited.start {
        true
    } else if r.start >= edited.end {
        r.start = r.start - old_len + new_len;
        r.end = r.end - old_len + new_len;
        true
    } else if r.start <= edited.start && r.end >= edited.end {
        r.end = r.end - old_len + new_len;
        true
    } else {
        false
    }
}

/// Letters, digits, the Bengali block and the joiners continue a word
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric()
        || ('\u{0980}'..='\u{09FF}').contains(&c)
        || c == '\u{200C}'
        || c == '\u{200D}'
}

fn at_word_boundary(body: &str, range: &Range<usize>) -> bool {
    let before = body[..range.start].chars().next_back();
    let after = body[range.end..].chars().next();
    !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn whole_word() -> SearchOptions {
        SearchOptions {
            match_case: false,
            whole_word: true,
        }
    }

    #[tokio::test]
    async fn test_whole_word_respects_bengali_letters() {
        let doc = InMemoryDocument::new("কাল কালো বিকাল কাল।");
        let matches = doc.search("কাল", whole_word()).await.unwrap();
        assert_eq!(matches.len(), 2);

        let matches = doc.search("কাল", SearchOptions::default()).await.unwrap();
        assert_eq!(matches.len(), 4);
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive() {
        let doc = InMemoryDocument::new("Office office OFFICE");
        let matches = doc.search("office", whole_word()).await.unwrap();
        assert_eq!(matches.len(), 3);
    }

    #[tokio::test]
    async fn test_mutations_wait_for_flush() {
        let doc = InMemoryDocument::new("আমি ভাত খাই");
        let handle = doc.search("ভাত", whole_word()).await.unwrap()[0];
        doc.replace_text(handle, "রুটি").await.unwrap();
        assert_eq!(doc.text(), "আমি ভাত খাই");
        assert_eq!(doc.pending_ops(), 1);

        doc.flush().await.unwrap();
        assert_eq!(doc.text(), "আমি রুটি খাই");
        assert_eq!(doc.pending_ops(), 0);
    }

    #[tokio::test]
    async fn test_replace_shifts_later_highlights() {
        let doc = InMemoryDocument::new("এক দুই তিন");
        let one = doc.search("এক", whole_word()).await.unwrap()[0];
        let three = doc.search("তিন", whole_word()).await.unwrap()[0];
        doc.set_highlight(HighlightTarget::Match(three), Some(HighlightColor::spelling()))
            .await
            .unwrap();
        doc.replace_text(one, "একশো").await.unwrap();
        doc.flush().await.unwrap();

        let texts = doc.highlighted_texts();
        assert_eq!(texts, vec![("তিন".to_string(), HighlightColor::spelling())]);
    }

    #[tokio::test]
    async fn test_clear_whole_document() {
        let doc = InMemoryDocument::new("এক দুই");
        let handle = doc.search("দুই", whole_word()).await.unwrap()[0];
        doc.set_highlight(HighlightTarget::Match(handle), Some(HighlightColor::tone()))
            .await
            .unwrap();
        doc.set_highlight(HighlightTarget::WholeDocument, None)
            .await
            .unwrap();
        doc.flush().await.unwrap();
        assert!(doc.highlights().is_empty());
    }

    #[tokio::test]
    async fn test_handles_are_pruned_after_use() {
        let doc = InMemoryDocument::new("এক দুই এক");
        for _ in 0..10 {
            let handles = doc.search("এক", whole_word()).await.unwrap();
            doc.flush().await.unwrap();
            for handle in handles {
                doc.set_highlight(HighlightTarget::Match(handle), Some(HighlightColor::spelling()))
                    .await
                    .unwrap();
            }
            doc.flush().await.unwrap();
        }
        assert!(doc.live_handles() <= 2);
        assert_eq!(doc.highlights().len(), 2);
    }

    #[tokio::test]
    async fn test_handle_expires_two_flushes_later() {
        let doc = InMemoryDocument::new("এক দুই");
        let handle = doc.search("দুই", whole_word()).await.unwrap()[0];
        doc.flush().await.unwrap();
        doc.flush().await.unwrap();
        doc.set_highlight(HighlightTarget::Match(handle), Some(HighlightColor::tone()))
            .await
            .unwrap();
        let err = doc.flush().await.unwrap_err();
        assert!(matches!(err, BhashaError::Document { .. }));
    }

    #[tokio::test]
    async fn test_failed_op_does_not_drop_later_ops() {
        let doc = InMemoryDocument::new("আমি ভাত খাই");
        let handle = doc.search("ভাত", whole_word()).await.unwrap()[0];
        doc.set_highlight(
            HighlightTarget::Match(MatchHandle::new(999)),
            Some(HighlightColor::spelling()),
        )
        .await
        .unwrap();
        doc.replace_text(handle, "রুটি").await.unwrap();

        assert!(doc.flush().await.is_err());
        assert_eq!(doc.text(), "আমি রুটি খাই");
        assert_eq!(doc.pending_ops(), 0);
    }

    #[tokio::test]
    async fn test_selection() {
        let doc = InMemoryDocument::new("প্রথম লাইন\nদ্বিতীয় লাইন");
        assert!(doc.select("দ্বিতীয়"));
        let text = doc.selection_or_body_text().await.unwrap();
        assert_eq!(text.selection.as_deref(), Some("দ্বিতীয়"));
        assert!(!doc.select("নেই"));
    }
}
