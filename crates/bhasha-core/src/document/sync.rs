//! Host operations with explicit flushing

use super::host::DocumentHost;
use super::matching::search_options_for;
use super::types::{HighlightColor, HighlightItem, HighlightTarget, MatchHandle, ReplaceOutcome};
use crate::config::HIGHLIGHT_CHUNK_SIZE;
use crate::error::BhashaResult;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, instrument};

/// Search, highlight and replace against a `DocumentHost`.
///
/// Every public operation ends with a flush. Operations are serialized:
/// one holds the host until its final flush returns.
pub struct DocumentSync<H: DocumentHost> {
    host: Arc<H>,
    chunk_size: usize,
    gate: Mutex<()>,
}

impl<H: DocumentHost> DocumentSync<H> {
    pub fn new(host: Arc<H>) -> Self {
        Self::with_chunk_size(host, HIGHLIGHT_CHUNK_SIZE)
    }

    pub fn with_chunk_size(host: Arc<H>, chunk_size: usize) -> Self {
        Self {
            host,
            chunk_size: chunk_size.max(1),
            gate: Mutex::new(()),
        }
    }

    pub fn host(&self) -> &Arc<H> {
        &self.host
    }

    /// Selection text when it is not blank, otherwise the body, with line
    /// breaks normalized to `\n`
    pub async fn read_active_text(&self) -> BhashaResult<String> {
        let _guard = self.gate.lock().await;
        self.host.flush().await?;
        let text = self.host.selection_or_body_text().await?;
        let active = match text.selection {
            Some(selection) if !selection.trim().is_empty() => selection,
            _ => text.body,
        };
        Ok(normalize_line_breaks(&active))
    }

    /// All matches of `text`, searched with the whole-word heuristic
    pub async fn search_all(&self, text: &str) -> BhashaResult<Vec<MatchHandle>> {
        let _guard = self.gate.lock().await;
        let matches = self.search_unflushed(text).await?;
        self.host.flush().await?;
        Ok(matches)
    }

    /// Highlight every occurrence of `text`; returns the number of matches
    pub async fn highlight(&self, text: &str, color: HighlightColor) -> BhashaResult<usize> {
        let _guard = self.gate.lock().await;
        let matches = self.search_unflushed(text).await?;
        self.host.flush().await?;
        for handle in &matches {
            self.host
                .set_highlight(HighlightTarget::Match(*handle), Some(color.clone()))
                .await?;
        }
        self.host.flush().await?;
        Ok(matches.len())
    }

    /// Highlight many items, deduplicated and processed in chunks.
    ///
    /// Per chunk: all searches, one flush, then the highlights. A final
    /// flush follows the last chunk. Returns the number of highlighted
    /// matches.
    #[instrument(skip(self, items), fields(items = items.len()))]
    pub async fn highlight_batch(&self, items: &[HighlightItem]) -> BhashaResult<usize> {
        let unique = dedupe(items);
        if unique.is_empty() {
            return Ok(0);
        }

        let _guard = self.gate.lock().await;
        let mut highlighted = 0;
        for chunk in unique.chunks(self.chunk_size) {
            let mut found = Vec::with_capacity(chunk.len());
            for item in chunk {
                found.push((item, self.search_unflushed(&item.text).await?));
            }
            self.host.flush().await?;

            for (item, matches) in found {
                for handle in matches {
                    self.host
                        .set_highlight(HighlightTarget::Match(handle), Some(item.color.clone()))
                        .await?;
                    highlighted += 1;
                }
            }
        }
        self.host.flush().await?;

        debug!(unique = unique.len(), highlighted, "highlight batch applied");
        Ok(highlighted)
    }

    /// Replace the first match of `old` with `new` and clear its highlight
    #[instrument(skip(self))]
    pub async fn replace_first(&self, old: &str, new: &str) -> BhashaResult<ReplaceOutcome> {
        let _guard = self.gate.lock().await;
        let matches = self.search_unflushed(old).await?;
        self.host.flush().await?;

        let Some(first) = matches.first().copied() else {
            debug!("replacement target not found");
            return Ok(ReplaceOutcome::NotFound);
        };

        self.host.replace_text(first, new).await?;
        self.host
            .set_highlight(HighlightTarget::Match(first), None)
            .await?;
        self.host.flush().await?;
        Ok(ReplaceOutcome::Replaced)
    }

    pub async fn clear_all_highlights(&self) -> BhashaResult<()> {
        let _guard = self.gate.lock().await;
        self.host
            .set_highlight(HighlightTarget::WholeDocument, None)
            .await?;
        self.host.flush().await
    }

    /// Blank text never reaches the host
    async fn search_unflushed(&self, text: &str) -> BhashaResult<Vec<MatchHandle>> {
        let clean = text.trim();
        if clean.is_empty() {
            return Ok(Vec::new());
        }
        self.host.search(clean, search_options_for(clean)).await
    }
}

fn normalize_line_breaks(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Full-tuple equality, first occurrence wins
fn dedupe(items: &[HighlightItem]) -> Vec<HighlightItem> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}
