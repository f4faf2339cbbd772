//! The document host seam

use super::types::{HighlightColor, HighlightTarget, HostText, MatchHandle, SearchOptions};
use crate::error::BhashaResult;
use async_trait::async_trait;

/// An externally owned, editable document.
///
/// Mutations (`set_highlight`, `replace_text`) may be queued by the host
/// and are only guaranteed to have taken effect after `flush` returns.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentHost: Send + Sync {
    /// Current selection (if any) and the full body text
    async fn selection_or_body_text(&self) -> BhashaResult<HostText>;

    /// Every occurrence of `pattern` in the body, in document order
    async fn search(&self, pattern: &str, options: SearchOptions) -> BhashaResult<Vec<MatchHandle>>;

    /// Set or clear (`None`) the highlight of a match or the whole document
    async fn set_highlight(
        &self,
        target: HighlightTarget,
        color: Option<HighlightColor>,
    ) -> BhashaResult<()>;

    async fn replace_text(&self, handle: MatchHandle, text: &str) -> BhashaResult<()>;

    /// Apply queued mutations
    async fn flush(&self) -> BhashaResult<()>;
}
