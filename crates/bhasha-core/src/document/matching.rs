//! Search heuristics

use super::types::SearchOptions;

/// Characters that turn a pattern into a phrase rather than a word
const PHRASE_MARKERS: [char; 5] = ['.', ',', '।', '?', '!'];

/// Whole-word matching applies to single words only: no whitespace and
/// none of `. , । ? !`.
pub fn whole_word_applies(text: &str) -> bool {
    !text
        .chars()
        .any(|c| c.is_whitespace() || PHRASE_MARKERS.contains(&c))
}

/// Case-insensitive search, whole-word for single words
pub fn search_options_for(text: &str) -> SearchOptions {
    SearchOptions {
        match_case: false,
        whole_word: whole_word_applies(text),
    }
}
