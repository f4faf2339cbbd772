//! Default values shared by the configuration types

/// Model used when the user has not picked one
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Gemini REST endpoint root
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Start offsets for the Main, Tone, Style and ContentAnalysis tasks
pub const DEFAULT_STAGGER_MS: [u64; 4] = [0, 300, 600, 900];

/// Highlight batch items processed between host flushes
pub const HIGHLIGHT_CHUNK_SIZE: usize = 20;

/// Delay before a hover highlight is sent to the host
pub const HOVER_DEBOUNCE_MS: u64 = 300;

/// Retries after the first attempt
pub const DEFAULT_MAX_RETRIES: u32 = 1;

/// Wait before the first retry; doubled for every further retry
pub const DEFAULT_BACKOFF_BASE_MS: u64 = 1_000;

/// Connection timeout for the model service
pub const CONNECT_TIMEOUT_SECS: u64 = 30;

/// Environment variable overriding the stored credential
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Environment variable overriding the stored model
pub const MODEL_ENV: &str = "BHASHA_MODEL";
