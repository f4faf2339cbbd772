//! Configuration for Bhasha Mitra
//!
//! `Settings` holds the three persisted user values (credential, model,
//! document type) plus an optional tuning section. `SettingsStore` loads
//! them once and writes them back only on an explicit `save`.

mod analysis;
pub mod defaults;
mod settings;
mod store;

pub use analysis::{
    AnalysisConfig, ConfidenceThresholds, ParseFailurePolicy, RetryPolicy, TaskTemperatures,
};
pub use defaults::{
    DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_STAGGER_MS, HIGHLIGHT_CHUNK_SIZE,
    HOVER_DEBOUNCE_MS,
};
pub use settings::Settings;
pub use store::SettingsStore;
