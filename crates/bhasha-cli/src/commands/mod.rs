//! Command implementations

pub mod check;
pub mod config;
pub mod fix;

use bhasha_core::config::Settings;
use bhasha_core::error::{BhashaError, BhashaResult};
use bhasha_core::{DocType, InMemoryDocument, ModelClient, Orchestrator};
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Read a text file, normalizing line endings
pub(crate) fn read_text(path: &Path) -> BhashaResult<String> {
    let content = fs::read_to_string(path).map_err(|e| {
        BhashaError::io_with_path(
            format!("Failed to read input: {}", e),
            path.display().to_string(),
        )
    })?;
    Ok(content.replace("\r\n", "\n"))
}

pub(crate) fn write_text(path: &Path, content: &str) -> BhashaResult<()> {
    fs::write(path, content).map_err(|e| {
        BhashaError::io_with_path(
            format!("Failed to write output: {}", e),
            path.display().to_string(),
        )
    })
}

/// Wire a model client and the in-memory host into an orchestrator
pub(crate) fn build_orchestrator(
    settings: &Settings,
    host: Arc<InMemoryDocument>,
    doc_type: DocType,
) -> BhashaResult<Orchestrator<InMemoryDocument>> {
    let client = ModelClient::from_settings(settings)?;
    Ok(Orchestrator::new(
        client,
        host,
        settings.analysis.clone(),
        doc_type,
    ))
}
