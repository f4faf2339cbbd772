//! Settings management commands
//!
//! Every `set-*` command writes the file immediately; `show` never writes.

use crate::console::CliConsole;
use bhasha_core::config::{Settings, SettingsStore};
use bhasha_core::error::{BhashaError, BhashaResult};
use bhasha_core::DocType;
use colored::*;

const SETTINGS_SAVED: &str = "সেটিংস সংরক্ষিত হয়েছে!";

/// Show the current settings
pub fn show(store: &SettingsStore) -> BhashaResult<()> {
    let console = CliConsole::new(true);
    console.print_header("Settings");

    if !store.path().exists() {
        console.warn(&format!("No settings file at {}", store.path().display()));
        console.info("Using defaults");
    }

    let settings = store.load_with_env()?;
    print_settings(store, &settings);

    if let Err(e) = settings.validate() {
        println!();
        console.warn(&e.to_string());
    }
    Ok(())
}

fn print_settings(store: &SettingsStore, settings: &Settings) {
    println!("{}: {}", "File".bold(), store.path().display());
    println!("{}: {}", "API key".bold(), settings.masked_api_key());
    println!("{}: {}", "Model".bold(), settings.model);
    println!(
        "{}: {} ({})",
        "Document type".bold(),
        settings.doc_type,
        settings.doc_type.label()
    );
    println!("{}: {}", "Base URL".bold(), settings.base_url);
    println!(
        "{}: {}",
        "Max retries".bold(),
        settings.analysis.retry.max_retries
    );
}

pub fn set_key(store: &SettingsStore, key: &str) -> BhashaResult<()> {
    let key = key.trim();
    if key.is_empty() {
        return Err(BhashaError::invalid_input_field("API key is empty", "api_key"));
    }
    update(store, |settings| settings.api_key = key.to_string())
}

pub fn set_model(store: &SettingsStore, model: &str) -> BhashaResult<()> {
    let model = model.trim();
    if model.is_empty() {
        return Err(BhashaError::invalid_input_field("model is empty", "model"));
    }
    update(store, |settings| settings.model = model.to_string())
}

pub fn set_doc_type(store: &SettingsStore, raw: &str) -> BhashaResult<()> {
    let doc_type: DocType = raw.parse()?;
    update(store, |settings| settings.doc_type = doc_type)
}

/// Load without environment overrides so they never end up on disk
fn update<F>(store: &SettingsStore, apply: F) -> BhashaResult<()>
where
    F: FnOnce(&mut Settings),
{
    let mut settings = store.load()?;
    apply(&mut settings);
    store.save(&settings)?;
    CliConsole::new(false).success(SETTINGS_SAVED);
    Ok(())
}
