//! `bhasha fix`: accept the first candidate of every spelling suggestion

use super::{build_orchestrator, read_text, write_text};
use crate::console::CliConsole;
use bhasha_core::error::BhashaResult;
use bhasha_core::suggestion::SpellingSuggestion;
use bhasha_core::{AnalysisTargets, InMemoryDocument, ReplaceOutcome, SettingsStore, TaskKind};
use colored::*;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

pub struct FixOptions {
    pub file: PathBuf,
    pub output: Option<PathBuf>,
    pub dry_run: bool,
}

/// First candidate that actually changes the text
fn replacement_for(suggestion: &SpellingSuggestion) -> Option<&str> {
    let wrong = suggestion.wrong.trim();
    suggestion
        .suggestions
        .iter()
        .map(|candidate| candidate.trim())
        .find(|candidate| !candidate.is_empty() && *candidate != wrong)
}

pub async fn run(store: &SettingsStore, options: FixOptions, verbose: bool) -> BhashaResult<()> {
    let mut console = CliConsole::new(verbose);

    let settings = store.load_with_env()?;
    let host = Arc::new(InMemoryDocument::new(read_text(&options.file)?));
    let orchestrator = build_orchestrator(&settings, Arc::clone(&host), settings.doc_type)?;

    console.start_progress("বানান পরীক্ষা চলছে...");
    let result = orchestrator.check_document(AnalysisTargets::default()).await;
    console.finish_progress();
    let summary = result?;

    if summary.failed(TaskKind::Main) {
        console.notice(&summary.notice);
        return Ok(());
    }

    let spelling = orchestrator.snapshot().await.spelling().to_vec();
    let mut applied = 0usize;
    for suggestion in &spelling {
        let Some(replacement) = replacement_for(suggestion) else {
            continue;
        };

        let outcome = orchestrator.accept(&suggestion.wrong, replacement).await?;
        match outcome {
            ReplaceOutcome::Replaced => {
                applied += 1;
                println!(
                    "  {} {} {}",
                    suggestion.wrong.red(),
                    "→".dimmed(),
                    replacement.green()
                );
            }
            // An earlier fix already covered this text
            ReplaceOutcome::NotFound => {
                console.info(&format!("{}: {}", suggestion.wrong, outcome.notice()));
            }
        }
    }

    debug!(applied, found = spelling.len(), "spelling fixes applied");
    if applied == 0 {
        console.success("কোনো বানান সংশোধন প্রয়োজন নেই");
        return Ok(());
    }

    if options.dry_run {
        console.warn(&format!("{} fixes found; nothing written (--dry-run)", applied));
        return Ok(());
    }

    let target = options.output.as_ref().unwrap_or(&options.file);
    write_text(target, &host.text())?;
    console.success(&format!("{} সংশোধন লেখা হয়েছে: {}", applied, target.display()));
    Ok(())
}
