//! `bhasha check`: analyze a file and report

use super::{build_orchestrator, read_text};
use crate::console::CliConsole;
use bhasha_core::error::{BhashaError, BhashaResult};
use bhasha_core::orchestrator::RunSummary;
use bhasha_core::{
    AnalysisTargets, Category, DocType, InMemoryDocument, SettingsStore, StyleTarget,
    SuggestionStore, Tone, ViewFilter,
};
use colored::*;
use serde_json::{Value, json};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

pub struct CheckOptions {
    pub file: PathBuf,
    pub tone: Option<String>,
    pub style: Option<String>,
    pub filter: String,
    pub doc_type: Option<String>,
    pub json: bool,
    pub select: Option<String>,
}

impl CheckOptions {
    fn targets(&self) -> BhashaResult<AnalysisTargets> {
        let mut targets = AnalysisTargets::default();
        if let Some(tone) = &self.tone {
            targets = targets.with_tone(tone.parse::<Tone>()?);
        }
        if let Some(style) = &self.style {
            targets = targets.with_style(style.parse::<StyleTarget>()?);
        }
        Ok(targets)
    }
}

pub async fn run(store: &SettingsStore, options: CheckOptions, verbose: bool) -> BhashaResult<()> {
    let mut console = CliConsole::new(verbose);

    let settings = store.load_with_env()?;
    let targets = options.targets()?;
    let filter: ViewFilter = options.filter.parse()?;
    let doc_type = match &options.doc_type {
        Some(raw) => raw.parse::<DocType>()?,
        None => settings.doc_type,
    };

    let host = Arc::new(InMemoryDocument::new(read_text(&options.file)?));
    if let Some(passage) = &options.select {
        if !host.select(passage) {
            return Err(BhashaError::invalid_input_field(
                format!("'{}' does not occur in {}", passage, options.file.display()),
                "select",
            ));
        }
    }

    let orchestrator = build_orchestrator(&settings, host, doc_type)?;
    console.info(&format!(
        "Checking {} as {} with {}",
        options.file.display(),
        doc_type,
        settings.model
    ));

    if !options.json {
        console.start_progress("বিশ্লেষণ চলছে...");
    }
    let result = orchestrator.check_document(targets).await;
    console.finish_progress();
    let summary = result?;
    let snapshot = orchestrator.snapshot().await;
    debug!(
        run_id = summary.run_id,
        total = snapshot.total(),
        failed = summary.failures.len(),
        "check finished"
    );

    if options.json {
        let report = json_report(&summary, &snapshot, filter);
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(&console, &summary, &snapshot, filter);
    Ok(())
}

fn json_report(summary: &RunSummary, snapshot: &SuggestionStore, filter: ViewFilter) -> Value {
    let failures: Vec<Value> = summary
        .failures
        .iter()
        .map(|f| {
            json!({
                "task": f.task.as_str(),
                "code": f.error.error_code(),
                "message": f.error.user_message(),
            })
        })
        .collect();

    // Mixing and content sections belong to the full view only
    let mixing = snapshot.mixing().filter(|_| filter.shows(Category::Mixing));
    let content = snapshot.content().filter(|_| filter == ViewFilter::All);

    json!({
        "runId": summary.run_id,
        "notice": summary.notice,
        "filter": filter.as_str(),
        "stats": snapshot.stats(),
        "suggestions": snapshot.visible(filter),
        "styleMixing": mixing,
        "content": content,
        "analysis": snapshot.meta(),
        "highlighted": summary.highlighted,
        "failures": failures,
    })
}

fn print_report(
    console: &CliConsole,
    summary: &RunSummary,
    snapshot: &SuggestionStore,
    filter: ViewFilter,
) {
    for failure in &summary.failures {
        console.warn(&format!("{}: {}", failure.task, failure.error.user_message()));
        console.info(&failure.error.to_string());
    }

    console.print_header("বিশ্লেষণ");
    console.print_stats(&snapshot.stats());

    if let Some(meta) = snapshot.meta() {
        console.info(&format!(
            "tone: {} · style: {} · quality: {}",
            meta.detected_tone, meta.detected_style, meta.overall_quality
        ));
    }

    let show_mixing = filter.shows(Category::Mixing);
    if let Some(mixing) = snapshot.mixing().filter(|m| m.detected && show_mixing) {
        let recommended = mixing.recommended_style.as_deref().unwrap_or("-");
        console.warn(&format!("সাধু-চলিত মিশ্রণ পাওয়া গেছে (প্রস্তাবিত: {})", recommended));
        if let Some(reason) = &mixing.reason {
            println!("  {}", reason.dimmed());
        }
    }

    let visible = snapshot.visible(filter);
    if visible.is_empty() {
        println!();
        console.success("কোনো সংশোধনী নেই");
    } else {
        console.print_suggestions(&visible);
    }

    if let Some(content) = snapshot.content().filter(|_| filter == ViewFilter::All) {
        console.print_header(&format!("বিষয়বস্তু: {}", content.content_type));
        if let Some(description) = &content.description {
            println!("  {}", description);
        }
        for missing in &content.missing_elements {
            println!("  {} {}", "−".red(), missing);
        }
        for suggestion in &content.suggestions {
            println!("  {} {}", "+".green(), suggestion);
        }
    }

    println!();
    console.print_separator();
    console.notice(&summary.notice);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> CheckOptions {
        CheckOptions {
            file: PathBuf::from("essay.txt"),
            tone: None,
            style: None,
            filter: "all".to_string(),
            doc_type: None,
            json: false,
            select: None,
        }
    }

    #[test]
    fn test_targets_from_flags() {
        let options = CheckOptions {
            tone: Some("formal".to_string()),
            style: Some("chalito".to_string()),
            ..options()
        };
        let targets = options.targets().unwrap();
        assert_eq!(targets.tone, Some(Tone::Formal));
        assert_eq!(targets.style, Some(StyleTarget::Cholito));
    }

    #[test]
    fn test_unknown_tone_is_rejected() {
        let options = CheckOptions {
            tone: Some("sarcastic".to_string()),
            ..options()
        };
        assert!(options.targets().is_err());
    }

    #[test]
    fn test_json_report_shape() {
        let snapshot = SuggestionStore::new();
        let summary = RunSummary {
            run_id: 1,
            completed: Vec::new(),
            failures: Vec::new(),
            highlighted: 0,
            notice: bhasha_core::Notice::success("ok"),
        };
        let report = json_report(&summary, &snapshot, ViewFilter::Spelling);
        assert_eq!(report["filter"], "spelling");
        assert_eq!(report["stats"]["accuracy"], 100);
        assert!(report["suggestions"].as_array().unwrap().is_empty());
        assert!(report["content"].is_null());
    }

    #[test]
    fn test_json_report_hides_sections_outside_filter() {
        let mut snapshot = SuggestionStore::new();
        let run_id = snapshot.reset();
        let findings = bhasha_core::normalizer::MainFindings {
            mixing: Some(serde_json::from_value(json!({
                "detected": true,
                "corrections": [{ "current": "করিয়াছি", "suggestion": "করেছি" }]
            }))
            .unwrap()),
            ..Default::default()
        };
        assert!(snapshot.set_main(run_id, findings));
        let content = serde_json::from_value(json!({ "contentType": "essay" })).unwrap();
        assert!(snapshot.set_content(run_id, Some(content)));
        let summary = RunSummary {
            run_id,
            completed: Vec::new(),
            failures: Vec::new(),
            highlighted: 0,
            notice: bhasha_core::Notice::success("ok"),
        };

        let full = json_report(&summary, &snapshot, ViewFilter::All);
        assert_eq!(full["styleMixing"]["detected"], true);
        assert_eq!(full["content"]["contentType"], "essay");

        let spelling = json_report(&summary, &snapshot, ViewFilter::Spelling);
        assert!(spelling["styleMixing"].is_null());
        assert!(spelling["content"].is_null());
    }
}
