//! CLI console utilities

use bhasha_core::suggestion::AnalysisStats;
use bhasha_core::{Category, Notice, Suggestion};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// CLI console for formatted output
pub struct CliConsole {
    verbose: bool,
    progress_bar: Option<ProgressBar>,
}

impl CliConsole {
    pub const fn new(verbose: bool) -> Self {
        Self {
            verbose,
            progress_bar: None,
        }
    }

    /// Print an info message (verbose only)
    pub fn info(&self, message: &str) {
        if self.verbose {
            println!("{} {}", "ℹ".blue().bold(), message);
        }
    }

    pub fn success(&self, message: &str) {
        println!("{} {}", "✓".green().bold(), message.green());
    }

    pub fn warn(&self, message: &str) {
        println!("{} {}", "⚠".yellow().bold(), message.yellow());
    }

    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red().bold(), message.red());
    }

    pub fn print_header(&self, title: &str) {
        println!();
        println!("{}", title.bold().underline());
        println!("{}", "=".repeat(title.chars().count()).dimmed());
    }

    pub fn print_separator(&self) {
        println!("{}", "-".repeat(50).dimmed());
    }

    /// Show the outcome notice of a run or an action
    pub fn notice(&self, notice: &Notice) {
        if notice.is_error() {
            self.error(&notice.text);
        } else {
            self.success(&notice.text);
        }
    }

    /// Start a spinner on stderr; indicatif hides it off a terminal
    pub fn start_progress(&mut self, message: &str) {
        let pb = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        pb.set_style(style);
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        self.progress_bar = Some(pb);
    }

    pub fn finish_progress(&mut self) {
        if let Some(pb) = self.progress_bar.take() {
            pb.finish_and_clear();
        }
    }

    pub fn print_stats(&self, stats: &AnalysisStats) {
        let accuracy = format!("{}%", stats.accuracy);
        let accuracy = match stats.accuracy {
            90..=100 => accuracy.green(),
            70..=89 => accuracy.yellow(),
            _ => accuracy.red(),
        };
        println!(
            "{} {}   {} {}   {} {}",
            "শব্দ:".dimmed(),
            stats.total_words,
            "ভুল:".dimmed(),
            stats.error_count,
            "শুদ্ধতা:".dimmed(),
            accuracy.bold()
        );
    }

    /// Print suggestions grouped under their category titles
    pub fn print_suggestions(&self, suggestions: &[Suggestion]) {
        for category in Category::ALL {
            let group: Vec<&Suggestion> = suggestions
                .iter()
                .filter(|s| s.category() == category)
                .collect();
            if group.is_empty() {
                continue;
            }

            self.print_header(&format!("{} ({})", category.title(), group.len()));
            for suggestion in group {
                self.print_suggestion(suggestion);
            }
        }
    }

    fn print_suggestion(&self, suggestion: &Suggestion) {
        let candidates = suggestion.candidates().join(" / ");
        println!(
            "  {} {} {}",
            suggestion.identity_text().red().strikethrough(),
            "→".dimmed(),
            candidates.green().bold()
        );
        if let Some(explanation) = suggestion.explanation().filter(|e| !e.trim().is_empty()) {
            println!("    {}", explanation.dimmed());
        }
        if self.verbose {
            println!(
                "    {}",
                format!(
                    "word #{} · confidence {:.2}",
                    suggestion.position(),
                    suggestion.confidence()
                )
                .dimmed()
            );
        }
    }
}
