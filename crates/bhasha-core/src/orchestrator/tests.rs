use super::*;
use crate::config::{AnalysisConfig, RetryPolicy};
use crate::document::{HighlightColor, InMemoryDocument, ReplaceOutcome};
use crate::error::ErrorKind;
use crate::llm::ModelClient;
use crate::prompts::{AnalysisTargets, DocType, PromptSet, StyleTarget, Tone};
use crate::store::ViewFilter;
use crate::suggestion::Category;
use crate::testing::{ScriptedTransport, Step, gemini_reply};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// Prompts that only tag the task, so the transport can route by prefix
struct TaggedPrompts;

impl PromptSet for TaggedPrompts {
    fn main(&self, text: &str, _doc_type: DocType) -> String {
        format!("MAIN {}", text)
    }

    fn tone(&self, text: &str, tone: Tone) -> String {
        format!("TONE {} {}", tone, text)
    }

    fn style(&self, text: &str, style: StyleTarget) -> String {
        format!("STYLE {} {}", style, text)
    }

    fn content(&self, text: &str, _doc_type: DocType) -> String {
        format!("CONTENT {}", text)
    }
}

fn content_step() -> Step {
    Step::reply(gemini_reply(&json!({
        "contentType": "চিঠি",
        "missingElements": [],
        "suggestions": []
    })))
}

fn orchestrator(
    transport: Arc<ScriptedTransport>,
    doc: Arc<InMemoryDocument>,
    retry: RetryPolicy,
) -> Orchestrator<InMemoryDocument> {
    let config = AnalysisConfig {
        retry: retry.clone(),
        ..Default::default()
    };
    Orchestrator::new(ModelClient::new(transport, retry), doc, config, DocType::Generic)
        .with_prompts(Arc::new(TaggedPrompts))
}

fn quick_retry() -> RetryPolicy {
    RetryPolicy::default()
        .with_max_retries(2)
        .with_backoff_base(Duration::from_secs(1))
}

#[tokio::test(start_paused = true)]
async fn test_single_spelling_error_scenario() {
    let text = "আমি ভাত খাই";
    let transport = Arc::new(
        ScriptedTransport::new()
            .route(
                "MAIN",
                vec![Step::reply(gemini_reply(&json!({
                    "spellingErrors": [
                        { "wrong": "ভাত", "suggestions": ["ভাত"], "position": 1, "confidenceScore": 0.9 }
                    ]
                })))],
            )
            .route("CONTENT", vec![content_step()]),
    );
    let doc = Arc::new(InMemoryDocument::new(text));
    let orchestrator = orchestrator(transport.clone(), doc.clone(), quick_retry());

    let summary = orchestrator
        .run_analysis(text, AnalysisTargets::default())
        .await
        .unwrap();

    assert!(summary.is_success());
    assert_eq!(summary.notice, Notice::success("বিশ্লেষণ সম্পন্ন হয়েছে ✓"));
    assert_eq!(summary.highlighted, 1);

    let snapshot = orchestrator.snapshot().await;
    assert_eq!(snapshot.spelling().len(), 1);
    let stats = snapshot.stats();
    assert_eq!((stats.total_words, stats.error_count, stats.accuracy), (3, 1, 67));
    assert_eq!(snapshot.content().unwrap().content_type, "চিঠি");

    assert_eq!(
        doc.highlighted_texts(),
        vec![("ভাত".to_string(), HighlightColor::spelling())]
    );
    assert_eq!(transport.requests_for("TONE"), 0);
    assert_eq!(transport.requests_for("STYLE"), 0);
}

#[tokio::test(start_paused = true)]
async fn test_accepting_tone_removes_mixing_duplicate() {
    let text = "তাহার বাড়ি অনেক দূরে";
    let transport = Arc::new(
        ScriptedTransport::new()
            .route(
                "MAIN",
                vec![Step::reply(gemini_reply(&json!({
                    "languageStyleMixing": {
                        "detected": true,
                        "recommendedStyle": "cholito",
                        "corrections": [
                            { "current": "তাহার", "suggestion": "তার", "type": "pronoun", "confidenceScore": 0.95 }
                        ]
                    }
                })))],
            )
            .route(
                "TONE",
                vec![Step::reply(gemini_reply(&json!({
                    "toneConversions": [
                        { "current": "তাহার", "suggestion": "তাঁর", "reason": "respect", "confidenceScore": 0.9 }
                    ]
                })))],
            )
            .route("CONTENT", vec![content_step()]),
    );
    let doc = Arc::new(InMemoryDocument::new(text));
    let orchestrator = orchestrator(transport, doc.clone(), quick_retry());

    orchestrator
        .run_analysis(text, AnalysisTargets::default().with_tone(Tone::Respectful))
        .await
        .unwrap();
    let before = orchestrator.snapshot().await;
    assert_eq!(before.tone().len(), 1);
    assert_eq!(before.mixing().unwrap().corrections.len(), 1);

    let outcome = orchestrator.accept("তাহার", "তাঁর").await.unwrap();

    assert_eq!(outcome, ReplaceOutcome::Replaced);
    let after = orchestrator.snapshot().await;
    assert!(after.tone().is_empty());
    assert!(after.mixing().is_none());
    assert_eq!(doc.text(), "তাঁর বাড়ি অনেক দূরে");
    assert!(doc.highlights().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_rate_limited_main_task_recovers() {
    let text = "এক দুই";
    let transport = Arc::new(
        ScriptedTransport::new()
            .route(
                "MAIN",
                vec![
                    Step::status(429),
                    Step::status(429),
                    Step::reply(gemini_reply(&json!({ "spellingErrors": [] }))),
                ],
            )
            .route("CONTENT", vec![content_step()]),
    );
    let doc = Arc::new(InMemoryDocument::new(text));
    let orchestrator = orchestrator(transport.clone(), doc, quick_retry());

    let start = Instant::now();
    let summary = orchestrator
        .run_analysis(text, AnalysisTargets::default())
        .await
        .unwrap();

    assert!(summary.is_success());
    assert_eq!(transport.requests_for("MAIN"), 3);
    // backoff of base + 2 * base on the main task
    assert_eq!(start.elapsed(), Duration::from_secs(3));
}

#[tokio::test(start_paused = true)]
async fn test_tasks_are_staggered() {
    let text = "লেখা";
    let empty = || Step::reply(gemini_reply(&json!({ "_analysis": {} })));
    let transport = Arc::new(
        ScriptedTransport::new()
            .route("MAIN", vec![empty()])
            .route("TONE", vec![Step::reply(gemini_reply(&json!({ "toneConversions": [] })))])
            .route("STYLE", vec![Step::reply(gemini_reply(&json!({ "styleConversions": [] })))])
            .route("CONTENT", vec![content_step()]),
    );
    let doc = Arc::new(InMemoryDocument::new(text));
    let orchestrator = orchestrator(transport.clone(), doc, quick_retry());

    let start = Instant::now();
    let summary = orchestrator
        .run_analysis(
            text,
            AnalysisTargets::default()
                .with_tone(Tone::Formal)
                .with_style(StyleTarget::Cholito),
        )
        .await
        .unwrap();

    assert_eq!(start.elapsed(), Duration::from_millis(900));
    assert_eq!(
        summary.completed,
        vec![TaskKind::Main, TaskKind::Tone, TaskKind::Style, TaskKind::Content]
    );
    let temperatures: Vec<f32> = transport.requests().iter().map(|r| r.temperature).collect();
    assert_eq!(temperatures, vec![0.1, 0.2, 0.2, 0.4]);
}

#[tokio::test(start_paused = true)]
async fn test_failed_task_keeps_other_results() {
    let text = "ভুল বানান";
    let transport = Arc::new(
        ScriptedTransport::new()
            .route(
                "MAIN",
                vec![Step::reply(gemini_reply(&json!({
                    "spellingErrors": [{ "wrong": "বানান", "suggestions": ["বানান"] }]
                })))],
            )
            .route("STYLE", vec![Step::status(403)])
            .route("CONTENT", vec![content_step()]),
    );
    let doc = Arc::new(InMemoryDocument::new(text));
    let orchestrator = orchestrator(transport.clone(), doc.clone(), quick_retry());

    let summary = orchestrator
        .run_analysis(text, AnalysisTargets::default().with_style(StyleTarget::Sadhu))
        .await
        .unwrap();

    assert!(!summary.is_success());
    assert!(summary.failed(TaskKind::Style));
    assert_eq!(summary.failures[0].error.kind(), ErrorKind::Auth);
    assert!(summary.notice.is_error());
    assert!(summary.notice.text.contains("API Key"));
    assert_eq!(transport.requests_for("STYLE"), 1);

    let snapshot = orchestrator.snapshot().await;
    assert_eq!(snapshot.spelling().len(), 1);
    assert_eq!(doc.highlighted_texts().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_new_run_resets_previous_results() {
    let text = "ভুল কথা";
    let transport = Arc::new(
        ScriptedTransport::new()
            .route(
                "MAIN",
                vec![
                    Step::reply(gemini_reply(&json!({
                        "spellingErrors": [{ "wrong": "কথা", "suggestions": ["কথা"] }]
                    }))),
                    Step::reply(gemini_reply(&json!({ "spellingErrors": [] }))),
                ],
            )
            .route("CONTENT", vec![content_step()]),
    );
    let doc = Arc::new(InMemoryDocument::new(text));
    let orchestrator = orchestrator(transport, doc.clone(), quick_retry());

    let first = orchestrator
        .run_analysis(text, AnalysisTargets::default())
        .await
        .unwrap();
    assert_eq!(doc.highlights().len(), 1);

    let second = orchestrator
        .run_analysis(text, AnalysisTargets::default())
        .await
        .unwrap();

    assert_eq!(second.run_id, first.run_id + 1);
    assert!(orchestrator.snapshot().await.spelling().is_empty());
    assert!(doc.highlights().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_check_document_rejects_blank_text() {
    let transport = Arc::new(ScriptedTransport::new());
    let doc = Arc::new(InMemoryDocument::new("  \n  "));
    let orchestrator = orchestrator(transport.clone(), doc, quick_retry());

    let err = orchestrator
        .check_document(AnalysisTargets::default())
        .await
        .unwrap_err();

    assert_eq!(err.user_message(), "টেক্সট নির্বাচন করুন বা কার্সার রাখুন");
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_check_document_uses_selection() {
    let transport = Arc::new(
        ScriptedTransport::new()
            .route("MAIN", vec![Step::reply(gemini_reply(&json!({ "spellingErrors": [] })))])
            .route("CONTENT", vec![content_step()]),
    );
    let doc = Arc::new(InMemoryDocument::new("প্রথম অনুচ্ছেদ\r\nদ্বিতীয় অনুচ্ছেদ"));
    doc.select("দ্বিতীয় অনুচ্ছেদ");
    let orchestrator = orchestrator(transport.clone(), doc, quick_retry());

    orchestrator
        .check_document(AnalysisTargets::default())
        .await
        .unwrap();

    let main_prompt = &transport.requests()[0].prompt;
    assert_eq!(main_prompt, "MAIN দ্বিতীয় অনুচ্ছেদ");
    assert_eq!(orchestrator.snapshot().await.stats().total_words, 2);
}

#[tokio::test(start_paused = true)]
async fn test_dismiss_and_filtered_view() {
    let text = "এক দুই তিন";
    let transport = Arc::new(
        ScriptedTransport::new()
            .route(
                "MAIN",
                vec![Step::reply(gemini_reply(&json!({
                    "spellingErrors": [{ "wrong": "দুই", "suggestions": ["দু'টি"] }],
                    "punctuationIssues": [{
                        "issue": "dari",
                        "currentSentence": "এক দুই তিন",
                        "correctedSentence": "এক দুই তিন।",
                        "explanation": "শেষে দাঁড়ি"
                    }]
                })))],
            )
            .route("CONTENT", vec![content_step()]),
    );
    let doc = Arc::new(InMemoryDocument::new(text));
    let orchestrator = orchestrator(transport, doc, quick_retry());
    orchestrator
        .run_analysis(text, AnalysisTargets::default())
        .await
        .unwrap();

    assert_eq!(orchestrator.visible(ViewFilter::All).await.len(), 2);
    assert_eq!(orchestrator.visible(ViewFilter::Punctuation).await.len(), 1);

    assert_eq!(orchestrator.dismiss(Category::Spelling, " দুই ").await, 1);
    assert!(orchestrator.visible(ViewFilter::Spelling).await.is_empty());
    assert_eq!(orchestrator.visible(ViewFilter::All).await.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_accept_missing_text_reports_not_found() {
    let text = "এক দুই";
    let transport = Arc::new(
        ScriptedTransport::new()
            .route(
                "MAIN",
                vec![Step::reply(gemini_reply(&json!({
                    "spellingErrors": [{ "wrong": "তিন", "suggestions": ["চার"] }]
                })))],
            )
            .route("CONTENT", vec![content_step()]),
    );
    let doc = Arc::new(InMemoryDocument::new(text));
    let orchestrator = orchestrator(transport, doc.clone(), quick_retry());
    orchestrator
        .run_analysis(text, AnalysisTargets::default())
        .await
        .unwrap();

    let outcome = orchestrator.accept("তিন", "চার").await.unwrap();

    assert_eq!(outcome, ReplaceOutcome::NotFound);
    assert_eq!(orchestrator.snapshot().await.spelling().len(), 1);
    assert_eq!(doc.text(), text);
}

#[tokio::test(start_paused = true)]
async fn test_hover_highlights_after_debounce() {
    let transport = Arc::new(ScriptedTransport::new());
    let doc = Arc::new(InMemoryDocument::new("এক দুই"));
    let orchestrator = orchestrator(transport, doc.clone(), quick_retry());

    orchestrator.hover("দুই", HighlightColor::tone(), 1);
    tokio::time::sleep(Duration::from_millis(250)).await;
    assert!(doc.highlights().is_empty());
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(
        doc.highlighted_texts(),
        vec![("দুই".to_string(), HighlightColor::tone())]
    );
}
