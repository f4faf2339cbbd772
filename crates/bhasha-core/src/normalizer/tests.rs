use super::*;
use crate::config::ConfidenceThresholds;
use serde_json::json;

fn normalizer() -> ResponseNormalizer {
    ResponseNormalizer::new(ConfidenceThresholds::default())
}

#[test]
fn test_thresholds_filter_per_category() {
    let payload = json!({
        "spellingErrors": [
            { "wrong": "কাল", "suggestions": ["কাল"], "confidenceScore": 0.79 },
            { "wrong": "বাসাই", "suggestions": ["বাসায়"], "confidenceScore": 0.8 },
            { "wrong": "জিবন", "suggestions": ["জীবন"] }
        ],
        "punctuationIssues": [
            { "issue": "dari", "currentSentence": "সে গেল", "correctedSentence": "সে গেল।", "explanation": "", "confidenceScore": 0.75 }
        ],
        "euphonyImprovements": [
            { "current": "খুব খুব", "suggestions": ["অত্যন্ত"], "reason": "", "confidenceScore": 0.69 }
        ]
    });

    let findings = normalizer().normalize_main(&payload, "আমি কাল বাসাই জিবন");
    let kept: Vec<&str> = findings.spelling.iter().map(|s| s.wrong.as_str()).collect();
    assert_eq!(kept, vec!["বাসাই", "জিবন"]);
    assert_eq!(findings.punctuation.len(), 1);
    assert!(findings.euphony.is_empty());
}

#[test]
fn test_stats_from_accepted_spelling() {
    let payload = json!({
        "spellingErrors": [
            { "wrong": "ক", "suggestions": ["খ"] },
            { "wrong": "গ", "suggestions": ["ঘ"] }
        ]
    });
    let text = "এক দুই তিন চার পাঁচ ছয় সাত আট নয় দশ";
    let findings = normalizer().normalize_main(&payload, text);
    assert_eq!(findings.stats.total_words, 10);
    assert_eq!(findings.stats.error_count, 2);
    assert_eq!(findings.stats.accuracy, 80);
}

#[test]
fn test_bad_elements_are_skipped() {
    let payload = json!({
        "spellingErrors": [
            "just a string",
            { "suggestions": ["missing wrong"] },
            { "wrong": "   ", "suggestions": ["blank"] },
            { "wrong": "ভুল", "suggestions": ["ঠিক"], "position": "3" }
        ]
    });
    let findings = normalizer().normalize_main(&payload, "একটি ভুল");
    assert_eq!(findings.spelling.len(), 1);
    assert_eq!(findings.spelling[0].position, 3);
}

#[test]
fn test_mixing_report_collapses() {
    let payload = json!({
        "languageStyleMixing": {
            "detected": true,
            "recommendedStyle": "cholito",
            "corrections": [
                { "current": "করিতেছি", "suggestion": "করছি", "type": "verb", "confidenceScore": 0.5 }
            ]
        }
    });
    let findings = normalizer().normalize_main(&payload, "আমি করিতেছি");
    assert!(findings.mixing.is_none());

    let payload = json!({
        "languageStyleMixing": {
            "detected": true,
            "corrections": [
                { "current": "করিতেছি", "suggestion": "করছি", "type": "verb", "confidenceScore": 0.9 },
                { "current": "তাহার", "suggestion": "তার", "type": "pronoun", "confidenceScore": 0.1 }
            ]
        }
    });
    let mixing = normalizer().normalize_main(&payload, "x").mixing.unwrap();
    assert_eq!(mixing.corrections.len(), 1);
    assert_eq!(mixing.corrections[0].current, "করিতেছি");
}

#[test]
fn test_meta_block() {
    let payload = json!({
        "_analysis": { "detectedTone": "formal", "detectedStyle": "cholito", "overallQuality": "good" },
        "spellingErrors": []
    });
    let findings = normalizer().normalize_main(&payload, "");
    assert_eq!(findings.meta.unwrap().detected_style, "cholito");
    assert_eq!(findings.stats.accuracy, 100);
}

#[test]
fn test_tone_and_style() {
    let payload = json!({
        "toneConversions": [
            { "current": "তুই", "suggestion": "আপনি", "reason": "formal", "confidenceScore": 0.95 },
            { "current": "খা", "suggestion": "খান", "reason": "", "confidenceScore": 0.7 }
        ]
    });
    let tone = normalizer().normalize_tone(&payload);
    assert_eq!(tone.len(), 1);
    assert_eq!(tone[0].suggestion, "আপনি");

    let payload = json!({
        "styleConversions": [
            { "current": "করিয়াছিল", "suggestion": "করেছিল", "type": "verb", "confidenceScore": 0.9 },
            { "current": "তাহারা", "suggestion": "তারা", "type": "pronoun", "confidenceScore": 0.89 }
        ]
    });
    let style = normalizer().normalize_style(&payload);
    assert_eq!(style.len(), 1);
    assert_eq!(style[0].kind, "verb");
}

#[test]
fn test_missing_keys_yield_empty_lists() {
    let payload = json!({ "contentType": "letter" });
    assert!(normalizer().normalize_main(&payload, "a b").is_empty());
    assert!(normalizer().normalize_tone(&payload).is_empty());
}

#[test]
fn test_content_analysis() {
    let payload = json!({
        "contentType": "application",
        "description": "ছুটির আবেদন",
        "missingElements": ["তারিখ"],
        "suggestions": ["বিষয় লিখুন"]
    });
    let content = normalizer().normalize_content(&payload).unwrap();
    assert_eq!(content.content_type, "application");
    assert_eq!(content.missing_elements, vec!["তারিখ"]);

    assert!(normalizer().normalize_content(&json!({ "foo": 1 })).is_none());
}
