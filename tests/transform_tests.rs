// Response transformer tests
// Author: kelexine (https://github.com/kelexine)

use proptest::prelude::*;
use social_architect::models::gemini::{GroundingChunk, WebChunk};
use social_architect::models::post::{PostFormat, Source};
use social_architect::transform::{extract_hashtags, extract_sources, normalize_dashes, transform, ImagePlan};

#[test]
fn test_hashtag_order() {
    assert_eq!(
        extract_hashtags("Ship fast. #GenAI #Security done."),
        vec!["#GenAI", "#Security"]
    );
}

#[test]
fn test_source_extraction() {
    let chunks = vec![
        GroundingChunk {
            web: Some(WebChunk {
                uri: Some("https://a".to_string()),
                title: Some(String::new()),
            }),
        },
        GroundingChunk { web: None },
    ];
    assert_eq!(
        extract_sources(&chunks),
        vec![Source {
            uri: "https://a".to_string(),
            title: "https://a".to_string(),
        }]
    );
}

#[test]
fn test_well_formed_sections() {
    let raw = "[IMAGE_PROMPT]\n  A **bold** shield over a data lake  \n[CAPTION]\n\nYour RAG leaks. Fix it. #AI\n";
    let out = transform(raw, &[], PostFormat::Infographic);

    assert_eq!(
        out.image_plan,
        ImagePlan::Generate {
            prompt: "A bold shield over a data lake".to_string(),
            aspect_ratio: "3:4",
        }
    );
    assert_eq!(out.content, "Your RAG leaks. Fix it. #AI");
}

#[test]
fn test_no_markers_for_image_formats() {
    let raw = "Just a post — nothing else. #Oops";
    for format in [PostFormat::ImageQuote, PostFormat::Infographic] {
        let out = transform(raw, &[], format);
        assert_eq!(out.image_plan, ImagePlan::Unparseable);
        assert_eq!(out.content, "Just a post \n nothing else. #Oops");
    }
}

#[test]
fn test_loose_label_fallback() {
    let raw = "Image Prompt: a neon padlock\n\nCaption text here";
    let out = transform(raw, &[], PostFormat::ImageQuote);
    assert_eq!(
        out.image_plan,
        ImagePlan::Generate {
            prompt: "a neon padlock".to_string(),
            aspect_ratio: "1:1",
        }
    );
    // No [CAPTION] marker, so the full text stays visible
    assert_eq!(out.content, raw);
}

#[test]
fn test_caption_stops_at_second_marker() {
    let out = transform(
        "[IMAGE_PROMPT] lock [CAPTION] First caption. [CAPTION] stray",
        &[],
        PostFormat::ImageQuote,
    );
    assert_eq!(out.content, "First caption.");
    assert!(matches!(out.image_plan, ImagePlan::Generate { .. }));
}

proptest! {
    #[test]
    fn prop_dash_normalization_is_idempotent(s in "[a-z \u{2014}\u{2013}\n]{0,64}") {
        let once = normalize_dashes(&s);
        prop_assert_eq!(normalize_dashes(&once), once.clone());
        prop_assert!(!once.contains('—'));
    }

    #[test]
    fn prop_well_formed_pair_round_trips(
        prompt in "[a-zA-Z][a-zA-Z ]{0,30}[a-zA-Z]",
        caption in "[a-zA-Z][a-zA-Z .]{0,40}[a-zA-Z.]",
    ) {
        let raw = format!("[IMAGE_PROMPT]\n{}\n[CAPTION]\n{}\n", prompt, caption);
        let out = transform(&raw, &[], PostFormat::ImageQuote);
        prop_assert_eq!(out.image_plan, ImagePlan::Generate { prompt: prompt.trim().to_string(), aspect_ratio: "1:1" });
        prop_assert_eq!(out.content, caption.trim().to_string());
    }
}
