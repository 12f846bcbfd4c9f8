// User-turn prompt builder
// Author: kelexine (https://github.com/kelexine)

use crate::models::post::GenerationRequest;
use std::fmt::Write;

/// Topic used when only a URL or attachments were supplied.
pub const FALLBACK_TOPIC: &str = "Analysis of provided context";

/// Build the text part that follows any inline attachments.
pub fn build_user_prompt(request: &GenerationRequest) -> String {
    let topic = match request.topic.trim() {
        "" => FALLBACK_TOPIC,
        topic => topic,
    };

    let mut prompt = format!("Topic: {topic}\n");

    if !request.context.trim().is_empty() {
        let _ = writeln!(prompt, "Additional Context: {}", request.context.trim());
    }

    if let Some(url) = request.reference_url() {
        let _ = writeln!(
            prompt,
            "\nReference URL: {url}\n\
             ACTION REQUIRED: Use the Google Search tool to find and extract the specific content, arguments, and data from this URL. \
             Use this extracted information as the primary source for the post. \
             Do not hallucinate content if you cannot access the URL; instead, rely on the search results about this specific page."
        );
    }

    if !request.attachments.is_empty() {
        prompt.push_str(
            "\nSource Material Provided: Please analyze the attached documents/images deeply. \
             Extract specific facts, quotes, or technical details to use in the post.\n",
        );
    }

    let _ = write!(
        prompt,
        "\nPlease write the content now following the strict format requirements for: {}.",
        request.format
    );

    prompt
}
