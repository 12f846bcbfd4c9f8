// System instruction composer
// Author: kelexine (https://github.com/kelexine)

use crate::models::post::{Platform, PostFormat, Tone};

/// Brand voice block, first section of every instruction.
pub const BRAND_VOICE: &str = include_str!("../../prompts/brand_voice.md");

const LINKEDIN_EXAMPLES: &str = include_str!("../../prompts/linkedin_examples.md");
const TWITTER_EXAMPLES: &str = include_str!("../../prompts/twitter_examples.md");

/// Marker of the platform rule line removed for long-form output.
const LENGTH_CONSTRAINT_MARKER: &str = "Length Constraint";

/// Clause appended to the platform rules for articles.
pub const LONG_FORM_CLAUSE: &str = "- **Length**: Long Form allowed.";

/// Platform rule block.
pub fn platform_rules(platform: Platform) -> &'static str {
    match platform {
        Platform::LinkedIn => {
            "- **Platform Standard**: LinkedIn Professional.\n\
             - **Formatting**:\n    \
             - NO em-dashes (—). Use line breaks instead.\n    \
             - Max 15 words per sentence.\n    \
             - Break lines often. One thought per line."
        }
        Platform::Twitter => {
            "- **Platform Standard**: Twitter / X.\n\
             - **Length Constraint**: STRICTLY under 280 characters (unless Format is Thread/Article).\n\
             - **Formatting**: Break lines for impact. No em-dashes."
        }
    }
}

/// Tone rule block. Tones without a dedicated block use the expert voice.
pub fn tone_rules(tone: Tone) -> &'static str {
    match tone {
        Tone::Hiring => {
            "- **Style**: Recruiting, High-Energy, Exclusive.\n\
             - **Key Element**: Focus on the technical challenge (The \"Mission\"), not the perks.\n\
             - **Structure**: \"We are hiring...\" -> The Challenge -> The Profile -> Call to Action.\n\
             - **Vibe**: \"Join the special forces of AI security.\""
        }
        Tone::Humorous => {
            "- **Style**: Witty, Ironic, \"Inside Joke\".\n\
             - **Key Element**: Use formats like \"Memo to self\", \"Fake Apology\", or \"Conversation Snippets\".\n\
             - **Structure**: Setup (Misdirection) -> Punchline (The Product Value) -> HashTags.\n\
             - **Vibe**: Fun but smart."
        }
        Tone::Storytelling => {
            "- **Style**: Narrative, Vulnerable, Founder-led.\n\
             - **Key Element**: Start with a specific moment in time or a struggle.\n\
             - **Structure**: The Struggle (\"We were drowning...\") -> The Epiphany (\"Then we realized...\") -> The Solution (\"So we built...\").\n\
             - **Vibe**: Authentic and raw."
        }
        Tone::Launch => {
            "- **Style**: Hype, Bold, Aggressive.\n\
             - **Key Element**: Focus on the \"Before vs After\".\n\
             - **Structure**: The Old Way (Pain) -> The Protecto Way (Gain) -> \"Live Now\".\n\
             - **Vibe**: \"This changes everything.\""
        }
        Tone::CaseStudy => {
            "- **Style**: Analytical, Proof-heavy.\n\
             - **Key Element**: Specific Metrics (Cost saved, Time reduced).\n\
             - **Structure**: The Customer Problem -> The Automation Applied -> The Result (Bullets).\n\
             - **Vibe**: \"Results speak for themselves.\""
        }
        Tone::Controversial => {
            "- **Style**: Debating, Contrarian.\n\
             - **Key Element**: Attack a common belief (e.g., \"RAG is dead\").\n\
             - **Structure**: Common Belief -> Why it's wrong -> The Hard Truth."
        }
        Tone::ThoughtLeader | Tone::Educational => {
            "- **Style**: Authoritative, Expert.\n\
             - **Key Element**: Insight that stops the scroll.\n\
             - **Structure**: Hook -> Context -> Insight -> Value."
        }
    }
}

/// Format rule block.
pub fn format_rules(format: PostFormat) -> &'static str {
    match format {
        PostFormat::Carousel => {
            "FORMATTING REQUIREMENT: CAROUSEL / SLIDES\n\
             - Output the content as a numbered list of Slides.\n\
             - Structure:\n  \
             Slide 1 (Title Card): [Hook/Title]\n  \
             Slide 2: [Context/Problem]\n  \
             Slide 3-X: [Points/Solution]\n  \
             Last Slide: [Strong CTA/Summary]\n\
             - AFTER the slides, provide a \"LinkedIn Post Caption\" to introduce the document."
        }
        PostFormat::Article => {
            "FORMATTING REQUIREMENT: LONG-FORM ARTICLE\n\
             - Create a deep-dive article (800-1500 words).\n\
             - Include a clear Headline and multiple Subheadings (H2, H3).\n\
             - Use bullet points for readability.\n\
             - Tone should be authoritative, educational, and technical.\n\
             - IGNORE standard length constraints."
        }
        PostFormat::ImageQuote => {
            "FORMATTING REQUIREMENT: IMAGE QUOTE\n\
             - STRICTLY output the content in exactly two sections using these specific headers:\n\
             \n\
             [IMAGE_PROMPT]\n\
             (Write a highly detailed, artistic description of an image that represents the quote or statistic here. \
             Describe style, colors (Protecto Blue hex #3449e6), and subject matter.)\n\
             \n\
             [CAPTION]\n\
             (Write the standard social media post expanding on the quote/stat here.)"
        }
        PostFormat::Infographic => {
            "FORMATTING REQUIREMENT: INFOGRAPHIC PLAN\n\
             - STRICTLY output the content in exactly two sections using these specific headers:\n\
             \n\
             [IMAGE_PROMPT]\n\
             (Write a detailed prompt for an AI image generator to create a professional tech infographic here. \
             Describe layout, data flow, icons, and a futuristic clean style.)\n\
             \n\
             [CAPTION]\n\
             (Write the text description of the infographic data points followed by the social media post here.)"
        }
        PostFormat::Standard => {
            "FORMATTING REQUIREMENT: STANDARD POST\n\
             - Adhere to the standard platform length limits.\n\
             - Focus on text-only readability."
        }
    }
}

/// Curated style reference posts for a platform.
pub fn style_examples(platform: Platform) -> &'static str {
    match platform {
        Platform::LinkedIn => LINKEDIN_EXAMPLES,
        Platform::Twitter => TWITTER_EXAMPLES,
    }
}

/// Remove the length constraint lines and allow long-form output.
fn lift_length_constraint(rules: &str) -> String {
    let mut lifted: Vec<&str> = rules
        .lines()
        .filter(|line| !line.contains(LENGTH_CONSTRAINT_MARKER))
        .collect();
    lifted.push(LONG_FORM_CLAUSE);
    lifted.join("\n")
}

/// Build the system instruction for a platform, tone and format.
///
/// Sections are concatenated in a fixed order: brand voice, task header,
/// platform rules, tone rules, format rules, style examples, closing
/// reminders. The output depends on nothing but the three arguments.
pub fn compose(platform: Platform, tone: Tone, format: PostFormat) -> String {
    let platform_rules = match format {
        PostFormat::Article => lift_length_constraint(platform_rules(platform)),
        _ => platform_rules(platform).to_string(),
    };

    let sections = [
        BRAND_VOICE.trim_end().to_string(),
        format!(
            "Current Task:\nGenerate content for {platform} in the format of **{format}**.\nTone: **{tone}**."
        ),
        platform_rules,
        tone_rules(tone).to_string(),
        format_rules(format).to_string(),
        format!(
            "*** STYLE REFERENCE DATA (Standard Posts) ***\n\
             Use these as a style guide for \"Voice\" and \"Vibe\" even if the format (like Article) is different.\n\
             \n\
             {}\n\
             \n\
             *** END EXAMPLES ***",
            style_examples(platform).trim_end()
        ),
        "IMPORTANT:\n\
         - Write like a human expert/builder.\n\
         - Be opinionated.\n\
         - If a URL or File is provided, use it as the PRIMARY source of truth for the content.\n\
         - **REMINDER**: No sentences longer than 15 words. No em-dashes."
            .to_string(),
    ];

    sections.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWITTER_LIMIT: &str = "STRICTLY under 280 characters";

    #[test]
    fn test_standard_twitter_keeps_length_rule() {
        let text = compose(Platform::Twitter, Tone::Educational, PostFormat::Standard);
        assert!(text.contains(TWITTER_LIMIT));
        assert!(!text.contains(LONG_FORM_CLAUSE));
    }

    #[test]
    fn test_article_lifts_length_rule_on_every_platform() {
        for platform in Platform::ALL {
            let text = compose(platform, Tone::ThoughtLeader, PostFormat::Article);
            assert!(!text.contains(TWITTER_LIMIT), "{platform} still has the limit");
            assert!(!text.contains("**Length Constraint**"));
            assert!(text.contains(LONG_FORM_CLAUSE));
        }
    }

    #[test]
    fn test_section_order() {
        let text = compose(Platform::LinkedIn, Tone::Hiring, PostFormat::Carousel);
        let positions: Vec<usize> = [
            "Lead Content Strategist",
            "Current Task:",
            "LinkedIn Professional",
            "Recruiting, High-Energy",
            "CAROUSEL / SLIDES",
            "STYLE REFERENCE DATA",
            "*** END EXAMPLES ***",
            "**REMINDER**",
        ]
        .iter()
        .map(|needle| text.find(needle).unwrap_or_else(|| panic!("missing {needle}")))
        .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
    }

    #[test]
    fn test_task_header_uses_labels() {
        let text = compose(Platform::Twitter, Tone::Humorous, PostFormat::ImageQuote);
        assert!(text.contains("Generate content for Twitter in the format of **Quote/Stat**."));
        assert!(text.contains("Tone: **Viral / Humorous**."));
    }

    #[test]
    fn test_default_tone_block() {
        let expert = tone_rules(Tone::ThoughtLeader);
        assert_eq!(tone_rules(Tone::Educational), expert);
        assert!(expert.contains("Authoritative, Expert"));
        for tone in [Tone::Hiring, Tone::Humorous, Tone::Storytelling, Tone::Launch, Tone::CaseStudy, Tone::Controversial] {
            assert_ne!(tone_rules(tone), expert);
        }
    }

    #[test]
    fn test_platform_examples_selected() {
        let linkedin = compose(Platform::LinkedIn, Tone::ThoughtLeader, PostFormat::Standard);
        let twitter = compose(Platform::Twitter, Tone::ThoughtLeader, PostFormat::Standard);
        assert!(linkedin.contains("Frozen Middle"));
        assert!(!linkedin.contains("SQL injection of the GenAI era"));
        assert!(twitter.contains("SQL injection of the GenAI era"));
    }

    #[test]
    fn test_image_formats_request_sections() {
        for format in [PostFormat::ImageQuote, PostFormat::Infographic] {
            let rules = format_rules(format);
            assert!(rules.contains("[IMAGE_PROMPT]"));
            assert!(rules.contains("[CAPTION]"));
        }
    }

    #[test]
    fn test_lift_length_constraint_on_linkedin_only_appends() {
        let lifted = lift_length_constraint(platform_rules(Platform::LinkedIn));
        assert!(lifted.starts_with(platform_rules(Platform::LinkedIn)));
        assert!(lifted.ends_with(LONG_FORM_CLAUSE));
    }
}
