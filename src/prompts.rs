//! Prompt templates and the builders that fill them.
//!
//! Every builder is infallible: empty fields simply render as empty text.

use crate::models::{MoodBrief, MoodboardRequest};

pub const MOODBOARD_SYSTEM: &str = include_str!("../data/prompts/moodboard_system.txt");
pub const MOODBOARD_USER: &str = include_str!("../data/prompts/moodboard_user.txt");
pub const BRAND_SYSTEM: &str = include_str!("../data/prompts/brand_system.txt");
pub const BRAND_USER: &str = include_str!("../data/prompts/brand_user.txt");
pub const ASSISTANT_SYSTEM: &str = include_str!("../data/prompts/assistant_system.txt");
pub const COLOR_PALETTE: &str = include_str!("../data/prompts/color_palette.txt");
pub const FONT_PAIR: &str = include_str!("../data/prompts/font_pair.txt");
pub const HEADLINE: &str = include_str!("../data/prompts/headline.txt");
pub const TAGLINE: &str = include_str!("../data/prompts/tagline.txt");
pub const SUGGESTIONS: &str = include_str!("../data/prompts/suggestions.txt");

/// Replace `{{key}}` placeholders in a template string.
///
/// Substitution is a single pass over the template: placeholder text inside
/// a substituted value is left as is. Unknown placeholders are kept.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        result.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        let Some(end) = after.find("}}") else {
            rest = &rest[start..];
            break;
        };

        let key = &after[..end];
        match vars.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => result.push_str(value),
            None => result.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after[end + 2..];
    }

    result.push_str(rest);
    result
}

/// Long-form moodboard prompt: title, description, visual elements, font
/// pairings and textures, one per line.
pub fn moodboard_prompt(request: &MoodboardRequest) -> String {
    let palette = request.color_palette.join(", ");
    render(
        MOODBOARD_USER,
        &[
            ("theme", &request.theme),
            ("style", &request.style),
            ("color_palette", &palette),
            ("mood", &request.mood),
            ("additional_notes", &request.additional_notes),
        ],
    )
}

/// Short-form brand summary prompt asking for a JSON reply.
pub fn brand_summary_prompt(brief: &MoodBrief) -> String {
    let tags = brief.tags.join(", ");
    render(
        BRAND_USER,
        &[("vibe_text", &brief.vibe_text), ("tags", &tags)],
    )
}

pub fn color_palette_prompt(vibe: &str) -> String {
    render(COLOR_PALETTE, &[("vibe", vibe)])
}

pub fn font_pair_prompt(vibe: &str) -> String {
    render(FONT_PAIR, &[("vibe", vibe)])
}

pub fn headline_prompt(vibe: &str) -> String {
    render(HEADLINE, &[("vibe", vibe)])
}

pub fn tagline_prompt(vibe: &str) -> String {
    render(TAGLINE, &[("vibe", vibe)])
}

pub fn suggestions_prompt(keywords: &[String]) -> String {
    render(SUGGESTIONS, &[("keywords", &keywords.join(", "))])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> MoodboardRequest {
        MoodboardRequest {
            theme: "loft".to_string(),
            style: "industrial".to_string(),
            color_palette: vec!["#111111".to_string(), "#222222".to_string()],
            mood: "moody".to_string(),
            additional_notes: "exposed brick".to_string(),
            tags: Vec::new(),
        }
    }

    #[test]
    fn test_render_single_var() {
        assert_eq!(
            render("Hello {{name}}!", &[("name", "world")]),
            "Hello world!"
        );
    }

    #[test]
    fn test_render_leaves_unknown_placeholders() {
        assert_eq!(render("{{a}} {{b}}", &[("a", "x")]), "x {{b}}");
    }

    #[test]
    fn test_render_does_not_expand_placeholders_inside_values() {
        assert_eq!(
            render("{{a}} / {{b}}", &[("a", "{{b}}"), ("b", "x")]),
            "{{b}} / x"
        );
    }

    #[test]
    fn test_render_keeps_unterminated_braces() {
        assert_eq!(render("{{a}} and {{oops", &[("a", "x")]), "x and {{oops");
    }

    #[test]
    fn test_prompts_are_non_empty() {
        for template in [
            MOODBOARD_SYSTEM,
            MOODBOARD_USER,
            BRAND_SYSTEM,
            BRAND_USER,
            ASSISTANT_SYSTEM,
            COLOR_PALETTE,
            FONT_PAIR,
            HEADLINE,
            TAGLINE,
            SUGGESTIONS,
        ] {
            assert!(!template.trim().is_empty());
        }
    }

    #[test]
    fn test_moodboard_prompt_substitutes_every_field() {
        let prompt = moodboard_prompt(&request());

        assert!(prompt.contains("Create a moodboard for a loft project with industrial style."));
        assert!(prompt.contains("Color palette: #111111, #222222"));
        assert!(prompt.contains("Mood: moody"));
        assert!(prompt.contains("Additional notes: exposed brick"));
        assert!(prompt.contains("3-5 texture suggestions"));
        assert!(!prompt.contains("{{"));
    }

    #[test]
    fn test_moodboard_prompt_accepts_empty_fields() {
        let empty = MoodboardRequest {
            theme: String::new(),
            style: String::new(),
            color_palette: Vec::new(),
            mood: String::new(),
            additional_notes: String::new(),
            tags: Vec::new(),
        };

        let prompt = moodboard_prompt(&empty);
        assert!(prompt.contains("Color palette: \n"));
        assert!(!prompt.contains("{{"));
    }

    #[test]
    fn test_brand_summary_prompt_documents_json_shape() {
        let prompt = brand_summary_prompt(&MoodBrief {
            vibe_text: "minimalist scandinavian".to_string(),
            tags: vec!["modern".to_string(), "cozy".to_string()],
        });

        assert!(prompt.contains("Mood: minimalist scandinavian"));
        assert!(prompt.contains("Tags: modern, cozy"));
        assert!(prompt.contains("\"color_palette\": [...]"));
        assert!(prompt.contains("\"fonts\": [{ \"heading\": \"...\", \"body\": \"...\" }]"));
    }

    #[test]
    fn test_vibe_text_is_used_verbatim() {
        let prompt = brand_summary_prompt(&MoodBrief {
            vibe_text: "literally {{tags}}".to_string(),
            tags: vec!["modern".to_string()],
        });

        assert!(prompt.contains("Mood: literally {{tags}}"));
        assert!(prompt.contains("Tags: modern"));
    }

    #[test]
    fn test_auxiliary_prompts_mention_vibe() {
        assert!(color_palette_prompt("retro").contains("for a retro design"));
        assert!(font_pair_prompt("retro").contains("'heading:body'"));
        assert!(headline_prompt("retro").contains("for a retro brand"));
        assert!(tagline_prompt("retro").contains("for a retro brand"));
        assert!(suggestions_prompt(&["a".to_string(), "b".to_string()]).contains("keywords: a, b"));
    }
}
