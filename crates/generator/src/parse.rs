//! Extracting the article payload from a raw completion reply.
//!
//! Models wrap the JSON in Markdown fences, prose, or both. The strategy:
//! strip fences, try a straight parse, and fall back to the substring
//! between the first `{` and the last `}`.

use serde::Deserialize;

/// A parsed candidate article, before dedup and persistence.
///
/// All fields are optional on the wire; defaulting happens in
/// [`Draft::into_fields`] so the rules live in one place.
#[derive(Debug, Deserialize)]
pub struct Draft {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
}

/// Fully-defaulted article fields ready for insertion.
#[derive(Debug)]
pub struct DraftFields {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub meta_title: String,
    pub meta_description: String,
    pub meta_keywords: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("No JSON object found in completion text")]
    NoJsonObject,

    #[error("Invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

impl Draft {
    /// Apply the site's defaulting rules.
    ///
    /// Missing title becomes "Новость"; SEO fields fall back to their
    /// display counterparts; keywords fall back to the category.
    pub fn into_fields(self, category: &str) -> DraftFields {
        let title = self.title.unwrap_or_else(|| "Новость".to_string());
        let excerpt = self.excerpt.unwrap_or_default();
        let meta_title = self.meta_title.unwrap_or_else(|| title.clone());
        let meta_description = self.meta_description.unwrap_or_else(|| excerpt.clone());
        DraftFields {
            meta_title,
            meta_description,
            meta_keywords: self.meta_keywords.unwrap_or_else(|| category.to_string()),
            content: self.content.unwrap_or_default(),
            excerpt,
            title,
        }
    }
}

/// Parse a raw completion reply into a [`Draft`].
pub fn parse_draft(raw: &str) -> Result<Draft, ParseError> {
    let text = strip_fences(raw);

    match serde_json::from_str(text) {
        Ok(draft) => Ok(draft),
        Err(_) => {
            // Second chance: the payload may be buried in surrounding prose.
            let start = text.find('{');
            let end = text.rfind('}');
            match (start, end) {
                (Some(start), Some(end)) if start < end => {
                    serde_json::from_str(&text[start..=end]).map_err(ParseError::from)
                }
                _ => Err(ParseError::NoJsonObject),
            }
        }
    }
}

/// Strip Markdown code-fence artifacts from a completion reply.
fn strip_fences(raw: &str) -> &str {
    let mut text = raw.trim();
    if let Some(rest) = text.strip_prefix("```json") {
        text = rest;
    } else if let Some(rest) = text.strip_prefix("```") {
        text = rest;
    }
    if let Some(rest) = text.strip_suffix("```") {
        text = rest;
    }
    text.trim()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    const PAYLOAD: &str = r#"{"title": "Т", "excerpt": "Э", "content": "К",
        "meta_title": "МТ", "meta_description": "МД", "meta_keywords": "a, b"}"#;

    #[test]
    fn parses_raw_json() {
        let draft = parse_draft(PAYLOAD).unwrap();
        assert_eq!(draft.title.as_deref(), Some("Т"));
        assert_eq!(draft.meta_keywords.as_deref(), Some("a, b"));
    }

    #[test]
    fn strips_json_fence() {
        let fenced = format!("```json\n{PAYLOAD}\n```");
        let draft = parse_draft(&fenced).unwrap();
        assert_eq!(draft.title.as_deref(), Some("Т"));
    }

    #[test]
    fn strips_bare_fence() {
        let fenced = format!("```\n{PAYLOAD}\n```");
        assert!(parse_draft(&fenced).is_ok());
    }

    #[test]
    fn falls_back_to_brace_substring() {
        let chatty = format!("Вот ваша новость:\n{PAYLOAD}\nНадеюсь, подходит!");
        let draft = parse_draft(&chatty).unwrap();
        assert_eq!(draft.excerpt.as_deref(), Some("Э"));
    }

    #[test]
    fn rejects_text_without_object() {
        assert_matches!(
            parse_draft("никакого JSON тут нет"),
            Err(ParseError::NoJsonObject)
        );
    }

    #[test]
    fn rejects_broken_json_object() {
        assert_matches!(
            parse_draft(r#"{"title": "x", }"#),
            Err(ParseError::InvalidJson(_))
        );
    }

    #[test]
    fn defaulting_rules() {
        let draft = parse_draft(r#"{"excerpt": "только анонс"}"#).unwrap();
        let fields = draft.into_fields("Спорт");
        assert_eq!(fields.title, "Новость");
        assert_eq!(fields.meta_title, "Новость");
        assert_eq!(fields.meta_description, "только анонс");
        assert_eq!(fields.meta_keywords, "Спорт");
        assert_eq!(fields.content, "");
    }
}
