//! URL slug generation for articles.
//!
//! Lives in `core` so both the repository layer (collision probing) and the
//! API/generator layers share one definition of what a slug looks like.

/// Maximum slug length in characters.
pub const MAX_SLUG_LEN: usize = 100;

/// Build a URL-safe slug from an article title.
///
/// Lowercases the title, drops every character that is neither alphanumeric
/// nor whitespace, joins the remaining whitespace-separated words with
/// single hyphens, and truncates to [`MAX_SLUG_LEN`] characters.
///
/// Alphanumeric is Unicode-aware: titles are typically Russian, so Cyrillic
/// letters survive into the slug.
///
/// Deterministic for a fixed input. Collision handling (the `-1`, `-2`, …
/// suffix probe) lives in the repository layer, which is the only place
/// that can see existing slugs.
pub fn slugify(title: &str) -> String {
    let cleaned: String = title
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();

    let slug = cleaned.split_whitespace().collect::<Vec<_>>().join("-");

    slug.chars().take(MAX_SLUG_LEN).collect()
}

/// Append a numeric collision suffix to a base slug.
///
/// `with_suffix("foo", 2)` is `"foo-2"`. The suffix is applied to the
/// untruncated base, matching how the original site numbered collisions.
pub fn with_suffix(base: &str, counter: u32) -> String {
    format!("{base}-{counter}")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_basic_title() {
        assert_eq!(slugify("Breaking News Today"), "breaking-news-today");
    }

    #[test]
    fn slug_is_lowercase() {
        assert_eq!(slugify("UPPER Case"), "upper-case");
    }

    #[test]
    fn slug_strips_punctuation() {
        assert_eq!(slugify("Hello, world! (updated)"), "hello-world-updated");
    }

    #[test]
    fn slug_collapses_whitespace_runs() {
        assert_eq!(slugify("too   many    spaces"), "too-many-spaces");
    }

    #[test]
    fn slug_keeps_cyrillic() {
        assert_eq!(
            slugify("Рынок криптовалют вырос на 20%"),
            "рынок-криптовалют-вырос-на-20"
        );
    }

    #[test]
    fn slug_truncates_to_max_len() {
        let long_title = "word ".repeat(50);
        let slug = slugify(&long_title);
        assert_eq!(slug.chars().count(), MAX_SLUG_LEN);
    }

    #[test]
    fn slug_only_alphanumerics_and_hyphens() {
        let slug = slugify("A *wild* — headline: 100% <true>?");
        assert!(slug.chars().all(|c| c.is_alphanumeric() || c == '-'));
    }

    #[test]
    fn slug_is_deterministic() {
        let title = "Одна и та же новость";
        assert_eq!(slugify(title), slugify(title));
    }

    #[test]
    fn suffix_formatting() {
        assert_eq!(with_suffix("foo", 1), "foo-1");
        assert_eq!(with_suffix("foo", 12), "foo-12");
    }
}
