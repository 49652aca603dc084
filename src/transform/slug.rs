//! Kubernetes resource name derivation
//!
//! Turns a human readable workflow name into something usable as
//! `metadata.name`:
//!
//! 1. lowercase
//! 2. runs of whitespace (including the U+001C..U+001F separators) and `_`
//!    become a single `-`
//! 3. anything outside `[a-z0-9-]` is dropped (no transliteration)
//! 4. runs of `-` collapse to one
//! 5. leading and trailing `-` are stripped
//! 6. the result is cut to [`MAX_NAME_LEN`] characters
//!
//! Truncation can expose a trailing `-`; it is left in place.

use regex::Regex;
use std::sync::LazyLock;

/// Maximum length of a Kubernetes resource name label
pub const MAX_NAME_LEN: usize = 63;

static SEPARATOR_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\x1C-\x1F_]+").expect("separator pattern is valid"));
static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9-]").expect("disallowed pattern is valid"));
static HYPHEN_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-+").expect("hyphen pattern is valid"));

/// Normalize a name without applying the length limit (steps 1-5)
pub fn normalize(name: &str) -> String {
    let lowered = name.to_lowercase();
    let separated = SEPARATOR_RUNS.replace_all(&lowered, "-");
    let allowed = DISALLOWED.replace_all(&separated, "");
    let collapsed = HYPHEN_RUNS.replace_all(&allowed, "-");
    collapsed.trim_matches('-').to_string()
}

/// Derive a Kubernetes-safe resource name from an arbitrary name
///
/// # Example
/// ```
/// use n8n_workflow_converter::transform::slugify;
///
/// assert_eq!(slugify("My Workflow_Name!!"), "my-workflow-name");
/// assert_eq!(slugify("___"), "");
/// ```
pub fn slugify(name: &str) -> String {
    truncate(normalize(name))
}

/// Cut a normalized name down to [`MAX_NAME_LEN`] characters
pub(crate) fn truncate(mut slug: String) -> String {
    // normalize() only leaves ASCII behind, so byte and char offsets agree
    slug.truncate(MAX_NAME_LEN);
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_valid(slug: &str) {
        assert!(slug.len() <= MAX_NAME_LEN, "too long: {slug}");
        assert!(
            slug.chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
            "bad character in: {slug}"
        );
        assert!(!slug.starts_with('-'), "leading hyphen: {slug}");
        assert!(!slug.contains("--"), "double hyphen: {slug}");
    }

    #[test]
    fn test_basic_name() {
        assert_eq!(slugify("My Workflow_Name!!"), "my-workflow-name");
        assert_eq!(slugify("Test"), "test");
        assert_eq!(slugify("unnamed-workflow"), "unnamed-workflow");
    }

    #[test]
    fn test_empty_results() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("___"), "");
        assert_eq!(slugify("   "), "");
        assert_eq!(slugify("!!! ???"), "");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn test_mixed_separators_collapse() {
        assert_eq!(slugify("a \t_ b"), "a-b");
        assert_eq!(slugify("a - b"), "a-b");
        assert_eq!(slugify("  leading and trailing  "), "leading-and-trailing");
        assert_eq!(slugify("Sync: Slack -> Jira"), "sync-slack-jira");
        assert_eq!(slugify("a\u{1c}b"), "a-b");
        assert_eq!(slugify("a\u{1f}_\u{1d}b"), "a-b");
        assert_eq!(slugify("a\u{a0}b\u{2003}c"), "a-b-c");
    }

    #[test]
    fn test_non_ascii_removed() {
        assert_eq!(slugify("Café Überblick"), "caf-berblick");
        assert_eq!(slugify("日本語 workflow"), "workflow");
        assert_eq!(slugify("Ωmega"), "mega");
    }

    #[test]
    fn test_digits_kept() {
        assert_eq!(slugify("Report v2 (2024)"), "report-v2-2024");
    }

    #[test]
    fn test_truncation() {
        let long = "a".repeat(100);
        assert_eq!(slugify(&long).len(), MAX_NAME_LEN);

        // 62 letters then a separator: the cut lands right after the hyphen
        let name = format!("{} tail", "b".repeat(62));
        let slug = slugify(&name);
        assert_eq!(slug.len(), MAX_NAME_LEN);
        assert!(slug.ends_with('-'));
    }

    #[test]
    fn test_output_shape() {
        for name in [
            "My Workflow_Name!!",
            "  --weird__name--  ",
            "Ünïcödé everywhere",
            "CamelCaseName",
            "x",
            "email: ops@example.com / alerts",
        ] {
            let slug = slugify(name);
            assert_valid(&slug);
            assert!(!slug.ends_with('-'));
        }
    }

    #[test]
    fn test_idempotent() {
        for name in ["My Workflow_Name!!", "Daily Report (EU)", "", "a_b_c"] {
            let once = slugify(name);
            assert_eq!(slugify(&once), once);
        }
    }

    #[test]
    fn test_normalize_does_not_truncate() {
        let long = format!("{} end", "c".repeat(80));
        assert_eq!(normalize(&long).len(), 84);
    }
}
