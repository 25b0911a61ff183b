//! Text normalization for feature extraction.
//!
//! [`clean_text`] standardizes raw text while keeping the characters that act
//! as spam/phishing signals (`!`, `?`, `$`, `%`, `&`).

use std::sync::LazyLock;

use regex::Regex;

static URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"http\S+|www\S+|https\S+").expect("static regex"));
static EMAIL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+@\S+").expect("static regex"));
static SPECIALS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9\s!?$%&]").expect("static regex"));
static SPACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("static regex"));

/// Standardize text for the feature extractor.
///
/// - lower-cases everything
/// - replaces URLs with `url_token` and email addresses with `email_token`
/// - strips characters other than alphanumerics, whitespace, and `! ? $ % &`
/// - collapses runs of whitespace to a single space and trims the ends
pub fn clean_text(text: &str) -> String {
    let text = text.to_lowercase();
    let text = URL.replace_all(&text, "url_token");
    let text = EMAIL.replace_all(&text, "email_token");
    let text = SPECIALS.replace_all(&text, "");
    let text = SPACES.replace_all(&text, " ");
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::clean_text;

    #[test]
    fn lowercases_and_collapses_whitespace() {
        assert_eq!(clean_text("  Hello   WORLD  "), "hello world");
    }

    #[test]
    fn replaces_urls_and_emails_with_tokens() {
        assert_eq!(
            clean_text("visit http://evil.example/now"),
            "visit url_token"
        );
        assert_eq!(clean_text("mail admin@bank.example"), "mail email_token");
    }

    #[test]
    fn keeps_phishing_signal_characters() {
        assert_eq!(clean_text("WIN $1000 NOW!!!"), "win $1000 now!!!");
        assert_eq!(clean_text("100% free?"), "100% free?");
    }

    #[test]
    fn strips_other_punctuation() {
        assert_eq!(clean_text("a,b;c(d)e"), "abcde");
    }
}
