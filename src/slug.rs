use regex::Regex;
use std::sync::LazyLock;

static NON_ALPHANUMERIC_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new("[^a-z0-9]+").unwrap());
static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// URL slug: lowercase ASCII alphanumerics joined by single dashes.
#[must_use]
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    NON_ALPHANUMERIC_RUN
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// Lowercases and joins whitespace-separated words with dashes, keeping
/// punctuation intact. Used as the category prefix of product ids.
#[must_use]
pub fn dash_words(text: &str) -> String {
    WHITESPACE_RUN.replace_all(&text.to_lowercase(), "-").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugifies_names() {
        assert_eq!(slugify("USB Hub"), "usb-hub");
        assert_eq!(slugify("  Dell Latitude 5490 (i5/8GB)  "), "dell-latitude-5490-i5-8gb");
        assert_eq!(slugify("--Wi-Fi 6 Router--"), "wi-fi-6-router");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn dashes_words_without_stripping_punctuation() {
        assert_eq!(dash_words("Refurbished Laptops"), "refurbished-laptops");
        assert_eq!(dash_words("IT  Hardware & Networking"), "it-hardware-&-networking");
    }
}
