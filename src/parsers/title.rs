use crate::models::{FALLBACK_TITLE, MISSING_VALUE, UPSTREAM_TITLE_PLACEHOLDER};
use crate::parsers::clean_text;
use once_cell::sync::Lazy;
use percent_encoding::percent_decode_str;
use regex::Regex;
use tracing::debug;

// Product-name path segment of a retail listing URL, e.g.
// "https://amazon.com/lego-star-wars-set/dp/B0C1234567"
static PRODUCT_URL_SEGMENT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"amazon\.com/([^/]+)/dp/").expect("Invalid product URL regex"));

static ASIN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)/(?:dp|product)/([A-Za-z0-9]{10})").expect("Invalid ASIN regex")
});

/// Derive a human-readable title from the product URL path segment:
/// percent-decode, split on hyphens, title-case each word.
pub fn title_from_url(url: &str) -> Option<String> {
    let caps = PRODUCT_URL_SEGMENT_REGEX.captures(url)?;
    let decoded = percent_decode_str(&caps[1]).decode_utf8().ok()?;

    let name = decoded
        .split('-')
        .filter(|word| !word.is_empty())
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ");

    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Resolve a display title: prefer the unified field, then the source-native
/// one. The upstream placeholder ("LEGO") and missing marker ("N/A") count
/// as absent and trigger URL derivation; a fixed generic placeholder is the
/// last resort.
pub fn resolve_title(
    primary: Option<&str>,
    secondary: Option<&str>,
    url: Option<&str>,
) -> String {
    let resolved = primary
        .or(secondary)
        .map(clean_text)
        .filter(|t| !t.is_empty() && t != UPSTREAM_TITLE_PLACEHOLDER && t != MISSING_VALUE);

    if let Some(title) = resolved {
        return title;
    }

    match url.and_then(title_from_url) {
        Some(title) => title,
        None => {
            debug!("no usable title or product URL, using placeholder");
            FALLBACK_TITLE.to_string()
        }
    }
}

/// Extract a 10-character alphanumeric product identifier from the URL path
/// segment following `/dp/` or `/product/`.
pub fn extract_asin(url: &str) -> Option<String> {
    ASIN_REGEX
        .captures(url)
        .map(|caps| caps[1].to_uppercase())
}
