use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

// e.g. "Dec 4" or "Dec 12 - 15"
static DELIVERY_DATE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([A-Z][a-z]{2}\s+\d{1,2}(?:\s*-\s*\d{1,2})?)").expect("Invalid delivery date regex")
});

static DELIVERY_COST_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$[\d.]+").expect("Invalid delivery cost regex"));

static ISO_DATE_PREFIX_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4}-\d{2}-\d{2})").expect("Invalid ISO date regex"));

/// Cost and date text extracted from a legacy free-text delivery string.
/// Empty strings mean "parsed but absent", distinct from not yet parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryParts {
    pub cost: String,
    pub dates: String,
}

/// Extract shipping cost and delivery date from free text like
/// "FREE delivery Dec 4" or "$6.99 delivery Dec 12 - 15".
pub fn parse_delivery_text(info: &str) -> DeliveryParts {
    let mut parts = DeliveryParts::default();

    if info.contains("FREE delivery") {
        parts.cost = "FREE".to_string();
        let remaining = info.replace("FREE delivery", "");
        if let Some(m) = DELIVERY_DATE_REGEX.find(remaining.trim()) {
            parts.dates = m.as_str().to_string();
        }
    } else if let Some(cost) = DELIVERY_COST_REGEX.find(info) {
        parts.cost = cost.as_str().to_string();
        // Search only past the cost phrase so the amount is not re-matched
        let remaining = match info.find("delivery") {
            Some(idx) => info.get(idx + "delivery".len()..).unwrap_or(""),
            None => info,
        };
        if let Some(m) = DELIVERY_DATE_REGEX.find(remaining) {
            parts.dates = m.as_str().to_string();
        }
    }

    parts
}

/// Render an ISO date prefix (`YYYY-MM-DD`) as "Thu, Dec 4" in a fixed
/// English locale. Anything else, including malformed dates, is echoed
/// verbatim rather than treated as an error.
pub fn format_delivery_date(raw: &str) -> String {
    if let Some(caps) = ISO_DATE_PREFIX_REGEX.captures(raw.trim()) {
        if let Ok(date) = NaiveDate::parse_from_str(&caps[1], "%Y-%m-%d") {
            return date.format("%a, %b %-d").to_string();
        }
    }
    raw.to_string()
}

/// Pick the delivery date from the structured window when present, falling
/// back to a flat date string. Prefers the structured form so duplicate
/// delivery info is not shown twice.
pub fn resolve_delivery_date(
    structured_min: Option<&str>,
    flat: Option<&str>,
) -> Option<String> {
    let usable = |s: Option<&str>| {
        s.map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };
    usable(structured_min).or_else(|| usable(flat))
}
