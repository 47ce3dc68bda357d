use super::Source;
use serde::{Deserialize, Serialize};
use std::fmt;

// NewType pattern for type safety
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub String);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A price is either a parsed integer-cents value or explicitly unavailable.
/// Once normalization completes a raw unparsed string never survives here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Price {
    Cents(i64),
    Unavailable,
}

impl Price {
    pub fn from_dollars(dollars: f64) -> Self {
        Price::Cents((dollars * 100.0).round() as i64)
    }

    pub fn cents(&self) -> Option<i64> {
        match self {
            Price::Cents(c) => Some(*c),
            Price::Unavailable => None,
        }
    }

    /// Display string for cards. Unavailable prices render a neutral
    /// "See price on ..." line, never "$NaN" or "$0.00".
    pub fn display(&self, source: Source) -> String {
        match self {
            Price::Cents(c) => format!("${}.{:02}", c / 100, c % 100),
            Price::Unavailable => format!("See price on {}", source.display_name()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ShippingCost {
    Free,
    Paid(f64),
}

impl fmt::Display for ShippingCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShippingCost::Free => write!(f, "FREE"),
            ShippingCost::Paid(amount) => write!(f, "${:.2}", amount),
        }
    }
}

/// Marker carried by aggregated compare-format responses: top picks for the
/// searched product vs. suggestions for related search terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductKind {
    Main,
    Similar,
}

impl ProductKind {
    pub fn key(&self) -> &'static str {
        match self {
            ProductKind::Main => "main",
            ProductKind::Similar => "similar",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "main" => Some(ProductKind::Main),
            "similar" => Some(ProductKind::Similar),
            _ => None,
        }
    }
}

/// The canonical render-ready view model for one product result.
///
/// Built once per raw item per render pass and discarded when the next search
/// replaces the results; never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalItem {
    pub source: Source,
    pub title: String,
    pub url: String,
    pub image_url: Option<String>,
    pub price: Price,
    pub original_price_cents: Option<i64>,
    /// Present only when both prices parsed and original > current.
    pub discount_percent: Option<u8>,
    pub shipping: Option<ShippingCost>,
    pub delivery_date: Option<String>,
    pub rating: Option<f64>,
    pub review_count: Option<i64>,
    pub is_prime: bool,
    pub condition: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub categories: Vec<String>,
    pub asin: Option<String>,
    pub kind: Option<ProductKind>,
    pub search_term: Option<String>,
}

impl Default for CanonicalItem {
    fn default() -> Self {
        Self {
            source: Source::Ebay,
            title: String::new(),
            url: String::new(),
            image_url: None,
            price: Price::Unavailable,
            original_price_cents: None,
            discount_percent: None,
            shipping: None,
            delivery_date: None,
            rating: None,
            review_count: None,
            is_prime: false,
            condition: None,
            location: None,
            description: None,
            categories: Vec::new(),
            asin: None,
            kind: None,
            search_term: None,
        }
    }
}

impl CanonicalItem {
    /// Stable composite identity for renderer keys and cross-pass dedup.
    pub fn identity(&self) -> ItemId {
        let components = [
            self.source.key().to_string(),
            self.title.to_lowercase().trim().to_string(),
            self.url.to_lowercase().trim().to_string(),
        ];

        let id_string = components
            .iter()
            .filter(|s| !s.is_empty())
            .cloned()
            .collect::<Vec<_>>()
            .join("|");

        let digest = md5::compute(id_string.as_bytes());
        ItemId(format!("{:x}", digest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn price_display_formats_cents() {
        assert_eq!(Price::Cents(649).display(Source::Amazon), "$6.49");
        assert_eq!(Price::Cents(129900).display(Source::Ebay), "$1299.00");
        assert_eq!(Price::Cents(500).display(Source::Ebay), "$5.00");
    }

    #[test]
    fn unavailable_price_shows_neutral_fallback() {
        assert_eq!(
            Price::Unavailable.display(Source::Amazon),
            "See price on Amazon"
        );
        assert_eq!(Price::Unavailable.display(Source::Ebay), "See price on eBay");
    }

    #[test]
    fn from_dollars_rounds_to_cents() {
        assert_eq!(Price::from_dollars(6.49), Price::Cents(649));
        assert_eq!(Price::from_dollars(19.999), Price::Cents(2000));
    }

    #[test]
    fn identity_is_stable_and_source_scoped() {
        let item = CanonicalItem {
            source: Source::Amazon,
            title: "Lego Star Wars Set".to_string(),
            url: "https://amazon.com/lego-star-wars-set/dp/B0C1234567".to_string(),
            ..Default::default()
        };
        let twin = item.clone();
        assert_eq!(item.identity(), twin.identity());

        let other_source = CanonicalItem {
            source: Source::Ebay,
            ..item.clone()
        };
        assert_ne!(item.identity(), other_source.identity());
    }
}
