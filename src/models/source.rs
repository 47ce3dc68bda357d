use serde::{Deserialize, Serialize};
use std::fmt;

/// The two upstream marketplaces. No third source is modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    Ebay,
    Amazon,
}

impl Source {
    pub fn key(&self) -> &'static str {
        match self {
            Source::Ebay => "ebay",
            Source::Amazon => "amazon",
        }
    }

    /// Accepts both the lowercase keys and the capitalized spellings the
    /// backend puts in its `source` field ("eBay", "Amazon").
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_lowercase().as_str() {
            "ebay" => Some(Source::Ebay),
            "amazon" => Some(Source::Amazon),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Source::Ebay => "eBay",
            Source::Amazon => "Amazon",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn from_key_accepts_backend_spellings() {
        assert_eq!(Source::from_key("eBay"), Some(Source::Ebay));
        assert_eq!(Source::from_key("Amazon"), Some(Source::Amazon));
        assert_eq!(Source::from_key("amazon"), Some(Source::Amazon));
        assert_eq!(Source::from_key("walmart"), None);
    }

    #[test]
    fn display_uses_marketplace_names() {
        assert_eq!(Source::Ebay.to_string(), "eBay");
        assert_eq!(Source::Amazon.to_string(), "Amazon");
    }
}
