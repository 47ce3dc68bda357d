use super::{AmazonRaw, EbayRaw, RawItem};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// Envelope returned by the `/search` and `/chat-search` collaborators.
/// The core only consumes the item arrays; `extracted` is carried opaquely.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchResponse {
    pub success: bool,
    pub error: Option<String>,
    pub ebay: Option<SourceSection<EbayRaw>>,
    pub amazon: Option<SourceSection<AmazonRaw>>,
    /// Mixed compare-format array from the aggregation endpoint.
    pub products: Vec<Value>,
    pub extracted: Option<Value>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourceSection<T> {
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub items: Vec<T>,
    #[serde(default)]
    pub error: Option<String>,
}

impl SearchResponse {
    /// Flatten both typed sections and the mixed compare-format array into
    /// one sequence of tagged raw items. Unclassifiable entries are skipped
    /// with a warning, never an error.
    pub fn raw_items(&self) -> Vec<RawItem> {
        let mut items = Vec::new();

        if let Some(section) = &self.ebay {
            items.extend(section.items.iter().cloned().map(RawItem::Ebay));
        }
        if let Some(section) = &self.amazon {
            items.extend(section.items.iter().cloned().map(RawItem::Amazon));
        }
        for value in &self.products {
            match RawItem::ingest(value, None) {
                Some(item) => items.push(item),
                None => warn!("skipping unclassifiable product entry"),
            }
        }

        items
    }

    /// Error message from either per-source section, for status display.
    pub fn section_errors(&self) -> Vec<(super::Source, String)> {
        let mut errors = Vec::new();
        if let Some(e) = self.ebay.as_ref().and_then(|s| s.error.clone()) {
            errors.push((super::Source::Ebay, e));
        }
        if let Some(e) = self.amazon.as_ref().and_then(|s| s.error.clone()) {
            errors.push((super::Source::Amazon, e));
        }
        errors
    }
}
