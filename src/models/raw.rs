use super::Source;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One auction-source item as the backend delivers it. Every field is
/// optional; `price` and the market-price numbers arrive as either strings
/// or numbers depending on the upstream path.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct EbayRaw {
    pub title: Option<String>,
    pub price: Option<Value>,
    pub url: Option<String>,
    pub image: Option<String>,
    pub images: Vec<String>,
    pub condition: Option<String>,
    #[serde(rename = "itemLocation")]
    pub item_location: Option<String>,
    #[serde(rename = "shippingOptions")]
    pub shipping_options: Vec<ShippingOption>,
    pub market_price: Option<MarketPrice>,
    #[serde(rename = "seller_feedbackPercentage")]
    pub seller_feedback_percentage: Option<Value>,
    pub categories: Vec<String>,
    pub description: Option<String>,
    #[serde(rename = "itemCreationDate")]
    pub item_creation_date: Option<String>,
    pub min_delivery_date: Option<String>,
    pub product_type: Option<String>,
    pub search_term: Option<String>,
    pub rank: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ShippingOption {
    pub cost: Option<Value>,
    #[serde(rename = "minDelivery")]
    pub min_delivery: Option<String>,
    #[serde(rename = "maxDelivery")]
    pub max_delivery: Option<String>,
}

/// Pre-computed discount block attached to auction items.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct MarketPrice {
    pub original: Option<Value>,
    pub discount: Option<Value>,
    pub discount_percentage: Option<Value>,
}

/// One retail-source item. Carries both the native `product_*` field names
/// and the unified compare-format spellings (`title`, `price`, `image`, ...)
/// emitted by the backend aggregation step; resolution order in the
/// normalizer handles whichever set is present.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AmazonRaw {
    pub product_title: Option<String>,
    pub title: Option<String>,
    pub product_url: Option<String>,
    pub url: Option<String>,
    pub product_price: Option<Value>,
    pub price: Option<Value>,
    pub product_photo: Option<String>,
    pub image: Option<String>,
    pub product_star_rating: Option<Value>,
    pub star_rating: Option<Value>,
    pub product_num_ratings: Option<Value>,
    pub is_prime: Option<bool>,
    pub product_original_price: Option<Value>,
    pub product_delivery_info: Option<DeliveryField>,
    pub asin: Option<String>,
    pub product_availability: Option<String>,
    pub sales_volume: Option<String>,
    pub product_type: Option<String>,
    pub search_term: Option<String>,
    pub rank: Option<u32>,
}

/// Delivery info arrives either as legacy free text ("FREE delivery Dec 4")
/// or as a structured window object.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum DeliveryField {
    Window(DeliveryWindow),
    Text(String),
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct DeliveryWindow {
    #[serde(rename = "minDelivery")]
    pub min_delivery: Option<String>,
    #[serde(rename = "maxDelivery")]
    pub max_delivery: Option<String>,
}

/// Tagged union over the two raw shapes, resolved once at ingestion so the
/// rest of the crate never probes for field presence.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub enum RawItem {
    Ebay(EbayRaw),
    Amazon(AmazonRaw),
}

impl RawItem {
    pub fn source(&self) -> Source {
        match self {
            RawItem::Ebay(_) => Source::Ebay,
            RawItem::Amazon(_) => Source::Amazon,
        }
    }

    /// Classify and deserialize one raw JSON object.
    ///
    /// Classification order: an explicit `source` field wins, then the
    /// caller's hint, then field probing (any `product_*` key means the
    /// retail source). Returns None for values that are not objects or
    /// cannot be read as either shape; never panics.
    pub fn ingest(value: &Value, hint: Option<Source>) -> Option<RawItem> {
        let obj = value.as_object()?;

        let source = obj
            .get("source")
            .and_then(Value::as_str)
            .and_then(Source::from_key)
            .or(hint)
            .unwrap_or_else(|| {
                if obj.keys().any(|k| k.starts_with("product_")) {
                    Source::Amazon
                } else {
                    Source::Ebay
                }
            });

        match source {
            Source::Ebay => serde_json::from_value::<EbayRaw>(value.clone())
                .ok()
                .map(RawItem::Ebay),
            Source::Amazon => serde_json::from_value::<AmazonRaw>(value.clone())
                .ok()
                .map(RawItem::Amazon),
        }
    }
}
