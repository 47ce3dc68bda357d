//! Field normalization: one canonical view model per raw item.
//!
//! Every resolution rule here tolerates missing or malformed input by
//! substituting an explicit marker; nothing in this module performs I/O,
//! returns an error, or panics.

use crate::models::{
    AmazonRaw, CanonicalItem, DeliveryField, EbayRaw, Price, ProductKind, RawItem, ShippingCost,
    MISSING_VALUE,
};
use crate::parsers::{
    clean_text, dollars_to_cents, extract_asin, parse_delivery_text, parse_price_value,
    parse_repaired_price_value, parse_shipping_cost, resolve_delivery_date, resolve_title,
};
use serde_json::Value;

/// Convert one classified raw item into its canonical view model.
pub fn normalize(raw: &RawItem) -> CanonicalItem {
    match raw {
        RawItem::Ebay(item) => normalize_ebay(item),
        RawItem::Amazon(item) => normalize_amazon(item),
    }
}

fn normalize_ebay(raw: &EbayRaw) -> CanonicalItem {
    let url = raw.url.clone().unwrap_or_default();
    let title = resolve_title(raw.title.as_deref(), None, raw.url.as_deref());

    let image_url = raw
        .image
        .clone()
        .filter(|s| !s.is_empty())
        .or_else(|| raw.images.iter().find(|s| !s.is_empty()).cloned());

    let price = raw
        .price
        .as_ref()
        .and_then(parse_price_value)
        .map(Price::from_dollars)
        .unwrap_or(Price::Unavailable);

    // The auction source ships a pre-computed discount block
    let original_price_cents = raw
        .market_price
        .as_ref()
        .and_then(|m| m.original.as_ref())
        .and_then(parse_price_value)
        .map(dollars_to_cents);
    let discount_percent = raw
        .market_price
        .as_ref()
        .and_then(|m| m.discount_percentage.as_ref())
        .and_then(parse_percent);

    let first_option = raw.shipping_options.first();
    let shipping = first_option
        .and_then(|opt| opt.cost.as_ref())
        .and_then(parse_shipping_cost);
    let delivery_date = resolve_delivery_date(
        first_option.and_then(|opt| opt.min_delivery.as_deref()),
        raw.min_delivery_date.as_deref(),
    );

    CanonicalItem {
        source: crate::models::Source::Ebay,
        title,
        url,
        image_url,
        price,
        original_price_cents,
        discount_percent,
        shipping,
        delivery_date,
        rating: None,
        review_count: None,
        is_prime: false,
        condition: present_text(raw.condition.as_deref()),
        location: present_text(raw.item_location.as_deref()),
        description: present_text(raw.description.as_deref()),
        categories: raw.categories.clone(),
        asin: None,
        kind: raw.product_type.as_deref().and_then(ProductKind::from_key),
        search_term: raw.search_term.clone(),
    }
}

fn normalize_amazon(raw: &AmazonRaw) -> CanonicalItem {
    let url = raw
        .url
        .clone()
        .or_else(|| raw.product_url.clone())
        .unwrap_or_default();
    let title = resolve_title(
        raw.title.as_deref(),
        raw.product_title.as_deref(),
        Some(url.as_str()).filter(|u| !u.is_empty()),
    );

    let image_url = raw
        .image
        .clone()
        .or_else(|| raw.product_photo.clone())
        .filter(|s| !s.is_empty());

    let current = raw
        .price
        .as_ref()
        .or(raw.product_price.as_ref())
        .and_then(parse_price_value);
    let original = raw
        .product_original_price
        .as_ref()
        .and_then(parse_repaired_price_value);

    // The original-price field is the last-resort source for the displayed
    // price; a discount is only derivable when both values parsed on their
    // own and the original is genuinely higher.
    let price = current
        .or(original)
        .map(Price::from_dollars)
        .unwrap_or(Price::Unavailable);
    let discount_percent = match (current, original) {
        (Some(cur), Some(orig)) if orig > cur => {
            Some(((1.0 - cur / orig) * 100.0).round() as u8)
        }
        _ => None,
    };

    let (shipping, delivery_date) = resolve_amazon_delivery(raw);

    let rating = raw
        .star_rating
        .as_ref()
        .or(raw.product_star_rating.as_ref())
        .and_then(parse_lenient_f64);
    let review_count = raw
        .product_num_ratings
        .as_ref()
        .and_then(parse_lenient_i64);

    let asin = raw
        .asin
        .clone()
        .filter(|a| !a.is_empty() && a != MISSING_VALUE)
        .or_else(|| extract_asin(&url));

    CanonicalItem {
        source: crate::models::Source::Amazon,
        title,
        url,
        image_url,
        price,
        original_price_cents: original.map(dollars_to_cents),
        discount_percent,
        shipping,
        delivery_date,
        rating,
        review_count,
        is_prime: raw.is_prime.unwrap_or(false),
        condition: None,
        location: None,
        description: None,
        categories: Vec::new(),
        asin,
        kind: raw.product_type.as_deref().and_then(ProductKind::from_key),
        search_term: raw.search_term.clone(),
    }
}

fn resolve_amazon_delivery(raw: &AmazonRaw) -> (Option<ShippingCost>, Option<String>) {
    match &raw.product_delivery_info {
        Some(DeliveryField::Window(window)) => (
            None,
            resolve_delivery_date(window.min_delivery.as_deref(), None),
        ),
        Some(DeliveryField::Text(text)) => {
            let parts = parse_delivery_text(text);
            let shipping = if parts.cost == "FREE" {
                Some(ShippingCost::Free)
            } else if parts.cost.is_empty() {
                None
            } else {
                crate::parsers::parse_price(&parts.cost).map(ShippingCost::Paid)
            };
            let date = Some(parts.dates).filter(|d| !d.is_empty());
            (shipping, date)
        }
        None => (None, None),
    }
}

fn present_text(value: Option<&str>) -> Option<String> {
    value
        .map(clean_text)
        .filter(|s| !s.is_empty() && s != MISSING_VALUE)
}

fn parse_percent(value: &Value) -> Option<u8> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches('%').parse::<f64>().ok(),
        _ => None,
    }
    .filter(|p| p.is_finite() && *p > 0.0)
    .map(|p| p.round().min(100.0) as u8)
}

fn parse_lenient_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|v| v.is_finite())
}

fn parse_lenient_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.replace(',', "").trim().parse::<i64>().ok(),
        _ => None,
    }
}
