//! Top-N selection across both marketplaces.
//!
//! Mirrors the backend aggregation step's comparison rules: cheapest first,
//! best quality first, or a combined value score, optionally guaranteeing
//! that both sources are represented in the result.

use crate::models::{CanonicalItem, Price, Source};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Criteria {
    Price,
    Quality,
    BestDeal,
}

impl Criteria {
    pub fn key(&self) -> &'static str {
        match self {
            Criteria::Price => "price",
            Criteria::Quality => "quality",
            Criteria::BestDeal => "best_deal",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "price" => Some(Criteria::Price),
            "quality" => Some(Criteria::Quality),
            "best_deal" => Some(Criteria::BestDeal),
            _ => None,
        }
    }
}

/// Normalized quality score in 0.0..=1.0. Auction items score by condition
/// (new 1.0, used 0.5), retail items by star rating out of 5.
pub fn quality_score(item: &CanonicalItem) -> f64 {
    match item.source {
        Source::Ebay => {
            let condition = item
                .condition
                .as_deref()
                .unwrap_or_default()
                .to_lowercase();
            if condition.contains("new") {
                1.0
            } else if condition.contains("used") {
                0.5
            } else {
                0.0
            }
        }
        Source::Amazon => item
            .rating
            .map(|r| (r / 5.0).clamp(0.0, 1.0))
            .unwrap_or(0.0),
    }
}

/// Select the top `top_n` items by the given criteria.
///
/// Items without a parsed price sort last under Price and score worst under
/// BestDeal; they are never promoted by a missing value. With
/// `ensure_both_sources`, the result keeps at least one item from each
/// marketplace that appears in the input (when `top_n` allows).
pub fn rank(
    items: &[CanonicalItem],
    criteria: Criteria,
    top_n: usize,
    ensure_both_sources: bool,
) -> Vec<CanonicalItem> {
    let mut pool: Vec<CanonicalItem> = items.to_vec();

    match criteria {
        Criteria::Price => {
            pool.sort_by_key(|item| item.price.cents().unwrap_or(i64::MAX));
        }
        Criteria::Quality => {
            pool.sort_by(|a, b| quality_score(b).total_cmp(&quality_score(a)));
        }
        Criteria::BestDeal => {
            let max_cents = pool
                .iter()
                .filter_map(|item| item.price.cents())
                .max()
                .filter(|c| *c > 0)
                .unwrap_or(1);
            let value = |item: &CanonicalItem| {
                let normalized_price = match item.price {
                    Price::Cents(c) => c as f64 / max_cents as f64,
                    Price::Unavailable => 1.0,
                };
                quality_score(item) - normalized_price
            };
            pool.sort_by(|a, b| value(b).total_cmp(&value(a)));
        }
    }

    if !ensure_both_sources {
        pool.truncate(top_n);
        return pool;
    }

    // First pass reserves a slot for the best item of each source, second
    // pass fills the rest in sorted order.
    let mut picked = vec![false; pool.len()];
    let mut selected = Vec::with_capacity(top_n.min(pool.len()));
    let mut have = std::collections::HashSet::new();

    for (idx, item) in pool.iter().enumerate() {
        if selected.len() >= top_n {
            break;
        }
        if have.insert(item.source) {
            picked[idx] = true;
            selected.push(idx);
        }
    }
    for idx in 0..pool.len() {
        if selected.len() >= top_n {
            break;
        }
        if !picked[idx] {
            selected.push(idx);
        }
    }

    selected.sort_unstable();
    selected.into_iter().map(|idx| pool[idx].clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn priced(source: Source, title: &str, price: Price) -> CanonicalItem {
        CanonicalItem {
            source,
            title: title.to_string(),
            price,
            ..Default::default()
        }
    }

    #[test]
    fn price_ranking_puts_unpriced_items_last() {
        let items = vec![
            priced(Source::Amazon, "no price", Price::Unavailable),
            priced(Source::Ebay, "cheap", Price::Cents(999)),
            priced(Source::Amazon, "mid", Price::Cents(1999)),
        ];

        let top = rank(&items, Criteria::Price, 3, false);
        let titles: Vec<&str> = top.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["cheap", "mid", "no price"]);
    }

    #[test]
    fn quality_ranking_prefers_new_and_high_ratings() {
        let mut used = priced(Source::Ebay, "used", Price::Cents(500));
        used.condition = Some("Used".to_string());
        let mut rated = priced(Source::Amazon, "rated", Price::Cents(900));
        rated.rating = Some(4.5);
        let mut brand_new = priced(Source::Ebay, "new", Price::Cents(700));
        brand_new.condition = Some("New".to_string());

        let top = rank(&[used, rated, brand_new], Criteria::Quality, 2, false);
        let titles: Vec<&str> = top.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["new", "rated"]);
    }

    #[test]
    fn best_deal_keeps_one_item_per_source() {
        let mut great_ebay = priced(Source::Ebay, "ebay deal", Price::Cents(500));
        great_ebay.condition = Some("New".to_string());
        let mut good_ebay = priced(Source::Ebay, "ebay backup", Price::Cents(700));
        good_ebay.condition = Some("New".to_string());
        let mut weak_amazon = priced(Source::Amazon, "amazon pick", Price::Cents(2000));
        weak_amazon.rating = Some(3.0);

        let top = rank(
            &[great_ebay, good_ebay, weak_amazon],
            Criteria::BestDeal,
            2,
            true,
        );
        let sources: Vec<Source> = top.iter().map(|i| i.source).collect();
        assert!(sources.contains(&Source::Ebay));
        assert!(sources.contains(&Source::Amazon));
    }

    #[test]
    fn truncates_to_requested_size() {
        let items: Vec<CanonicalItem> = (0..10)
            .map(|i| priced(Source::Ebay, &format!("item {i}"), Price::Cents(100 + i)))
            .collect();
        assert_eq!(rank(&items, Criteria::Price, 3, false).len(), 3);
        assert_eq!(rank(&items, Criteria::Price, 3, true).len(), 3);
    }

    #[test]
    fn criteria_keys_round_trip() {
        for criteria in [Criteria::Price, Criteria::Quality, Criteria::BestDeal] {
            assert_eq!(Criteria::from_key(criteria.key()), Some(criteria));
        }
        assert_eq!(Criteria::from_key("delivery"), None);
    }
}
