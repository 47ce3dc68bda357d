//! View model builder: grouping normalized items for display and deriving
//! card badges.

use crate::models::{CanonicalItem, ProductKind, Source};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupLabel {
    Main,
    Similar,
    Source(Source),
}

impl fmt::Display for GroupLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupLabel::Main => write!(f, "Top Picks"),
            GroupLabel::Similar => write!(f, "Similar Products"),
            GroupLabel::Source(source) => write!(f, "{} Results", source),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub label: GroupLabel,
    pub count: usize,
    pub items: Vec<CanonicalItem>,
}

impl Group {
    fn new(label: GroupLabel, items: Vec<CanonicalItem>) -> Self {
        Self {
            label,
            count: items.len(),
            items,
        }
    }
}

/// An empty overall result is a distinct state signaling "no results",
/// not a list of empty groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GroupedResults {
    Empty,
    Groups(Vec<Group>),
}

/// Group items for display. Responses carrying a product-kind marker group
/// into main picks and similar suggestions (main first); plain per-source
/// responses group by marketplace in fixed order, auction source first.
/// Groups that would be empty are omitted.
pub fn build_groups(items: Vec<CanonicalItem>) -> GroupedResults {
    if items.is_empty() {
        return GroupedResults::Empty;
    }

    let groups = if items.iter().any(|item| item.kind.is_some()) {
        let (similar, main): (Vec<_>, Vec<_>) = items
            .into_iter()
            .partition(|item| item.kind == Some(ProductKind::Similar));
        vec![
            (GroupLabel::Main, main),
            (GroupLabel::Similar, similar),
        ]
    } else {
        let (ebay, amazon): (Vec<_>, Vec<_>) = items
            .into_iter()
            .partition(|item| item.source == Source::Ebay);
        vec![
            (GroupLabel::Source(Source::Ebay), ebay),
            (GroupLabel::Source(Source::Amazon), amazon),
        ]
    };

    GroupedResults::Groups(
        groups
            .into_iter()
            .filter(|(_, items)| !items.is_empty())
            .map(|(label, items)| Group::new(label, items))
            .collect(),
    )
}

/// Derived display badges for one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Badge {
    FreeShipping,
    Prime,
    Discount(u8),
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Badge::FreeShipping => write!(f, "FREE SHIPPING"),
            Badge::Prime => write!(f, "Prime"),
            Badge::Discount(percent) => write!(f, "Save {}%", percent),
        }
    }
}

pub fn badges(item: &CanonicalItem) -> Vec<Badge> {
    let mut badges = Vec::new();
    if item.shipping == Some(crate::models::ShippingCost::Free) {
        badges.push(Badge::FreeShipping);
    }
    if item.is_prime {
        badges.push(Badge::Prime);
    }
    if let Some(percent) = item.discount_percent {
        badges.push(Badge::Discount(percent));
    }
    badges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Price, ShippingCost};
    use pretty_assertions::assert_eq;

    fn item(source: Source, kind: Option<ProductKind>, title: &str) -> CanonicalItem {
        CanonicalItem {
            source,
            kind,
            title: title.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn kinded_items_group_main_then_similar() {
        let items = vec![
            item(Source::Ebay, Some(ProductKind::Main), "a"),
            item(Source::Amazon, Some(ProductKind::Similar), "b"),
            item(Source::Amazon, Some(ProductKind::Main), "c"),
        ];

        match build_groups(items) {
            GroupedResults::Groups(groups) => {
                assert_eq!(groups.len(), 2);
                assert_eq!(groups[0].label, GroupLabel::Main);
                assert_eq!(groups[0].count, 2);
                assert_eq!(groups[1].label, GroupLabel::Similar);
                assert_eq!(groups[1].count, 1);
            }
            GroupedResults::Empty => panic!("expected groups"),
        }
    }

    #[test]
    fn unkinded_items_group_per_source_auction_first() {
        let items = vec![
            item(Source::Amazon, None, "a"),
            item(Source::Ebay, None, "b"),
            item(Source::Amazon, None, "c"),
        ];

        match build_groups(items) {
            GroupedResults::Groups(groups) => {
                assert_eq!(groups[0].label, GroupLabel::Source(Source::Ebay));
                assert_eq!(groups[0].count, 1);
                assert_eq!(groups[1].label, GroupLabel::Source(Source::Amazon));
                assert_eq!(groups[1].count, 2);
            }
            GroupedResults::Empty => panic!("expected groups"),
        }
    }

    #[test]
    fn single_source_response_omits_empty_group() {
        let items = vec![item(Source::Amazon, None, "a")];
        match build_groups(items) {
            GroupedResults::Groups(groups) => {
                assert_eq!(groups.len(), 1);
                assert_eq!(groups[0].label, GroupLabel::Source(Source::Amazon));
            }
            GroupedResults::Empty => panic!("expected groups"),
        }
    }

    #[test]
    fn no_items_is_the_empty_state() {
        assert_eq!(build_groups(Vec::new()), GroupedResults::Empty);
    }

    #[test]
    fn badges_derive_from_normalized_fields() {
        let mut card = item(Source::Amazon, None, "a");
        card.shipping = Some(ShippingCost::Free);
        card.is_prime = true;
        card.discount_percent = Some(25);
        card.price = Price::Cents(1499);

        assert_eq!(
            badges(&card),
            vec![Badge::FreeShipping, Badge::Prime, Badge::Discount(25)]
        );

        let plain = item(Source::Ebay, None, "b");
        assert!(badges(&plain).is_empty());
    }
}
