use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};

use shop_compare::groups::badges;
use shop_compare::models::{
    CanonicalItem, EMOJI_DELIVERY, EMOJI_LOCATION, EMOJI_PRICE, EMOJI_SHIPPING, EMOJI_STAR,
};
use shop_compare::parsers::format_delivery_date;
use shop_compare::{
    build_groups, normalize, rank, Config, Criteria, GroupedResults, HttpSearchClient, SearchApi,
    SearchParams, SearchSession,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("shop_compare=info".parse()?),
        )
        .init();

    let query = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "lego star wars".to_string());

    info!("Starting product comparison for: {}", query);

    let config = Arc::new(Config::load()?);
    let client = HttpSearchClient::new(config.clone())?;
    let session = SearchSession::new();

    let token = session.begin();
    let response = client.search(&SearchParams::for_product(&query)).await?;

    // A newer search would have issued a later token; drop stale results
    if !session.is_current(token) {
        info!("Discarding stale response for: {}", query);
        return Ok(());
    }

    for (source, error) in response.section_errors() {
        warn!("{} search error: {}", source, error);
    }

    let items: Vec<CanonicalItem> = response.raw_items().iter().map(normalize).collect();
    info!("Normalized {} items", items.len());

    let top_picks = rank(&items, Criteria::BestDeal, 3, true);

    match build_groups(items) {
        GroupedResults::Empty => {
            println!("No results found. Try adjusting your filters.");
        }
        GroupedResults::Groups(groups) => {
            for group in &groups {
                println!("\n=== {} ({} items) ===", group.label, group.count);
                for item in &group.items {
                    print_card(item);
                }
            }
        }
    }

    if !top_picks.is_empty() {
        println!("\n=== Best Deals ===");
        for item in &top_picks {
            print_card(item);
        }
    }

    Ok(())
}

fn print_card(item: &CanonicalItem) {
    println!("[{}] {}", item.source, item.title);
    println!("  {} {}", EMOJI_PRICE, item.price.display(item.source));

    let card_badges = badges(item);
    if !card_badges.is_empty() {
        let labels: Vec<String> = card_badges.iter().map(|b| b.to_string()).collect();
        println!("  {}", labels.join(" | "));
    }

    if let Some(shipping) = &item.shipping {
        println!("  {} Shipping: {}", EMOJI_SHIPPING, shipping);
    }
    if let Some(date) = &item.delivery_date {
        println!("  {} Delivery: {}", EMOJI_DELIVERY, format_delivery_date(date));
    }
    if let Some(rating) = item.rating {
        match item.review_count {
            Some(reviews) => println!("  {} {} stars ({} reviews)", EMOJI_STAR, rating, reviews),
            None => println!("  {} {} stars", EMOJI_STAR, rating),
        }
    }
    if let Some(location) = &item.location {
        println!("  {} {}", EMOJI_LOCATION, location);
    }
    if let Some(condition) = &item.condition {
        println!("  Condition: {}", condition);
    }
    println!("  {}", item.url);
}
