//! Normalization and comparison core for eBay/Amazon shopping search results.
//!
//! Raw JSON items from the two marketplaces arrive in heterogeneous shapes
//! (native per-source fields or the backend's unified compare format). This
//! crate classifies them once at ingestion, derives a canonical render-ready
//! view model per item, and groups/ranks the results for display.

pub mod client;
pub mod config;
pub mod error;
pub mod groups;
pub mod models;
pub mod normalizer;
pub mod parsers;
pub mod ranking;
pub mod utils;

pub use client::{HttpSearchClient, RequestToken, SearchApi, SearchParams, SearchSession};
pub use config::Config;
pub use error::{Error, Result};
pub use groups::{build_groups, Badge, Group, GroupLabel, GroupedResults};
pub use models::{CanonicalItem, Price, ProductKind, RawItem, SearchResponse, ShippingCost, Source};
pub use normalizer::normalize;
pub use ranking::{rank, Criteria};
