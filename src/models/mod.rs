pub mod item;
pub mod raw;
pub mod response;
pub mod source;

pub use item::*;
pub use raw::*;
pub use response::*;
pub use source::*;

// Upstream feeds use "N/A" for missing string values
pub const MISSING_VALUE: &str = "N/A";

// The retail feed substitutes this literal for titles it failed to resolve
pub const UPSTREAM_TITLE_PLACEHOLDER: &str = "LEGO";

// Final fallback when neither the item nor its URL yields a usable title
pub const FALLBACK_TITLE: &str = "Unknown Product";

// Emoji constants for display output
pub const EMOJI_PRICE: &str = "💰";
pub const EMOJI_SHIPPING: &str = "🚚";
pub const EMOJI_DELIVERY: &str = "📅";
pub const EMOJI_LOCATION: &str = "📍";
pub const EMOJI_STAR: &str = "⭐";
pub const EMOJI_PRIME: &str = "📦";
pub const EMOJI_QUESTION: &str = "❓";
