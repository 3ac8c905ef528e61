//! Search API route handlers and module exports.

mod search_marketplace;
pub use search_marketplace::search_marketplace;
