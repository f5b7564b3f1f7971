//! Related-product recommendations.
//!
//! Pure and deterministic: the engine reads a catalog snapshot and returns
//! borrowed products in catalog order. No IO, no shared state.

pub mod config;
pub mod related;

pub use config::RelatedConfig;
pub use related::{RelatedProducts, related_products};
