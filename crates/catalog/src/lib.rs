//! Storefront catalog data model.
//!
//! Product records as delivered by the inventory API, their category
//! taxonomy, the raw and typed spec shapes, the company directory and creator
//! profile, and the accessor trait through which the (external) fetch layer
//! hands a catalog snapshot to the core.

pub mod category;
pub mod company;
pub mod creator;
mod lenient;
pub mod links;
pub mod product;
pub mod source;
pub mod specs;

pub use category::{Category, CategorySlug, OTHER_SLUG};
pub use company::Company;
pub use creator::{CONTACT_EMAIL, CreatorProfile, DEFAULT_SOCIAL_LINKS, social_links};
pub use links::{extract_youtube_id, parse_https_url, safe_url, youtube_embed_url};
pub use product::Product;
pub use source::{CatalogSource, InMemoryCatalog};
pub use specs::{CategorySpecs, IemSpecs, KeyboardSpecs, MouseSpecs, MousepadSpecs, SpecBag};
