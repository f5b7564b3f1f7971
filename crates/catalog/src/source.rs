//! Catalog accessors.
//!
//! The HTTP client that talks to the inventory API lives outside this
//! workspace; it plugs in by implementing [`CatalogSource`]. Lookups never
//! surface errors to callers: failures are logged and reported as absence.

use std::io::Read;

use tracing::{debug, warn};

use storefront_core::{DomainError, DomainResult, Slug};

use crate::company::Company;
use crate::creator::CreatorProfile;
use crate::product::Product;

/// Read access to a catalog snapshot.
pub trait CatalogSource: Send + Sync {
    /// Every product in catalog order.
    fn products(&self) -> Vec<Product>;

    /// Lookup by a slug that has already passed validation.
    fn find_by_slug(&self, slug: &Slug) -> Option<Product>;

    /// Lookup by an untrusted slug string.
    ///
    /// Malformed slugs are rejected before the lookup and reported as `None`.
    fn product_by_slug(&self, raw: &str) -> Option<Product> {
        match Slug::parse(raw) {
            Ok(slug) => self.find_by_slug(&slug),
            Err(err) => {
                warn!(error = %err, "rejected product lookup");
                None
            }
        }
    }

    /// Products featured in a pick list, in catalog order.
    fn picks(&self) -> Vec<Product> {
        self.products().into_iter().filter(Product::is_pick).collect()
    }

    /// Company directory; empty when the source does not carry one.
    fn companies(&self) -> Vec<Company> {
        Vec::new()
    }

    /// `None` when unavailable; callers fall back to
    /// [`CONTACT_EMAIL`](crate::CONTACT_EMAIL) and [`social_links`](crate::social_links).
    fn creator_profile(&self) -> Option<CreatorProfile> {
        None
    }
}

/// Catalog held entirely in memory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
    companies: Vec<Company>,
    creator: Option<CreatorProfile>,
}

impl InMemoryCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            ..Self::default()
        }
    }

    pub fn with_companies(mut self, companies: Vec<Company>) -> Self {
        self.companies = companies;
        self
    }

    pub fn with_creator_profile(mut self, profile: CreatorProfile) -> Self {
        self.creator = Some(profile);
        self
    }

    /// Decode a JSON array of product records.
    pub fn from_json_str(json: &str) -> DomainResult<Self> {
        let products: Vec<Product> =
            serde_json::from_str(json).map_err(|e| DomainError::parse(e.to_string()))?;
        debug!(count = products.len(), "loaded catalog");
        Ok(Self::new(products))
    }

    pub fn from_json_reader<R: Read>(reader: R) -> DomainResult<Self> {
        let products: Vec<Product> =
            serde_json::from_reader(reader).map_err(|e| DomainError::parse(e.to_string()))?;
        debug!(count = products.len(), "loaded catalog");
        Ok(Self::new(products))
    }

    pub fn as_slice(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl CatalogSource for InMemoryCatalog {
    fn products(&self) -> Vec<Product> {
        self.products.clone()
    }

    fn find_by_slug(&self, slug: &Slug) -> Option<Product> {
        self.products
            .iter()
            .find(|p| p.slug == slug.as_str())
            .cloned()
    }

    fn companies(&self) -> Vec<Company> {
        self.companies.clone()
    }

    fn creator_profile(&self) -> Option<CreatorProfile> {
        self.creator.clone()
    }
}
