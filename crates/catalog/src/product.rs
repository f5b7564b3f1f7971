use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use storefront_core::ProductId;

use crate::category::{Category, CategorySlug, OTHER_SLUG};
use crate::lenient;
use crate::specs::{CategorySpecs, SpecBag};

/// Product record as returned by the public inventory API.
///
/// Read-only once fetched. Everything apart from `id`, `slug` and
/// `product_name` is optional upstream and defaults when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub slug: String,
    pub product_name: String,
    #[serde(default = "default_category", deserialize_with = "lenient::category")]
    pub category: Category,
    #[serde(default, deserialize_with = "lenient::category_slug")]
    pub category_slug: Option<CategorySlug>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub image_url: Option<String>,
    /// Retail price in display currency units. `None` means "no price".
    #[serde(default, deserialize_with = "lenient::optional")]
    pub retail_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub short_verdict: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub pros: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub cons: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub specs: Option<SpecBag>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub video_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub pick_category: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub date_acquired: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub company_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub company_website: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub affiliate_link: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub affiliate_code: Option<String>,
}

fn default_category() -> Category {
    Category::Other
}

impl Product {
    /// Minimal product with the category's canonical slug and no optional data.
    pub fn new(
        id: i64,
        slug: impl Into<String>,
        product_name: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            id: ProductId::new(id),
            slug: slug.into(),
            product_name: product_name.into(),
            category,
            category_slug: category.slug(),
            image_url: None,
            retail_price: None,
            short_verdict: None,
            pros: None,
            cons: None,
            rating: None,
            specs: None,
            video_url: None,
            pick_category: None,
            date_acquired: None,
            company_name: None,
            company_website: None,
            affiliate_link: None,
            affiliate_code: None,
        }
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.retail_price = Some(price);
        self
    }

    pub fn with_specs(mut self, specs: SpecBag) -> Self {
        self.specs = Some(specs);
        self
    }

    pub fn with_category_slug(mut self, slug: Option<CategorySlug>) -> Self {
        self.category_slug = slug;
        self
    }

    pub fn with_pick(mut self, pick: impl Into<String>) -> Self {
        self.pick_category = Some(pick.into());
        self
    }

    /// Category slug used for grouping; products without one share `"other"`.
    pub fn effective_category_slug(&self) -> &'static str {
        self.category_slug.map_or(OTHER_SLUG, CategorySlug::as_str)
    }

    /// Price suitable for display and comparison.
    ///
    /// Zero, negative and non-finite prices count as unknown.
    pub fn display_price(&self) -> Option<f64> {
        self.retail_price.filter(|p| p.is_finite() && *p > 0.0)
    }

    /// Typed view of the raw spec bag, chosen by `category`.
    pub fn typed_specs(&self) -> CategorySpecs {
        CategorySpecs::from_bag(self.category, self.specs.as_ref())
    }

    pub fn is_pick(&self) -> bool {
        self.pick_category.as_deref().is_some_and(|p| !p.is_empty())
    }

    /// Acquisition date, accepting `YYYY-MM-DD` or an RFC 3339 timestamp.
    pub fn acquired_on(&self) -> Option<NaiveDate> {
        let raw = self.date_acquired.as_deref()?.trim();
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
    }
}
