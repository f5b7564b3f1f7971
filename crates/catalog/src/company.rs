use serde::{Deserialize, Serialize};

use crate::lenient;
use crate::links::safe_url;

/// Brand or retailer the storefront links out to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: i64,
    pub name: String,
    /// Free-form upstream category label; not limited to product categories.
    #[serde(default, deserialize_with = "lenient::optional_or_default")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub website: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub affiliate_link: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub affiliate_code: Option<String>,
}

impl Company {
    pub fn new(id: i64, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            website: None,
            affiliate_link: None,
            affiliate_code: None,
        }
    }

    /// Outbound link: the affiliate link when it is safe, else the website.
    pub fn outbound_link(&self) -> Option<&str> {
        self.affiliate_link
            .as_deref()
            .and_then(safe_url)
            .or_else(|| self.website.as_deref().and_then(safe_url))
    }
}
