use serde::{Deserialize, Serialize};

/// Product category as stored in the inventory system (singular form).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Mouse,
    Keyboard,
    Mousepad,
    Iem,
    /// Anything the storefront has no dedicated section for, including
    /// category strings this build does not know about.
    #[serde(other)]
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Mouse,
        Category::Keyboard,
        Category::Mousepad,
        Category::Iem,
        Category::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Mouse => "mouse",
            Category::Keyboard => "keyboard",
            Category::Mousepad => "mousepad",
            Category::Iem => "iem",
            Category::Other => "other",
        }
    }

    /// Exact match on the stored form; unrecognised strings are [`Category::Other`].
    pub fn parse(raw: &str) -> Self {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == raw)
            .unwrap_or(Category::Other)
    }

    /// URL slug for the category's listing page; `None` for [`Category::Other`].
    pub fn slug(self) -> Option<CategorySlug> {
        match self {
            Category::Mouse => Some(CategorySlug::Mice),
            Category::Keyboard => Some(CategorySlug::Keyboards),
            Category::Mousepad => Some(CategorySlug::Mousepads),
            Category::Iem => Some(CategorySlug::Iems),
            Category::Other => None,
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category as used in URLs (plural form).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategorySlug {
    Mice,
    Keyboards,
    Mousepads,
    Iems,
}

/// Effective slug string used when a product has no category slug.
pub const OTHER_SLUG: &str = "other";

impl CategorySlug {
    pub const ALL: [CategorySlug; 4] = [
        CategorySlug::Mice,
        CategorySlug::Keyboards,
        CategorySlug::Mousepads,
        CategorySlug::Iems,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CategorySlug::Mice => "mice",
            CategorySlug::Keyboards => "keyboards",
            CategorySlug::Mousepads => "mousepads",
            CategorySlug::Iems => "iems",
        }
    }

    /// Display name for navigation and headings.
    pub fn label(self) -> &'static str {
        match self {
            CategorySlug::Mice => "Mice",
            CategorySlug::Keyboards => "Keyboards",
            CategorySlug::Mousepads => "Mousepads",
            CategorySlug::Iems => "IEMs",
        }
    }

    pub fn category(self) -> Category {
        match self {
            CategorySlug::Mice => Category::Mouse,
            CategorySlug::Keyboards => Category::Keyboard,
            CategorySlug::Mousepads => Category::Mousepad,
            CategorySlug::Iems => Category::Iem,
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        CategorySlug::ALL.into_iter().find(|s| s.as_str() == raw)
    }

}

impl core::fmt::Display for CategorySlug {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
