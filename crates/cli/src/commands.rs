//! Subcommand implementations. Each returns the text to print.

use std::fmt::Write as _;

use anyhow::{Context, bail};
use serde::Serialize;

use storefront_catalog::{
    CatalogSource, InMemoryCatalog, Product, extract_youtube_id, safe_url, youtube_embed_url,
};
use storefront_core::{DomainError, DomainResult};
use storefront_recommend::{RelatedConfig, RelatedProducts};
use storefront_specs::{
    MousepadFilter, MousepadSize, RatingRange, ResolvedMousepadSpecs, SurfaceType,
    filter_mousepads, resolve_mousepad_specs, spec_entries,
};

/// One product line in list output.
#[derive(Debug, Serialize)]
struct Listing<'a> {
    slug: &'a str,
    name: &'a str,
    category: &'static str,
    price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    link: Option<&'a str>,
}

impl<'a> From<&'a Product> for Listing<'a> {
    fn from(p: &'a Product) -> Self {
        Self {
            slug: &p.slug,
            name: &p.product_name,
            category: p.effective_category_slug(),
            price: p.display_price(),
            link: p.affiliate_link.as_deref().and_then(safe_url),
        }
    }
}

fn lookup(catalog: &InMemoryCatalog, slug: &str) -> DomainResult<Product> {
    catalog.product_by_slug(slug).ok_or_else(DomainError::not_found)
}

fn render_listings(products: &[&Product], json: bool) -> anyhow::Result<String> {
    let listings: Vec<Listing<'_>> = products.iter().map(|p| Listing::from(*p)).collect();
    if json {
        return Ok(serde_json::to_string_pretty(&listings)?);
    }

    let mut out = String::new();
    for l in &listings {
        let price = l.price.map_or_else(|| "-".to_string(), |p| format!("{p:.2}"));
        writeln!(out, "{:<32} {:<12} {:>10}  {}", l.slug, l.category, price, l.name)?;
    }
    Ok(out.trim_end().to_string())
}

pub fn specs(catalog: &InMemoryCatalog, slug: &str, json: bool) -> anyhow::Result<String> {
    let product = lookup(catalog, slug).with_context(|| format!("product {slug:?}"))?;
    let entries = spec_entries(&product);

    if json {
        return Ok(serde_json::to_string_pretty(&entries)?);
    }

    let width = entries.iter().map(|e| e.label.len()).max().unwrap_or(0);
    let mut out = String::new();
    writeln!(out, "{}", product.product_name)?;
    for entry in &entries {
        writeln!(out, "  {:<width$}  {}", entry.label, entry.value)?;
    }
    if let Some(id) = product.video_url.as_deref().and_then(extract_youtube_id) {
        writeln!(out, "Review: {}", youtube_embed_url(&id))?;
    }
    Ok(out.trim_end().to_string())
}

pub fn related(
    catalog: &InMemoryCatalog,
    slug: &str,
    config: RelatedConfig,
    json: bool,
) -> anyhow::Result<String> {
    let product = lookup(catalog, slug).with_context(|| format!("product {slug:?}"))?;
    let related = RelatedProducts::new(config).find(&product, catalog.as_slice());
    render_listings(&related, json)
}

/// Build a mousepad filter from loosely-typed command-line values.
pub fn mousepad_filter(
    surface: Option<&str>,
    size: Option<&str>,
    speed: (f64, f64),
    control: (f64, f64),
) -> anyhow::Result<MousepadFilter> {
    let surface_type = match surface {
        Some(raw) => match SurfaceType::parse(raw) {
            Some(s) => Some(s),
            None => bail!("unknown surface type {raw:?} (expected Speed, Control or Hybrid)"),
        },
        None => None,
    };
    let size = match size {
        Some(raw) => match MousepadSize::parse(raw) {
            Some(s) => Some(s),
            None => bail!("unknown size {raw:?} (expected Small, Medium, Large, XL or Desk Mat)"),
        },
        None => None,
    };

    Ok(MousepadFilter {
        surface_type,
        size,
        speed: RatingRange::new(speed.0, speed.1),
        control: RatingRange::new(control.0, control.1),
    })
}

pub fn mousepads(
    catalog: &InMemoryCatalog,
    filter: &MousepadFilter,
    json: bool,
) -> anyhow::Result<String> {
    let matches = filter_mousepads(catalog.as_slice(), filter);

    if json {
        #[derive(Serialize)]
        struct Row<'a> {
            #[serde(flatten)]
            listing: Listing<'a>,
            specs: ResolvedMousepadSpecs,
        }
        let rows: Vec<Row<'_>> = matches
            .iter()
            .map(|p| Row {
                listing: Listing::from(*p),
                specs: resolve_mousepad_specs(p),
            })
            .collect();
        return Ok(serde_json::to_string_pretty(&rows)?);
    }

    render_listings(&matches, false)
}

pub fn picks(catalog: &InMemoryCatalog, json: bool) -> anyhow::Result<String> {
    let picks = catalog.picks();
    let refs: Vec<&Product> = picks.iter().collect();
    render_listings(&refs, json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalog() -> InMemoryCatalog {
        let records = json!([
            {
                "id": 1, "slug": "viper-v3-pro", "product_name": "Viper V3 Pro",
                "category": "mouse", "category_slug": "mice", "retail_price": 159.99,
                "affiliate_link": "http://insecure.example/viper",
                "video_url": "https://youtu.be/dQw4w9WgXcQ",
                "specs": { "weight": 54, "dpi": 35000, "sensor": "Focus Pro 35K", "shape": "" }
            },
            {
                "id": 2, "slug": "op1-8k", "product_name": "OP1 8K",
                "category": "mouse", "category_slug": "mice", "retail_price": 149.0,
                "pick_category": "best-budget"
            },
            {
                "id": 3, "slug": "artisan-zero", "product_name": "Artisan Zero",
                "category": "mousepad", "category_slug": "mousepads", "retail_price": 60.0,
                "specs": { "surface_type": "Control", "size": "XL", "speed_rating": 4, "control_rating": 9 }
            },
            {
                "id": 4, "slug": "qck-heavy", "product_name": "QcK Heavy",
                "category": "mousepad", "category_slug": "mousepads",
                "specs": { "surface_type": "speed" }
            }
        ]);
        InMemoryCatalog::from_json_str(&records.to_string()).unwrap()
    }

    #[test]
    fn specs_prints_formatted_table() {
        let out = specs(&catalog(), "viper-v3-pro", false).unwrap();
        assert!(out.starts_with("Viper V3 Pro"));
        assert!(out.contains("Weight"));
        assert!(out.contains("54g"));
        assert!(out.contains("35,000 DPI"));
        assert!(!out.contains("Shape"));
        assert!(out.ends_with("Review: https://www.youtube-nocookie.com/embed/dQw4w9WgXcQ"));
    }

    #[test]
    fn specs_reports_unknown_and_malformed_slugs() {
        let err = specs(&catalog(), "nope", false).unwrap_err();
        assert!(err.chain().any(|e| e.to_string() == "not found"));
        assert!(specs(&catalog(), "Bad Slug", false).is_err());
    }

    #[test]
    fn related_json_lists_same_category_products() {
        let out = related(&catalog(), "viper-v3-pro", RelatedConfig::default(), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let slugs: Vec<&str> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v["slug"].as_str().unwrap())
            .collect();
        assert_eq!(slugs, vec!["op1-8k"]);
    }

    #[test]
    fn listings_drop_insecure_links() {
        let catalog = catalog();
        let product = catalog.product_by_slug("viper-v3-pro").unwrap();
        assert_eq!(Listing::from(&product).link, None);
    }

    #[test]
    fn mousepad_filter_parses_options() {
        let filter = mousepad_filter(Some("control"), Some("xl"), (0.0, 10.0), (8.0, 10.0)).unwrap();
        assert_eq!(filter.surface_type, Some(SurfaceType::Control));
        assert_eq!(filter.size, Some(MousepadSize::Xl));
        assert!(mousepad_filter(Some("glass"), None, (0.0, 10.0), (0.0, 10.0)).is_err());
        assert!(mousepad_filter(None, Some("huge"), (0.0, 10.0), (0.0, 10.0)).is_err());
    }

    #[test]
    fn mousepads_applies_filter() {
        let catalog = catalog();
        let all = mousepads(&catalog, &MousepadFilter::default(), false).unwrap();
        assert!(all.contains("artisan-zero") && all.contains("qck-heavy"));

        let controlled = MousepadFilter::default().with_control(8.0, 10.0);
        let out = mousepads(&catalog, &controlled, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 1);
        assert_eq!(value[0]["slug"], "artisan-zero");
        assert_eq!(value[0]["specs"]["control_rating"], 9.0);
    }

    #[test]
    fn picks_lists_pick_products() {
        let out = picks(&catalog(), false).unwrap();
        assert!(out.contains("op1-8k"));
        assert!(!out.contains("viper-v3-pro"));
    }
}
