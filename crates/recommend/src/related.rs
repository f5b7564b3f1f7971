use std::collections::HashSet;

use tracing::debug;

use storefront_catalog::Product;
use storefront_core::ProductId;

use crate::config::RelatedConfig;

/// Related-product lookup over a catalog snapshot.
///
/// Model:
/// - Candidates share the current product's effective category slug.
/// - With a usable reference price, candidates inside the price band lead.
/// - Too few in-band candidates are topped up with the rest of the category.
///
/// Order is always catalog order; nothing is re-sorted.
#[derive(Debug, Clone, Default)]
pub struct RelatedProducts {
    config: RelatedConfig,
}

impl RelatedProducts {
    pub fn new(config: RelatedConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RelatedConfig {
        &self.config
    }

    /// Products related to `current`, at most `config.limit` of them.
    pub fn find<'a>(&self, current: &Product, catalog: &'a [Product]) -> Vec<&'a Product> {
        let limit = self.config.limit;
        let slug = current.effective_category_slug();

        // First occurrence wins if the catalog repeats an id.
        let mut seen: HashSet<ProductId> = HashSet::new();
        let same_category: Vec<&Product> = catalog
            .iter()
            .filter(|p| p.effective_category_slug() == slug && p.id != current.id)
            .filter(|p| seen.insert(p.id))
            .collect();

        if same_category.is_empty() {
            debug!(product_id = %current.id, category = slug, "no same-category products");
            return Vec::new();
        }

        let Some(reference) = current.display_price() else {
            debug!(
                product_id = %current.id,
                candidates = same_category.len(),
                "no reference price; using catalog order"
            );
            return same_category.into_iter().take(limit).collect();
        };

        let (min_price, max_price) = self.config.band(reference);
        let in_band: Vec<&Product> = same_category
            .iter()
            .copied()
            .filter(|p| {
                p.display_price()
                    .is_some_and(|price| price >= min_price && price <= max_price)
            })
            .collect();

        if in_band.len() >= self.config.min_price_matches {
            debug!(
                product_id = %current.id,
                in_band = in_band.len(),
                "enough in-band matches"
            );
            return in_band.into_iter().take(limit).collect();
        }

        debug!(
            product_id = %current.id,
            in_band = in_band.len(),
            candidates = same_category.len(),
            "backfilling with out-of-band products"
        );
        let in_band_ids: HashSet<ProductId> = in_band.iter().map(|p| p.id).collect();
        let backfill = same_category
            .iter()
            .copied()
            .filter(|p| !in_band_ids.contains(&p.id));

        in_band.iter().copied().chain(backfill).take(limit).collect()
    }
}

/// Up to `limit` products related to `current`, using the default price band.
pub fn related_products<'a>(
    current: &Product,
    catalog: &'a [Product],
    limit: usize,
) -> Vec<&'a Product> {
    RelatedProducts::new(RelatedConfig::default().with_limit(limit)).find(current, catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_catalog::{Category, CategorySlug};

    fn mouse(id: i64, price: Option<f64>) -> Product {
        let p = Product::new(id, format!("mouse-{id}"), format!("Mouse {id}"), Category::Mouse);
        match price {
            Some(price) => p.with_price(price),
            None => p,
        }
    }

    fn ids(products: &[&Product]) -> Vec<i64> {
        products.iter().map(|p| p.id.get()).collect()
    }

    #[test]
    fn three_in_band_matches_exclude_out_of_band() {
        let current = mouse(1, Some(100.0));
        let catalog = vec![
            current.clone(),
            mouse(2, Some(400.0)),
            mouse(3, Some(95.0)),
            mouse(4, Some(70.0)),
            mouse(5, Some(130.0)),
        ];
        assert_eq!(ids(&related_products(&current, &catalog, 4)), vec![3, 4, 5]);
    }

    #[test]
    fn band_edges_are_inclusive() {
        let current = mouse(1, Some(100.0));
        let catalog = vec![mouse(2, Some(70.0)), mouse(3, Some(130.0)), mouse(4, Some(69.99))];
        let related = related_products(&current, &catalog, 4);
        assert_eq!(ids(&related), vec![2, 3, 4]);
    }

    #[test]
    fn unpriced_candidates_only_appear_as_backfill() {
        let current = mouse(1, Some(100.0));
        let catalog = vec![mouse(2, None), mouse(3, Some(0.0)), mouse(4, Some(100.0))];
        assert_eq!(ids(&related_products(&current, &catalog, 4)), vec![4, 2, 3]);
    }

    #[test]
    fn zero_priced_current_uses_catalog_order() {
        let current = mouse(1, Some(0.0));
        let catalog = vec![mouse(2, Some(500.0)), mouse(3, Some(1.0)), mouse(4, None)];
        assert_eq!(ids(&related_products(&current, &catalog, 2)), vec![2, 3]);
    }

    #[test]
    fn other_category_groups_products_without_slug() {
        let current = Product::new(1, "cable", "Cable", Category::Other);
        let catalog = vec![
            Product::new(2, "stand", "Stand", Category::Other),
            mouse(3, None).with_category_slug(None),
            mouse(4, None),
        ];
        assert_eq!(ids(&related_products(&current, &catalog, 4)), vec![2, 3]);
    }

    #[test]
    fn grouping_follows_category_slug_not_category() {
        let current = mouse(1, None);
        let relabelled = Product::new(2, "odd", "Odd", Category::Keyboard)
            .with_category_slug(Some(CategorySlug::Mice));
        let catalog = vec![relabelled];
        assert_eq!(ids(&related_products(&current, &catalog, 4)), vec![2]);
    }

    #[test]
    fn repeated_ids_appear_once() {
        let current = mouse(1, None);
        let catalog = vec![mouse(2, None), mouse(2, None), mouse(3, None)];
        assert_eq!(ids(&related_products(&current, &catalog, 4)), vec![2, 3]);
    }

    #[test]
    fn zero_limit_returns_nothing() {
        let current = mouse(1, Some(100.0));
        let catalog = vec![mouse(2, Some(100.0))];
        assert!(related_products(&current, &catalog, 0).is_empty());
    }

    #[test]
    fn custom_min_matches_changes_backfill_threshold() {
        let current = mouse(1, Some(100.0));
        let catalog = vec![mouse(2, Some(300.0)), mouse(3, Some(100.0))];
        let engine = RelatedProducts::new(RelatedConfig::default().with_min_price_matches(1));
        assert_eq!(ids(&engine.find(&current, &catalog)), vec![3]);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_product() -> impl Strategy<Value = Product> {
            (
                0i64..20,
                prop_oneof![
                    Just(Category::Mouse),
                    Just(Category::Keyboard),
                    Just(Category::Mousepad),
                    Just(Category::Other),
                ],
                proptest::option::of(-50.0f64..500.0),
            )
                .prop_map(|(id, category, price)| {
                    let p = Product::new(id, format!("p-{id}"), format!("P {id}"), category);
                    match price {
                        Some(price) => p.with_price(price),
                        None => p,
                    }
                })
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                .. ProptestConfig::default()
            })]

            #[test]
            fn result_is_bounded_unique_and_excludes_current(
                current in arb_product(),
                catalog in proptest::collection::vec(arb_product(), 0..40),
                limit in 0usize..8,
            ) {
                let related = related_products(&current, &catalog, limit);
                prop_assert!(related.len() <= limit);
                prop_assert!(related.iter().all(|p| p.id != current.id));
                prop_assert!(related.iter().all(|p| p.effective_category_slug() == current.effective_category_slug()));
                let unique: HashSet<ProductId> = related.iter().map(|p| p.id).collect();
                prop_assert_eq!(unique.len(), related.len());
            }

            #[test]
            fn backfill_never_shrinks_below_pool(
                current in arb_product(),
                catalog in proptest::collection::vec(arb_product(), 0..40),
                limit in 0usize..8,
            ) {
                let pool: HashSet<ProductId> = catalog
                    .iter()
                    .filter(|p| p.effective_category_slug() == current.effective_category_slug() && p.id != current.id)
                    .map(|p| p.id)
                    .collect();
                let related = related_products(&current, &catalog, limit);
                let in_band_floor = limit.min(3).min(pool.len());
                prop_assert!(related.len() >= in_band_floor);
            }
        }
    }
}
