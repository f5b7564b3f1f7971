//! Spec resolution: partial, untrusted specs to total, default-filled values.
//!
//! Every resolver is category-gated. A product whose category does not match
//! the resolver's target gets the all-defaults value, whatever its raw spec
//! bag contains. Nothing here fails.

use serde::Serialize;

use storefront_catalog::{
    Category, CategorySpecs, IemSpecs, KeyboardSpecs, MouseSpecs, MousepadSpecs, Product,
};

/// Upper bound of the rating scale.
pub const RATING_MAX: f64 = 10.0;

/// Clamp a rating into `[0, 10]`.
///
/// Missing and non-finite input resolves to `0`, the "no data" sentinel.
pub fn clamp_rating(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() => v.clamp(0.0, RATING_MAX),
        _ => 0.0,
    }
}

/// Non-negative measurement (grams, DPI, Hz). Missing, non-finite and negative
/// input resolves to `0`.
pub fn non_negative(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => 0.0,
    }
}

/// Trimmed text; absent and whitespace-only both resolve to `""`.
pub fn trimmed(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or_default().to_string()
}

/// Mousepad specs with guaranteed defaults for filtering and display.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResolvedMousepadSpecs {
    pub surface_type: String,
    pub speed_rating: f64,
    pub control_rating: f64,
    pub size: String,
    pub thickness: String,
    pub base_type: String,
    pub humidity_resistance: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResolvedMouseSpecs {
    pub weight: f64,
    pub sensor: String,
    pub dpi: f64,
    pub polling_rate: f64,
    pub battery_life: String,
    pub connectivity: String,
    pub shape: String,
    pub dimensions: String,
    pub switch_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolvedKeyboardSpecs {
    pub switch_type: String,
    pub layout: String,
    pub connectivity: String,
    pub actuation_point: String,
    pub rapid_trigger: bool,
    pub analog_input: bool,
    pub keycap_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolvedIemSpecs {
    pub driver_type: String,
    pub impedance: String,
    pub frequency_response: String,
    pub connectivity: String,
    pub microphone: bool,
}

impl From<&MousepadSpecs> for ResolvedMousepadSpecs {
    fn from(raw: &MousepadSpecs) -> Self {
        Self {
            surface_type: trimmed(raw.surface_type.as_deref()),
            speed_rating: clamp_rating(raw.speed_rating),
            control_rating: clamp_rating(raw.control_rating),
            size: trimmed(raw.size.as_deref()),
            thickness: trimmed(raw.thickness.as_deref()),
            base_type: trimmed(raw.base_type.as_deref()),
            humidity_resistance: trimmed(raw.humidity_resistance.as_deref()),
        }
    }
}

impl From<&MouseSpecs> for ResolvedMouseSpecs {
    fn from(raw: &MouseSpecs) -> Self {
        Self {
            weight: non_negative(raw.weight),
            sensor: trimmed(raw.sensor.as_deref()),
            dpi: non_negative(raw.dpi),
            polling_rate: non_negative(raw.polling_rate),
            battery_life: trimmed(raw.battery_life.as_deref()),
            connectivity: trimmed(raw.connectivity.as_deref()),
            shape: trimmed(raw.shape.as_deref()),
            dimensions: trimmed(raw.dimensions.as_deref()),
            switch_type: trimmed(raw.switch_type.as_deref()),
        }
    }
}

impl From<&KeyboardSpecs> for ResolvedKeyboardSpecs {
    fn from(raw: &KeyboardSpecs) -> Self {
        Self {
            switch_type: trimmed(raw.switch_type.as_deref()),
            layout: trimmed(raw.layout.as_deref()),
            connectivity: trimmed(raw.connectivity.as_deref()),
            actuation_point: trimmed(raw.actuation_point.as_deref()),
            rapid_trigger: raw.rapid_trigger.unwrap_or(false),
            analog_input: raw.analog_input.unwrap_or(false),
            keycap_type: trimmed(raw.keycap_type.as_deref()),
        }
    }
}

impl From<&IemSpecs> for ResolvedIemSpecs {
    fn from(raw: &IemSpecs) -> Self {
        Self {
            driver_type: trimmed(raw.driver_type.as_deref()),
            impedance: trimmed(raw.impedance.as_deref()),
            frequency_response: trimmed(raw.frequency_response.as_deref()),
            connectivity: trimmed(raw.connectivity.as_deref()),
            microphone: raw.microphone.unwrap_or(false),
        }
    }
}

/// Resolve mousepad specs. Non-mousepads get the all-defaults value.
pub fn resolve_mousepad_specs(product: &Product) -> ResolvedMousepadSpecs {
    match product.typed_specs() {
        CategorySpecs::Mousepad(raw) => ResolvedMousepadSpecs::from(&raw),
        _ => ResolvedMousepadSpecs::default(),
    }
}

/// Resolve mouse specs. Non-mice get the all-defaults value.
pub fn resolve_mouse_specs(product: &Product) -> ResolvedMouseSpecs {
    match product.typed_specs() {
        CategorySpecs::Mouse(raw) => ResolvedMouseSpecs::from(&raw),
        _ => ResolvedMouseSpecs::default(),
    }
}

/// Resolve keyboard specs. Non-keyboards get the all-defaults value.
pub fn resolve_keyboard_specs(product: &Product) -> ResolvedKeyboardSpecs {
    match product.typed_specs() {
        CategorySpecs::Keyboard(raw) => ResolvedKeyboardSpecs::from(&raw),
        _ => ResolvedKeyboardSpecs::default(),
    }
}

/// Resolve IEM specs. Non-IEMs get the all-defaults value.
pub fn resolve_iem_specs(product: &Product) -> ResolvedIemSpecs {
    match product.typed_specs() {
        CategorySpecs::Iem(raw) => ResolvedIemSpecs::from(&raw),
        _ => ResolvedIemSpecs::default(),
    }
}

/// Resolved specs for whichever category the product belongs to.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "category", rename_all = "lowercase")]
pub enum ResolvedSpecs {
    Mouse(ResolvedMouseSpecs),
    Keyboard(ResolvedKeyboardSpecs),
    Mousepad(ResolvedMousepadSpecs),
    Iem(ResolvedIemSpecs),
    Other,
}

impl ResolvedSpecs {
    pub fn category(&self) -> Category {
        match self {
            ResolvedSpecs::Mouse(_) => Category::Mouse,
            ResolvedSpecs::Keyboard(_) => Category::Keyboard,
            ResolvedSpecs::Mousepad(_) => Category::Mousepad,
            ResolvedSpecs::Iem(_) => Category::Iem,
            ResolvedSpecs::Other => Category::Other,
        }
    }
}

/// Resolve a product's specs using the resolver for its own category.
pub fn resolve_specs(product: &Product) -> ResolvedSpecs {
    match product.typed_specs() {
        CategorySpecs::Mouse(raw) => ResolvedSpecs::Mouse((&raw).into()),
        CategorySpecs::Keyboard(raw) => ResolvedSpecs::Keyboard((&raw).into()),
        CategorySpecs::Mousepad(raw) => ResolvedSpecs::Mousepad((&raw).into()),
        CategorySpecs::Iem(raw) => ResolvedSpecs::Iem((&raw).into()),
        CategorySpecs::Other => ResolvedSpecs::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use storefront_catalog::SpecBag;

    fn bag(value: Value) -> SpecBag {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected a JSON object"),
        }
    }

    fn mousepad(specs: Value) -> Product {
        Product::new(1, "pad", "Pad", Category::Mousepad).with_specs(bag(specs))
    }

    #[test]
    fn clamp_rating_handles_missing_and_non_finite() {
        assert_eq!(clamp_rating(None), 0.0);
        assert_eq!(clamp_rating(Some(f64::NAN)), 0.0);
        assert_eq!(clamp_rating(Some(f64::INFINITY)), 0.0);
        assert_eq!(clamp_rating(Some(f64::NEG_INFINITY)), 0.0);
        assert_eq!(clamp_rating(Some(-3.0)), 0.0);
        assert_eq!(clamp_rating(Some(12.5)), 10.0);
        assert_eq!(clamp_rating(Some(7.5)), 7.5);
    }

    #[test]
    fn resolves_and_trims_mousepad_specs() {
        let product = mousepad(json!({
            "surface_type": "  Speed ",
            "speed_rating": 9,
            "control_rating": 14,
            "size": "XL",
            "thickness": "   ",
            "base_type": "Poron",
        }));

        let resolved = resolve_mousepad_specs(&product);
        assert_eq!(
            resolved,
            ResolvedMousepadSpecs {
                surface_type: "Speed".to_string(),
                speed_rating: 9.0,
                control_rating: 10.0,
                size: "XL".to_string(),
                thickness: String::new(),
                base_type: "Poron".to_string(),
                humidity_resistance: String::new(),
            }
        );
    }

    #[test]
    fn mousepad_resolver_ignores_other_categories() {
        let product = Product::new(2, "kb", "Keyboard", Category::Keyboard).with_specs(bag(json!({
            "surface_type": "Control",
            "speed_rating": 5,
        })));
        assert_eq!(resolve_mousepad_specs(&product), ResolvedMousepadSpecs::default());
    }

    #[test]
    fn missing_specs_resolve_to_defaults() {
        let product = Product::new(3, "bare", "Bare", Category::Mousepad);
        assert_eq!(resolve_mousepad_specs(&product), ResolvedMousepadSpecs::default());
    }

    #[test]
    fn mouse_measurements_drop_negative_values() {
        let product = Product::new(4, "m", "Mouse", Category::Mouse).with_specs(bag(json!({
            "weight": -60,
            "dpi": 26000,
            "polling_rate": 8000,
            "sensor": " PAW3395 ",
        })));
        let resolved = resolve_mouse_specs(&product);
        assert_eq!(resolved.weight, 0.0);
        assert_eq!(resolved.dpi, 26000.0);
        assert_eq!(resolved.polling_rate, 8000.0);
        assert_eq!(resolved.sensor, "PAW3395");
    }

    #[test]
    fn keyboard_and_iem_flags_default_to_false() {
        let kb = Product::new(5, "kb", "KB", Category::Keyboard).with_specs(bag(json!({
            "switch_type": "Lekker",
            "rapid_trigger": true,
        })));
        let resolved = resolve_keyboard_specs(&kb);
        assert!(resolved.rapid_trigger);
        assert!(!resolved.analog_input);

        let iem = Product::new(6, "iem", "IEM", Category::Iem);
        assert!(!resolve_iem_specs(&iem).microphone);
        assert_eq!(resolve_keyboard_specs(&iem), ResolvedKeyboardSpecs::default());
    }

    #[test]
    fn resolve_specs_dispatches_on_category() {
        let product = mousepad(json!({ "speed_rating": 6 }));
        match resolve_specs(&product) {
            ResolvedSpecs::Mousepad(r) => assert_eq!(r.speed_rating, 6.0),
            other => panic!("expected mousepad specs, got {other:?}"),
        }

        let other = Product::new(7, "cable", "Cable", Category::Other)
            .with_specs(bag(json!({ "length": "2m" })));
        assert_eq!(resolve_specs(&other), ResolvedSpecs::Other);
        assert_eq!(resolve_specs(&other).category(), Category::Other);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn clamp_rating_is_total(v in proptest::num::f64::ANY) {
                let r = clamp_rating(Some(v));
                prop_assert!((0.0..=RATING_MAX).contains(&r));
            }

            #[test]
            fn clamp_rating_is_identity_inside_range(v in 0.0f64..=10.0) {
                prop_assert_eq!(clamp_rating(Some(v)), v);
            }

            #[test]
            fn non_mousepads_always_resolve_to_defaults(
                speed in proptest::num::f64::ANY,
                surface in ".*",
                category in prop_oneof![
                    Just(Category::Mouse),
                    Just(Category::Keyboard),
                    Just(Category::Iem),
                    Just(Category::Other),
                ],
            ) {
                let mut specs = SpecBag::new();
                if let Some(n) = serde_json::Number::from_f64(speed) {
                    specs.insert("speed_rating".into(), Value::Number(n));
                }
                specs.insert("surface_type".into(), Value::String(surface));
                let product = Product::new(1, "p", "P", category).with_specs(specs);
                prop_assert_eq!(resolve_mousepad_specs(&product), ResolvedMousepadSpecs::default());
            }
        }
    }
}
