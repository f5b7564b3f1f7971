//! Raw and typed product specs.
//!
//! Upstream sends `specs` as an untyped JSON object whose shape depends on the
//! product's category. [`SpecBag`] keeps it verbatim (insertion order intact)
//! for display; [`CategorySpecs`] is the closed, typed view used by filtering.

use serde_json::{Map, Value};

use crate::category::Category;

/// Untyped spec object exactly as received, in insertion order.
pub type SpecBag = Map<String, Value>;

/// Mouse-specific specs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MouseSpecs {
    pub weight: Option<f64>,
    pub sensor: Option<String>,
    pub dpi: Option<f64>,
    pub polling_rate: Option<f64>,
    pub battery_life: Option<String>,
    pub connectivity: Option<String>,
    pub shape: Option<String>,
    pub dimensions: Option<String>,
    pub switch_type: Option<String>,
}

/// Keyboard-specific specs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyboardSpecs {
    pub switch_type: Option<String>,
    pub layout: Option<String>,
    pub connectivity: Option<String>,
    pub actuation_point: Option<String>,
    pub rapid_trigger: Option<bool>,
    pub analog_input: Option<bool>,
    pub keycap_type: Option<String>,
}

/// Mousepad-specific specs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MousepadSpecs {
    pub surface_type: Option<String>,
    pub speed_rating: Option<f64>,
    pub control_rating: Option<f64>,
    pub size: Option<String>,
    pub thickness: Option<String>,
    pub base_type: Option<String>,
    pub humidity_resistance: Option<String>,
}

/// IEM-specific specs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IemSpecs {
    pub driver_type: Option<String>,
    pub impedance: Option<String>,
    pub frequency_response: Option<String>,
    pub connectivity: Option<String>,
    pub microphone: Option<bool>,
}

// Field extraction treats a value of the wrong JSON type as absent.

fn text(bag: &SpecBag, key: &str) -> Option<String> {
    bag.get(key).and_then(Value::as_str).map(str::to_string)
}

fn number(bag: &SpecBag, key: &str) -> Option<f64> {
    bag.get(key).and_then(Value::as_f64)
}

fn flag(bag: &SpecBag, key: &str) -> Option<bool> {
    bag.get(key).and_then(Value::as_bool)
}

impl MouseSpecs {
    pub fn from_bag(bag: &SpecBag) -> Self {
        Self {
            weight: number(bag, "weight"),
            sensor: text(bag, "sensor"),
            dpi: number(bag, "dpi"),
            polling_rate: number(bag, "polling_rate"),
            battery_life: text(bag, "battery_life"),
            connectivity: text(bag, "connectivity"),
            shape: text(bag, "shape"),
            dimensions: text(bag, "dimensions"),
            switch_type: text(bag, "switch_type"),
        }
    }
}

impl KeyboardSpecs {
    pub fn from_bag(bag: &SpecBag) -> Self {
        Self {
            switch_type: text(bag, "switch_type"),
            layout: text(bag, "layout"),
            connectivity: text(bag, "connectivity"),
            actuation_point: text(bag, "actuation_point"),
            rapid_trigger: flag(bag, "rapid_trigger"),
            analog_input: flag(bag, "analog_input"),
            keycap_type: text(bag, "keycap_type"),
        }
    }
}

impl MousepadSpecs {
    pub fn from_bag(bag: &SpecBag) -> Self {
        Self {
            surface_type: text(bag, "surface_type"),
            speed_rating: number(bag, "speed_rating"),
            control_rating: number(bag, "control_rating"),
            size: text(bag, "size"),
            thickness: text(bag, "thickness"),
            base_type: text(bag, "base_type"),
            humidity_resistance: text(bag, "humidity_resistance"),
        }
    }
}

impl IemSpecs {
    pub fn from_bag(bag: &SpecBag) -> Self {
        Self {
            driver_type: text(bag, "driver_type"),
            impedance: text(bag, "impedance"),
            frequency_response: text(bag, "frequency_response"),
            connectivity: text(bag, "connectivity"),
            microphone: flag(bag, "microphone"),
        }
    }
}

/// Typed specs, one variant per category.
#[derive(Debug, Clone, PartialEq)]
pub enum CategorySpecs {
    Mouse(MouseSpecs),
    Keyboard(KeyboardSpecs),
    Mousepad(MousepadSpecs),
    Iem(IemSpecs),
    Other,
}

impl CategorySpecs {
    /// Interpret a raw bag according to `category`.
    ///
    /// A missing bag yields the category's variant with every field unset.
    pub fn from_bag(category: Category, bag: Option<&SpecBag>) -> Self {
        let empty = SpecBag::new();
        let bag = bag.unwrap_or(&empty);
        match category {
            Category::Mouse => CategorySpecs::Mouse(MouseSpecs::from_bag(bag)),
            Category::Keyboard => CategorySpecs::Keyboard(KeyboardSpecs::from_bag(bag)),
            Category::Mousepad => CategorySpecs::Mousepad(MousepadSpecs::from_bag(bag)),
            Category::Iem => CategorySpecs::Iem(IemSpecs::from_bag(bag)),
            Category::Other => CategorySpecs::Other,
        }
    }

    pub fn category(&self) -> Category {
        match self {
            CategorySpecs::Mouse(_) => Category::Mouse,
            CategorySpecs::Keyboard(_) => Category::Keyboard,
            CategorySpecs::Mousepad(_) => Category::Mousepad,
            CategorySpecs::Iem(_) => Category::Iem,
            CategorySpecs::Other => Category::Other,
        }
    }
}
