//! Filter predicates over resolved specs.
//!
//! Every matcher is total and the per-field checks compose with AND. Rating
//! `0` doubles as "no data": a positively-bounded range never matches it.

use serde::{Deserialize, Serialize};

use storefront_catalog::{Category, Product};

use crate::resolve::{
    RATING_MAX, ResolvedKeyboardSpecs, ResolvedMousepadSpecs, resolve_keyboard_specs,
    resolve_mousepad_specs,
};

/// Case-insensitive equality; an empty filter matches everything.
pub fn matches_exact(value: &str, filter: &str) -> bool {
    if filter.is_empty() {
        return true;
    }
    value.to_lowercase() == filter.to_lowercase()
}

/// Inclusive rating range check.
///
/// A range spanning the whole scale is no filter at all. An unset rating
/// (`0`) passes only when the lower bound is also `0` or below.
pub fn matches_rating_range(value: f64, min: f64, max: f64) -> bool {
    if min <= 0.0 && max >= RATING_MAX {
        return true;
    }
    if value == 0.0 {
        return min <= 0.0;
    }
    value >= min && value <= max
}

/// Surface type filter options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceType {
    Speed,
    Control,
    Hybrid,
}

impl SurfaceType {
    pub const ALL: [SurfaceType; 3] = [SurfaceType::Speed, SurfaceType::Control, SurfaceType::Hybrid];

    pub fn as_str(self) -> &'static str {
        match self {
            SurfaceType::Speed => "Speed",
            SurfaceType::Control => "Control",
            SurfaceType::Hybrid => "Hybrid",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL.into_iter().find(|s| s.as_str().eq_ignore_ascii_case(raw))
    }
}

/// Mousepad size filter options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MousepadSize {
    Small,
    Medium,
    Large,
    #[serde(rename = "XL")]
    Xl,
    #[serde(rename = "Desk Mat")]
    DeskMat,
}

impl MousepadSize {
    pub const ALL: [MousepadSize; 5] = [
        MousepadSize::Small,
        MousepadSize::Medium,
        MousepadSize::Large,
        MousepadSize::Xl,
        MousepadSize::DeskMat,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MousepadSize::Small => "Small",
            MousepadSize::Medium => "Medium",
            MousepadSize::Large => "Large",
            MousepadSize::Xl => "XL",
            MousepadSize::DeskMat => "Desk Mat",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL.into_iter().find(|s| s.as_str().eq_ignore_ascii_case(raw))
    }
}

pub fn matches_surface_type(resolved: &ResolvedMousepadSpecs, filter: Option<SurfaceType>) -> bool {
    matches_exact(&resolved.surface_type, filter.map_or("", SurfaceType::as_str))
}

pub fn matches_mousepad_size(resolved: &ResolvedMousepadSpecs, filter: Option<MousepadSize>) -> bool {
    matches_exact(&resolved.size, filter.map_or("", MousepadSize::as_str))
}

/// Inclusive rating bounds; the default spans the whole scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingRange {
    pub min: f64,
    pub max: f64,
}

impl Default for RatingRange {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: RATING_MAX,
        }
    }
}

impl RatingRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        matches_rating_range(value, self.min, self.max)
    }
}

/// Mousepad listing filter; the default matches every mousepad.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MousepadFilter {
    pub surface_type: Option<SurfaceType>,
    pub size: Option<MousepadSize>,
    pub speed: RatingRange,
    pub control: RatingRange,
}

impl MousepadFilter {
    pub fn with_surface_type(mut self, surface_type: SurfaceType) -> Self {
        self.surface_type = Some(surface_type);
        self
    }

    pub fn with_size(mut self, size: MousepadSize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_speed(mut self, min: f64, max: f64) -> Self {
        self.speed = RatingRange::new(min, max);
        self
    }

    pub fn with_control(mut self, min: f64, max: f64) -> Self {
        self.control = RatingRange::new(min, max);
        self
    }

    pub fn matches(&self, resolved: &ResolvedMousepadSpecs) -> bool {
        matches_surface_type(resolved, self.surface_type)
            && matches_mousepad_size(resolved, self.size)
            && self.speed.contains(resolved.speed_rating)
            && self.control.contains(resolved.control_rating)
    }
}

/// Keyboard listing filter. Empty strings and `None` mean "any".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardFilter {
    pub switch_type: String,
    pub layout: String,
    pub connectivity: String,
    pub rapid_trigger: Option<bool>,
    pub analog_input: Option<bool>,
}

impl KeyboardFilter {
    pub fn matches(&self, resolved: &ResolvedKeyboardSpecs) -> bool {
        matches_exact(&resolved.switch_type, &self.switch_type)
            && matches_exact(&resolved.layout, &self.layout)
            && matches_exact(&resolved.connectivity, &self.connectivity)
            && self.rapid_trigger.is_none_or(|want| resolved.rapid_trigger == want)
            && self.analog_input.is_none_or(|want| resolved.analog_input == want)
    }
}

/// Mousepads in `catalog` that pass `filter`, in catalog order.
pub fn filter_mousepads<'a>(catalog: &'a [Product], filter: &MousepadFilter) -> Vec<&'a Product> {
    catalog
        .iter()
        .filter(|p| p.category == Category::Mousepad)
        .filter(|p| filter.matches(&resolve_mousepad_specs(p)))
        .collect()
}

/// Keyboards in `catalog` that pass `filter`, in catalog order.
pub fn filter_keyboards<'a>(catalog: &'a [Product], filter: &KeyboardFilter) -> Vec<&'a Product> {
    catalog
        .iter()
        .filter(|p| p.category == Category::Keyboard)
        .filter(|p| filter.matches(&resolve_keyboard_specs(p)))
        .collect()
}
