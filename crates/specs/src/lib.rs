//! Spec normalization for the storefront.
//!
//! - [`resolve`]: category-gated, default-filled spec structures.
//! - [`filter`]: total predicates over resolved specs for listing filters.
//! - [`format`]: label/value rows for spec tables.
//!
//! All of it is pure and total: untrusted input degrades to defaults instead
//! of failing.

pub mod filter;
pub mod format;
pub mod resolve;

pub use filter::{
    KeyboardFilter, MousepadFilter, MousepadSize, RatingRange, SurfaceType, filter_keyboards,
    filter_mousepads, matches_exact, matches_mousepad_size, matches_rating_range,
    matches_surface_type,
};
pub use format::{
    SpecEntry, format_spec_label, format_spec_number, format_spec_value, format_specs, spec_entries,
};
pub use resolve::{
    ResolvedIemSpecs, ResolvedKeyboardSpecs, ResolvedMouseSpecs, ResolvedMousepadSpecs,
    ResolvedSpecs, clamp_rating, resolve_iem_specs, resolve_keyboard_specs, resolve_mouse_specs,
    resolve_mousepad_specs, resolve_specs,
};
