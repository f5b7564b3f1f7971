//! Display formatting for raw spec bags.
//!
//! The formatter treats specs as opaque key/value pairs: it works for every
//! category, including keys no typed variant knows about.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use storefront_catalog::{Product, SpecBag};

/// A label/value pair ready for a spec table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecEntry {
    pub label: String,
    pub value: String,
}

/// Unit suffix appended to numeric values, by spec key.
fn unit_for(key: &str) -> &'static str {
    match key {
        "weight" => "g",
        "dpi" => " DPI",
        "polling_rate" => " Hz",
        "speed_rating" | "control_rating" => "/10",
        _ => "",
    }
}

/// Tokens with fixed casing, matched against the lowercased word.
fn brand_override(word: &str) -> Option<&'static str> {
    match word.to_lowercase().as_str() {
        "dpi" => Some("DPI"),
        "iem" => Some("IEM"),
        "usb" => Some("USB"),
        _ => None,
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Convert an `underscore_key` into a human-readable label.
pub fn format_spec_label(key: &str) -> String {
    key.split('_')
        .filter(|w| !w.is_empty())
        .map(|w| brand_override(w).map_or_else(|| capitalize(w), str::to_string))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Group digits in thousands with at most three fraction digits (en-US style).
pub fn format_grouped(value: f64) -> String {
    // Ties round away from zero.
    let rounded = (value * 1000.0).round() / 1000.0;
    let value = if rounded.is_finite() { rounded } else { value };
    // Normalizes -0.0 so it never renders with a sign.
    let value = if value == 0.0 { 0.0 } else { value };
    let fixed = format!("{value:.3}");
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}

/// Format a numeric spec. Non-finite and negative numbers are not renderable.
pub fn format_spec_number(value: f64, key: &str) -> Option<String> {
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    Some(format!("{}{}", format_grouped(value), unit_for(key)))
}

/// Format a spec value for display; `None` means "do not render".
pub fn format_spec_value(value: &Value, key: &str) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some((if *b { "Yes" } else { "No" }).to_string()),
        Value::Number(n) => n.as_f64().and_then(|v| format_spec_number(v, key)),
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Renderable entries of a spec bag, in the bag's insertion order.
pub fn format_specs(specs: Option<&SpecBag>) -> Vec<SpecEntry> {
    let Some(specs) = specs else {
        return Vec::new();
    };

    specs
        .iter()
        .filter(|(key, _)| !key.trim().is_empty())
        .filter_map(|(key, value)| {
            format_spec_value(value, key).map(|value| SpecEntry {
                label: format_spec_label(key),
                value,
            })
        })
        .collect()
}

/// Spec table rows for a product.
pub fn spec_entries(product: &Product) -> Vec<SpecEntry> {
    format_specs(product.specs.as_ref())
}
