//! Numeric unit resolution

use crate::value::StyleValue;
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Kebab-case properties whose bare numeric values are serialized in pixels
static NUMERIC_PROPERTIES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // Dimensions
        "width",
        "height",
        "min-width",
        "max-width",
        "min-height",
        "max-height",
        "block-size",
        "inline-size",
        "flex-basis",
        "-webkit-flex-basis",
        // Margin
        "margin",
        "margin-top",
        "margin-right",
        "margin-bottom",
        "margin-left",
        "margin-block",
        "margin-block-start",
        "margin-block-end",
        "margin-inline",
        "margin-inline-start",
        "margin-inline-end",
        // Padding
        "padding",
        "padding-top",
        "padding-right",
        "padding-bottom",
        "padding-left",
        "padding-block",
        "padding-block-start",
        "padding-block-end",
        "padding-inline",
        "padding-inline-start",
        "padding-inline-end",
        // Border
        "border-width",
        "border-top-width",
        "border-right-width",
        "border-bottom-width",
        "border-left-width",
        "border-radius",
        "border-top-left-radius",
        "border-top-right-radius",
        "border-bottom-left-radius",
        "border-bottom-right-radius",
        "border-spacing",
        "-webkit-border-radius",
        "-moz-border-radius",
        "outline-width",
        "outline-offset",
        // Position
        "top",
        "right",
        "bottom",
        "left",
        "inset",
        // Typography
        "font-size",
        "letter-spacing",
        "word-spacing",
        "text-indent",
        // Gap
        "gap",
        "row-gap",
        "column-gap",
        "grid-gap",
        "grid-row-gap",
        "grid-column-gap",
        "-webkit-column-gap",
        "-moz-column-gap",
        // Columns and 3D
        "column-width",
        "column-rule-width",
        "-webkit-column-width",
        "-moz-column-width",
        "perspective",
        "-webkit-perspective",
        "-moz-perspective",
    ]
    .into_iter()
    .collect()
});

/// Whether a bare number for this kebab-case property needs a `px` suffix
pub fn needs_unit(property: &str) -> bool {
    NUMERIC_PROPERTIES.contains(property)
}

/// Serialize a style value for a kebab-case property
pub fn format_value(property: &str, value: &StyleValue) -> String {
    match value {
        StyleValue::Number(number) if needs_unit(property) && *number != 0.0 => {
            format!("{}px", number)
        }
        StyleValue::Number(number) => number.to_string(),
        StyleValue::Text(text) => text.clone(),
    }
}
