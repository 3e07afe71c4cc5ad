//! Vendor prefix expansion

use crate::property::vendor_prefix_to_kebab_case;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Canonical kebab-case property -> vendor-prefixed equivalents, in emit order
static VENDOR_PREFIX_TABLE: &[(&str, &[&str])] = &[
    ("align-content", &["-webkit-align-content"]),
    ("align-items", &["-webkit-align-items"]),
    ("align-self", &["-webkit-align-self"]),
    ("animation", &["-webkit-animation", "-moz-animation", "-o-animation"]),
    ("animation-delay", &["-webkit-animation-delay", "-moz-animation-delay", "-o-animation-delay"]),
    ("animation-direction", &["-webkit-animation-direction", "-moz-animation-direction", "-o-animation-direction"]),
    ("animation-duration", &["-webkit-animation-duration", "-moz-animation-duration", "-o-animation-duration"]),
    ("animation-fill-mode", &["-webkit-animation-fill-mode", "-moz-animation-fill-mode", "-o-animation-fill-mode"]),
    ("animation-iteration-count", &["-webkit-animation-iteration-count", "-moz-animation-iteration-count", "-o-animation-iteration-count"]),
    ("animation-name", &["-webkit-animation-name", "-moz-animation-name", "-o-animation-name"]),
    ("animation-play-state", &["-webkit-animation-play-state", "-moz-animation-play-state", "-o-animation-play-state"]),
    ("animation-timing-function", &["-webkit-animation-timing-function", "-moz-animation-timing-function", "-o-animation-timing-function"]),
    ("appearance", &["-webkit-appearance", "-moz-appearance"]),
    ("backdrop-filter", &["-webkit-backdrop-filter"]),
    ("backface-visibility", &["-webkit-backface-visibility", "-moz-backface-visibility"]),
    ("background-clip", &["-webkit-background-clip"]),
    ("box-shadow", &["-webkit-box-shadow", "-moz-box-shadow"]),
    ("box-sizing", &["-webkit-box-sizing", "-moz-box-sizing"]),
    ("column-count", &["-webkit-column-count", "-moz-column-count"]),
    ("column-gap", &["-webkit-column-gap", "-moz-column-gap"]),
    ("column-rule", &["-webkit-column-rule", "-moz-column-rule"]),
    ("column-width", &["-webkit-column-width", "-moz-column-width"]),
    ("columns", &["-webkit-columns", "-moz-columns"]),
    ("filter", &["-webkit-filter"]),
    ("flex", &["-webkit-flex", "-ms-flex"]),
    ("flex-basis", &["-webkit-flex-basis", "-ms-flex-preferred-size"]),
    ("flex-direction", &["-webkit-flex-direction", "-ms-flex-direction"]),
    ("flex-flow", &["-webkit-flex-flow", "-ms-flex-flow"]),
    ("flex-grow", &["-webkit-flex-grow", "-ms-flex-positive"]),
    ("flex-shrink", &["-webkit-flex-shrink", "-ms-flex-negative"]),
    ("flex-wrap", &["-webkit-flex-wrap", "-ms-flex-wrap"]),
    ("hyphens", &["-webkit-hyphens", "-moz-hyphens", "-ms-hyphens"]),
    ("justify-content", &["-webkit-justify-content"]),
    ("mask", &["-webkit-mask"]),
    ("mask-image", &["-webkit-mask-image"]),
    ("order", &["-webkit-order", "-ms-flex-order"]),
    ("perspective", &["-webkit-perspective", "-moz-perspective"]),
    ("perspective-origin", &["-webkit-perspective-origin", "-moz-perspective-origin"]),
    ("text-size-adjust", &["-webkit-text-size-adjust", "-moz-text-size-adjust", "-ms-text-size-adjust"]),
    ("transform", &["-webkit-transform", "-moz-transform", "-ms-transform", "-o-transform"]),
    ("transform-origin", &["-webkit-transform-origin", "-moz-transform-origin", "-ms-transform-origin", "-o-transform-origin"]),
    ("transform-style", &["-webkit-transform-style", "-moz-transform-style"]),
    ("transition", &["-webkit-transition", "-moz-transition", "-o-transition"]),
    ("transition-delay", &["-webkit-transition-delay", "-moz-transition-delay", "-o-transition-delay"]),
    ("transition-duration", &["-webkit-transition-duration", "-moz-transition-duration", "-o-transition-duration"]),
    ("transition-property", &["-webkit-transition-property", "-moz-transition-property", "-o-transition-property"]),
    ("transition-timing-function", &["-webkit-transition-timing-function", "-moz-transition-timing-function", "-o-transition-timing-function"]),
    ("user-select", &["-webkit-user-select", "-moz-user-select", "-ms-user-select"]),
];

static VENDOR_PREFIXES: Lazy<HashMap<&'static str, &'static [&'static str]>> =
    Lazy::new(|| VENDOR_PREFIX_TABLE.iter().copied().collect());

/// Iterate every registered canonical property and its variants
pub fn vendor_table() -> impl Iterator<Item = (&'static str, &'static [&'static str])> {
    VENDOR_PREFIX_TABLE.iter().copied()
}

/// Whether a property (camelCase or kebab-case) has registered vendor variants
pub fn has_vendor_prefixes(name: &str) -> bool {
    VENDOR_PREFIXES.contains_key(vendor_prefix_to_kebab_case(name).as_str())
}

/// Expand a property into its kebab-case form followed by every registered
/// vendor-prefixed equivalent.
pub fn vendor_prefixed_properties(name: &str) -> Vec<String> {
    let kebab = vendor_prefix_to_kebab_case(name);
    let variants = VENDOR_PREFIXES.get(kebab.as_str()).copied().unwrap_or_default();

    let mut properties = Vec::with_capacity(variants.len() + 1);
    properties.push(kebab);
    properties.extend(variants.iter().map(|variant| variant.to_string()));
    properties
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_expansion() {
        assert_eq!(
            vendor_prefixed_properties("transform"),
            vec![
                "transform",
                "-webkit-transform",
                "-moz-transform",
                "-ms-transform",
                "-o-transform"
            ]
        );
    }

    #[test]
    fn test_camel_case_input() {
        let props = vendor_prefixed_properties("flexDirection");
        assert_eq!(props[0], "flex-direction");
        assert!(props.contains(&"-ms-flex-direction".to_string()));
        assert!(has_vendor_prefixes("userSelect"));
    }

    #[test]
    fn test_unregistered_property() {
        assert_eq!(vendor_prefixed_properties("color"), vec!["color"]);
        assert_eq!(vendor_prefixed_properties("backgroundColor"), vec!["background-color"]);
        assert!(!has_vendor_prefixes("color"));
    }

    #[test]
    fn test_every_table_entry_expands_cleanly() {
        for (property, variants) in vendor_table() {
            let expanded = vendor_prefixed_properties(property);
            assert_eq!(expanded[0], property);
            assert_eq!(&expanded[1..], variants);

            for name in &expanded {
                assert!(!name.starts_with("--"), "{} has a doubled leading dash", name);
            }
        }
    }

    #[test]
    fn test_table_has_no_duplicate_keys() {
        assert_eq!(VENDOR_PREFIXES.len(), VENDOR_PREFIX_TABLE.len());
    }
}
