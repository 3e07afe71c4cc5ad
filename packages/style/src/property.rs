//! Property name normalization between camelCase and kebab-case

/// Vendor segments recognized at the start of a camelCase property name
const VENDORS: [&str; 4] = ["webkit", "moz", "ms", "o"];

/// Returns true for CSS custom properties (`--brand-color`)
pub fn is_custom_property(name: &str) -> bool {
    name.starts_with("--")
}

/// Split a camelCase name into its vendor segment and the remainder.
///
/// Detection is case-insensitive on the vendor segment and requires the
/// remainder to start with an uppercase letter, so `webkitTransform`,
/// `WebkitTransform` and `OTransform` match while `order` and `opacity`
/// do not.
pub fn split_vendor_prefix(name: &str) -> Option<(&'static str, &str)> {
    for vendor in VENDORS {
        let Some(head) = name.get(..vendor.len()) else {
            continue;
        };
        let rest = &name[vendor.len()..];

        if head.eq_ignore_ascii_case(vendor) && rest.starts_with(|c: char| c.is_ascii_uppercase()) {
            return Some((vendor, rest));
        }
    }

    None
}

/// Generic camelCase to kebab-case conversion.
///
/// A dash is inserted before every uppercase letter unless the output is
/// empty or already ends with a dash, so no doubled dashes are introduced.
pub fn camel_to_kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);

    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            if !out.is_empty() && !out.ends_with('-') {
                out.push('-');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }

    out
}

/// Convert a style property name to its kebab-case CSS form
///
/// ```
/// use propstyle_style::vendor_prefix_to_kebab_case;
///
/// assert_eq!(vendor_prefix_to_kebab_case("webkitTransform"), "-webkit-transform");
/// assert_eq!(vendor_prefix_to_kebab_case("backgroundColor"), "background-color");
/// assert_eq!(vendor_prefix_to_kebab_case("--brand"), "--brand");
/// ```
pub fn vendor_prefix_to_kebab_case(name: &str) -> String {
    if is_custom_property(name) || !name.bytes().any(|b| b.is_ascii_uppercase()) {
        return name.to_string();
    }

    match split_vendor_prefix(name) {
        Some((vendor, rest)) => format!("-{}-{}", vendor, camel_to_kebab_case(rest)),
        None => camel_to_kebab_case(name),
    }
}

/// Convert a kebab-case CSS property to the camelCase key used for style props.
///
/// Vendor-prefixed names follow the React convention: `-webkit-transform`
/// becomes `WebkitTransform`, while `-ms-` stays lowercase (`msFlex`).
pub fn kebab_to_camel_case(name: &str) -> String {
    if is_custom_property(name) || !name.contains('-') {
        return name.to_string();
    }

    let mut segments = name.split('-').filter(|segment| !segment.is_empty());
    let mut out = String::with_capacity(name.len());

    if let Some(first) = segments.next() {
        if name.starts_with('-') && first != "ms" {
            out.push_str(&capitalize(first));
        } else {
            out.push_str(first);
        }
    }

    for segment in segments {
        out.push_str(&capitalize(segment));
    }

    out
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
