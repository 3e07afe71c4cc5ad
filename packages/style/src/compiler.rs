//! Style object -> class name + CSS text

use crate::breakpoints::Breakpoints;
use crate::hash::hash;
use crate::property::camel_to_kebab_case;
use crate::units::format_value;
use crate::value::{Declarations, StyleObject};
use crate::vendor::vendor_prefixed_properties;
use tracing::{debug, instrument, warn};

/// Default class-name prefix
pub const DEFAULT_CLASS_PREFIX: &str = "ps";

/// Result of compiling a style object
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledStyle {
    pub class_name: String,
    pub css: String,
}

/// Serialize declarations into a rule body (`prop:value;` pairs).
///
/// Each property is normalized to kebab-case and expanded with its vendor
/// variants, canonical form first. Custom properties are emitted as-is.
pub fn serialize_declarations(declarations: &Declarations) -> String {
    let mut body = String::new();

    for (property, value) in declarations {
        for name in vendor_prefixed_properties(property) {
            body.push_str(&name);
            body.push(':');
            body.push_str(&format_value(&name, value));
            body.push(';');
        }
    }

    body
}

/// Compile a style object into a hashed class name and the CSS that backs it
#[instrument(skip_all, fields(declarations = style.declarations.len(), media = style.media.len(), states = style.on.len()))]
pub fn compile_style(style: &StyleObject, breakpoints: &Breakpoints, prefix: &str) -> CompiledStyle {
    let root = serialize_declarations(&style.declarations);

    let states: Vec<(String, String)> = style
        .on
        .iter()
        .map(|(state, declarations)| (camel_to_kebab_case(state), serialize_declarations(declarations)))
        .collect();

    for name in style.media.keys().filter(|name| breakpoints.min_width(name).is_none()) {
        warn!(breakpoint = %name, "Skipping styles for unknown breakpoint");
    }

    // Narrowest breakpoint first so wider ones win the cascade
    let media: Vec<(u32, String, String)> = breakpoints
        .ascending()
        .into_iter()
        .filter_map(|(name, width)| {
            let declarations = style.media.get(name)?;
            Some((width, breakpoints.media_query(name)?, serialize_declarations(declarations)))
        })
        .collect();

    // Hash over the class-independent rule text so equal objects share a class
    let mut fingerprint = root.clone();
    for (state, body) in &states {
        fingerprint.push_str(&format!("&:{}{{{}}}", state, body));
    }
    for (width, _, body) in &media {
        fingerprint.push_str(&format!("@{}{{{}}}", width, body));
    }

    let class_name = format!("{}-{}", prefix, hash(&fingerprint));
    let selector = format!(".{}", class_name);

    let mut css = String::new();
    if !root.is_empty() {
        css.push_str(&format!("{}{{{}}}", selector, root));
    }
    for (state, body) in &states {
        if !body.is_empty() {
            css.push_str(&format!("{}:{}{{{}}}", selector, state, body));
        }
    }
    for (_, query, body) in &media {
        if !body.is_empty() {
            css.push_str(&format!("@media {}{{{}{{{}}}}}", query, selector, body));
        }
    }

    debug!(class_name = %class_name, bytes = css.len(), "Compiled style object");

    CompiledStyle { class_name, css }
}
