//! Style-prop pipeline: property normalization, vendor prefixing, unit
//! inference, class-name hashing and the static theme data.

pub mod breakpoints;
pub mod compiler;
pub mod hash;
pub mod palette;
pub mod property;
pub mod units;
pub mod value;
pub mod vendor;

pub use breakpoints::Breakpoints;
pub use compiler::{compile_style, serialize_declarations, CompiledStyle, DEFAULT_CLASS_PREFIX};
pub use hash::hash;
pub use palette::{dark, light, Palette, SHADES};
pub use property::{
    camel_to_kebab_case, is_custom_property, kebab_to_camel_case, vendor_prefix_to_kebab_case,
};
pub use units::{format_value, needs_unit};
pub use value::{Declarations, StyleObject, StyleValue};
pub use vendor::{has_vendor_prefixes, vendor_prefixed_properties, vendor_table};
