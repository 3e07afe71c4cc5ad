//! Rewrites styled-components usage and raw JSX tags into the prop-based
//! component model.

pub mod config;
pub mod css;
pub mod imports;
pub mod inline_style;
pub mod props;
pub mod styled;
pub mod tags;
pub mod transform;

#[cfg(test)]
mod tests;

pub use config::{CodemodConfig, DEFAULT_CONFIG_NAME};
pub use imports::{add_library_import, remove_styled_import};
pub use inline_style::{flatten_inline_styles, style_object_to_props, style_string_to_props, InlineStyleFlattener};
pub use props::{css_value_to_prop, PropValue};
pub use styled::{rewrite_styled, StyledRewriter, TemplateProps};
pub use tags::{rename_tags, TagRenamer};
pub use transform::{transform, transform_with_report, PassSummary, TransformReport};
