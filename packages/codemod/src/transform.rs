use crate::config::CodemodConfig;
use crate::imports::{add_library_import, remove_styled_import};
use crate::inline_style::flatten_inline_styles;
use crate::styled::rewrite_styled;
use crate::tags::rename_tags;
use indexmap::IndexSet;
use propstyle_common::CommonResult;
use propstyle_parser::{parse_with_options, serialize, ParseOptions};
use std::collections::BTreeSet;
use tracing::{debug, instrument};

/// What one rewrite pass changed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassSummary {
    /// Elements or templates rewritten
    pub changed: usize,
    /// Library components the pass introduced, in first-use order
    pub components: IndexSet<String>,
}

/// Counts of what a transform changed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformReport {
    pub renamed_tags: usize,
    pub styled_templates: usize,
    pub inline_styles: usize,
    pub removed_styled_import: bool,
    pub added_import: bool,
}

impl TransformReport {
    pub fn is_unchanged(&self) -> bool {
        *self == Self::default()
    }
}

/// Rewrite one source file; see [`transform_with_report`]
pub fn transform(source: &str, config: &CodemodConfig) -> CommonResult<String> {
    transform_with_report(source, config).map(|(output, _)| output)
}

/// Rewrite one source file and report what changed.
///
/// Runs the tag pass, the styled pass and the inline-style pass in that
/// order, then fixes up imports. Unchanged sources are returned verbatim.
#[instrument(skip_all, fields(bytes = source.len()))]
pub fn transform_with_report(
    source: &str,
    config: &CodemodConfig,
) -> CommonResult<(String, TransformReport)> {
    let options = ParseOptions {
        styled_factory: config.styled_factory.clone(),
    };
    let mut module = parse_with_options(source, options)?;
    let tags = rename_tags(&mut module, config);
    let styled = rewrite_styled(&mut module, config);
    let mut report = TransformReport {
        renamed_tags: tags.changed,
        styled_templates: styled.changed,
        ..Default::default()
    };
    report.inline_styles = flatten_inline_styles(&mut module, config);

    if report.styled_templates > 0 && config.remove_styled_import {
        report.removed_styled_import = remove_styled_import(&mut module, &config.styled_factory);
    }

    if let Some(import_source) = &config.import_source {
        let components: BTreeSet<String> = tags.components.into_iter().chain(styled.components).collect();
        report.added_import = add_library_import(&mut module, import_source, &components);
    }

    debug!(?report, "Transform finished");
    Ok((serialize(&module), report))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_counts() {
        let source = r#"import styled from "styled-components";
const Title = styled.h2`color: red;`;
export const Page = () => <main style={{ padding: 4 }}><Title /></main>;
"#;
        let (output, report) = transform_with_report(source, &CodemodConfig::default()).unwrap();

        assert_eq!(
            report,
            TransformReport {
                renamed_tags: 1,
                styled_templates: 1,
                inline_styles: 1,
                removed_styled_import: true,
                added_import: false,
            }
        );
        assert_eq!(
            output,
            r#"const Title = (props) => <Box as="h2" color="red" {...props} />;
export const Page = () => <Box as="main" padding={4}><Title /></Box>;
"#
        );
    }

    #[test]
    fn test_untouched_source_is_verbatim() {
        let source = "const x = a < b ? `t ${c}` : /re/g; // <div>\n";
        let (output, report) = transform_with_report(source, &CodemodConfig::default()).unwrap();
        assert_eq!(output, source);
        assert!(report.is_unchanged());
    }

    #[test]
    fn test_parse_errors_surface() {
        assert!(transform("const a = <div>", &CodemodConfig::default()).is_err());
    }
}
