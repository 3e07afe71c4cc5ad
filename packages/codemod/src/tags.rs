//! Intrinsic tags -> library components

use crate::config::CodemodConfig;
use crate::props::PropValue;
use crate::transform::PassSummary;
use indexmap::IndexSet;
use propstyle_common::visitor::{walk_element_mut, VisitorMut};
use propstyle_parser::ast::{JsxElement, Module};
use tracing::{debug, instrument};

/// Renames lowercase JSX tags to their mapped component, or to the wrapper
/// with an `as` attribute naming the original tag.
pub struct TagRenamer<'a> {
    config: &'a CodemodConfig,
    renamed: usize,
    components: IndexSet<String>,
}

impl<'a> TagRenamer<'a> {
    pub fn new(config: &'a CodemodConfig) -> Self {
        Self {
            config,
            renamed: 0,
            components: IndexSet::new(),
        }
    }

    pub fn renamed(&self) -> usize {
        self.renamed
    }

    pub fn into_summary(self) -> PassSummary {
        PassSummary {
            changed: self.renamed,
            components: self.components,
        }
    }

    fn rename(&mut self, element: &mut JsxElement) {
        let tag = element.name.clone();

        match self.config.mapped_component(&tag) {
            Some(component) => element.rename(component),
            None => {
                element.rename(self.config.wrapper.as_str());
                element
                    .attributes
                    .insert(0, PropValue::Text(tag.clone()).to_attribute("as"));
            }
        }

        debug!(tag = %tag, component = %element.name, "Renamed intrinsic element");
        self.renamed += 1;
        self.components.insert(element.name.clone());
    }
}

impl VisitorMut for TagRenamer<'_> {
    fn visit_element_mut(&mut self, element: &mut JsxElement) {
        if element.is_intrinsic() {
            self.rename(element);
        }
        walk_element_mut(self, element);
    }
}

/// Rename every intrinsic element in the module
#[instrument(skip_all)]
pub fn rename_tags(module: &mut Module, config: &CodemodConfig) -> PassSummary {
    let mut renamer = TagRenamer::new(config);
    renamer.visit_module_mut(module);
    renamer.into_summary()
}
