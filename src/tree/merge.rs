//! Folding specification documents into the forest.

use super::forest::{Forest, Placement};
use super::node::ResourceNode;
use crate::endpoint::endpoint_info_from_template;
use crate::error::Result;
use crate::overrides::{OverrideTable, PathOverride};
use crate::spec::{PathVerbs, SpecDocument, Verb};
use tracing::debug;

/// Slots filled straight from the path item; GET is handled separately.
const PLAIN_VERBS: [Verb; 4] = [Verb::Delete, Verb::Patch, Verb::Post, Verb::Put];

/// Merges documents into a forest using an injected override table.
#[derive(Debug, Clone, Default)]
pub struct Merger {
    overrides: OverrideTable,
}

impl Merger {
    pub fn new(overrides: OverrideTable) -> Self {
        Merger { overrides }
    }

    /// Merge every path of `document` into `forest`.
    ///
    /// Templates are processed in lexical order so a parent is always in the
    /// forest before any of its descendants are placed.
    ///
    /// # Errors
    ///
    /// Fails on the first template that cannot be decomposed and on an
    /// override naming an unknown verb. The partially merged forest is
    /// dropped with the error.
    pub fn merge(&self, mut forest: Forest, document: &SpecDocument) -> Result<Forest> {
        for (template, verbs) in document.sorted_templates() {
            let (node, search_path) = self.build_node(template, verbs, &document.version)?;
            let placement = forest.insert(node, search_path);
            debug!(template, search_path, ?placement, "placed path");
            if placement == Placement::Merged && search_path != template {
                debug!(template, search_path, "folded overridden path into existing resource");
            }
        }
        Ok(forest)
    }

    /// Build the node for one raw template and return it with the path it
    /// is filed under.
    fn build_node<'a>(
        &'a self,
        template: &'a str,
        verbs: &PathVerbs,
        version: &str,
    ) -> Result<(ResourceNode, &'a str)> {
        let entry = self.overrides.get(template);
        let override_path = entry.and_then(PathOverride::path);
        let search_path = override_path.unwrap_or(template);
        let get_verb = match entry.and_then(PathOverride::get_verb) {
            Some(verb) => Verb::parse_for(verb, template)?,
            None => Verb::Get,
        };

        let mut node = ResourceNode::new(endpoint_info_from_template(search_path, version)?);

        if verbs.defines(get_verb) {
            let get = &mut node.operations.get;
            get.permitted = true;
            if get_verb != Verb::Get {
                get.verb_override = Some(get_verb);
            }
            if override_path.is_some() {
                get.endpoint_override = Some(endpoint_info_from_template(template, version)?);
            }
        }

        for verb in PLAIN_VERBS {
            if let Some(slot) = node.operations.slot_mut(verb) {
                slot.permitted = verbs.defines(verb) && verb != get_verb;
            }
        }

        Ok((node, search_path))
    }
}
