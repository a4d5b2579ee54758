use std::path::Path;

use super::emitter::render_forest;
use super::templates::write_output;
use crate::config::GeneratorConfig;
use crate::discover::discover_documents;
use crate::error::Result;
use crate::spec::load_document;
use crate::tree::{Forest, Merger};
use tracing::{info, warn};

/// What a run produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Documents merged.
    pub documents: usize,
    /// Nodes in the merged forest, emitted or not.
    pub nodes: usize,
    /// Bytes written to the output file.
    pub bytes: usize,
}

/// Discover, load and merge every document under `specs_root`.
///
/// Returns the forest together with the number of documents merged.
pub fn build_forest(specs_root: &Path, merger: &Merger) -> Result<(Forest, usize)> {
    let documents = discover_documents(specs_root)?;
    let mut forest = Forest::new();
    for path in &documents {
        info!(document = %path.display(), "processing document");
        let document = load_document(path)?;
        forest = merger.merge(forest, &document)?;
    }
    Ok((forest, documents.len()))
}

/// Run the full pipeline described by `config`.
///
/// The output file is only touched once the whole forest has been built and
/// rendered, so a failing run leaves any previous output in place.
///
/// # Errors
///
/// Any [`crate::BuildError`] raised along the way; the first one stops the
/// run.
pub fn generate(config: &GeneratorConfig) -> Result<GenerationSummary> {
    let merger = Merger::new(config.overrides()?);
    let (forest, documents) = build_forest(&config.specs_root, &merger)?;
    if forest.is_empty() {
        warn!(root = %config.specs_root.display(), "no resources found");
    }
    let (rendered, stats) = render_forest(&forest)?;
    write_output(&config.output_file, &rendered)?;

    let summary = GenerationSummary {
        documents,
        nodes: forest.node_count(),
        bytes: rendered.len(),
    };
    info!(
        documents = summary.documents,
        nodes = summary.nodes,
        emitted = stats.emitted,
        skipped = stats.skipped,
        "generation complete"
    );
    Ok(summary)
}
