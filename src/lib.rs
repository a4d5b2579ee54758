//! # navtree
//!
//! Builds a resource navigation tree from a directory of Swagger 2.0 /
//! OpenAPI documents and emits it as Go source for a resource expander.
//!
//! ## Overview
//!
//! Cloud management APIs describe resources as flat lists of path
//! templates. A browser needs the hierarchy instead: which resources live
//! under which, which verbs each one supports, and which endpoint to call for
//! each verb. This crate recovers that hierarchy from the path templates
//! alone.
//!
//! ## Architecture
//!
//! - **[`endpoint`]** - Path template decomposition into literal and parameter segments
//! - **[`spec`]** - Document loading, `$ref` resolution and verb extraction
//! - **[`overrides`]** - Remapping of raw templates onto logical paths and GET verbs
//! - **[`tree`]** - The resource forest, deepest-match placement and merging
//! - **[`generator`]** - Go source rendering and the end-to-end pipeline
//! - **[`discover`]** - Walk of the `<service>/<resource-type>/...` input tree
//! - **[`config`]** - Settings for a run
//! - **[`logging`]** - `tracing` subscriber setup
//! - **[`cli`]** - The `navtree-gen` command line
//!
//! ### Generation Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant CLI as CLI<br/>(navtree-gen)
//!     participant Discover as discover
//!     participant Spec as spec::load_document
//!     participant Merger as tree::Merger
//!     participant Emit as generator::render_forest
//!     participant FS as File System
//!
//!     CLI->>Discover: discover_documents(specs_root)
//!     Discover-->>CLI: Vec<PathBuf>
//!     loop every document, in order
//!         CLI->>Spec: load_document(path)
//!         Spec-->>CLI: SpecDocument
//!         CLI->>Merger: merge(forest, &document)
//!         Merger-->>CLI: Forest
//!     end
//!     CLI->>Emit: render_forest(&forest)
//!     Emit-->>CLI: Go source
//!     CLI->>FS: write output file
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use navtree::{generate, GeneratorConfig};
//!
//! let config = GeneratorConfig::new("resource_types.go").with_specs_root("swagger-specs/top-level");
//! let summary = generate(&config)?;
//! println!("{} documents, {} resources", summary.documents, summary.nodes);
//! # Ok::<(), navtree::BuildError>(())
//! ```

pub mod cli;
pub mod config;
pub mod discover;
pub mod endpoint;
pub mod error;
pub mod generator;
pub mod logging;
pub mod overrides;
pub mod spec;
pub mod tree;

pub use config::GeneratorConfig;
pub use endpoint::{endpoint_info_from_template, EndpointInfo, UrlSegment};
pub use error::{BuildError, Result};
pub use generator::{emit, generate, GenerationSummary};
pub use overrides::{OverrideTable, PathOverride};
pub use spec::{load_document, SpecDocument, Verb};
pub use tree::{Forest, Merger, ResourceNode};
