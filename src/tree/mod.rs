//! # Resource Tree
//!
//! Builds the hierarchical resource forest from flat path templates.
//!
//! ## How paths are placed
//!
//! Each path template of a document becomes a [`ResourceNode`] keyed on its
//! *logical* endpoint (the template itself, or the path an override files it
//! under). The node is attached beneath the deepest existing node whose
//! template is a literal prefix of that logical path:
//!
//! ```text
//! /subscriptions/{s}/resourceGroups/{g}/providers/Microsoft.Web/sites/{name}
//! ├── sub_paths
//! │   └── .../sites/{name}/slots/{slot}           (more parameters)
//! └── children
//!     └── .../sites/{name}/config                  (same parameters)
//!         └── children
//!             └── .../config/appsettings           (GET backed by POST .../appsettings/list)
//! ```
//!
//! A path whose logical template already exists is merged into the existing
//! node instead of creating a duplicate, which is how override-remapped
//! `.../list` actions end up as the GET of their parent resource.
//!
//! Processing order is the lexical order of templates within a document, so
//! the result is the same regardless of how the document's paths were stored.

mod forest;
mod merge;
mod node;

pub use forest::{Forest, Link, Placement};
pub use merge::Merger;
pub use node::{OperationSlot, Operations, ResourceNode};
