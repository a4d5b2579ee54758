//! # Generator Module
//!
//! Turns the merged resource forest into the Go source consumed by the
//! resource expander, and drives a complete run.
//!
//! ```text
//! specs root → discover → load + dereference → merge → render → write
//! ```
//!
//! ## Output
//!
//! The outer file is an Askama template (`templates/resource_types.go.txt`)
//! holding the fixed package header and closing braces. The body is written
//! recursively, one `SwaggerResourceType` literal per node, each nesting level
//! indented by two more tabs:
//!
//! ```text
//! 		SwaggerResourceType{
//! 			Display:  "{name}",
//! 			Endpoint: mustGetEndpointInfoFromURL("/.../sites/{name}", "2018-02-01"),
//! 			DeleteEndpoint: mustGetEndpointInfoFromURL("/.../sites/{name}", "2018-02-01"),
//! 			Children: []SwaggerResourceType {
//! 				SwaggerResourceType{
//! 					...
//! 				},
//! 			},
//! 		},
//! ```
//!
//! A node without a permitted GET cannot be listed by the expander, so it is
//! left out; its children and sub-resources are written in its place.

mod emitter;
mod project;
mod templates;

pub use emitter::{emit, render_forest, EmitStats};
pub use project::{build_forest, generate, GenerationSummary};
pub use templates::{render_resource_types, write_output, ResourceTypesTemplate};
