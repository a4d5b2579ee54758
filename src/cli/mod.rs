//! # CLI Module
//!
//! Command-line surface of the `navtree-gen` binary.
//!
//! ```bash
//! # Print usage and exit
//! navtree-gen
//!
//! # Generate from the default tree (swagger-specs/top-level)
//! navtree-gen --output-file internal/pkg/expanders/resource_types.go
//!
//! # Custom tree, extra overrides, no built-ins
//! navtree-gen --specs-dir specs --overrides overrides.toml \
//!     --no-builtin-overrides --output-file out.go
//! ```
//!
//! `NAVTREE_SPECS_DIR` may be used instead of `--specs-dir`.

mod commands;


pub use commands::{run, run_cli, Cli};
