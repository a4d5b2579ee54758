//! Specification document loading.
//!
//! Documents are Swagger 2.0 or OpenAPI 3.x, in JSON or YAML. The tree builder
//! only needs two things from each: the API version (`info.version`) and the
//! set of verbs defined per path template, so that is all a [`SpecDocument`]
//! keeps.

mod load;
mod refs;
mod types;

pub use load::*;
pub use refs::RefResolver;
pub use types::*;
