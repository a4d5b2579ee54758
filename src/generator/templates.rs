use askama::Template;
use std::fs;
use std::path::Path;

use crate::error::{BuildError, Result};

/// Template data for the generated `getResourceTypes` Go file.
///
/// The header and footer live in the template; `body` is the pre-rendered,
/// recursively nested list of `SwaggerResourceType` literals.
#[derive(Template)]
#[template(path = "resource_types.go.txt", escape = "none")]
pub struct ResourceTypesTemplate<'a> {
    pub body: &'a str,
}

/// Render the complete output file around `body`.
pub fn render_resource_types(body: &str) -> Result<String> {
    Ok(ResourceTypesTemplate { body }.render()?)
}

/// Write rendered output to `path`, replacing whatever was there.
///
/// # Errors
///
/// Returns [`BuildError::Io`] if the parent directory cannot be created or
/// the file cannot be written.
pub fn write_output(path: &Path, rendered: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| BuildError::io(parent, e))?;
    }
    fs::write(path, rendered).map_err(|e| BuildError::io(path, e))?;
    tracing::info!(path = %path.display(), bytes = rendered.len(), "wrote resource types");
    Ok(())
}
