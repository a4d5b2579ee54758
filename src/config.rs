//! Effective settings for one generator run.

use std::path::PathBuf;

use crate::error::Result;
use crate::overrides::OverrideTable;

/// Default location of the specification tree, relative to the working
/// directory.
pub const DEFAULT_SPECS_ROOT: &str = "swagger-specs/top-level";

/// Everything [`crate::generate`] needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Root of the `<service>/<resource-type>/...` tree.
    pub specs_root: PathBuf,
    /// Where the generated source is written.
    pub output_file: PathBuf,
    /// Optional TOML file with extra or replacement overrides.
    pub overrides_file: Option<PathBuf>,
    /// Start from the compiled-in override table.
    pub builtin_overrides: bool,
}

impl GeneratorConfig {
    pub fn new(output_file: impl Into<PathBuf>) -> Self {
        GeneratorConfig {
            specs_root: PathBuf::from(DEFAULT_SPECS_ROOT),
            output_file: output_file.into(),
            overrides_file: None,
            builtin_overrides: true,
        }
    }

    pub fn with_specs_root(mut self, specs_root: impl Into<PathBuf>) -> Self {
        self.specs_root = specs_root.into();
        self
    }

    pub fn with_overrides_file(mut self, overrides_file: Option<PathBuf>) -> Self {
        self.overrides_file = overrides_file;
        self
    }

    pub fn with_builtin_overrides(mut self, enabled: bool) -> Self {
        self.builtin_overrides = enabled;
        self
    }

    /// Assemble the override table: built-ins (if enabled), then the file's
    /// entries on top.
    ///
    /// # Errors
    ///
    /// [`crate::BuildError::Config`] if the override file is unreadable or
    /// malformed.
    pub fn overrides(&self) -> Result<OverrideTable> {
        let mut table = if self.builtin_overrides {
            OverrideTable::builtin()
        } else {
            OverrideTable::empty()
        };
        if let Some(path) = &self.overrides_file {
            let extra = OverrideTable::load(path)?;
            tracing::info!(path = %path.display(), entries = extra.len(), "loaded overrides");
            table.extend(extra);
        }
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overrides::PathOverride;
    use std::fs;

    const APPSETTINGS_LIST: &str = "/subscriptions/{subscriptionId}/resourceGroups/{resourceGroupName}/providers/Microsoft.Web/sites/{name}/config/appsettings/list";

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::new("out.go");
        assert_eq!(config.specs_root, PathBuf::from(DEFAULT_SPECS_ROOT));
        assert!(config.builtin_overrides);
        assert_eq!(config.overrides().unwrap(), OverrideTable::builtin());
    }

    #[test]
    fn test_builtins_can_be_disabled() {
        let config = GeneratorConfig::new("out.go").with_builtin_overrides(false);
        assert!(config.overrides().unwrap().is_empty());
    }

    #[test]
    fn test_file_entries_replace_builtins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("overrides.toml");
        fs::write(
            &path,
            format!("[overrides.\"{APPSETTINGS_LIST}\"]\nget_verb = \"put\"\n"),
        )
        .unwrap();

        let table = GeneratorConfig::new("out.go")
            .with_overrides_file(Some(path))
            .overrides()
            .unwrap();
        assert_eq!(table.len(), OverrideTable::builtin().len());
        assert_eq!(
            table.get(APPSETTINGS_LIST),
            Some(&PathOverride::new(None, Some("put")))
        );
    }

    #[test]
    fn test_missing_override_file_is_config_error() {
        let err = GeneratorConfig::new("out.go")
            .with_overrides_file(Some(PathBuf::from("/definitely/not/here.toml")))
            .overrides()
            .unwrap_err();
        assert!(matches!(err, crate::BuildError::Config { .. }));
    }
}
