//! Path overrides applied while merging documents.
//!
//! An override is keyed on the raw path template from a document and can
//! remap it onto another (logical) path and/or name the verb that acts as
//! that path's logical GET. The built-in table folds the Microsoft.Web
//! `config/<section>/list` POST actions onto their `config/<section>`
//! resources. Extra entries can be supplied in a TOML file:
//!
//! ```toml
//! [overrides."/things/{id}/list"]
//! path = "/things/{id}"
//! get_verb = "post"
//! ```

use crate::error::{BuildError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

const SITE_CONFIG: &str =
    "/subscriptions/{subscriptionId}/resourceGroups/{resourceGroupName}/providers/Microsoft.Web/sites/{name}/config";

/// `config/<section>/list` actions that stand in for a GET on the section.
const SITE_CONFIG_LIST_SECTIONS: [&str; 8] = [
    "appsettings",
    "authsettings",
    "azurestorageaccounts",
    "backup",
    "connectionstrings",
    "metadata",
    "publishingcredentials",
    "pushsettings",
];

/// Override for a single raw path template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathOverride {
    /// Logical path the template is filed under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Verb used for the logical GET, e.g. `post`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub get_verb: Option<String>,
}

impl PathOverride {
    pub fn new(path: Option<&str>, get_verb: Option<&str>) -> Self {
        PathOverride {
            path: path.map(str::to_string),
            get_verb: get_verb.map(str::to_string),
        }
    }

    /// Replacement search path, if one is set and non-empty.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref().filter(|p| !p.is_empty())
    }

    /// Replacement GET verb, if one is set and non-empty.
    pub fn get_verb(&self) -> Option<&str> {
        self.get_verb.as_deref().filter(|v| !v.is_empty())
    }
}

/// Immutable table of overrides, injected into the merger.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideTable {
    #[serde(default)]
    overrides: BTreeMap<String, PathOverride>,
}

impl OverrideTable {
    /// A table with no entries: every path uses its own template and `get`.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The compiled-in table.
    pub fn builtin() -> Self {
        let overrides = SITE_CONFIG_LIST_SECTIONS
            .iter()
            .map(|section| {
                let logical = format!("{SITE_CONFIG}/{section}");
                (
                    format!("{logical}/list"),
                    PathOverride::new(Some(&logical), Some("post")),
                )
            })
            .collect();
        OverrideTable { overrides }
    }

    /// Load a table from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Config`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| BuildError::Config {
            path: path.to_path_buf(),
            message: format!("failed to read: {e}"),
        })?;
        toml::from_str(&contents).map_err(|e| BuildError::Config {
            path: path.to_path_buf(),
            message: format!("failed to parse: {e}"),
        })
    }

    /// Builder-style insert, mainly for tests.
    pub fn with(mut self, template: impl Into<String>, entry: PathOverride) -> Self {
        self.overrides.insert(template.into(), entry);
        self
    }

    /// Add all entries of `other`, replacing entries with the same key.
    pub fn extend(&mut self, other: OverrideTable) {
        self.overrides.extend(other.overrides);
    }

    pub fn get(&self, template: &str) -> Option<&PathOverride> {
        self.overrides.get(template)
    }

    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}
