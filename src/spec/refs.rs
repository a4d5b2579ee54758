//! `$ref` resolution for specification documents.
//!
//! References are either local (`#/definitions/Site`) or relative to the
//! document that contains them (`../common/types.json#/parameters/Api`).
//! Remote URLs are never fetched.

use crate::error::{BuildError, Result};
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

/// Bound on `$ref` -> `$ref` chains at a single location.
const MAX_REF_CHAIN: usize = 32;

/// Loads documents on demand and resolves references between them.
///
/// Each distinct `(file, pointer)` target is only walked once, so recursive
/// schemas terminate.
#[derive(Debug, Default)]
pub struct RefResolver {
    documents: HashMap<PathBuf, Value>,
    visited: HashSet<(PathBuf, String)>,
}

impl RefResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load (or fetch from cache) the document at `path`.
    pub fn document(&mut self, path: &Path) -> Result<&Value> {
        let key = normalize(path)?;
        if !self.documents.contains_key(&key) {
            let value = super::load::read_value(&key)?;
            self.documents.insert(key.clone(), value);
        }
        self.documents
            .get(&key)
            .ok_or_else(|| BuildError::Document {
                path: key.clone(),
                message: "document vanished from cache".to_string(),
            })
    }

    /// Resolve `reference` as seen from the document at `base`.
    ///
    /// Returns the file the target lives in, the decoded JSON pointer and a
    /// copy of the target value.
    pub fn resolve(&mut self, base: &Path, reference: &str) -> Result<(PathBuf, String, Value)> {
        let unresolved = || BuildError::UnresolvedRef {
            reference: reference.to_string(),
            path: base.to_path_buf(),
        };

        let (file_part, fragment) = match reference.split_once('#') {
            Some((file, fragment)) => (file, fragment),
            None => (reference, ""),
        };
        if file_part.contains("://") {
            return Err(unresolved());
        }

        let target_file = if file_part.is_empty() {
            normalize(base)?
        } else {
            let dir = base.parent().unwrap_or_else(|| Path::new("."));
            normalize(&dir.join(file_part)).map_err(|_| unresolved())?
        };

        let pointer = urlencoding::decode(fragment)
            .map_err(|_| unresolved())?
            .into_owned();
        if !pointer.is_empty() && !pointer.starts_with('/') {
            return Err(unresolved());
        }

        let target = self
            .document(&target_file)?
            .pointer(&pointer)
            .cloned()
            .ok_or_else(unresolved)?;
        Ok((target_file, pointer, target))
    }

    /// Follow a chain of `$ref` objects at one location until a concrete
    /// value is reached. Returns the file that value lives in.
    pub fn follow(&mut self, base: &Path, value: Value) -> Result<(PathBuf, Value)> {
        let mut base = base.to_path_buf();
        let mut value = value;
        for _ in 0..MAX_REF_CHAIN {
            let Some(reference) = ref_of(&value).map(str::to_string) else {
                return Ok((base, value));
            };
            let (file, _pointer, target) = self.resolve(&base, &reference)?;
            base = file;
            value = target;
        }
        Err(BuildError::Document {
            path: base,
            message: format!("reference chain longer than {MAX_REF_CHAIN} links"),
        })
    }

    /// Check that every reference reachable from `value` resolves.
    ///
    /// Vendor extensions (`x-*` keys, e.g. `x-ms-examples`) are not part of
    /// the API description and are not followed.
    pub fn check_all(&mut self, base: &Path, value: &Value) -> Result<()> {
        match value {
            Value::Object(map) => {
                if let Some(reference) = ref_of(value) {
                    let (file, pointer, target) = self.resolve(base, reference)?;
                    if self.visited.insert((file.clone(), pointer)) {
                        self.check_all(&file, &target)?;
                    }
                }
                for (key, child) in map {
                    if key != "$ref" && !key.starts_with("x-") {
                        self.check_all(base, child)?;
                    }
                }
                Ok(())
            }
            Value::Array(items) => {
                for item in items {
                    self.check_all(base, item)?;
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

fn ref_of(value: &Value) -> Option<&str> {
    value.as_object()?.get("$ref")?.as_str()
}

fn normalize(path: &Path) -> Result<PathBuf> {
    std::fs::canonicalize(path).map_err(|source| BuildError::io(path, source))
}
