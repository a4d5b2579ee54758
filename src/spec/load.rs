use super::refs::RefResolver;
use super::types::{PathVerbs, SpecDocument, Verb};
use crate::error::{BuildError, Result};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// Path item keys that carry no operation.
const NON_OPERATION_KEYS: [&str; 5] = ["summary", "description", "servers", "parameters", "$ref"];

/// HTTP verbs that exist but have no place in the resource tree.
const UNSUPPORTED_VERBS: [&str; 1] = ["trace"];

/// Read a JSON or YAML file (chosen by extension) into a JSON value.
pub fn read_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path).map_err(|source| BuildError::io(path, source))?;
    let is_yaml = path
        .extension()
        .map(|ext| ext == "yaml" || ext == "yml")
        .unwrap_or(false);
    let parsed = if is_yaml {
        serde_yaml::from_str(&content).map_err(|e| e.to_string())
    } else {
        serde_json::from_str(&content).map_err(|e| e.to_string())
    };
    parsed.map_err(|message| BuildError::Document {
        path: path.to_path_buf(),
        message,
    })
}

/// Load a specification document and reduce it to version + verbs per path.
///
/// Path items given as `$ref` are replaced by their targets, and every
/// reference reachable from `paths` must resolve, relative to the file that
/// contains it.
///
/// # Errors
///
/// * [`BuildError::Io`] / [`BuildError::Document`] if the file cannot be read
///   or parsed, or has no `info.version`
/// * [`BuildError::UnresolvedRef`] for a dangling reference
/// * [`BuildError::UnknownVerb`] for a path item whose only operation is a
///   verb outside the supported set
pub fn load_document(path: &Path) -> Result<SpecDocument> {
    let mut resolver = RefResolver::new();
    let root = resolver.document(path)?.clone();

    let version = api_version(&root).ok_or_else(|| BuildError::Document {
        path: path.to_path_buf(),
        message: "missing info.version".to_string(),
    })?;

    let mut paths = BTreeMap::new();
    if let Some(items) = root.get("paths") {
        let items = items.as_object().ok_or_else(|| BuildError::Document {
            path: path.to_path_buf(),
            message: "'paths' is not an object".to_string(),
        })?;
        for (template, item) in items {
            let (item_base, item) = resolver.follow(path, item.clone())?;
            resolver.check_all(&item_base, &item)?;
            let verbs = extract_verbs(path, template, &item)?;
            debug!(template = %template, verbs = ?verbs, "loaded path");
            paths.insert(template.clone(), verbs);
        }
    }

    Ok(SpecDocument {
        source: Some(path.to_path_buf()),
        version,
        paths,
    })
}

fn api_version(root: &Value) -> Option<String> {
    match root.pointer("/info/version")? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn extract_verbs(path: &Path, template: &str, item: &Value) -> Result<PathVerbs> {
    let obj = item.as_object().ok_or_else(|| BuildError::Document {
        path: path.to_path_buf(),
        message: format!("path item for '{template}' is not an object"),
    })?;

    let mut verbs = PathVerbs::default();
    let mut unsupported = None;
    for key in obj.keys() {
        let lk = key.to_ascii_lowercase();
        if let Ok(verb) = lk.parse::<Verb>() {
            verbs.insert(verb);
        } else if UNSUPPORTED_VERBS.contains(&lk.as_str()) {
            unsupported = Some(key.clone());
        } else if !NON_OPERATION_KEYS.contains(&lk.as_str()) && !key.starts_with("x-") {
            debug!(template = %template, key = %key, "ignoring unknown path item key");
        }
    }

    match unsupported {
        Some(verb) if verbs.is_empty() => Err(BuildError::UnknownVerb {
            verb,
            template: template.to_string(),
        }),
        _ => Ok(verbs),
    }
}
