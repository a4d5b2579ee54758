//! Path template decomposition.
//!
//! Turns a template such as `/subscriptions/{subscriptionId}/resourceGroups`
//! into an [`EndpointInfo`]: the template, the API version it belongs to, and
//! its ordered segments. The split follows the same rules the router uses for
//! path patterns: a segment wrapped in braces is a named parameter, anything
//! else is matched literally.

use crate::error::{BuildError, Result};
use std::fmt;

/// One `/`-separated piece of a path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlSegment {
    /// Matched verbatim, e.g. `resourceGroups`.
    Literal(String),
    /// A named parameter, e.g. `{resourceGroupName}`. `value` carries the
    /// concrete text the parameter was resolved to, when known.
    Parameter { name: String, value: Option<String> },
}

impl UrlSegment {
    /// Parameter name, or `None` for literal segments.
    pub fn name(&self) -> Option<&str> {
        match self {
            UrlSegment::Literal(_) => None,
            UrlSegment::Parameter { name, .. } => Some(name),
        }
    }

    /// Label used for a resource whose path ends in this segment.
    pub fn display_name(&self) -> String {
        match self {
            UrlSegment::Literal(text) => text.clone(),
            UrlSegment::Parameter { name, .. } => format!("{{{name}}}"),
        }
    }
}

impl fmt::Display for UrlSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrlSegment::Literal(text) => write!(f, "{text}"),
            UrlSegment::Parameter { name, .. } => write!(f, "{{{name}}}"),
        }
    }
}

/// A path template bound to an API version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointInfo {
    pub template_url: String,
    pub api_version: String,
    pub segments: Vec<UrlSegment>,
}

impl EndpointInfo {
    /// Number of parameter segments. Decides whether one resource nests
    /// beside another (same count) or beneath it (greater count).
    pub fn name_segment_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|segment| segment.name().is_some())
            .count()
    }

    /// The final segment. Always present: templates without segments are
    /// rejected by [`endpoint_info_from_template`].
    pub fn last_segment(&self) -> Option<&UrlSegment> {
        self.segments.last()
    }
}

/// Decompose `template` into an [`EndpointInfo`] for `api_version`.
///
/// # Errors
///
/// Returns [`BuildError::InvalidTemplate`] when the template does not start
/// with `/`, has no segments, contains an empty segment, or has a segment
/// with braces that is not a plain `{name}` parameter.
pub fn endpoint_info_from_template(template: &str, api_version: &str) -> Result<EndpointInfo> {
    let rest = template
        .strip_prefix('/')
        .ok_or_else(|| BuildError::invalid_template(template, "must start with '/'"))?;
    let rest = rest.strip_suffix('/').unwrap_or(rest);
    if rest.is_empty() {
        return Err(BuildError::invalid_template(template, "no path segments"));
    }

    let mut segments = Vec::with_capacity(rest.matches('/').count() + 1);
    for raw in rest.split('/') {
        segments.push(parse_segment(template, raw)?);
    }

    Ok(EndpointInfo {
        template_url: template.to_string(),
        api_version: api_version.to_string(),
        segments,
    })
}

fn parse_segment(template: &str, raw: &str) -> Result<UrlSegment> {
    if raw.is_empty() {
        return Err(BuildError::invalid_template(template, "empty segment"));
    }
    if let Some(name) = raw.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
        if name.is_empty() || name.contains(['{', '}']) {
            return Err(BuildError::invalid_template(
                template,
                format!("malformed parameter segment '{raw}'"),
            ));
        }
        return Ok(UrlSegment::Parameter {
            name: name.to_string(),
            value: None,
        });
    }
    if raw.contains(['{', '}']) {
        return Err(BuildError::invalid_template(
            template,
            format!("unsupported segment '{raw}'"),
        ));
    }
    Ok(UrlSegment::Literal(raw.to_string()))
}
