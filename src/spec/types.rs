use crate::error::BuildError;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// HTTP verbs a path item may define.
///
/// Anything outside this set is rejected with [`BuildError::UnknownVerb`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Verb {
    Get,
    Delete,
    Head,
    Options,
    Patch,
    Post,
    Put,
}

impl Verb {
    pub const ALL: [Verb; 7] = [
        Verb::Get,
        Verb::Delete,
        Verb::Head,
        Verb::Options,
        Verb::Patch,
        Verb::Post,
        Verb::Put,
    ];

    /// Lowercase form, as used for path item keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Get => "get",
            Verb::Delete => "delete",
            Verb::Head => "head",
            Verb::Options => "options",
            Verb::Patch => "patch",
            Verb::Post => "post",
            Verb::Put => "put",
        }
    }

    /// Uppercase form, as emitted into generated code.
    pub fn as_upper(&self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Delete => "DELETE",
            Verb::Head => "HEAD",
            Verb::Options => "OPTIONS",
            Verb::Patch => "PATCH",
            Verb::Post => "POST",
            Verb::Put => "PUT",
        }
    }

    /// Parse `verb` for the path `template`, reporting the template on failure.
    pub fn parse_for(verb: &str, template: &str) -> Result<Verb, BuildError> {
        verb.parse().map_err(|_| BuildError::UnknownVerb {
            verb: verb.to_string(),
            template: template.to_string(),
        })
    }
}

/// Returned when a string is not one of the known verbs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown HTTP verb '{0}'")]
pub struct UnknownVerb(pub String);

impl FromStr for Verb {
    type Err = UnknownVerb;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "get" => Ok(Verb::Get),
            "delete" => Ok(Verb::Delete),
            "head" => Ok(Verb::Head),
            "options" => Ok(Verb::Options),
            "patch" => Ok(Verb::Patch),
            "post" => Ok(Verb::Post),
            "put" => Ok(Verb::Put),
            _ => Err(UnknownVerb(s.to_string())),
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_upper())
    }
}

/// The verbs one path template defines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathVerbs {
    verbs: BTreeSet<Verb>,
}

impl PathVerbs {
    pub fn new(verbs: impl IntoIterator<Item = Verb>) -> Self {
        PathVerbs {
            verbs: verbs.into_iter().collect(),
        }
    }

    pub fn defines(&self, verb: Verb) -> bool {
        self.verbs.contains(&verb)
    }

    pub fn insert(&mut self, verb: Verb) {
        self.verbs.insert(verb);
    }

    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Verb> + '_ {
        self.verbs.iter().copied()
    }
}

/// What the tree builder needs from one specification document: its API
/// version and, per path template, the verbs defined on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecDocument {
    /// File the document was loaded from, if any.
    pub source: Option<PathBuf>,
    /// `info.version`, used as the API version of every endpoint.
    pub version: String,
    /// Keyed by raw template. Iteration is in byte-wise lexical order.
    pub paths: BTreeMap<String, PathVerbs>,
}

impl SpecDocument {
    pub fn new(version: impl Into<String>) -> Self {
        SpecDocument {
            source: None,
            version: version.into(),
            paths: BTreeMap::new(),
        }
    }

    /// Add (or replace) a path template with the given verbs.
    pub fn with_path(mut self, template: impl Into<String>, verbs: &[Verb]) -> Self {
        self.paths
            .insert(template.into(), PathVerbs::new(verbs.iter().copied()));
        self
    }

    /// Path templates in processing order. A parent template is a string
    /// prefix of its descendants, so it always comes first.
    pub fn sorted_templates(&self) -> impl Iterator<Item = (&str, &PathVerbs)> {
        self.paths.iter().map(|(k, v)| (k.as_str(), v))
    }
}
