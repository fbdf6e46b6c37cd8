//! The resource a watch stream is about.

use std::fmt;

use serde_json::Value;

use crate::error::{WatchError, WatchResult};

/// Identifies a single resource: API version, kind, and a name optionally
/// qualified by a namespace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Target {
    pub api_version: String,
    pub kind: String,
    pub name: String,
    pub namespace: Option<String>,
}

impl Target {
    /// Parse a target from its command-line form, where the name may carry
    /// a `namespace/` prefix.
    pub fn parse(api_version: &str, kind: &str, qualified_name: &str) -> WatchResult<Self> {
        if api_version.is_empty() {
            return Err(WatchError::InvalidTarget("empty apiVersion".into()));
        }
        if kind.is_empty() {
            return Err(WatchError::InvalidTarget("empty kind".into()));
        }
        let (namespace, name) = match qualified_name.split_once('/') {
            Some((ns, n)) => (Some(ns.to_string()), n.to_string()),
            None => (None, qualified_name.to_string()),
        };
        if name.is_empty() || namespace.as_deref() == Some("") {
            return Err(WatchError::InvalidTarget(format!(
                "malformed name {:?}, expected [<namespace>/]<name>",
                qualified_name
            )));
        }
        Ok(Self {
            api_version: api_version.to_string(),
            kind: kind.to_string(),
            name,
            namespace,
        })
    }

    /// Returns `true` if the given document describes this resource.
    ///
    /// `kind` and `apiVersion` are checked only when the document carries
    /// them; the name must match `metadata.name`, and the namespace must
    /// match `metadata.namespace` when this target is namespace-qualified.
    pub fn matches(&self, object: &Value) -> bool {
        if let Some(kind) = object.get("kind").and_then(Value::as_str) {
            if kind != self.kind {
                return false;
            }
        }
        if let Some(api_version) = object.get("apiVersion").and_then(Value::as_str) {
            if api_version != self.api_version {
                return false;
            }
        }
        let metadata = &object["metadata"];
        if metadata.get("name").and_then(Value::as_str) != Some(self.name.as_str()) {
            return false;
        }
        if let Some(ref namespace) = self.namespace {
            if metadata.get("namespace").and_then(Value::as_str) != Some(namespace.as_str()) {
                return false;
            }
        }
        true
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(ns) => write!(f, "{} {} {}/{}", self.api_version, self.kind, ns, self.name),
            None => write!(f, "{} {} {}", self.api_version, self.kind, self.name),
        }
    }
}
