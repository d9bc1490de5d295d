//! Ordered prefix → namespace bindings used when formatting URIs.
//!
//! The registry keeps bindings in the order they were made; that order is
//! the order of the `@prefix` block in serialized output.

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_NAMESPACES;

/// One `prefix: <namespace>` binding.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NamespaceBinding {
    pub prefix: String,
    pub uri: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(from = "Vec<NamespaceBinding>", into = "Vec<NamespaceBinding>")]
pub struct NamespaceRegistry {
    bindings: Vec<NamespaceBinding>,
}

impl NamespaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the vocabularies the data layer works with.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for (prefix, uri) in DEFAULT_NAMESPACES {
            registry.bind(prefix, uri);
        }
        registry
    }

    /// Bind `prefix` to `uri`. Rebinding an existing prefix replaces its
    /// namespace but keeps its position.
    pub fn bind(&mut self, prefix: impl Into<String>, uri: impl Into<String>) {
        let prefix = prefix.into();
        let uri = uri.into();
        match self.bindings.iter_mut().find(|b| b.prefix == prefix) {
            Some(existing) => existing.uri = uri,
            None => self.bindings.push(NamespaceBinding { prefix, uri }),
        }
    }

    pub fn namespace(&self, prefix: &str) -> Option<&str> {
        self.bindings
            .iter()
            .find(|b| b.prefix == prefix)
            .map(|b| b.uri.as_str())
    }

    /// (prefix, namespace) pairs in binding order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.bindings
            .iter()
            .map(|b| (b.prefix.as_str(), b.uri.as_str()))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// `prefix:local` for `uri`, using the longest bound namespace that
    /// leaves a valid Turtle local name. Ties go to the earlier binding.
    pub fn prefix_for(&self, uri: &str) -> Option<String> {
        let mut best: Option<(&NamespaceBinding, &str)> = None;
        for binding in &self.bindings {
            let Some(local) = uri.strip_prefix(binding.uri.as_str()) else {
                continue;
            };
            if !is_valid_local_name(local) {
                continue;
            }
            if best.is_none_or(|(b, _)| binding.uri.len() > b.uri.len()) {
                best = Some((binding, local));
            }
        }
        best.map(|(b, local)| format!("{}:{}", b.prefix, local))
    }

    /// `prefix:local` when a namespace matches, `<uri>` otherwise.
    pub fn prefixed_or_wrapped(&self, uri: &str) -> String {
        self.prefix_for(uri)
            .unwrap_or_else(|| format!("<{}>", uri))
    }
}

impl From<Vec<NamespaceBinding>> for NamespaceRegistry {
    fn from(bindings: Vec<NamespaceBinding>) -> Self {
        let mut registry = Self::new();
        for b in bindings {
            registry.bind(b.prefix, b.uri);
        }
        registry
    }
}

impl From<NamespaceRegistry> for Vec<NamespaceBinding> {
    fn from(registry: NamespaceRegistry) -> Self {
        registry.bindings
    }
}

impl<P: Into<String>, U: Into<String>> FromIterator<(P, U)> for NamespaceRegistry {
    fn from_iter<I: IntoIterator<Item = (P, U)>>(iter: I) -> Self {
        let mut registry = Self::new();
        for (prefix, uri) in iter {
            registry.bind(prefix, uri);
        }
        registry
    }
}

/// Turtle `PN_LOCAL` without `:` and escapes: a `PN_CHARS_U` or digit first,
/// `PN_CHARS` or `.` inside, a `PN_CHARS` last. The empty local name
/// is valid (`ex:`).
fn is_valid_local_name(local: &str) -> bool {
    let Some(first) = local.chars().next() else {
        return true;
    };
    if !(is_pn_chars_u(first) || first.is_ascii_digit()) {
        return false;
    }
    if !local.chars().all(|c| is_pn_chars(c) || c == '.') {
        return false;
    }
    !local.ends_with('.')
}

// PN_CHARS_BASE
fn is_pn_chars_base(c: char) -> bool {
    matches!(c,
        'A'..='Z'
        | 'a'..='z'
        | '\u{00C0}'..='\u{00D6}'
        | '\u{00D8}'..='\u{00F6}'
        | '\u{00F8}'..='\u{02FF}'
        | '\u{0370}'..='\u{037D}'
        | '\u{037F}'..='\u{1FFF}'
        | '\u{200C}'..='\u{200D}'
        | '\u{2070}'..='\u{218F}'
        | '\u{2C00}'..='\u{2FEF}'
        | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}'
        | '\u{FDF0}'..='\u{FFFD}'
        | '\u{10000}'..='\u{EFFFF}')
}

fn is_pn_chars_u(c: char) -> bool {
    is_pn_chars_base(c) || c == '_'
}

fn is_pn_chars(c: char) -> bool {
    is_pn_chars_u(c)
        || matches!(c,
            '-' | '0'..='9' | '\u{00B7}' | '\u{0300}'..='\u{036F}' | '\u{203F}'..='\u{2040}')
}
