//! RDF terms and quads as held by the store.
//!
//! Terms compare structurally: same variant, same payload. For literals the
//! datatype or language suffix is part of the identity, so `"1"` and
//! `"1"^^xsd:integer` are distinct terms.

use std::fmt;

use crate::Result;
use crate::error::StoreError;

/// RDF term: URI, literal or blank node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    /// Absolute IRI/URI, stored without angle brackets.
    Uri(String),
    /// Literal with an already-escaped lexical form.
    ///
    /// `datatype_or_lang` is either a language tag with a leading `@`
    /// (`@en`) or a bare datatype IRI.
    Literal {
        lexical: String,
        datatype_or_lang: Option<String>,
    },
    /// Blank node label (with or without `_:` prefix).
    BlankNode(String),
}

impl Term {
    pub fn uri(uri: impl Into<String>) -> Self {
        Term::Uri(uri.into())
    }

    /// Plain literal with no datatype or language.
    pub fn literal(lexical: impl Into<String>) -> Self {
        Term::Literal {
            lexical: lexical.into(),
            datatype_or_lang: None,
        }
    }

    /// Language tagged literal. The tag is stored with a leading `@`.
    pub fn lang_literal(lexical: impl Into<String>, lang: &str) -> Self {
        let lang = lang.trim_start_matches('@');
        Term::Literal {
            lexical: lexical.into(),
            datatype_or_lang: Some(format!("@{}", lang)),
        }
    }

    pub fn typed_literal(lexical: impl Into<String>, datatype: impl Into<String>) -> Self {
        Term::Literal {
            lexical: lexical.into(),
            datatype_or_lang: Some(datatype.into()),
        }
    }

    pub fn blank(id: impl Into<String>) -> Self {
        Term::BlankNode(id.into())
    }

    pub fn is_uri(&self) -> bool {
        matches!(self, Term::Uri(_))
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal { .. })
    }

    pub fn is_blank_node(&self) -> bool {
        matches!(self, Term::BlankNode(_))
    }

    /// The absolute URI string if this term is a URI.
    pub fn as_uri(&self) -> Option<&str> {
        match self {
            Term::Uri(u) => Some(u),
            _ => None,
        }
    }

    /// True if this term is the URI `uri`.
    pub fn is(&self, uri: &str) -> bool {
        self.as_uri() == Some(uri)
    }
}

/// Renders the stored N-Triples-like representation of the term.
impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Uri(u) => write!(f, "<{}>", u),
            Term::Literal {
                lexical,
                datatype_or_lang,
            } => match datatype_or_lang.as_deref() {
                None => write!(f, "\"{}\"", lexical),
                Some(lang) if lang.starts_with('@') => write!(f, "\"{}\"{}", lexical, lang),
                Some(dt) => write!(f, "\"{}\"^^<{}>", lexical, dt),
            },
            Term::BlankNode(id) if id.starts_with("_:") => f.write_str(id),
            Term::BlankNode(id) => write!(f, "_:{}", id),
        }
    }
}

/// Position of a term inside a quad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TermPosition {
    Subject,
    Predicate,
    Object,
    Context,
}

impl fmt::Display for TermPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TermPosition::Subject => "subject",
            TermPosition::Predicate => "predicate",
            TermPosition::Object => "object",
            TermPosition::Context => "context",
        };
        f.write_str(name)
    }
}

/// (subject, predicate, object, context) quad. A `None` context is the default graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Quad {
    pub subject: Term,
    pub predicate: Term,
    pub object: Term,
    pub context: Option<Term>,
}

impl Quad {
    /// Quad in the default graph.
    pub fn new(subject: Term, predicate: Term, object: Term) -> Self {
        Self {
            subject,
            predicate,
            object,
            context: None,
        }
    }

    /// Quad in the named graph `context`.
    pub fn in_graph(subject: Term, predicate: Term, object: Term, context: Term) -> Self {
        Self {
            subject,
            predicate,
            object,
            context: Some(context),
        }
    }

    /// Check that no literal appears where the data model forbids one.
    pub fn validate(&self) -> Result<()> {
        let positions = [
            (TermPosition::Subject, Some(&self.subject)),
            (TermPosition::Predicate, Some(&self.predicate)),
            (TermPosition::Context, self.context.as_ref()),
        ];
        for (position, term) in positions {
            if let Some(term) = term.filter(|t| t.is_literal()) {
                return Err(StoreError::InvalidTermPosition {
                    position,
                    term: term.clone(),
                });
            }
        }
        Ok(())
    }
}

impl fmt::Display for Quad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.subject, self.predicate, self.object)?;
        if let Some(ctx) = &self.context {
            write!(f, " {}", ctx)?;
        }
        f.write_str(" .")
    }
}

/// Escape a raw literal value into a lexical payload: `\`, `"` and `\r`
/// are escaped, newlines are kept as-is.
pub fn escape_lexical(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(feature = "oxigraph")]
const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

#[cfg(feature = "oxigraph")]
impl TryFrom<oxigraph::model::Term> for Term {
    type Error = StoreError;

    fn try_from(t: oxigraph::model::Term) -> Result<Self> {
        use oxigraph::model::Term as OxTerm;
        #[allow(unreachable_patterns)]
        match t {
            OxTerm::NamedNode(n) => Ok(Term::Uri(n.into_string())),
            OxTerm::BlankNode(b) => Ok(Term::BlankNode(format!("_:{}", b.as_str()))),
            OxTerm::Literal(l) => {
                let lexical = escape_lexical(l.value());
                if let Some(lang) = l.language() {
                    Ok(Term::lang_literal(lexical, lang))
                } else if l.datatype().as_str() == XSD_STRING {
                    Ok(Term::literal(lexical))
                } else {
                    Ok(Term::typed_literal(lexical, l.datatype().as_str()))
                }
            }
            _ => Err(StoreError::Unsupported("triple terms")),
        }
    }
}

#[cfg(feature = "oxigraph")]
impl TryFrom<oxigraph::model::Quad> for Quad {
    type Error = StoreError;

    fn try_from(q: oxigraph::model::Quad) -> Result<Self> {
        use oxigraph::model::GraphName;
        let context = match q.graph_name {
            GraphName::DefaultGraph => None,
            GraphName::NamedNode(n) => Some(Term::Uri(n.into_string())),
            GraphName::BlankNode(b) => Some(Term::BlankNode(format!("_:{}", b.as_str()))),
        };
        Ok(Quad {
            subject: oxigraph::model::Term::from(q.subject).try_into()?,
            predicate: Term::Uri(q.predicate.into_string()),
            object: q.object.try_into()?,
            context,
        })
    }
}
