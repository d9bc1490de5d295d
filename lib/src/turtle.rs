//! Turtle serialization of quad sets.
//!
//! Output is grouped by subject, then predicate, with the objects of a
//! (subject, predicate) pair listed together:
//!
//! ```text
//! @prefix ex: <http://example.org/> .
//! ex:a a ex:Thing ; ex:label "hello", "bonjour"@fr .
//! ```
//!
//! Subjects, predicates and objects appear in the store's first-seen order,
//! so identical input always yields byte-identical text. Contexts are not
//! written: quads that differ only by graph collapse into one triple.
//!
//! [`TurtleSerializer::serialize`] is asynchronous and yields to the
//! scheduler once before and once after building the text so that large
//! documents do not monopolise a single-threaded runtime. The store and the
//! namespace registry must not change while a serialization is in flight.

use std::sync::Arc;

use log::debug;
use quadstore::{ContextPattern, Quad, QuadStore, RDF_TYPE, Term};
use tokio::task::JoinHandle;

use crate::config::SerializerOptions;
use crate::consts::{TEXT_N3, TEXT_TURTLE};
use crate::errors::SerializeError;
use crate::namespaces::NamespaceRegistry;
use crate::serializer::Serializer;

const SERIALIZABLE_TYPES: &[&str] = &[TEXT_TURTLE, TEXT_N3];

/// Text produced by a serialization, with the media type it is labelled as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Serialized {
    pub text: String,
    pub format: String,
}

#[derive(Debug, Clone)]
pub struct TurtleSerializer {
    namespaces: Arc<NamespaceRegistry>,
    options: SerializerOptions,
}

impl TurtleSerializer {
    /// Compact serializer over `namespaces`.
    pub fn new(namespaces: Arc<NamespaceRegistry>) -> Self {
        Self::with_options(namespaces, SerializerOptions::default())
    }

    pub fn with_options(namespaces: Arc<NamespaceRegistry>, options: SerializerOptions) -> Self {
        Self {
            namespaces,
            options,
        }
    }

    pub fn options(&self) -> &SerializerOptions {
        &self.options
    }

    pub fn namespaces(&self) -> &NamespaceRegistry {
        &self.namespaces
    }

    /// Serialize `quads` as Turtle.
    ///
    /// `format` defaults to `text/turtle`. Any other label, declared or
    /// not, gets the same Turtle text and is echoed back unchanged.
    pub async fn serialize(
        &self,
        quads: &[Quad],
        format: Option<&str>,
    ) -> Result<Serialized, SerializeError> {
        let format = format.unwrap_or(TEXT_TURTLE).to_string();
        if !self.can_serialize(&format) {
            debug!("{} is not a declared Turtle type, emitting Turtle anyway", format);
        }
        debug!("serializing {} quads as {}", quads.len(), format);

        tokio::task::yield_now().await;
        let text = self.render_quads(quads)?;
        tokio::task::yield_now().await;

        debug!("serialized {} bytes of {}", text.len(), format);
        Ok(Serialized { text, format })
    }

    /// Callback form of [`TurtleSerializer::serialize`].
    ///
    /// Returns at once; `on_complete(text, error, format)` runs exactly once
    /// on the current [`tokio::task::LocalSet`] after both yields. `text` is
    /// empty when `error` is set.
    ///
    /// # Panics
    ///
    /// Panics when called outside a `LocalSet`.
    pub fn serialize_with<F>(
        &self,
        quads: Vec<Quad>,
        format: Option<String>,
        on_complete: F,
    ) -> JoinHandle<()>
    where
        F: FnOnce(String, Option<SerializeError>, String) + 'static,
    {
        let serializer = self.clone();
        tokio::task::spawn_local(async move {
            let result = serializer.serialize(&quads, format.as_deref()).await;
            match result {
                Ok(Serialized { text, format }) => on_complete(text, None, format),
                Err(e) => {
                    let format = format.unwrap_or_else(|| TEXT_TURTLE.to_string());
                    on_complete(String::new(), Some(e), format)
                }
            }
        })
    }

    /// Synchronous rendering of a quad list. Fails on literal subjects,
    /// predicates or contexts.
    pub fn render_quads(&self, quads: &[Quad]) -> Result<String, SerializeError> {
        let store = QuadStore::try_from_quads(quads.iter().cloned())?;
        Ok(self.render(&store))
    }

    /// One `@prefix` line per binding, in binding order.
    pub fn prefixes_string(&self) -> String {
        self.namespaces
            .iter()
            .map(|(prefix, uri)| format!("@prefix {}: <{}> .", prefix, uri))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// One block per subject.
    pub fn triples_string(&self, store: &QuadStore) -> String {
        let mut blocks = Vec::new();
        for subject in store.subjects_matching(None, None, ContextPattern::Any) {
            let mut entries = Vec::new();
            for predicate in store.predicates_matching(Some(subject), None, ContextPattern::Any) {
                let objects =
                    store.objects_matching(Some(subject), Some(predicate), ContextPattern::Any);
                let objects = match objects.as_slice() {
                    [single] => format!(" {}", self.format_term(single)),
                    many => many
                        .iter()
                        .map(|o| format!("{}{}", self.object_lead(), self.format_term(o)))
                        .collect::<Vec<_>>()
                        .join(","),
                };
                entries.push(format!(
                    "{}{}{}",
                    self.predicate_lead(),
                    self.format_predicate(predicate),
                    objects
                ));
            }
            blocks.push(format!("{}{} .", self.format_term(subject), entries.join(" ;")));
        }
        blocks.join(self.block_separator())
    }

    /// Turtle token for `term` in subject or object position.
    ///
    /// Literals are re-quoted from their stored form: the lexical value is
    /// whatever lies between the first and last `"`, the suffix whatever
    /// follows the last `"`. A lexical value containing a newline gets long
    /// quotes. Nothing is escaped here; lexical values are expected to be
    /// escaped already.
    pub fn format_term(&self, term: &Term) -> String {
        match term {
            Term::Uri(uri) => self.namespaces.prefixed_or_wrapped(uri),
            Term::Literal { .. } => {
                let stored = term.to_string();
                match (stored.find('"'), stored.rfind('"')) {
                    (Some(first), Some(last)) if last > first => {
                        let lexical = &stored[first + 1..last];
                        let suffix = &stored[last + 1..];
                        if lexical.contains('\n') {
                            format!("\"\"\"{}\"\"\"{}", lexical, suffix)
                        } else {
                            format!("\"{}\"{}", lexical, suffix)
                        }
                    }
                    _ => stored,
                }
            }
            Term::BlankNode(_) => term.to_string(),
        }
    }

    /// Like [`TurtleSerializer::format_term`], but `rdf:type` becomes `a`.
    pub fn format_predicate(&self, term: &Term) -> String {
        if term.is(RDF_TYPE) {
            "a".to_string()
        } else {
            self.format_term(term)
        }
    }

    pub fn indent(&self, level: usize) -> String {
        self.options.indent_unit.repeat(level)
    }

    fn predicate_lead(&self) -> String {
        if self.options.compact {
            " ".to_string()
        } else {
            format!("\n{}", self.indent(1))
        }
    }

    fn object_lead(&self) -> String {
        if self.options.compact {
            " ".to_string()
        } else {
            format!("\n{}", self.indent(2))
        }
    }

    fn block_separator(&self) -> &'static str {
        if self.options.compact { "\n" } else { "\n\n" }
    }
}

impl Serializer for TurtleSerializer {
    fn serializable_types(&self) -> &'static [&'static str] {
        SERIALIZABLE_TYPES
    }

    /// Prefix block then subject blocks; empty parts are left out.
    fn render(&self, store: &QuadStore) -> String {
        [self.prefixes_string(), self.triples_string(store)]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(self.block_separator())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn serializer(compact: bool) -> TurtleSerializer {
        let registry: NamespaceRegistry = vec![("ex", "http://example.org/")].into_iter().collect();
        let options = SerializerOptions {
            compact,
            ..SerializerOptions::default()
        };
        TurtleSerializer::with_options(Arc::new(registry), options)
    }

    #[test]
    fn literal_quoting() {
        let s = serializer(true);
        assert_eq!(s.format_term(&Term::literal("hello")), "\"hello\"");
        assert_eq!(
            s.format_term(&Term::literal("line1\nline2")),
            "\"\"\"line1\nline2\"\"\""
        );
        assert_eq!(
            s.format_term(&Term::lang_literal("a\nb", "en")),
            "\"\"\"a\nb\"\"\"@en"
        );
        assert_eq!(
            s.format_term(&Term::typed_literal("5", "http://www.w3.org/2001/XMLSchema#integer")),
            "\"5\"^^<http://www.w3.org/2001/XMLSchema#integer>"
        );
        assert_eq!(s.format_term(&Term::literal("")), "\"\"");
    }

    #[test]
    fn escaped_quotes_stay_inside_the_lexical_value() {
        let s = serializer(true);
        let term = Term::lang_literal("say \\\"hi\\\"\nagain", "en");
        assert_eq!(s.format_term(&term), "\"\"\"say \\\"hi\\\"\nagain\"\"\"@en");
    }

    #[test]
    fn uri_and_blank_node_formatting() {
        let s = serializer(true);
        assert_eq!(s.format_term(&Term::uri("http://example.org/a")), "ex:a");
        assert_eq!(s.format_term(&Term::uri("http://other.org/a")), "<http://other.org/a>");
        assert_eq!(s.format_term(&Term::blank("b1")), "_:b1");
        assert_eq!(s.format_predicate(&Term::uri(RDF_TYPE)), "a");
        // `a` is only valid in predicate position
        assert_eq!(
            s.format_term(&Term::uri(RDF_TYPE)),
            "<http://www.w3.org/1999/02/22-rdf-syntax-ns#type>"
        );
    }

    #[test]
    fn indent_repeats_unit() {
        let s = serializer(false);
        assert_eq!(s.indent(0), "");
        assert_eq!(s.indent(2), "    ");
    }

    #[test]
    fn declared_types() {
        let s = serializer(true);
        assert!(s.can_serialize("text/turtle"));
        assert!(s.can_serialize("Text/N3"));
        assert!(!s.can_serialize("application/ld+json"));
    }
}
