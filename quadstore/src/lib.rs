//! quadstore: an in-memory index over RDF quads.
//!
//! A [`QuadStore`] holds a set of (subject, predicate, object, context)
//! quads and answers wildcard pattern queries along every axis. Results are
//! always returned in first-seen insertion order, so anything built on top
//! of the store (serializers in particular) produces reproducible output.
//!
//! Quick start
//!
//! ```
//! use quadstore::{ContextPattern, Quad, QuadStore, Term};
//!
//! let a = Term::uri("http://example.org/a");
//! let label = Term::uri("http://www.w3.org/2000/01/rdf-schema#label");
//! let store: QuadStore = vec![
//!     Quad::new(a.clone(), label.clone(), Term::literal("hello")),
//!     Quad::new(a.clone(), label.clone(), Term::lang_literal("bonjour", "fr")),
//! ]
//! .into_iter()
//! .collect();
//!
//! let labels = store.objects_matching(Some(&a), Some(&label), ContextPattern::Any);
//! assert_eq!(labels.len(), 2);
//! assert_eq!(labels[0].to_string(), "\"hello\"");
//! ```

pub mod error;
pub mod store;
pub mod term;

pub use error::StoreError;
pub use store::{ContextPattern, QuadStore};
pub use term::{Quad, Term, TermPosition, escape_lexical};

/// Crate‑level result type using the store error.
pub type Result<T> = std::result::Result<T, StoreError>;

/// IRI of `rdf:type`.
pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
/// IRI of `rdf:first`.
pub const RDF_FIRST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#first";
/// IRI of `rdf:rest`.
pub const RDF_REST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#rest";
/// IRI of `rdf:nil`.
pub const RDF_NIL: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#nil";
