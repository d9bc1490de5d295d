//! databroker: the RDF data layer behind the canvas workspace.
//!
//! Resources described by the UI (canvas sizes, annotation targets, text
//! bodies) live as quads in a [`quadstore::QuadStore`]. This crate adds the
//! pieces around it:
//!
//! - [`namespaces::NamespaceRegistry`]: ordered prefix bindings
//! - [`turtle::TurtleSerializer`]: deterministic, asynchronous Turtle output
//! - [`negotiate`]: choosing a media type from an `Accept` header
//! - [`util`]: metadata and ORE link lookups
//! - [`config`]: serializer options and bindings loaded from JSON
//!
//! ```
//! use std::sync::Arc;
//! use databroker::namespaces::NamespaceRegistry;
//! use databroker::turtle::TurtleSerializer;
//! use databroker::{Quad, Term};
//!
//! let registry: NamespaceRegistry = vec![("ex", "http://example.org/")].into_iter().collect();
//! let serializer = TurtleSerializer::new(Arc::new(registry));
//! let quads = vec![Quad::new(
//!     Term::uri("http://example.org/a"),
//!     Term::uri("http://example.org/label"),
//!     Term::literal("hello"),
//! )];
//! assert_eq!(
//!     serializer.render_quads(&quads).unwrap(),
//!     "@prefix ex: <http://example.org/> .\nex:a ex:label \"hello\" ."
//! );
//! ```

pub mod config;
pub mod consts;
pub mod errors;
pub mod namespaces;
pub mod negotiate;
pub mod serializer;
pub mod turtle;
pub mod util;

pub use quadstore::{ContextPattern, Quad, QuadStore, Term};
