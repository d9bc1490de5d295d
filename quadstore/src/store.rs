//! The quad store: a backing array of distinct quads plus per-axis indices.
//!
//! Each index maps a term to the ascending positions of the quads holding it
//! in that axis. A query with several bound fields walks the shortest
//! posting list among them and filters the candidates by the other bound
//! fields, which amounts to intersecting the posting lists. Only a query
//! with every field unbound scans the whole array.
//!
//! All results come back in first-seen insertion order. Term-valued queries
//! return each distinct term once, at the position of the first quad that
//! produced it.

use std::collections::{HashMap, HashSet};

use log::debug;

use crate::term::{Quad, Term};
use crate::{RDF_FIRST, RDF_NIL, RDF_REST, Result};

/// Context argument of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContextPattern<'a> {
    /// Wildcard: any graph, default included.
    #[default]
    Any,
    /// Only quads without a context.
    Default,
    /// Only quads in the named graph.
    Named(&'a Term),
}

impl ContextPattern<'_> {
    pub fn matches(&self, context: Option<&Term>) -> bool {
        match self {
            ContextPattern::Any => true,
            ContextPattern::Default => context.is_none(),
            ContextPattern::Named(g) => context == Some(*g),
        }
    }
}

type Postings = Vec<usize>;

/// In-memory quad collection with set semantics.
#[derive(Debug, Clone, Default)]
pub struct QuadStore {
    quads: Vec<Quad>,
    present: HashSet<Quad>,
    by_subject: HashMap<Term, Postings>,
    by_predicate: HashMap<Term, Postings>,
    by_object: HashMap<Term, Postings>,
    by_context: HashMap<Option<Term>, Postings>,
}

impl QuadStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from `quads`, dropping duplicates and keeping the first
    /// occurrence of each.
    pub fn from_quads<I: IntoIterator<Item = Quad>>(quads: I) -> Self {
        let mut store = Self::new();
        store.extend(quads);
        debug!("built quad store with {} quads", store.len());
        store
    }

    /// Like [`QuadStore::from_quads`] but fails on the first quad that
    /// violates the data model.
    pub fn try_from_quads<I: IntoIterator<Item = Quad>>(quads: I) -> Result<Self> {
        let mut store = Self::new();
        for q in quads {
            q.validate()?;
            store.insert(q);
        }
        Ok(store)
    }

    /// Add a quad. Returns `false` if it was already present.
    pub fn insert(&mut self, quad: Quad) -> bool {
        if self.present.contains(&quad) {
            return false;
        }
        let pos = self.quads.len();
        self.by_subject
            .entry(quad.subject.clone())
            .or_default()
            .push(pos);
        self.by_predicate
            .entry(quad.predicate.clone())
            .or_default()
            .push(pos);
        self.by_object
            .entry(quad.object.clone())
            .or_default()
            .push(pos);
        self.by_context
            .entry(quad.context.clone())
            .or_default()
            .push(pos);
        self.present.insert(quad.clone());
        self.quads.push(quad);
        true
    }

    pub fn len(&self) -> usize {
        self.quads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
    }

    pub fn contains(&self, quad: &Quad) -> bool {
        self.present.contains(quad)
    }

    /// All quads in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Quad> {
        self.quads.iter()
    }

    /// Full quads matching the pattern; `None` fields are wildcards.
    pub fn quads_matching(
        &self,
        subject: Option<&Term>,
        predicate: Option<&Term>,
        object: Option<&Term>,
        context: ContextPattern<'_>,
    ) -> Vec<&Quad> {
        self.matching(subject, predicate, object, context).collect()
    }

    /// Distinct subjects of quads matching predicate/object/context.
    pub fn subjects_matching(
        &self,
        predicate: Option<&Term>,
        object: Option<&Term>,
        context: ContextPattern<'_>,
    ) -> Vec<&Term> {
        distinct(
            self.matching(None, predicate, object, context)
                .map(|q| &q.subject),
        )
    }

    /// Distinct predicates of quads matching subject/object/context.
    pub fn predicates_matching(
        &self,
        subject: Option<&Term>,
        object: Option<&Term>,
        context: ContextPattern<'_>,
    ) -> Vec<&Term> {
        distinct(
            self.matching(subject, None, object, context)
                .map(|q| &q.predicate),
        )
    }

    /// Distinct objects of quads matching subject/predicate/context.
    pub fn objects_matching(
        &self,
        subject: Option<&Term>,
        predicate: Option<&Term>,
        context: ContextPattern<'_>,
    ) -> Vec<&Term> {
        distinct(
            self.matching(subject, predicate, None, context)
                .map(|q| &q.object),
        )
    }

    /// First object of `subject predicate ?o`, if any.
    pub fn object_for(
        &self,
        subject: &Term,
        predicate: &Term,
        context: ContextPattern<'_>,
    ) -> Option<&Term> {
        self.matching(Some(subject), Some(predicate), None, context)
            .next()
            .map(|q| &q.object)
    }

    /// First subject of `?s predicate object`, if any.
    pub fn subject_for(
        &self,
        predicate: &Term,
        object: &Term,
        context: ContextPattern<'_>,
    ) -> Option<&Term> {
        self.matching(None, Some(predicate), Some(object), context)
            .next()
            .map(|q| &q.subject)
    }

    /// Members of the RDF collection starting at `head`.
    ///
    /// Follows `rdf:first`/`rdf:rest` until `rdf:nil`. A node without
    /// `rdf:first` or `rdf:rest` ends the walk, as does a node seen twice.
    pub fn list_items(&self, head: &Term, context: ContextPattern<'_>) -> Vec<&Term> {
        let first = Term::uri(RDF_FIRST);
        let rest = Term::uri(RDF_REST);
        let mut items = Vec::new();
        let mut visited: HashSet<&Term> = HashSet::new();
        let mut node = match self.resolve(head) {
            Some(n) => n,
            None => return items,
        };
        while !node.is(RDF_NIL) && visited.insert(node) {
            match self.object_for(node, &first, context) {
                Some(item) => items.push(item),
                None => break,
            }
            match self.object_for(node, &rest, context) {
                Some(next) => node = next,
                None => break,
            }
        }
        items
    }

    /// The store's own copy of `term`, if any quad mentions it as subject.
    fn resolve(&self, term: &Term) -> Option<&Term> {
        self.by_subject
            .get(term)
            .and_then(|p| p.first())
            .map(|&i| &self.quads[i].subject)
    }

    fn matching<'s: 'q, 'q>(
        &'s self,
        subject: Option<&'q Term>,
        predicate: Option<&'q Term>,
        object: Option<&'q Term>,
        context: ContextPattern<'q>,
    ) -> Box<dyn Iterator<Item = &'s Quad> + 'q> {
        let mut lists: Vec<&'s [usize]> = Vec::with_capacity(4);
        let lookups = [
            subject.map(|t| self.by_subject.get(t)),
            predicate.map(|t| self.by_predicate.get(t)),
            object.map(|t| self.by_object.get(t)),
            match context {
                ContextPattern::Any => None,
                ContextPattern::Default => Some(self.by_context.get(&None)),
                ContextPattern::Named(g) => Some(self.by_context.get(&Some(g.clone()))),
            },
        ];
        for lookup in lookups.into_iter().flatten() {
            match lookup {
                Some(postings) => lists.push(postings.as_slice()),
                // a bound field with no postings cannot match anything
                None => return Box::new(std::iter::empty()),
            }
        }
        let filter = move |q: &&'s Quad| {
            subject.is_none_or(|s| &q.subject == s)
                && predicate.is_none_or(|p| &q.predicate == p)
                && object.is_none_or(|o| &q.object == o)
                && context.matches(q.context.as_ref())
        };
        match lists.into_iter().min_by_key(|l| l.len()) {
            Some(shortest) => Box::new(shortest.iter().map(|&i| &self.quads[i]).filter(filter)),
            None => Box::new(self.quads.iter()),
        }
    }
}

fn distinct<'a>(terms: impl Iterator<Item = &'a Term>) -> Vec<&'a Term> {
    let mut seen = HashSet::new();
    terms.filter(|t| seen.insert(*t)).collect()
}

impl FromIterator<Quad> for QuadStore {
    fn from_iter<I: IntoIterator<Item = Quad>>(iter: I) -> Self {
        Self::from_quads(iter)
    }
}

impl Extend<Quad> for QuadStore {
    fn extend<I: IntoIterator<Item = Quad>>(&mut self, iter: I) {
        for q in iter {
            self.insert(q);
        }
    }
}

impl<'a> IntoIterator for &'a QuadStore {
    type Item = &'a Quad;
    type IntoIter = std::slice::Iter<'a, Quad>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "oxigraph")]
impl QuadStore {
    /// Build a store from an oxigraph dataset. Fails on RDF 1.2 triple terms.
    pub fn from_oxigraph_dataset(dataset: &oxigraph::model::Dataset) -> Result<Self> {
        let mut store = Self::new();
        for q in dataset.iter() {
            store.insert(q.into_owned().try_into()?);
        }
        Ok(store)
    }
}
