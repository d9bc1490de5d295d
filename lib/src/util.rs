//! Lookups over resource descriptions: metadata quads and the ORE links
//! between a resource URI and the URL of the document describing it.

use quadstore::{ContextPattern, Quad, QuadStore, Term};

use crate::consts::{
    DMS_IMAGE_ANNOTATION_LIST, DMS_SEQUENCE, METADATA_PREDICATES, ORE_AGGREGATES, ORE_DESCRIBES,
    ORE_IS_DESCRIBED_BY, RDF_TYPE, SC_SEQUENCE,
};

/// Metadata quads of `subject` (of every subject when `None`), grouped by
/// predicate in [`METADATA_PREDICATES`] order.
pub fn metadata_quads<'a>(store: &'a QuadStore, subject: Option<&Term>) -> Vec<&'a Quad> {
    METADATA_PREDICATES
        .iter()
        .flat_map(|p| {
            let predicate = Term::uri(*p);
            store.quads_matching(subject, Some(&predicate), None, ContextPattern::Any)
        })
        .collect()
}

/// URL of the document describing `resource`: `?url ore:describes resource`,
/// else `resource ore:isDescribedBy ?url`.
pub fn resource_url<'a>(store: &'a QuadStore, resource: &Term) -> Option<&'a Term> {
    store
        .subject_for(&Term::uri(ORE_DESCRIBES), resource, ContextPattern::Any)
        .or_else(|| {
            store.object_for(
                resource,
                &Term::uri(ORE_IS_DESCRIBED_BY),
                ContextPattern::Any,
            )
        })
}

/// Resource described by the document at `url`.
pub fn resource_uri<'a>(store: &'a QuadStore, url: &Term) -> Option<&'a Term> {
    store.object_for(url, &Term::uri(ORE_DESCRIBES), ContextPattern::Any)
}

/// Resources aggregated by `aggregation` (`ore:aggregates`), first-seen order.
pub fn aggregated_resources<'a>(store: &'a QuadStore, aggregation: &Term) -> Vec<&'a Term> {
    store.objects_matching(
        Some(aggregation),
        Some(&Term::uri(ORE_AGGREGATES)),
        ContextPattern::Any,
    )
}

/// Each resource aggregated by `aggregation`, paired with the URL of the
/// document describing it (see [`resource_url`]).
pub fn aggregated_resources_with_urls<'a>(
    store: &'a QuadStore,
    aggregation: &Term,
) -> Vec<(&'a Term, Option<&'a Term>)> {
    aggregated_resources(store, aggregation)
        .into_iter()
        .map(|resource| (resource, resource_url(store, resource)))
        .collect()
}

/// Like [`aggregated_resources_with_urls`], keeping only resources with an
/// `rdf:type` among `types`.
pub fn aggregated_resources_of_types<'a>(
    store: &'a QuadStore,
    aggregation: &Term,
    types: &[&str],
) -> Vec<(&'a Term, Option<&'a Term>)> {
    let rdf_type = Term::uri(RDF_TYPE);
    aggregated_resources_with_urls(store, aggregation)
        .into_iter()
        .filter(|(resource, _)| {
            store
                .objects_matching(Some(*resource), Some(&rdf_type), ContextPattern::Any)
                .iter()
                .any(|t| types.iter().any(|ty| t.is(ty)))
        })
        .collect()
}

/// Aggregated `dms:ImageAnnotationList` resources with their URLs.
pub fn image_annotation_lists<'a>(
    store: &'a QuadStore,
    aggregation: &Term,
) -> Vec<(&'a Term, Option<&'a Term>)> {
    aggregated_resources_of_types(store, aggregation, &[DMS_IMAGE_ANNOTATION_LIST])
}

/// Aggregated `dms:Sequence` or `sc:Sequence` resources with their URLs.
pub fn aggregated_sequences<'a>(
    store: &'a QuadStore,
    aggregation: &Term,
) -> Vec<(&'a Term, Option<&'a Term>)> {
    aggregated_resources_of_types(store, aggregation, &[DMS_SEQUENCE, SC_SEQUENCE])
}
