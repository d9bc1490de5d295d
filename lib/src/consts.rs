//! Defines IRI constants for the vocabularies the data layer reads and
//! writes: RDF, RDFS, Dublin Core, OAI-ORE, Open Annotation, EXIF and the
//! DMS / Shared Canvas manuscript vocabularies.

pub use quadstore::{RDF_FIRST, RDF_NIL, RDF_REST, RDF_TYPE};

// namespaces
pub const RDF_NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
pub const RDFS_NS: &str = "http://www.w3.org/2000/01/rdf-schema#";
pub const XSD_NS: &str = "http://www.w3.org/2001/XMLSchema#";
pub const DC_NS: &str = "http://purl.org/dc/elements/1.1/";
pub const DCTERMS_NS: &str = "http://purl.org/dc/terms/";
pub const DCMITYPE_NS: &str = "http://purl.org/dc/dcmitype/";
pub const ORE_NS: &str = "http://www.openarchives.org/ore/terms/";
pub const OA_NS: &str = "http://www.w3.org/ns/oa#";
pub const CNT_NS: &str = "http://www.w3.org/2011/content#";
pub const EXIF_NS: &str = "http://www.w3.org/2003/12/exif/ns#";
pub const DMS_NS: &str = "http://dms.stanford.edu/ns/";
pub const SC_NS: &str = "http://www.shared-canvas.org/ns/";

// rdfs
pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
// dc / dcterms
pub const DC_TITLE: &str = "http://purl.org/dc/elements/1.1/title";
pub const DCTERMS_DESCRIPTION: &str = "http://purl.org/dc/terms/description";
// ore
pub const ORE_AGGREGATES: &str = "http://www.openarchives.org/ore/terms/aggregates";
pub const ORE_DESCRIBES: &str = "http://www.openarchives.org/ore/terms/describes";
pub const ORE_IS_DESCRIBED_BY: &str = "http://www.openarchives.org/ore/terms/isDescribedBy";
// exif
pub const EXIF_WIDTH: &str = "http://www.w3.org/2003/12/exif/ns#width";
pub const EXIF_HEIGHT: &str = "http://www.w3.org/2003/12/exif/ns#height";
// oa
pub const OA_EXACT: &str = "http://www.w3.org/ns/oa#exact";
pub const OA_HAS_TARGET: &str = "http://www.w3.org/ns/oa#hasTarget";
pub const OA_HAS_BODY: &str = "http://www.w3.org/ns/oa#hasBody";
// dms / sc
pub const DMS_IMAGE_ANNOTATION_LIST: &str = "http://dms.stanford.edu/ns/ImageAnnotationList";
pub const DMS_SEQUENCE: &str = "http://dms.stanford.edu/ns/Sequence";
pub const SC_SEQUENCE: &str = "http://www.shared-canvas.org/ns/Sequence";

/// Predicates describing a resource rather than its content, in the order
/// metadata is collected.
pub const METADATA_PREDICATES: [&str; 8] = [
    RDF_TYPE,
    ORE_IS_DESCRIBED_BY,
    RDFS_LABEL,
    DC_TITLE,
    DCTERMS_DESCRIPTION,
    EXIF_WIDTH,
    EXIF_HEIGHT,
    OA_EXACT,
];

// media types
pub const TEXT_TURTLE: &str = "text/turtle";
pub const TEXT_N3: &str = "text/n3";

/// Default bindings installed by `NamespaceRegistry::with_defaults`.
pub const DEFAULT_NAMESPACES: [(&str, &str); 12] = [
    ("rdf", RDF_NS),
    ("rdfs", RDFS_NS),
    ("xsd", XSD_NS),
    ("dc", DC_NS),
    ("dcterms", DCTERMS_NS),
    ("dcmitype", DCMITYPE_NS),
    ("ore", ORE_NS),
    ("oa", OA_NS),
    ("cnt", CNT_NS),
    ("exif", EXIF_NS),
    ("dms", DMS_NS),
    ("sc", SC_NS),
];
