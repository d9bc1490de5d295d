//! Picking a serialization media type from an HTTP `Accept` header.

use log::debug;

use crate::consts::TEXT_TURTLE;
use crate::serializer::Serializer;

/// Media types listed in an `Accept` header, in header order, without
/// their parameters (`;q=0.8` etc.).
pub fn accept_mimetypes(accept: &str) -> impl Iterator<Item = &str> {
    accept
        .split(',')
        .map(|part| part.split(';').next().unwrap_or_default().trim())
        .filter(|part| !part.is_empty())
}

/// The media type `serializer` should answer an `Accept` header with.
///
/// Browsers (first listed type `*/html`) get `text/turtle`. Otherwise the
/// first listed type the serializer declares wins, matched by full type or
/// by subtype alone (`application/turtle` selects `text/turtle`). Falls
/// back to `text/turtle`.
pub fn negotiate_format(serializer: &dyn Serializer, accept: &str) -> &'static str {
    let mut mimetypes = accept_mimetypes(accept).peekable();
    if let Some(first) = mimetypes.peek() {
        if subtype(first).eq_ignore_ascii_case("html") {
            return TEXT_TURTLE;
        }
    }
    for mimetype in mimetypes {
        let declared = serializer.serializable_types().iter().copied().find(|t| {
            t.eq_ignore_ascii_case(mimetype) || subtype(t).eq_ignore_ascii_case(subtype(mimetype))
        });
        if let Some(declared) = declared {
            return declared;
        }
    }
    debug!("no declared type acceptable for '{}', using {}", accept, TEXT_TURTLE);
    TEXT_TURTLE
}

fn subtype(mimetype: &str) -> &str {
    match mimetype.rfind('/') {
        Some(i) => mimetype[i + 1..].trim(),
        None => mimetype.trim(),
    }
}
