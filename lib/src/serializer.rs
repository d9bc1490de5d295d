//! Common interface of the text serializers.

use quadstore::QuadStore;

/// A serializer turns the quads of a store into text of one family of
/// media types.
pub trait Serializer {
    /// Media types this serializer declares, preferred first.
    fn serializable_types(&self) -> &'static [&'static str];

    /// True if `format` is one of the declared media types (ASCII case-insensitive).
    fn can_serialize(&self, format: &str) -> bool {
        self.serializable_types()
            .iter()
            .any(|t| t.eq_ignore_ascii_case(format.trim()))
    }

    /// Render every quad of `store` synchronously.
    fn render(&self, store: &QuadStore) -> String;
}
