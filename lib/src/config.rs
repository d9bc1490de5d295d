//! Defines the configuration structures for the data layer: serializer
//! layout options and the namespace bindings used for prefixed output.

use crate::namespaces::NamespaceRegistry;
use anyhow::Result;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Write};
use std::path::Path;

/// Layout options for the Turtle serializer, fixed at construction.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Builder)]
#[builder(default)]
#[serde(default)]
pub struct SerializerOptions {
    /// Keep predicate/object pairs on the subject line and separate blocks
    /// with a single newline.
    pub compact: bool,
    /// Indentation unit, only used when `compact` is false.
    #[builder(setter(into))]
    pub indent_unit: String,
}

impl Default for SerializerOptions {
    fn default() -> Self {
        Self {
            compact: true,
            indent_unit: "  ".to_string(),
        }
    }
}

impl SerializerOptions {
    pub fn builder() -> SerializerOptionsBuilder {
        SerializerOptionsBuilder::default()
    }

    /// Non-compact layout with the default indentation.
    pub fn pretty() -> Self {
        Self {
            compact: false,
            ..Self::default()
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub serializer: SerializerOptions,
    // bindings, in @prefix order
    #[serde(default)]
    pub namespaces: NamespaceRegistry,
    // install the built-in vocabularies ahead of `namespaces`
    #[serde(default)]
    pub use_default_namespaces: bool,
}

impl Config {
    /// The registry described by this config. Explicit bindings override
    /// built-in ones of the same prefix.
    pub fn namespace_registry(&self) -> NamespaceRegistry {
        let mut registry = if self.use_default_namespaces {
            NamespaceRegistry::with_defaults()
        } else {
            NamespaceRegistry::new()
        };
        for (prefix, uri) in self.namespaces.iter() {
            registry.bind(prefix, uri);
        }
        registry
    }

    pub fn save_to_file(&self, file: &Path) -> Result<()> {
        let config_str = serde_json::to_string_pretty(&self)?;
        let mut file = std::fs::File::create(file)?;
        file.write_all(config_str.as_bytes())?;
        Ok(())
    }

    pub fn from_file(file: &Path) -> Result<Self> {
        let file = std::fs::File::open(file)?;
        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)?;
        Ok(config)
    }
}
