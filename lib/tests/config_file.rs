use std::sync::Arc;

use anyhow::Result;
use databroker::config::{Config, SerializerOptions};
use databroker::namespaces::NamespaceRegistry;
use databroker::turtle::TurtleSerializer;
use databroker::{Quad, Term};
use tempfile::TempDir;

#[test]
fn config_survives_save_and_load() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = TempDir::new()?;
    let path = dir.path().join("databroker.json");

    let mut namespaces = NamespaceRegistry::new();
    namespaces.bind("ex", "http://example.org/");
    namespaces.bind("sc", "http://example.org/canvas#");
    let config = Config {
        serializer: SerializerOptions::builder()
            .compact(false)
            .indent_unit("    ")
            .build()?,
        namespaces,
        use_default_namespaces: false,
    };
    config.save_to_file(&path)?;

    let loaded = Config::from_file(&path)?;
    assert_eq!(loaded, config);
    let prefixes: Vec<_> = loaded.namespace_registry().iter().map(|(p, _)| p.to_string()).collect();
    assert_eq!(prefixes, vec!["ex", "sc"]);
    Ok(())
}

#[test]
fn loaded_config_drives_the_serializer() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{
            "serializer": {"compact": false},
            "namespaces": [{"prefix": "ex", "uri": "http://example.org/"}]
        }"#,
    )?;

    let config = Config::from_file(&path)?;
    let serializer = TurtleSerializer::with_options(
        Arc::new(config.namespace_registry()),
        config.serializer.clone(),
    );
    let quads = vec![Quad::new(
        Term::uri("http://example.org/a"),
        Term::uri("http://example.org/label"),
        Term::literal("hello"),
    )];
    assert_eq!(
        serializer.render_quads(&quads)?,
        "@prefix ex: <http://example.org/> .\n\nex:a\n  ex:label \"hello\" ."
    );
    Ok(())
}

#[test]
fn missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    assert!(Config::from_file(&dir.path().join("absent.json")).is_err());
}
