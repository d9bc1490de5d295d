use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use databroker::config::SerializerOptions;
use databroker::consts::{DC_TITLE, EXIF_HEIGHT, EXIF_WIDTH, OA_HAS_TARGET, RDF_TYPE, SC_NS};
use databroker::namespaces::NamespaceRegistry;
use databroker::serializer::Serializer;
use databroker::turtle::TurtleSerializer;
use databroker::{Quad, QuadStore, Term};

/// A manuscript-like description: `n` canvases with size and title, each
/// targeted by two annotations.
fn generate_quads(n: usize) -> Vec<Quad> {
    let mut quads = Vec::with_capacity(n * 9);
    for i in 0..n {
        let canvas = Term::uri(format!("http://example.org/canvas/{i}"));
        quads.push(Quad::new(
            canvas.clone(),
            Term::uri(RDF_TYPE),
            Term::uri(format!("{SC_NS}Canvas")),
        ));
        quads.push(Quad::new(
            canvas.clone(),
            Term::uri(DC_TITLE),
            Term::literal(format!("f. {i}r")),
        ));
        quads.push(Quad::new(canvas.clone(), Term::uri(EXIF_WIDTH), Term::literal("600")));
        quads.push(Quad::new(canvas.clone(), Term::uri(EXIF_HEIGHT), Term::literal("800")));
        for a in 0..2 {
            let anno = Term::uri(format!("http://example.org/anno/{i}-{a}"));
            quads.push(Quad::new(anno.clone(), Term::uri(OA_HAS_TARGET), canvas.clone()));
            quads.push(Quad::new(
                anno.clone(),
                Term::uri("http://example.org/note"),
                Term::lang_literal(format!("line one\nline {a}"), "en"),
            ));
        }
        quads.push(Quad::new(
            Term::uri("http://example.org/sequence"),
            Term::uri("http://example.org/canvases"),
            canvas,
        ));
    }
    quads
}

fn registry() -> Arc<NamespaceRegistry> {
    let mut registry = NamespaceRegistry::with_defaults();
    registry.bind("ex", "http://example.org/");
    Arc::new(registry)
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    for (name, options) in [
        ("compact", SerializerOptions::default()),
        ("pretty", SerializerOptions::pretty()),
    ] {
        let serializer = TurtleSerializer::with_options(registry(), options);
        for &n in &[100usize, 1_000, 5_000] {
            let store = QuadStore::from_quads(generate_quads(n));
            group.throughput(Throughput::Elements(store.len() as u64));
            group.bench_with_input(BenchmarkId::new(name, n), &store, |b, store| {
                b.iter(|| serializer.render(store))
            });
        }
    }
    group.finish();
}

fn bench_serialize(c: &mut Criterion) {
    // includes building the store and both scheduler yields
    let rt = tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime");
    let serializer = TurtleSerializer::new(registry());
    let mut group = c.benchmark_group("serialize");
    for &n in &[100usize, 1_000] {
        let quads = generate_quads(n);
        group.throughput(Throughput::Elements(quads.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &quads, |b, quads| {
            b.iter(|| rt.block_on(serializer.serialize(quads, None)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render, bench_serialize);
criterion_main!(benches);
