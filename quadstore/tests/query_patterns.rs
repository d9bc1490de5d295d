use quadstore::{ContextPattern, Quad, QuadStore, Term};

fn ex(local: &str) -> Term {
    Term::uri(format!("http://ex/{}", local))
}

/// (s1,p1,o1) (s1,p2,o2) (s2,p1,o1) (s2,p1,"v") in the default graph,
/// (s1,p1,o3) in graph g.
fn sample_store() -> QuadStore {
    QuadStore::from_quads(vec![
        Quad::new(ex("s1"), ex("p1"), ex("o1")),
        Quad::new(ex("s1"), ex("p2"), ex("o2")),
        Quad::new(ex("s2"), ex("p1"), ex("o1")),
        Quad::new(ex("s2"), ex("p1"), Term::literal("v")),
        Quad::in_graph(ex("s1"), ex("p1"), ex("o3"), ex("g")),
    ])
}

#[test]
fn all_wildcards_return_every_distinct_term() {
    let store = sample_store();
    assert_eq!(
        store.subjects_matching(None, None, ContextPattern::Any),
        vec![&ex("s1"), &ex("s2")]
    );
    assert_eq!(
        store.predicates_matching(None, None, ContextPattern::Any),
        vec![&ex("p1"), &ex("p2")]
    );
    assert_eq!(
        store.objects_matching(None, None, ContextPattern::Any),
        vec![&ex("o1"), &ex("o2"), &Term::literal("v"), &ex("o3")]
    );
    assert_eq!(
        store
            .quads_matching(None, None, None, ContextPattern::Any)
            .len(),
        5
    );
}

#[test]
fn subjects_by_predicate_and_object() {
    let store = sample_store();
    let subjects = store.subjects_matching(Some(&ex("p1")), Some(&ex("o1")), ContextPattern::Any);
    assert_eq!(subjects, vec![&ex("s1"), &ex("s2")]);
    let subjects = store.subjects_matching(Some(&ex("p2")), None, ContextPattern::Any);
    assert_eq!(subjects, vec![&ex("s1")]);
}

#[test]
fn predicates_for_subject() {
    let store = sample_store();
    let preds = store.predicates_matching(Some(&ex("s1")), None, ContextPattern::Any);
    assert_eq!(preds, vec![&ex("p1"), &ex("p2")]);
    let preds = store.predicates_matching(Some(&ex("s2")), Some(&ex("o1")), ContextPattern::Any);
    assert_eq!(preds, vec![&ex("p1")]);
}

#[test]
fn objects_respect_context() {
    let store = sample_store();
    let any = store.objects_matching(Some(&ex("s1")), Some(&ex("p1")), ContextPattern::Any);
    assert_eq!(any, vec![&ex("o1"), &ex("o3")]);
    let default = store.objects_matching(Some(&ex("s1")), Some(&ex("p1")), ContextPattern::Default);
    assert_eq!(default, vec![&ex("o1")]);
    let g = ex("g");
    let named = store.objects_matching(Some(&ex("s1")), Some(&ex("p1")), ContextPattern::Named(&g));
    assert_eq!(named, vec![&ex("o3")]);
}

#[test]
fn full_quad_pattern() {
    let store = sample_store();
    let hits = store.quads_matching(
        Some(&ex("s2")),
        Some(&ex("p1")),
        Some(&Term::literal("v")),
        ContextPattern::Default,
    );
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].object, Term::literal("v"));

    // literal suffix is part of the match key
    let hits = store.quads_matching(
        None,
        None,
        Some(&Term::lang_literal("v", "en")),
        ContextPattern::Any,
    );
    assert!(hits.is_empty());
}

#[test]
fn empty_store_yields_empty_sets() {
    let store = QuadStore::new();
    assert!(store.is_empty());
    assert!(store.subjects_matching(None, None, ContextPattern::Any).is_empty());
    assert!(store.predicates_matching(None, None, ContextPattern::Any).is_empty());
    assert!(store.objects_matching(None, None, ContextPattern::Any).is_empty());
    assert!(store.quads_matching(None, None, None, ContextPattern::Any).is_empty());
}

#[test]
fn single_value_lookups() {
    let store = sample_store();
    assert_eq!(
        store.object_for(&ex("s1"), &ex("p2"), ContextPattern::Any),
        Some(&ex("o2"))
    );
    assert_eq!(
        store.subject_for(&ex("p1"), &Term::literal("v"), ContextPattern::Any),
        Some(&ex("s2"))
    );
    assert_eq!(store.object_for(&ex("s2"), &ex("p2"), ContextPattern::Any), None);
}

#[test]
fn try_from_quads_rejects_literal_subject() {
    let res = QuadStore::try_from_quads(vec![
        Quad::new(ex("s"), ex("p"), ex("o")),
        Quad::new(Term::literal("bad"), ex("p"), ex("o")),
    ]);
    assert!(res.is_err());
}
