#![cfg(test)]
#![allow(clippy::panic_in_result_fn)]

use futures::StreamExt;
use oxrdf::{Dataset, GraphName, Literal, NamedNode, Quad};
use simple_rdf::{Context, Simple, SimpleError};
use std::error::Error;

fn example_context() -> Context {
    Context::from_pairs([("predicate", "http://example.org/predicate")]).unwrap()
}

fn subject() -> NamedNode {
    NamedNode::new_unchecked("http://example.org/subject")
}

#[test]
fn context_resolves_short_names() -> Result<(), Box<dyn Error>> {
    let context = Context::from_pairs([
        ("name", "http://schema.org/name"),
        ("country", "http://schema.org/country"),
    ])?;

    assert_eq!(context.len(), 2);
    assert_eq!(
        context.resolve("name").map(|p| p.as_str()),
        Some("http://schema.org/name")
    );
    assert_eq!(context.resolve("population"), None);
    assert_eq!(
        context.property(NamedNode::new("http://schema.org/country")?.as_ref()),
        Some("country")
    );
    Ok(())
}

#[test]
fn context_rejects_invalid_predicate_iris() {
    assert!(Context::from_pairs([("name", "not an iri")]).is_err());
}

#[test]
fn set_replaces_previous_values() -> Result<(), Box<dyn Error>> {
    let mut simple = Simple::new(example_context(), subject());

    simple.set("predicate", Literal::new_simple_literal("first"))?;
    simple.set("predicate", Literal::new_simple_literal("second"))?;

    assert_eq!(
        simple.get("predicate"),
        Some(Literal::new_simple_literal("second").into())
    );
    assert_eq!(simple.get_all("predicate").len(), 1);
    Ok(())
}

#[test]
fn add_keeps_previous_values() -> Result<(), Box<dyn Error>> {
    let mut simple = Simple::new(example_context(), subject());

    simple.add("predicate", Literal::new_simple_literal("first"))?;
    simple.add("predicate", Literal::new_simple_literal("second"))?;

    assert_eq!(simple.get_all("predicate").len(), 2);
    Ok(())
}

#[test]
fn unknown_properties_fail() {
    let mut simple = Simple::new(example_context(), subject());

    let result = simple.set("unknown", Literal::new_simple_literal("value"));
    assert!(matches!(result, Err(SimpleError::UnknownProperty(_))));
    assert_eq!(simple.get("unknown"), None);
    assert!(simple.get_all("unknown").is_empty());
}

#[test]
fn accessors_only_see_the_own_subject() -> Result<(), Box<dyn Error>> {
    let mut dataset = Dataset::new();
    dataset.insert(&Quad::new(
        NamedNode::new("http://example.org/other")?,
        NamedNode::new("http://example.org/predicate")?,
        Literal::new_simple_literal("foreign"),
        GraphName::DefaultGraph,
    ));

    let simple = Simple::from_dataset(example_context(), subject(), dataset);

    assert_eq!(simple.get("predicate"), None);
    // Foreign triples are still part of the exported graph.
    assert_eq!(simple.dataset().len(), 1);
    Ok(())
}

#[test]
fn graph_serializes_to_ntriples_lines() -> Result<(), Box<dyn Error>> {
    let mut simple = Simple::new(example_context(), subject());
    simple.set("predicate", Literal::new_simple_literal("object"))?;

    let serialized = String::from_utf8(simple.graph().serialize()?)?;
    assert_eq!(
        serialized.trim(),
        "<http://example.org/subject> <http://example.org/predicate> \"object\" ."
    );
    Ok(())
}

#[test]
fn graph_streams_the_serialization() -> Result<(), Box<dyn Error>> {
    let mut simple = Simple::new(example_context(), subject());
    simple.set("predicate", Literal::new_simple_literal("object"))?;

    let mut stream = simple.graph().to_stream();
    let chunk = futures::executor::block_on(stream.next()).unwrap()?;
    assert_eq!(chunk, simple.graph().serialize()?);
    assert!(futures::executor::block_on(stream.next()).is_none());
    Ok(())
}
