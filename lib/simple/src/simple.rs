use crate::{Context, SimpleError};
use futures::stream::BoxStream;
use oxrdf::{Dataset, GraphName, NamedNode, NamedNodeRef, Quad, QuadRef, SubjectRef, Term};
use oxrdfio::{RdfFormat, RdfSerializer};
use std::io;

/// A stream of serialized graph bytes, as produced by [`SimpleGraph::to_stream`].
pub type BodyStream = BoxStream<'static, io::Result<Vec<u8>>>;

/// A graph object: an RDF dataset bound to a subject identifier and a
/// predicate-shorthand [`Context`].
///
/// Property accessors resolve short names through the context and read or
/// write triples with the object's identifier as subject.
///
/// Usage example:
/// ```
/// use oxrdf::{Literal, NamedNode};
/// use simple_rdf::{Context, Simple};
///
/// let context = Context::from_pairs([("name", "http://schema.org/name")])?;
/// let mut simple = Simple::new(context, NamedNode::new("http://example.org/alice")?);
///
/// simple.set("name", Literal::new_simple_literal("Alice"))?;
/// assert_eq!(
///     simple.get("name"),
///     Some(Literal::new_simple_literal("Alice").into()),
/// );
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Clone)]
pub struct Simple {
    context: Context,
    identifier: NamedNode,
    dataset: Dataset,
}

impl Simple {
    /// Creates an empty graph object for `identifier`.
    pub fn new(context: Context, identifier: NamedNode) -> Self {
        Self::from_dataset(context, identifier, Dataset::new())
    }

    /// Creates a graph object over an existing dataset.
    ///
    /// The dataset is taken as-is; triples about other subjects are kept and
    /// exported by [`Self::graph`], they are just not reachable through the
    /// property accessors.
    pub fn from_dataset(context: Context, identifier: NamedNode, dataset: Dataset) -> Self {
        Self {
            context,
            identifier,
            dataset,
        }
    }

    /// The subject identifier of this object.
    pub fn identifier(&self) -> NamedNodeRef<'_> {
        self.identifier.as_ref()
    }

    /// The predicate-shorthand context of this object.
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// The underlying dataset.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Consumes the object and returns the underlying dataset.
    pub fn into_dataset(self) -> Dataset {
        self.dataset
    }

    /// Returns one value of the property `name`, if any.
    pub fn get(&self, name: &str) -> Option<Term> {
        let predicate = self.context.resolve(name)?;
        self.dataset
            .iter()
            .find(|quad| self.is_property_quad(quad, predicate))
            .map(|quad| quad.object.into_owned())
    }

    /// Returns all values of the property `name`.
    pub fn get_all(&self, name: &str) -> Vec<Term> {
        let Some(predicate) = self.context.resolve(name) else {
            return Vec::new();
        };
        self.dataset
            .iter()
            .filter(|quad| self.is_property_quad(quad, predicate))
            .map(|quad| quad.object.into_owned())
            .collect()
    }

    /// Sets the property `name` to `value`, replacing any previous values.
    ///
    /// Fails if `name` is not mapped by the context.
    pub fn set(&mut self, name: &str, value: impl Into<Term>) -> Result<(), SimpleError> {
        let predicate = self.resolve_owned(name)?;
        let existing: Vec<Quad> = self
            .dataset
            .iter()
            .filter(|quad| self.is_property_quad(quad, predicate.as_ref()))
            .map(QuadRef::into_owned)
            .collect();
        for quad in &existing {
            self.dataset.remove(quad);
        }
        self.insert_value(predicate, value.into());
        Ok(())
    }

    /// Adds a value to the property `name`, keeping previous values.
    ///
    /// Fails if `name` is not mapped by the context.
    pub fn add(&mut self, name: &str, value: impl Into<Term>) -> Result<(), SimpleError> {
        let predicate = self.resolve_owned(name)?;
        self.insert_value(predicate, value.into());
        Ok(())
    }

    /// The graph export surface of this object.
    pub fn graph(&self) -> SimpleGraph<'_> {
        SimpleGraph {
            dataset: &self.dataset,
        }
    }

    fn resolve_owned(&self, name: &str) -> Result<NamedNode, SimpleError> {
        self.context
            .resolve(name)
            .map(NamedNodeRef::into_owned)
            .ok_or_else(|| SimpleError::UnknownProperty(name.to_owned()))
    }

    fn insert_value(&mut self, predicate: NamedNode, value: Term) {
        let quad = Quad::new(
            self.identifier.clone(),
            predicate,
            value,
            GraphName::DefaultGraph,
        );
        self.dataset.insert(&quad);
    }

    fn is_property_quad(&self, quad: &QuadRef<'_>, predicate: NamedNodeRef<'_>) -> bool {
        quad.subject == SubjectRef::NamedNode(self.identifier.as_ref())
            && quad.predicate == predicate
    }
}

/// A view on a [`Simple`] object's graph that knows how to export it.
///
/// Serialization is N-Quads: quads in the default graph print as plain
/// N-Triples lines, named graphs do not fail the export.
pub struct SimpleGraph<'a> {
    dataset: &'a Dataset,
}

impl SimpleGraph<'_> {
    /// Serializes the graph into a byte buffer.
    pub fn serialize(&self) -> io::Result<Vec<u8>> {
        let mut serializer =
            RdfSerializer::from_format(RdfFormat::NQuads).for_writer(Vec::new());
        for quad in self.dataset.iter() {
            serializer.serialize_quad(quad)?;
        }
        serializer.finish()
    }

    /// Serializes the graph and returns it as a one-shot byte stream.
    ///
    /// A serialization failure surfaces as the stream's single item.
    pub fn to_stream(&self) -> BodyStream {
        let buffer = self.serialize();
        Box::pin(futures::stream::once(futures::future::ready(buffer)))
    }
}
