use oxrdf::{IriParseError, NamedNode, NamedNodeRef};
use std::collections::HashMap;

/// A mapping from short property names to full predicate IRIs.
///
/// A context gives a [`Simple`](crate::Simple) object property-like accessors:
/// a short name is resolved to the predicate it stands for before the object's
/// graph is queried or updated.
///
/// Usage example:
/// ```
/// use simple_rdf::Context;
///
/// let context = Context::from_pairs([("name", "http://schema.org/name")])?;
/// assert_eq!(
///     context.resolve("name").map(|p| p.as_str()),
///     Some("http://schema.org/name"),
/// );
/// assert_eq!(context.resolve("age"), None);
/// # Result::<_, simple_rdf::IriParseError>::Ok(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    terms: HashMap<String, NamedNode>,
}

impl Context {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context from `(short name, predicate IRI)` pairs.
    ///
    /// Fails if one of the predicate IRIs is invalid.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, IriParseError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let mut context = Self::new();
        for (name, iri) in pairs {
            context.insert(name, NamedNode::new(iri.as_ref())?);
        }
        Ok(context)
    }

    /// Maps `name` to `predicate`, replacing a previous mapping of the same name.
    pub fn insert(&mut self, name: impl Into<String>, predicate: NamedNode) {
        self.terms.insert(name.into(), predicate);
    }

    /// Resolves a short property name to its predicate.
    pub fn resolve(&self, name: &str) -> Option<NamedNodeRef<'_>> {
        self.terms.get(name).map(NamedNode::as_ref)
    }

    /// Looks up the short name mapped to `predicate`, if any.
    pub fn property(&self, predicate: NamedNodeRef<'_>) -> Option<&str> {
        self.terms
            .iter()
            .find(|(_, p)| p.as_ref() == predicate)
            .map(|(name, _)| name.as_str())
    }

    /// Returns the number of mapped properties.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns `true` if the context maps no properties.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterates over the `(short name, predicate)` mappings.
    pub fn iter(&self) -> impl Iterator<Item = (&str, NamedNodeRef<'_>)> {
        self.terms
            .iter()
            .map(|(name, predicate)| (name.as_str(), predicate.as_ref()))
    }
}
