//! A convenience wrapper that binds an RDF graph to a subject identifier and a
//! predicate-shorthand [`Context`], giving the graph property-like accessors.
//!
//! The entry point is the [`Simple`] struct.

mod context;
mod error;
mod simple;

pub use context::*;
pub use error::*;
pub use simple::*;

// Re-export some oxrdf types.
pub use oxrdf::{
    BlankNode, Dataset, Graph, GraphName, GraphNameRef, IriParseError, Literal,
    LiteralRef, NamedNode, NamedNodeRef, Quad, QuadRef, Subject, SubjectRef, Term,
    TermRef, Triple, TripleRef,
};
