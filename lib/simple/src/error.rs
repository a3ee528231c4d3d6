use oxrdf::IriParseError;
use std::io;

/// An error raised while working with a [`Simple`](crate::Simple) graph object.
#[derive(Debug, thiserror::Error)]
pub enum SimpleError {
    /// The property name is not part of the object's context.
    #[error("unknown property '{0}' in context")]
    UnknownProperty(String),
    /// A predicate IRI in the context is invalid.
    #[error(transparent)]
    InvalidIri(#[from] IriParseError),
    /// An error raised while exporting the graph.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl From<SimpleError> for io::Error {
    #[inline]
    fn from(error: SimpleError) -> Self {
        match error {
            SimpleError::Io(error) => error,
            SimpleError::UnknownProperty(_) => {
                Self::new(io::ErrorKind::InvalidInput, error.to_string())
            }
            SimpleError::InvalidIri(error) => {
                Self::new(io::ErrorKind::InvalidInput, error.to_string())
            }
        }
    }
}
