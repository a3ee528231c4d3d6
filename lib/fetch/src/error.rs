use oxrdf::IriParseError;
use oxrdfio::RdfParseError;
use std::error::Error;

/// An error raised while fetching or decoding a resource.
///
/// The adapter recovers from none of these: every failure is terminal for the
/// call and surfaces to the caller.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum FetchError {
    /// A failure of the underlying fetch capability, propagated verbatim.
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn Error + Send + Sync + 'static>),
    /// An error raised while parsing the response body into a dataset.
    #[error(transparent)]
    Parsing(#[from] RdfParseError),
    /// A failure of the graph-object factory or constructor, propagated verbatim.
    #[error("constructing the graph object failed: {0}")]
    Construction(#[source] Box<dyn Error + Send + Sync + 'static>),
    /// The resolved resource identifier is not a valid IRI.
    #[error("invalid identifier IRI '{iri}': {error}")]
    InvalidIri {
        /// The identifier itself.
        iri: String,
        /// The parsing error.
        #[source]
        error: IriParseError,
    },
    /// The call cannot proceed with the given configuration.
    #[error("invalid configuration: {0}")]
    Configuration(String),
}

impl FetchError {
    /// Wraps a transport failure.
    #[inline]
    pub fn transport(error: impl Into<Box<dyn Error + Send + Sync + 'static>>) -> Self {
        Self::Transport(error.into())
    }

    /// Wraps a graph-object construction failure.
    #[inline]
    pub fn construction(error: impl Into<Box<dyn Error + Send + Sync + 'static>>) -> Self {
        Self::Construction(error.into())
    }
}
