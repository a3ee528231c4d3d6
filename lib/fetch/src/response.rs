use crate::FetchError;
use futures::future::BoxFuture;
use futures::FutureExt;
use http::{HeaderMap, StatusCode};
use oxrdf::Dataset;
use simple_rdf::Simple;
use std::future::Future;

/// The one-shot dataset accessor of a [`FetchResponse`].
pub type DatasetFuture = BoxFuture<'static, Result<Dataset, FetchError>>;

/// A response produced by a fetch capability.
///
/// A capability that recognized the payload as RDF attaches a lazy dataset
/// accessor instead of a raw body; the adapter awaits it and stores the
/// decoded graph object in [`simple`](Self::simple). A response without an
/// accessor is non-RDF content and passes through undecoded.
pub struct FetchResponse {
    /// The response status.
    pub status: StatusCode,
    /// The response headers.
    pub headers: HeaderMap,
    /// The raw, undecoded response payload, if the capability kept it.
    pub body: Option<Vec<u8>>,
    /// The decoded graph object, filled in by the adapter.
    pub simple: Option<Simple>,
    dataset: Option<DatasetFuture>,
}

impl FetchResponse {
    /// Creates a response with the given status and no headers, body or
    /// dataset accessor.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: None,
            simple: None,
            dataset: None,
        }
    }

    /// Replaces the response headers.
    #[must_use]
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    /// Attaches a raw payload.
    #[must_use]
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Attaches a lazy dataset accessor, marking the payload as RDF content.
    #[must_use]
    pub fn with_dataset<F>(mut self, dataset: F) -> Self
    where
        F: Future<Output = Result<Dataset, FetchError>> + Send + 'static,
    {
        self.dataset = Some(dataset.boxed());
        self
    }

    /// Returns `true` if the response carries a dataset accessor.
    pub fn has_dataset(&self) -> bool {
        self.dataset.is_some()
    }

    /// Takes the dataset accessor out of the response.
    ///
    /// The accessor is one-shot: subsequent calls return `None`.
    pub fn take_dataset(&mut self) -> Option<DatasetFuture> {
        self.dataset.take()
    }
}
