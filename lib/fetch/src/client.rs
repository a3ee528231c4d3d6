use crate::factory::BuildStrategy;
use crate::{
    Body, ConstructSimple, DefaultConstructor, FetchError, FetchOptions, FetchRequest,
    FetchResponse, HttpFetch, RequestBody,
};
use async_trait::async_trait;
use http::header::CONTENT_LOCATION;
use oxrdf::NamedNode;
use simple_rdf::Context;
use std::future::Future;
use std::sync::Arc;
use tracing::debug;

/// An injected network-fetch capability.
///
/// The capability owns the transport entirely: the adapter never performs
/// network I/O itself. A capability that recognized the payload as RDF
/// returns a response with a dataset accessor; anything else is passed
/// through as non-RDF content.
#[async_trait]
pub trait RdfFetch: Send + Sync {
    /// Fetches `locator` and returns the raw response.
    ///
    /// `locator` may be absent if the capability does not require one.
    async fn fetch(
        &self,
        locator: Option<&str>,
        request: FetchRequest,
    ) -> Result<FetchResponse, FetchError>;
}

/// Adapter to use a plain async closure as an [`RdfFetch`] capability.
pub struct FetchFn<F>(pub F);

#[async_trait]
impl<F, Fut> RdfFetch for FetchFn<F>
where
    F: Fn(Option<String>, FetchRequest) -> Fut + Send + Sync,
    Fut: Future<Output = Result<FetchResponse, FetchError>> + Send,
{
    async fn fetch(
        &self,
        locator: Option<&str>,
        request: FetchRequest,
    ) -> Result<FetchResponse, FetchError> {
        (self.0)(locator.map(ToOwned::to_owned), request).await
    }
}

/// The fetch adapter and its caller-owned defaults.
///
/// The client carries the fallback tier of every per-call option: the fetch
/// capability, the graph-object constructor and an optional context. Each
/// [`fetch`](Self::fetch) call reads them and touches no other shared state,
/// so a client can be shared freely between tasks. Clients are cheap to
/// build; for per-instance defaults (say, one context and factory per graph
/// object), build one client per instance instead of threading the options
/// through every call.
///
/// Usage example:
/// ```
/// use http::StatusCode;
/// use oxrdf::Dataset;
/// use simple_rdf_fetch::{
///     FetchError, FetchFn, FetchOptions, FetchRequest, FetchResponse, SimpleClient,
/// };
/// use std::sync::Arc;
///
/// # tokio_test::block_on(async {
/// let capability = FetchFn(|_locator: Option<String>, _request: FetchRequest| async {
///     Ok::<_, FetchError>(
///         FetchResponse::new(StatusCode::OK)
///             .with_dataset(async { Ok::<_, FetchError>(Dataset::new()) }),
///     )
/// });
///
/// let client = SimpleClient::new(Arc::new(capability));
/// let response = client
///     .fetch(Some("http://example.org/resource"), FetchOptions::default())
///     .await?;
///
/// let simple = response.simple.unwrap();
/// assert_eq!(simple.identifier().as_str(), "http://example.org/resource");
/// # Result::<_, FetchError>::Ok(())
/// # }).unwrap();
/// ```
pub struct SimpleClient {
    fetch: Arc<dyn RdfFetch>,
    constructor: Arc<dyn ConstructSimple>,
    context: Option<Context>,
}

impl Default for SimpleClient {
    /// A client backed by [`HttpFetch`] and [`DefaultConstructor`].
    fn default() -> Self {
        Self::new(Arc::new(HttpFetch::new()))
    }
}

impl SimpleClient {
    /// Creates a client around a fetch capability, with
    /// [`DefaultConstructor`] and no context.
    pub fn new(fetch: Arc<dyn RdfFetch>) -> Self {
        Self {
            fetch,
            constructor: Arc::new(DefaultConstructor),
            context: None,
        }
    }

    /// Replaces the default graph-object constructor.
    #[must_use]
    pub fn with_constructor(mut self, constructor: Arc<dyn ConstructSimple>) -> Self {
        self.constructor = constructor;
        self
    }

    /// Sets the default context for decoded graph objects.
    #[must_use]
    pub fn with_context(mut self, context: Context) -> Self {
        self.context = Some(context);
        self
    }

    /// Fetches `locator` and decodes the response into a graph object.
    ///
    /// The pipeline, in order: resolve the effective capability, build
    /// strategy and context (per-call option first, else the client);
    /// serialize a graph-object body through its own export surface; invoke
    /// the capability; then either return the response untouched
    /// (`raw_response`), pass non-RDF content through with the raw body
    /// stripped, or await the dataset and attach the decoded object to
    /// [`FetchResponse::simple`]. The decoded object's identifier is the
    /// `Content-Location` header value if present, else `locator`.
    ///
    /// All capability, parsing and construction failures propagate verbatim.
    pub async fn fetch(
        &self,
        locator: Option<&str>,
        options: FetchOptions,
    ) -> Result<FetchResponse, FetchError> {
        let FetchOptions {
            body,
            raw_request,
            raw_response,
            context,
            factory,
            constructor,
            fetch,
            method,
            headers,
        } = options;

        let capability = fetch.unwrap_or_else(|| Arc::clone(&self.fetch));
        let strategy = match (factory, constructor) {
            (Some(factory), _) => BuildStrategy::Factory(factory),
            (None, Some(constructor)) => BuildStrategy::Constructor(constructor),
            (None, None) => BuildStrategy::Constructor(Arc::clone(&self.constructor)),
        };
        let context = context.or_else(|| self.context.clone());

        let body = match (body, raw_request) {
            (None, _) => None,
            (Some(Body::Simple(simple)), false) => {
                Some(RequestBody::Stream(simple.graph().to_stream()))
            }
            (Some(Body::Raw(bytes)), true) => Some(RequestBody::Raw(bytes)),
            (Some(Body::Raw(_)), false) => {
                return Err(FetchError::Configuration(
                    "a raw body requires the raw_request flag".to_owned(),
                ))
            }
            (Some(Body::Simple(_)), true) => {
                return Err(FetchError::Configuration(
                    "raw_request cannot be combined with a graph-object body".to_owned(),
                ))
            }
        };

        let request = FetchRequest {
            method,
            headers,
            body,
        };
        let mut response = capability.fetch(locator, request).await?;

        if raw_response {
            debug!("raw_response is set, skipping decoding");
            return Ok(response);
        }

        let Some(dataset) = response.take_dataset() else {
            // Non-RDF content: without a decoded object the raw body slot
            // stays empty too.
            debug!("response carries no dataset, passing through");
            response.body = None;
            return Ok(response);
        };
        let dataset = dataset.await?;

        let identifier = match response
            .headers
            .get(CONTENT_LOCATION)
            .and_then(|value| value.to_str().ok())
        {
            Some(value) => value.to_owned(),
            None => locator.map(ToOwned::to_owned).ok_or_else(|| {
                FetchError::Configuration(
                    "no Content-Location header and no locator to identify the resource"
                        .to_owned(),
                )
            })?,
        };
        let identifier = NamedNode::new(identifier.clone())
            .map_err(|error| FetchError::InvalidIri {
                iri: identifier,
                error,
            })?;

        response.simple =
            Some(strategy.build(context.unwrap_or_default(), identifier, dataset)?);
        Ok(response)
    }
}
