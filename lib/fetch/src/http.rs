use crate::{FetchError, FetchRequest, FetchResponse, RdfFetch, RequestBody};
use async_trait::async_trait;
use http::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use oxrdf::Dataset;
use oxrdfio::{RdfFormat, RdfParser};
use tracing::debug;

/// The `Accept` header sent when the caller did not set one: every media type
/// the parser side understands.
const ACCEPT_RDF: &str =
    "text/turtle, application/n-triples, application/n-quads, application/trig, application/rdf+xml";

/// Fills in the default `Accept` header when the caller did not set one.
fn with_default_accept(mut headers: HeaderMap) -> HeaderMap {
    if !headers.contains_key(ACCEPT) {
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_RDF));
    }
    headers
}

/// Maps the response `Content-Type` to the RDF format it announces, if any.
///
/// A response without this mapping is non-RDF content and passes through
/// undecoded.
fn response_format(headers: &HeaderMap) -> Option<RdfFormat> {
    headers
        .get(CONTENT_TYPE)?
        .to_str()
        .ok()
        .and_then(RdfFormat::from_media_type)
}

/// Parses a response payload into a dataset, with the request locator as base
/// IRI.
async fn parse_dataset(
    format: RdfFormat,
    base: String,
    bytes: Vec<u8>,
) -> Result<Dataset, FetchError> {
    let parser = RdfParser::from_format(format)
        .with_base_iri(base.clone())
        .map_err(|error| FetchError::InvalidIri { iri: base, error })?;
    let mut dataset = Dataset::new();
    for quad in parser.for_reader(bytes.as_slice()) {
        let quad = quad?;
        dataset.insert(&quad);
    }
    Ok(dataset)
}

/// The default fetch capability: HTTP over [`reqwest`].
///
/// The response `Content-Type` decides whether the payload is RDF: a media
/// type known to [`RdfFormat`] yields a response with a lazy dataset accessor
/// (parsed with the request locator as base IRI), anything else yields a
/// non-RDF response carrying the raw bytes.
pub struct HttpFetch {
    client: reqwest::Client,
}

impl HttpFetch {
    /// Creates a capability with a fresh [`reqwest::Client`].
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    /// Creates a capability around an existing client, keeping its connection
    /// pool and middleware configuration.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for HttpFetch {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RdfFetch for HttpFetch {
    async fn fetch(
        &self,
        locator: Option<&str>,
        request: FetchRequest,
    ) -> Result<FetchResponse, FetchError> {
        let locator = locator.ok_or_else(|| {
            FetchError::Configuration("the HTTP fetch capability requires a locator".to_owned())
        })?;

        let headers = with_default_accept(request.headers);

        let mut builder = self.client.request(request.method, locator).headers(headers);
        builder = match request.body {
            Some(RequestBody::Raw(bytes)) => builder.body(bytes),
            Some(RequestBody::Stream(stream)) => builder.body(reqwest::Body::wrap_stream(stream)),
            None => builder,
        };

        let response = builder.send().await.map_err(FetchError::transport)?;
        let status = response.status();
        let headers = response.headers().clone();

        let result = match response_format(&headers) {
            Some(format) => {
                debug!(locator, media_type = format.media_type(), "response is RDF content");
                let base = locator.to_owned();
                FetchResponse::new(status)
                    .with_headers(headers)
                    .with_dataset(async move {
                        let bytes = response.bytes().await.map_err(FetchError::transport)?;
                        parse_dataset(format, base, bytes.to_vec()).await
                    })
            }
            None => {
                debug!(locator, "response is not RDF content");
                let bytes = response.bytes().await.map_err(FetchError::transport)?;
                FetchResponse::new(status)
                    .with_headers(headers)
                    .with_body(bytes.to_vec())
            }
        };
        Ok(result)
    }
}

#[cfg(test)]
#[allow(clippy::panic_in_result_fn)]
mod tests {
    use super::*;
    use oxrdf::NamedNode;

    fn headers_with_content_type(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn known_media_types_announce_rdf_content() {
        assert_eq!(
            response_format(&headers_with_content_type("application/n-triples")),
            Some(RdfFormat::NTriples)
        );
        assert_eq!(
            response_format(&headers_with_content_type("text/turtle; charset=utf-8")),
            Some(RdfFormat::Turtle)
        );
    }

    #[test]
    fn unknown_media_types_are_not_rdf_content() {
        assert_eq!(
            response_format(&headers_with_content_type("text/html")),
            None
        );
        assert_eq!(response_format(&HeaderMap::new()), None);
    }

    #[test]
    fn the_accept_header_is_filled_in() {
        let headers = with_default_accept(HeaderMap::new());
        assert_eq!(
            headers.get(ACCEPT),
            Some(&HeaderValue::from_static(ACCEPT_RDF))
        );
    }

    #[test]
    fn a_caller_accept_header_is_kept() {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/ld+json"));

        let headers = with_default_accept(headers);
        assert_eq!(
            headers.get(ACCEPT),
            Some(&HeaderValue::from_static("application/ld+json"))
        );
    }

    #[tokio::test]
    async fn payloads_parse_into_datasets() -> Result<(), FetchError> {
        let body =
            b"<http://example.org/subject> <http://example.org/predicate> \"object\" .\n";

        let dataset = parse_dataset(
            RdfFormat::NTriples,
            "http://example.org/receive-body".to_owned(),
            body.to_vec(),
        )
        .await?;

        assert_eq!(dataset.len(), 1);
        let quad = dataset.iter().next().unwrap();
        assert_eq!(
            quad.subject,
            NamedNode::new_unchecked("http://example.org/subject").as_ref().into()
        );
        Ok(())
    }

    #[tokio::test]
    async fn relative_iris_resolve_against_the_locator() -> Result<(), FetchError> {
        let body = b"<> <http://example.org/predicate> \"object\" .\n";

        let dataset = parse_dataset(
            RdfFormat::Turtle,
            "http://example.org/receive-body".to_owned(),
            body.to_vec(),
        )
        .await?;

        let quad = dataset.iter().next().unwrap();
        assert_eq!(
            quad.subject,
            NamedNode::new_unchecked("http://example.org/receive-body")
                .as_ref()
                .into()
        );
        Ok(())
    }

    #[tokio::test]
    async fn an_invalid_base_iri_is_rejected() {
        let result =
            parse_dataset(RdfFormat::NTriples, "not an iri".to_owned(), Vec::new()).await;

        assert!(matches!(result, Err(FetchError::InvalidIri { .. })));
    }
}
