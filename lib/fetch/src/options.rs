use crate::{ConstructSimple, RdfFetch, SimpleFactory};
use futures::StreamExt;
use http::{HeaderMap, Method};
use simple_rdf::{BodyStream, Context, Simple};
use std::io;
use std::sync::Arc;

/// An outgoing request body, before serialization.
///
/// Exactly one representation is active at a time: a raw byte body requires
/// the `raw_request` flag, a graph-object body requires it to be unset.
pub enum Body {
    /// Bytes sent verbatim (`raw_request` must be set).
    Raw(Vec<u8>),
    /// A graph object serialized through its own export surface.
    Simple(Simple),
}

/// Per-call configuration of [`SimpleClient::fetch`](crate::SimpleClient::fetch).
///
/// Every field independently falls back to the client when absent. Transport
/// options (`method`, `headers`) are passed through to the fetch capability
/// without interpretation.
#[derive(Default)]
pub struct FetchOptions {
    /// The outgoing request body, if any.
    pub body: Option<Body>,
    /// Send the body verbatim, skipping graph serialization.
    pub raw_request: bool,
    /// Skip response decoding and return the capability's response untouched.
    pub raw_response: bool,
    /// The context for the decoded graph object.
    pub context: Option<Context>,
    /// A factory for the decoded graph object. Preferred over `constructor`.
    pub factory: Option<SimpleFactory>,
    /// A constructor for the decoded graph object.
    pub constructor: Option<Arc<dyn ConstructSimple>>,
    /// The fetch capability to use for this call.
    pub fetch: Option<Arc<dyn RdfFetch>>,
    /// The HTTP method, passed through to the capability.
    pub method: Method,
    /// Additional headers, passed through to the capability.
    pub headers: HeaderMap,
}

/// What the fetch capability receives: the pass-through transport options and
/// the body after the adapter's serialization step.
pub struct FetchRequest {
    /// The HTTP method.
    pub method: Method,
    /// The request headers.
    pub headers: HeaderMap,
    /// The request body, if any.
    pub body: Option<RequestBody>,
}

/// A request body as seen by the fetch capability.
pub enum RequestBody {
    /// Verbatim bytes from a raw request.
    Raw(Vec<u8>),
    /// The serialization stream of a graph-object body.
    Stream(BodyStream),
}

impl RequestBody {
    /// Collects the body into a single byte buffer.
    pub async fn into_bytes(self) -> io::Result<Vec<u8>> {
        match self {
            Self::Raw(bytes) => Ok(bytes),
            Self::Stream(mut stream) => {
                let mut bytes = Vec::new();
                while let Some(chunk) = stream.next().await {
                    bytes.extend_from_slice(&chunk?);
                }
                Ok(bytes)
            }
        }
    }
}
