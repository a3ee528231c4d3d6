//! Populate [`simple_rdf::Simple`] graph objects from HTTP responses and
//! serialize them into HTTP request bodies.
//!
//! The entry point is the [`SimpleClient`] struct: it owns the fallback
//! configuration (the fetch capability, the graph-object constructor, an
//! optional context) and exposes the single [`SimpleClient::fetch`]
//! operation. The transport is an injected [`RdfFetch`] capability;
//! [`HttpFetch`] is the default one, HTTP over [`reqwest`] with RDF content
//! negotiation through [`oxrdfio`].

mod client;
mod error;
mod factory;
mod http;
mod options;
mod response;

pub use client::*;
pub use error::*;
pub use factory::*;
pub use options::*;
pub use response::*;

pub use crate::http::HttpFetch;
