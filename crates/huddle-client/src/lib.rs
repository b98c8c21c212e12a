//! Service clients for the Huddle backend.
//!
//! Two implementations of the core service traits: [`HttpBackendClient`]
//! talks to the REST backend, [`SampleCatalog`] serves bundled demo data
//! for offline use and as a fallback when the backend is unreachable.

pub mod http;
pub mod samples;

pub use http::HttpBackendClient;
pub use samples::SampleCatalog;
