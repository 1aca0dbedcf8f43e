//! External study-resource lookup for studytrack.
//!
//! Calls a remote web-search API over HTTP and maps its nested result list
//! to `{title, url}` pairs. One request per lookup; no timeout, retry, or
//! caching.

mod client;
mod error;

pub use client::{ResourceClient, ResourceLink};
pub use error::ResourceError;
