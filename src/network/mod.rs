//! HTTP networking module
//!
//! Provides the blocking and async transports used to reach the Serper API.

mod client;
mod request;

pub use client::{BlockingHttpClient, HttpClient};
pub use request::{decode_response, PostRequest};
