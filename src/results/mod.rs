//! Result types and normalization
//!
//! Turns provider-specific payloads into the uniform record handed to callers.

mod normalize;
mod types;

pub use normalize::normalize;
pub use types::*;
