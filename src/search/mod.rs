//! Search execution module
//!
//! Builds Serper requests and runs them in blocking or async mode.

mod executor;
mod models;

pub use executor::SerperClient;
pub use models::*;
