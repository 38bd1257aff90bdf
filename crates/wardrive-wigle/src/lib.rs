//! Paginated client for the WiGLE network-search API.
//!
//! [`WigleClient::search_area`] pages through the search endpoint and
//! returns a best-effort set of observed networks: transient failures are
//! retried in place and, once the retry budget is gone, whatever has been
//! collected so far is returned rather than an error.

mod client;
mod error;
mod fetch;
mod types;

pub use client::WigleClient;
pub use error::WigleError;
pub use types::{SearchResponse, WigleNetwork};
