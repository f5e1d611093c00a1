//! Clients for the upstream source-hosting API.

mod upstream_client;

pub use upstream_client::{HttpUpstreamClient, UpstreamClient, UpstreamError};

#[cfg(any(test, feature = "test-utils"))]
pub use upstream_client::MockUpstreamClient;
