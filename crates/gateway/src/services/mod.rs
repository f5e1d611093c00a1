//! Application services layer.
//!
//! Services depend on the [`UpstreamClient`](crate::clients::UpstreamClient)
//! abstraction so tests can substitute the upstream API.

mod user_detail_service;

pub use user_detail_service::{UserDetailAggregator, UserDetailService};

#[cfg(any(test, feature = "test-utils"))]
pub use user_detail_service::MockUserDetailService;
