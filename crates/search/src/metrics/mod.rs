//! Search observability.

#[allow(clippy::module_inception)]
mod metrics;

pub use metrics::*;
