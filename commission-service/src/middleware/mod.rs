//! HTTP middleware: request-id propagation and request metrics.

pub mod metrics;
pub mod request_id;

pub use metrics::metrics_middleware;
pub use request_id::request_id_middleware;
