//! Services module for commission-service.

pub mod metrics;

pub use metrics::{
    get_metrics, init_metrics, record_calculation, record_error, record_http_request,
    record_operation,
};
