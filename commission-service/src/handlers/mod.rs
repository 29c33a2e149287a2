//! HTTP handlers for commission-service.

pub mod commissions;
pub mod contracts;
pub mod health;
