//! Request and response DTOs for the commission endpoints.
//!
//! Responses reuse the commission-core value types directly; only requests
//! need their own shapes (plus validation).

use chrono::{DateTime, Utc};
use commission_core::{ContractConfig, ContractType, TransactionRecord};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CalculateCommissionRequest {
    /// Cumulative 1-based appointment ordinal, tracked by the caller.
    #[validate(range(min = 1))]
    pub appointment_number: u32,
    pub appointment_price: Decimal,
    pub contract_type: ContractType,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SimulateCommissionRequest {
    pub appointment_price: Decimal,
    pub contract_type: ContractType,
    #[validate(length(min = 1))]
    pub appointment_numbers: Vec<u32>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct EstimateMonthlyRevenueRequest {
    #[validate(range(max = 1000))]
    pub appointments_per_month: u32,
    pub average_price: Decimal,
    pub contract_type: ContractType,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CompareContractsRequest {
    #[validate(range(max = 1000))]
    pub appointments_per_month: u32,
    pub average_price: Decimal,
}

#[derive(Debug, Deserialize, Validate)]
pub struct BreakEvenRequest {
    pub appointment_price: Decimal,
    pub contract_a: ContractType,
    pub contract_b: ContractType,
    #[validate(range(min = 1, max = 500))]
    pub max_appointments: u32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CommissionStatsRequest {
    pub records: Vec<TransactionRecord>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

/// One contract tier with its pricing configuration, as listed by the
/// registry endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ContractDescriptor {
    pub contract_type: ContractType,
    #[serde(flatten)]
    pub config: ContractConfig,
}
