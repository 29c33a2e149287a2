//! commission-core: contract-tier commission rules for practitioner billing.
//!
//! Pure computation only. Every operation is a deterministic function of its
//! inputs; there is no I/O, no async, and no shared mutable state beyond the
//! read-only contract registry.

mod calculator;
mod contract;
mod error;
mod estimate;
mod stats;

pub use calculator::{calculate_commission, simulate_commission, CommissionBreakdown};
pub use contract::{contract_registry, ContractConfig, ContractType};
pub use error::CommissionError;
pub use estimate::{
    break_even_point, compare_all_contracts, estimate_monthly_revenue, BreakEvenAnalysis,
    BreakEvenEntry, ContractComparison, MonthlyRevenueEstimate,
};
pub use stats::{summarize_transactions, CommissionStats, TransactionRecord};
