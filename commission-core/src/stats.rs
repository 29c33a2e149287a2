//! Aggregation over persisted commission transactions.
//!
//! The transaction store itself lives elsewhere; callers hand this module
//! the rows and get counts and sums back.

use crate::estimate::round_cents;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One settled appointment as recorded by the transaction store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub occurred_utc: DateTime<Utc>,
    pub is_free_appointment: bool,
    pub amount_platform_commission: Decimal,
    pub amount_practitioner: Decimal,
}

/// Summed commission activity over a set of transactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionStats {
    pub total_appointments: u64,
    pub free_appointments: u64,
    pub charged_appointments: u64,
    pub total_commission: Decimal,
    pub total_practitioner_amount: Decimal,
}

/// Fold transaction records into summary statistics.
///
/// `from`/`to` bound the inclusive date range; either side may be open.
pub fn summarize_transactions(
    records: &[TransactionRecord],
    from: Option<DateTime<Utc>>,
    to: Option<DateTime<Utc>>,
) -> CommissionStats {
    let mut total_appointments = 0u64;
    let mut free_appointments = 0u64;
    let mut total_commission = Decimal::ZERO;
    let mut total_practitioner_amount = Decimal::ZERO;

    for record in records {
        if from.is_some_and(|start| record.occurred_utc < start)
            || to.is_some_and(|end| record.occurred_utc > end)
        {
            continue;
        }
        total_appointments += 1;
        if record.is_free_appointment {
            free_appointments += 1;
        }
        total_commission += record.amount_platform_commission;
        total_practitioner_amount += record.amount_practitioner;
    }

    CommissionStats {
        total_appointments,
        free_appointments,
        charged_appointments: total_appointments - free_appointments,
        total_commission: round_cents(total_commission),
        total_practitioner_amount: round_cents(total_practitioner_amount),
    }
}
