//! Monthly revenue estimation, tier comparison, and break-even analysis.
//!
//! These reporting operations are built purely from repeated
//! single-appointment calculations. Rounding to cents happens here and
//! nowhere else.

use crate::calculator::calculate_commission;
use crate::contract::ContractType;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Projected platform costs for one month of activity on a given tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyRevenueEstimate {
    pub gross_revenue: Decimal,
    pub monthly_fee: Decimal,
    pub total_commission: Decimal,
    pub net_revenue: Decimal,
    /// (monthly fee + commissions) as a percentage of gross; 0 when gross is 0.
    pub effective_commission_rate: Decimal,
}

/// One tier's row in a cross-tier cost comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractComparison {
    pub contract_type: ContractType,
    pub monthly_fee: Decimal,
    pub total_commission: Decimal,
    pub total_cost: Decimal,
    pub net_revenue: Decimal,
    pub effective_rate: Decimal,
}

/// Cumulative cost comparison row for one appointment count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakEvenEntry {
    pub appointments: u32,
    pub cost_a: Decimal,
    pub cost_b: Decimal,
    /// `cost_a - cost_b`; positive once contract B is cheaper.
    pub difference: Decimal,
}

/// Outcome of a two-tier break-even scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakEvenAnalysis {
    /// Smallest appointment count at which contract B costs strictly less
    /// than contract A; `None` when no crossing occurs within range.
    pub break_even_appointments: Option<u32>,
    pub comparison: Vec<BreakEvenEntry>,
}

/// Estimate one month of revenue on a tier.
///
/// Ordinals 1..=N stand for the month being simulated, so the free tier
/// applies to the leading appointments of this batch.
pub fn estimate_monthly_revenue(
    appointments_per_month: u32,
    average_price: Decimal,
    contract_type: ContractType,
) -> MonthlyRevenueEstimate {
    let config = contract_type.config();
    let gross_revenue = Decimal::from(appointments_per_month) * average_price;

    let total_commission: Decimal = (1..=appointments_per_month)
        .map(|n| calculate_commission(n, average_price, contract_type).commission_amount)
        .sum();

    let monthly_fee = config.monthly_fee;
    let net_revenue = gross_revenue - monthly_fee - total_commission;
    let effective_commission_rate = if gross_revenue.is_zero() {
        Decimal::ZERO
    } else {
        (monthly_fee + total_commission) / gross_revenue * Decimal::ONE_HUNDRED
    };

    MonthlyRevenueEstimate {
        gross_revenue: round_cents(gross_revenue),
        monthly_fee: round_cents(monthly_fee),
        total_commission: round_cents(total_commission),
        net_revenue: round_cents(net_revenue),
        effective_commission_rate: round_cents(effective_commission_rate),
    }
}

/// Run the monthly estimate across every comparable tier, in fixed
/// reporting order (standard is excluded, it bills like decouverte).
pub fn compare_all_contracts(
    appointments_per_month: u32,
    average_price: Decimal,
) -> Vec<ContractComparison> {
    ContractType::COMPARISON_ORDER
        .into_iter()
        .map(|contract_type| {
            let estimate =
                estimate_monthly_revenue(appointments_per_month, average_price, contract_type);
            ContractComparison {
                contract_type,
                monthly_fee: estimate.monthly_fee,
                total_commission: estimate.total_commission,
                total_cost: round_cents(estimate.monthly_fee + estimate.total_commission),
                net_revenue: estimate.net_revenue,
                effective_rate: estimate.effective_commission_rate,
            }
        })
        .collect()
}

/// Scan appointment volumes for the point where contract B becomes
/// strictly cheaper than contract A.
///
/// Costs accumulate from appointment count 4; commissions for ordinals
/// 1 through 3 are not summed at all (not computed-as-zero). This mirrors
/// how the platform has always reported the comparison and is kept as-is.
pub fn break_even_point(
    appointment_price: Decimal,
    contract_a: ContractType,
    contract_b: ContractType,
    max_appointments: u32,
) -> BreakEvenAnalysis {
    let mut cost_a = contract_a.config().monthly_fee;
    let mut cost_b = contract_b.config().monthly_fee;
    let mut break_even_appointments = None;
    let mut comparison = Vec::new();

    for appointments in 4..=max_appointments {
        cost_a += calculate_commission(appointments, appointment_price, contract_a)
            .commission_amount;
        cost_b += calculate_commission(appointments, appointment_price, contract_b)
            .commission_amount;

        if break_even_appointments.is_none() && cost_b < cost_a {
            break_even_appointments = Some(appointments);
        }

        comparison.push(BreakEvenEntry {
            appointments,
            cost_a: round_cents(cost_a),
            cost_b: round_cents(cost_b),
            difference: round_cents(cost_a - cost_b),
        });
    }

    BreakEvenAnalysis {
        break_even_appointments,
        comparison,
    }
}

pub(crate) fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
