//! Single-appointment commission split.

use crate::contract::ContractType;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Result of splitting one appointment's price between platform and
/// practitioner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionBreakdown {
    /// Amount retained by the platform. Never negative.
    pub commission_amount: Decimal,
    /// `appointment_price - commission_amount`. May be negative when a
    /// fixed minimum commission exceeds the price; that is a valid
    /// outcome, not clamped.
    pub practitioner_amount: Decimal,
    /// True when a free-appointment or free-tier rule zeroed the commission.
    pub is_free: bool,
    pub appointment_number: u32,
    pub contract_type: ContractType,
}

/// Compute the commission split for one appointment.
///
/// `appointment_number` is the practitioner's cumulative 1-based ordinal,
/// tracked by the caller; this function does not know about calendar
/// months. Amounts stay unrounded — rounding happens only in reporting
/// operations.
///
/// Rule order matters: the starter/pro free tier is checked before any
/// per-tier schedule.
pub fn calculate_commission(
    appointment_number: u32,
    appointment_price: Decimal,
    contract_type: ContractType,
) -> CommissionBreakdown {
    let config = contract_type.config();

    // Only starter and pro grant leading free appointments. Premium ends up
    // free too, but through its own schedule below, not this rule.
    let in_free_tier = matches!(contract_type, ContractType::Starter | ContractType::Pro)
        && appointment_number <= config.free_appointments_per_month;

    let (commission_amount, is_free) = if in_free_tier {
        (Decimal::ZERO, true)
    } else {
        match contract_type {
            // Standard bills exactly like decouverte: floor at the fixed
            // fee, then cap the percentage schedule.
            ContractType::Decouverte | ContractType::Standard => {
                let fixed = config.commission_fixed.unwrap_or(Decimal::ZERO);
                let mut commission = fixed.max(percentage_fee(appointment_price, config));
                if let Some(cap) = config.commission_cap {
                    commission = commission.min(cap);
                }
                (commission, false)
            }
            // Whichever is cheaper for the practitioner; the configured cap
            // is intentionally not applied on this schedule.
            ContractType::Starter => {
                let fixed = config.commission_fixed.unwrap_or(Decimal::ZERO);
                (fixed.min(percentage_fee(appointment_price, config)), false)
            }
            // Flat fee, price-independent.
            ContractType::Pro => (config.commission_fixed.unwrap_or(Decimal::ZERO), false),
            // Commission-free at any volume; the monthly fee is the product.
            ContractType::Premium => (Decimal::ZERO, true),
        }
    };

    CommissionBreakdown {
        commission_amount,
        practitioner_amount: appointment_price - commission_amount,
        is_free,
        appointment_number,
        contract_type,
    }
}

/// Map [`calculate_commission`] over a list of ordinals, preserving order.
pub fn simulate_commission(
    appointment_price: Decimal,
    contract_type: ContractType,
    appointment_numbers: &[u32],
) -> Vec<CommissionBreakdown> {
    appointment_numbers
        .iter()
        .map(|&n| calculate_commission(n, appointment_price, contract_type))
        .collect()
}

fn percentage_fee(price: Decimal, config: &crate::contract::ContractConfig) -> Decimal {
    match config.commission_percentage {
        Some(pct) => price * pct / Decimal::ONE_HUNDRED,
        None => Decimal::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(value: i64) -> Decimal {
        Decimal::new(value, 0)
    }

    #[test]
    fn decouverte_fixed_floor_wins_on_low_prices() {
        let result = calculate_commission(1, dec(20), ContractType::Decouverte);
        assert_eq!(result.commission_amount, dec(10));
        assert_eq!(result.practitioner_amount, dec(10));
        assert!(!result.is_free);
    }

    #[test]
    fn decouverte_percentage_wins_on_mid_prices() {
        let result = calculate_commission(1, dec(150), ContractType::Decouverte);
        assert_eq!(result.commission_amount, dec(18));
    }

    #[test]
    fn decouverte_cap_bounds_high_prices() {
        // 12% of 300 is 36, capped at 25.
        let result = calculate_commission(1, dec(300), ContractType::Decouverte);
        assert_eq!(result.commission_amount, dec(25));
        assert_eq!(result.practitioner_amount, dec(275));
    }

    #[test]
    fn zero_price_keeps_fixed_minimum_and_goes_negative() {
        let result = calculate_commission(1, Decimal::ZERO, ContractType::Decouverte);
        assert_eq!(result.commission_amount, dec(10));
        assert_eq!(result.practitioner_amount, dec(-10));
        assert!(!result.is_free);
    }

    #[test]
    fn starter_takes_cheaper_of_fixed_and_percentage() {
        // Appointment 3 is past starter's 2 free appointments.
        let result = calculate_commission(3, dec(60), ContractType::Starter);
        assert_eq!(result.commission_amount, Decimal::new(48, 1));
    }

    #[test]
    fn starter_cap_is_not_applied() {
        // min(6, 40) = 6; the configured 25 cap never enters this schedule.
        let result = calculate_commission(3, dec(500), ContractType::Starter);
        assert_eq!(result.commission_amount, dec(6));
    }

    #[test]
    fn starter_free_tier_covers_leading_appointments() {
        for price in [dec(0), dec(30), dec(500)] {
            for n in 1..=2 {
                let result = calculate_commission(n, price, ContractType::Starter);
                assert_eq!(result.commission_amount, Decimal::ZERO);
                assert!(result.is_free);
                assert_eq!(result.practitioner_amount, price);
            }
        }
    }

    #[test]
    fn pro_charges_flat_fee_past_free_tier() {
        for price in [dec(30), dec(60), dec(100), dec(200), dec(500)] {
            let result = calculate_commission(5, price, ContractType::Pro);
            assert_eq!(result.commission_amount, dec(3));
            assert_eq!(result.practitioner_amount, price - dec(3));
            assert!(!result.is_free);
        }
    }

    #[test]
    fn pro_free_tier_covers_first_four() {
        for n in 1..=4 {
            let result = calculate_commission(n, dec(80), ContractType::Pro);
            assert!(result.is_free);
            assert_eq!(result.commission_amount, Decimal::ZERO);
        }
    }

    #[test]
    fn premium_is_always_free() {
        for n in [1, 5, 50, 1000] {
            let result = calculate_commission(n, dec(250), ContractType::Premium);
            assert_eq!(result.commission_amount, Decimal::ZERO);
            assert!(result.is_free);
            assert_eq!(result.practitioner_amount, dec(250));
        }
    }

    #[test]
    fn decouverte_gets_no_free_appointments() {
        let result = calculate_commission(1, dec(100), ContractType::Decouverte);
        assert!(!result.is_free);
        assert_eq!(result.commission_amount, dec(12));
    }

    #[test]
    fn simulate_preserves_ordinal_order() {
        let results = simulate_commission(dec(100), ContractType::Pro, &[3, 1, 7]);
        let ordinals: Vec<u32> = results.iter().map(|r| r.appointment_number).collect();
        assert_eq!(ordinals, vec![3, 1, 7]);
        assert!(results[0].is_free);
        assert!(results[1].is_free);
        assert_eq!(results[2].commission_amount, dec(3));
    }
}
