//! Contract tiers and their pricing configuration.

use crate::error::CommissionError;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Pricing tier a practitioner is enrolled under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractType {
    Decouverte,
    Standard,
    Starter,
    Pro,
    Premium,
}

impl ContractType {
    /// All enrollable tiers.
    pub const ALL: [ContractType; 5] = [
        ContractType::Decouverte,
        ContractType::Standard,
        ContractType::Starter,
        ContractType::Pro,
        ContractType::Premium,
    ];

    /// Tiers included in cost comparisons, in reporting order.
    /// Standard is excluded: it bills identically to Decouverte.
    pub const COMPARISON_ORDER: [ContractType; 4] = [
        ContractType::Decouverte,
        ContractType::Starter,
        ContractType::Pro,
        ContractType::Premium,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContractType::Decouverte => "decouverte",
            ContractType::Standard => "standard",
            ContractType::Starter => "starter",
            ContractType::Pro => "pro",
            ContractType::Premium => "premium",
        }
    }

    /// Pricing configuration for this tier.
    ///
    /// Exactly one config exists per tier; the registry is initialized once
    /// and never mutated, so the returned reference is safe to share freely.
    pub fn config(&self) -> &'static ContractConfig {
        match self {
            ContractType::Decouverte => &DECOUVERTE,
            ContractType::Standard => &STANDARD,
            ContractType::Starter => &STARTER,
            ContractType::Pro => &PRO,
            ContractType::Premium => &PREMIUM,
        }
    }
}

impl fmt::Display for ContractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContractType {
    type Err = CommissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "decouverte" => Ok(ContractType::Decouverte),
            "standard" => Ok(ContractType::Standard),
            "starter" => Ok(ContractType::Starter),
            "pro" => Ok(ContractType::Pro),
            "premium" => Ok(ContractType::Premium),
            other => Err(CommissionError::UnknownContractType(other.to_string())),
        }
    }
}

/// Immutable pricing configuration for a contract tier.
///
/// All monetary amounts are in euros. `commission_percentage` is expressed
/// in whole points (12 means 12%).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractConfig {
    pub monthly_fee: Decimal,
    pub commission_fixed: Option<Decimal>,
    pub commission_percentage: Option<Decimal>,
    pub commission_cap: Option<Decimal>,
    pub max_appointments_per_month: Option<u32>,
    pub free_appointments_per_month: u32,
}

static DECOUVERTE: Lazy<ContractConfig> = Lazy::new(|| ContractConfig {
    monthly_fee: Decimal::ZERO,
    commission_fixed: Some(Decimal::new(10, 0)),
    commission_percentage: Some(Decimal::new(12, 0)),
    commission_cap: Some(Decimal::new(25, 0)),
    max_appointments_per_month: Some(10),
    free_appointments_per_month: 0,
});

// Same values as decouverte: standard keeps the pay-as-you-go commission
// schedule but without the monthly booking ceiling semantics enforced
// elsewhere in the platform.
static STANDARD: Lazy<ContractConfig> = Lazy::new(|| ContractConfig {
    monthly_fee: Decimal::ZERO,
    commission_fixed: Some(Decimal::new(10, 0)),
    commission_percentage: Some(Decimal::new(12, 0)),
    commission_cap: Some(Decimal::new(25, 0)),
    max_appointments_per_month: Some(10),
    free_appointments_per_month: 0,
});

static STARTER: Lazy<ContractConfig> = Lazy::new(|| ContractConfig {
    monthly_fee: Decimal::new(49, 0),
    commission_fixed: Some(Decimal::new(6, 0)),
    commission_percentage: Some(Decimal::new(8, 0)),
    commission_cap: Some(Decimal::new(25, 0)),
    max_appointments_per_month: None,
    free_appointments_per_month: 2,
});

static PRO: Lazy<ContractConfig> = Lazy::new(|| ContractConfig {
    monthly_fee: Decimal::new(99, 0),
    commission_fixed: Some(Decimal::new(3, 0)),
    commission_percentage: None,
    commission_cap: None,
    max_appointments_per_month: None,
    free_appointments_per_month: 4,
});

static PREMIUM: Lazy<ContractConfig> = Lazy::new(|| ContractConfig {
    monthly_fee: Decimal::new(149, 0),
    commission_fixed: None,
    commission_percentage: None,
    commission_cap: None,
    max_appointments_per_month: None,
    free_appointments_per_month: 0,
});

/// Iterate the full contract registry in enrollment order.
pub fn contract_registry() -> impl Iterator<Item = (ContractType, &'static ContractConfig)> {
    ContractType::ALL.into_iter().map(|t| (t, t.config()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_every_tier_through_from_str() {
        for tier in ContractType::ALL {
            assert_eq!(tier.as_str().parse::<ContractType>().unwrap(), tier);
        }
    }

    #[test]
    fn rejects_unknown_tier_names() {
        let err = "platine".parse::<ContractType>().unwrap_err();
        assert!(matches!(err, CommissionError::UnknownContractType(s) if s == "platine"));
    }

    #[test]
    fn registry_has_one_config_per_tier() {
        assert_eq!(contract_registry().count(), ContractType::ALL.len());
    }

    #[test]
    fn standard_config_matches_decouverte() {
        assert_eq!(
            ContractType::Standard.config(),
            ContractType::Decouverte.config()
        );
    }

    #[test]
    fn serde_uses_snake_case_names() {
        let json = serde_json::to_string(&ContractType::Decouverte).unwrap();
        assert_eq!(json, "\"decouverte\"");
        let parsed: ContractType = serde_json::from_str("\"pro\"").unwrap();
        assert_eq!(parsed, ContractType::Pro);
    }
}
