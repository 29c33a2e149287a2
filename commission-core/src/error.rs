//! Error taxonomy for commission calculations.

use thiserror::Error;

/// Calculation errors. There is nothing transient here: every variant
/// indicates a caller bug and is surfaced immediately, never retried.
#[derive(Debug, Error)]
pub enum CommissionError {
    /// The supplied contract type string is not an enrollable tier.
    /// Raised only at the string boundary; a parsed `ContractType` is
    /// total over every operation.
    #[error("unknown contract type: {0}")]
    UnknownContractType(String),
}
