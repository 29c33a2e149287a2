use crate::dtos::ContractDescriptor;
use crate::error::AppError;
use axum::{extract::Path, response::IntoResponse, Json};
use commission_core::{contract_registry, ContractType};

/// List every contract tier with its pricing configuration. The registry
/// is immutable, so this is a constant payload.
pub async fn list_contracts() -> impl IntoResponse {
    let contracts: Vec<ContractDescriptor> = contract_registry()
        .map(|(contract_type, config)| ContractDescriptor {
            contract_type,
            config: config.clone(),
        })
        .collect();

    Json(contracts)
}

/// Look up a single tier by name. Unknown names surface the core's
/// `UnknownContractType` as a 400.
pub async fn get_contract(
    Path(contract_type): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let contract_type: ContractType = contract_type.parse()?;

    Ok(Json(ContractDescriptor {
        contract_type,
        config: contract_type.config().clone(),
    }))
}
