use crate::dtos::{
    BreakEvenRequest, CalculateCommissionRequest, CommissionStatsRequest, CompareContractsRequest,
    EstimateMonthlyRevenueRequest, SimulateCommissionRequest,
};
use crate::error::AppError;
use crate::services::{record_calculation, record_operation};
use axum::{response::IntoResponse, Json};
use commission_core::{
    break_even_point, calculate_commission, compare_all_contracts, estimate_monthly_revenue,
    simulate_commission, summarize_transactions,
};
use validator::Validate;

/// Split one appointment's price between platform and practitioner.
pub async fn calculate(
    Json(payload): Json<CalculateCommissionRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let result = calculate_commission(
        payload.appointment_number,
        payload.appointment_price,
        payload.contract_type,
    );
    record_calculation(result.contract_type.as_str(), result.is_free);

    tracing::debug!(
        contract_type = %result.contract_type,
        appointment_number = result.appointment_number,
        is_free = result.is_free,
        "Commission calculated"
    );

    Ok(Json(result))
}

/// Run the single-appointment calculation over a list of ordinals.
pub async fn simulate(
    Json(payload): Json<SimulateCommissionRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    record_operation("simulate");

    let results = simulate_commission(
        payload.appointment_price,
        payload.contract_type,
        &payload.appointment_numbers,
    );

    Ok(Json(results))
}

/// Project one month of revenue on a tier.
pub async fn estimate(
    Json(payload): Json<EstimateMonthlyRevenueRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    record_operation("estimate");

    let estimate = estimate_monthly_revenue(
        payload.appointments_per_month,
        payload.average_price,
        payload.contract_type,
    );

    tracing::debug!(
        contract_type = %payload.contract_type,
        appointments_per_month = payload.appointments_per_month,
        "Monthly revenue estimated"
    );

    Ok(Json(estimate))
}

/// Cost comparison across every comparable tier.
pub async fn compare(
    Json(payload): Json<CompareContractsRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    record_operation("compare");

    let rows = compare_all_contracts(payload.appointments_per_month, payload.average_price);

    Ok(Json(rows))
}

/// Find the appointment volume where contract B undercuts contract A.
pub async fn break_even(
    Json(payload): Json<BreakEvenRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    record_operation("break_even");

    let analysis = break_even_point(
        payload.appointment_price,
        payload.contract_a,
        payload.contract_b,
        payload.max_appointments,
    );

    Ok(Json(analysis))
}

/// Aggregate a batch of settled transactions into summary statistics.
pub async fn stats(
    Json(payload): Json<CommissionStatsRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    record_operation("stats");

    let summary = summarize_transactions(&payload.records, payload.from, payload.to);

    Ok(Json(summary))
}
