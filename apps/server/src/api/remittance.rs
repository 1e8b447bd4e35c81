use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::{CalculateTransfersRequest, TrendQuery},
};
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    routing::{get, post},
    Json, Router,
};
use finmate_core::{
    remittance::{CalculateTransfersResponse, ServiceProfile, TrendResponse},
    Error as CoreError,
};

#[utoipa::path(get, path = "/api/v1/remittance/services", responses((status = 200, description = "Configured remittance services")))]
pub async fn list_services(State(state): State<Arc<AppState>>) -> Json<Vec<ServiceProfile>> {
    Json(state.remittance_service.service_profiles().to_vec())
}

#[utoipa::path(
    post,
    path = "/api/v1/remittance/calculate",
    request_body = CalculateTransfersRequest,
    responses(
        (status = 200, description = "Services ranked by total cost"),
        (status = 400, description = "Invalid amount or unsupported currency")
    )
)]
pub async fn calculate_transfers(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CalculateTransfersRequest>, JsonRejection>,
) -> ApiResult<Json<CalculateTransfersResponse>> {
    let Json(body) = payload?;
    let amount = body
        .amount
        .ok_or_else(|| CoreError::InvalidAmount("amount is required".into()))?;
    let to_currency = body
        .to_currency
        .ok_or_else(|| ApiError::BadRequest("Missing required field 'toCurrency'".into()))?;
    let response = state
        .remittance_service
        .calculate_transfers(amount, &to_currency)
        .await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/v1/remittance/trends",
    params(TrendQuery),
    responses(
        (status = 200, description = "Rate history with trend analysis"),
        (status = 400, description = "Unsupported currency or invalid window")
    )
)]
pub async fn get_trends(
    State(state): State<Arc<AppState>>,
    query: Result<Query<TrendQuery>, QueryRejection>,
) -> ApiResult<Json<TrendResponse>> {
    let Query(q) = query?;
    let currency = q
        .currency
        .ok_or_else(|| ApiError::BadRequest("Missing required query parameter 'currency'".into()))?;
    let response = state.remittance_service.get_trend(&currency, q.days).await?;
    Ok(Json(response))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/remittance/services", get(list_services))
        .route("/remittance/calculate", post(calculate_transfers))
        .route("/remittance/trends", get(get_trends))
}
