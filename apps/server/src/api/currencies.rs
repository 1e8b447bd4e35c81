use std::sync::Arc;

use crate::main_lib::AppState;
use axum::{extract::State, routing::get, Json, Router};
use finmate_core::CurrencyInfo;

#[utoipa::path(get, path = "/api/v1/currencies", responses((status = 200, description = "Supported target currencies")))]
pub async fn list_currencies(State(state): State<Arc<AppState>>) -> Json<Vec<CurrencyInfo>> {
    Json(state.remittance_service.supported_currencies())
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/currencies", get(list_currencies))
}
