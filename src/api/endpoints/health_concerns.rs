//! Health-concern lookup endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::db::repository;
use crate::models::Specialty;

#[derive(Serialize)]
pub struct ConcernsResponse {
    pub concerns: Vec<Specialty>,
}

/// `GET /health-concerns` — the full specialty catalog.
pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<ConcernsResponse>, ApiError> {
    let conn = ctx.state.open_db()?;
    let concerns = repository::list_specialties(&conn)?;
    Ok(Json(ConcernsResponse { concerns }))
}
