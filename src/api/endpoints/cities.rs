//! City lookup endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::db::repository;

#[derive(Serialize)]
pub struct CitiesResponse {
    pub cities: Vec<String>,
}

/// `GET /cities` — distinct city values among advocates.
pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<CitiesResponse>, ApiError> {
    let conn = ctx.state.open_db()?;
    let cities = repository::distinct_cities(&conn)?;
    Ok(Json(CitiesResponse { cities }))
}
