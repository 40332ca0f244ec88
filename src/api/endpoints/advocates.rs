//! Advocate search endpoint.
//!
//! `GET /advocates?q=&healthConcerns=&city=` — the wizard's results fetch.
//! All parameters are optional; malformed or blank values are treated as
//! "no filter" rather than an error.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::db::repository;
use crate::models::{Advocate, AdvocateFilter};

#[derive(Deserialize)]
pub struct AdvocateListQuery {
    /// Free-text name query, whitespace-tokenized.
    pub q: Option<String>,
    /// Comma-separated list of exact specialty names.
    #[serde(rename = "healthConcerns")]
    pub health_concerns: Option<String>,
    /// City substring, case-insensitive.
    pub city: Option<String>,
}

#[derive(Serialize)]
pub struct AdvocatesResponse {
    pub advocates: Vec<Advocate>,
}

/// `GET /advocates` — filtered directory search.
pub async fn list(
    State(ctx): State<ApiContext>,
    Query(query): Query<AdvocateListQuery>,
) -> Result<Json<AdvocatesResponse>, ApiError> {
    let filter = AdvocateFilter::from_params(
        query.q.as_deref(),
        query.city.as_deref(),
        query.health_concerns.as_deref(),
    );

    let conn = ctx.state.open_db()?;
    let advocates = repository::search_advocates(&conn, &filter)?;

    tracing::debug!(
        results = advocates.len(),
        constrained = !filter.is_unconstrained(),
        "advocate search"
    );

    Ok(Json(AdvocatesResponse { advocates }))
}
