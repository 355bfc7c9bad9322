use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Json;
use mfnav_sdk::SchemeEntry;
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// GET /api/search?q=bluechip
///
/// Case-insensitive scheme name search. A missing or empty `q` returns an
/// empty list without touching the directory; whitespace is searched as-is.
pub async fn search_schemes(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<SchemeEntry>>, AppError> {
    let query = params.q.unwrap_or_default();
    if query.is_empty() {
        return Ok(Json(Vec::new()));
    }

    let results = state.sdk.search(&query).await?;
    Ok(Json(results))
}
