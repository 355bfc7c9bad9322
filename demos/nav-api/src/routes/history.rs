use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Json, Response};
use mfnav_sdk::{export, DateRange, NavObservation};
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct HistoryParams {
    pub code: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub name: Option<String>,
}

impl HistoryParams {
    fn code(&self) -> Result<String, AppError> {
        self.code
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .ok_or_else(|| AppError::bad_request("Scheme code required"))
    }

    fn range(&self) -> Result<DateRange, AppError> {
        Ok(DateRange::parse(self.start.as_deref(), self.end.as_deref())?)
    }
}

/// GET /api/history?code=119551&start=2023-01-01&end=2023-12-31
///
/// NAV history, most recent first. Upstream failures come back as an empty
/// list.
pub async fn get_history(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HistoryParams>,
) -> Result<Json<Vec<NavObservation>>, AppError> {
    let code = params.code()?;
    let range = params.range()?;

    let data = state.sdk.history(&code, range).await?;
    Ok(Json(data))
}

/// GET /download?code=119551&start=2023-01-01&name=axis_bluechip
///
/// Same data as `/api/history` as a CSV attachment. Responds 404 when there
/// is nothing to export.
pub async fn download_history(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HistoryParams>,
) -> Result<Response, AppError> {
    let code = params.code()?;
    let range = params.range()?;

    let data = state.sdk.history(&code, range).await?;
    let csv = export::attachment(params.name.as_deref(), &data)?;

    Ok((
        [
            (header::CONTENT_TYPE, csv.content_type.to_string()),
            (header::CONTENT_DISPOSITION, csv.content_disposition()),
        ],
        csv.body,
    )
        .into_response())
}
