//! Fault handlers - recording and retrieving fault records.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::error::HttpError;
use crate::state::AppState;
use faultdetect_core::{Fault, FaultServicePort as _, NewFault};

/// Record a new fault.
///
/// A body that fails to decode is a 400 carrying the decode message;
/// a storage failure is a 500 carrying the underlying message.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewFault>, JsonRejection>,
) -> Result<(StatusCode, Json<Fault>), HttpError> {
    let Json(new_fault) =
        payload.map_err(|rejection| HttpError::BadRequest(rejection.body_text()))?;

    let fault = state.faults.create_fault(new_fault).await?;
    Ok((StatusCode::CREATED, Json(fault)))
}

/// Retrieve a fault record by id.
///
/// Every failure (malformed id, absent record, storage error) collapses
/// to the same generic 404.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Fault>, HttpError> {
    let fault = state.faults.get_fault_by_id(&id).await.map_err(|err| {
        tracing::debug!(%id, %err, "fault lookup failed");
        HttpError::NotFound("Fault not found".to_string())
    })?;

    Ok(Json(fault))
}
