//! `/api/log` handlers and response bodies.

use std::time::Instant;

use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::Json;
use bytes::Bytes;
use serde::Serialize;

use healthlog_core::error::HealthLogError;
use healthlog_core::StoredLogEntry;

use super::error::ApiError;
use crate::app_state::AppState;

const SUBMIT_OK_MSG: &str = "Health data logged successfully!";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub success: bool,
    pub message: &'static str,
    pub data: StoredLogEntry,
    pub total_logs: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse {
    pub success: bool,
    pub logs: Vec<StoredLogEntry>,
    pub total_logs: usize,
}

/// POST /api/log
pub async fn submit_log(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<SubmitResponse>, ApiError> {
    let started = Instant::now();

    let res = match body {
        Ok(body) => state.logs().submit(&body).await,
        Err(rej) => Err(HealthLogError::Processing(format!("read body failed: {rej}"))),
    };

    let metrics = state.metrics();
    metrics
        .request_duration
        .observe(&[("route", "submit")], started.elapsed());

    match res {
        Ok(appended) => {
            metrics.submissions.inc(&[("outcome", "accepted")]);
            Ok(Json(SubmitResponse {
                success: true,
                message: SUBMIT_OK_MSG,
                data: appended.entry,
                total_logs: appended.total,
            }))
        }
        Err(e) => {
            let outcome = match e {
                HealthLogError::Validation(_) => "rejected",
                _ => "failed",
            };
            metrics.submissions.inc(&[("outcome", outcome)]);
            Err(ApiError::submit(e))
        }
    }
}

/// GET /api/log
pub async fn list_logs(State(state): State<AppState>) -> Result<Json<ListResponse>, ApiError> {
    let started = Instant::now();
    let res = state.logs().list().await;

    let metrics = state.metrics();
    metrics
        .request_duration
        .observe(&[("route", "list")], started.elapsed());

    match res {
        Ok(logs) => {
            metrics.fetches.inc(&[("outcome", "ok")]);
            let total_logs = logs.len();
            Ok(Json(ListResponse {
                success: true,
                logs,
                total_logs,
            }))
        }
        Err(e) => {
            metrics.fetches.inc(&[("outcome", "failed")]);
            Err(ApiError::fetch(e))
        }
    }
}
