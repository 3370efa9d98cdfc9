//! HTTP request handlers for the shift pay API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    routing::{delete, get, post, put},
};
use chrono::{NaiveDate, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    IncomeReport, YearGrid, YearlyTotals, aggregate_month, build_year_grid, compute_streak,
    elapsed_hours, income_report, rollup_year,
};
use crate::error::EngineError;
use crate::models::{ManualWorkRecord, MonthPeriod, MonthlyTotals, WorkRecord};
use crate::store::{save_manual_record, save_monthly_record};

use super::request::{
    AggregateRequest, ClassifyRequest, IncomeReportRequest, RollupQuery, SaveWorkRecordRequest,
    ShiftHoursRequest, StreakRequest,
};
use super::response::{
    ApiErrorResponse, ClassifyResponse, HealthResponse, HoursResponse, StreakResponse,
};
use super::state::AppState;

type ApiResult<T> = Result<Json<T>, ApiErrorResponse>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/shifts/hours", post(shift_hours_handler))
        .route("/shifts/classify", post(classify_handler))
        .route("/months/aggregate", post(aggregate_handler))
        .route(
            "/work-records",
            post(save_work_record_handler).get(list_work_records_handler),
        )
        .route("/work-records/manual", put(save_manual_record_handler))
        .route("/work-records/rollup", get(rollup_handler))
        .route("/work-records/grid", get(grid_handler))
        .route("/work-records/:id", delete(delete_work_record_handler))
        .route("/attendance/streak", post(streak_handler))
        .route("/income/report", post(income_report_handler))
        .with_state(state)
}

fn parse_body<T>(
    correlation_id: Uuid,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, ApiErrorResponse> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| ApiErrorResponse::from_json_rejection(correlation_id, rejection))
}

fn failure(correlation_id: Uuid, err: EngineError) -> ApiErrorResponse {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    err.into()
}

fn today_or_now(today: Option<NaiveDate>) -> NaiveDate {
    today.unwrap_or_else(|| Utc::now().date_naive())
}

/// Handler for GET /health.
async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        rules_version: state.rules().version.clone(),
    })
}

/// Handler for POST /shifts/hours.
///
/// Returns the elapsed hours between two clock times, wrapping past midnight.
async fn shift_hours_handler(
    payload: Result<Json<ShiftHoursRequest>, JsonRejection>,
) -> ApiResult<HoursResponse> {
    let correlation_id = Uuid::new_v4();
    let request = parse_body(correlation_id, payload)?;

    let hours = elapsed_hours(&request.start_time, &request.end_time)
        .map_err(|err| failure(correlation_id, err))?;
    Ok(Json(HoursResponse { hours }))
}

/// Handler for POST /shifts/classify.
///
/// Recomputes the shift's derived fields and returns them with the pay split.
async fn classify_handler(
    State(state): State<AppState>,
    payload: Result<Json<ClassifyRequest>, JsonRejection>,
) -> ApiResult<ClassifyResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing classify request");
    let ClassifyRequest { job, mut shift } = parse_body(correlation_id, payload)?;

    if shift.job_id != job.id {
        return Err(failure(
            correlation_id,
            EngineError::JobNotFound {
                job_id: shift.job_id.clone(),
            },
        ));
    }

    let classification = shift
        .recompute(&job, state.rules())
        .map_err(|err| failure(correlation_id, err))?;

    info!(
        correlation_id = %correlation_id,
        shift_id = %shift.id,
        rule = %classification.rule,
        total_pay = %classification.total_pay,
        "Shift classified"
    );
    Ok(Json(ClassifyResponse {
        shift,
        classification,
    }))
}

/// Handler for POST /months/aggregate.
async fn aggregate_handler(
    State(state): State<AppState>,
    payload: Result<Json<AggregateRequest>, JsonRejection>,
) -> ApiResult<MonthlyTotals> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing aggregate request");
    let request = parse_body(correlation_id, payload)?;

    let start_time = Instant::now();
    let totals = MonthPeriod::new(request.year, request.month)
        .and_then(|period| aggregate_month(&request.shifts, &request.job, period, state.rules()))
        .map_err(|err| failure(correlation_id, err))?;

    info!(
        correlation_id = %correlation_id,
        job_id = %request.job.id,
        shifts_count = totals.shift_ids.len(),
        total_pay = %totals.total_pay,
        duration_us = start_time.elapsed().as_micros(),
        "Aggregation completed successfully"
    );
    Ok(Json(totals))
}

/// Handler for POST /work-records.
///
/// Aggregates the month and stores it, replacing any record for the same
/// job, year and month.
async fn save_work_record_handler(
    State(state): State<AppState>,
    payload: Result<Json<SaveWorkRecordRequest>, JsonRejection>,
) -> ApiResult<WorkRecord> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing save work record request");
    let request = parse_body(correlation_id, payload)?;

    let period = MonthPeriod::new(request.year, request.month)
        .map_err(|err| failure(correlation_id, err))?;
    let record = save_monthly_record(
        state.records(),
        &request.shifts,
        &request.job,
        period,
        request.leave,
        state.rules(),
    )
    .await
    .map_err(|err| failure(correlation_id, err))?;

    Ok(Json(record))
}

/// Handler for PUT /work-records/manual.
async fn save_manual_record_handler(
    State(state): State<AppState>,
    payload: Result<Json<ManualWorkRecord>, JsonRejection>,
) -> ApiResult<WorkRecord> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing manual work record request");
    let manual = parse_body(correlation_id, payload)?;

    let record = save_manual_record(state.records(), &manual)
        .await
        .map_err(|err| failure(correlation_id, err))?;
    Ok(Json(record))
}

/// Handler for GET /work-records.
async fn list_work_records_handler(State(state): State<AppState>) -> ApiResult<Vec<WorkRecord>> {
    let correlation_id = Uuid::new_v4();
    let records = state
        .records()
        .list()
        .await
        .map_err(|err| failure(correlation_id, err))?;
    Ok(Json(records))
}

/// Handler for DELETE /work-records/:id.
async fn delete_work_record_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    state
        .records()
        .delete(&id)
        .await
        .map_err(|err| failure(correlation_id, err))?;

    info!(correlation_id = %correlation_id, record_id = %id, "Work record deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET /work-records/rollup?jobId=..&year=..
async fn rollup_handler(
    State(state): State<AppState>,
    query: Result<Query<RollupQuery>, QueryRejection>,
) -> ApiResult<YearlyTotals> {
    let correlation_id = Uuid::new_v4();
    let Query(query) =
        query.map_err(|rejection| ApiErrorResponse::from_query_rejection(correlation_id, rejection))?;

    let records = state
        .records()
        .list()
        .await
        .map_err(|err| failure(correlation_id, err))?;
    Ok(Json(rollup_year(&records, &query.job_id, query.year)))
}

/// Handler for GET /work-records/grid.
async fn grid_handler(State(state): State<AppState>) -> ApiResult<Vec<YearGrid>> {
    let correlation_id = Uuid::new_v4();
    let records = state
        .records()
        .list()
        .await
        .map_err(|err| failure(correlation_id, err))?;
    Ok(Json(build_year_grid(&records)))
}

/// Handler for POST /attendance/streak.
async fn streak_handler(
    payload: Result<Json<StreakRequest>, JsonRejection>,
) -> ApiResult<StreakResponse> {
    let correlation_id = Uuid::new_v4();
    let request = parse_body(correlation_id, payload)?;

    let today = today_or_now(request.today);
    let streak = compute_streak(request.attended_days(), today);
    Ok(Json(StreakResponse { streak }))
}

/// Handler for POST /income/report.
///
/// Work income comes from the stored records; freelance entries come with
/// the request.
async fn income_report_handler(
    State(state): State<AppState>,
    payload: Result<Json<IncomeReportRequest>, JsonRejection>,
) -> ApiResult<IncomeReport> {
    let correlation_id = Uuid::new_v4();
    let request = parse_body(correlation_id, payload)?;

    let records = state
        .records()
        .list()
        .await
        .map_err(|err| failure(correlation_id, err))?;
    let today = today_or_now(request.today);
    Ok(Json(income_report(
        &records,
        &request.freelance,
        request.year,
        today,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::response::ApiError;
    use crate::config::ConfigLoader;
    use crate::store::InMemoryWorkRecordRepository;
    use axum::body::Body;
    use axum::http::Request;
    use rust_decimal::Decimal;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        AppState::new(ConfigLoader::default())
    }

    fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn read_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_rules_version() {
        let router = create_router(create_test_state());
        let response = router
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let health: HealthResponse = read_json(response).await;
        assert_eq!(health.status, "ok");
        assert_eq!(health.rules_version, "builtin");
    }

    #[tokio::test]
    async fn test_shift_hours_wraps_midnight() {
        let router = create_router(create_test_state());
        let response = router
            .oneshot(json_request(
                "POST",
                "/shifts/hours",
                r#"{"startTime": "22:00", "endTime": "06:30"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let hours: HoursResponse = read_json(response).await;
        assert_eq!(hours.hours, Decimal::new(85, 1));
    }

    #[tokio::test]
    async fn test_shift_hours_invalid_time_returns_400() {
        let router = create_router(create_test_state());
        let response = router
            .oneshot(json_request(
                "POST",
                "/shifts/hours",
                r#"{"startTime": "25:00", "endTime": "06:00"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = read_json(response).await;
        assert_eq!(error.code, "INVALID_TIME_FORMAT");
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(create_test_state());
        let response = router
            .oneshot(json_request("POST", "/shifts/hours", "{ invalid json }"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = read_json(response).await;
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_field_returns_validation_error() {
        let router = create_router(create_test_state());
        let response = router
            .oneshot(json_request("POST", "/shifts/hours", r#"{"startTime": "08:00"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = read_json(response).await;
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("endTime"));
    }

    #[tokio::test]
    async fn test_classify_rejects_shift_for_other_job() {
        let router = create_router(create_test_state());
        let body = r#"{
            "job": {"id": "job_001", "hourlyRate": "50"},
            "shift": {
                "id": "shift_001",
                "jobId": "job_002",
                "date": "2026-01-17",
                "hours": "8",
                "shiftType": "morning"
            }
        }"#;
        let response = router
            .oneshot(json_request("POST", "/shifts/classify", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let error: ApiError = read_json(response).await;
        assert_eq!(error.code, "JOB_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_aggregate_invalid_month_returns_400() {
        let router = create_router(create_test_state());
        let body = r#"{"job": {"id": "job_001", "hourlyRate": "50"}, "year": 2026, "month": 13}"#;
        let response = router
            .oneshot(json_request("POST", "/months/aggregate", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = read_json(response).await;
        assert_eq!(error.code, "INVALID_MONTH");
    }

    #[tokio::test]
    async fn test_delete_unknown_record_returns_404() {
        let router = create_router(create_test_state());
        let response = router
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/work-records/missing")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_rollup_requires_query_parameters() {
        let router = create_router(create_test_state());
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/work-records/rollup?jobId=job_001")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = read_json(response).await;
        assert_eq!(error.code, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_offline_store_returns_500() {
        let mut repo = InMemoryWorkRecordRepository::new();
        repo.toggle_offline();
        let state = AppState::with_repository(ConfigLoader::default(), Arc::new(repo));
        let router = create_router(state);

        let response = router
            .oneshot(Request::builder().uri("/work-records").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let error: ApiError = read_json(response).await;
        assert_eq!(error.code, "STORAGE_ERROR");
    }
}
