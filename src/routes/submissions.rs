use std::net::SocketAddr;

use axum::body::Bytes;
use axum::extract::{ConnectInfo, Path, Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::db;
use crate::error::AppError;
use crate::models::Submission;
use crate::search;
use crate::state::SharedState;
use crate::submission::pipeline::{self, Outcome};
use crate::submission::{metadata, parser};

#[derive(Deserialize)]
pub struct ListParams {
    pub search: Option<String>,
}

pub async fn list_by_course(
    State(state): State<SharedState>,
    Path(course_id): Path<i64>,
    Query(params): Query<ListParams>,
) -> Result<Json<serde_json::Value>, AppError> {
    let course = db::courses::find_by_id(&state.pool, course_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Course not found".to_string()))?;

    let submissions = db::submissions::list_by_course(&state.pool, course_id).await?;
    let submissions = search::filter(submissions, params.search.as_deref());

    Ok(Json(json!({
        "course": course,
        "total": submissions.len(),
        "submissions": submissions,
    })))
}

pub async fn get(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<Submission>, AppError> {
    let submission = db::submissions::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Submission not found".to_string()))?;
    Ok(Json(submission))
}

pub async fn create(
    State(state): State<SharedState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok());
    let raw_data = parser::parse_body(content_type, &body).map_err(AppError::BadRequest)?;

    let client_ip = metadata::client_ip(&headers, Some(addr.ip()), &state.config.trusted_proxies);

    match pipeline::run(&state, client_ip, raw_data).await? {
        Outcome::Created(submission) => Ok((
            StatusCode::CREATED,
            Json(json!({
                "status": "created",
                "submission": submission,
            })),
        )
            .into_response()),
        // Silent 200 for spam
        Outcome::Spam => Ok((StatusCode::OK, Json(json!({ "status": "ok" }))).into_response()),
    }
}
