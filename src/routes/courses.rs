use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::auth::extractor::Admin;
use crate::db;
use crate::error::AppError;
use crate::models::Course;
use crate::state::SharedState;

const MAX_NAME_CHARS: usize = 200;

#[derive(Deserialize)]
pub struct CreateCourse {
    pub name: String,
}

pub async fn list(State(state): State<SharedState>) -> Result<Json<Vec<Course>>, AppError> {
    let courses = db::courses::list(&state.pool).await?;
    Ok(Json(courses))
}

pub async fn get(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<Course>, AppError> {
    let course = db::courses::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Course not found".to_string()))?;
    Ok(Json(course))
}

pub async fn create(
    _admin: Admin,
    State(state): State<SharedState>,
    Json(req): Json<CreateCourse>,
) -> Result<(StatusCode, Json<Course>), AppError> {
    let name = req.name.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest("Course name is required".to_string()));
    }
    if name.chars().count() > MAX_NAME_CHARS {
        return Err(AppError::BadRequest(format!(
            "Course name must be at most {MAX_NAME_CHARS} characters"
        )));
    }

    let course = db::courses::create(&state.pool, name)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::Conflict("A course with this name already exists".to_string())
            }
            _ => AppError::Database(e),
        })?;

    tracing::info!(course_id = course.id, name = %course.name, "course created");
    Ok((StatusCode::CREATED, Json(course)))
}
