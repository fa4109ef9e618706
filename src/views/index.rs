use askama::Template;
use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse};
use serde::Deserialize;

use crate::db;
use crate::error::AppError;
use crate::state::SharedState;
use crate::submission::fields::MAX_OPTIONS;
use crate::submission::honeypot;

struct CourseOption {
    id: i64,
    name: String,
    selected: bool,
}

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    courses: Vec<CourseOption>,
    selected_id: i64,
    selected_name: String,
    honeypot_field: &'static str,
    max_options: usize,
}

#[derive(Deserialize)]
pub struct PageParams {
    pub course: Option<String>,
}

pub async fn page(
    State(state): State<SharedState>,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    let courses = db::courses::list(&state.pool).await?;

    // Unknown or unparsable ids fall back to "nothing selected".
    let selected = params
        .course
        .and_then(|raw| raw.trim().parse::<i64>().ok())
        .and_then(|id| courses.iter().find(|c| c.id == id));
    let selected_id = selected.map(|c| c.id).unwrap_or(0);
    let selected_name = selected.map(|c| c.name.clone()).unwrap_or_default();

    let template = IndexTemplate {
        courses: courses
            .iter()
            .map(|c| CourseOption {
                id: c.id,
                name: c.name.clone(),
                selected: c.id == selected_id,
            })
            .collect(),
        selected_id,
        selected_name,
        honeypot_field: honeypot::FIELD,
        max_options: MAX_OPTIONS,
    };

    let html = template
        .render()
        .map_err(|e| AppError::Internal(format!("Failed to render index: {e}")))?;
    Ok(Html(html))
}
