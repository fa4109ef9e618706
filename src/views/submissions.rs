use askama::Template;
use axum::extract::{Path, Query, State};
use axum::response::{Html, IntoResponse};
use chrono::Utc;
use serde::Deserialize;

use crate::db;
use crate::error::AppError;
use crate::models::Submission;
use crate::search;
use crate::state::SharedState;

const OPTION_LABELS: [&str; 4] = ["A", "B", "C", "D"];

/// Height in pixels of the taller vote bar.
const BAR_MAX_PX: i64 = 60;

struct OptionLine {
    label: &'static str,
    text: String,
}

struct SubmissionRow {
    id: i64,
    created_at: String,
    answer: String,
    question_html: String,
    source: String,
    options: Vec<OptionLine>,
    correct_count: i64,
    incorrect_count: i64,
    correct_px: i64,
    incorrect_px: i64,
    highlighted: bool,
}

#[derive(Template)]
#[template(path = "partials/submissions_table.html")]
struct SubmissionsTableTemplate {
    course_id: i64,
    course_name: String,
    rows: Vec<SubmissionRow>,
    total: usize,
    search: String,
    last_updated: String,
}

#[derive(Deserialize)]
pub struct TableParams {
    pub search: Option<String>,
    /// Set by the client when refetching after a "new-soal" event.
    pub fresh: Option<bool>,
}

pub async fn table_partial(
    State(state): State<SharedState>,
    Path(course_id): Path<i64>,
    Query(params): Query<TableParams>,
) -> Result<impl IntoResponse, AppError> {
    let course = db::courses::find_by_id(&state.pool, course_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Course not found".to_string()))?;

    let search = params.search.unwrap_or_default();
    let submissions = db::submissions::list_by_course(&state.pool, course_id).await?;
    let submissions = search::filter(submissions, Some(search.as_str()));
    let fresh = params.fresh.unwrap_or(false);

    let rows: Vec<SubmissionRow> = submissions
        .iter()
        .enumerate()
        .map(|(i, sub)| to_row(sub, fresh && i == 0))
        .collect();

    let template = SubmissionsTableTemplate {
        course_id,
        course_name: course.name,
        total: rows.len(),
        rows,
        search,
        last_updated: Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    };

    let html = template
        .render()
        .map_err(|e| AppError::Internal(format!("Failed to render submissions table: {e}")))?;
    Ok(Html(html))
}

fn to_row(sub: &Submission, highlighted: bool) -> SubmissionRow {
    let tallest = sub.correct_count.max(sub.incorrect_count);
    SubmissionRow {
        id: sub.id,
        created_at: sub.created_at.format("%Y-%m-%d %H:%M").to_string(),
        answer: sub.answer.clone(),
        question_html: sub.question.clone(),
        source: sub.source.clone(),
        options: OPTION_LABELS
            .iter()
            .zip(sub.options.iter())
            .map(|(&label, text)| OptionLine {
                label,
                text: text.clone(),
            })
            .collect(),
        correct_count: sub.correct_count,
        incorrect_count: sub.incorrect_count,
        correct_px: bar_height(sub.correct_count, tallest),
        incorrect_px: bar_height(sub.incorrect_count, tallest),
        highlighted,
    }
}

/// Scale a vote count against the larger of the two counts.
fn bar_height(count: i64, tallest: i64) -> i64 {
    count.max(0) * BAR_MAX_PX / tallest.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_heights_scale_to_tallest() {
        assert_eq!(bar_height(10, 10), 60);
        assert_eq!(bar_height(5, 10), 30);
        assert_eq!(bar_height(0, 0), 0);
        assert_eq!(bar_height(1, 3), 20);
    }

    #[test]
    fn rows_label_options_in_order() {
        let sub = Submission {
            id: 4,
            course_id: 1,
            question: "Q<br>baris dua".to_string(),
            answer: "B".to_string(),
            source: String::new(),
            options: vec!["satu".to_string(), "dua".to_string()],
            correct_count: 2,
            incorrect_count: 1,
            created_at: Utc::now(),
        };
        let row = to_row(&sub, true);
        assert_eq!(row.options.len(), 2);
        assert_eq!(row.options[1].label, "B");
        assert_eq!(row.options[1].text, "dua");
        assert_eq!(row.correct_px, 60);
        assert_eq!(row.incorrect_px, 30);
        assert!(row.highlighted);
    }
}
