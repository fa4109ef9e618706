use axum::extract::{Path, State};
use axum::Json;
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use serde_json::json;

use crate::auth::voter;
use crate::db;
use crate::error::AppError;
use crate::models::Verdict;
use crate::realtime::CourseEvent;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct CastVote {
    pub verdict: Verdict,
}

pub async fn cast(
    State(state): State<SharedState>,
    Path(submission_id): Path<i64>,
    jar: CookieJar,
    Json(req): Json<CastVote>,
) -> Result<(CookieJar, Json<serde_json::Value>), AppError> {
    let submission = db::submissions::find_by_id(&state.pool, submission_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Submission not found".to_string()))?;

    let (jar, voter_id) = voter::identify(jar);

    db::votes::record(&state.pool, submission.id, voter_id, req.verdict)
        .await?
        .ok_or_else(|| AppError::Conflict("You already voted on this submission".to_string()))?;

    let tally = db::votes::tally(&state.pool, submission.id).await?;

    state.hub.publish(
        submission.course_id,
        CourseEvent::Vote {
            submission_id: submission.id,
            correct_count: tally.correct_count,
            incorrect_count: tally.incorrect_count,
        },
    );
    tracing::debug!(submission_id, verdict = req.verdict.as_str(), "vote recorded");

    Ok((
        jar,
        Json(json!({
            "submission_id": submission.id,
            "verdict": req.verdict,
            "correct_count": tally.correct_count,
            "incorrect_count": tally.incorrect_count,
        })),
    ))
}
