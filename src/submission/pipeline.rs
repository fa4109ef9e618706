use std::net::IpAddr;

use crate::config::ProfanityMode;
use crate::db;
use crate::error::AppError;
use crate::models::Submission;
use crate::realtime::CourseEvent;
use crate::state::SharedState;

use super::fields::{self, ValidSubmission};
use super::format;
use super::honeypot;
use super::profanity;

pub const NEW_SOAL_MESSAGE: &str = "Ada soal baru nih!";

pub enum Outcome {
    Created(Submission),
    /// Honeypot tripped. The caller acknowledges without storing anything.
    Spam,
}

pub async fn run(
    state: &SharedState,
    client_ip: IpAddr,
    raw_data: serde_json::Value,
) -> Result<Outcome, AppError> {
    let course_key = fields::course_key(&raw_data);
    state
        .submission_limiter
        .check(
            course_key,
            client_ip,
            state.config.submit_rate_limit,
            state.config.submit_rate_window_secs,
        )
        .map_err(|retry_after| {
            tracing::info!(%client_ip, course_id = course_key, "submission rate limited");
            AppError::RateLimited(retry_after)
        })?;

    if honeypot::is_spam(&raw_data) {
        tracing::info!(%client_ip, "honeypot field filled, discarding submission");
        return Ok(Outcome::Spam);
    }

    let new = fields::extract(&raw_data).map_err(AppError::BadRequest)?;
    let valid = fields::validate(new).map_err(|errors| AppError::BadRequest(errors.join("; ")))?;

    db::courses::find_by_id(&state.pool, valid.course_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Course not found".to_string()))?;

    let valid = apply_profanity_policy(valid, state.config.profanity)?;
    let question = format::question_html(&valid.question);

    let submission = db::submissions::create(
        &state.pool,
        &db::submissions::NewRow {
            course_id: valid.course_id,
            question: &question,
            answer: &valid.answer,
            source: &valid.source,
            options: &valid.options,
        },
    )
    .await?;

    let receivers = state.hub.publish(
        submission.course_id,
        CourseEvent::NewSoal {
            submission_id: submission.id,
            message: NEW_SOAL_MESSAGE.to_string(),
        },
    );
    tracing::info!(
        submission_id = submission.id,
        course_id = submission.course_id,
        receivers,
        "submission stored"
    );

    Ok(Outcome::Created(submission))
}

fn apply_profanity_policy(
    mut valid: ValidSubmission,
    mode: ProfanityMode,
) -> Result<ValidSubmission, AppError> {
    let flagged = profanity::contains(&valid.question)
        || profanity::contains(&valid.answer)
        || profanity::contains(&valid.source)
        || valid.options.iter().any(|o| profanity::contains(o));

    if !flagged {
        return Ok(valid);
    }

    match mode {
        ProfanityMode::Reject => Err(AppError::BadRequest(
            "Submission contains inappropriate language".to_string(),
        )),
        ProfanityMode::Mask => {
            valid.question = profanity::mask(&valid.question);
            valid.answer = profanity::mask(&valid.answer);
            valid.source = profanity::mask(&valid.source);
            for option in valid.options.iter_mut() {
                *option = profanity::mask(option);
            }
            Ok(valid)
        }
    }
}
