use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Tally, Verdict, Vote};

/// Append a vote to the ledger. Returns `None` when this voter already voted
/// on the submission.
pub async fn record(
    pool: &PgPool,
    submission_id: i64,
    voter_id: Uuid,
    verdict: Verdict,
) -> Result<Option<Vote>, sqlx::Error> {
    sqlx::query_as::<_, Vote>(
        "INSERT INTO votes (submission_id, voter_id, verdict)
         VALUES ($1, $2, $3)
         ON CONFLICT (submission_id, voter_id) DO NOTHING
         RETURNING *",
    )
    .bind(submission_id)
    .bind(voter_id)
    .bind(verdict.as_str())
    .fetch_optional(pool)
    .await
}

pub async fn tally(pool: &PgPool, submission_id: i64) -> Result<Tally, sqlx::Error> {
    sqlx::query_as::<_, Tally>(
        "SELECT COUNT(*) FILTER (WHERE verdict = 'correct') AS correct_count,
                COUNT(*) FILTER (WHERE verdict = 'incorrect') AS incorrect_count
         FROM votes WHERE submission_id = $1",
    )
    .bind(submission_id)
    .fetch_one(pool)
    .await
}
