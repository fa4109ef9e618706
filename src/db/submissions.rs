use sqlx::PgPool;

use crate::models::Submission;

/// Columns of a submission joined with its vote tally. Callers append
/// `WHERE`/`ORDER BY` clauses.
const SELECT_WITH_TALLY: &str = "SELECT s.id, s.course_id, s.question, s.answer, s.source, s.options, s.created_at,
        COUNT(v.id) FILTER (WHERE v.verdict = 'correct') AS correct_count,
        COUNT(v.id) FILTER (WHERE v.verdict = 'incorrect') AS incorrect_count
     FROM submissions s
     LEFT JOIN votes v ON v.submission_id = s.id";

pub struct NewRow<'a> {
    pub course_id: i64,
    pub question: &'a str,
    pub answer: &'a str,
    pub source: &'a str,
    pub options: &'a [String],
}

pub async fn create(pool: &PgPool, row: &NewRow<'_>) -> Result<Submission, sqlx::Error> {
    sqlx::query_as::<_, Submission>(
        "INSERT INTO submissions (course_id, question, answer, source, options)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING id, course_id, question, answer, source, options, created_at,
                   0::BIGINT AS correct_count, 0::BIGINT AS incorrect_count",
    )
    .bind(row.course_id)
    .bind(row.question)
    .bind(row.answer)
    .bind(row.source)
    .bind(row.options)
    .fetch_one(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Submission>, sqlx::Error> {
    sqlx::query_as::<_, Submission>(&format!(
        "{SELECT_WITH_TALLY} WHERE s.id = $1 GROUP BY s.id"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Every submission for a course, newest first.
pub async fn list_by_course(pool: &PgPool, course_id: i64) -> Result<Vec<Submission>, sqlx::Error> {
    sqlx::query_as::<_, Submission>(&format!(
        "{SELECT_WITH_TALLY} WHERE s.course_id = $1
         GROUP BY s.id
         ORDER BY s.created_at DESC, s.id DESC"
    ))
    .bind(course_id)
    .fetch_all(pool)
    .await
}
