use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A shared question/answer pair. Vote counts are aggregated from the
/// `votes` ledger at read time.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Submission {
    pub id: i64,
    pub course_id: i64,
    /// Escaped HTML with `<br>` line breaks.
    pub question: String,
    pub answer: String,
    pub source: String,
    pub options: Vec<String>,
    pub correct_count: i64,
    pub incorrect_count: i64,
    pub created_at: DateTime<Utc>,
}
