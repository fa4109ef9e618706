use crate::models::Submission;
use crate::submission::format;

/// Case-insensitive substring match on question, answer or source. The
/// question is compared as the text the author typed, not its stored HTML.
/// A blank query matches everything.
pub fn matches(submission: &Submission, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    let question = format::question_text(&submission.question);
    [&question, &submission.answer, &submission.source]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Keep the submissions matching `query`, preserving order.
pub fn filter(submissions: Vec<Submission>, query: Option<&str>) -> Vec<Submission> {
    match query {
        Some(q) if !q.trim().is_empty() => submissions
            .into_iter()
            .filter(|s| matches(s, q))
            .collect(),
        _ => submissions,
    }
}
