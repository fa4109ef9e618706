use serde_json::{Map, Value};

pub const MAX_OPTIONS: usize = 4;
pub const MAX_QUESTION_CHARS: usize = 10_000;
pub const MAX_ANSWER_CHARS: usize = 1_000;
pub const MAX_SOURCE_CHARS: usize = 500;
pub const MAX_OPTION_CHARS: usize = 500;

/// A submission as it arrived, before validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewSubmission {
    pub course_id: Option<i64>,
    pub question: String,
    pub answer: String,
    pub source: String,
    pub options: Vec<String>,
}

/// A submission that passed [`validate`]. Text is trimmed, not yet formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidSubmission {
    pub course_id: i64,
    pub question: String,
    pub answer: String,
    pub source: String,
    pub options: Vec<String>,
}

/// Pull the known fields out of a parsed body. JSON clients may send
/// `course_id` as a number and `options` as an array; HTML forms send both as
/// strings, with options one per line.
pub fn extract(raw: &Value) -> Result<NewSubmission, String> {
    let obj = raw
        .as_object()
        .ok_or_else(|| "Expected an object".to_string())?;

    let course_id = match obj.get("course_id") {
        None | Some(Value::Null) => None,
        Some(Value::Number(n)) => Some(
            n.as_i64()
                .ok_or_else(|| "course_id must be an integer".to_string())?,
        ),
        Some(Value::String(s)) if s.trim().is_empty() => None,
        Some(Value::String(s)) => Some(
            s.trim()
                .parse()
                .map_err(|_| "course_id must be an integer".to_string())?,
        ),
        Some(_) => return Err("course_id must be an integer".to_string()),
    };

    let options = match obj.get("options") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::String(s)) => s.lines().map(|l| l.to_string()).collect(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => Ok(s.clone()),
                _ => Err("options must be strings".to_string()),
            })
            .collect::<Result<Vec<_>, _>>()?,
        Some(_) => return Err("options must be a list or newline-separated text".to_string()),
    };

    Ok(NewSubmission {
        course_id,
        question: text_field(obj, "question")?,
        answer: text_field(obj, "answer")?,
        source: text_field(obj, "source")?,
        options,
    })
}

/// Best-effort course id for rate limiting, read before the body is
/// validated. Anything unusable maps to 0.
pub fn course_key(raw: &Value) -> i64 {
    match raw.get("course_id") {
        Some(Value::Number(n)) => n.as_i64().unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

fn text_field(obj: &Map<String, Value>, name: &str) -> Result<String, String> {
    match obj.get(name) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(_) => Err(format!("{name} must be text")),
    }
}

/// Check the submission and normalise it. Returns every problem found, not
/// just the first.
pub fn validate(new: NewSubmission) -> Result<ValidSubmission, Vec<String>> {
    let mut errors = Vec::new();

    let course_id = match new.course_id {
        Some(id) if id > 0 => id,
        _ => {
            errors.push("A course must be selected".to_string());
            0
        }
    };

    let question = new.question.trim().to_string();
    let answer = new.answer.trim().to_string();
    let source = new.source.trim().to_string();

    if question.is_empty() {
        errors.push("Question is required".to_string());
    } else if question.chars().count() > MAX_QUESTION_CHARS {
        errors.push(format!("Question must be at most {MAX_QUESTION_CHARS} characters"));
    }

    if answer.is_empty() {
        errors.push("Answer is required".to_string());
    } else if answer.chars().count() > MAX_ANSWER_CHARS {
        errors.push(format!("Answer must be at most {MAX_ANSWER_CHARS} characters"));
    }

    if source.chars().count() > MAX_SOURCE_CHARS {
        errors.push(format!("Source must be at most {MAX_SOURCE_CHARS} characters"));
    }

    let options: Vec<String> = new
        .options
        .iter()
        .map(|o| o.trim().to_string())
        .filter(|o| !o.is_empty())
        .collect();

    if options.len() > MAX_OPTIONS {
        errors.push(format!("At most {MAX_OPTIONS} options are allowed"));
    }
    if options.iter().any(|o| o.chars().count() > MAX_OPTION_CHARS) {
        errors.push(format!("Each option must be at most {MAX_OPTION_CHARS} characters"));
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ValidSubmission {
        course_id,
        question,
        answer,
        source,
        options,
    })
}
