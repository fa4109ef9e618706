use serde_json::Value;

/// Hidden form input that people never see and bots tend to fill in.
pub const FIELD: &str = "website";

/// Check if the honeypot field is filled. Returns true if spam detected.
pub fn is_spam(data: &Value) -> bool {
    match data.get(FIELD) {
        Some(Value::String(s)) => !s.trim().is_empty(),
        Some(Value::Null) | None => false,
        Some(_) => true,
    }
}
