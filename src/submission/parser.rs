use serde_json::{Map, Value};

/// Parse a request body based on Content-Type header.
pub fn parse_body(content_type: Option<&str>, body: &[u8]) -> Result<Value, String> {
    let ct = content_type.unwrap_or("application/json");

    if ct.contains("application/json") {
        serde_json::from_slice(body).map_err(|e| format!("Invalid JSON: {e}"))
    } else if ct.contains("application/x-www-form-urlencoded") {
        parse_form_urlencoded(body)
    } else {
        // Try JSON first, then form-urlencoded
        serde_json::from_slice(body)
            .or_else(|_| parse_form_urlencoded(body))
            .map_err(|e| format!("Unable to parse body: {e}"))
    }
}

fn parse_form_urlencoded(body: &[u8]) -> Result<Value, String> {
    let body_str = std::str::from_utf8(body).map_err(|e| format!("Invalid UTF-8: {e}"))?;

    let mut map = Map::new();
    for (k, v) in form_urlencoded::parse(body_str.as_bytes()) {
        map.insert(k.into_owned(), Value::String(v.into_owned()));
    }
    Ok(Value::Object(map))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_json_body() {
        let value = parse_body(Some("application/json"), br#"{"course_id": 3}"#).unwrap();
        assert_eq!(value["course_id"], 3);
    }

    #[test]
    fn parses_form_body_with_newlines() {
        let value = parse_body(
            Some("application/x-www-form-urlencoded"),
            b"question=Apa+itu%3F&options=satu%0Adua",
        )
        .unwrap();
        assert_eq!(value["question"], "Apa itu?");
        assert_eq!(value["options"], "satu\ndua");
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(parse_body(Some("application/json"), b"{nope").is_err());
    }
}
