/// Render plain question text as HTML: markup is escaped and line breaks
/// become `<br>`.
pub fn question_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.replace("\r\n", "\n").chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '\n' => out.push_str("<br>"),
            other => out.push(other),
        }
    }
    out
}

/// Recover the plain text [`question_html`] was built from.
pub fn question_text(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;
    while let Some(pos) = rest.find(['&', '<']) {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        let (decoded, len) = [
            ("<br>", '\n'),
            ("&amp;", '&'),
            ("&lt;", '<'),
            ("&gt;", '>'),
            ("&quot;", '"'),
            ("&#x27;", '\''),
        ]
        .iter()
        .find(|(entity, _)| rest.starts_with(*entity))
        .map(|(entity, c)| (*c, entity.len()))
        .unwrap_or((rest.as_bytes()[0] as char, 1));
        out.push(decoded);
        rest = &rest[len..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_line_breaks() {
        assert_eq!(question_html("satu\ndua\r\ntiga"), "satu<br>dua<br>tiga");
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(
            question_html("<script>alert('x')</script>"),
            "&lt;script&gt;alert(&#x27;x&#x27;)&lt;/script&gt;"
        );
    }

    #[test]
    fn question_text_reverses_formatting() {
        for text in ["Jika x > 5 & y < 3, berapa \"z\"?\nbaris dua", "it's &amp; <br>", "biasa"] {
            assert_eq!(question_text(&question_html(text)), text);
        }
    }
}
