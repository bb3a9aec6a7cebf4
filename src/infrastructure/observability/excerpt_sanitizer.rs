const MAX_VISIBLE_CHARS: usize = 80;

const SECRET_MARKERS: [&str; 5] = ["Bearer ", "api_key=", "password=", "secret=", "token="];

/// Shortens user-supplied text for logs and masks anything that looks like a
/// credential.
pub fn sanitize_excerpt(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total = trimmed.chars().count();
    let visible = if total > MAX_VISIBLE_CHARS {
        let head: String = trimmed.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{}... ({} chars total)", head, total)
    } else {
        trimmed.to_string()
    };

    SECRET_MARKERS
        .iter()
        .fold(visible, |acc, marker| redact_after(&acc, marker))
}

fn redact_after(text: &str, marker: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(idx) = rest.find(marker) {
        let value_start = idx + marker.len();
        let value_len = rest[value_start..]
            .find(|c: char| c.is_whitespace() || matches!(c, '&' | '"' | '\''))
            .unwrap_or(rest.len() - value_start);

        result.push_str(&rest[..value_start]);
        result.push_str("[REDACTED]");
        rest = &rest[value_start + value_len..];
    }

    result.push_str(rest);
    result
}
