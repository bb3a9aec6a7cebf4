/// A completion split into its raw text and, when it is valid JSON, the
/// decoded value.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedSummary {
    pub raw: String,
    pub parsed: Option<serde_json::Value>,
}

impl ParsedSummary {
    pub fn is_json(&self) -> bool {
        self.parsed.is_some()
    }
}

/// Models sometimes wrap JSON in a markdown fence despite being told not to.
pub fn parse_summary(raw: &str) -> ParsedSummary {
    let parsed = serde_json::from_str(strip_code_fence(raw)).ok();
    ParsedSummary {
        raw: raw.to_string(),
        parsed,
    }
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let body = match trimmed.strip_prefix("```") {
        Some(rest) => {
            let inner = rest.split("```").next().unwrap_or(rest);
            inner.strip_prefix("json").unwrap_or(inner)
        }
        None => trimmed,
    };
    body.strip_suffix("```").unwrap_or(body).trim()
}
