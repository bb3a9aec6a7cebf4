use doclens::infrastructure::observability::sanitize_excerpt;

#[test]
fn given_blank_text_when_sanitizing_then_returns_empty_marker() {
    assert_eq!(sanitize_excerpt(""), "[EMPTY]");
    assert_eq!(sanitize_excerpt(" \n "), "[EMPTY]");
}

#[test]
fn given_short_keyword_when_sanitizing_then_returns_trimmed_text() {
    assert_eq!(sanitize_excerpt("  regression  "), "regression");
}

#[test]
fn given_long_document_when_sanitizing_then_truncates_with_length() {
    let text = "é".repeat(120);
    let result = sanitize_excerpt(&text);

    assert!(result.starts_with(&"é".repeat(80)));
    assert!(result.ends_with("... (120 chars total)"));
}

#[test]
fn given_bearer_token_when_sanitizing_then_redacts_it() {
    let result = sanitize_excerpt("Authorization: Bearer gsk_live_123 next");

    assert_eq!(result, "Authorization: Bearer [REDACTED] next");
}

#[test]
fn given_repeated_secrets_when_sanitizing_then_redacts_every_one() {
    let result = sanitize_excerpt("api_key=one&api_key=two token=three");

    assert!(!result.contains("one"));
    assert!(!result.contains("two"));
    assert!(!result.contains("three"));
    assert_eq!(result.matches("[REDACTED]").count(), 3);
}
