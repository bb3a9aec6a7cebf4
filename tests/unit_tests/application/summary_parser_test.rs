use doclens::application::services::parse_summary;

#[test]
fn given_plain_json_when_parsing_then_decodes_value() {
    let summary = parse_summary(r#"{"overall_score": {"grade": "B"}}"#);

    assert!(summary.is_json());
    assert_eq!(summary.parsed.unwrap()["overall_score"]["grade"], "B");
}

#[test]
fn given_fenced_json_when_parsing_then_strips_fence_and_keeps_raw() {
    let raw = "```json\n{\"grade\": \"A\"}\n```";
    let summary = parse_summary(raw);

    assert!(summary.is_json());
    assert_eq!(summary.raw, raw);
}

#[test]
fn given_prose_when_parsing_then_returns_raw_without_json() {
    let summary = parse_summary("The document is well structured.");

    assert!(!summary.is_json());
    assert_eq!(summary.raw, "The document is well structured.");
}
