use doclens::domain::QuotaDecision;

#[test]
fn given_usage_below_limit_when_allowing_then_remaining_is_difference() {
    let decision = QuotaDecision::allow(3, 10);

    assert!(decision.allowed);
    assert_eq!(decision.remaining, 7);
    assert_eq!(decision.message, "7 remaining today");
}

#[test]
fn given_single_hour_left_when_denying_then_message_uses_singular() {
    let decision = QuotaDecision::deny(10, 10, 1);

    assert!(!decision.allowed);
    assert_eq!(decision.remaining, 0);
    assert!(decision.message.ends_with("about 1 hour"));
}

#[test]
fn given_decision_when_serialized_then_exposes_all_fields() {
    let json = serde_json::to_value(QuotaDecision::allow(1, 3)).unwrap();

    assert_eq!(json["allowed"], true);
    assert_eq!(json["remaining"], 2);
    assert_eq!(json["used"], 1);
    assert_eq!(json["limit"], 3);
}
