use std::collections::HashMap;

use doclens::application::services::QuotaLimits;
use doclens::presentation::Settings;
use doclens::presentation::config::{LlmSettings, QuotaSettings};

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| vars.get(name).cloned()
}

#[test]
fn given_default_settings_when_created_then_match_documented_defaults() {
    let settings = Settings::default();

    assert_eq!(settings.server.port, 3000);
    assert_eq!(settings.server.trusted_proxy_hops, 1);
    assert_eq!(settings.llm.model, "llama-3.1-8b-instant");
    assert_eq!(settings.llm.timeout_secs, 30);
    assert_eq!(settings.analysis.summary_char_budget, 4500);
    assert!(settings.database.url.is_none());
    assert!(settings.llm.api_keys.is_empty());
}

#[test]
fn given_numbered_keys_when_applying_fallback_then_collects_them_in_order() {
    let mut llm = LlmSettings::default();
    llm.apply_key_fallback(lookup_from(&[
        ("GROQ_API_KEY_1", "k1"),
        ("GROQ_API_KEY_3", "k3"),
        ("GROQ_API_KEY", "single"),
    ]));

    assert_eq!(llm.api_keys, vec!["k1", "k3"]);
}

#[test]
fn given_only_single_key_when_applying_fallback_then_uses_it() {
    let mut llm = LlmSettings::default();
    llm.apply_key_fallback(lookup_from(&[("GROQ_API_KEY", "single")]));

    assert_eq!(llm.api_keys, vec!["single"]);
}

#[test]
fn given_explicit_keys_when_applying_fallback_then_keeps_them() {
    let mut llm = LlmSettings {
        api_keys: vec!["explicit".to_string(), " ".to_string()],
        ..LlmSettings::default()
    };
    llm.apply_key_fallback(lookup_from(&[("GROQ_API_KEY_1", "k1")]));

    assert_eq!(llm.api_keys, vec!["explicit"]);
}

#[test]
fn given_llm_settings_when_debug_printed_then_keys_are_hidden() {
    let llm = LlmSettings {
        api_keys: vec!["gsk_secret".to_string()],
        ..LlmSettings::default()
    };

    let printed = format!("{:?}", llm);

    assert!(!printed.contains("gsk_secret"));
    assert!(printed.contains("1 redacted"));
}

#[test]
fn given_quota_settings_when_converted_then_limits_match() {
    let settings = QuotaSettings {
        account_batch: 20,
        account_ai_analysis: 15,
        guest_batch: 2,
        guest_ai_analysis: 1,
    };

    let limits = QuotaLimits::from(&settings);

    assert_eq!(limits.account_batch, 20);
    assert_eq!(limits.account_ai_analysis, 15);
    assert_eq!(limits.guest_batch, 2);
    assert_eq!(limits.guest_ai_analysis, 1);
}
