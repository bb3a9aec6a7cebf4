use doclens::domain::{Feature, UnknownFeature};

#[test]
fn given_path_segment_when_parsing_then_resolves_feature() {
    assert_eq!("batch".parse::<Feature>(), Ok(Feature::Batch));
    assert_eq!("ai-analysis".parse::<Feature>(), Ok(Feature::AiAnalysis));
    assert_eq!("AI_ANALYSIS".parse::<Feature>(), Ok(Feature::AiAnalysis));
}

#[test]
fn given_unknown_name_when_parsing_then_returns_error() {
    assert_eq!(
        "ocr".parse::<Feature>(),
        Err(UnknownFeature("ocr".to_string()))
    );
}

#[test]
fn given_every_feature_when_displayed_then_round_trips_through_parse() {
    for feature in Feature::ALL {
        assert_eq!(feature.to_string().parse::<Feature>(), Ok(feature));
    }
}
