mod feature_test;
mod quota_decision_test;
mod usage_record_test;
