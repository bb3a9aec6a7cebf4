mod matcher_test;
mod quota_tracker_test;
mod summary_parser_test;
