use super::common::run_validation_suite;

#[test]
fn messages_suite() {
    run_validation_suite("messages.yaml");
}
