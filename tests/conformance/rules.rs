use super::common::run_validation_suite;

#[test]
fn presence_suite() {
    run_validation_suite("rules/presence.yaml");
}

#[test]
fn conditional_presence_suite() {
    run_validation_suite("rules/conditional.yaml");
}

#[test]
fn equality_suite() {
    run_validation_suite("rules/equality.yaml");
}

#[test]
fn membership_suite() {
    run_validation_suite("rules/membership.yaml");
}

#[test]
fn size_suite() {
    run_validation_suite("rules/size.yaml");
}

#[test]
fn ordering_suite() {
    run_validation_suite("rules/ordering.yaml");
}

#[test]
fn chars_suite() {
    run_validation_suite("rules/chars.yaml");
}

#[test]
fn types_suite() {
    run_validation_suite("rules/types.yaml");
}

#[test]
fn format_suite() {
    run_validation_suite("rules/format.yaml");
}
