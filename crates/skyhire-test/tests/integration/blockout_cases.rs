use skyhire_test::component::availability::{Blockout, CalendarContext, matches};
use skyhire_test::component::types::RecurrenceType;

include!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../skyhire-service/tests/blockout_cases_data/mod.rs"
));

/// ## Summary
/// Integration-level validation of blockout matching using the shared cases.
#[test_log::test]
fn blockout_cases_integration() {
    for case in blockout_cases() {
        assert_case(&case);
    }
}
