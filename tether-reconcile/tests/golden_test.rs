//! Golden dataset tests for the reconciler.
//!
//! Loads each fixture under `test-fixtures/reconcile/`, runs `reconcile`,
//! and verifies the output matches the expected list.

use serde::Deserialize;
use tether_core::RelationshipList;
use tether_reconcile::{reconcile, ActionLog};
use test_fixtures::{list_fixtures, load_fixture};

#[derive(Debug, Deserialize)]
struct GoldenCase {
    name: String,
    input: GoldenInput,
    expected: RelationshipList,
}

#[derive(Debug, Deserialize)]
struct GoldenInput {
    local: RelationshipList,
    server: RelationshipList,
    actions: ActionLog,
}

#[test]
fn reconcile_matches_golden_fixtures() {
    let fixtures = list_fixtures("reconcile");
    assert!(!fixtures.is_empty(), "no reconcile fixtures found");

    for path in fixtures {
        let relative = format!(
            "reconcile/{}",
            path.file_name()
                .and_then(|n| n.to_str())
                .expect("fixture file name")
        );
        let case: GoldenCase = load_fixture(&relative);
        let merged = reconcile(&case.input.local, &case.input.server, &case.input.actions);
        assert_eq!(
            merged, case.expected,
            "golden case {} ({relative}) diverged",
            case.name
        );
    }
}
