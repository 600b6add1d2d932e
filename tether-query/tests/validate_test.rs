//! End-to-end validation: untrusted JSON input through to query-ready params.

use proptest::prelude::*;
use tether_query::{escape_like, validate, PageRequest, SortableColumns, MAX_LIMIT};

fn columns() -> SortableColumns {
    SortableColumns::new([
        ("name", "dogs.name"),
        ("breed", "dogs.breed"),
        ("created", "dogs.created_at"),
    ])
}

#[test]
fn query_string_payload_round_trip() {
    let request: PageRequest = serde_json::from_str(
        r#"{"page": 2, "limit": 50, "sort_by": "breed", "sort_direction": "desc"}"#,
    )
    .expect("valid payload");
    let params = validate(&request, 120, &columns());

    assert_eq!(params.page, 2);
    assert_eq!(params.limit, 50);
    assert_eq!(params.max_page, 3);
    assert_eq!(params.offset(), 50);
    assert_eq!(params.order_spec.to_sql(), "dogs.breed DESC");
}

#[test]
fn hostile_payload_is_neutralized() {
    let request: PageRequest = serde_json::from_str(
        r#"{"page": -1, "limit": 99999, "sort_by": "1; DROP TABLE dogs", "sort_direction": "UNION"}"#,
    )
    .expect("shape is valid even if values are hostile");
    let params = validate(&request, 10, &columns());

    assert_eq!(params.page, 1);
    assert_eq!(params.limit, MAX_LIMIT);
    assert_eq!(params.sort_by, "name");
    assert_eq!(params.order_spec.to_sql(), "dogs.name ASC");
    assert_eq!(escape_like("100%"), "100\\%");
}

proptest! {
    /// Whatever the input, the output is usable: page within bounds, limit
    /// within the ceiling, sort key from the whitelist.
    #[test]
    fn output_is_always_in_range(
        page in prop::option::of(i64::MIN..i64::MAX),
        limit in prop::option::of(i64::MIN..i64::MAX),
        sort_by in prop::option::of("[a-z;' ]{0,12}"),
        sort_direction in prop::option::of("[a-zA-Z]{0,6}"),
        total in 0u64..1_000_000,
    ) {
        let request = PageRequest { page, limit, sort_by, sort_direction };
        let params = validate(&request, total, &columns());

        prop_assert!(params.limit >= 1 && params.limit <= MAX_LIMIT);
        prop_assert!(params.max_page >= 1);
        prop_assert!(params.page >= 1 && params.page <= params.max_page);
        prop_assert!(columns().contains(&params.sort_by));
        let cols = columns();
        let resolved = cols.resolve(Some(params.sort_by.as_str()));
        prop_assert_eq!(
            &params.order_spec.expression,
            &resolved.expression
        );
    }
}
