//! Integration tests for projecting nested records into flat views and
//! injecting flat records back.

use flatlens::optics::{inject, make_getter, make_setter, project};
use flatlens::pattern;
use flatlens::pattern::PathIndex;
use serde_json::{Value, json};

fn entity_index() -> PathIndex {
    PathIndex::from_pattern(&pattern!({
        a: "alph",
        b: "better",
        c: { x: "xena", y: "yee" },
    }))
}

fn entity() -> Value {
    json!({
        "a": 1,
        "b": 2,
        "c": { "x": 3, "y": { "yeeeah": 4 }, "z": 77, "zz": {} },
    })
}

// =============================================================================
// Projection (getter)
// =============================================================================

#[test]
fn test_project_pulls_addressed_fields_flat() {
    let flat = project(&entity_index(), &entity());
    assert_eq!(
        flat,
        json!({ "alph": 1, "better": 2, "xena": 3, "yee": { "yeeeah": 4 } })
    );
}

#[test]
fn test_project_never_exposes_unaddressed_fields() {
    let flat = project(&entity_index(), &entity());
    assert!(flat.get("z").is_none());
    assert!(flat.get("zz").is_none());
}

#[test]
fn test_project_output_order_follows_index() {
    let flat = project(&entity_index(), &entity());
    assert_eq!(
        flat.to_string(),
        r#"{"alph":1,"better":2,"xena":3,"yee":{"yeeeah":4}}"#
    );
}

#[test]
fn test_project_missing_paths_resolve_to_null() {
    let index = PathIndex::from_pattern(&pattern!({
        a: "present",
        ghost: { deep: "absent" },
    }));
    let flat = project(&index, &json!({ "a": 5 }));
    assert_eq!(flat, json!({ "present": 5, "absent": null }));
}

#[test]
fn test_project_through_non_object_resolves_to_null() {
    let index = PathIndex::from_pattern(&pattern!({ a: { b: "x" } }));
    let flat = project(&index, &json!({ "a": 3 }));
    assert_eq!(flat, json!({ "x": null }));
}

#[test]
fn test_project_with_empty_index_is_empty_record() {
    let index = PathIndex::from_pattern(&pattern!({}));
    assert_eq!(project(&index, &entity()), json!({}));
}

#[test]
fn test_project_is_idempotent_on_unchanged_input() {
    let index = entity_index();
    let nested = entity();
    assert_eq!(project(&index, &nested), project(&index, &nested));
}

#[test]
fn test_project_does_not_modify_input() {
    let nested = entity();
    let snapshot = nested.clone();
    let _ = project(&entity_index(), &nested);
    assert_eq!(nested, snapshot);
}

// =============================================================================
// Injection (setter)
// =============================================================================

#[test]
fn test_inject_writes_fields_and_preserves_untouched() {
    let updated = inject(
        &entity_index(),
        &json!({ "alph": 9, "better": 8, "xena": 7, "yee": { "yeeeah": 6 } }),
        &entity(),
    );

    assert_eq!(
        updated,
        json!({
            "a": 9,
            "b": 8,
            "c": { "x": 7, "y": { "yeeeah": 6 }, "z": 77, "zz": {} },
        })
    );
}

#[test]
fn test_inject_creates_spine_over_empty_record() {
    let updated = inject(
        &entity_index(),
        &json!({ "alph": 1, "better": 2, "xena": 3, "yee": 4 }),
        &json!({}),
    );

    assert_eq!(
        updated,
        json!({ "a": 1, "b": 2, "c": { "x": 3, "y": 4 } })
    );
}

#[test]
fn test_inject_missing_flat_field_writes_null() {
    let updated = inject(&entity_index(), &json!({ "alph": 9 }), &entity());

    assert_eq!(updated["a"], json!(9));
    assert_eq!(updated["b"], Value::Null);
    assert_eq!(updated["c"]["x"], Value::Null);
    assert_eq!(updated["c"]["y"], Value::Null);
    // Unaddressed siblings survive even when nulls land next to them.
    assert_eq!(updated["c"]["z"], json!(77));
}

#[test]
fn test_inject_does_not_modify_original() {
    let nested = entity();
    let snapshot = nested.clone();
    let _ = inject(&entity_index(), &json!({ "alph": 999 }), &nested);
    assert_eq!(nested, snapshot);
}

#[test]
fn test_inject_overlapping_prefixes_compose() {
    let index = PathIndex::from_pattern(&pattern!({
        shared: { one: "first", two: "second" },
    }));
    let updated = inject(
        &index,
        &json!({ "first": 1, "second": 2 }),
        &json!({ "shared": { "keep": true } }),
    );

    assert_eq!(
        updated,
        json!({ "shared": { "keep": true, "one": 1, "two": 2 } })
    );
}

#[test]
fn test_inject_preserves_key_order_of_untouched_fields() {
    let nested = json!({ "z": 0, "a": { "b": 1 }, "m": 2 });
    let index = PathIndex::from_pattern(&pattern!({ a: { b: "x" } }));
    let updated = inject(&index, &json!({ "x": 9 }), &nested);

    assert_eq!(updated.to_string(), r#"{"z":0,"a":{"b":9},"m":2}"#);
}

#[test]
fn test_inject_with_empty_index_returns_copy() {
    let index = PathIndex::from_pattern(&pattern!({}));
    let nested = entity();
    assert_eq!(inject(&index, &json!({ "anything": 1 }), &nested), nested);
}

// =============================================================================
// Closure builders
// =============================================================================

#[test]
fn test_make_getter_matches_project() {
    let getter = make_getter(entity_index());
    assert_eq!(getter(&entity()), project(&entity_index(), &entity()));
}

#[test]
fn test_make_setter_matches_inject() {
    let setter = make_setter(entity_index());
    let flat = json!({ "alph": 9, "better": 8, "xena": 7, "yee": 6 });
    assert_eq!(
        setter(&flat, &entity()),
        inject(&entity_index(), &flat, &entity())
    );
}

#[test]
fn test_getter_setter_round_trip() {
    let getter = make_getter(entity_index());
    let setter = make_setter(entity_index());
    let nested = entity();

    assert_eq!(setter(&getter(&nested), &nested), nested);
}
