//! Key conversion matrix and round-trip properties.

use json_model_case::{round_trips, to_external, to_external_key, to_internal, to_internal_key};
use proptest::prelude::*;
use serde_json::json;

// ---------------------------------------------------------------------------
// Key functions
// ---------------------------------------------------------------------------

#[test]
fn conventional_keys_round_trip() {
    for (external, internal) in [
        ("id", "id"),
        ("first_name", "firstName"),
        ("last_login_at", "lastLoginAt"),
        ("x", "x"),
        ("", ""),
    ] {
        assert_eq!(to_internal_key(external), internal);
        assert_eq!(to_external_key(internal), external);
        assert!(round_trips(internal));
    }
}

#[test]
fn digits_after_underscore_are_kept() {
    assert_eq!(to_internal_key("address_line_1"), "addressLine_1");
    assert_eq!(to_external_key("addressLine_1"), "address_line_1");
}

#[test]
fn non_ascii_letters_are_left_alone() {
    assert_eq!(to_internal_key("na_ïve"), "na_ïve");
    assert_eq!(to_external_key("Ünit"), "Ünit");
}

// ---------------------------------------------------------------------------
// Structural conversion
// ---------------------------------------------------------------------------

#[test]
fn nested_objects_and_arrays() {
    let external = json!({
        "user_id": 7,
        "home_address": {"street_name": "Main", "zip_code": "1000"},
        "phone_numbers": [{"phone_type": "home"}, {"phone_type": "work"}],
        "raw_values": ["snake_value", 1, null]
    });
    let internal = to_internal(external.clone());
    assert_eq!(
        internal,
        json!({
            "userId": 7,
            "homeAddress": {"streetName": "Main", "zipCode": "1000"},
            "phoneNumbers": [{"phoneType": "home"}, {"phoneType": "work"}],
            "rawValues": ["snake_value", 1, null]
        })
    );
    assert_eq!(to_external(internal), external);
}

#[test]
fn key_order_is_preserved() {
    let internal = to_internal(json!({"z_last": 1, "a_first": 2}));
    let keys: Vec<_> = internal.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec!["zLast", "aFirst"]);
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_round_trip_is_stable(key in "[a-zA-Z0-9_]{0,16}") {
        let once = to_internal_key(&key);
        let twice = to_internal_key(&to_external_key(&once));
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn prop_conventional_keys_are_bijective(key in "[a-z]{1,6}(_[a-z]{1,6}){0,3}") {
        prop_assert_eq!(to_external_key(&to_internal_key(&key)), key);
    }

    #[test]
    fn prop_external_keys_have_no_uppercase(key in "[a-zA-Z_]{0,16}") {
        prop_assert!(!to_external_key(&key).chars().any(|c| c.is_ascii_uppercase()));
    }
}
