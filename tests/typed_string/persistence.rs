//! Persist/restore behavior
//!
//! Content is encoded but never restored: every valid record restores to
//! the default empty string.

use crate::common::*;
use typeval::PersistedRecord;

#[test]
fn persisted_text_carries_content() {
    let s = TypedString::new("foo", false).unwrap();
    assert_eq!(
        s.persist(),
        r#"O:11:"TypedString":1:{s:9:"__default";s:3:"foo";}"#
    );
}

#[test]
fn restore_yields_default() {
    let s = TypedString::new("foo", false).unwrap();
    let restored = TypedString::restore(&s.persist()).unwrap();
    assert_eq!(restored.as_str(), "");
}

#[test]
fn restore_of_default_is_default() {
    let restored = TypedString::restore(&TypedString::default().persist()).unwrap();
    assert_eq!(restored, TypedString::default());
}

#[test]
fn binary_restore_yields_default() {
    let s = TypedString::new("some text", true).unwrap();
    let bytes = s.to_bytes().unwrap();
    assert_eq!(TypedString::from_bytes(&bytes).unwrap(), "");
}

#[test]
fn serde_restore_yields_default() {
    let s = TypedString::new("foo", true).unwrap();
    let json = serde_json::to_value(&s).unwrap();
    assert_eq!(json["type_name"], "TypedString");

    let back: TypedString = serde_json::from_value(json).unwrap();
    assert_eq!(back, "");
}

#[test]
fn malformed_text_is_rejected() {
    for input in [
        "",
        "garbage",
        r#"O:11:"TypedString":1:{s:9:"__default";s:3:"foo";"#,
        r#"O:11:"TypedString":1:{s:9:"__default";s:9:"foo";}"#,
        r#"O:11:"TypedString":0:{}"#,
        r#"O:11:"TypedString":1:{s:9:"__default";s:18446744073709551615:"x";}"#,
        r#"O:18446744073709551615:"TypedString"#,
    ] {
        assert!(
            matches!(TypedString::restore(input), Err(Error::Serialization(_))),
            "{:?}",
            input
        );
    }
}

#[test]
fn foreign_record_is_rejected() {
    let record = PersistedRecord::with_default("EnumType", Constant::Null);
    assert!(TypedString::restore(&record.to_text()).is_err());
}

#[test]
fn extra_fields_are_rejected() {
    let record = PersistedRecord::with_default("TypedString", Constant::str("a"))
        .with_field("extra", Constant::Int(1));
    assert!(TypedString::from_record(record).is_err());
}

#[test]
fn oversized_length_fields_are_rejected_for_enums() {
    for input in [
        r#"O:18446744073709551615:"EnumType"#,
        r#"O:8:"EnumType":1:{s:18446744073709551615:"__default";N;}"#,
    ] {
        assert!(
            matches!(EnumType::<BaseEnum>::restore(input), Err(Error::Serialization(_))),
            "{:?}",
            input
        );
    }
}
