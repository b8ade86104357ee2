//! Persistence round trips

use crate::common::*;
use typeval::{enum_constants, PersistedRecord};

enum_constants! {
    pub struct Mixed as "Mixed" {
        __default = Constant::Null,
        FLAG = Constant::Bool(true),
        COUNT = Constant::Int(-7),
        RATIO = Constant::Float(0.25),
        LABEL = Constant::str("quoted \"label\""),
    }
}

fn every_member() -> Vec<EnumType<Mixed>> {
    EnumType::<Mixed>::constants()
        .iter()
        .map(|(_, c)| EnumType::<Mixed>::new(c.clone(), true).unwrap())
        .collect()
}

#[test]
fn base_text_encoding() {
    assert_eq!(
        EnumType::<BaseEnum>::default().persist(),
        r#"O:8:"EnumType":1:{s:9:"__default";N;}"#
    );
}

#[test]
fn text_round_trip_preserves_every_member() {
    for e in every_member() {
        let restored = EnumType::<Mixed>::restore(&e.persist()).unwrap();
        assert_eq!(restored, e);
        assert_eq!(restored.to_string(), e.to_string());
        assert_eq!(restored.constant_name(), e.constant_name());
    }
}

#[test]
fn binary_round_trip_preserves_every_member() {
    for e in every_member() {
        let restored = EnumType::<Mixed>::from_bytes(&e.to_bytes().unwrap()).unwrap();
        assert_eq!(restored, e);
        assert_eq!(restored.to_string(), e.to_string());
    }
}

#[test]
fn serde_round_trip_preserves_every_member() {
    for e in every_member() {
        let json = serde_json::to_string(&e).unwrap();
        let restored: EnumType<Mixed> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, e);
        assert_eq!(restored.to_string(), e.to_string());
    }
}

#[test]
fn clone_preserves_string_form() {
    for e in every_member() {
        let copy = e.clone();
        assert_eq!(copy, e);
        assert_eq!(copy.to_string(), e.to_string());
    }
}

#[test]
fn restore_into_other_type_fails() {
    let e = EnumType::<Mixed>::new(-7i64, true).unwrap();
    assert!(matches!(
        EnumType::<BaseEnum>::restore(&e.persist()),
        Err(Error::Serialization(_))
    ));
    assert!(TypedString::restore(&e.persist()).is_err());
}

#[test]
fn restore_outside_table_fails() {
    let record = PersistedRecord::with_default("Mixed", Constant::Int(8));
    let err = EnumType::<Mixed>::restore(&record.to_text()).unwrap_err();
    assert_eq!(err.to_string(), "Value not a const in enum Mixed");
}

#[test]
fn restore_requires_identity_not_loose_equality() {
    // "-7" is loosely equal to COUNT but not identical
    let record = PersistedRecord::with_default("Mixed", Constant::str("-7"));
    assert!(EnumType::<Mixed>::from_record(record).is_err());
}
