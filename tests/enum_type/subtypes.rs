//! Declared subtypes

use crate::common::*;
use typeval::{enum_constants, EnumConstants};

enum_constants! {
    /// HTTP method
    pub struct Method as "Method" {
        __default = Constant::str("GET"),
        GET = Constant::str("GET"),
        POST = Constant::str("POST"),
        DELETE = Constant::str("DELETE"),
    }
}

enum_constants! {
    pub struct Priority as "Priority" {
        __default = Constant::Int(2),
        LOW = Constant::Int(1),
        NORMAL = Constant::Int(2),
        HIGH = Constant::Int(3),
        URGENT = Constant::str("10"),
    }
}

/// Hand-written table
struct Toggle;

impl EnumConstants for Toggle {
    const TYPE_NAME: &'static str = "Toggle";

    fn constants() -> &'static [(&'static str, Constant)] {
        static TABLE: &[(&str, Constant)] = &[
            ("__default", Constant::Bool(false)),
            ("ON", Constant::Bool(true)),
        ];
        TABLE
    }
}

#[test]
fn macro_preserves_declaration_order() {
    let names: Vec<&str> = Method::constants().iter().map(|(n, _)| *n).collect();
    assert_eq!(names, vec!["__default", "GET", "POST", "DELETE"]);
    assert_eq!(Method::TYPE_NAME, "Method");
}

#[test]
fn default_is_the_default_entry() {
    let m = EnumType::<Method>::default();
    assert_eq!(m.to_string(), "GET");
    assert_eq!(m.constant_name(), "GET");

    let p = EnumType::<Priority>::default();
    assert_eq!(p.value(), &Constant::Int(2));
    assert_eq!(p.constant_name(), "NORMAL");
}

#[test]
fn strict_membership_is_identity() {
    assert!(EnumType::<Method>::new("POST", true).is_ok());
    assert!(EnumType::<Method>::new("post", true).is_err());
    assert!(EnumType::<Priority>::new(3i64, true).is_ok());
    assert!(EnumType::<Priority>::new(3.0, true).is_err());
    assert!(EnumType::<Priority>::new("3", true).is_err());
}

#[test]
fn lenient_membership_is_loose_equality() {
    let high = EnumType::<Priority>::new("3", false).unwrap();
    assert_eq!(high.value(), &Constant::Int(3));
    assert_eq!(high.constant_name(), "HIGH");

    let urgent = EnumType::<Priority>::new(10i64, false).unwrap();
    assert_eq!(urgent.value(), &Constant::str("10"));
    assert_eq!(urgent.to_int(), 10);

    let from_float = EnumType::<Priority>::new(1.0, false).unwrap();
    assert_eq!(from_float.constant_name(), "LOW");

    // numeric strings compare numerically
    let from_exponent = EnumType::<Priority>::new("1e1", false).unwrap();
    assert_eq!(from_exponent.value(), &Constant::str("10"));
}

#[test]
fn lenient_walks_table_in_order() {
    // true is loosely equal to every non-zero entry; the first one wins
    let e = EnumType::<Priority>::new(true, false).unwrap();
    assert_eq!(e.value(), &Constant::Int(2));
}

#[test]
fn stringable_object_matches_string_constant() {
    let m = EnumType::<Method>::new(stringable("DELETE"), false).unwrap();
    assert_eq!(m.constant_name(), "DELETE");
    assert!(EnumType::<Method>::new(stringable("DELETE"), true).is_err());
}

#[test]
fn error_names_declared_type() {
    let err = EnumType::<Method>::new("PATCH", false).unwrap_err();
    assert_eq!(err.to_string(), "Value not a const in enum Method");
}

#[test]
fn hand_written_table() {
    let off = EnumType::<Toggle>::default();
    assert_eq!(off.value(), &Constant::Bool(false));
    assert_eq!(off.to_string(), "");

    let on = EnumType::<Toggle>::new("yes", false).unwrap();
    assert_eq!(on.constant_name(), "ON");
    assert_eq!(on.to_int(), 1);
    assert!(EnumType::<Toggle>::new(1i64, true).is_err());
}
