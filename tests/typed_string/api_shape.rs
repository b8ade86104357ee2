//! Constructor shape checks
//!
//! These compile only while the constructors keep their parameter lists.

use crate::common::*;
use typeval::Result;

#[test]
fn constructor_takes_value_and_strictness() {
    let construct: fn(Value, bool) -> Result<TypedString> = TypedString::new::<Value>;
    assert_eq!(construct(Value::from("foo"), true).unwrap(), "foo");
}

#[test]
fn both_parameters_are_optional() {
    let no_args: fn() -> TypedString = TypedString::default;
    let one_arg: fn(Value) -> Result<TypedString> = TypedString::with_initial_value::<Value>;

    assert_eq!(no_args(), "");
    assert_eq!(one_arg(Value::from("bar")).unwrap(), "bar");
}

#[test]
fn strict_is_the_default() {
    assert!(TypedString::DEFAULT_STRICT);
    assert!(TypedString::with_initial_value(1i64).is_err());
}

#[test]
fn declared_constants() {
    assert_eq!(TypedString::TYPE_NAME, "TypedString");
    assert_eq!(
        TypedString::constants(),
        &[("__default", Constant::str(""))][..]
    );
}
