//! Constructor shape checks

use crate::common::*;
use typeval::Result;

#[test]
fn constructor_takes_value_and_strictness() {
    let construct: fn(Value, bool) -> Result<EnumType<BaseEnum>> = EnumType::new::<Value>;
    assert!(construct(Value::Null, true).is_ok());
}

#[test]
fn both_parameters_are_optional() {
    let no_args: fn() -> EnumType = EnumType::default;
    let one_arg: fn(Value) -> Result<EnumType> = EnumType::with_initial_value::<Value>;

    assert!(no_args().value().is_null());
    assert!(one_arg(Value::Null).unwrap().value().is_null());
}

#[test]
fn lenient_is_the_default() {
    assert!(!EnumType::<BaseEnum>::DEFAULT_STRICT);
    assert!(EnumType::<BaseEnum>::with_initial_value(0i64).is_ok());
}

#[test]
fn base_declares_single_null_default() {
    assert_eq!(EnumType::<BaseEnum>::TYPE_NAME, "EnumType");
    assert_eq!(
        EnumType::<BaseEnum>::constants(),
        &[("__default", Constant::Null)][..]
    );
}

#[test]
fn values_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<EnumType<BaseEnum>>();
    assert_send_sync::<TypedString>();
}
