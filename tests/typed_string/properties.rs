//! Property tests

use crate::common::*;
use proptest::prelude::*;

proptest! {
    #[test]
    fn any_string_is_accepted_unchanged(s in ".*", strict in any::<bool>()) {
        let typed = TypedString::new(s.clone(), strict).unwrap();
        prop_assert_eq!(typed.as_str(), s.as_str());
    }

    #[test]
    fn restore_never_carries_content(s in ".*") {
        let typed = TypedString::new(s, true).unwrap();
        let restored = TypedString::restore(&typed.persist()).unwrap();
        prop_assert_eq!(restored.as_str(), "");
    }

    #[test]
    fn lenient_int_is_decimal(n in any::<i64>()) {
        let typed = TypedString::new(n, false).unwrap();
        prop_assert_eq!(typed.to_string(), n.to_string());
        prop_assert_eq!(typed.to_int(), n);
    }

    #[test]
    fn strict_rejects_every_int(n in any::<i64>()) {
        prop_assert!(matches!(TypedString::new(n, true), Err(Error::InvalidInitialValue)));
    }

    #[test]
    fn lenient_float_reparses_closely(f in -1.0e12f64..1.0e12f64) {
        let typed = TypedString::new(f, false).unwrap();
        let parsed: f64 = typed.as_str().parse().unwrap();
        prop_assert!((parsed - f).abs() <= f.abs() * 1e-13 + 1e-300);
    }
}
