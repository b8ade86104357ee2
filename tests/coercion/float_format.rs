//! Float rendering

use typeval::{format_float, DEFAULT_PRECISION};

#[test]
fn default_precision_rendering() {
    let cases = [
        (0.0, "0"),
        (1.0, "1"),
        (-2.5, "-2.5"),
        (0.1, "0.1"),
        (1.0 / 3.0, "0.33333333333333"),
        (0.9999999999999999, "1"),
        (123456789012345678.0, "1.2345678901235E+17"),
        (12345678901234.0, "12345678901234"),
        (0.0001, "0.0001"),
        (0.00001, "1.0E-5"),
        (1e100, "1.0E+100"),
    ];
    for (input, expected) in cases {
        assert_eq!(format_float(input, DEFAULT_PRECISION), expected, "{}", input);
    }
}

#[test]
fn lower_precision_rounds() {
    assert_eq!(format_float(3.14159, 3), "3.14");
    assert_eq!(format_float(1234.0, 3), "1.23E+3");
}
