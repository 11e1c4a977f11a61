//! Type boundary constants
//!
//! The limits of the platform's 32-bit signed integer, its double and the
//! canonical boolean labels, in the order the data type report prints them.

use crate::template::Value;

/// A labelled boundary value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boundary {
    pub label: &'static str,
    pub value: Value<'static>,
}

/// Smallest positive (subnormal) double, `double.Epsilon` in the report.
pub const DOUBLE_EPSILON: f64 = f64::from_bits(1);

pub const FALSE_STRING: &str = "False";
pub const TRUE_STRING: &str = "True";

/// Every boundary, in report order.
pub const TYPE_BOUNDARIES: &[Boundary] = &[
    Boundary {
        label: "Max of int",
        value: Value::I32(i32::MAX),
    },
    Boundary {
        label: "Min of int",
        value: Value::I32(i32::MIN),
    },
    Boundary {
        label: "Max of double",
        value: Value::F64(f64::MAX),
    },
    Boundary {
        label: "Min of double",
        value: Value::F64(f64::MIN),
    },
    Boundary {
        label: "double.Epsilon",
        value: Value::F64(DOUBLE_EPSILON),
    },
    Boundary {
        label: "double.PositiveInfinity",
        value: Value::F64(f64::INFINITY),
    },
    Boundary {
        label: "double.NegativeInfinity",
        value: Value::F64(f64::NEG_INFINITY),
    },
    Boundary {
        label: "bool.FalseString",
        value: Value::Str(FALSE_STRING),
    },
    Boundary {
        label: "bool.TrueString",
        value: Value::Str(TRUE_STRING),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::NumberLocale;

    fn rendered(label: &str) -> String {
        let boundary = TYPE_BOUNDARIES
            .iter()
            .find(|b| b.label == label)
            .unwrap();
        boundary.value.render(None, &NumberLocale::en_us()).unwrap()
    }

    #[test]
    fn test_int_limits() {
        assert_eq!(rendered("Max of int"), "2147483647");
        assert_eq!(rendered("Min of int"), "-2147483648");
    }

    #[test]
    fn test_double_limits() {
        assert_eq!(rendered("Max of double"), "1.7976931348623157E+308");
        assert_eq!(rendered("Min of double"), "-1.7976931348623157E+308");
        assert_eq!(rendered("double.Epsilon"), "5E-324");
        assert_eq!(rendered("double.PositiveInfinity"), "∞");
        assert_eq!(rendered("double.NegativeInfinity"), "-∞");
    }

    #[test]
    fn test_epsilon_is_smallest_subnormal() {
        assert!(DOUBLE_EPSILON > 0.0);
        assert!(DOUBLE_EPSILON < f64::MIN_POSITIVE);
        assert_eq!(DOUBLE_EPSILON / 2.0, 0.0);
    }

    #[test]
    fn test_bool_labels_match_value_rendering() {
        assert_eq!(rendered("bool.FalseString"), Value::bool_label(false));
        assert_eq!(rendered("bool.TrueString"), Value::bool_label(true));
    }

    #[test]
    fn test_order() {
        let labels: Vec<_> = TYPE_BOUNDARIES.iter().map(|b| b.label).collect();
        assert_eq!(labels.first(), Some(&"Max of int"));
        assert_eq!(labels.last(), Some(&"bool.TrueString"));
        assert_eq!(labels.len(), 9);
    }
}
