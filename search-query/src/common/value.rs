use chrono::{DateTime, TimeZone};
use std::fmt::{Display, Formatter};

use super::{escape_and_quote, NULL_LITERAL};
use crate::errors::{ErrorKind, QueryError};

/// A numeric operand of a field clause.
///
/// Range operators (`>`, `<`, `>=`, `<=`) only accept a [Number], which keeps
/// string comparisons out of the query at compile time. Timestamps convert to
/// their unix seconds so `created` style fields can be compared directly.
///
/// Integers up to 32 bits, `i64`, floats and timestamps convert with `From`.
/// `u64`, `usize`, `isize`, `i128` and `u128` convert with `TryFrom` and fail
/// with [ErrorKind::NumberOutOfRange] outside the `i64` range:
///
/// ```rust
/// use search_query::common::Number;
/// use search_query::query::query;
///
/// # fn main() -> search_query::errors::QueryResult<()> {
/// let count: usize = 42;
/// assert_eq!(query().field("quantity").greater_than(Number::try_from(count)?).build(), "quantity>42");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Display for Number {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::Integer(value) => write!(f, "{}", value),
            Number::Float(value) => write!(f, "{}", value),
        }
    }
}

macro_rules! integer_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Number::Integer(value as i64)
                }
            }
        )*
    };
}

integer_number!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! wide_integer_number {
    ($($ty:ty),*) => {
        $(
            impl TryFrom<$ty> for Number {
                type Error = QueryError;

                fn try_from(value: $ty) -> Result<Self, Self::Error> {
                    i64::try_from(value).map(Number::Integer).map_err(|_| {
                        log::error!("Integer {} does not fit in a query number", value);
                        QueryError::new(
                            &format!("Integer {} is outside the range of a query number", value),
                            ErrorKind::NumberOutOfRange,
                        )
                    })
                }
            }
        )*
    };
}

wide_integer_number!(u64, usize, isize, i128, u128);

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(value as f64)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Number {
    fn from(value: DateTime<Tz>) -> Self {
        Number::Integer(value.timestamp())
    }
}

/// The right-hand side of a field clause.
///
/// Renders through [format_value]: `null` as a bare word, numbers in base 10
/// and strings quoted and escaped.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    #[default]
    Null,
    Number(Number),
    String(String),
}

impl Value {
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(value) => Some(*value),
            _ => None,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format_value(self))
    }
}

macro_rules! number_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Number(Number::from(value))
                }
            }
        )*
    };
}

number_value!(i8, i16, i32, i64, u8, u16, u32, f32, f64);

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Value {
    fn from(value: DateTime<Tz>) -> Self {
        Value::Number(Number::from(value))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::String(value.clone())
    }
}

/// Formats a clause value the way the query grammar expects it.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Null => NULL_LITERAL.to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(text) => escape_and_quote(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_format_null() {
        assert_eq!(format_value(&Value::Null), "null");
    }

    #[test]
    fn test_format_integer() {
        assert_eq!(format_value(&Value::from(1000)), "1000");
        assert_eq!(format_value(&Value::from(-42i64)), "-42");
        assert_eq!(format_value(&Value::from(7u8)), "7");
    }

    #[test]
    fn test_format_float() {
        assert_eq!(format_value(&Value::from(12.5)), "12.5");
        assert_eq!(format_value(&Value::from(1000.0)), "1000");
    }

    #[test]
    fn test_format_non_finite_float_verbatim() {
        assert_eq!(format_value(&Value::from(f64::NAN)), "NaN");
        assert_eq!(format_value(&Value::from(f64::INFINITY)), "inf");
    }

    #[test]
    fn test_format_string_is_quoted() {
        assert_eq!(format_value(&Value::from("jpy")), "\"jpy\"");
        assert_eq!(format_value(&Value::from(String::from("a\"b"))), "\"a\\\"b\"");
    }

    #[test]
    fn test_timestamp_converts_to_unix_seconds() {
        let created = Utc.with_ymd_and_hms(2023, 11, 14, 22, 13, 20).unwrap();
        assert_eq!(Number::from(created), Number::Integer(1_700_000_000));
    }

    #[test]
    fn test_wide_integers_convert_when_in_range() {
        assert_eq!(Number::try_from(42usize).unwrap(), Number::Integer(42));
        assert_eq!(Number::try_from(-7isize).unwrap(), Number::Integer(-7));
        assert_eq!(
            Number::try_from(i64::MAX as u64).unwrap(),
            Number::Integer(i64::MAX)
        );
        assert_eq!(Number::try_from(5_000i128).unwrap(), Number::Integer(5_000));
    }

    #[test]
    fn test_wide_integers_out_of_range_fail() {
        let err = Number::try_from(u64::MAX).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::NumberOutOfRange);
        assert!(Number::try_from(i128::MIN).is_err());
        assert!(Number::try_from(u128::MAX).is_err());
    }

    #[test]
    fn test_none_converts_to_null() {
        assert_eq!(Value::from(None::<&str>), Value::Null);
        assert_eq!(Value::from(Some("eur")), Value::from("eur"));
    }

    #[test]
    fn test_value_accessors() {
        assert!(Value::default().is_null());
        assert_eq!(Value::from("usd").as_str(), Some("usd"));
        assert_eq!(Value::from(3).as_number(), Some(Number::Integer(3)));
        assert_eq!(Value::from(3).as_str(), None);
        assert_eq!(Value::Null.as_number(), None);
    }

    #[test]
    fn test_value_display_matches_format() {
        assert_eq!(Value::from("x").to_string(), "\"x\"");
        assert_eq!(Value::Null.to_string(), "null");
    }
}
