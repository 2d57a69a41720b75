//! Runtime value types for field access.
//!
//! The [`Value`] enum represents the runtime value of a field extracted from a
//! record. Records come in several shapes, so every field is optional from the
//! engine's point of view: an absent field is [`Value::None`].

use std::cmp::Ordering;

/// Runtime value for comparison, borrowed from the source record.
///
/// # Example
///
/// ```
/// use budfinder_seeker::{Number, Value};
///
/// struct Strain {
///     name: String,
///     effects: Vec<String>,
///     thc: f64,
/// }
///
/// fn accessor<'a>(strain: &'a Strain, field: &str) -> Value<'a> {
///     match field {
///         "name" => Value::Text(&strain.name),
///         "effects" => Value::Tags(&strain.effects),
///         "thc" => Value::Number(Number::F64(strain.thc)),
///         _ => Value::None,
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// String value (borrowed).
    Text(&'a str),
    /// List of string tags (borrowed).
    Tags(&'a [String]),
    /// Numeric value.
    Number(Number),
    /// Field not present on this record shape, or unset.
    None,
}

impl<'a> Value<'a> {
    /// Returns `true` if this is a `None` value.
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Returns `true` if this is a `Text` value.
    pub fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }

    /// Returns `true` if this is a `Tags` value.
    pub fn is_tags(&self) -> bool {
        matches!(self, Value::Tags(_))
    }

    /// Returns `true` if this is a `Number` value.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Extracts the string value, if present.
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Extracts the tag list, if present.
    pub fn as_tags(&self) -> Option<&'a [String]> {
        match self {
            Value::Tags(t) => Some(t),
            _ => None,
        }
    }

    /// Extracts the number value, if present.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Reads this value as a number, accepting number-like strings.
    ///
    /// Strings go through [`parse_numeric`](crate::parse_numeric); a string
    /// with no digits at all is treated as absent rather than zero.
    pub fn coerce_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(n.to_f64()),
            Value::Text(s) if s.chars().any(|c| c.is_ascii_digit()) => {
                Some(crate::parse_numeric(s))
            }
            _ => None,
        }
    }
}

/// Numeric value supporting all common numeric types.
///
/// Comparisons between different numeric types widen to `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Signed 64-bit integer.
    I64(i64),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// 64-bit floating point.
    F64(f64),
}

impl Number {
    /// Converts the number to f64 for comparison.
    pub fn to_f64(self) -> f64 {
        match self {
            Number::I64(n) => n as f64,
            Number::U64(n) => n as f64,
            Number::F64(n) => n,
        }
    }

    /// Compares two numbers, handling mixed types.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::I64(a), Number::I64(b)) => Some(a.cmp(&b)),
            (Number::U64(a), Number::U64(b)) => Some(a.cmp(&b)),
            (Number::F64(a), Number::F64(b)) => a.partial_cmp(&b),
            _ => self.to_f64().partial_cmp(&other.to_f64()),
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(*other)
    }
}

macro_rules! number_from {
    ($variant:ident as $target:ty: $($source:ty),*) => {
        $(
            impl From<$source> for Number {
                fn from(n: $source) -> Self {
                    Number::$variant(n as $target)
                }
            }
        )*
    };
}

number_from!(I64 as i64: i8, i16, i32, i64, isize);
number_from!(U64 as u64: u8, u16, u32, u64, usize);
number_from!(F64 as f64: f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_type_checks() {
        let tags = vec!["Relaxed".to_string()];
        assert!(Value::Text("og kush").is_text());
        assert!(Value::Tags(&tags).is_tags());
        assert!(Value::Number(Number::F64(22.0)).is_number());
        assert!(Value::None.is_none());
    }

    #[test]
    fn value_extractors() {
        let tags = vec!["Happy".to_string()];
        assert_eq!(Value::Text("hello").as_str(), Some("hello"));
        assert_eq!(Value::Tags(&tags).as_tags(), Some(&tags[..]));
        assert_eq!(
            Value::Number(Number::I64(42)).as_number(),
            Some(Number::I64(42))
        );

        // Wrong type returns None
        assert_eq!(Value::Text("test").as_number(), None);
        assert_eq!(Value::Number(Number::I64(1)).as_str(), None);
        assert_eq!(Value::None.as_tags(), None);
    }

    #[test]
    fn coerce_number_accepts_numeric_strings() {
        assert_eq!(Value::Number(Number::U64(18)).coerce_number(), Some(18.0));
        assert_eq!(Value::Text("22.5%").coerce_number(), Some(22.5));
        assert_eq!(Value::Text("n/a").coerce_number(), None);
        assert_eq!(Value::Text("").coerce_number(), None);
        assert_eq!(Value::None.coerce_number(), None);
    }

    #[test]
    fn number_comparisons_mixed_types() {
        assert_eq!(
            Number::I64(5).compare(Number::U64(10)),
            Some(Ordering::Less)
        );
        assert_eq!(
            Number::I64(5).compare(Number::F64(5.0)),
            Some(Ordering::Equal)
        );
        assert_eq!(
            Number::U64(10).compare(Number::F64(5.5)),
            Some(Ordering::Greater)
        );
    }

    #[test]
    fn number_nan_comparison() {
        assert_eq!(Number::F64(f64::NAN).compare(Number::F64(1.0)), None);
        assert_eq!(Number::F64(1.0).compare(Number::F64(f64::NAN)), None);
    }

    #[test]
    fn number_conversions() {
        assert_eq!(Number::from(42i32), Number::I64(42));
        assert_eq!(Number::from(42u32), Number::U64(42));
        assert_eq!(Number::from(42.5f64), Number::F64(42.5));
    }
}
