use std::borrow::Cow;

use rust_decimal::Decimal;

/// A single scalar cell value.
///
/// Rows are ordered sequences of `Field`s, positionally aligned with the
/// header row. Absent values serialize to the empty string; numbers
/// serialize via their standard decimal textual form (no grouping, no
/// imposed precision). [`Decimal`] is carried for exact monetary amounts
/// that must not round-trip through `f64`.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    /// Textual value, emitted as-is (escaped by the generator).
    Text(String),
    /// Signed integer.
    Integer(i64),
    /// Floating-point number.
    Float(f64),
    /// Exact decimal number.
    Decimal(Decimal),
    /// Absent value; serializes to the empty string.
    Empty,
}

impl Field {
    /// Coerce the value to the textual form used in the generated document.
    ///
    /// Borrows for `Text` and `Empty`, allocates only for numbers.
    pub fn to_text(&self) -> Cow<'_, str> {
        match self {
            Field::Text(s) => Cow::Borrowed(s),
            Field::Integer(n) => Cow::Owned(n.to_string()),
            Field::Float(n) => Cow::Owned(n.to_string()),
            Field::Decimal(d) => Cow::Owned(d.to_string()),
            Field::Empty => Cow::Borrowed(""),
        }
    }

    /// True if this is the absent marker.
    pub fn is_empty(&self) -> bool {
        matches!(self, Field::Empty)
    }
}

impl From<&str> for Field {
    fn from(s: &str) -> Self {
        Field::Text(s.to_string())
    }
}

impl From<String> for Field {
    fn from(s: String) -> Self {
        Field::Text(s)
    }
}

impl From<i64> for Field {
    fn from(n: i64) -> Self {
        Field::Integer(n)
    }
}

impl From<i32> for Field {
    fn from(n: i32) -> Self {
        Field::Integer(n.into())
    }
}

impl From<u32> for Field {
    fn from(n: u32) -> Self {
        Field::Integer(n.into())
    }
}

impl From<f64> for Field {
    fn from(n: f64) -> Self {
        Field::Float(n)
    }
}

impl From<Decimal> for Field {
    fn from(d: Decimal) -> Self {
        Field::Decimal(d)
    }
}

impl<T: Into<Field>> From<Option<T>> for Field {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Field::Empty,
        }
    }
}
