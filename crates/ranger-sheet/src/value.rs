//! Type-safe scalar values stored in sheet records.

use crate::FieldType;

/// A single field value.
///
/// There is exactly one variant per [`FieldType`], so a value always knows the
/// type it was read as or constructed with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// Signed 8-bit integer.
    Int8(i8),
    /// Signed 16-bit integer.
    Int16(i16),
    /// Signed 32-bit integer.
    Int32(i32),
    /// Signed 64-bit integer.
    Int64(i64),
    /// 32-bit floating point.
    Float32(f32),
    /// 64-bit floating point.
    Float64(f64),
    /// Boolean value.
    Boolean(bool),
}

impl Value {
    /// Get the field type this value belongs to.
    #[inline]
    pub fn field_type(&self) -> FieldType {
        match self {
            Value::Int8(_) => FieldType::Int8,
            Value::Int16(_) => FieldType::Int16,
            Value::Int32(_) => FieldType::Int32,
            Value::Int64(_) => FieldType::Int64,
            Value::Float32(_) => FieldType::Float32,
            Value::Float64(_) => FieldType::Float64,
            Value::Boolean(_) => FieldType::Boolean,
        }
    }

    /// Parse the textual form of a value as the given type.
    ///
    /// Integers are base 10 and must fit the declared width, floats accept any
    /// decimal or `inf`/`NaN` form, and booleans accept only `true` or `false`
    /// (ASCII case-insensitive). Surrounding whitespace is ignored.
    pub fn parse(field_type: FieldType, text: &str) -> Option<Self> {
        let text = text.trim();
        match field_type {
            FieldType::Int8 => text.parse().ok().map(Value::Int8),
            FieldType::Int16 => text.parse().ok().map(Value::Int16),
            FieldType::Int32 => text.parse().ok().map(Value::Int32),
            FieldType::Int64 => text.parse().ok().map(Value::Int64),
            FieldType::Float32 => text.parse().ok().map(Value::Float32),
            FieldType::Float64 => text.parse().ok().map(Value::Float64),
            FieldType::Boolean => {
                if text.eq_ignore_ascii_case("true") {
                    Some(Value::Boolean(true))
                } else if text.eq_ignore_ascii_case("false") {
                    Some(Value::Boolean(false))
                } else {
                    None
                }
            }
        }
    }

    /// Try to get this value as an i64.
    #[inline]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int8(v) => Some(*v as i64),
            Value::Int16(v) => Some(*v as i64),
            Value::Int32(v) => Some(*v as i64),
            Value::Int64(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get this value as an f64.
    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float32(v) => Some(*v as f64),
            Value::Float64(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get this value as a boolean.
    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(v) => Some(*v),
            _ => None,
        }
    }
}

// `Display` is the canonical text form: `Value::parse` reads back exactly the
// value that was formatted, floats included.
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int8(v) => write!(f, "{}", v),
            Value::Int16(v) => write!(f, "{}", v),
            Value::Int32(v) => write!(f, "{}", v),
            Value::Int64(v) => write!(f, "{}", v),
            Value::Float32(v) => write!(f, "{}", v),
            Value::Float64(v) => write!(f, "{}", v),
            Value::Boolean(v) => write!(f, "{}", v),
        }
    }
}

impl From<i8> for Value {
    fn from(v: i8) -> Self {
        Value::Int8(v)
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Value::Int16(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int32(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int64(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float32(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float64(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integers() {
        assert_eq!(Value::parse(FieldType::Int8, "-128"), Some(Value::Int8(-128)));
        assert_eq!(Value::parse(FieldType::Int8, "128"), None);
        assert_eq!(Value::parse(FieldType::Int16, " 120 "), Some(Value::Int16(120)));
        assert_eq!(Value::parse(FieldType::Int32, "0x10"), None);
        assert_eq!(
            Value::parse(FieldType::Int64, "-9223372036854775808"),
            Some(Value::Int64(i64::MIN))
        );
    }

    #[test]
    fn test_parse_booleans() {
        assert_eq!(Value::parse(FieldType::Boolean, "true"), Some(Value::Boolean(true)));
        assert_eq!(Value::parse(FieldType::Boolean, "FALSE"), Some(Value::Boolean(false)));
        assert_eq!(Value::parse(FieldType::Boolean, "1"), None);
        assert_eq!(Value::parse(FieldType::Boolean, "yes"), None);
    }

    #[test]
    fn test_parse_floats() {
        assert_eq!(Value::parse(FieldType::Float32, "1.5"), Some(Value::Float32(1.5)));
        assert_eq!(Value::parse(FieldType::Float64, "-2e3"), Some(Value::Float64(-2000.0)));
        assert_eq!(
            Value::parse(FieldType::Float32, "inf"),
            Some(Value::Float32(f32::INFINITY))
        );
        assert!(matches!(
            Value::parse(FieldType::Float64, "NaN"),
            Some(Value::Float64(v)) if v.is_nan()
        ));
        assert_eq!(Value::parse(FieldType::Float32, "1,5"), None);
    }

    #[test]
    fn test_display_parses_back() {
        let values = [
            Value::Int8(-7),
            Value::Int16(i16::MAX),
            Value::Int32(i32::MIN),
            Value::Int64(1 << 40),
            Value::Float32(0.1),
            Value::Float32(f32::MAX),
            Value::Float64(std::f64::consts::PI),
            Value::Float64(-0.0),
            Value::Float64(1e-300),
            Value::Boolean(true),
        ];

        for value in values {
            let text = value.to_string();
            assert_eq!(Value::parse(value.field_type(), &text), Some(value), "{}", text);
        }
    }

    #[test]
    fn test_negative_zero_keeps_sign() {
        let text = Value::Float64(-0.0).to_string();
        let parsed = Value::parse(FieldType::Float64, &text).unwrap();
        assert!(parsed.as_f64().unwrap().is_sign_negative());
    }

    #[test]
    fn test_accessors_widen() {
        assert_eq!(Value::Int8(-7).as_i64(), Some(-7));
        assert_eq!(Value::Int16(i16::MIN).as_i64(), Some(i16::MIN as i64));
        assert_eq!(Value::Int32(120).as_i64(), Some(120));
        assert_eq!(Value::Int64(i64::MAX).as_i64(), Some(i64::MAX));
        assert_eq!(Value::Float32(1.5).as_i64(), None);
        assert_eq!(Value::Boolean(true).as_i64(), None);

        assert_eq!(Value::Float32(1.5).as_f64(), Some(1.5));
        assert_eq!(Value::Int32(1).as_f64(), None);
        assert_eq!(Value::Int8(1).as_bool(), None);
    }

    #[test]
    fn test_field_type() {
        assert_eq!(Value::from(55i8).field_type(), FieldType::Int8);
        assert_eq!(Value::from(2.0f64).field_type(), FieldType::Float64);
        assert_eq!(Value::from(true).field_type(), FieldType::Boolean);
    }
}
