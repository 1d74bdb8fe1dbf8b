//! Sheet field types.

/// Primitive types a sheet field can hold.
///
/// Every type has a fixed width; records carry no padding between fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// Signed 8-bit integer.
    Int8,
    /// Signed 16-bit integer.
    Int16,
    /// Signed 32-bit integer.
    Int32,
    /// Signed 64-bit integer.
    Int64,
    /// 32-bit floating point.
    Float32,
    /// 64-bit floating point.
    Float64,
    /// Boolean stored as a single byte.
    Boolean,
}

impl FieldType {
    /// All field types, in declaration order.
    pub const ALL: [FieldType; 7] = [
        Self::Int8,
        Self::Int16,
        Self::Int32,
        Self::Int64,
        Self::Float32,
        Self::Float64,
        Self::Boolean,
    ];

    /// Get the size in bytes of this type inside a record.
    pub const fn width(&self) -> usize {
        match self {
            Self::Int8 | Self::Boolean => 1,
            Self::Int16 => 2,
            Self::Int32 | Self::Float32 => 4,
            Self::Int64 | Self::Float64 => 8,
        }
    }

    /// Get the string name for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Int8 => "Int8",
            Self::Int16 => "Int16",
            Self::Int32 => "Int32",
            Self::Int64 => "Int64",
            Self::Float32 => "Float32",
            Self::Float64 => "Float64",
            Self::Boolean => "Boolean",
        }
    }

    /// Get the name used for this type in schema documents.
    pub fn document_name(&self) -> &'static str {
        match self {
            Self::Int8 => "INT8",
            Self::Int16 => "INT16",
            Self::Int32 => "INT32",
            Self::Int64 => "INT64",
            Self::Float32 => "FLOAT32",
            Self::Float64 => "FLOAT64",
            Self::Boolean => "BOOLEAN",
        }
    }

    /// Look up a type by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widths() {
        let widths: Vec<usize> = FieldType::ALL.iter().map(FieldType::width).collect();
        assert_eq!(widths, vec![1, 2, 4, 8, 4, 8, 1]);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(FieldType::from_name("INT16"), Some(FieldType::Int16));
        assert_eq!(FieldType::from_name("Float64"), Some(FieldType::Float64));
        assert_eq!(FieldType::from_name("boolean"), Some(FieldType::Boolean));
        assert_eq!(FieldType::from_name("UINT8"), None);
        assert_eq!(FieldType::from_name(""), None);
    }

    #[test]
    fn test_document_names_parse_back() {
        for t in FieldType::ALL {
            assert_eq!(FieldType::from_name(t.document_name()), Some(t));
        }
    }
}
