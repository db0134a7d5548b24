//! Decoded records and field values.

use bytecursor_core::Value;

/// A value produced by decoding one schema field.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedValue {
    /// A scalar numeric value.
    Number(Value),
    /// Decoded text.
    Text(String),
    /// Raw bytes.
    Bytes(Vec<u8>),
    /// A homogeneous run of scalar values.
    Array(Vec<Value>),
    /// A nested record.
    Record(Record),
}

impl DecodedValue {
    /// Returns the scalar value, if this is a number.
    #[must_use]
    pub fn as_number(&self) -> Option<Value> {
        match self {
            Self::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the text, if this is a string.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the nested record, if this is one.
    #[must_use]
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(r) => Some(r),
            _ => None,
        }
    }
}

impl From<Value> for DecodedValue {
    fn from(v: Value) -> Self {
        Self::Number(v)
    }
}

impl From<String> for DecodedValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Vec<u8>> for DecodedValue {
    fn from(b: Vec<u8>) -> Self {
        Self::Bytes(b)
    }
}

/// A decoded record: field values in schema declaration order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    fields: Vec<(String, DecodedValue)>,
}

impl Record {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, name: String, value: DecodedValue) {
        self.fields.push((name, value));
    }

    /// Looks a field up by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&DecodedValue> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DecodedValue)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }
}
