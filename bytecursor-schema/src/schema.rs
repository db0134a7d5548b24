//! Caller-declared record schemas.
//!
//! A [`Schema`] is an ordered mapping from field name to field shape. Field
//! order is byte order: the schema is the authoritative description of the
//! wire layout. Schemas are plain values built per call site; there is no
//! registry and nothing global.

use crate::record::DecodedValue;
use bytecursor_core::{Cursor, NumericKind, Result};
use std::sync::Arc;

/// A caller-supplied decoder invoked with the cursor at the field's
/// position. Whatever it returns is stored verbatim; whatever it consumes
/// is what the field occupies on the wire.
pub type CustomDecoder = Arc<dyn Fn(&mut Cursor) -> Result<DecodedValue> + Send + Sync>;

/// Shape of one schema field.
#[derive(Clone)]
pub enum FieldSpec {
    /// A fixed-width numeric field.
    Primitive(NumericKind),
    /// An embedded record described by its own schema.
    Nested(Schema),
    /// A custom decode function.
    Custom(CustomDecoder),
}

impl std::fmt::Debug for FieldSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Primitive(kind) => f.debug_tuple("Primitive").field(kind).finish(),
            Self::Nested(schema) => f.debug_tuple("Nested").field(schema).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// An ordered, immutable field layout.
///
/// Built with the chaining constructors and then treated as read-only;
/// cloning is cheap (custom decoders are reference-counted).
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<(String, FieldSpec)>,
}

impl Schema {
    /// Creates an empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a primitive field.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, kind: NumericKind) -> Self {
        self.fields.push((name.into(), FieldSpec::Primitive(kind)));
        self
    }

    /// Appends a nested-record field.
    #[must_use]
    pub fn nested(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.fields.push((name.into(), FieldSpec::Nested(schema)));
        self
    }

    /// Appends a field decoded by `decoder`.
    #[must_use]
    pub fn custom<F>(mut self, name: impl Into<String>, decoder: F) -> Self
    where
        F: Fn(&mut Cursor) -> Result<DecodedValue> + Send + Sync + 'static,
    {
        self.fields
            .push((name.into(), FieldSpec::Custom(Arc::new(decoder))));
        self
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the schema declares no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldSpec)> {
        self.fields
            .iter()
            .map(|(name, spec)| (name.as_str(), spec))
    }

    /// Decodes one record from `cursor` against this schema.
    ///
    /// Equivalent to [`crate::read_struct`].
    pub fn read(&self, cursor: &mut Cursor) -> Result<crate::Record> {
        crate::engine::read_struct(cursor, self)
    }
}
