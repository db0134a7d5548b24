//! # bytecursor-schema
//!
//! Declarative record schemas for bytecursor regions.
//!
//! A [`Schema`] maps field names, in order, to a [`FieldSpec`]: a
//! primitive numeric kind, a nested schema, or a custom decode function.
//! [`read_struct`] walks the schema against a cursor and produces a
//! [`Record`] of [`DecodedValue`]s. Field order is wire order; the schema
//! is trusted, not validated against the data.

pub mod engine;
pub mod record;
pub mod schema;

pub use engine::read_struct;
pub use record::{DecodedValue, Record};
pub use schema::{CustomDecoder, FieldSpec, Schema};
