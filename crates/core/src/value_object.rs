//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value** - they represent
/// concepts where identity does not matter, only the values do. A product
/// rating of 4.5 stars is the same rating wherever it appears; a product with
/// id 7 is a specific product regardless of its current fields.
///
/// To "modify" a value object, create a new one with the new values. The
/// trait requires:
/// - **Clone**: value objects are cheap to copy (they are values, not references)
/// - **PartialEq**: compared by their attribute values
/// - **Debug**: debuggable for logging and testing
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
