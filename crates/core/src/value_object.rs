//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**: they are defined entirely by their
/// attribute values and are treated as immutable. To "modify" one, build a new
/// one.
///
/// - **Value Object**: `Money::from_cents(700)` equals any other 7.00
/// - **Entity**: a `Product` is the same product as long as its `ProductId` matches
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
