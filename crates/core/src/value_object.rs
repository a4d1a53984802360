//! Value object trait: equality by value, not identity.
//!
//! Values flowing through a pipeline have **no identity**: two values built
//! from the same parts are interchangeable, and a stage may hold, clone or
//! compare them without caring where they came from.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**.
///
/// ## Immutability
///
/// Once built, a value object does not change. To "modify" one, build a new
/// one. This is what lets a single instance be read from many pipeline stages
/// (and threads) at once without copying or locking.
///
/// ## Requirements
///
/// - **Clone**: a stage may keep its own copy.
/// - **PartialEq**: comparison looks at the parts, never at the address.
/// - **Debug**: values show up in logs and test failures.
///
/// ```
/// use kvstream_core::{pair, ValueObject};
///
/// fn dedupe<T: ValueObject>(items: &[T]) -> Vec<T> {
///     let mut out: Vec<T> = Vec::new();
///     for item in items {
///         if !out.contains(item) {
///             out.push(item.clone());
///         }
///     }
///     out
/// }
///
/// let records = [pair("a", 1), pair("a", 1), pair("b", 2)];
/// assert_eq!(dedupe(&records), vec![pair("a", 1), pair("b", 2)]);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
