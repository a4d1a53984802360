//! `kvstream-core`: the key/value unit exchanged between pipeline stages.
//!
//! This crate contains **pure value** primitives (no infrastructure concerns):
//! building a [`Pair`], reading it back, comparing, hashing and printing it.

pub mod pair;
pub mod render;
pub mod value_object;

pub use pair::{Pair, Record, pair};
pub use render::{NULL_TOKEN, Render};
pub use value_object::ValueObject;
