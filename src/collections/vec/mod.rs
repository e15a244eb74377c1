//! Vector-like collections.

pub mod dynamic_array;

pub use dynamic_array::DynamicArray;
