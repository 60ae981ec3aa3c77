//! Vector-like collections with manually managed storage.
//!
//! This module contains the growable array and the raw buffer it is built
//! on. The raw buffer is an implementation detail and is not exported.

pub mod growable_array;
mod raw_buffer;

pub use growable_array::{GrowableArray, GrowthConfig, IndexOutOfRange};
