//! # `growarray` - Growable Arrays With An Explicit Growth Policy
//!
//! A contiguous, owned array whose logical length is tracked separately from
//! its physical capacity, and whose growth is driven by a configurable load
//! factor instead of a hard-wired doubling rule. Built for measuring how a
//! hand-rolled container compares with `Vec<T>` and boxed slices for
//! indexed and iterator-driven reads.
//!
//! ## Guarantees
//!
//! ### Memory Safety
//! - **No unsafe code in public APIs**: the raw buffer is private; every
//!   public operation is safe and bounds-checked unless explicitly marked
//!   `unsafe`.
//! - **Exact ownership**: exactly the initialized prefix `[0, len)` is ever
//!   read, moved or dropped. Spare capacity is never observable.
//! - **Exclusive buffers**: each array owns its allocation; nothing is
//!   shared between instances.
//!
//! ### Growth Model
//! - **Divisor growth**: a full buffer of capacity `C` is replaced by one of
//!   `floor(C / f)` slots, where `f` is the growth factor in `(0.2, 0.8)`.
//! - **Monotonic capacity**: capacity never shrinks. Compaction returns a
//!   separate, exactly sized buffer.
//! - **Permissive configuration**: invalid options fall back to the defaults
//!   (capacity 16, factor 0.5) rather than failing.
//!
//! ## Architecture
//!
//! 1. **Raw storage** (`RawBuffer<T>`, crate-private):
//!    - Allocation through `std::alloc` with `Layout::array::<T>`
//!    - No allocation for zero-sized types or zero capacity
//!
//! 2. **Growable array** (`GrowableArray<T>`):
//!    - Append, indexed access, compaction, iteration
//!    - Serde-backed [`GrowthConfig`] for construction options
//!
//! ## Logging
//!
//! With the `tracing` feature enabled, growth events, compaction copies and
//! option normalization are reported as `tracing` events.
//!
//! ## Example
//!
//! ```rust
//! use growarray::{GrowableArray, GrowthConfig};
//!
//! let config = GrowthConfig::new(1, 0.5);
//! let mut array = GrowableArray::from_config(&config);
//!
//! let mut capacities = Vec::new();
//! for value in [3, 1, 4, 1] {
//!     array.push(value);
//!     capacities.push(array.capacity());
//! }
//!
//! assert_eq!(capacities, [1, 2, 4, 4]);
//! assert_eq!(array.iter().sum::<i32>(), 9);
//! assert!(array.at(4).is_err());
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;

pub use collections::vec::growable_array::{
    next_capacity, Iter, IntoIter, DEFAULT_CAPACITY, DEFAULT_GROWTH_FACTOR, MAX_GROWTH_FACTOR,
    MIN_GROWTH_FACTOR,
};
pub use collections::{GrowableArray, GrowthConfig, IndexOutOfRange};

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // The buffer pointer is non-null, so `Option` costs nothing.
    assert!(
        mem::size_of::<Option<GrowableArray<u64>>>() == mem::size_of::<GrowableArray<u64>>()
    );

    // Pointer, capacity, length and factor; no hidden bookkeeping.
    assert!(
        mem::size_of::<GrowableArray<u64>>()
            <= mem::size_of::<usize>() * 3 + mem::size_of::<f64>() * 2
    );
};
