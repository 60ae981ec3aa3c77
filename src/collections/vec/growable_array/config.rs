//! Construction options for [`GrowableArray`](super::GrowableArray).
//!
//! Out-of-range options are not errors: they are replaced by the defaults.
//! The capacity is signed so that values read from configuration files
//! (which may well be `0` or negative) are representable before
//! normalization.

use serde::{Deserialize, Serialize};

/// Capacity used when none (or a non-positive one) is given.
pub const DEFAULT_CAPACITY: usize = 16;

/// Growth factor used when none (or an out-of-range one) is given.
pub const DEFAULT_GROWTH_FACTOR: f64 = 0.5;

/// Exclusive lower bound for an accepted growth factor.
pub const MIN_GROWTH_FACTOR: f64 = 0.2;

/// Exclusive upper bound for an accepted growth factor.
pub const MAX_GROWTH_FACTOR: f64 = 0.8;

/// Sizing options for a growable array.
///
/// `growth_factor` is a divisor: a full buffer of capacity `C` is replaced by
/// one of capacity `floor(C / growth_factor)`.
///
/// Missing fields deserialize to their defaults, so `{"growth_factor": 0.25}`
/// is a complete document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthConfig {
    /// Initial physical capacity. Non-positive values fall back to [`DEFAULT_CAPACITY`].
    pub capacity: i64,
    /// Growth divisor, accepted only inside `(0.2, 0.8)`.
    pub growth_factor: f64,
}

impl GrowthConfig {
    /// Creates a config from raw, not yet normalized, values.
    pub const fn new(capacity: i64, growth_factor: f64) -> Self {
        Self {
            capacity,
            growth_factor,
        }
    }

    /// Returns the capacity after applying the fallback rule.
    pub fn normalized_capacity(&self) -> usize {
        if self.capacity <= 0 {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                requested = self.capacity,
                fallback = DEFAULT_CAPACITY,
                "non-positive capacity replaced by default"
            );
            return DEFAULT_CAPACITY;
        }
        // Only reachable on targets where usize is narrower than i64; the
        // allocation will then fail with a capacity overflow.
        usize::try_from(self.capacity).unwrap_or(usize::MAX)
    }

    /// Returns the growth factor after applying the fallback rule.
    pub fn normalized_growth_factor(&self) -> f64 {
        normalize_growth_factor(self.growth_factor)
    }

    /// Returns `(capacity, growth_factor)` after normalization.
    pub fn normalized(&self) -> (usize, f64) {
        (self.normalized_capacity(), self.normalized_growth_factor())
    }
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            // DEFAULT_CAPACITY is tiny; the cast cannot truncate.
            capacity: DEFAULT_CAPACITY as i64,
            growth_factor: DEFAULT_GROWTH_FACTOR,
        }
    }
}

/// Replaces a zero capacity with [`DEFAULT_CAPACITY`].
pub fn normalize_capacity(capacity: usize) -> usize {
    if capacity == 0 {
        #[cfg(feature = "tracing")]
        tracing::debug!(fallback = DEFAULT_CAPACITY, "zero capacity replaced by default");
        DEFAULT_CAPACITY
    } else {
        capacity
    }
}

/// Replaces a growth factor outside `(0.2, 0.8)` (including NaN) with
/// [`DEFAULT_GROWTH_FACTOR`].
pub fn normalize_growth_factor(growth_factor: f64) -> f64 {
    if growth_factor > MIN_GROWTH_FACTOR && growth_factor < MAX_GROWTH_FACTOR {
        growth_factor
    } else {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            requested = growth_factor,
            fallback = DEFAULT_GROWTH_FACTOR,
            "growth factor outside (0.2, 0.8) replaced by default"
        );
        DEFAULT_GROWTH_FACTOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GrowthConfig::default();
        assert_eq!(config.normalized(), (16, 0.5));
    }

    #[test]
    fn non_positive_capacity_falls_back() {
        assert_eq!(GrowthConfig::new(0, 0.5).normalized_capacity(), DEFAULT_CAPACITY);
        assert_eq!(GrowthConfig::new(-3, 0.5).normalized_capacity(), DEFAULT_CAPACITY);
        assert_eq!(GrowthConfig::new(1, 0.5).normalized_capacity(), 1);
        assert_eq!(normalize_capacity(0), DEFAULT_CAPACITY);
        assert_eq!(normalize_capacity(3), 3);
    }

    #[test]
    fn growth_factor_bounds_are_exclusive() {
        assert_eq!(normalize_growth_factor(0.2), DEFAULT_GROWTH_FACTOR);
        assert_eq!(normalize_growth_factor(0.8), DEFAULT_GROWTH_FACTOR);
        assert_eq!(normalize_growth_factor(0.0), DEFAULT_GROWTH_FACTOR);
        assert_eq!(normalize_growth_factor(1.5), DEFAULT_GROWTH_FACTOR);
        assert_eq!(normalize_growth_factor(-0.5), DEFAULT_GROWTH_FACTOR);
        assert_eq!(normalize_growth_factor(f64::NAN), DEFAULT_GROWTH_FACTOR);
        assert_eq!(normalize_growth_factor(0.21), 0.21);
        assert_eq!(normalize_growth_factor(0.79), 0.79);
    }
}
