//! Capacity management for [DynamicArray](crate::DynamicArray).

use miette::Diagnostic;
use thiserror::Error;

pub const DEFAULT_MIN_CAPACITY: usize = 16;
pub const DEFAULT_LOAD_FACTOR: f64 = 0.67;
pub const DEFAULT_GROWTH_FACTOR: usize = 2;

/// Decides when and how far a dynamic array grows.
///
/// The array grows right after an insertion brings its length to
/// `capacity * load_factor` or above, multiplying the capacity by
/// `growth_factor`. Capacities never drop below `min_capacity`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct GrowthPolicy {
    #[cfg_attr(feature = "serde", serde(default = "default_min_capacity"))]
    pub min_capacity: usize,
    #[cfg_attr(feature = "serde", serde(default = "default_load_factor"))]
    pub load_factor: f64,
    #[cfg_attr(feature = "serde", serde(default = "default_growth_factor"))]
    pub growth_factor: usize,
}

#[cfg(feature = "serde")]
fn default_min_capacity() -> usize {
    DEFAULT_MIN_CAPACITY
}

#[cfg(feature = "serde")]
fn default_load_factor() -> f64 {
    DEFAULT_LOAD_FACTOR
}

#[cfg(feature = "serde")]
fn default_growth_factor() -> usize {
    DEFAULT_GROWTH_FACTOR
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self {
            min_capacity: DEFAULT_MIN_CAPACITY,
            load_factor: DEFAULT_LOAD_FACTOR,
            growth_factor: DEFAULT_GROWTH_FACTOR,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Error, Diagnostic)]
pub enum PolicyError {
    #[error("minimum capacity must be at least 1")]
    ZeroMinCapacity,
    #[error("load factor {0} is outside of the (0, 1] range")]
    LoadFactorOutOfRange(f64),
    #[error("growth factor {0} is too small, the capacity would never grow")]
    #[diagnostic(help("use a growth factor of 2 or more"))]
    GrowthFactorTooSmall(usize),
}

impl GrowthPolicy {
    /// Checks that the policy can keep the length below the capacity.
    pub fn validated(self) -> Result<Self, PolicyError> {
        if self.min_capacity == 0 {
            return Err(PolicyError::ZeroMinCapacity);
        }
        if !(self.load_factor > 0.0 && self.load_factor <= 1.0) {
            return Err(PolicyError::LoadFactorOutOfRange(self.load_factor));
        }
        if self.growth_factor < 2 {
            return Err(PolicyError::GrowthFactorTooSmall(self.growth_factor));
        }
        Ok(self)
    }

    /// Clamps a requested capacity to the floor.
    pub fn initial_capacity(&self, requested: usize) -> usize {
        requested.max(self.min_capacity)
    }

    /// Whether an array holding `len` elements has crossed the threshold.
    pub fn needs_growth(&self, len: usize, capacity: usize) -> bool {
        len as f64 >= capacity as f64 * self.load_factor
    }

    /// Next capacity, or `None` on overflow.
    pub fn grown_capacity(&self, capacity: usize) -> Option<usize> {
        capacity.checked_mul(self.growth_factor)
    }
}
