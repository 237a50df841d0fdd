use crate::error::{VecError, VecResult};

/// Slots allocated when no capacity is given.
pub const DEFAULT_CAPACITY: usize = 32;
/// Capacity multiplier applied on every growth.
pub const GROWTH_FACTOR: usize = 2;

/// Capacity and growth settings of a vector.
///
/// A vector keeps its config for life, and containers derived from it
/// (clones, reversals, maps, filters) inherit it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VectorConfig {
    initial_capacity: usize,
    growth_factor: usize,
}

impl Default for VectorConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            growth_factor: GROWTH_FACTOR,
        }
    }
}

impl VectorConfig {
    pub const fn new(initial_capacity: usize, growth_factor: usize) -> Self {
        Self {
            initial_capacity,
            growth_factor,
        }
    }

    #[inline]
    pub const fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    #[inline]
    pub const fn with_growth_factor(mut self, growth_factor: usize) -> Self {
        self.growth_factor = growth_factor;
        self
    }

    #[inline]
    pub const fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    #[inline]
    pub const fn growth_factor(&self) -> usize {
        self.growth_factor
    }

    /// Rejects factors that would never grow the buffer.
    pub fn validate(&self) -> VecResult<()> {
        if self.growth_factor < 2 {
            return Err(VecError::InvalidArgument("growth factor must be at least 2"));
        }
        Ok(())
    }

    /// Capacity after one growth step from `capacity` slots.
    ///
    /// An empty buffer grows to a single slot. `None` on overflow.
    #[inline]
    pub fn next_capacity(&self, capacity: usize) -> Option<usize> {
        capacity.checked_mul(self.growth_factor).map(|c| c.max(1))
    }
}
