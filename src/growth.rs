//! Capacity growth policy for [`Buffer`](crate::Buffer).
//!
//! Capacities grow to powers of two. A buffer that must grow moves to the
//! larger of the next power of two at or above its current capacity and the
//! next power of two at or above the total size required, so repeated small
//! appends double the capacity while a single large write is accommodated
//! in one step.

/// Smallest power of two that is at least `value` (1 for 0).
///
/// # Panics
///
/// Panics if the result does not fit in `usize`.
#[must_use]
pub fn next_power_of_two(value: usize) -> usize {
    match value.checked_next_power_of_two() {
        Some(size) => size,
        None => panic!("capacity overflow: no power of two holds {value} bytes"),
    }
}

/// Capacity to grow to when `required` total bytes do not fit in `capacity`.
#[must_use]
pub fn grown_capacity(capacity: usize, required: usize) -> usize {
    next_power_of_two(capacity).max(next_power_of_two(required))
}
