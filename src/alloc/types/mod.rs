use core::cmp;

pub mod reserve;
pub mod vec;

/// Capacity after a growing operation needs room for `required` elements: twice the previous capacity, or exactly
/// `required` when that is larger. Growing from zero therefore yields exactly `required`.
///
/// Returns `None` when the result is not representable.
pub fn calculate_new_capacity(capacity: usize, required: usize) -> Option<usize> {
  Some(cmp::max(capacity.checked_mul(2)?, required))
}
