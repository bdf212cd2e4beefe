/// A request for a [SimpleVector](super::vec::SimpleVector) with room for `capacity` elements and no live ones.
///
/// Build it with [reserve] and hand it straight to the constructor:
/// ```
/// use simple_vector::{SimpleVector, reserve};
///
/// let vector: SimpleVector<u32> = reserve(16).into();
/// assert_eq!(vector.len(), 0);
/// assert_eq!(vector.capacity(), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReserveRequest {
  capacity: usize,
}

impl ReserveRequest {
  pub const fn new(capacity: usize) -> Self {
    Self { capacity }
  }

  pub const fn capacity(&self) -> usize {
    self.capacity
  }
}

pub const fn reserve(capacity: usize) -> ReserveRequest {
  ReserveRequest::new(capacity)
}
