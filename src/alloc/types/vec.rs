use core::{
  cmp::Ordering, fmt::{self, Debug}, hash::{Hash, Hasher}, mem, ops::{Deref, DerefMut, Index, IndexMut}, slice::{self, SliceIndex}
};

use rust_alloc::{boxed::Box, vec};
use thiserror::Error;
use zerocopy::FromZeros;

use super::{calculate_new_capacity, reserve::ReserveRequest};
use crate::alloc::{AllocateError, OverflowedLayoutCalculation, array_ptr::ArrayPtr};

/// Returned by [SimpleVector::at] and [SimpleVector::at_mut] for an index past the last live element.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("index {index} is out of range for a vector of length {len}")]
pub struct OutOfRange {
  pub index: usize,
  pub len: usize,
}

/// A growable array backed by a single [ArrayPtr].
///
/// Slots `[0, len)` are live. Slots `[len, capacity)` are allocated and hold default or stale values that are never
/// exposed. Growing doubles the capacity (see [calculate_new_capacity]), and every reallocation invalidates
/// pointers previously taken from [SimpleVector::as_ptr].
pub struct SimpleVector<T> {
  items: ArrayPtr<T>,
  size: usize,
}

impl<T> SimpleVector<T> {
  pub const fn new() -> Self {
    Self {
      items: ArrayPtr::new(),
      size: 0,
    }
  }

  /// `len` elements whose bytes are all zero.
  pub fn zeroed(len: usize) -> Self
  where
    T: FromZeros,
  {
    Self {
      items: ArrayPtr::zeroed(len),
      size: len,
    }
  }

  pub fn len(&self) -> usize {
    self.size
  }

  pub fn capacity(&self) -> usize {
    self.items.len()
  }

  pub fn is_empty(&self) -> bool {
    self.size == 0
  }

  pub fn as_slice(&self) -> &[T] {
    &self.items[..self.size]
  }

  pub fn as_mut_slice(&mut self) -> &mut [T] {
    &mut self.items[..self.size]
  }

  /// Raw cursor to the first slot. Null while nothing is allocated.
  pub fn as_ptr(&self) -> *const T {
    self.items.as_ptr()
  }

  pub fn as_mut_ptr(&mut self) -> *mut T {
    self.items.as_mut_ptr()
  }

  pub fn iter(&self) -> slice::Iter<'_, T> {
    self.as_slice().iter()
  }

  pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
    self.as_mut_slice().iter_mut()
  }

  pub fn at(&self, index: usize) -> Result<&T, OutOfRange> {
    let len = self.size;
    self.as_slice().get(index).ok_or(OutOfRange { index, len })
  }

  pub fn at_mut(&mut self, index: usize) -> Result<&mut T, OutOfRange> {
    let len = self.size;
    self.as_mut_slice().get_mut(index).ok_or(OutOfRange { index, len })
  }

  /// Forgets every live element while keeping the allocation. The old values stay in their slots until overwritten.
  pub fn clear(&mut self) {
    self.size = 0;
  }

  /// # Panics
  /// Panics if the vector is empty.
  pub fn pop_back(&mut self) {
    assert!(!self.is_empty(), "pop_back on an empty vector");
    self.size -= 1;
  }

  /// Removes the element at `index`, shifting the tail one slot to the left. Returns the index of the element that
  /// now follows the removed one.
  ///
  /// # Panics
  /// Panics if `index >= len`.
  pub fn erase(&mut self, index: usize) -> usize {
    assert!(index < self.size, "erase index {index} out of range for a vector of length {}", self.size);
    // the erased value ends up in the first spare slot
    self.items[index..self.size].rotate_left(1);
    self.size -= 1;
    index
  }

  pub fn swap(&mut self, other: &mut Self) {
    self.items.swap(&mut other.items);
    mem::swap(&mut self.size, &mut other.size);
  }

  /// Moves the contents out, leaving an empty vector without an allocation behind.
  pub fn take(&mut self) -> Self {
    mem::take(self)
  }
}

impl<T: Default> SimpleVector<T> {
  /// `len` default elements, with the capacity equal to `len`.
  pub fn with_len(len: usize) -> Self {
    Self {
      items: ArrayPtr::with_len(len),
      size: len,
    }
  }

  /// An empty vector that can hold `request.capacity()` elements before reallocating.
  pub fn with_reserved(request: ReserveRequest) -> Self {
    Self {
      items: ArrayPtr::with_len(request.capacity()),
      size: 0,
    }
  }

  /// Moves the live elements into a fresh block of `new_capacity` default slots.
  fn try_reallocate(&mut self, new_capacity: usize) -> Result<(), AllocateError> {
    debug_assert!(new_capacity >= self.size);
    let mut items = ArrayPtr::try_with_len(new_capacity)?;
    items[..self.size].swap_with_slice(&mut self.items[..self.size]);
    log::trace!("reallocated vector of {} elements from {} to {new_capacity} slots", self.size, self.capacity());
    self.items = items;
    Ok(())
  }

  fn reallocate(&mut self, new_capacity: usize) {
    self.try_reallocate(new_capacity).unwrap_or_else(|error| error.fatal())
  }

  /// Reallocates so that at least `required` slots exist, following the doubling rule.
  fn grow(&mut self, required: usize) {
    let Some(new_capacity) = calculate_new_capacity(self.capacity(), required) else {
      AllocateError::from(OverflowedLayoutCalculation).fatal()
    };
    self.reallocate(new_capacity);
  }

  /// Grows the capacity to exactly `new_capacity` if it is currently smaller. Never shrinks.
  pub fn reserve(&mut self, new_capacity: usize) {
    if self.capacity() < new_capacity {
      self.reallocate(new_capacity);
    }
  }

  pub fn try_reserve(&mut self, new_capacity: usize) -> Result<(), AllocateError> {
    if self.capacity() < new_capacity {
      self.try_reallocate(new_capacity)?;
    }
    Ok(())
  }

  /// Changes the number of live elements.
  ///
  /// Shrinking only moves the end. Growing fills the new slots with `T::default()`, reallocating with the doubling
  /// rule when the capacity is too small.
  pub fn resize(&mut self, new_size: usize) {
    if new_size <= self.size {
      self.size = new_size;
      return;
    }

    if new_size <= self.capacity() {
      self.items[self.size..new_size].fill_with(T::default);
    } else {
      // fresh slots are already default
      self.grow(new_size);
    }
    self.size = new_size;
  }

  pub fn push_back(&mut self, value: T) {
    if self.size == self.capacity() {
      let Some(required) = self.capacity().checked_add(1) else {
        AllocateError::from(OverflowedLayoutCalculation).fatal()
      };
      self.grow(required);
    }

    self.items[self.size] = value;
    self.size += 1;
  }

  /// Inserts `value` before the element at `index`, or at the end when `index == len`. Returns `index`.
  ///
  /// # Panics
  /// Panics if `index > len`.
  pub fn insert(&mut self, index: usize, value: T) -> usize {
    assert!(index <= self.size, "insert index {index} out of range for a vector of length {}", self.size);

    if self.capacity() == 0 {
      self.push_back(value);
      return index;
    }

    if self.size < self.capacity() {
      // moves the spare slot at `size` down to `index`, shifting the tail right from the back
      self.items[index..=self.size].rotate_right(1);
      self.items[index] = value;
      self.size += 1;
      return index;
    }

    let Some(new_capacity) = calculate_new_capacity(self.capacity(), self.size + 1) else {
      AllocateError::from(OverflowedLayoutCalculation).fatal()
    };
    let mut items = ArrayPtr::<T>::with_len(new_capacity);
    items[..index].swap_with_slice(&mut self.items[..index]);
    items[index] = value;
    items[index + 1..=self.size].swap_with_slice(&mut self.items[index..self.size]);
    log::trace!("reallocated vector for insert from {} to {new_capacity} slots", self.capacity());

    self.items = items;
    self.size += 1;
    index
  }
}

impl<T: Clone> SimpleVector<T> {
  /// `len` clones of `value`, with the capacity equal to `len`.
  pub fn from_elem(len: usize, value: T) -> Self {
    Self {
      items: ArrayPtr::from_fn(len, |_| value.clone()),
      size: len,
    }
  }
}

#[macro_export]
macro_rules! simple_vector {
  () => {
    $crate::SimpleVector::new()
  };
  ($elem:expr; $n:expr) => {
    $crate::SimpleVector::from_elem($n, $elem)
  };
  ($($x:expr),+ $(,)?) => {
    $crate::SimpleVector::from([$($x),+])
  };
}

impl<T> Default for SimpleVector<T> {
  fn default() -> Self {
    Self::new()
  }
}

/// Copies the live elements into a block with the same capacity; the spare slots start out default.
impl<T: Clone + Default> Clone for SimpleVector<T> {
  fn clone(&self) -> Self {
    let live = self.as_slice();
    Self {
      items: ArrayPtr::from_fn(self.capacity(), |index| live.get(index).cloned().unwrap_or_default()),
      size: self.size,
    }
  }
}

/// Indexes the live elements only, so any position on an empty vector panics.
impl<T, I: SliceIndex<[T]>> Index<I> for SimpleVector<T> {
  type Output = I::Output;

  fn index(&self, index: I) -> &I::Output {
    &self.as_slice()[index]
  }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for SimpleVector<T> {
  fn index_mut(&mut self, index: I) -> &mut I::Output {
    &mut self.as_mut_slice()[index]
  }
}

impl<T> Deref for SimpleVector<T> {
  type Target = [T];

  fn deref(&self) -> &[T] {
    self.as_slice()
  }
}

impl<T> DerefMut for SimpleVector<T> {
  fn deref_mut(&mut self) -> &mut [T] {
    self.as_mut_slice()
  }
}

impl<T> AsRef<[T]> for SimpleVector<T> {
  fn as_ref(&self) -> &[T] {
    self
  }
}

impl<T> AsMut<[T]> for SimpleVector<T> {
  fn as_mut(&mut self) -> &mut [T] {
    self
  }
}

impl<T: Debug> Debug for SimpleVector<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.as_slice().fmt(f)
  }
}

impl<T: PartialEq> PartialEq for SimpleVector<T> {
  fn eq(&self, other: &Self) -> bool {
    self.as_slice() == other.as_slice()
  }
}

impl<T: Eq> Eq for SimpleVector<T> {}

impl<T: PartialEq> PartialEq<[T]> for SimpleVector<T> {
  fn eq(&self, other: &[T]) -> bool {
    self.as_slice() == other
  }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for SimpleVector<T> {
  fn eq(&self, other: &[T; N]) -> bool {
    self.as_slice() == other
  }
}

impl<T: PartialOrd> PartialOrd for SimpleVector<T> {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    self.as_slice().partial_cmp(other.as_slice())
  }
}

impl<T: Ord> Ord for SimpleVector<T> {
  fn cmp(&self, other: &Self) -> Ordering {
    self.as_slice().cmp(other.as_slice())
  }
}

impl<T: Hash> Hash for SimpleVector<T> {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.as_slice().hash(state)
  }
}

impl<T, const N: usize> From<[T; N]> for SimpleVector<T> {
  fn from(values: [T; N]) -> Self {
    let values: Box<[T]> = Box::new(values);
    Self {
      items: ArrayPtr::from(values),
      size: N,
    }
  }
}

impl<T: Clone> From<&[T]> for SimpleVector<T> {
  fn from(values: &[T]) -> Self {
    Self {
      items: ArrayPtr::from_fn(values.len(), |index| values[index].clone()),
      size: values.len(),
    }
  }
}

impl<T: Default> From<ReserveRequest> for SimpleVector<T> {
  fn from(request: ReserveRequest) -> Self {
    Self::with_reserved(request)
  }
}

impl<T> FromIterator<T> for SimpleVector<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    let values: Box<[T]> = iter.into_iter().collect();
    let size = values.len();
    Self {
      items: ArrayPtr::from(values),
      size,
    }
  }
}

impl<T: Default> Extend<T> for SimpleVector<T> {
  fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
    for value in iter {
      self.push_back(value);
    }
  }
}

impl<'a, T> IntoIterator for &'a SimpleVector<T> {
  type Item = &'a T;
  type IntoIter = slice::Iter<'a, T>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl<'a, T> IntoIterator for &'a mut SimpleVector<T> {
  type Item = &'a mut T;
  type IntoIter = slice::IterMut<'a, T>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter_mut()
  }
}

impl<T> IntoIterator for SimpleVector<T> {
  type Item = T;
  type IntoIter = vec::IntoIter<T>;

  fn into_iter(self) -> Self::IntoIter {
    let mut values = self.items.into_boxed_slice().into_vec();
    values.truncate(self.size);
    values.into_iter()
  }
}

#[cfg(test)]
mod tests {
  use core::{cell::Cell, cmp::Ordering};
  use std::{string::String, vec::Vec};

  use super::{OutOfRange, SimpleVector};
  use crate::reserve;

  #[derive(Default)]
  struct Counted<'a>(Option<&'a Cell<usize>>);

  impl Drop for Counted<'_> {
    fn drop(&mut self) {
      if let Some(drops) = self.0 {
        drops.set(drops.get() + 1);
      }
    }
  }

  fn collect<T: Clone>(vector: &SimpleVector<T>) -> Vec<T> {
    vector.iter().cloned().collect()
  }

  #[test]
  fn push_insert_erase_walkthrough() {
    let mut vector = SimpleVector::new();
    assert_eq!((vector.len(), vector.capacity()), (0, 0));

    vector.push_back(1);
    assert_eq!((vector.len(), vector.capacity()), (1, 1));
    vector.push_back(2);
    assert_eq!((vector.len(), vector.capacity()), (2, 2));
    vector.push_back(3);
    assert_eq!((vector.len(), vector.capacity()), (3, 4));

    assert_eq!(vector.insert(1, 99), 1);
    assert_eq!(vector, [1, 99, 2, 3]);
    assert_eq!((vector.len(), vector.capacity()), (4, 4));

    assert_eq!(vector.erase(1), 1);
    assert_eq!(vector, [1, 2, 3]);
    assert_eq!(vector.len(), 3);

    assert_eq!(vector.at(5), Err(OutOfRange { index: 5, len: 3 }));
  }

  #[test]
  fn empty_vector() {
    let vector = SimpleVector::<i32>::new();
    assert!(vector.is_empty());
    assert_eq!(vector.iter().count(), 0);
    assert_eq!(vector.at(0), Err(OutOfRange { index: 0, len: 0 }));
    assert_eq!(vector, SimpleVector::default());
  }

  #[test]
  fn with_len_is_default_filled() {
    let vector = SimpleVector::<i32>::with_len(5);
    assert_eq!((vector.len(), vector.capacity()), (5, 5));
    assert!(vector.iter().all(|value| *value == 0));
    assert!(SimpleVector::<i32>::with_len(0).as_ptr().is_null());
  }

  #[test]
  fn from_elem_fills() {
    let vector = SimpleVector::from_elem(3, String::from("abc"));
    assert_eq!((vector.len(), vector.capacity()), (3, 3));
    assert!(vector.iter().all(|value| value == "abc"));
    assert_eq!(simple_vector![7u8; 2], [7, 7]);
  }

  #[test]
  fn literal_lists() {
    let vector = simple_vector![1, 2, 3];
    assert_eq!((vector.len(), vector.capacity()), (3, 3));
    assert_eq!(vector, simple_vector![1, 2, 3]);
    assert_eq!(SimpleVector::from(&[4, 5][..]), [4, 5]);
    let empty: SimpleVector<i32> = simple_vector![];
    assert!(empty.is_empty());
  }

  #[test]
  fn reserve_request() {
    let vector = SimpleVector::<i32>::from(reserve(5));
    assert_eq!((vector.len(), vector.capacity()), (0, 5));
    let vector = SimpleVector::<i32>::with_reserved(reserve(0));
    assert_eq!((vector.len(), vector.capacity()), (0, 0));
  }

  #[test]
  fn reserve_grows_exactly_and_never_shrinks() {
    let mut vector = simple_vector![1, 2];
    vector.reserve(10);
    assert_eq!((vector.len(), vector.capacity()), (2, 10));
    assert_eq!(vector, [1, 2]);
    vector.reserve(3);
    assert_eq!(vector.capacity(), 10);
    assert!(vector.try_reserve(11).is_ok());
    assert_eq!(vector.capacity(), 11);
  }

  #[test]
  fn try_reserve_overflow() {
    let mut vector = SimpleVector::<u64>::new();
    assert!(vector.try_reserve(usize::MAX).is_err());
    assert_eq!(vector.capacity(), 0);
  }

  #[test]
  fn zeroed_vector() {
    let vector = SimpleVector::<u32>::zeroed(4);
    assert_eq!(vector, [0, 0, 0, 0]);
    assert_eq!(vector.capacity(), 4);
  }

  #[test]
  fn at_mut_writes() {
    let mut vector = simple_vector![1, 2, 3];
    *vector.at_mut(2).unwrap() = 30;
    assert_eq!(vector[2], 30);
    assert_eq!(vector.at_mut(3), Err(OutOfRange { index: 3, len: 3 }));
    vector[0] = 10;
    assert_eq!(vector, [10, 2, 30]);
  }

  #[test]
  fn out_of_range_message() {
    let error = SimpleVector::<u8>::new().at(2).unwrap_err();
    assert_eq!(format!("{error}"), "index 2 is out of range for a vector of length 0");
  }

  #[test]
  fn clear_keeps_capacity() {
    let mut vector = simple_vector![1, 2, 3];
    vector.clear();
    assert!(vector.is_empty());
    assert_eq!(vector.capacity(), 3);
    vector.push_back(4);
    assert_eq!(vector, [4]);
    assert_eq!(vector.capacity(), 3);
  }

  #[test]
  fn resize_shrinks_and_regrows_with_defaults() {
    let mut vector = simple_vector![1, 2, 3, 4];
    vector.resize(2);
    assert_eq!(vector, [1, 2]);
    assert_eq!(vector.capacity(), 4);
    vector.resize(4);
    assert_eq!(vector, [1, 2, 0, 0]);
    assert_eq!(vector.capacity(), 4);
  }

  #[test]
  fn resize_growth() {
    let mut vector = simple_vector![1, 2, 3];
    vector.resize(5);
    assert_eq!(vector, [1, 2, 3, 0, 0]);
    assert_eq!(vector.capacity(), 6);

    let mut vector = simple_vector![1];
    vector.resize(10);
    assert_eq!(vector.capacity(), 10);
    assert_eq!(vector.len(), 10);
  }

  #[test]
  fn insert_in_place() {
    let mut vector = SimpleVector::with_reserved(reserve(4));
    vector.push_back(1);
    vector.push_back(3);
    let address = vector.as_ptr();
    assert_eq!(vector.insert(1, 2), 1);
    assert_eq!(vector.insert(0, 0), 0);
    assert_eq!(vector, [0, 1, 2, 3]);
    assert_eq!(vector.as_ptr(), address);
  }

  #[test]
  fn insert_at_end_and_into_empty() {
    let mut vector = SimpleVector::new();
    assert_eq!(vector.insert(0, 5), 0);
    assert_eq!((vector.len(), vector.capacity()), (1, 1));
    assert_eq!(vector.insert(1, 6), 1);
    assert_eq!((vector.len(), vector.capacity()), (2, 2));
    assert_eq!(vector.insert(2, 7), 2);
    assert_eq!(vector, [5, 6, 7]);
    assert_eq!(vector.capacity(), 4);
  }

  #[test]
  fn insert_front_when_full_doubles() {
    let mut vector = simple_vector![String::from("b"), String::from("c")];
    assert_eq!(vector.insert(0, String::from("a")), 0);
    assert_eq!(collect(&vector), ["a", "b", "c"]);
    assert_eq!(vector.capacity(), 4);
  }

  #[test]
  fn erase_last_and_first() {
    let mut vector = simple_vector![1, 2, 3];
    assert_eq!(vector.erase(2), 2);
    assert_eq!(vector, [1, 2]);
    assert_eq!(vector.erase(0), 0);
    assert_eq!(vector, [2]);
    assert_eq!(vector.capacity(), 3);
  }

  #[test]
  fn pop_back() {
    let mut vector = simple_vector![1, 2];
    vector.pop_back();
    assert_eq!(vector, [1]);
    vector.pop_back();
    assert!(vector.is_empty());
    assert_eq!(vector.capacity(), 2);
  }

  #[test]
  #[should_panic(expected = "pop_back on an empty vector")]
  fn pop_back_empty() {
    SimpleVector::<i32>::new().pop_back();
  }

  #[test]
  #[should_panic(expected = "erase index 3 out of range")]
  fn erase_past_end() {
    simple_vector![1, 2, 3].erase(3);
  }

  #[test]
  #[should_panic(expected = "insert index 4 out of range")]
  fn insert_past_end() {
    simple_vector![1, 2, 3].insert(4, 0);
  }

  #[test]
  #[should_panic]
  fn index_empty() {
    let vector = SimpleVector::<i32>::with_reserved(reserve(2));
    let _ = vector[0];
  }

  #[test]
  fn swap_exchanges_everything() {
    let mut first = simple_vector![1, 2, 3];
    let mut second = SimpleVector::with_reserved(reserve(8));
    second.push_back(9);
    first.swap(&mut second);
    assert_eq!(first, [9]);
    assert_eq!(first.capacity(), 8);
    assert_eq!(second, [1, 2, 3]);
    assert_eq!(second.capacity(), 3);
  }

  #[test]
  fn take_empties_source() {
    let mut source = simple_vector![1, 2, 3];
    let moved = source.take();
    assert_eq!((source.len(), source.capacity()), (0, 0));
    assert_eq!(moved, [1, 2, 3]);
  }

  #[test]
  fn clone_copies_capacity() {
    let mut source = SimpleVector::with_reserved(reserve(6));
    source.extend([1, 2, 3]);
    let copy = source.clone();
    assert_eq!(copy, source);
    assert_eq!(copy.capacity(), 6);
    assert_ne!(copy.as_ptr(), source.as_ptr());
  }

  #[test]
  fn comparisons() {
    let mut first = simple_vector![1, 2, 3];
    let second = simple_vector![1, 2, 3];
    assert_eq!(first, second);
    first.push_back(0);
    assert_ne!(first, second);
    assert_eq!(first.cmp(&second), Ordering::Greater);
    assert!(simple_vector![1, 2] < simple_vector![1, 3]);
    assert!(simple_vector![2] > simple_vector![1, 9, 9]);
    assert!(SimpleVector::<i32>::new() <= SimpleVector::new());
  }

  #[test]
  fn iterators() {
    let mut vector: SimpleVector<i32> = (1..=4).collect();
    assert_eq!((vector.len(), vector.capacity()), (4, 4));
    for value in &mut vector {
      *value *= 2;
    }
    assert_eq!((&vector).into_iter().sum::<i32>(), 20);
    vector.pop_back();
    let owned: Vec<i32> = vector.into_iter().collect();
    assert_eq!(owned, [2, 4, 6]);
  }

  #[test]
  fn drops_live_and_stale_elements_once() {
    let drops = Cell::new(0);
    let mut vector = SimpleVector::new();
    for _ in 0..3 {
      vector.push_back(Counted(Some(&drops)));
    }
    // capacity 1 -> 2 -> 4 moved values out of the old blocks without dropping them
    assert_eq!(drops.get(), 0);

    vector.erase(0);
    vector.clear();
    assert_eq!(drops.get(), 0);

    drop(vector);
    assert_eq!(drops.get(), 3);
  }

  #[test]
  fn insert_moves_without_dropping() {
    let drops = Cell::new(0);

    let mut full = SimpleVector::new();
    full.push_back(Counted(Some(&drops)));
    full.push_back(Counted(Some(&drops)));
    assert_eq!(full.capacity(), 2);
    full.insert(0, Counted(Some(&drops)));
    assert_eq!((full.len(), full.capacity()), (3, 4));
    assert_eq!(drops.get(), 0);

    let mut partial = SimpleVector::with_reserved(reserve(4));
    partial.push_back(Counted(Some(&drops)));
    partial.push_back(Counted(Some(&drops)));
    let address = partial.as_ptr();
    partial.insert(0, Counted(Some(&drops)));
    assert_eq!(partial.as_ptr(), address);
    assert_eq!(drops.get(), 0);

    drop(full);
    assert_eq!(drops.get(), 3);
    drop(partial);
    assert_eq!(drops.get(), 6);
  }

  #[test]
  fn range_indexing() {
    let mut vector = simple_vector![1, 2, 3, 4];
    vector.pop_back();
    let tail: &[i32] = &vector[1..];
    assert_eq!(tail, [2, 3]);
    assert_eq!(&vector[..2], [1, 2]);
    vector[..2].fill(0);
    assert_eq!(vector, [0, 0, 3]);

    let empty = SimpleVector::<i32>::with_reserved(reserve(2));
    assert!(empty[..0].is_empty());
  }

  #[test]
  #[should_panic]
  fn range_past_len_panics() {
    let mut vector = simple_vector![1, 2, 3, 4];
    vector.pop_back();
    let _ = &vector[..4];
  }

  #[test]
  fn overwriting_a_stale_slot_drops_it() {
    let drops = Cell::new(0);
    let mut vector = SimpleVector::new();
    vector.push_back(Counted(Some(&drops)));
    vector.pop_back();
    vector.push_back(Counted::default());
    assert_eq!(drops.get(), 1);
  }

  #[test]
  fn debug_shows_live_elements() {
    let mut vector = simple_vector![1, 2, 3];
    vector.pop_back();
    assert_eq!(format!("{vector:?}"), "[1, 2]");
  }
}
