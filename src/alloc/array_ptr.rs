use core::{
  alloc::Layout, fmt::{self, Debug}, marker::PhantomData, mem, ops::{Deref, DerefMut}, ptr::{self, NonNull}, slice
};

use rust_alloc::boxed::Box;
use zerocopy::FromZeros;

use super::{AllocateError, calculate_layout_for_array, std_alloc::StdAlloc};

/// Exclusive owner of a fixed-length heap array.
///
/// An `ArrayPtr` is either null or owns a block of `len` initialized elements allocated from the global heap with
/// the layout of `[T; len]`. It never resizes. Moving it moves ownership; [mem::take] leaves the source null.
/// There is no `Clone`, so a block can never have two owners.
pub struct ArrayPtr<T> {
  ptr: Option<NonNull<T>>,
  len: usize,
  marker: PhantomData<T>,
}

// Safety: ArrayPtr owns its elements the same way Box<[T]> does
unsafe impl<T: Send> Send for ArrayPtr<T> {}
unsafe impl<T: Sync> Sync for ArrayPtr<T> {}

impl<T> ArrayPtr<T> {
  /// A null handle. Does not allocate.
  pub const fn new() -> Self {
    Self {
      ptr: None,
      len: 0,
      marker: PhantomData,
    }
  }

  /// Reserves an uninitialized block for `len` elements. Returns `None` when nothing needs to be allocated.
  fn allocate(len: usize, zeroed: bool) -> Result<Option<NonNull<T>>, AllocateError> {
    if len == 0 {
      return Ok(None);
    }

    let layout = calculate_layout_for_array::<T>(len)?;
    if layout.size() == 0 {
      return Ok(Some(NonNull::dangling()));
    }

    let ptr = if zeroed {
      StdAlloc.alloc_zeroed(layout)?
    } else {
      StdAlloc.alloc(layout)?
    };

    Ok(Some(ptr.cast()))
  }

  pub fn try_from_fn(len: usize, mut f: impl FnMut(usize) -> T) -> Result<Self, AllocateError> {
    let Some(ptr) = Self::allocate(len, false)? else {
      return Ok(Self::new());
    };

    let mut guard = PartialInit {
      ptr,
      initialized: 0,
      len,
    };
    while guard.initialized < len {
      let value = f(guard.initialized);
      // Safety: the slot lies inside the block and has not been written yet
      unsafe { ptr.add(guard.initialized).write(value) };
      guard.initialized += 1;
    }
    mem::forget(guard);

    Ok(Self {
      ptr: Some(ptr),
      len,
      marker: PhantomData,
    })
  }

  /// Allocates `len` elements, initializing slot `i` with `f(i)`.
  ///
  /// # Panics
  /// Panics on capacity overflow and aborts through [handle_alloc_error](rust_alloc::alloc::handle_alloc_error) when
  /// the heap is exhausted.
  pub fn from_fn(len: usize, f: impl FnMut(usize) -> T) -> Self {
    Self::try_from_fn(len, f).unwrap_or_else(|error| error.fatal())
  }

  pub fn try_with_len(len: usize) -> Result<Self, AllocateError>
  where
    T: Default,
  {
    Self::try_from_fn(len, |_| T::default())
  }

  /// Allocates `len` default-constructed elements. A length of zero gives a null handle.
  pub fn with_len(len: usize) -> Self
  where
    T: Default,
  {
    Self::from_fn(len, |_| T::default())
  }

  pub fn try_zeroed(len: usize) -> Result<Self, AllocateError>
  where
    T: FromZeros,
  {
    let ptr = Self::allocate(len, true)?;
    Ok(Self {
      ptr,
      len,
      marker: PhantomData,
    })
  }

  /// Allocates `len` elements whose bytes are all zero, without constructing them one by one.
  pub fn zeroed(len: usize) -> Self
  where
    T: FromZeros,
  {
    Self::try_zeroed(len).unwrap_or_else(|error| error.fatal())
  }

  /// Adopts a block without allocating.
  ///
  /// # Safety
  /// `raw` must point to `raw.len()` initialized elements allocated from the global allocator with the layout
  /// `Layout::array::<T>(raw.len())`, such as a pointer returned by [ArrayPtr::release] or `Box::<[T]>::into_raw`.
  /// Nothing else may own the block afterwards.
  pub unsafe fn from_raw(raw: NonNull<[T]>) -> Self {
    let len = raw.len();
    if len == 0 {
      return Self::new();
    }

    Self {
      ptr: Some(raw.cast()),
      len,
      marker: PhantomData,
    }
  }

  /// Adopts a block, or becomes null for `None`.
  ///
  /// # Safety
  /// See [ArrayPtr::from_raw].
  pub unsafe fn from_raw_opt(raw: Option<NonNull<[T]>>) -> Self {
    match raw {
      Some(raw) => unsafe { Self::from_raw(raw) },
      None => Self::new(),
    }
  }

  /// Gives up ownership of the block and leaves the handle null.
  ///
  /// The caller becomes responsible for the elements and the memory; [ArrayPtr::from_raw] or `Box::from_raw` take it
  /// back. Releasing a null handle returns `None`.
  #[must_use = "the released block leaks unless it is adopted again"]
  pub fn release(&mut self) -> Option<NonNull<[T]>> {
    let ptr = self.ptr.take()?;
    let len = mem::replace(&mut self.len, 0);
    log::debug!("released array of {len} elements at {ptr:p}");
    Some(NonNull::slice_from_raw_parts(ptr, len))
  }

  #[must_use = "the released block leaks unless it is adopted again"]
  pub fn into_raw(mut self) -> Option<NonNull<[T]>> {
    self.release()
  }

  pub fn into_boxed_slice(self) -> Box<[T]> {
    match self.into_raw() {
      // Safety: the block was allocated with the layout Box<[T]> expects
      Some(raw) => unsafe { Box::from_raw(raw.as_ptr()) },
      None => Box::default(),
    }
  }

  pub fn is_null(&self) -> bool {
    self.ptr.is_none()
  }

  pub fn len(&self) -> usize {
    self.len
  }

  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// The base address of the block, or null. Ownership is kept.
  pub fn as_ptr(&self) -> *const T {
    self.ptr.map_or(ptr::null(), |ptr| ptr.as_ptr().cast_const())
  }

  pub fn as_mut_ptr(&mut self) -> *mut T {
    self.ptr.map_or(ptr::null_mut(), NonNull::as_ptr)
  }

  pub fn as_slice(&self) -> &[T] {
    match self.ptr {
      // Safety: ptr owns len initialized elements
      Some(ptr) => unsafe { slice::from_raw_parts(ptr.as_ptr(), self.len) },
      None => &[],
    }
  }

  pub fn as_mut_slice(&mut self) -> &mut [T] {
    match self.ptr {
      // Safety: ptr owns len initialized elements and self is borrowed mutably
      Some(ptr) => unsafe { slice::from_raw_parts_mut(ptr.as_ptr(), self.len) },
      None => &mut [],
    }
  }

  /// # Safety
  /// The handle must not be null and `index` must be less than [ArrayPtr::len].
  pub unsafe fn get_unchecked(&self, index: usize) -> &T {
    debug_assert!(index < self.len);
    unsafe { &*self.ptr.unwrap_unchecked().as_ptr().add(index) }
  }

  /// # Safety
  /// The handle must not be null and `index` must be less than [ArrayPtr::len].
  pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
    debug_assert!(index < self.len);
    unsafe { &mut *self.ptr.unwrap_unchecked().as_ptr().add(index) }
  }

  pub fn swap(&mut self, other: &mut Self) {
    mem::swap(self, other);
  }

  pub fn take(&mut self) -> Self {
    mem::take(self)
  }
}

impl<T> Drop for ArrayPtr<T> {
  fn drop(&mut self) {
    let Some(ptr) = self.ptr else {
      return;
    };

    unsafe {
      // Safety: every element is initialized and owned by this handle alone
      ptr::drop_in_place(ptr::slice_from_raw_parts_mut(ptr.as_ptr(), self.len));
      // Safety: the same layout was computed when the block was allocated
      free_block(ptr, self.len);
    }
  }
}

/// Safety: `ptr` must be a block of `len` elements owned by the caller, with its elements already dropped or moved out.
unsafe fn free_block<T>(ptr: NonNull<T>, len: usize) {
  let layout = unsafe { Layout::array::<T>(len).unwrap_unchecked() };
  if layout.size() != 0 {
    unsafe { StdAlloc.free(ptr.cast(), layout) };
  }
}

/// Drops the written prefix and frees the block if an initializer panics.
struct PartialInit<T> {
  ptr: NonNull<T>,
  initialized: usize,
  len: usize,
}

impl<T> Drop for PartialInit<T> {
  fn drop(&mut self) {
    unsafe {
      ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.initialized));
      free_block(self.ptr, self.len);
    }
  }
}

impl<T> Default for ArrayPtr<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> Deref for ArrayPtr<T> {
  type Target = [T];

  fn deref(&self) -> &[T] {
    self.as_slice()
  }
}

impl<T> DerefMut for ArrayPtr<T> {
  fn deref_mut(&mut self) -> &mut [T] {
    self.as_mut_slice()
  }
}

impl<T> AsRef<[T]> for ArrayPtr<T> {
  fn as_ref(&self) -> &[T] {
    self
  }
}

impl<T> AsMut<[T]> for ArrayPtr<T> {
  fn as_mut(&mut self) -> &mut [T] {
    self
  }
}

impl<T> From<Box<[T]>> for ArrayPtr<T> {
  fn from(boxed: Box<[T]>) -> Self {
    // Safety: Box<[T]> uses the global allocator with the array layout
    unsafe { Self::from_raw(NonNull::from(Box::leak(boxed))) }
  }
}

impl<T: Debug> Debug for ArrayPtr<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.as_slice().fmt(f)
  }
}
