use core::{alloc::Layout, ptr};

use super::OutOfMemory;

/// The global heap. Every block owned by an [ArrayPtr](super::array_ptr::ArrayPtr) comes from here.
#[derive(Default, Clone, Copy, Debug)]
pub struct StdAlloc;

impl StdAlloc {
  /// Layouts passed here must not be zero-sized.
  pub fn alloc(&self, layout: Layout) -> Result<ptr::NonNull<u8>, OutOfMemory> {
    debug_assert!(layout.size() != 0, "zero-sized allocation");
    // Safety: layout has a non-zero size
    let ptr = unsafe { rust_alloc::alloc::alloc(layout) };
    ptr::NonNull::new(ptr).ok_or(OutOfMemory(layout))
  }

  pub fn alloc_zeroed(&self, layout: Layout) -> Result<ptr::NonNull<u8>, OutOfMemory> {
    debug_assert!(layout.size() != 0, "zero-sized allocation");
    // Safety: layout has a non-zero size
    let ptr = unsafe { rust_alloc::alloc::alloc_zeroed(layout) };
    ptr::NonNull::new(ptr).ok_or(OutOfMemory(layout))
  }

  /// Safety: `ptr` must have been returned by [StdAlloc::alloc] or [StdAlloc::alloc_zeroed] with the same `layout`,
  /// and must not be freed twice.
  pub unsafe fn free(&self, ptr: ptr::NonNull<u8>, layout: Layout) {
    unsafe {
      rust_alloc::alloc::dealloc(ptr.as_ptr(), layout);
    };
  }
}
