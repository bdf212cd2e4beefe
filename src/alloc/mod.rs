pub mod array_ptr;
pub mod std_alloc;
pub mod types;

use core::alloc::Layout;

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("overflowed while attempting to calculate layout")]
pub struct OverflowedLayoutCalculation;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("allocator is out of memory (requested {} bytes)", .0.size())]
pub struct OutOfMemory(pub Layout);

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AllocateError {
  #[error("{0}")]
  OverflowedLayoutCalculation(#[from] OverflowedLayoutCalculation),
  #[error("{0}")]
  OutOfMemory(#[from] OutOfMemory),
}

impl AllocateError {
  /// Turns an allocation failure into the matching fatal condition.
  pub(crate) fn fatal(self) -> ! {
    match self {
      AllocateError::OverflowedLayoutCalculation(_) => panic!("capacity overflow"),
      AllocateError::OutOfMemory(OutOfMemory(layout)) => rust_alloc::alloc::handle_alloc_error(layout),
    }
  }
}

pub fn calculate_layout_for_array<T>(element_count: usize) -> Result<Layout, OverflowedLayoutCalculation> {
  Layout::array::<T>(element_count).map_err(|_| OverflowedLayoutCalculation)
}
