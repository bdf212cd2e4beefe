//! A growable array built on an exclusively owned heap buffer.
//!
//! [ArrayPtr] owns a fixed-length block from the global heap and can only be moved, never copied.
//! [SimpleVector] layers a live length over one such block and doubles its capacity whenever it runs out of room.
#![no_std]

extern crate alloc as rust_alloc;
#[cfg(test)]
#[macro_use]
#[allow(unused)]
extern crate std;

pub mod alloc;
pub use zerocopy;

pub use crate::alloc::{
  AllocateError, array_ptr::ArrayPtr, types::{reserve::{ReserveRequest, reserve}, vec::{OutOfRange, SimpleVector}}
};

pub mod prelude {
  pub use zerocopy::FromZeros;

  pub use crate::{AllocateError, ArrayPtr, OutOfRange, ReserveRequest, SimpleVector, reserve, simple_vector};
}
