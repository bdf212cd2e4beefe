use simple_vector::prelude::*;
use thiserror::Error;

#[derive(Debug, Error)]
enum ScratchError {
  #[error("allocation failed: {0}")]
  Allocate(#[from] AllocateError),
  #[error("lookup failed: {0}")]
  Lookup(#[from] OutOfRange),
}

fn main_inner() -> Result<(), ScratchError> {
  let mut array = ArrayPtr::<u32>::try_with_len(4)?;
  array[1] = 7;
  println!("owned {array:?} at {:p}", array.as_ptr());

  let raw = array.release();
  println!("after release: null = {}", array.is_null());
  let adopted = unsafe { ArrayPtr::from_raw_opt(raw) };
  println!("adopted {adopted:?}");

  let zeroed = ArrayPtr::<u64>::try_zeroed(3)?;
  println!("zeroed {zeroed:?}");

  match ArrayPtr::<u64>::try_with_len(usize::MAX) {
    Ok(_) => println!("unexpectedly allocated usize::MAX elements"),
    Err(error) => println!("expected failure: {error}"),
  }

  let mut vector = SimpleVector::<u8>::new();
  vector.try_reserve(16)?;
  vector.extend([1, 2, 3]);
  println!("vector {vector:?} capacity {}, last = {}", vector.capacity(), vector.at(2)?);
  vector.at(3)?;
  Ok(())
}

fn main() {
  if let Err(error) = main_inner() {
    println!("{error}");
  }
}
