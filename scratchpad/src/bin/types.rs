use simple_vector::prelude::*;

fn main() {
  let mut vector = SimpleVector::new();
  for value in 1..=3 {
    vector.push_back(value);
    println!("pushed {value}: len {} capacity {}", vector.len(), vector.capacity());
  }

  vector.insert(1, 99);
  println!("{vector:?} capacity {}", vector.capacity());
  vector.erase(1);
  println!("{vector:?}");

  match vector.at(5) {
    Ok(value) => println!("at(5) = {value}"),
    Err(error) => println!("at(5) failed: {error}"),
  }

  let reserved: SimpleVector<u32> = reserve(8).into();
  println!("reserved: len {} capacity {}", reserved.len(), reserved.capacity());

  let listed = simple_vector![1, 2, 3];
  println!("{vector:?} == {listed:?}: {}", vector == listed);
}
