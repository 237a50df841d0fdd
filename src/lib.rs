#![no_std]
/*!
This crate provides a growable vector whose elements are raw byte records of one fixed width,
chosen when the vector is created. Elements are copied in and copied out by value,
the vector owns its buffer outright and every operation reports failure through [`VecResult`].

all borrowed views into the buffer are tied to a shared borrow of the vector,
so the compiler rules out holding one across a push, insert or any other call that may move the buffer.

# Examples

## Building and editing a vector

```rust
use fixed_width_vec::{FixedWidthVector, VecError};

// 1. Every element is a 4 byte integer.
let mut v = FixedWidthVector::new(4).unwrap();

// 2. Push 0..10 in native byte order.
for i in 0..10i32 {
    v.push(&i.to_ne_bytes()).unwrap();
}

// 3. Insert in the middle, everything after index 5 moves one slot right.
v.insert(&123i32.to_ne_bytes(), 5).unwrap();
assert_eq!(v.get(5).unwrap(), &123i32.to_ne_bytes());
assert_eq!(v.get(6).unwrap(), &5i32.to_ne_bytes());

// 4. Copy-outs are owned boxes, independent of the buffer.
let removed = v.remove(5).unwrap();
assert_eq!(&*removed, &123i32.to_ne_bytes());

// 5. Indices are never clamped.
assert_eq!(v.get(10), Err(VecError::IndexOutOfRange { index: 10, len: 10 }));
```

## Transforms

`map`, `filter` and `foreach` hand each element and its index to a closure.

```rust
use fixed_width_vec::FixedWidthVector;

fn int(bytes: &[u8]) -> i32 {
    i32::from_ne_bytes(bytes.try_into().unwrap())
}

let v = FixedWidthVector::from_bytes(
    4,
    &(0..10i32).flat_map(i32::to_ne_bytes).collect::<Vec<u8>>(),
)
.unwrap();

let doubled = v.map(|e, _| Some((int(e) * 2).to_ne_bytes())).unwrap();
assert_eq!(int(doubled.get(9).unwrap()), 18);

let even = v.filter(|e, _| int(e) % 2 == 0).unwrap();
assert_eq!(even.len(), 5);

let mut sum = 0;
even.foreach(|e, _| sum += int(e)).unwrap();
assert_eq!(sum, 20);
```

## Tuning growth

```rust
use fixed_width_vec::{FixedWidthVector, VectorConfig};

let cfg = VectorConfig::default()
    .with_initial_capacity(2)
    .with_growth_factor(4);
let mut v = FixedWidthVector::with_config(1, cfg).unwrap();
v.push_slice(&[1, 2, 3]).unwrap();
assert_eq!(v.capacity(), 8);
```
*/
extern crate alloc;

pub mod config;
pub mod error;
mod raw;
pub mod vector;

pub use config::{DEFAULT_CAPACITY, GROWTH_FACTOR, VectorConfig};
pub use error::{VecError, VecResult};
pub use vector::FixedWidthVector;
