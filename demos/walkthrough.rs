//! Walks through every vector operation on a handful of 32-bit integers.
//!
//! Run with `RUST_LOG=debug cargo run --example walkthrough` to see growth events.

use fixed_width_vec::{FixedWidthVector, VecResult};

fn int(bytes: &[u8]) -> i32 {
    i32::from_ne_bytes(bytes.try_into().unwrap_or_default())
}

fn print_all(v: &FixedWidthVector) -> VecResult<()> {
    v.foreach(|e, i| println!("foreach: element {i}: {}", int(e)))
}

fn main() -> VecResult<()> {
    env_logger::init();

    let mut v = FixedWidthVector::new(size_of::<i32>())?;
    for i in 0..10i32 {
        v.push(&i.to_ne_bytes())?;
    }

    println!("cap: {}, len: {}", v.capacity(), v.len());
    println!("5th element: {}", int(v.get(5)?));

    v.insert(&123i32.to_ne_bytes(), 5)?;
    println!("5th element now: {}", int(v.get(5)?));
    println!("6th element now: {}", int(v.get(6)?));

    let search = 100i32;
    let found = v.contains(&search.to_ne_bytes())?;
    println!("contains {search}? {}", if found { "yes" } else { "no" });

    let removed = v.remove(5)?;
    println!("removed element: {}", int(&removed));
    println!("5th element now: {}", int(v.get(5)?));
    println!("6th element now: {}", int(v.get(6)?));

    let doubled = v.map(|e, _| Some((int(e) * 2).to_ne_bytes()))?;
    println!("5th element in new: {}", int(doubled.get(5)?));
    println!("6th element in new: {}", int(doubled.get(6)?));

    let mut filtered = v.filter(|e, _| int(e) % 2 == 0)?;
    println!("2nd element in new filtered: {}", int(filtered.get(2)?));
    println!("4th element in new filtered: {}", int(filtered.get(4)?));
    println!(
        "filtered: cap: {}, len: {}",
        filtered.capacity(),
        filtered.len()
    );

    filtered.set(2, &10i32.to_ne_bytes())?;
    println!(
        "2nd element in new filtered after setting: {}",
        int(filtered.get(2)?)
    );
    print_all(&filtered)?;

    println!("reversed:");
    let mut rev = v.reverse()?;
    print_all(&rev)?;

    println!("reversed AGAIN:");
    rev.reverse_in_place();
    print_all(&rev)?;

    Ok(())
}
