use fixed_width_vec::FixedWidthVector;
use proptest::prelude::*;

fn int(bytes: &[u8]) -> i32 {
    i32::from_ne_bytes(bytes.try_into().unwrap())
}

fn ints(v: &FixedWidthVector) -> Vec<i32> {
    v.iter().map(int).collect()
}

fn build(values: &[i32], capacity: usize) -> FixedWidthVector {
    let mut v = FixedWidthVector::with_capacity(4, capacity).unwrap();
    for x in values {
        v.push(&x.to_ne_bytes()).unwrap();
    }
    v
}

#[derive(Debug, Clone)]
enum Op {
    Push(i32),
    Insert(i32, usize),
    Pop,
    Remove(usize),
    Swap(usize, usize),
    Set(usize, i32),
    Reset,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<i32>().prop_map(Op::Push),
        (any::<i32>(), 0..40usize).prop_map(|(x, i)| Op::Insert(x, i)),
        Just(Op::Pop),
        (0..40usize).prop_map(Op::Remove),
        (0..40usize, 0..40usize).prop_map(|(a, b)| Op::Swap(a, b)),
        (0..40usize, any::<i32>()).prop_map(|(i, x)| Op::Set(i, x)),
        Just(Op::Reset),
    ]
}

proptest! {
    #[test]
    fn push_then_pop_is_lifo(values in prop::collection::vec(any::<i32>(), 0..100), cap in 0..8usize) {
        let mut v = FixedWidthVector::with_capacity(4, cap).unwrap();
        for x in &values {
            v.push(&x.to_ne_bytes()).unwrap();
        }
        let grown = v.capacity();

        for x in values.iter().rev() {
            prop_assert_eq!(int(&v.pop().unwrap()), *x);
        }
        prop_assert!(v.is_empty());
        prop_assert!(v.pop().is_err());
        // capacity never shrinks
        prop_assert_eq!(v.capacity(), grown);
    }

    #[test]
    fn insert_then_remove_restores(values in prop::collection::vec(any::<i32>(), 0..50), x: i32, pos in any::<prop::sample::Index>()) {
        let mut v = build(&values, 4);
        let index = pos.index(values.len() + 1);

        v.insert(&x.to_ne_bytes(), index).unwrap();
        prop_assert_eq!(int(v.get(index).unwrap()), x);

        let back = v.remove(index).unwrap();
        prop_assert_eq!(int(&back), x);
        prop_assert_eq!(ints(&v), values);
    }

    #[test]
    fn len_never_exceeds_capacity(ops in prop::collection::vec(op(), 0..200)) {
        let mut v = FixedWidthVector::with_capacity(4, 1).unwrap();
        let mut model: Vec<i32> = Vec::new();

        for op in ops {
            match op {
                Op::Push(x) => {
                    v.push(&x.to_ne_bytes()).unwrap();
                    model.push(x);
                }
                Op::Insert(x, i) => {
                    let res = v.insert(&x.to_ne_bytes(), i);
                    prop_assert_eq!(res.is_ok(), i <= model.len());
                    if i <= model.len() {
                        model.insert(i, x);
                    }
                }
                Op::Pop => {
                    let res = v.pop().ok().map(|b| int(&b));
                    prop_assert_eq!(res, model.pop());
                }
                Op::Remove(i) => {
                    let res = v.remove(i).ok().map(|b| int(&b));
                    let expected = (i < model.len()).then(|| model.remove(i));
                    prop_assert_eq!(res, expected);
                }
                Op::Swap(a, b) => {
                    let ok = a < model.len() && b < model.len();
                    prop_assert_eq!(v.swap(a, b).is_ok(), ok);
                    if ok {
                        model.swap(a, b);
                    }
                }
                Op::Set(i, x) => {
                    let res = v.set(i, &x.to_ne_bytes()).ok().map(|b| int(&b));
                    let expected = model.get(i).copied();
                    prop_assert_eq!(res, expected);
                    if i < model.len() {
                        model[i] = x;
                    }
                }
                Op::Reset => {
                    v.reset();
                    model.clear();
                }
            }

            prop_assert!(v.len() <= v.capacity());
            prop_assert_eq!(v.len(), model.len());
            prop_assert!(v.get(v.len()).is_err());
            prop_assert!(v.set(v.len(), &0i32.to_ne_bytes()).is_err());
        }
        prop_assert_eq!(ints(&v), model);
    }

    #[test]
    fn reversing_twice_is_identity(values in prop::collection::vec(any::<i32>(), 0..64)) {
        let mut v = build(&values, 4);

        let twice = v.reverse().unwrap().reverse().unwrap();
        prop_assert_eq!(&twice, &v);

        v.reverse_in_place();
        let mut expected = values.clone();
        expected.reverse();
        prop_assert_eq!(ints(&v), expected);

        v.reverse_in_place();
        prop_assert_eq!(ints(&v), values);
    }

    #[test]
    fn map_keeps_len_filter_shrinks(values in prop::collection::vec(any::<i32>(), 0..64), modulus in 1..5i32) {
        let v = build(&values, 4);

        let mapped = v.map(|e, _| Some(int(e).wrapping_add(1).to_ne_bytes())).unwrap();
        prop_assert_eq!(mapped.len(), v.len());

        let keep = |x: i32| x.rem_euclid(modulus) == 0;
        let filtered = v.filter(|e, _| keep(int(e))).unwrap();
        prop_assert!(filtered.len() <= v.len());
        for e in &filtered {
            prop_assert!(keep(int(e)));
        }
    }

    #[test]
    fn contains_finds_every_pushed_value(values in prop::collection::vec(any::<i32>(), 1..64), pick in any::<prop::sample::Index>()) {
        let v = build(&values, 4);
        let needle = *pick.get(&values);
        prop_assert!(v.contains(&needle.to_ne_bytes()).unwrap());
    }
}
