use growarray::{GrowableArray, GrowthConfig, IndexOutOfRange};
use std::borrow::Cow;

#[test]
fn growable_array_push_get_iter() {
    let mut array = GrowableArray::new();
    assert!(array.is_empty());

    for i in 0..100u32 {
        array.push(i);
    }
    assert_eq!(array.len(), 100);
    assert!(array.capacity() >= array.len());

    assert_eq!(array.get(0), Some(&0));
    assert_eq!(array.get(99), Some(&99));
    assert_eq!(array.get(100), None);

    let sum: u32 = array.iter().copied().sum();
    assert_eq!(sum, (0..100u32).sum());
}

#[test]
fn growable_array_capacity_only_grows() {
    let mut array = GrowableArray::with_growth(1, 0.7);
    let mut last = array.capacity();
    for i in 0..1_000 {
        array.push(i);
        assert!(array.capacity() >= last);
        assert!(array.capacity() >= array.len());
        last = array.capacity();
    }
}

#[test]
fn growable_array_growth_follows_divisor_rule() {
    let mut array = GrowableArray::with_growth(10, 0.3);
    array.extend(0..10);
    assert_eq!(array.capacity(), 10);
    array.push(10);
    // floor(10 / 0.3) == 33
    assert_eq!(array.capacity(), 33);
}

#[test]
fn growable_array_from_sequence_snaps_capacity() {
    let items = vec!["x", "y", "z", "w"];
    let array = GrowableArray::from_items(&GrowthConfig::new(2, 0.5), items.clone());
    assert_eq!(array.len(), 4);
    assert_eq!(array.capacity(), 4);
    assert_eq!(array.as_slice(), items.as_slice());

    let from_slice = GrowableArray::from(items.as_slice());
    assert_eq!(from_slice.capacity(), 4);
    assert_eq!(from_slice, array);
}

#[test]
fn growable_array_compact_full_is_borrowed() {
    let array: GrowableArray<i64> = vec![5, 6, 7].into();
    match array.compact() {
        Cow::Borrowed(view) => {
            assert_eq!(view, &[5, 6, 7]);
            assert_eq!(view.as_ptr(), array.as_slice().as_ptr());
        }
        Cow::Owned(_) => panic!("full array should not be copied"),
    }
}

#[test]
fn growable_array_compact_partial_is_trimmed() {
    let mut array = GrowableArray::with_capacity(8);
    array.extend([1, 2, 3]);

    let trimmed = array.compact();
    assert_eq!(trimmed.len(), 3);
    assert_eq!(&*trimmed, &[1, 2, 3]);
    match trimmed {
        Cow::Owned(vec) => assert_eq!(vec.capacity(), 3),
        Cow::Borrowed(_) => panic!("partial array must be copied"),
    }

    // Compaction leaves the array untouched and can be repeated.
    assert_eq!(array.len(), 3);
    assert_eq!(array.capacity(), 8);
    assert_eq!(array.compact(), array.compact());
}

#[test]
fn growable_array_boundary_access() {
    let mut array = GrowableArray::new();
    array.extend([10, 20, 30]);

    assert_eq!(array.at(array.len() - 1), Ok(&30));
    assert_eq!(
        array.at(array.len()),
        Err(IndexOutOfRange::PastEnd { index: 3, len: 3 })
    );
    assert_eq!(
        array.at_signed(-1),
        Err(IndexOutOfRange::Negative { index: -1, len: 3 })
    );

    let empty: GrowableArray<u8> = GrowableArray::new();
    assert!(empty.at(0).is_err());
}

#[test]
fn growable_array_error_is_std_error() {
    let array: GrowableArray<u8> = GrowableArray::new();
    let err: Box<dyn std::error::Error> = Box::new(array.at(0).unwrap_err());
    assert_eq!(err.to_string(), "index 0 out of range for length 0");
}

#[test]
fn growable_array_into_iter_moves_in_order() {
    let mut array = GrowableArray::with_capacity(2);
    array.extend(["a".to_string(), "b".to_string(), "c".to_string()]);
    let owned: Vec<String> = array.into_iter().collect();
    assert_eq!(owned, ["a", "b", "c"]);
}

#[test]
fn growable_array_for_loop_over_reference() {
    let array: GrowableArray<u64> = (1..=10).collect();
    let mut total = 0;
    for value in &array {
        total += value;
    }
    assert_eq!(total, 55);

    let by_index: u64 = (0..array.len()).map(|i| array[i]).sum();
    assert_eq!(by_index, total);
}
