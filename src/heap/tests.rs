use super::*;
use crate::order::{MaxOrder, MinOrder};
use crate::test_helpers::test_rng;
use alloc::vec::Vec;
use rand::seq::SliceRandom;
use rand::Rng;

fn check_heap<T, L: Less<T>>(heap: &Heap<T, L>) {
    let data = &heap.data;
    for i in 1..data.len() {
        let parent = (i - 1) / 2;
        assert!(!heap.less.less(&data[i], &data[parent]), "child {i} precedes its parent");
    }
}

#[test]
fn test_push_min_layout() {
    let mut heap = Heap::new(MinOrder::<i32>::new());
    for x in [1, 3, 5, 2, 4] {
        heap.push(x);
        check_heap(&heap);
    }
    assert_eq!(heap.data, [1, 2, 5, 3, 4]);
}

#[test]
fn test_push_str_layout() {
    let mut heap = Heap::new(MinOrder::<&str>::new());
    heap.extend(["a", "z", "b", "k", "c"]);
    assert_eq!(heap.data, ["a", "c", "b", "z", "k"]);
}

#[test]
fn test_pop_min() {
    let mut heap = Heap::new(|a: &i32, b: &i32| a < b);
    heap.extend([1, 3, 5, 2, 4]);
    let mut popped = Vec::new();
    while let Some(x) = heap.pop() {
        check_heap(&heap);
        popped.push(x);
    }
    assert_eq!(popped, [1, 2, 3, 4, 5]);
    assert!(heap.is_empty());
}

#[test]
fn test_pop_max() {
    let mut heap = Heap::new(|a: &i32, b: &i32| a > b);
    heap.extend([1, 3, 5, 2, 4]);
    assert_eq!(heap.pop_all(), [5, 4, 3, 2, 1]);
    assert_eq!(heap.pop(), None);
}

#[test]
fn test_pop_empty() {
    let mut heap = Heap::new(MinOrder::<i32>::new());
    assert_eq!(heap.pop(), None);
    assert_eq!(heap.peek(), None);
    assert_eq!(heap.len(), 0);
}

#[test]
fn test_peek_is_head() {
    let mut heap = Heap::new(MaxOrder::<i32>::new());
    heap.extend([2, 8, 3]);
    assert_eq!(heap.peek(), Some(&8));
    assert_eq!(heap.len(), 3);
}

#[test]
fn test_from_vec() {
    let mut rng = test_rng();
    for len in 0..40 {
        let data: Vec<u32> = (0..len).map(|_| rng.gen_range(0..20)).collect();
        let mut expected = data.clone();
        expected.sort_unstable();

        let mut heap = Heap::from_vec(MinOrder::<u32>::new(), data);
        check_heap(&heap);
        assert_eq!(heap.pop_all(), expected);
    }
}

#[test]
fn test_random_push_pop() {
    let mut rng = test_rng();
    let mut heap = Heap::new(MinOrder::<i32>::new());
    let mut model: Vec<i32> = Vec::new();

    for _ in 0..2000 {
        if rng.gen_bool(0.6) {
            let x = rng.gen_range(-50..50);
            heap.push(x);
            model.push(x);
        } else {
            let min = model.iter().copied().min();
            if let Some(min) = min {
                let pos = model.iter().position(|&x| x == min).unwrap();
                model.swap_remove(pos);
            }
            assert_eq!(heap.pop(), min);
        }
        check_heap(&heap);
        assert_eq!(heap.len(), model.len());
    }
}

#[test]
fn test_permutation_extraction() {
    let mut rng = test_rng();
    let mut data: Vec<u16> = (0..500).collect();
    data.shuffle(&mut rng);

    let mut heap = Heap::new(MaxOrder::<u16>::new());
    heap.extend(data);
    let popped = heap.pop_all();
    assert!(popped.windows(2).all(|w| w[0] > w[1]));
    assert_eq!(popped.len(), 500);
}

#[test]
fn test_equal_priorities() {
    // elements compare by key only; the payload tells them apart
    let mut heap = Heap::new(|a: &(u8, char), b: &(u8, char)| a.0 < b.0);
    heap.extend([(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (0, 'e')]);
    let keys: Vec<u8> = heap.pop_all().into_iter().map(|(k, _)| k).collect();
    assert_eq!(keys, [0, 1, 1, 2, 2]);
}

#[test]
fn test_clear_keeps_capacity() {
    let mut heap = Heap::with_capacity(MinOrder::<i32>::new(), 64);
    heap.extend(0..10);
    heap.clear();
    assert!(heap.is_empty());
    assert!(heap.capacity() >= 64);
}

#[test]
fn test_format() {
    let mut heap = Heap::new(MinOrder::<i32>::new());
    heap.extend([1, 3, 5, 2, 4]);
    assert_eq!(format!("{heap}"), "[1 2 5 3 4]");
    assert_eq!(format!("{heap:?}"), "[1, 2, 5, 3, 4]");

    let empty = Heap::<i32, _>::new(MinOrder::<i32>::new());
    assert_eq!(format!("{empty}"), "[]");
}

#[test]
fn test_format_pads_whole_listing() {
    let mut heap = Heap::new(MinOrder::<i32>::new());
    heap.extend([1, 3, 5, 2, 4]);
    assert_eq!(format!("{heap:>13}"), "  [1 2 5 3 4]");
    assert_eq!(format!("{heap:-<13}"), "[1 2 5 3 4]--");
    assert_eq!(format!("{heap:4}"), "[1 2 5 3 4]");
}
