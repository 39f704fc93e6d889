#![cfg(test)]

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use proptest::prelude::*;

use super::*;
use crate::util::alloc::CountedDrop;

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_construct_default() {
    let list = ForwardList::<i32>::new();
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    assert_eq!(list.front(), None);
}

#[test]
fn test_push_front() {
    let mut list = ForwardList::new();
    list.push_front(5);
    list.push_front(9);
    assert_eq!(list.front(), Some(&9));
    assert_eq!(list.len(), 2);
}

#[test]
fn test_emplace_front() {
    let mut list = ForwardList::new();
    list.emplace_front(|| String::from("test1"));
    list.emplace_front(|| String::from("test2")).push_str("!");
    assert_eq!(list.front().map(String::as_str), Some("test2!"));
}

#[test]
fn test_pop_front() {
    let mut list = ForwardList::from([5, 9]);
    assert_eq!(list.front(), Some(&5));
    assert_eq!(list.pop_front(), Some(5));
    assert_eq!(list.front(), Some(&9));
    assert_eq!(list.pop_front(), Some(9));
    assert_eq!(list.pop_front(), None, "Popping an empty list should do nothing.");
    assert!(list.is_empty());
}

#[test]
fn test_front_mut() {
    let mut list = ForwardList::from([1, 2]);
    if let Some(front) = list.front_mut() {
        *front = 10;
    }
    assert_eq!(list, ForwardList::from([10, 2]));
}

#[test]
fn test_collect_preserves_order() {
    let list: ForwardList<_> = (1..=4).collect();
    assert_eq!(list.len(), 4);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4]);
}

#[test]
fn test_reverse() {
    let mut list = ForwardList::from([1, 2, 3, 4]);
    list.reverse();
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [4, 3, 2, 1]);
    assert_eq!(list.len(), 4);

    let mut empty = ForwardList::<u8>::new();
    empty.reverse();
    assert!(empty.is_empty());
}

#[test]
fn test_clear_and_contains() {
    let mut list = ForwardList::from(["a", "b"]);
    assert!(list.contains(&"a"));
    assert!(!list.contains(&"c"));

    list.clear();
    assert!(list.is_empty());
    assert_eq!(list.front(), None);

    list.push_front("c");
    assert_eq!(list.len(), 1);
}

#[test]
fn test_iterators() {
    let mut list = ForwardList::from([1, 2, 3]);

    let mut iter = list.iter();
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.len(), 2);

    for item in list.iter_mut() {
        *item += 1;
    }
    assert_eq!(list, ForwardList::from([2, 3, 4]));

    let mut into_iter = list.into_iter();
    assert_eq!(into_iter.next(), Some(2));
    assert_eq!(into_iter.len(), 2);
    assert_eq!(into_iter.collect::<Vec<_>>(), [3, 4]);
}

#[test]
fn test_clone_eq_hash() {
    let list = ForwardList::from([String::from("x"), String::from("y")]);
    let mut copy = list.clone();
    assert_eq!(list, copy);
    assert_eq!(hash_of(&list), hash_of(&copy));

    copy.push_front(String::from("w"));
    assert_ne!(list, copy);
    assert_eq!(list.len(), 2, "Modifying a clone should leave the original untouched.");
}

#[test]
fn test_formatting() {
    assert_eq!(format!("{:?}", ForwardList::from([1, 2])), "[1, 2]");
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let mut list = ForwardList::new();
    for _ in 0..4 {
        list.push_front(counter.clone());
    }

    drop(list.pop_front());
    assert_eq!(*counter.borrow(), 1);

    drop(list);
    assert_eq!(*counter.borrow(), 4, "Every remaining element should be dropped exactly once.");
}

#[test]
fn test_long_list_drop() {
    let list: ForwardList<u32> = (0..200_000).collect();
    assert_eq!(list.len(), 200_000);
    drop(list);
}

proptest! {
    #[test]
    fn reverse_twice_is_identity(values in prop::collection::vec(any::<i16>(), 0..64)) {
        let mut list: ForwardList<_> = values.iter().copied().collect();
        list.reverse();
        prop_assert!(list.iter().eq(values.iter().rev()));
        list.reverse();
        prop_assert!(list.iter().eq(values.iter()));
    }
}
