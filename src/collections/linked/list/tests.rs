#![cfg(test)]

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use proptest::prelude::*;

use super::*;
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_construct_default() {
    let list = LinkedList::<i32>::new();
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    assert_eq!(list.front(), None);
    assert_eq!(list.back(), None);
}

#[test]
fn test_push_front() {
    let mut list = LinkedList::new();
    list.push_front(5);
    list.push_front(9);
    assert_eq!(list.front(), Some(&9));
    assert_eq!(list.back(), Some(&5));
    list.verify_double_links();
}

#[test]
fn test_push_back() {
    let mut list = LinkedList::new();
    list.push_back(5);
    list.push_back(9);
    assert_eq!(list.back(), Some(&9));
    assert_eq!(list.front(), Some(&5));
    list.verify_double_links();
}

#[test]
fn test_emplace() {
    let mut list = LinkedList::new();
    list.emplace_front(|| String::from("test1"));
    list.emplace_front(|| String::from("test2"));
    assert_eq!(list.front().map(String::as_str), Some("test2"));

    list.emplace_back(|| String::from("test3")).push_str("!");
    assert_eq!(list.back().map(String::as_str), Some("test3!"));
    assert_eq!(list.len(), 3);
    list.verify_double_links();
}

#[test]
fn test_pop_front() {
    let mut list = LinkedList::new();
    list.push_back(5);
    list.push_back(9);
    assert_eq!(list.front(), Some(&5));
    assert_eq!(list.pop_front(), Some(5));
    assert_eq!(list.front(), Some(&9));
    list.verify_double_links();

    assert_eq!(list.pop_front(), Some(9));
    assert_eq!(list.pop_front(), None, "Popping an empty list should do nothing.");
    assert!(list.is_empty());
}

#[test]
fn test_pop_back() {
    let mut list = LinkedList::new();
    list.push_back(5);
    list.push_back(9);
    assert_eq!(list.back(), Some(&9));
    assert_eq!(list.pop_back(), Some(9));
    assert_eq!(list.back(), Some(&5));
    list.verify_double_links();

    assert_eq!(list.pop_back(), Some(5));
    assert_eq!(list.pop_back(), None);
    assert!(list.is_empty());
}

#[test]
fn test_front_back_mut() {
    let mut list = LinkedList::from([1, 2, 3]);
    if let Some(front) = list.front_mut() {
        *front = 10;
    }
    if let Some(back) = list.back_mut() {
        *back = 30;
    }
    assert_eq!(list, LinkedList::from([10, 2, 30]));
}

#[test]
fn test_indexing() {
    let mut list: LinkedList<_> = (0..10).collect();

    for i in 0..10 {
        assert_eq!(list[i], i, "Elements should be found from both ends of the list.");
    }

    list[7] = 70;
    *list.get_mut(2) = 20;
    assert_eq!(list.get(7), &70);
    assert_eq!(list.try_get(2), Ok(&20));

    assert_eq!(list.try_get(10), Err(IndexOutOfBounds { index: 10, len: 10 }));
    assert_eq!(
        LinkedList::<u8>::new().try_get(0),
        Err(IndexOutOfBounds { index: 0, len: 0 })
    );
    assert!(list.try_get_mut(11).is_err());
    assert_panics!({ list[10] });
}

#[test]
fn test_append() {
    let mut list = LinkedList::from([1, 2]);
    list.append(LinkedList::new());
    assert_eq!(list, LinkedList::from([1, 2]));

    list.append(LinkedList::from([3, 4]));
    assert_eq!(list, LinkedList::from([1, 2, 3, 4]));
    assert_eq!(list.back(), Some(&4));
    list.verify_double_links();

    let mut empty = LinkedList::new();
    empty.append(list);
    assert_eq!(empty.len(), 4);
    empty.verify_double_links();
}

#[test]
fn test_clear_and_contains() {
    let mut list = LinkedList::from(["a", "b"]);
    assert!(list.contains(&"b"));
    assert!(!list.contains(&"c"));

    list.clear();
    assert!(list.is_empty());
    assert!(!list.contains(&"a"));

    list.push_back("c");
    assert_eq!(list.len(), 1);
}

#[test]
fn test_iterators() {
    let mut list = LinkedList::from([1, 2, 3, 4]);

    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4]);
    assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), [4, 3, 2, 1]);

    let mut iter = list.iter();
    assert_eq!(iter.len(), 4);
    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.next_back(), Some(&4));
    assert_eq!(iter.len(), 2);
    assert_eq!(iter.next(), Some(&2));
    assert_eq!(iter.next_back(), Some(&3));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);

    for item in list.iter_mut() {
        *item *= 10;
    }
    assert_eq!(list, LinkedList::from([10, 20, 30, 40]));

    let mut into_iter = list.into_iter();
    assert_eq!(into_iter.next_back(), Some(40));
    assert_eq!(into_iter.len(), 3);
    assert_eq!(into_iter.collect::<Vec<_>>(), [10, 20, 30]);
}

#[test]
fn test_extend() {
    let mut list = LinkedList::from([1]);
    list.extend([2, 3]);
    assert_eq!(list, LinkedList::from([1, 2, 3]));
    list.verify_double_links();
}

#[test]
fn test_clone_eq_hash() {
    let list = LinkedList::from([String::from("x"), String::from("y")]);
    let mut copy = list.clone();
    assert_eq!(list, copy);
    assert_eq!(hash_of(&list), hash_of(&copy));

    copy.push_back(String::from("z"));
    assert_ne!(list, copy);
    assert_eq!(list.len(), 2, "Modifying a clone should leave the original untouched.");

    assert_eq!(LinkedList::<u8>::new(), LinkedList::new());
}

#[test]
fn test_formatting() {
    let list = LinkedList::from([1, 2, 3]);
    assert_eq!(format!("{list}"), "(1) -> (2) -> (3)");
    assert_eq!(format!("{list:?}"), "LinkedList { contents: [1, 2, 3], len: 3 }");
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let mut list = LinkedList::new();
    for _ in 0..5 {
        list.push_back(counter.clone());
    }

    drop(list.pop_front());
    assert_eq!(*counter.borrow(), 1);

    let mut into_iter = list.into_iter();
    drop(into_iter.next_back());
    assert_eq!(*counter.borrow(), 2);

    drop(into_iter);
    assert_eq!(*counter.borrow(), 5, "Every remaining element should be dropped exactly once.");
}

proptest! {
    #[test]
    fn behaves_like_a_deque(
        ops in prop::collection::vec((any::<bool>(), any::<bool>(), any::<i32>()), 0..64)
    ) {
        let mut list = LinkedList::new();
        let mut model = std::collections::VecDeque::new();

        for (push, front, value) in ops {
            match (push, front) {
                (true, true) => {
                    list.push_front(value);
                    model.push_front(value);
                },
                (true, false) => {
                    list.push_back(value);
                    model.push_back(value);
                },
                (false, true) => prop_assert_eq!(list.pop_front(), model.pop_front()),
                (false, false) => prop_assert_eq!(list.pop_back(), model.pop_back()),
            }
            prop_assert_eq!(list.len(), model.len());
            prop_assert_eq!(list.front(), model.front());
            prop_assert_eq!(list.back(), model.back());
        }

        list.verify_double_links();
        prop_assert!(list.iter().eq(model.iter()));
    }
}
