extern crate std;

use std::vec;

use alloc::{string::String, vec::Vec};

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::queue::list::Queue;

fn queue_of(values: &[&str]) -> Queue {
    let mut queue = Queue::new();
    for value in values {
        assert!(queue.insert_tail(value));
    }
    queue
}

fn values(queue: &Queue) -> Vec<&str> {
    queue.iter().collect()
}

#[test]
fn test_sort_scenario() {
    let mut queue = queue_of(&["banana", "apple", "cherry"]);
    queue.sort();

    let mut buf = [0u8; 16];
    assert!(queue.remove_head(Some(&mut buf)));
    assert_eq!(&buf[..6], b"apple\0");
    assert!(queue.remove_head(Some(&mut buf)));
    assert_eq!(&buf[..7], b"banana\0");
    assert!(queue.remove_head(Some(&mut buf)));
    assert_eq!(&buf[..7], b"cherry\0");
    assert!(!queue.remove_head(Some(&mut buf)));
}

#[test]
fn test_sort_is_idempotent() {
    let mut queue = queue_of(&["d", "b", "a", "c", "b"]);
    queue.sort();
    let once = queue.node_ids();

    queue.sort();
    assert_eq!(queue.node_ids(), once);
    assert_eq!(values(&queue), vec!["a", "b", "b", "c", "d"]);
}

#[test]
fn test_sort_is_stable() {
    let mut queue = queue_of(&["b", "a", "b", "a", "c", "a"]);
    let ids = queue.node_ids();

    queue.sort();

    assert_eq!(values(&queue), vec!["a", "a", "a", "b", "b", "c"]);
    assert_eq!(
        queue.node_ids(),
        vec![ids[1], ids[3], ids[5], ids[0], ids[2], ids[4]]
    );
}

#[test]
fn test_sort_degenerate() {
    let mut queue = Queue::new();
    queue.sort();
    assert!(queue.is_empty());
    assert_eq!(queue.tail(), None);

    queue.insert_tail("solo");
    let ids = queue.node_ids();
    queue.sort();
    assert_eq!(queue.node_ids(), ids);
    assert_eq!(queue.tail(), Some("solo"));
    assert_eq!(queue.size(), 1);
}

#[test]
fn test_sort_recomputes_tail() {
    let mut queue = queue_of(&["zebra", "mango", "apple"]);
    queue.sort();

    assert_eq!(queue.tail(), Some("zebra"));
    assert_eq!(queue.tail_id(), queue.node_ids().last().copied());

    queue.insert_tail("after");
    assert_eq!(values(&queue), vec!["apple", "mango", "zebra", "after"]);
}

#[test]
fn test_sort_byte_order() {
    let mut queue = queue_of(&["b", "é", "", "B", "ab", "a", "z"]);
    queue.sort();
    assert_eq!(values(&queue), vec!["", "B", "a", "ab", "b", "z", "é"]);
}

#[test]
fn test_sort_reversed_input() {
    let mut queue = Queue::new();
    for i in 0..257u32 {
        queue.insert_head(&std::format!("{i:04}"));
    }
    queue.sort();

    let sorted = values(&queue);
    assert_eq!(sorted.len(), 257);
    assert!(sorted.windows(2).all(|pair| pair[0] <= pair[1]));
    assert_eq!(queue.head(), Some("0000"));
    assert_eq!(queue.tail(), Some("0256"));
}

#[test]
fn test_sort_matches_slice_sort() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for len in [2usize, 3, 7, 64, 500] {
        let mut expected: Vec<String> = (0..len)
            .map(|_| {
                let width = rng.random_range(0..5);
                (0..width)
                    .map(|_| char::from(rng.random_range(b'a'..=b'e')))
                    .collect()
            })
            .collect();

        let mut queue = Queue::new();
        for value in &expected {
            assert!(queue.insert_tail(value));
        }

        queue.sort();
        expected.sort();

        assert_eq!(values(&queue), expected);
        assert_eq!(queue.size(), len);
        assert_eq!(queue.tail(), expected.last().map(String::as_str));
    }
}
