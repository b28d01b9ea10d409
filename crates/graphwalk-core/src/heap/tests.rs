use super::*;
use crate::graph::INFINITY;

fn drain(heap: &mut IndexedMinHeap, keys: &[u64]) -> Vec<Vertex> {
    let mut out = Vec::new();
    while !heap.is_empty() {
        out.push(heap.extract_min(keys).unwrap());
        assert!(heap.is_heap_ordered(keys));
    }
    out
}

/// A fresh heap is empty and holds nothing
#[test]
fn test_new_heap_is_empty() {
    let heap = IndexedMinHeap::with_capacity(4);
    assert!(heap.is_empty());
    assert_eq!(heap.len(), 0);
    assert_eq!(heap.capacity(), 4);
    assert_eq!(heap.peek(), None);
    assert!(heap.as_slice().is_empty());
    assert!((1..=4).all(|v| !heap.contains(v)));
}

/// Extracting from an empty heap is reported, not tolerated
#[test]
fn test_extract_min_on_empty_heap_fails() {
    let mut heap = IndexedMinHeap::with_capacity(3);
    let keys = [0, 1, 2, 3];
    assert!(matches!(heap.extract_min(&keys), Err(GraphError::EmptyHeap)));
}

/// Inserting a vertex twice violates the contract
#[test]
fn test_double_insert_fails() {
    let mut heap = IndexedMinHeap::with_capacity(3);
    let keys = [0, 5, 5, 5];
    heap.insert(2, &keys).unwrap();
    assert!(matches!(
        heap.insert(2, &keys),
        Err(GraphError::AlreadyQueued { vertex: 2 })
    ));
    assert_eq!(heap.len(), 1);
}

/// Vertex ids outside 1..=capacity are rejected
#[test]
fn test_out_of_range_vertex_fails() {
    let mut heap = IndexedMinHeap::with_capacity(3);
    let keys = [0, 0, 0, 0, 0];
    assert!(matches!(
        heap.insert(0, &keys),
        Err(GraphError::VertexOutOfRange { vertex: 0, capacity: 3 })
    ));
    assert!(matches!(
        heap.insert(4, &keys),
        Err(GraphError::VertexOutOfRange { vertex: 4, capacity: 3 })
    ));
    assert!(!heap.contains(4));
}

/// Decrease-key on a vertex that is not queued is reported
#[test]
fn test_notify_decreased_requires_presence() {
    let mut heap = IndexedMinHeap::with_capacity(3);
    let keys = [0, 1, 2, 3];
    heap.insert(1, &keys).unwrap();
    assert!(matches!(
        heap.notify_decreased(3, &keys),
        Err(GraphError::NotQueued { vertex: 3 })
    ));
}

/// Insert keeps the minimum at the root
#[test]
fn test_insert_orders_by_key() {
    let mut heap = IndexedMinHeap::with_capacity(5);
    let keys = [0, 40, 10, 30, 20, 50];
    for v in 1..=5 {
        heap.insert(v, &keys).unwrap();
        assert!(heap.is_heap_ordered(&keys));
    }
    assert_eq!(heap.peek(), Some(2));
    assert_eq!(drain(&mut heap, &keys), vec![2, 4, 3, 1, 5]);
}

/// Extracting the only element leaves its position cleared
#[test]
fn test_extract_single_element_clears_position() {
    let mut heap = IndexedMinHeap::with_capacity(2);
    let keys = [0, 7, 9];
    heap.insert(1, &keys).unwrap();
    assert_eq!(heap.position(1), Some(1));
    assert_eq!(heap.extract_min(&keys).unwrap(), 1);
    assert!(heap.is_empty());
    assert!(!heap.contains(1));
    assert_eq!(heap.position(1), None);
    assert!(heap.is_heap_ordered(&keys));
}

/// Lowering a key in caller storage then notifying moves the vertex up
#[test]
fn test_notify_decreased_moves_vertex_to_root() {
    let mut heap = IndexedMinHeap::with_capacity(4);
    let mut keys = vec![0, 10, 20, 30, 40];
    for v in 1..=4 {
        heap.insert(v, &keys).unwrap();
    }
    assert_eq!(heap.peek(), Some(1));

    keys[4] = 5;
    heap.notify_decreased(4, &keys).unwrap();
    assert!(heap.is_heap_ordered(&keys));
    assert_eq!(heap.peek(), Some(4));
    assert_eq!(heap.position(4), Some(1));

    keys[3] = 15;
    heap.decrease_key(3, &keys).unwrap();
    assert!(heap.is_heap_ordered(&keys));
    assert_eq!(drain(&mut heap, &keys), vec![4, 1, 3, 2]);
}

/// Unreached vertices keyed at infinity still order correctly
#[test]
fn test_infinite_keys_sort_last() {
    let mut heap = IndexedMinHeap::with_capacity(3);
    let keys = [0, INFINITY, 3, INFINITY];
    heap.insert(1, &keys).unwrap();
    heap.insert(2, &keys).unwrap();
    heap.insert(3, &keys).unwrap();
    assert_eq!(heap.extract_min(&keys).unwrap(), 2);
}

/// With equal children the left child is promoted, the right only when strictly smaller
#[test]
fn test_sift_down_prefers_left_child_on_tie() {
    let mut heap = IndexedMinHeap::with_capacity(4);
    let keys = [0, 1, 5, 5, 9];
    for v in 1..=4 {
        heap.insert(v, &keys).unwrap();
    }
    assert_eq!(heap.as_slice(), &[1, 2, 3, 4]);

    assert_eq!(heap.extract_min(&keys).unwrap(), 1);
    // 4 moved to the root and sank below the left child 2
    assert_eq!(heap.as_slice(), &[2, 4, 3]);
    assert!(heap.is_heap_ordered(&keys));
}

/// Removed vertices can be re-inserted later
#[test]
fn test_reinsert_after_extract() {
    let mut heap = IndexedMinHeap::with_capacity(3);
    let keys = [0, 2, 1, 3];
    heap.insert(1, &keys).unwrap();
    heap.insert(2, &keys).unwrap();
    assert_eq!(heap.extract_min(&keys).unwrap(), 2);
    heap.insert(2, &keys).unwrap();
    heap.insert(3, &keys).unwrap();
    assert_eq!(drain(&mut heap, &keys), vec![2, 1, 3]);
}

/// A key slice that cannot index every vertex is rejected before any access
#[test]
fn test_short_key_slice_is_rejected() {
    let mut heap = IndexedMinHeap::with_capacity(4);
    let short = [0, 1, 2];
    assert!(matches!(
        heap.insert(1, &short),
        Err(GraphError::KeysTooShort { len: 3, capacity: 4 })
    ));
    assert!(heap.is_empty());

    let keys = [0, 1, 2, 3, 4];
    heap.insert(1, &keys).unwrap();
    assert!(matches!(
        heap.notify_decreased(1, &short),
        Err(GraphError::KeysTooShort { .. })
    ));
    assert!(matches!(
        heap.extract_min(&short),
        Err(GraphError::KeysTooShort { .. })
    ));
    assert!(!heap.is_heap_ordered(&short));
    assert_eq!(heap.extract_min(&keys).unwrap(), 1);
}
