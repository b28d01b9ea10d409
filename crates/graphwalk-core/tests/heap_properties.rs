//! Randomised checks of the indexed min-heap invariants

use graphwalk_core::error::GraphError;
use graphwalk_core::{IndexedMinHeap, INFINITY};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Every slot's key is at least its parent's after any mix of operations
#[test]
fn test_heap_order_survives_random_operations() {
    for seed in 0..64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let n = rng.gen_range(1..=40);
        let mut keys = vec![INFINITY; n + 1];
        let mut heap = IndexedMinHeap::with_capacity(n);

        for _ in 0..300 {
            let v = rng.gen_range(1..=n);
            match rng.gen_range(0..3) {
                0 => {
                    if heap.contains(v) {
                        assert!(matches!(
                            heap.insert(v, &keys),
                            Err(GraphError::AlreadyQueued { .. })
                        ));
                    } else {
                        keys[v] = rng.gen_range(0..1000);
                        heap.insert(v, &keys).unwrap();
                    }
                }
                1 => {
                    if heap.is_empty() {
                        assert!(matches!(heap.extract_min(&keys), Err(GraphError::EmptyHeap)));
                    } else {
                        let min = heap.extract_min(&keys).unwrap();
                        assert!(!heap.contains(min));
                        assert!(heap.as_slice().iter().all(|&u| keys[u] >= keys[min]));
                    }
                }
                _ => {
                    if heap.contains(v) {
                        keys[v] = rng.gen_range(0..=keys[v]);
                        heap.notify_decreased(v, &keys).unwrap();
                    } else {
                        assert!(matches!(
                            heap.notify_decreased(v, &keys),
                            Err(GraphError::NotQueued { .. })
                        ));
                    }
                }
            }
            assert!(heap.is_heap_ordered(&keys), "seed {seed}");
            assert_eq!(heap.peek().is_none(), heap.is_empty());
        }
    }
}

/// Draining the heap yields every vertex once in non-decreasing key order
#[test]
fn test_drain_is_sorted() {
    for seed in 0..32 {
        let mut rng = StdRng::seed_from_u64(1000 + seed);
        let n = rng.gen_range(1..=100);
        let mut keys = vec![0u64; n + 1];
        let mut heap = IndexedMinHeap::with_capacity(n);
        for v in 1..=n {
            keys[v] = rng.gen_range(0..50);
            heap.insert(v, &keys).unwrap();
        }
        // lower a few keys in place before draining
        for _ in 0..n / 2 {
            let v = rng.gen_range(1..=n);
            keys[v] /= 2;
            heap.decrease_key(v, &keys).unwrap();
        }

        let mut drained = Vec::with_capacity(n);
        while let Ok(v) = heap.extract_min(&keys) {
            drained.push(v);
        }

        assert_eq!(drained.len(), n);
        assert!(drained.windows(2).all(|w| keys[w[0]] <= keys[w[1]]));

        let mut seen = drained.clone();
        seen.sort_unstable();
        assert_eq!(seen, (1..=n).collect::<Vec<_>>());
    }
}
