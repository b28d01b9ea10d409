//! Indexed binary min-heap over vertex identifiers
//!
//! The heap orders vertices by a key array it does not own. Every operation
//! that compares keys borrows the caller's slice for the duration of the call,
//! so the caller is free to lower `keys[v]` between calls and then report the
//! change with [`IndexedMinHeap::notify_decreased`].
//!
//! Layout follows the classic 1-based array heap:
//! - `slots[0]` is unused, the root lives in `slots[1]`
//! - children of slot `k` are `2k` and `2k + 1`, its parent is `k / 2`
//! - `position[v]` is the slot currently holding `v`, `0` when `v` is absent

use crate::error::{GraphError, Result};
use crate::graph::Vertex;

/// Min-priority queue of vertices supporting decrease-key via a position index
#[derive(Debug, Clone)]
pub struct IndexedMinHeap {
    slots: Vec<Vertex>,
    position: Vec<usize>,
}

impl IndexedMinHeap {
    /// Create an empty heap able to hold vertices `1..=vertex_count`
    pub fn with_capacity(vertex_count: usize) -> Self {
        let mut slots = Vec::with_capacity(vertex_count + 1);
        slots.push(0);
        Self {
            slots,
            position: vec![0; vertex_count + 1],
        }
    }

    /// Number of queued vertices
    pub fn len(&self) -> usize {
        self.slots.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Largest vertex id this heap can hold
    pub fn capacity(&self) -> usize {
        self.position.len() - 1
    }

    /// Whether `vertex` is currently queued
    pub fn contains(&self, vertex: Vertex) -> bool {
        self.position.get(vertex).is_some_and(|&slot| slot != 0)
    }

    /// Slot currently holding `vertex`, if queued
    pub fn position(&self, vertex: Vertex) -> Option<usize> {
        match self.position.get(vertex) {
            Some(&slot) if slot != 0 => Some(slot),
            _ => None,
        }
    }

    /// Vertex with the smallest key, without removing it
    pub fn peek(&self) -> Option<Vertex> {
        self.slots.get(1).copied()
    }

    /// Queued vertices in heap-array order (root first)
    pub fn as_slice(&self) -> &[Vertex] {
        &self.slots[1..]
    }

    /// Queue `vertex`, which must not already be present.
    ///
    /// Every key-reading call needs `keys.len() > capacity()`; a shorter
    /// slice is rejected with [`GraphError::KeysTooShort`].
    pub fn insert(&mut self, vertex: Vertex, keys: &[u64]) -> Result<()> {
        self.check_vertex(vertex)?;
        self.check_keys(keys)?;
        if self.contains(vertex) {
            return Err(GraphError::AlreadyQueued { vertex });
        }

        self.slots.push(vertex);
        let slot = self.len();
        self.position[vertex] = slot;
        self.sift_up(slot, keys);
        Ok(())
    }

    /// Remove and return the vertex with the smallest key.
    ///
    /// The last slot is moved to the root and sifted down; when both children
    /// are candidates the right child is only preferred if its key is strictly
    /// smaller than the left child's.
    pub fn extract_min(&mut self, keys: &[u64]) -> Result<Vertex> {
        if self.is_empty() {
            return Err(GraphError::EmptyHeap);
        }
        self.check_keys(keys)?;

        let min = self.slots[1];
        self.position[min] = 0;

        let last = self.slots.pop().ok_or(GraphError::EmptyHeap)?;
        if !self.is_empty() {
            self.slots[1] = last;
            self.position[last] = 1;
            self.sift_down(1, keys);
        }

        Ok(min)
    }

    /// Restore heap order after the caller lowered `keys[vertex]`.
    ///
    /// Must be called after the key has been updated; the vertex moves toward
    /// the root while its key is smaller than its parent's.
    pub fn notify_decreased(&mut self, vertex: Vertex, keys: &[u64]) -> Result<()> {
        self.check_vertex(vertex)?;
        self.check_keys(keys)?;
        let slot = self
            .position(vertex)
            .ok_or(GraphError::NotQueued { vertex })?;
        self.sift_up(slot, keys);
        Ok(())
    }

    /// Alias for [`IndexedMinHeap::notify_decreased`]
    pub fn decrease_key(&mut self, vertex: Vertex, keys: &[u64]) -> Result<()> {
        self.notify_decreased(vertex, keys)
    }

    /// Check the min-heap property and the position index against `keys`.
    ///
    /// Holds when every non-root slot's key is at least its parent's key,
    /// every queued vertex is indexed at its slot, and no other vertex is
    /// indexed at all.
    pub fn is_heap_ordered(&self, keys: &[u64]) -> bool {
        if self.check_keys(keys).is_err() {
            return false;
        }
        let n = self.len();
        let ordered = (2..=n).all(|k| keys[self.slots[k]] >= keys[self.slots[k / 2]]);
        let indexed = (1..=n).all(|k| self.position[self.slots[k]] == k);
        let queued = self.position.iter().filter(|&&slot| slot != 0).count();
        ordered && indexed && queued == n
    }

    fn check_vertex(&self, vertex: Vertex) -> Result<()> {
        if vertex == 0 || vertex > self.capacity() {
            return Err(GraphError::VertexOutOfRange {
                vertex,
                capacity: self.capacity(),
            });
        }
        Ok(())
    }

    fn check_keys(&self, keys: &[u64]) -> Result<()> {
        if keys.len() <= self.capacity() {
            return Err(GraphError::KeysTooShort {
                len: keys.len(),
                capacity: self.capacity(),
            });
        }
        Ok(())
    }

    fn sift_up(&mut self, mut slot: usize, keys: &[u64]) {
        let vertex = self.slots[slot];

        while slot > 1 && keys[vertex] < keys[self.slots[slot / 2]] {
            let parent = self.slots[slot / 2];
            self.slots[slot] = parent;
            self.position[parent] = slot;
            slot /= 2;
        }

        self.slots[slot] = vertex;
        self.position[vertex] = slot;
    }

    fn sift_down(&mut self, mut slot: usize, keys: &[u64]) {
        let vertex = self.slots[slot];
        let n = self.len();

        while 2 * slot <= n {
            let mut child = 2 * slot;
            if child < n && keys[self.slots[child + 1]] < keys[self.slots[child]] {
                child += 1;
            }

            if keys[vertex] > keys[self.slots[child]] {
                let moved = self.slots[child];
                self.slots[slot] = moved;
                self.position[moved] = slot;
                slot = child;
            } else {
                break;
            }
        }

        self.slots[slot] = vertex;
        self.position[vertex] = slot;
    }
}

#[cfg(test)]
mod tests;
