use crate::node::*;

/// Min-priority queue over the indices `0..n`, each associated with a key that can be decreased.
///
/// Implemented as a binary heap of indices together with the inverse permutation,
/// so `contains` is `O(1)` and `insert`, `decrease_key` and `delete_min` are `O(log n)`.
/// Keys only need to be `PartialOrd`; incomparable keys (such as `NaN`) are never ordered first.
///
/// # Examples
/// ```
/// use wgraphs::utils::IndexMinPQ;
///
/// let mut pq = IndexMinPQ::new(3);
/// pq.insert(0, 5.0);
/// pq.insert(2, 1.0);
/// pq.decrease_key(0, 0.5);
///
/// assert_eq!(pq.delete_min(), Some(0));
/// assert_eq!(pq.delete_min(), Some(2));
/// assert!(pq.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct IndexMinPQ<K> {
    /// binary heap of indices, 0-based
    heap: Vec<Node>,
    /// position of each index in `heap`
    position: Vec<Option<usize>>,
    keys: Vec<Option<K>>,
}

impl<K: PartialOrd + Copy> IndexMinPQ<K> {
    /// Creates an empty queue for the indices `0..n`
    pub fn new(n: NumNodes) -> Self {
        Self {
            heap: Vec::with_capacity(n as usize),
            position: vec![None; n as usize],
            keys: vec![None; n as usize],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns *true* if `i` is currently in the queue
    /// ** Panics if `i >= n` **
    pub fn contains(&self, i: Node) -> bool {
        self.position[i as usize].is_some()
    }

    /// Returns the key of `i` if it is in the queue
    /// ** Panics if `i >= n` **
    pub fn key_of(&self, i: Node) -> Option<K> {
        self.keys[i as usize]
    }

    /// Inserts `i` with the given key.
    /// ** Panics if `i >= n` or `i` is already in the queue **
    pub fn insert(&mut self, i: Node, key: K) {
        assert!(!self.contains(i), "index {i} is already in the queue");

        self.keys[i as usize] = Some(key);
        self.position[i as usize] = Some(self.heap.len());
        self.heap.push(i);
        self.swim(self.heap.len() - 1);
    }

    /// Lowers the key of `i`.
    /// ** Panics if `i` is not in the queue or `key` is larger than the current key **
    pub fn decrease_key(&mut self, i: Node, key: K) {
        let Some(pos) = self.position[i as usize] else {
            panic!("index {i} is not in the queue");
        };
        assert!(
            self.keys[i as usize].is_some_and(|old| !(key > old)),
            "key of {i} would increase"
        );

        self.keys[i as usize] = Some(key);
        self.swim(pos);
    }

    /// Inserts `i` or lowers its key, whichever applies
    pub fn insert_or_decrease(&mut self, i: Node, key: K) {
        if self.contains(i) {
            self.decrease_key(i, key);
        } else {
            self.insert(i, key);
        }
    }

    /// Returns the index with the smallest key without removing it
    pub fn min(&self) -> Option<Node> {
        self.heap.first().copied()
    }

    /// Removes and returns the index with the smallest key
    pub fn delete_min(&mut self) -> Option<Node> {
        let min = *self.heap.first()?;
        let last = self.heap.len() - 1;
        self.swap(0, last);
        self.heap.pop();

        self.position[min as usize] = None;
        self.keys[min as usize] = None;

        if !self.heap.is_empty() {
            self.sink(0);
        }

        Some(min)
    }

    fn less(&self, a: usize, b: usize) -> bool {
        let ka = self.keys[self.heap[a] as usize];
        let kb = self.keys[self.heap[b] as usize];
        matches!((ka, kb), (Some(ka), Some(kb)) if ka < kb)
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.position[self.heap[a] as usize] = Some(a);
        self.position[self.heap[b] as usize] = Some(b);
    }

    fn swim(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.less(pos, parent) {
                break;
            }
            self.swap(pos, parent);
            pos = parent;
        }
    }

    fn sink(&mut self, mut pos: usize) {
        loop {
            let left = 2 * pos + 1;
            if left >= self.heap.len() {
                break;
            }

            let right = left + 1;
            let child = if right < self.heap.len() && self.less(right, left) {
                right
            } else {
                left
            };

            if !self.less(child, pos) {
                break;
            }
            self.swap(pos, child);
            pos = child;
        }
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn sorts_random_keys() {
        let rng = &mut Pcg64Mcg::seed_from_u64(2);

        for n in [1 as NumNodes, 10, 200] {
            let mut keys: Vec<f64> = (0..n).map(|_| rng.random_range(0.0..100.0)).collect();
            let mut pq = IndexMinPQ::new(n);
            for i in 0..n {
                pq.insert(i, keys[i as usize]);
            }

            for i in 0..n {
                if rng.random_bool(0.5) {
                    keys[i as usize] -= rng.random_range(0.0..50.0);
                    pq.decrease_key(i, keys[i as usize]);
                }
            }

            let mut popped = Vec::new();
            while let Some(i) = pq.delete_min() {
                assert!(!pq.contains(i));
                popped.push(keys[i as usize]);
            }

            assert_eq!(popped.len(), n as usize);
            assert!(popped.iter().tuple_windows().all(|(a, b)| a <= b));
        }
    }

    #[test]
    fn membership() {
        let mut pq = IndexMinPQ::new(4);
        pq.insert(3, 2);
        pq.insert_or_decrease(1, 7);
        pq.insert_or_decrease(1, 1);

        assert!(pq.contains(1) && pq.contains(3));
        assert!(!pq.contains(0));
        assert_eq!(pq.key_of(1), Some(1));
        assert_eq!(pq.len(), 2);
        assert_eq!(pq.min(), Some(1));
    }

    #[test]
    #[should_panic]
    fn double_insert() {
        let mut pq = IndexMinPQ::new(2);
        pq.insert(0, 1.0);
        pq.insert(0, 2.0);
    }
}
