use crate::node::*;

/// Disjoint sets over the vertices `0..n` with union by size.
///
/// Trees stay logarithmic in height through union by size alone, so `find` takes `&self`
/// and never compresses paths.
///
/// # Examples
/// ```
/// use wgraphs::utils::UnionFind;
///
/// let mut uf = UnionFind::new(4);
/// assert!(uf.union(0, 1));
/// assert!(uf.union(2, 3));
/// assert!(!uf.union(1, 0));
///
/// assert!(uf.connected(0, 1));
/// assert!(!uf.connected(1, 2));
/// assert_eq!(uf.count(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct UnionFind {
    parent: Vec<Node>,
    size: Vec<NumNodes>,
    count: NumNodes,
}

impl UnionFind {
    /// Creates `n` singleton sets
    pub fn new(n: NumNodes) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n as usize],
            count: n,
        }
    }

    /// Returns the representative of the set containing `p`
    /// ** Panics if `p >= n` **
    pub fn find(&self, mut p: Node) -> Node {
        while self.parent[p as usize] != p {
            p = self.parent[p as usize];
        }
        p
    }

    /// Returns *true* if `p` and `q` are in the same set
    /// ** Panics if `p >= n || q >= n` **
    pub fn connected(&self, p: Node, q: Node) -> bool {
        self.find(p) == self.find(q)
    }

    /// Merges the sets containing `p` and `q`.
    /// Returns *true* if they were different sets before.
    /// ** Panics if `p >= n || q >= n` **
    pub fn union(&mut self, p: Node, q: Node) -> bool {
        let root_p = self.find(p);
        let root_q = self.find(q);
        if root_p == root_q {
            return false;
        }

        let (small, large) = if self.size[root_p as usize] < self.size[root_q as usize] {
            (root_p, root_q)
        } else {
            (root_q, root_p)
        };

        self.parent[small as usize] = large;
        self.size[large as usize] += self.size[small as usize];
        self.count -= 1;

        true
    }

    /// Returns the number of disjoint sets
    pub fn count(&self) -> NumNodes {
        self.count
    }

    /// Returns the number of elements in the set containing `p`
    /// ** Panics if `p >= n` **
    pub fn size_of(&self, p: Node) -> NumNodes {
        self.size[self.find(p) as usize]
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn matches_naive_labels() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);

        for n in [1 as NumNodes, 10, 100] {
            let mut uf = UnionFind::new(n);
            let mut label: Vec<Node> = (0..n).collect();

            for _ in 0..n {
                let p = rng.random_range(0..n);
                let q = rng.random_range(0..n);

                let (lp, lq) = (label[p as usize], label[q as usize]);
                assert_eq!(uf.union(p, q), lp != lq);
                label.iter_mut().filter(|l| **l == lq).for_each(|l| *l = lp);

                let distinct = label.iter().collect::<std::collections::HashSet<_>>().len();
                assert_eq!(uf.count() as usize, distinct);
            }

            for p in 0..n {
                let members = label.iter().filter(|&&l| l == label[p as usize]).count();
                assert_eq!(uf.size_of(p) as usize, members);
                for q in 0..n {
                    assert_eq!(uf.connected(p, q), label[p as usize] == label[q as usize]);
                }
            }
        }
    }
}
