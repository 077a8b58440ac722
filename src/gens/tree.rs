/*!
# Random Spanning Trees

Generates a random spanning tree on `n` nodes: the result is connected, has exactly `n - 1`
edges and, read as a directed graph, all edges are oriented away from the root (default `0`).

# Examples

```
use rand::SeedableRng;
use wgraphs::gens::*;

let mut rng = rand_pcg::Pcg64Mcg::seed_from_u64(1);
let edges = RandomTree::new().nodes(5).root(2).generate(&mut rng);

assert_eq!(edges.len(), 4);
```
*/

use super::*;

/// Generator for a random spanning tree.
#[derive(Debug, Copy, Clone, Default)]
pub struct RandomTree {
    n: NumNodes,
    root: Node,
}

impl RandomTree {
    /// Creates a new generator with `n = 0` and `root = 0`
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root node of the tree.
    /// ** Generation panics if `root >= n` **
    pub fn set_root(&mut self, root: Node) {
        self.root = root;
    }

    /// Sets the root node of the tree.
    /// ** Generation panics if `root >= n` **
    pub fn root(mut self, root: Node) -> Self {
        self.set_root(root);
        self
    }
}

impl NumNodesGen for RandomTree {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl GraphGenerator for RandomTree {
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng,
    {
        RandomTreeGenerator::new(self.n, self.root, rng)
    }
}

/// Streaming generator for tree edges.
///
/// Repeatedly draws a chain of random vertices that are not connected yet until it hits the
/// tree, then attaches the chain from the tree-side end. Yields exactly `n - 1` edges.
pub struct RandomTreeGenerator<'a, R>
where
    R: Rng,
{
    rng: &'a mut R,
    n: NumNodes,
    connected: NodeBitSet,
    on_path: NodeBitSet,
    path: Vec<Node>,
    /// index of the next path edge to emit (emitted backwards)
    emit: usize,
}

impl<'a, R> RandomTreeGenerator<'a, R>
where
    R: Rng,
{
    /// Creates a generator for a tree on `n` nodes rooted at `root`; empty if `n == 0`.
    /// ** Panics if `n > 0 && root >= n` **
    pub fn new(n: NumNodes, root: Node, rng: &'a mut R) -> Self {
        assert!(n == 0 || root < n, "root {root} is not a vertex");

        let mut connected = NodeBitSet::new(n);
        if n > 0 {
            connected.set_bit(root);
        }

        Self {
            rng,
            n,
            connected,
            on_path: NodeBitSet::new(n),
            path: Vec::new(),
            emit: 0,
        }
    }
}

impl<R> Iterator for RandomTreeGenerator<'_, R>
where
    R: Rng,
{
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        if self.emit > 0 {
            self.emit -= 1;
            return Some(Edge(self.path[self.emit + 1], self.path[self.emit]));
        }

        if self.connected.cardinality() as NumNodes == self.n {
            return None;
        }

        self.on_path.clear_all();
        self.path.clear();

        loop {
            let u = self.rng.random_range(0..self.n);

            if self.path.is_empty() && self.connected.get_bit(u) {
                continue;
            }

            if self.on_path.set_bit(u) {
                continue;
            }

            self.path.push(u);

            if self.connected.set_bit(u) {
                // path = [new, ..., new, tree]; emit from the tree-side end
                self.emit = self.path.len() - 2;
                return Some(Edge(self.path[self.emit + 1], self.path[self.emit]));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::utils::UnionFind;

    #[test]
    fn spanning_and_oriented() {
        let rng = &mut Pcg64Mcg::seed_from_u64(8);

        for n in [1 as NumNodes, 2, 10, 100] {
            let root = rng.random_range(0..n);
            let edges = RandomTree::new().nodes(n).root(root).generate(rng);
            assert_eq!(edges.len() as NumNodes, n - 1);

            let mut uf = UnionFind::new(n);
            let mut in_deg = vec![0; n as usize];
            for &Edge(u, v) in &edges {
                assert!(uf.union(u, v));
                in_deg[v as usize] += 1;
            }
            assert_eq!(uf.count(), 1);

            for u in 0..n {
                assert_eq!(in_deg[u as usize], if u == root { 0 } else { 1 });
            }
        }
    }

    #[test]
    fn empty_tree() {
        let rng = &mut Pcg64Mcg::seed_from_u64(8);
        assert!(RandomTree::new().generate(rng).is_empty());
    }
}
