use fxhash::FxHashMap;

use super::*;

/// Generator for uniform `G(n,m)` random graphs with `n` nodes and `m` distinct edges.
///
/// The generator can be parameterized via:
/// - `.nodes(n)`: total number of nodes
/// - `.edges(m)`: total number of edges
/// - `.undirected(bool)`: whether `Edge(u, v)` and `Edge(v, u)` are the same edge
/// - `.loops(bool)`: whether self-loops may be drawn
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use wgraphs::{prelude::*, gens::*};
///
/// let mut rng = rand_pcg::Pcg64Mcg::seed_from_u64(3);
/// let edges = Gnm::new().nodes(10).edges(45).undirected(true).generate(&mut rng);
///
/// // all pairs of the complete graph
/// assert_eq!(edges.len(), 45);
/// assert!(edges.iter().all(|e| e.is_normalized() && !e.is_loop()));
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnm {
    n: NumNodes,
    m: NumEdges,
    undirected: bool,
    loops: bool,
}

impl Gnm {
    /// Creates a new empty `G(n,m)` generator for directed graphs without loops.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the graph as undirected (or not).
    pub fn undirected(mut self, undirected: bool) -> Self {
        self.undirected = undirected;
        self
    }

    /// Allows self-loops to be drawn (or not).
    pub fn loops(mut self, loops: bool) -> Self {
        self.loops = loops;
        self
    }

    /// Number of distinct edges that can be drawn
    fn edge_space(&self) -> u64 {
        let n = self.n as u64;
        match (self.undirected, self.loops) {
            (true, false) => n * n.saturating_sub(1) / 2,
            (true, true) => n * (n + 1) / 2,
            (false, false) => n * n.saturating_sub(1),
            (false, true) => n * n,
        }
    }

    /// Maps an index of the edge space to its edge
    fn decode(&self, x: u64) -> Edge {
        let n = self.n as u64;
        match (self.undirected, self.loops) {
            (true, false) => {
                let (v, u) = decode_triangular(x);
                Edge(v as Node, u as Node)
            }
            (true, true) => {
                let (v, u) = decode_triangular(x);
                Edge(v as Node, (u - 1) as Node)
            }
            (false, false) => {
                let (u, r) = (x / (n - 1), x % (n - 1));
                let v = if r >= u { r + 1 } else { r };
                Edge(u as Node, v as Node)
            }
            (false, true) => Edge((x / n) as Node, (x % n) as Node),
        }
    }
}

/// Maps `x` to the `x`-th pair `(v, u)` with `v < u` in the order `(0,1), (0,2), (1,2), (0,3), ...`
fn decode_triangular(x: u64) -> (u64, u64) {
    let mut u = ((1.0 + (1.0 + 8.0 * x as f64).sqrt()) / 2.0) as u64;
    while u * (u - 1) / 2 > x {
        u -= 1;
    }
    while (u + 1) * u / 2 <= x {
        u += 1;
    }
    (x - u * (u - 1) / 2, u)
}

impl NumNodesGen for Gnm {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl NumEdgesGen for Gnm {
    fn set_edges(&mut self, m: NumEdges) {
        self.m = m;
    }
}

impl GraphGenerator for Gnm {
    /// Returns a streaming iterator over a random `G(n,m)` edge set.
    ///
    /// # Panics
    /// If `m` exceeds the number of possible edges
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng,
    {
        let end = self.edge_space();
        assert!(
            self.m as u64 <= end,
            "cannot draw {} distinct edges out of {end}",
            self.m
        );

        let gnm = *self;
        GnmGenerator::new(rng, self.m as u64, end).map(move |x| gnm.decode(x))
    }
}

/// Produces exactly `m` uniformly random and distinct values of `[0, end)`.
///
/// The algorithm used is based on:
/// > *V. Batagelj and U. Brandes. Efficient Generation of Large Random Networks.
/// > Physical Review E 71.3 (2005): 036113.*
///
/// It emulates a Fisher-Yates shuffle of `[0, end)` on-the-fly, storing only the displaced
/// entries in a hash map.
pub struct GnmGenerator<'a, R>
where
    R: Rng,
{
    rem: u64,
    cur: u64,
    end: u64,
    map: FxHashMap<u64, u64>,
    rng: &'a mut R,
}

impl<'a, R> GnmGenerator<'a, R>
where
    R: Rng,
{
    /// Creates a new `GnmGenerator`.
    /// ** Panics if `m > end` **
    pub fn new(rng: &'a mut R, m: u64, end: u64) -> Self {
        assert!(m <= end);

        Self {
            rem: m,
            cur: 0,
            end,
            map: FxHashMap::default(),
            rng,
        }
    }
}

impl<R> Iterator for GnmGenerator<'_, R>
where
    R: Rng,
{
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rem == 0 {
            return None;
        }

        let drawn = self.rng.random_range(self.cur..self.end);
        let value = self.map.get(&drawn).copied().unwrap_or(drawn);

        // position `drawn` now holds what was at `cur`
        let displaced = self.map.get(&self.cur).copied().unwrap_or(self.cur);
        self.map.insert(drawn, displaced);

        self.cur += 1;
        self.rem -= 1;

        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.rem as usize, Some(self.rem as usize))
    }
}

impl<R> ExactSizeIterator for GnmGenerator<'_, R> where R: Rng {}

#[cfg(test)]
mod tests {
    use fxhash::FxHashSet;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn distinct_edges() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);

        for undirected in [false, true] {
            for loops in [false, true] {
                for n in [1 as NumNodes, 2, 7, 30] {
                    let config = Gnm::new().nodes(n).undirected(undirected).loops(loops);
                    let end = config.edge_space() as NumEdges;

                    for m in [0, end / 2, end] {
                        let edges = config.edges(m).generate(rng);
                        assert_eq!(edges.len() as NumEdges, m);

                        let set: FxHashSet<Edge> = edges.iter().copied().collect();
                        assert_eq!(set.len(), edges.len());

                        for e in edges {
                            assert!(e.0 < n && e.1 < n);
                            assert!(loops || !e.is_loop());
                            assert!(!undirected || e.is_normalized());
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn triangular_decoding() {
        let pairs: Vec<_> = (0..6).map(decode_triangular).collect();
        assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 2), (0, 3), (1, 3), (2, 3)]);
    }

    #[test]
    #[should_panic]
    fn too_many_edges() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);
        Gnm::new().nodes(3).edges(4).undirected(true).generate(rng);
    }
}
