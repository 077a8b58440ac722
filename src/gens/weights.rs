use std::ops::Range;

use rand_distr::{Distribution, Uniform};

use super::*;

/// Attaches uniformly random weights from a half-open range to generated edges
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use wgraphs::{prelude::*, gens::*};
///
/// let mut rng = rand_pcg::Pcg64Mcg::seed_from_u64(1);
/// let weights = RandomWeights::new(0.0..1.0).unwrap();
///
/// let graph = EdgeWeightedGraph::from_edges(
///     3,
///     weights.weigh(&mut rng, [Edge(0, 1), Edge(1, 2)]),
/// ).unwrap();
/// assert!(graph.edges().all(|e| e.weight() < 1.0));
/// ```
#[derive(Debug, Clone)]
pub struct RandomWeights {
    distr: Uniform<Weight>,
}

impl RandomWeights {
    /// Fails if the range is empty or not finite
    pub fn new(range: Range<Weight>) -> Result<Self> {
        for bound in [range.start, range.end] {
            if !bound.is_finite() {
                return Err(GraphError::InvalidWeight(bound));
            }
        }

        let distr =
            Uniform::new(range.start, range.end).map_err(|_| GraphError::InvalidWeight(range.end))?;
        Ok(Self { distr })
    }

    /// Draws a single weight
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Weight {
        self.distr.sample(rng)
    }

    /// Returns `(u, v, weight)` for every edge `Edge(u, v)`, ready to be converted
    /// into any weighted edge kind
    pub fn weigh<'a, R, I>(
        &'a self,
        rng: &'a mut R,
        edges: I,
    ) -> impl Iterator<Item = (Node, Node, Weight)> + 'a
    where
        R: Rng,
        I: IntoIterator<Item = Edge>,
        I::IntoIter: 'a,
    {
        edges
            .into_iter()
            .map(move |Edge(u, v)| (u, v, self.distr.sample(rng)))
    }
}
