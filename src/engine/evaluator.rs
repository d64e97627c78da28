//! Fitness evaluation.
//!
//! `fitness = uncovered * penalty + cover` when any edge is uncovered,
//! otherwise `fitness = cover`. With a penalty larger than the vertex
//! count, a single uncovered edge outweighs any possible saving in cover
//! size, so every feasible cover beats every infeasible one.

use super::types::Candidate;
use crate::graph::Graph;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Scores candidates against one graph.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'g> {
    graph: &'g Graph,
    penalty: f64,
}

impl<'g> Evaluator<'g> {
    pub fn new(graph: &'g Graph, penalty: f64) -> Self {
        if penalty <= graph.vertex_count() as f64 {
            tracing::warn!(
                penalty,
                vertex_count = graph.vertex_count(),
                "penalty does not dominate cover size; infeasible candidates may outrank feasible ones"
            );
        }
        Self { graph, penalty }
    }

    /// Computes the derived fields of `candidate` from its mask.
    ///
    /// # Panics
    /// Panics if the mask is shorter than the graph's vertex count.
    pub fn evaluate(&self, candidate: &mut Candidate) {
        let mask = candidate.mask();
        let cover = mask[..self.graph.vertex_count()]
            .iter()
            .filter(|&&included| included)
            .count();
        let uncovered = self
            .graph
            .edges()
            .iter()
            .filter(|&&(u, v)| !mask[u] && !mask[v])
            .count();
        let fitness = if uncovered > 0 {
            uncovered as f64 * self.penalty + cover as f64
        } else {
            cover as f64
        };
        candidate.record(cover, uncovered, fitness);
    }

    /// Evaluates every candidate in the slice.
    ///
    /// With the `parallel` feature and `parallel = true`, the batch is
    /// split across the rayon pool. Evaluation is pure, so the outcome is
    /// the same either way.
    pub fn evaluate_all(&self, candidates: &mut [Candidate], parallel: bool) {
        #[cfg(feature = "parallel")]
        {
            if parallel {
                candidates.par_iter_mut().for_each(|c| self.evaluate(c));
                return;
            }
        }

        #[cfg(not(feature = "parallel"))]
        let _ = parallel;

        for c in candidates.iter_mut() {
            self.evaluate(c);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn path3() -> Graph {
        Graph::new(3, vec![(0, 1), (1, 2)]).unwrap()
    }

    #[test]
    fn test_feasible_fitness_is_cover() {
        let g = path3();
        let ev = Evaluator::new(&g, 1000.0);
        let mut c = Candidate::from_mask(vec![false, true, false]);
        ev.evaluate(&mut c);
        assert_eq!((c.cover(), c.uncovered(), c.fitness()), (1, 0, 1.0));
    }

    #[test]
    fn test_infeasible_fitness_is_penalized() {
        let g = path3();
        let ev = Evaluator::new(&g, 1000.0);
        let mut c = Candidate::from_mask(vec![true, false, false]);
        ev.evaluate(&mut c);
        assert_eq!((c.cover(), c.uncovered(), c.fitness()), (1, 1, 1001.0));

        let mut none = Candidate::from_mask(vec![false; 3]);
        ev.evaluate(&mut none);
        assert_eq!((none.cover(), none.uncovered(), none.fitness()), (0, 2, 2000.0));
    }

    #[test]
    fn test_empty_graph() {
        let g = Graph::empty();
        let ev = Evaluator::new(&g, 1000.0);
        let mut c = Candidate::from_mask(Vec::new());
        ev.evaluate(&mut c);
        assert!(c.is_evaluated());
        assert_eq!((c.cover(), c.uncovered(), c.fitness()), (0, 0, 0.0));
    }

    #[test]
    fn test_evaluate_all() {
        let g = path3();
        let ev = Evaluator::new(&g, 1000.0);
        let mut batch = vec![
            Candidate::from_mask(vec![true, true, true]),
            Candidate::from_mask(vec![false, false, true]),
        ];
        ev.evaluate_all(&mut batch, true);
        assert_eq!(batch[0].fitness(), 3.0);
        assert_eq!(batch[1].fitness(), 1001.0);
        assert!(batch.iter().all(Candidate::is_evaluated));
    }

    proptest! {
        #[test]
        fn prop_fitness_formula(
            n in 1usize..30,
            raw_edges in prop::collection::vec((0usize..30, 0usize..30), 0..60),
            bits in prop::collection::vec(any::<bool>(), 30),
        ) {
            let edges: Vec<(usize, usize)> = raw_edges
                .into_iter()
                .map(|(u, v)| (u % n, v % n))
                .collect();
            let g = Graph::new(n, edges).unwrap();
            let ev = Evaluator::new(&g, 1000.0);
            let mut c = Candidate::from_mask(bits[..n].to_vec());
            ev.evaluate(&mut c);

            prop_assert!(c.cover() <= g.vertex_count());
            prop_assert!(c.uncovered() <= g.edge_count());
            let expected = if c.uncovered() > 0 {
                c.uncovered() as f64 * 1000.0 + c.cover() as f64
            } else {
                c.cover() as f64
            };
            prop_assert_eq!(c.fitness(), expected);
            prop_assert_eq!(c.uncovered() == 0, g.is_cover(c.mask()));
        }
    }
}
