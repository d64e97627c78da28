//! Candidate solutions and the per-parent offspring plan.

use rand::Rng;
use rand_distr::StandardNormal;

/// A candidate vertex cover: an inclusion mask plus derived scores.
///
/// The derived fields ([`cover`](Self::cover), [`uncovered`](Self::uncovered),
/// [`fitness`](Self::fitness)) are written only by the
/// [`Evaluator`](super::Evaluator). Any change to the mask through
/// [`set_vertex`](Self::set_vertex) or [`mask_mut`](Self::mask_mut) resets
/// them, and the candidate reports an infinite fitness until it is
/// evaluated again.
///
/// # Examples
///
/// ```
/// use u_vertex_cover::engine::{Candidate, Evaluator};
/// use u_vertex_cover::graph::Graph;
///
/// let graph = Graph::new(3, vec![(0, 1), (1, 2)]).unwrap();
/// let evaluator = Evaluator::new(&graph, 1000.0);
///
/// let mut c = Candidate::from_mask(vec![false, true, false]);
/// assert!(!c.is_evaluated());
///
/// evaluator.evaluate(&mut c);
/// assert_eq!(c.cover(), 1);
/// assert_eq!(c.uncovered(), 0);
/// assert_eq!(c.fitness(), 1.0);
/// ```
///
/// With the `serde` feature, a candidate serializes with its derived
/// fields but deserializes from the mask alone, coming back unevaluated.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "CandidateMask")
)]
pub struct Candidate {
    mask: Vec<bool>,
    cover: usize,
    uncovered: usize,
    fitness: f64,
    evaluated: bool,
}

/// Wire form read back into a [`Candidate`]; other fields are ignored.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct CandidateMask {
    mask: Vec<bool>,
}

#[cfg(feature = "serde")]
impl From<CandidateMask> for Candidate {
    fn from(wire: CandidateMask) -> Self {
        Candidate::from_mask(wire.mask)
    }
}

impl Candidate {
    /// Wraps an inclusion mask. The candidate starts unevaluated.
    pub fn from_mask(mask: Vec<bool>) -> Self {
        Self {
            mask,
            cover: 0,
            uncovered: 0,
            fitness: f64::INFINITY,
            evaluated: false,
        }
    }

    /// The best-ever placeholder: empty mask, infinite fitness.
    pub(crate) fn sentinel() -> Self {
        Self::from_mask(Vec::new())
    }

    /// The vertex inclusion mask.
    pub fn mask(&self) -> &[bool] {
        &self.mask
    }

    /// Mutable access to the mask. Invalidates the derived fields.
    pub fn mask_mut(&mut self) -> &mut [bool] {
        self.invalidate();
        &mut self.mask
    }

    /// Includes or excludes one vertex. Invalidates the derived fields.
    pub fn set_vertex(&mut self, vertex: usize, included: bool) {
        self.invalidate();
        self.mask[vertex] = included;
    }

    /// Number of included vertices.
    pub fn cover(&self) -> usize {
        self.cover
    }

    /// Number of edges with neither endpoint included.
    pub fn uncovered(&self) -> usize {
        self.uncovered
    }

    /// Penalized objective, lower is better. Infinite while unevaluated.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Whether the derived fields reflect the current mask.
    pub fn is_evaluated(&self) -> bool {
        self.evaluated
    }

    /// Included vertex indices, ascending.
    pub fn vertices(&self) -> Vec<usize> {
        self.mask
            .iter()
            .enumerate()
            .filter_map(|(i, &included)| included.then_some(i))
            .collect()
    }

    pub(crate) fn record(&mut self, cover: usize, uncovered: usize, fitness: f64) {
        self.cover = cover;
        self.uncovered = uncovered;
        self.fitness = fitness;
        self.evaluated = true;
    }

    fn invalidate(&mut self) {
        self.cover = 0;
        self.uncovered = 0;
        self.fitness = f64::INFINITY;
        self.evaluated = false;
    }
}

/// Noise added to a parent's bit before it is squashed into an inclusion
/// probability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Perturbation {
    /// Zero-mean Gaussian noise with standard deviation `sigma`.
    Gaussian { sigma: f64 },

    /// Uniform noise on `[-spread, spread)`, drawn as
    /// `2 * spread * (U(0,1) - 0.5)`.
    Symmetric { spread: f64 },
}

impl Perturbation {
    /// Draws one noise term.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        match *self {
            Perturbation::Gaussian { sigma } => {
                let z: f64 = rng.sample(StandardNormal);
                sigma * z
            }
            Perturbation::Symmetric { spread } => {
                2.0 * spread * (rng.random_range(0.0..1.0) - 0.5)
            }
        }
    }
}

/// How many offspring one parent produces this generation, and how
/// strongly they are perturbed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brood {
    pub count: usize,
    pub perturbation: Perturbation,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_from_mask_unevaluated() {
        let c = Candidate::from_mask(vec![true, false]);
        assert!(!c.is_evaluated());
        assert!(c.fitness().is_infinite());
        assert_eq!(c.mask(), &[true, false]);
    }

    #[test]
    fn test_mutation_invalidates() {
        let mut c = Candidate::from_mask(vec![true, false, true]);
        c.record(2, 0, 2.0);
        assert!(c.is_evaluated());

        c.set_vertex(1, true);
        assert!(!c.is_evaluated());
        assert!(c.fitness().is_infinite());
        assert_eq!(c.cover(), 0);

        c.record(3, 0, 3.0);
        c.mask_mut()[0] = false;
        assert!(!c.is_evaluated());
        assert_eq!(c.mask(), &[false, true, true]);
    }

    #[test]
    fn test_vertices() {
        let c = Candidate::from_mask(vec![false, true, false, true]);
        assert_eq!(c.vertices(), vec![1, 3]);
        assert!(Candidate::from_mask(vec![false; 3]).vertices().is_empty());
    }

    #[test]
    fn test_symmetric_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let p = Perturbation::Symmetric { spread: 0.3 };
        for _ in 0..1000 {
            let x = p.sample(&mut rng);
            assert!((-0.3..0.3).contains(&x), "sample {x} out of range");
        }
        let still = Perturbation::Symmetric { spread: 0.0 };
        assert_eq!(still.sample(&mut rng), 0.0);
    }

    #[test]
    fn test_gaussian_scale() {
        let mut rng = StdRng::seed_from_u64(42);
        let p = Perturbation::Gaussian { sigma: 0.5 };
        let n = 10_000;
        let samples: Vec<f64> = (0..n).map(|_| p.sample(&mut rng)).collect();
        let mean = samples.iter().sum::<f64>() / n as f64;
        let var = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n as f64;
        assert!(mean.abs() < 0.05, "mean {mean}");
        assert!((var.sqrt() - 0.5).abs() < 0.05, "std {}", var.sqrt());
    }
}
