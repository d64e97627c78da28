//! Undirected graph input for the vertex cover optimizers.
//!
//! A [`Graph`] is built once and read-only afterwards. Vertices are the
//! indices `0..n`; edges are kept in input order as unordered pairs.
//!
//! Besides the validated constructor, this module carries the two input
//! paths used around the optimizers:
//!
//! - [`Graph::parse`] / [`Graph::from_reader`]: the plain `.dat` format
//!   (vertex count followed by `u v` pairs)
//! - [`Graph::random_connected`]: a sparse random connected graph, handy
//!   for benchmarks and tests

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use std::collections::HashSet;
use std::io::Read;
use thiserror::Error;
use tracing::warn;

/// Errors raised while building or loading a [`Graph`].
#[derive(Debug, Error)]
pub enum GraphError {
    /// An edge references a vertex outside `0..vertex_count`.
    #[error("edge ({u}, {v}) has an endpoint outside 0..{vertex_count}")]
    EndpointOutOfRange {
        u: usize,
        v: usize,
        vertex_count: usize,
    },

    /// The input did not start with a vertex count.
    #[error("graph input is empty: missing vertex count")]
    MissingVertexCount,

    /// A token could not be read as a vertex index.
    #[error("invalid token {token:?}: expected a non-negative integer")]
    InvalidToken { token: String },

    /// The edge list ended in the middle of a pair.
    #[error("edge list ends with a dangling endpoint {u}")]
    DanglingEndpoint { u: usize },

    /// The underlying reader failed.
    #[error("failed to read graph input: {0}")]
    Io(#[from] std::io::Error),
}

/// An immutable undirected graph.
///
/// # Invariant
///
/// Every edge endpoint is `< vertex_count`. Constructors enforce this, so
/// the optimizers never have to re-check it.
///
/// # Examples
///
/// ```
/// use u_vertex_cover::graph::Graph;
///
/// let path = Graph::new(3, vec![(0, 1), (1, 2)]).unwrap();
/// assert_eq!(path.vertex_count(), 3);
/// assert_eq!(path.edge_count(), 2);
/// assert!(path.is_cover(&[false, true, false]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawGraph")
)]
pub struct Graph {
    vertex_count: usize,
    edges: Vec<(usize, usize)>,
}

/// Unchecked wire form of [`Graph`]. Deserialization goes through
/// [`Graph::new`] so out-of-range endpoints are rejected.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGraph {
    vertex_count: usize,
    edges: Vec<(usize, usize)>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGraph> for Graph {
    type Error = GraphError;

    fn try_from(raw: RawGraph) -> Result<Self, Self::Error> {
        Graph::new(raw.vertex_count, raw.edges)
    }
}

impl Graph {
    /// Creates a graph, rejecting edges with out-of-range endpoints.
    pub fn new(vertex_count: usize, edges: Vec<(usize, usize)>) -> Result<Self, GraphError> {
        if let Some(&(u, v)) = edges
            .iter()
            .find(|&&(u, v)| u >= vertex_count || v >= vertex_count)
        {
            return Err(GraphError::EndpointOutOfRange { u, v, vertex_count });
        }
        Ok(Self {
            vertex_count,
            edges,
        })
    }

    /// Creates a graph with no vertices and no edges.
    pub fn empty() -> Self {
        Self {
            vertex_count: 0,
            edges: Vec::new(),
        }
    }

    /// Parses the `.dat` text format.
    ///
    /// The first whitespace-separated token is the vertex count `n`; the
    /// remaining tokens are read in pairs as edges. Pairs with an endpoint
    /// outside `0..n` are skipped, matching the behavior of the graph
    /// files this format comes from.
    ///
    /// ```
    /// use u_vertex_cover::graph::Graph;
    ///
    /// let g = Graph::parse("4\n0 1\n1 2\n2 9\n").unwrap();
    /// assert_eq!(g.vertex_count(), 4);
    /// assert_eq!(g.edges(), &[(0, 1), (1, 2)]);
    /// ```
    pub fn parse(input: &str) -> Result<Self, GraphError> {
        let mut tokens = input.split_whitespace().map(parse_index);

        let vertex_count = tokens.next().ok_or(GraphError::MissingVertexCount)??;
        let mut edges = Vec::new();

        while let Some(u) = tokens.next() {
            let u = u?;
            let v = tokens.next().ok_or(GraphError::DanglingEndpoint { u })??;
            if u < vertex_count && v < vertex_count {
                edges.push((u, v));
            } else {
                warn!(u, v, vertex_count, "skipping out-of-range edge");
            }
        }

        Ok(Self {
            vertex_count,
            edges,
        })
    }

    /// Reads the whole reader and parses it with [`Graph::parse`].
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, GraphError> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        Self::parse(&input)
    }

    /// Generates a random connected graph on `n` vertices.
    ///
    /// A random spanning tree is laid down first (each vertex in a shuffled
    /// order attaches to one already placed vertex), then distinct random
    /// edges are added until the graph has `min(n * edge_factor, n(n-1)/2)`
    /// edges. Edges are stored as `(min, max)` and sorted.
    pub fn random_connected<R: Rng>(n: usize, edge_factor: usize, rng: &mut R) -> Self {
        let mut edges: HashSet<(usize, usize)> = HashSet::new();

        let mut order: Vec<usize> = (0..n).collect();
        order.shuffle(rng);
        for i in 1..n {
            let u = order[i];
            if let Some(&v) = order[..i].choose(rng) {
                edges.insert((u.min(v), u.max(v)));
            }
        }

        let target = (n * edge_factor).min(n * n.saturating_sub(1) / 2);
        while edges.len() < target {
            let u = rng.random_range(0..n);
            let v = rng.random_range(0..n);
            if u != v {
                edges.insert((u.min(v), u.max(v)));
            }
        }

        let mut edges: Vec<(usize, usize)> = edges.into_iter().collect();
        edges.sort_unstable();
        Self {
            vertex_count: n,
            edges,
        }
    }

    /// Number of vertices `n`.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of edges `m`.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The edges in input order.
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// Returns `true` if `mask` touches every edge.
    ///
    /// # Panics
    /// Panics if `mask` is shorter than [`vertex_count`](Self::vertex_count).
    pub fn is_cover(&self, mask: &[bool]) -> bool {
        self.edges.iter().all(|&(u, v)| mask[u] || mask[v])
    }
}

fn parse_index(token: &str) -> Result<usize, GraphError> {
    token.parse().map_err(|_| GraphError::InvalidToken {
        token: token.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_new_valid() {
        let g = Graph::new(3, vec![(0, 1), (1, 2)]).unwrap();
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        let err = Graph::new(2, vec![(0, 2)]).unwrap_err();
        assert!(matches!(
            err,
            GraphError::EndpointOutOfRange {
                u: 0,
                v: 2,
                vertex_count: 2
            }
        ));
    }

    #[test]
    fn test_empty() {
        let g = Graph::empty();
        assert_eq!(g.vertex_count(), 0);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_is_cover() {
        let g = Graph::new(3, vec![(0, 1), (1, 2)]).unwrap();
        assert!(g.is_cover(&[false, true, false]));
        assert!(g.is_cover(&[true, false, true]));
        assert!(!g.is_cover(&[true, false, false]));
        assert!(Graph::new(4, vec![]).unwrap().is_cover(&[false; 4]));
    }

    // ---- Text format ----

    #[test]
    fn test_parse_skips_out_of_range() {
        let g = Graph::parse("3\n0 1\n1 2\n3 0\n").unwrap();
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edges(), &[(0, 1), (1, 2)]);
    }

    #[test]
    fn test_parse_vertex_count_only() {
        let g = Graph::parse("5").unwrap();
        assert_eq!(g.vertex_count(), 5);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Graph::parse("   \n"),
            Err(GraphError::MissingVertexCount)
        ));
        assert!(matches!(
            Graph::parse("3\n0 x\n"),
            Err(GraphError::InvalidToken { .. })
        ));
        assert!(matches!(
            Graph::parse("3\n0 1\n2\n"),
            Err(GraphError::DanglingEndpoint { u: 2 })
        ));
        assert!(matches!(
            Graph::parse("-1\n"),
            Err(GraphError::InvalidToken { .. })
        ));
    }

    #[test]
    fn test_from_reader() {
        let input: &[u8] = b"2\n0 1\n";
        let g = Graph::from_reader(input).unwrap();
        assert_eq!(g, Graph::new(2, vec![(0, 1)]).unwrap());
    }

    // ---- Generator ----

    #[test]
    fn test_random_connected_edge_count() {
        let mut rng = StdRng::seed_from_u64(42);
        let g = Graph::random_connected(20, 2, &mut rng);
        assert_eq!(g.vertex_count(), 20);
        assert_eq!(g.edge_count(), 40);
        for &(u, v) in g.edges() {
            assert!(u < v && v < 20);
        }
        assert!(g.edges().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_random_connected_caps_at_complete_graph() {
        let mut rng = StdRng::seed_from_u64(7);
        let g = Graph::random_connected(4, 10, &mut rng);
        assert_eq!(g.edge_count(), 6);
    }

    #[test]
    fn test_random_connected_is_connected() {
        let mut rng = StdRng::seed_from_u64(3);
        let g = Graph::random_connected(30, 1, &mut rng);

        let mut adjacency = vec![Vec::new(); 30];
        for &(u, v) in g.edges() {
            adjacency[u].push(v);
            adjacency[v].push(u);
        }
        let mut seen = vec![false; 30];
        let mut stack = vec![0];
        seen[0] = true;
        while let Some(u) = stack.pop() {
            for &v in &adjacency[u] {
                if !seen[v] {
                    seen[v] = true;
                    stack.push(v);
                }
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_random_connected_tiny() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(Graph::random_connected(0, 2, &mut rng).edge_count(), 0);
        assert_eq!(Graph::random_connected(1, 2, &mut rng).edge_count(), 0);
        assert_eq!(Graph::random_connected(2, 2, &mut rng).edge_count(), 1);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_deserialize_rejects_out_of_range_endpoint() {
        let err = serde_json::from_str::<Graph>(r#"{"vertex_count":2,"edges":[[0,7]]}"#)
            .unwrap_err();
        assert!(err.to_string().contains("outside 0..2"), "{err}");
    }

    #[test]
    fn test_serde_round_trip() {
        let g = Graph::new(3, vec![(0, 1), (1, 2)]).unwrap();
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(serde_json::from_str::<Graph>(&json).unwrap(), g);
    }
}
