//! Compressed Sparse Row (CSR) graph representation
//!
//! CSR is optimized for iteration over neighbors, which is exactly what
//! PageRank needs during power iteration. Sentence similarity matrices are
//! usually sparse once zero-overlap pairs are dropped, so the dense matrix is
//! converted before ranking.

use super::similarity::SimilarityMatrix;

/// A weighted undirected graph in Compressed Sparse Row format
///
/// Each undirected edge is stored in both directions.
#[derive(Debug, Clone)]
pub struct CsrGraph {
    /// Number of nodes
    pub num_nodes: usize,
    /// Row pointers: node i's edges are at indices row_ptr[i]..row_ptr[i+1]
    pub row_ptr: Vec<usize>,
    /// Column indices (target nodes) for each edge
    pub col_idx: Vec<u32>,
    /// Edge weights
    pub weights: Vec<f64>,
    /// Out-degree for each node
    pub out_degree: Vec<u32>,
    /// Total outgoing weight for each node
    pub total_weight: Vec<f64>,
}

impl CsrGraph {
    /// Convert a similarity matrix into CSR format, keeping positive entries
    pub fn from_matrix(matrix: &SimilarityMatrix) -> Self {
        let num_nodes = matrix.size();
        let mut row_ptr = Vec::with_capacity(num_nodes + 1);
        let mut col_idx = Vec::new();
        let mut weights = Vec::new();
        let mut out_degree = Vec::with_capacity(num_nodes);
        let mut total_weight = Vec::with_capacity(num_nodes);

        row_ptr.push(0);

        for node in 0..num_nodes {
            let row_start = col_idx.len();
            let mut row_total = 0.0;

            for (target, &weight) in matrix.row(node).iter().enumerate() {
                if target != node && weight > 0.0 {
                    col_idx.push(target as u32);
                    weights.push(weight);
                    row_total += weight;
                }
            }

            out_degree.push((col_idx.len() - row_start) as u32);
            total_weight.push(row_total);
            row_ptr.push(col_idx.len());
        }

        Self {
            num_nodes,
            row_ptr,
            col_idx,
            weights,
            out_degree,
            total_weight,
        }
    }

    /// Iterate over neighbors of a node
    pub fn neighbors(&self, node: u32) -> impl Iterator<Item = (u32, f64)> + '_ {
        let start = self.row_ptr[node as usize];
        let end = self.row_ptr[node as usize + 1];
        (start..end).map(move |i| (self.col_idx[i], self.weights[i]))
    }

    /// Get the out-degree of a node
    pub fn degree(&self, node: u32) -> u32 {
        self.out_degree[node as usize]
    }

    /// Get the total outgoing weight of a node
    pub fn node_total_weight(&self, node: u32) -> f64 {
        self.total_weight[node as usize]
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }

    /// Get the total number of edges (counting each undirected edge twice)
    pub fn num_edges(&self) -> usize {
        self.col_idx.len()
    }

    /// Find dangling nodes (nodes with no outgoing edges)
    pub fn dangling_nodes(&self) -> Vec<u32> {
        (0..self.num_nodes as u32)
            .filter(|&n| self.out_degree[n as usize] == 0)
            .collect()
    }
}

impl Default for CsrGraph {
    fn default() -> Self {
        Self {
            num_nodes: 0,
            row_ptr: vec![0],
            col_idx: Vec::new(),
            weights: Vec::new(),
            out_degree: Vec::new(),
            total_weight: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_test_matrix() -> SimilarityMatrix {
        let mut matrix = SimilarityMatrix::zeros(4);
        matrix.set_symmetric(0, 1, 1.0);
        matrix.set_symmetric(1, 2, 2.0);
        matrix.set_symmetric(0, 2, 1.5);
        // node 3 stays isolated
        matrix
    }

    #[test]
    fn test_csr_conversion() {
        let csr = CsrGraph::from_matrix(&build_test_matrix());

        assert_eq!(csr.num_nodes, 4);
        assert_eq!(csr.row_ptr, vec![0, 2, 4, 6, 6]);
        assert_eq!(csr.num_edges(), 6);
    }

    #[test]
    fn test_neighbor_iteration() {
        let csr = CsrGraph::from_matrix(&build_test_matrix());

        let neighbors: Vec<_> = csr.neighbors(0).collect();
        assert_eq!(neighbors, vec![(1, 1.0), (2, 1.5)]);
    }

    #[test]
    fn test_degree_and_weight() {
        let csr = CsrGraph::from_matrix(&build_test_matrix());

        assert_eq!(csr.degree(0), 2);
        assert!((csr.node_total_weight(0) - 2.5).abs() < 1e-10);
        assert!((csr.node_total_weight(2) - 3.5).abs() < 1e-10);
    }

    #[test]
    fn test_dangling_nodes() {
        let csr = CsrGraph::from_matrix(&build_test_matrix());
        assert_eq!(csr.dangling_nodes(), vec![3]);
    }

    #[test]
    fn test_empty_graph() {
        let csr = CsrGraph::from_matrix(&SimilarityMatrix::zeros(0));

        assert!(csr.is_empty());
        assert_eq!(csr.num_edges(), 0);
        assert_eq!(csr.row_ptr, CsrGraph::default().row_ptr);
    }

    #[test]
    fn test_edgeless_graph_is_all_dangling() {
        let csr = CsrGraph::from_matrix(&SimilarityMatrix::zeros(3));

        assert_eq!(csr.num_edges(), 0);
        assert_eq!(csr.dangling_nodes(), vec![0, 1, 2]);
    }
}
