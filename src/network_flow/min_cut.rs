use crate::dsa::graph::DirectedGraph;
use crate::linear_algebra::matrix::{Matrix, MatrixError};
use crate::network_flow::capacity::Capacity;
use crate::network_flow::error::{FlowError, Result};

/// A source/sink partition of the nodes and the edges crossing it.
#[derive(Clone,Debug,PartialEq)]
pub struct MinCut<T> {
    source_side:Vec<usize>,
    sink_side:Vec<usize>,
    edges:Vec<(usize,usize)>,
    capacity:T,
}

impl<T:Capacity> MinCut<T> {
    /// Reads the cut off a final residual network: the source side is every
    /// node still reachable from `source` through positive residual capacity.
    ///
    /// When `residual` comes from a finished max-flow run the result is a
    /// minimum cut and its capacity equals the flow value, up to
    /// [`Capacity::approx_eq`] for float capacities.
    pub fn from_residual(original:&Matrix<T>,residual:&Matrix<T>,source:usize) -> Result<Self> {
        if !original.is_square() {
            let (row,col) = original.dimension();
            return Err(FlowError::NonSquare { row, col })
        }
        if original.dimension() != residual.dimension() {
            return Err(MatrixError::DimensionMismatch {
                matrix_size1: original.dimension(),
                matrix_size2: residual.dimension()
            }.into())
        }
        let (node_count,_) = original.dimension();
        let reachable = DirectedGraph::from(residual)
            .reachable_from(source)
            .ok_or(FlowError::NodeOutOfRange { node: source, node_count })?;

        let (source_side,sink_side):(Vec<usize>,Vec<usize>) = (0..node_count).partition(|n| reachable.contains(n));

        let mut edges = Vec::new();
        let mut capacity = T::ZERO;
        for from in source_side.iter().copied() {
            for to in sink_side.iter().copied() {
                let crossing = original[(from,to)];
                if crossing > T::ZERO {
                    capacity = capacity.checked_sum(crossing)
                        .ok_or(FlowError::CapacityOverflow { row: from, col: to })?;
                    edges.push((from,to));
                }
            }
        }
        Ok(Self { source_side, sink_side, edges, capacity })
    }

    pub fn capacity(&self) -> T {
        self.capacity
    }
}

impl<T> MinCut<T> {
    /// Nodes on the source side, ascending.
    pub fn source_side(&self) -> &[usize] {
        &self.source_side
    }
    pub fn sink_side(&self) -> &[usize] {
        &self.sink_side
    }
    /// Crossing edges `(from,to)` with `from` on the source side, row major order.
    pub fn edges(&self) -> &[(usize,usize)] {
        &self.edges
    }
    pub fn separates(&self,source:usize,sink:usize) -> bool {
        self.source_side.binary_search(&source).is_ok() && self.sink_side.binary_search(&sink).is_ok()
    }
}
