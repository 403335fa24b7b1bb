//! Edmonds–Karp maximum flow over a dense capacity matrix.
//!
//! The capacity matrix is the live residual network: every augmentation moves
//! residual capacity from the forward entry `(u,v)` to the reverse entry
//! `(v,u)`, so later searches can cancel flow pushed earlier. Searches are
//! breadth first with neighbours scanned in increasing index order, which makes
//! every augmenting path a shortest one and the whole run deterministic.

use std::collections::VecDeque;

use log::{debug, info, trace};

use crate::dsa::bitset::BitSet;
use crate::linear_algebra::matrix::Matrix;
use crate::network_flow::capacity::Capacity;
use crate::network_flow::error::{FlowError, Result};

/// One augmentation: the node sequence from source to sink and the amount pushed along it.
#[derive(Clone,Debug,PartialEq)]
pub struct AugmentingPath<T> {
    pub nodes:Vec<usize>,
    pub bottleneck:T,
}

impl<T> AugmentingPath<T> {
    pub fn edges_len(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

#[derive(Clone,Debug,PartialEq)]
pub struct MaxFlow<T> {
    pub value:T,
    /// Net flow, `flow[(u,v)] == -flow[(v,u)]`.
    pub flow:Matrix<T>,
    /// Augmentations in the order they were applied.
    pub paths:Vec<AugmentingPath<T>>,
}

impl<T> MaxFlow<T> {
    pub fn rounds(&self) -> usize {
        self.paths.len()
    }
}

// queue + visited + parent map, reused across rounds
struct ResidualSearch {
    visited:BitSet,
    parents:Vec<Option<usize>>,
    queue:VecDeque<usize>,
}

impl ResidualSearch {
    fn new(node_count:usize) -> Self {
        Self {
            visited:BitSet::with_len(node_count),
            parents:vec![None;node_count],
            queue:VecDeque::with_capacity(node_count),
        }
    }

    // fewest-edges path from source to sink over strictly positive residual entries
    fn shortest_path<T:Capacity>(&mut self,residual:&Matrix<T>,source:usize,sink:usize) -> Option<Vec<usize>> {
        let node_count = self.parents.len();
        debug_assert_eq!(self.visited.len(),node_count);
        self.visited.clear();
        self.parents.fill(None);
        self.queue.clear();

        self.visited.insert(source);
        self.queue.push_back(source);
        'search: while let Some(current) = self.queue.pop_front() {
            for next in 0..node_count {
                if residual[(current,next)] > T::ZERO && self.visited.insert(next) {
                    self.parents[next] = Some(current);
                    if next == sink {
                        break 'search;
                    }
                    self.queue.push_back(next);
                }
            }
        }

        if self.visited.get_at(sink) != Some(true) {
            trace!("sink {sink} unreachable, {} nodes on the source side",self.visited.iter_ones().count());
            return None;
        }

        let mut path = vec![sink];
        let mut current = sink;
        while let Some(parent) = self.parents[current] {
            path.push(parent);
            current = parent;
        }
        debug_assert_eq!(current,source);
        path.reverse();
        Some(path)
    }
}

/// Rejects malformed networks without touching the matrix.
///
/// Returns the node count on success. Whether the flow value itself fits the
/// capacity type is only known during the run, see [`compute_max_flow`].
pub fn validate<T:Capacity>(capacity:&Matrix<T>,source:usize,sink:usize) -> Result<usize> {
    if !capacity.is_square() {
        let (row,col) = capacity.dimension();
        return Err(FlowError::NonSquare { row, col })
    }
    let (node_count,_) = capacity.dimension();
    for node in [source,sink] {
        if node >= node_count {
            return Err(FlowError::NodeOutOfRange { node, node_count })
        }
    }
    if source == sink {
        return Err(FlowError::SourceIsSink(source))
    }
    if let Some(((row,col),value)) = capacity.iter_indexed().find(|(_,v)| !v.is_valid_capacity()) {
        return Err(FlowError::InvalidCapacity { row, col, value: value.to_string() })
    }

    // residual(u,v) + residual(v,u) never changes
    for row in 0..node_count {
        for col in row+1..node_count {
            if capacity[(row,col)].checked_sum(capacity[(col,row)]).is_none() {
                return Err(FlowError::CapacityOverflow { row, col })
            }
        }
    }
    Ok(node_count)
}

// true when the flow value is bounded by a representable sum: the capacity
// leaving the source or the capacity entering the sink, self loops excluded
fn value_bounded<T:Capacity>(capacity:&Matrix<T>,source:usize,sink:usize) -> bool {
    let (node_count,_) = capacity.dimension();
    let leaving = (0..node_count).filter(|n| *n != source)
        .try_fold(T::ZERO, |total,n| total.checked_sum(capacity[(source,n)]));
    let entering = (0..node_count).filter(|n| *n != sink)
        .try_fold(T::ZERO, |total,n| total.checked_sum(capacity[(n,sink)]));
    leaving.is_some() || entering.is_some()
}

/// Computes a maximum flow from `source` to `sink`.
///
/// `residual` starts as the capacity matrix and is left holding the final
/// residual network, from which a minimum cut can be read off
/// (see [`MinCut::from_residual`](crate::network_flow::min_cut::MinCut::from_residual)).
/// On error it is left untouched.
pub fn compute_max_flow<T:Capacity>(residual:&mut Matrix<T>,source:usize,sink:usize) -> Result<MaxFlow<T>> {
    let node_count = validate(residual, source, sink)?;
    // only needed when the value itself might not fit the capacity type
    let original = (!value_bounded(residual, source, sink)).then(|| residual.clone());

    let mut flow = Matrix::zeros(node_count, node_count);
    let mut value = T::ZERO;
    let mut paths = Vec::new();
    let mut search = ResidualSearch::new(node_count);

    trace!("searching for augmenting paths from {source} to {sink} over {node_count} nodes");
    while let Some(nodes) = search.shortest_path(residual, source, sink) {
        let bottleneck = nodes.windows(2)
            .fold(T::UNBOUNDED, |bottleneck,edge| bottleneck.min_of(residual[(edge[0],edge[1])]));
        debug_assert!(bottleneck > T::ZERO);
        let Some(next_value) = value.checked_sum(bottleneck) else {
            if let Some(original) = original {
                *residual = original;
            }
            return Err(FlowError::CapacityOverflow { row: source, col: sink })
        };

        trace!("augmenting along {nodes:?}");
        for edge in nodes.windows(2) {
            let (from,to) = (edge[0],edge[1]);
            flow[(from,to)] += bottleneck;
            flow[(to,from)] -= bottleneck;
            residual[(from,to)] -= bottleneck;
            residual[(to,from)] += bottleneck;
        }
        value = next_value;

        debug!("round {}: pushed {bottleneck} along a {}-edge path, flow is now {value}",paths.len() + 1,nodes.len() - 1);
        paths.push(AugmentingPath { nodes, bottleneck });
    }

    info!("max flow from {source} to {sink} is {value} after {} augmentations",paths.len());
    Ok(MaxFlow { value, flow, paths })
}

/// Same as [`compute_max_flow`] but leaves `capacity` alone and returns the
/// final residual network next to the result.
pub fn max_flow<T:Capacity>(capacity:&Matrix<T>,source:usize,sink:usize) -> Result<(MaxFlow<T>,Matrix<T>)> {
    let mut residual = capacity.clone();
    let result = compute_max_flow(&mut residual, source, sink)?;
    Ok((result,residual))
}
