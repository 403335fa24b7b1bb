//! Independent checks of a flow matrix against the network it was computed on.
//!
//! Sums are compared with [`Capacity::approx_eq`]: exact for integer
//! capacities, tolerant of accumulated rounding for floats. Antisymmetry is
//! always exact since the engine writes both entries from the same amount.

use thiserror::Error;

use crate::linear_algebra::matrix::Matrix;
use crate::network_flow::capacity::Capacity;

#[derive(Error,Debug,Clone,PartialEq)]
pub enum FlowViolation {
    #[error("capacity matrix is {capacity:?} but flow matrix is {flow:?}, both must be the same square size")]
    DimensionMismatch{capacity:(usize,usize),flow:(usize,usize)},
    #[error("node {node} is out of range for a network with {node_count} nodes")]
    NodeOutOfRange{node:usize,node_count:usize},
    #[error("flow({from},{to}) is not the negation of flow({to},{from})")]
    NotAntisymmetric{from:usize,to:usize},
    #[error("flow({from},{to}) is {flow}, above the edge capacity {capacity}")]
    OverCapacity{from:usize,to:usize,flow:String,capacity:String},
    #[error("node {node} receives {inflow} but sends {outflow}")]
    NotConserved{node:usize,inflow:String,outflow:String},
    #[error("net flow through node {node} is {actual}, expected {expected}")]
    ValueMismatch{node:usize,expected:String,actual:String},
}

type Result<T> = std::result::Result<T,FlowViolation>;

fn positive_part<T:Capacity>(value:T) -> T {
    if value > T::ZERO { value } else { T::ZERO }
}

/// Checks that `flow` is a feasible flow of `value` units from `source` to `sink`
/// on the network described by `capacity`.
///
/// The checks run in a fixed order and the first violation found is reported:
/// dimensions, antisymmetry, capacity respect, conservation at inner nodes,
/// then the net outflow of `source` and the net inflow of `sink`.
pub fn verify_flow<T:Capacity>(capacity:&Matrix<T>,flow:&Matrix<T>,source:usize,sink:usize,value:T) -> Result<()> {
    if !capacity.is_square() || capacity.dimension() != flow.dimension() {
        return Err(FlowViolation::DimensionMismatch { capacity: capacity.dimension(), flow: flow.dimension() })
    }
    let (node_count,_) = capacity.dimension();
    for node in [source,sink] {
        if node >= node_count {
            return Err(FlowViolation::NodeOutOfRange { node, node_count })
        }
    }

    for from in 0..node_count {
        for to in from..node_count {
            if flow[(from,to)] != -flow[(to,from)] {
                return Err(FlowViolation::NotAntisymmetric { from, to })
            }
        }
    }

    for ((from,to),sent) in flow.iter_indexed() {
        if *sent > capacity[(from,to)] && !sent.approx_eq(capacity[(from,to)]) {
            return Err(FlowViolation::OverCapacity {
                from, to,
                flow: sent.to_string(),
                capacity: capacity[(from,to)].to_string()
            })
        }
    }

    for node in (0..node_count).filter(|n| *n != source && *n != sink) {
        let mut inflow = T::ZERO;
        let mut outflow = T::ZERO;
        for other in 0..node_count {
            inflow += positive_part(flow[(other,node)]);
            outflow += positive_part(flow[(node,other)]);
        }
        if !inflow.approx_eq(outflow) {
            return Err(FlowViolation::NotConserved { node, inflow: inflow.to_string(), outflow: outflow.to_string() })
        }
    }

    let mut net_out = T::ZERO;
    let mut net_in = T::ZERO;
    for other in 0..node_count {
        net_out += flow[(source,other)];
        net_in += flow[(other,sink)];
    }
    for (node,actual) in [(source,net_out),(sink,net_in)] {
        if !actual.approx_eq(value) {
            return Err(FlowViolation::ValueMismatch { node, expected: value.to_string(), actual: actual.to_string() })
        }
    }
    Ok(())
}
