use thiserror::Error;

use crate::linear_algebra::matrix::MatrixError;

#[derive(Error,Debug,Clone,PartialEq)]
pub enum FlowError {
    #[error("capacity matrix is {row}*{col}, a flow network needs a square matrix")]
    NonSquare{row:usize,col:usize},
    #[error("node {node} is out of range for a network with {node_count} nodes")]
    NodeOutOfRange{node:usize,node_count:usize},
    #[error("capacity at ({row},{col}) is {value}, capacities must be finite and non-negative")]
    InvalidCapacity{row:usize,col:usize,value:String},
    #[error("source and sink are both node {0}")]
    SourceIsSink(usize),
    #[error("capacities around ({row},{col}) overflow the capacity type")]
    CapacityOverflow{row:usize,col:usize},
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

/// Coarse classification of a [`FlowError`].
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum FlowErrorKind {
    InvalidDimension,
    InvalidCapacity,
    DegenerateInput,
    Overflow,
}

impl FlowError {
    pub fn kind(&self) -> FlowErrorKind {
        match self {
            FlowError::NonSquare { .. }
            | FlowError::NodeOutOfRange { .. }
            | FlowError::Matrix(_) => FlowErrorKind::InvalidDimension,
            FlowError::InvalidCapacity { .. } => FlowErrorKind::InvalidCapacity,
            FlowError::SourceIsSink(_) => FlowErrorKind::DegenerateInput,
            FlowError::CapacityOverflow { .. } => FlowErrorKind::Overflow,
        }
    }
}

pub type Result<T> = std::result::Result<T,FlowError>;
