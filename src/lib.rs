//! Edmonds–Karp maximum flow over dense adjacency matrices.
//!
//! ```
//! use netflow::linear_algebra::matrix::Matrix;
//! use netflow::network_flow::{compute_max_flow, MinCut};
//!
//! // o -> a -> d and o -> b -> d, every edge with capacity 1
//! let capacity = Matrix::from_edges(4, [(0,1,1i64),(0,2,1),(1,3,1),(2,3,1)]).unwrap();
//! let mut residual = capacity.clone();
//! let result = compute_max_flow(&mut residual, 0, 3).unwrap();
//! assert_eq!(result.value, 2);
//! assert_eq!(result.flow[(0,1)], 1);
//! assert_eq!(result.flow[(1,0)], -1);
//!
//! let cut = MinCut::from_residual(&capacity, &residual, 0).unwrap();
//! assert_eq!(cut.capacity(), result.value);
//! ```

pub mod dsa;
pub mod linear_algebra;
pub mod network_flow;

pub use linear_algebra::matrix::{Matrix, MatrixError};
pub use network_flow::{compute_max_flow, max_flow, FlowError, MaxFlow, MinCut};
