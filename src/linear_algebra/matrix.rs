use std::fmt::Display;
use std::ops::{Index, IndexMut, Range};
use rand::Rng;
use rand::distr::uniform::SampleUniform;
use thiserror::Error;

#[derive(Error,Debug,Clone,PartialEq)]
pub enum MatrixError {
    #[error("Matrix size is:{matrix_size:?},but index at {accessed_index:?} was accessed")]
    IndexOutOfBounds{matrix_size:(usize,usize),accessed_index:(usize,usize)},
    #[error("Matrix have {row_count} rows ,but row at {accessed_row} was accessed")]
    RowOutOfBounds{row_count:usize,accessed_row:usize},
    #[error("Matrix1 size is:{matrix_size1:?},matrix2 size is {matrix_size2:?}, there's mismatch")]
    DimensionMismatch{matrix_size1:(usize,usize),matrix_size2:(usize,usize)},
    #[error("attempted to create {row}*{col} matrix from vector/iterator with length {len}")]
    SizeMisMatch{row:usize,col:usize,len:usize},
    #[error("row {row} has {len} elements, but row 0 has {expected}")]
    RaggedRows{row:usize,len:usize,expected:usize},
    #[error("edge {from} -> {to} refers to a node outside a {size}*{size} matrix")]
    NodeOutOfRange{from:usize,to:usize,size:usize},
    #[error("edge density must lie in [0,1], got {0}")]
    InvalidDensity(f64),
}

type Result<T> = std::result::Result<T,MatrixError>;

// A dense matrix in row major order, rows are stored continuously
// in a single buffer so no two rows can ever share storage
#[derive(Clone,Debug,PartialEq)]
pub struct Matrix<T> {
    row_count:usize,
    col_count:usize,
    //row*col must equal elements.len()
    // otherwise invariants are broken, panics allowed
    elements:Vec<T>
}

impl<T:Display> Display for Matrix<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,"[")?;
        for (i,elem) in self.elements.iter().enumerate() {
            write!(f,"{elem}")?;
            if i+1 == self.elements.len() {
                continue;
            }else if (i+1)%self.col_count == 0 {
                write!(f,",\n")?;
            }else{
                write!(f,", ")?;
            }
        }
        write!(f,"]")
    }
}

impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Self {
            row_count:0,
            col_count:0,
            elements:vec![]
        }
    }
}

impl<T> Index<(usize,usize)> for Matrix<T> {
    type Output = T;
    fn index(&self, (row,col): (usize,usize)) -> &T {
        assert!(col < self.col_count,"column {col} out of bounds for {} columns",self.col_count);
        &self.elements[row*self.col_count + col]
    }
}

impl<T> IndexMut<(usize,usize)> for Matrix<T> {
    fn index_mut(&mut self, (row,col): (usize,usize)) -> &mut T {
        assert!(col < self.col_count,"column {col} out of bounds for {} columns",self.col_count);
        &mut self.elements[row*self.col_count + col]
    }
}

impl<T> TryFrom<Vec<Vec<T>>> for Matrix<T> {
    type Error = MatrixError;
    fn try_from(rows: Vec<Vec<T>>) -> Result<Self> {
        let row_count = rows.len();
        let col_count = rows.first().map(|r| r.len()).unwrap_or(0);
        let mut elements = Vec::with_capacity(row_count*col_count);
        for (row,values) in rows.into_iter().enumerate() {
            if values.len() != col_count {
                return Err(MatrixError::RaggedRows { row, len: values.len(), expected: col_count })
            }
            elements.extend(values);
        }
        if elements.is_empty() {
            return Ok(Self::default())
        }
        Ok(Self { row_count, col_count, elements })
    }
}

impl<T:Copy> Matrix<T> {
    pub fn get(&self,row:usize,col:usize) -> Result<T> {
        debug_assert_eq!(self.row_count*self.col_count,self.elements.len());
        let out_of_bounds = MatrixError::IndexOutOfBounds { matrix_size:
            (self.row_count,self.col_count),
            accessed_index: (row,col)
        };
        if row >= self.row_count || col >= self.col_count {
            return Err(out_of_bounds)
        }
        self.elements.get(row*self.col_count + col).copied().ok_or(out_of_bounds)
    }
}

impl<T:Copy + Default> Matrix<T> {
    pub fn zeros(row:usize,col:usize) -> Self {
        if row*col == 0 {
            return Self::default()
        }
        Self {
            row_count:row,
            col_count:col,
            elements:vec![T::default();row*col]
        }
    }

    // square matrix with (from,to) set to capacity for every edge, zero elsewhere
    // repeated edges overwrite each other
    pub fn from_edges(size:usize,edges:impl IntoIterator<Item = (usize,usize,T)>) -> Result<Self> {
        let mut matrix = Self::zeros(size, size);
        for (from,to,capacity) in edges {
            if from >= size || to >= size {
                return Err(MatrixError::NodeOutOfRange { from, to, size })
            }
            matrix[(from,to)] = capacity;
        }
        Ok(matrix)
    }

    // every off-diagonal entry is an edge with probability `density`,
    // its capacity drawn uniformly from `range`
    pub fn random_network<R:Rng>(size:usize,density:f64,range:Range<T>,rng:&mut R) -> Result<Self>
        where T:SampleUniform + PartialOrd
    {
        if !(0.0..=1.0).contains(&density) {
            return Err(MatrixError::InvalidDensity(density))
        }
        let mut matrix = Self::zeros(size, size);
        for row in 0..size {
            for col in 0..size {
                if row != col && rng.random_bool(density) {
                    matrix[(row,col)] = rng.random_range(range.clone());
                }
            }
        }
        Ok(matrix)
    }
}

//public implementations
impl<T> Matrix<T> {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn new_with_vec(v:Vec<T>,row:usize,col:usize) -> Result<Self> {
        if row*col > v.len() {
            return Err(MatrixError::SizeMisMatch { row, col,len: v.len() })
        }
        if row*col == 0 {
            return Ok(Self::default())
        }
        let mut v = v;
        v.truncate(row*col);
        debug_assert_eq!(row*col,v.len());
        Ok(Self { row_count: row, col_count: col, elements: v })
    }
    pub fn get_mut(&mut self,row:usize,col:usize) -> Result<&mut T> {
        debug_assert_eq!(self.row_count*self.col_count,self.elements.len());
        let out_of_bounds = MatrixError::IndexOutOfBounds { matrix_size:
            (self.row_count,self.col_count),
            accessed_index: (row,col)
        };
        if row >= self.row_count || col >= self.col_count {
            return Err(out_of_bounds)
        }
        self.elements.get_mut(row*self.col_count + col).ok_or(out_of_bounds)
    }
    pub fn row(&self,row:usize) -> Result<&[T]> {
        if row >= self.row_count {
            return Err(MatrixError::RowOutOfBounds { row_count: self.row_count, accessed_row: row })
        }
        let start = row*self.col_count;
        Ok(&self.elements[start..start + self.col_count])
    }
    pub fn is_empty(&self) -> bool {
        self.col_count == 0 || self.row_count == 0 || self.elements.is_empty()
    }
    pub fn is_square(&self) -> bool {
        self.row_count == self.col_count
    }
    pub fn dimension(&self) -> (usize,usize) {
        if self.is_empty() {return (0,0)}
        (self.row_count,self.col_count)
    }
    // yields ((row,col),&value) in row major order
    pub fn iter_indexed(&self) -> impl Iterator<Item = ((usize,usize),&T)> {
        let col_count = self.col_count;
        self.elements.iter().enumerate().map(move |(i,v)| ((i/col_count,i%col_count),v))
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::{Matrix, MatrixError};

    #[test]
    fn test_zeros() {
        let zeros:Matrix<i64> = Matrix::zeros(7, 7);
        assert_eq!(zeros.dimension(),(7,7));
        assert!(zeros.iter_indexed().all(|(_,v)| *v == 0));
        let empty:Matrix<i64> = Matrix::zeros(0, 5);
        assert!(empty.is_empty());
        assert_eq!(empty.dimension(),(0,0));
    }

    #[test]
    fn test_rows_are_independent() {
        let mut m:Matrix<i32> = Matrix::zeros(4, 4);
        m[(1,2)] = 5;
        for row in 0..4 {
            let expected = if row == 1 {vec![0,0,5,0]} else {vec![0;4]};
            assert_eq!(m.row(row).unwrap(),expected.as_slice(),"row {row}");
        }
    }

    #[test]
    fn test_try_from_rows() {
        let m = Matrix::try_from(vec![vec![1,2,3],vec![4,5,6]]).unwrap();
        assert_eq!(m.dimension(),(2,3));
        assert_eq!(m.get(1,0).unwrap(),4);
        assert_eq!(m.get(2,0),Err(MatrixError::IndexOutOfBounds { matrix_size: (2,3), accessed_index: (2,0) }));

        let ragged = Matrix::try_from(vec![vec![1,2],vec![3]]);
        assert_eq!(ragged,Err(MatrixError::RaggedRows { row: 1, len: 1, expected: 2 }));
    }

    #[test]
    fn test_from_edges() {
        let m = Matrix::from_edges(3, [(0,1,4),(1,2,7)]).unwrap();
        assert_eq!(m[(0,1)],4);
        assert_eq!(m[(1,2)],7);
        assert_eq!(m[(1,0)],0);
        let err = Matrix::from_edges(3, [(0,3,1)]).unwrap_err();
        assert_eq!(err,MatrixError::NodeOutOfRange { from: 0, to: 3, size: 3 });
    }

    #[test]
    fn test_new_with_vec() {
        let m = Matrix::new_with_vec(vec![1,2,3,4,5], 2, 2).unwrap();
        assert_eq!(m.row(1).unwrap(),&[3,4]);
        assert!(Matrix::new_with_vec(vec![1,2,3], 2, 2).is_err());
    }

    #[test]
    fn test_random_network() {
        let mut rng = rand::rng();
        let size:usize = rng.random_range(5..40);
        let m:Matrix<i64> = Matrix::random_network(size, 0.3, 1..100, &mut rng).unwrap();
        for ((row,col),v) in m.iter_indexed() {
            if row == col {assert_eq!(*v,0)}
            assert!((0..100).contains(v),"index:({row},{col})");
        }
        assert!(Matrix::<i64>::random_network(3, 1.5, 1..2, &mut rng).is_err());
    }

    #[test]
    fn test_get_mut() {
        let mut rng = rand::rng();
        let rows:usize = rng.random_range(2..30);
        let cols:usize = rng.random_range(2..30);
        let mut m:Matrix<i32> = Matrix::zeros(rows, cols);
        assert_eq!(m.is_square(),rows == cols);
        let (row,col) = (rng.random_range(0..rows),rng.random_range(0..cols));
        *m.get_mut(row, col).unwrap() = 9;
        assert_eq!(m[(row,col)],9);
        assert_eq!(m.iter_indexed().filter(|(_,v)| **v != 0).count(),1);
        assert_eq!(m.get_mut(rows, 0),Err(MatrixError::IndexOutOfBounds { matrix_size: (rows,cols), accessed_index: (rows,0) }));
        assert!(Matrix::<i32>::zeros(3, 3).is_square());
        assert!(!Matrix::<i32>::zeros(2, 3).is_square());
    }

    #[test]
    fn test_display() {
        let m = Matrix::try_from(vec![vec![1,2],vec![3,4]]).unwrap();
        assert_eq!(m.to_string(),"[1, 2,\n3, 4]");
    }
}
