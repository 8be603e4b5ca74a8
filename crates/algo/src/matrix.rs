// Dense integer matrices, bounded at 10x10.
//
// Results are always fresh matrices; operands are never modified.
// Determinant and inverse are closed-form and deliberately stop at 3x3.

use std::fmt;

/// Largest supported dimension on either axis
pub const MAX_DIM: usize = 10;

#[derive(Debug, Clone)]
pub enum MatrixError {
    /// Element-wise op on differently shaped operands
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    /// Product where left.cols != right.rows
    Incompatible {
        left: (usize, usize),
        right: (usize, usize),
    },

    /// Determinant/inverse requested outside square 2x2/3x3
    Unsupported { rows: usize, cols: usize },

    /// Inverse of a matrix whose determinant is zero
    Singular,

    /// Construction beyond MAX_DIM on either axis
    TooLarge { rows: usize, cols: usize },

    /// Construction from rows of unequal length
    Ragged,
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::DimensionMismatch { left, right } => {
                write!(
                    f,
                    "dimension mismatch: {}x{} vs {}x{}",
                    left.0, left.1, right.0, right.1
                )
            }
            MatrixError::Incompatible { left, right } => {
                write!(
                    f,
                    "incompatible product: {}x{} times {}x{}",
                    left.0, left.1, right.0, right.1
                )
            }
            MatrixError::Unsupported { rows, cols } => {
                write!(f, "operation supported only for 2x2 or 3x3, got {}x{}", rows, cols)
            }
            MatrixError::Singular => write!(f, "matrix not invertible (determinant = 0)"),
            MatrixError::TooLarge { rows, cols } => {
                write!(f, "matrix {}x{} exceeds the {}x{} bound", rows, cols, MAX_DIM, MAX_DIM)
            }
            MatrixError::Ragged => write!(f, "rows have unequal lengths"),
        }
    }
}

impl std::error::Error for MatrixError {}

/// Convenient Result type for matrix operations
pub type MatrixResult<T> = Result<T, MatrixError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    cells: Vec<i64>,
}

impl Matrix {
    /// An all-zero matrix. Callers must have checked the MAX_DIM bound;
    /// the REPL does so before any elements are read.
    pub fn zeroed(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            cells: vec![0; rows * cols],
        }
    }

    /// Build from row vectors, enforcing the size bound and rectangularity.
    pub fn from_rows(rows: Vec<Vec<i64>>) -> MatrixResult<Matrix> {
        let r = rows.len();
        let c = rows.first().map_or(0, |row| row.len());
        if r > MAX_DIM || c > MAX_DIM {
            return Err(MatrixError::TooLarge { rows: r, cols: c });
        }
        if rows.iter().any(|row| row.len() != c) {
            return Err(MatrixError::Ragged);
        }
        Ok(Matrix {
            rows: r,
            cols: c,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, i: usize, j: usize) -> i64 {
        self.cells[i * self.cols + j]
    }

    pub fn set(&mut self, i: usize, j: usize, value: i64) {
        self.cells[i * self.cols + j] = value;
    }

    fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn same_shape_op(&self, other: &Matrix, op: impl Fn(i64, i64) -> i64) -> Matrix {
        let mut out = Matrix::zeroed(self.rows, self.cols);
        for (k, cell) in out.cells.iter_mut().enumerate() {
            *cell = op(self.cells[k], other.cells[k]);
        }
        out
    }

    /// Element-wise sum; operands must share a shape.
    pub fn add(&self, other: &Matrix) -> MatrixResult<Matrix> {
        if self.shape() != other.shape() {
            return Err(MatrixError::DimensionMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }
        Ok(self.same_shape_op(other, |a, b| a + b))
    }

    /// Element-wise difference; operands must share a shape.
    pub fn sub(&self, other: &Matrix) -> MatrixResult<Matrix> {
        if self.shape() != other.shape() {
            return Err(MatrixError::DimensionMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }
        Ok(self.same_shape_op(other, |a, b| a - b))
    }

    /// Matrix product; requires self.cols == other.rows.
    pub fn mul(&self, other: &Matrix) -> MatrixResult<Matrix> {
        if self.cols != other.rows {
            return Err(MatrixError::Incompatible {
                left: self.shape(),
                right: other.shape(),
            });
        }
        let mut out = Matrix::zeroed(self.rows, other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut acc = 0;
                for k in 0..self.cols {
                    acc += self.get(i, k) * other.get(k, j);
                }
                out.set(i, j, acc);
            }
        }
        Ok(out)
    }

    pub fn transpose(&self) -> Matrix {
        let mut out = Matrix::zeroed(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                out.set(j, i, self.get(i, j));
            }
        }
        out
    }

    /// Non-square matrices are never symmetric.
    pub fn is_symmetric(&self) -> bool {
        if self.rows != self.cols {
            return false;
        }
        for i in 0..self.rows {
            for j in 0..self.cols {
                if self.get(i, j) != self.get(j, i) {
                    return false;
                }
            }
        }
        true
    }

    /// Closed-form determinant, square 2x2 and 3x3 only.
    pub fn determinant(&self) -> MatrixResult<f64> {
        match self.shape() {
            (2, 2) => Ok((self.get(0, 0) * self.get(1, 1) - self.get(0, 1) * self.get(1, 0)) as f64),
            (3, 3) => {
                // Cofactor expansion along the first row
                let det = self.get(0, 0)
                    * (self.get(1, 1) * self.get(2, 2) - self.get(1, 2) * self.get(2, 1))
                    - self.get(0, 1)
                        * (self.get(1, 0) * self.get(2, 2) - self.get(1, 2) * self.get(2, 0))
                    + self.get(0, 2)
                        * (self.get(1, 0) * self.get(2, 1) - self.get(1, 1) * self.get(2, 0));
                Ok(det as f64)
            }
            (rows, cols) => Err(MatrixError::Unsupported { rows, cols }),
        }
    }

    /// Inverse via adjugate over determinant, square 2x2 and 3x3 only.
    ///
    /// The singularity check is an exact comparison against zero; cells are
    /// integers, so the determinant is exact too.
    pub fn inverse(&self) -> MatrixResult<Vec<Vec<f64>>> {
        let det = self.determinant()?;
        if det == 0.0 {
            return Err(MatrixError::Singular);
        }
        let inv = match self.rows {
            2 => vec![
                vec![self.get(1, 1) as f64 / det, -self.get(0, 1) as f64 / det],
                vec![-self.get(1, 0) as f64 / det, self.get(0, 0) as f64 / det],
            ],
            _ => {
                let a = |i: usize, j: usize| self.get(i, j) as f64;
                vec![
                    vec![
                        (a(1, 1) * a(2, 2) - a(1, 2) * a(2, 1)) / det,
                        (a(0, 2) * a(2, 1) - a(0, 1) * a(2, 2)) / det,
                        (a(0, 1) * a(1, 2) - a(0, 2) * a(1, 1)) / det,
                    ],
                    vec![
                        (a(1, 2) * a(2, 0) - a(1, 0) * a(2, 2)) / det,
                        (a(0, 0) * a(2, 2) - a(0, 2) * a(2, 0)) / det,
                        (a(0, 2) * a(1, 0) - a(0, 0) * a(1, 2)) / det,
                    ],
                    vec![
                        (a(1, 0) * a(2, 1) - a(1, 1) * a(2, 0)) / det,
                        (a(0, 1) * a(2, 0) - a(0, 0) * a(2, 1)) / det,
                        (a(0, 0) * a(1, 1) - a(0, 1) * a(1, 0)) / det,
                    ],
                ]
            }
        };
        Ok(inv)
    }
}

impl fmt::Display for Matrix {
    /// Grid of width-6 cells, framed by blank lines like the menu output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for i in 0..self.rows {
            for j in 0..self.cols {
                write!(f, "{:6}", self.get(i, j))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
