//! Dense linear algebra over GF(2^m)
//!
//! A small row-major matrix plus Gauss-Jordan elimination on an augmented
//! system. The decoder uses this to solve for error magnitudes; dimensions
//! are tiny (at most t rows), so the O(rows³) elimination is fine.

use crate::error::{FieldError, FieldResult};
use crate::galois::GaloisField;

/// Row-major matrix of field elements.
#[derive(Clone, Debug)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<u32>,
}

impl Matrix {
    /// Create a zero matrix.
    pub fn zero(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.data[row * self.cols + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: u32) {
        self.data[row * self.cols + col] = value;
    }

    /// Solve the augmented system held in this matrix: `rows` equations
    /// over `cols - 1` unknowns, last column the constants. Gauss-Jordan
    /// elimination in place; the characteristic-2 field makes "subtract a
    /// multiple" the same as "add a multiple".
    ///
    /// Fails with `NonSolvableSystem` when a pivot column has no nonzero
    /// entry or the eliminated left block is not the identity.
    pub fn solve(mut self, gf: &GaloisField) -> FieldResult<Vec<u32>> {
        let unknowns = self.cols.saturating_sub(1);
        if self.rows < unknowns {
            return Err(FieldError::NonSolvableSystem);
        }

        for pivot in 0..unknowns {
            if self.get(pivot, pivot) == 0 {
                // Pull a lower row with a nonzero entry into the pivot row
                let found = (pivot + 1..self.rows).find(|&r| self.get(r, pivot) != 0);
                match found {
                    Some(r) => self.xor_row(r, pivot),
                    None => return Err(FieldError::NonSolvableSystem),
                }
            }

            // Normalize the pivot row
            let inv = gf.inv(self.get(pivot, pivot))?;
            for c in 0..self.cols {
                self.set(pivot, c, gf.mul(self.get(pivot, c), inv));
            }

            // Clear the pivot column from every other row
            for r in 0..self.rows {
                if r == pivot {
                    continue;
                }
                let factor = self.get(r, pivot);
                if factor == 0 {
                    continue;
                }
                for c in 0..self.cols {
                    let v = gf.add(self.get(r, c), gf.mul(factor, self.get(pivot, c)));
                    self.set(r, c, v);
                }
            }
        }

        // The left block must have come out as the identity
        for r in 0..self.rows {
            for c in 0..unknowns {
                let expect = if r == c { 1 } else { 0 };
                if self.get(r, c) != expect {
                    return Err(FieldError::NonSolvableSystem);
                }
            }
        }

        Ok((0..unknowns).map(|r| self.get(r, self.cols - 1)).collect())
    }

    /// XOR row `src` into row `dst`.
    fn xor_row(&mut self, src: usize, dst: usize) {
        for c in 0..self.cols {
            let v = self.get(src, c) ^ self.get(dst, c);
            self.set(dst, c, v);
        }
    }
}
