//! Sparse matrix arithmetic
//!
//! All operations read their operands and allocate a fresh result; inputs
//! are never mutated. Zero results are never stored.

use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::error::{Result, SpmxError};
use crate::matrix::SparseMatrix;

/// Binary matrix operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl Operation {
    /// All operations in menu order
    pub const ALL: [Operation; 3] = [Operation::Add, Operation::Subtract, Operation::Multiply];

    /// Map an interactive menu choice (`1`, `2` or `3`) to an operation
    ///
    /// The answer must match exactly; `" 2"` is not a valid choice.
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice {
            "1" => Some(Operation::Add),
            "2" => Some(Operation::Subtract),
            "3" => Some(Operation::Multiply),
            _ => None,
        }
    }

    /// Menu number for this operation
    pub const fn choice(&self) -> u8 {
        match self {
            Operation::Add => 1,
            Operation::Subtract => 2,
            Operation::Multiply => 3,
        }
    }

    /// Apply the operation to `lhs` and `rhs`
    pub fn apply(&self, lhs: &SparseMatrix, rhs: &SparseMatrix) -> Result<SparseMatrix> {
        match self {
            Operation::Add => lhs.add(rhs),
            Operation::Subtract => lhs.subtract(rhs),
            Operation::Multiply => lhs.multiply(rhs),
        }
    }
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Operation::Add => write!(f, "addition"),
            Operation::Subtract => write!(f, "subtraction"),
            Operation::Multiply => write!(f, "multiplication"),
        }
    }
}

/// Error returned when an operation name is not recognised
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownOperation;

impl core::fmt::Display for UnknownOperation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "expected one of: add, subtract, multiply")
    }
}

impl core::error::Error for UnknownOperation {}

impl core::str::FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        let name = s.trim();
        if let Some(op) = Operation::from_choice(name) {
            return Ok(op);
        }
        let matches = |aliases: &[&str]| aliases.iter().any(|a| a.eq_ignore_ascii_case(name));
        if matches(&["add", "addition"]) {
            Ok(Operation::Add)
        } else if matches(&["sub", "subtract", "subtraction"]) {
            Ok(Operation::Subtract)
        } else if matches(&["mul", "multiply", "multiplication"]) {
            Ok(Operation::Multiply)
        } else {
            Err(UnknownOperation)
        }
    }
}

impl SparseMatrix {
    /// Element-wise sum
    ///
    /// Fails with a dimension mismatch unless both operands have the same
    /// shape.
    pub fn add(&self, other: &SparseMatrix) -> Result<SparseMatrix> {
        self.combine(other, Operation::Add, i64::checked_add)
    }

    /// Element-wise difference `self - other`
    pub fn subtract(&self, other: &SparseMatrix) -> Result<SparseMatrix> {
        self.combine(other, Operation::Subtract, i64::checked_sub)
    }

    /// Matrix product `self × other`
    ///
    /// Requires `self.num_cols() == other.num_rows()`. The non-zeros of
    /// `other` are grouped by row once, then every non-zero `(i, k)` of `self`
    /// is paired with row `k` of `other`, so the work is proportional to the
    /// number of matching non-zero pairs rather than the dense shape.
    ///
    /// Partial sums are accumulated with a read followed by a write through
    /// [`SparseMatrix::set_element`]; a position whose running sum passes
    /// through zero is dropped and recreated by the next non-zero write.
    pub fn multiply(&self, other: &SparseMatrix) -> Result<SparseMatrix> {
        if self.num_cols() != other.num_rows() {
            return Err(SpmxError::DimensionMismatch(Operation::Multiply));
        }

        let mut rows_of_other: HashMap<i64, Vec<(i64, i64)>> = HashMap::new();
        for (index, value) in other.stored() {
            rows_of_other
                .entry(index.row)
                .or_default()
                .push((index.col, value));
        }

        let mut result = SparseMatrix::new(self.num_rows(), other.num_cols());
        for (index, lhs) in self.stored() {
            let Some(row) = rows_of_other.get(&index.col) else {
                continue;
            };
            for &(col, rhs) in row {
                let sum = lhs
                    .checked_mul(rhs)
                    .and_then(|product| result.get_element(index.row, col).checked_add(product))
                    .ok_or(SpmxError::Overflow(Operation::Multiply))?;
                result.set_element(index.row, col, sum);
            }
        }

        Ok(result)
    }

    /// Shared element-wise kernel for addition and subtraction
    ///
    /// Starts from a copy of `self` and folds every stored entry of `other`
    /// into it with `f`.
    fn combine(
        &self,
        other: &SparseMatrix,
        op: Operation,
        f: fn(i64, i64) -> Option<i64>,
    ) -> Result<SparseMatrix> {
        if self.dimensions() != other.dimensions() {
            return Err(SpmxError::DimensionMismatch(op));
        }

        let mut result = self.clone();
        for (index, rhs) in other.stored() {
            let value = f(result.get_element(index.row, index.col), rhs)
                .ok_or(SpmxError::Overflow(op))?;
            result.set_element(index.row, index.col, value);
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn matrix(rows: usize, cols: usize, triples: &[(i64, i64, i64)]) -> SparseMatrix {
        SparseMatrix::from_triples(rows, cols, triples.iter().copied())
    }

    #[test]
    fn test_add() {
        let a = matrix(2, 2, &[(0, 0, 1), (0, 1, 2)]);
        let b = matrix(2, 2, &[(0, 1, 3), (1, 0, 4)]);
        let sum = a.add(&b).unwrap();
        assert_eq!(sum, matrix(2, 2, &[(0, 0, 1), (0, 1, 5), (1, 0, 4)]));
    }

    #[test]
    fn test_add_cancellation_is_not_stored() {
        let a = matrix(2, 2, &[(0, 0, 5), (1, 1, 1)]);
        let b = matrix(2, 2, &[(0, 0, -5)]);
        let sum = a.add(&b).unwrap();
        assert_eq!(sum.get_element(0, 0), 0);
        assert_eq!(sum.nnz(), 1);
    }

    #[test]
    fn test_subtract() {
        let a = matrix(2, 3, &[(0, 0, 4), (1, 2, 7)]);
        let b = matrix(2, 3, &[(0, 0, 4), (0, 1, 2)]);
        let diff = a.subtract(&b).unwrap();
        assert_eq!(diff, matrix(2, 3, &[(0, 1, -2), (1, 2, 7)]));
    }

    #[test]
    fn test_operands_are_untouched() {
        let a = matrix(2, 2, &[(0, 0, 1)]);
        let b = matrix(2, 2, &[(0, 0, -1)]);
        let a_before = a.clone();
        let b_before = b.clone();
        let _ = a.add(&b).unwrap();
        let _ = a.subtract(&b).unwrap();
        let _ = a.multiply(&b).unwrap();
        assert_eq!(a, a_before);
        assert_eq!(b, b_before);
    }

    #[test]
    fn test_add_dimension_mismatch() {
        let a = SparseMatrix::new(2, 2);
        let b = SparseMatrix::new(2, 3);
        assert_eq!(a.add(&b), Err(SpmxError::DimensionMismatch(Operation::Add)));
        assert_eq!(
            a.subtract(&b),
            Err(SpmxError::DimensionMismatch(Operation::Subtract))
        );
    }

    #[test]
    fn test_multiply_row_by_column() {
        let a = matrix(1, 2, &[(0, 0, 2), (0, 1, 3)]);
        let b = matrix(2, 1, &[(0, 0, 4), (1, 0, 5)]);
        let product = a.multiply(&b).unwrap();
        assert_eq!(product.dimensions(), (1, 1));
        assert_eq!(product.get_element(0, 0), 23);
        assert_eq!(product.nnz(), 1);
    }

    #[test]
    fn test_multiply_rectangular() {
        // [1 0 2]   [1 0]   [7 8]
        // [0 3 0] × [0 2] = [0 6]
        //           [3 4]
        let a = matrix(2, 3, &[(0, 0, 1), (0, 2, 2), (1, 1, 3)]);
        let b = matrix(3, 2, &[(0, 0, 1), (1, 1, 2), (2, 0, 3), (2, 1, 4)]);
        let product = a.multiply(&b).unwrap();
        assert_eq!(product, matrix(2, 2, &[(0, 0, 7), (0, 1, 8), (1, 1, 6)]));
    }

    #[test]
    fn test_multiply_zero_sum_is_dropped() {
        // [1 1] × [ 2] = [0]
        //         [-2]
        let a = matrix(1, 2, &[(0, 0, 1), (0, 1, 1)]);
        let b = matrix(2, 1, &[(0, 0, 2), (1, 0, -2)]);
        let product = a.multiply(&b).unwrap();
        assert!(product.is_empty());
    }

    #[test]
    fn test_multiply_running_sum_through_zero() {
        // Partial sums 1, 0, 4: the entry is dropped then recreated
        let a = matrix(1, 3, &[(0, 0, 1), (0, 1, 1), (0, 2, 1)]);
        let b = matrix(3, 1, &[(0, 0, 1), (1, 0, -1), (2, 0, 4)]);
        let product = a.multiply(&b).unwrap();
        assert_eq!(product.get_element(0, 0), 4);
        assert_eq!(product.nnz(), 1);
    }

    #[test]
    fn test_multiply_dimension_mismatch() {
        let a = SparseMatrix::new(2, 3);
        let b = SparseMatrix::new(2, 3);
        assert_eq!(
            a.multiply(&b),
            Err(SpmxError::DimensionMismatch(Operation::Multiply))
        );
    }

    #[test]
    fn test_overflow_is_reported() {
        let a = matrix(1, 1, &[(0, 0, i64::MAX)]);
        let b = matrix(1, 1, &[(0, 0, 1)]);
        assert_eq!(a.add(&b), Err(SpmxError::Overflow(Operation::Add)));
        let c = matrix(1, 1, &[(0, 0, 2)]);
        assert_eq!(a.multiply(&c), Err(SpmxError::Overflow(Operation::Multiply)));
        let d = matrix(1, 1, &[(0, 0, i64::MIN)]);
        assert_eq!(d.subtract(&b), Err(SpmxError::Overflow(Operation::Subtract)));
    }

    #[test]
    fn test_operation_parsing() {
        assert_eq!(Operation::from_choice("1"), Some(Operation::Add));
        assert_eq!(Operation::from_choice("2"), Some(Operation::Subtract));
        assert_eq!(Operation::from_choice("3"), Some(Operation::Multiply));
        assert_eq!(Operation::from_choice("4"), None);
        assert_eq!(Operation::from_choice("add"), None);
        assert_eq!(Operation::from_choice(" 2"), None);
        assert_eq!(Operation::from_choice("2 "), None);
        assert_eq!(Operation::from_choice(""), None);

        assert_eq!("add".parse(), Ok(Operation::Add));
        assert_eq!("Subtract".parse(), Ok(Operation::Subtract));
        assert_eq!("mul".parse(), Ok(Operation::Multiply));
        assert_eq!("3".parse(), Ok(Operation::Multiply));
        assert_eq!(" 2 ".parse(), Ok(Operation::Subtract));
        assert_eq!("divide".parse::<Operation>(), Err(UnknownOperation));

        for op in Operation::ALL {
            assert_eq!(Operation::from_choice(&alloc::format!("{}", op.choice())), Some(op));
        }
    }

    #[test]
    fn test_apply_dispatches() {
        let a = matrix(1, 1, &[(0, 0, 6)]);
        let b = matrix(1, 1, &[(0, 0, 3)]);
        assert_eq!(Operation::Add.apply(&a, &b).unwrap().get_element(0, 0), 9);
        assert_eq!(Operation::Subtract.apply(&a, &b).unwrap().get_element(0, 0), 3);
        assert_eq!(Operation::Multiply.apply(&a, &b).unwrap().get_element(0, 0), 18);
    }

    fn arb_matrix(rows: usize, cols: usize) -> impl Strategy<Value = SparseMatrix> {
        prop::collection::vec(
            (0..rows as i64, 0..cols as i64, -50i64..50),
            0..(rows * cols),
        )
        .prop_map(move |triples| SparseMatrix::from_triples(rows, cols, triples))
    }

    fn arb_pair() -> impl Strategy<Value = (SparseMatrix, SparseMatrix)> {
        (1usize..6, 1usize..6).prop_flat_map(|(r, c)| (arb_matrix(r, c), arb_matrix(r, c)))
    }

    /// Reference product over the dense index space
    fn dense_product(a: &SparseMatrix, b: &SparseMatrix) -> SparseMatrix {
        let mut out = SparseMatrix::new(a.num_rows(), b.num_cols());
        for i in 0..a.num_rows() as i64 {
            for j in 0..b.num_cols() as i64 {
                let sum: i64 = (0..a.num_cols() as i64)
                    .map(|k| a.get_element(i, k) * b.get_element(k, j))
                    .sum();
                out.set_element(i, j, sum);
            }
        }
        out
    }

    proptest! {
        #[test]
        fn prop_add_zero_is_identity(m in (1usize..6, 1usize..6).prop_flat_map(|(r, c)| arb_matrix(r, c))) {
            let zero = SparseMatrix::new(m.num_rows(), m.num_cols());
            prop_assert_eq!(m.add(&zero).unwrap(), m);
        }

        #[test]
        fn prop_add_commutes((a, b) in arb_pair()) {
            prop_assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
        }

        #[test]
        fn prop_subtract_self_is_empty(m in (1usize..6, 1usize..6).prop_flat_map(|(r, c)| arb_matrix(r, c))) {
            prop_assert!(m.subtract(&m).unwrap().is_empty());
        }

        #[test]
        fn prop_multiply_matches_dense(
            (a, b) in (1usize..5, 1usize..5, 1usize..5)
                .prop_flat_map(|(n, k, m)| (arb_matrix(n, k), arb_matrix(k, m)))
        ) {
            let product = a.multiply(&b).unwrap();
            prop_assert_eq!(product.dimensions(), (a.num_rows(), b.num_cols()));
            prop_assert_eq!(product, dense_product(&a, &b));
        }
    }
}
