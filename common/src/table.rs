use std::{
    iter::{Skip, StepBy},
    ops::{Index, IndexMut},
    slice,
};

use crate::{Error, Result};

pub type Column<'a, T> = StepBy<Skip<slice::Iter<'a, T>>>;

/// A dense `rows x cols` grid stored in row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Clone + Default> Table<T> {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![T::default(); rows * cols],
            rows,
            cols,
        }
    }
}

impl<T> Table<T> {
    /// Builds a table from a list of rows, which must all be the same non-zero length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let row_count = rows.len();
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        if row_count == 0 || cols == 0 {
            return Err(Error::malformed("a table needs at least one row and one column"));
        }

        let mut data = Vec::with_capacity(row_count * cols);
        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(Error::malformed(format!(
                    "row {} has {} columns, expected {}",
                    index,
                    row.len(),
                    cols
                )));
            }
            data.extend(row);
        }

        Ok(Self {
            data,
            rows: row_count,
            cols,
        })
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn col_count(&self) -> usize {
        self.cols
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    pub fn row(&self, idx: usize) -> &[T] {
        &self.data[idx * self.cols..(idx + 1) * self.cols]
    }

    pub fn column(&self, idx: usize) -> Column<'_, T> {
        assert!(idx < self.cols, "column {} out of range", idx);
        self.data.iter().skip(idx).step_by(self.cols)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.data.chunks_exact(self.cols)
    }

    pub fn columns(&self) -> impl Iterator<Item = Column<'_, T>> + '_ {
        (0..self.cols).map(move |idx| self.column(idx))
    }

    pub fn at(&self, row: usize, col: usize) -> Result<&T> {
        self.validate_element(row, col)?;
        Ok(&self[(row, col)])
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        self.validate_element(row, col)?;
        self[(row, col)] = value;
        Ok(())
    }

    fn validate_element(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(Error::OutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }
}

impl<T> Index<(usize, usize)> for Table<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Table<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[row * self.cols + col]
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use crate::Error;

    use super::Table;

    fn sample() -> Table<u32> {
        Table::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap()
    }

    #[test]
    fn test_new_is_filled_with_default() {
        let table: Table<u32> = Table::new(2, 3);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.col_count(), 3);
        assert!(table.iter().all(|x| *x == 0));
    }

    #[test]
    fn test_rows_and_columns() {
        let table = sample();

        assert_eq!(table.row(1), &[4, 5, 6]);
        assert_eq!(table.column(1).copied().collect_vec(), vec![2, 5]);
        assert_eq!(table.rows().count(), 2);
        assert_eq!(
            table
                .columns()
                .map(|col| col.copied().sum::<u32>())
                .collect_vec(),
            vec![5, 7, 9]
        );
    }

    #[test]
    fn test_checked_access() {
        let mut table = sample();

        assert_eq!(*table.at(1, 2).unwrap(), 6);
        table.set(0, 0, 10).unwrap();
        assert_eq!(table[(0, 0)], 10);

        assert!(matches!(
            table.at(2, 0),
            Err(Error::OutOfRange { row: 2, col: 0, rows: 2, cols: 3 })
        ));
        assert!(table.set(0, 3, 1).is_err());
    }

    #[test]
    fn test_ragged_rows_are_rejected() {
        assert!(Table::from_rows(vec![vec![1, 2], vec![3]]).is_err());
        assert!(Table::<u32>::from_rows(vec![]).is_err());
    }
}
