//! A fixed-capacity set of grid coordinates packed into an unsigned integer.
//!
//! Cells of an `N×N` grid map to bit `row * N + col` of `T`, so the set is
//! `Copy`, allocation free and usable without `std`.

use core::fmt;
use num_traits::{PrimInt, Unsigned, Zero};

use crate::common::GridError;

/// Set of `(row, col)` pairs on an `N×N` grid, stored in `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CellSet<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    // Rejects instantiations whose grid does not fit in `T`.
    const FITS: () = assert!(N * N <= core::mem::size_of::<T>() * 8);

    /// Empty set.
    #[inline]
    pub fn new() -> Self {
        let () = Self::FITS;
        CellSet { bits: T::zero() }
    }

    /// Number of cells in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Whether (`row`, `col`) is in the set.
    pub fn contains(&self, row: usize, col: usize) -> Result<bool, GridError> {
        let idx = Self::index(row, col)?;
        Ok(((self.bits >> idx) & T::one()) != T::zero())
    }

    /// Add (`row`, `col`). Returns `false` if it was already present.
    pub fn insert(&mut self, row: usize, col: usize) -> Result<bool, GridError> {
        let idx = Self::index(row, col)?;
        let bit = T::one() << idx;
        let fresh = (self.bits & bit).is_zero();
        self.bits = self.bits | bit;
        Ok(fresh)
    }

    /// Cells in row-major order.
    pub fn iter(&self) -> Cells<'_, T, N> {
        Cells { set: self, idx: 0 }
    }

    #[inline]
    fn index(row: usize, col: usize) -> Result<usize, GridError> {
        if row >= N || col >= N {
            Err(GridError::OutOfRange { row, col })
        } else {
            Ok(row * N + col)
        }
    }
}

impl<T, const N: usize> Default for CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Iterator over the cells of a [`CellSet`].
#[derive(Clone, Copy)]
pub struct Cells<'a, T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    set: &'a CellSet<T, N>,
    idx: usize,
}

impl<'a, T, const N: usize> Iterator for Cells<'a, T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if ((self.set.bits >> idx) & T::one()) != T::zero() {
                return Some((idx / N, idx % N));
            }
        }
        None
    }
}
