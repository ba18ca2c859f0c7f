//! Shared matrix handle with storage identity
//!
//! `Matrix<T>` is a cheap-clone handle to one row store. Cloning the handle
//! shares the store, which is how a caller passes the same storage as both
//! output and input of a multiply. `deep_clone` produces an independent copy.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard, TryLockError};

use lilmxm_core::{MxmError, RowStore};

use crate::error::{Error, Result};
use crate::lil_matrix::LilSparseMatrix;

/// Handle to a shared list-of-lists sparse matrix
#[derive(Debug)]
pub struct Matrix<T> {
    store: Arc<RwLock<LilSparseMatrix<T>>>,
}

impl<T> Clone for Matrix<T> {
    /// Share the same storage; see [`Matrix::deep_clone`] for a copy
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<T> From<LilSparseMatrix<T>> for Matrix<T> {
    fn from(store: LilSparseMatrix<T>) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}

impl<T> Matrix<T> {
    /// Create an empty `nrows x ncols` matrix
    pub fn new(nrows: usize, ncols: usize) -> Self {
        LilSparseMatrix::new(nrows, ncols).into()
    }

    /// Build from `(row, col, value)` triples
    pub fn from_triples<I>(
        nrows: usize,
        ncols: usize,
        triples: I,
    ) -> std::result::Result<Self, MxmError>
    where
        I: IntoIterator<Item = (usize, usize, T)>,
    {
        LilSparseMatrix::from_triples(nrows, ncols, triples).map(Self::from)
    }

    /// Whether two handles refer to the same storage
    ///
    /// Compares storage identity, never contents. Handles of different value
    /// types can never share storage.
    pub fn same_storage<U>(&self, other: &Matrix<U>) -> bool {
        std::ptr::eq(
            Arc::as_ptr(&self.store).cast::<()>(),
            Arc::as_ptr(&other.store).cast::<()>(),
        )
    }

    /// Borrow the store for reading without blocking
    pub fn read(&self) -> Result<RwLockReadGuard<'_, LilSparseMatrix<T>>> {
        self.read_as("matrix")
    }

    /// Borrow the store for writing without blocking
    pub fn write(&self) -> Result<RwLockWriteGuard<'_, LilSparseMatrix<T>>> {
        self.write_as("matrix")
    }

    pub(crate) fn read_as(
        &self,
        name: &'static str,
    ) -> Result<RwLockReadGuard<'_, LilSparseMatrix<T>>> {
        self.store.try_read().map_err(|err| match err {
            TryLockError::WouldBlock => Error::Busy(name),
            TryLockError::Poisoned(_) => Error::Poisoned(name),
        })
    }

    pub(crate) fn write_as(
        &self,
        name: &'static str,
    ) -> Result<RwLockWriteGuard<'_, LilSparseMatrix<T>>> {
        self.store.try_write().map_err(|err| match err {
            TryLockError::WouldBlock => Error::Busy(name),
            TryLockError::Poisoned(_) => Error::Poisoned(name),
        })
    }

    /// Matrix dimensions as (rows, cols)
    pub fn dimensions(&self) -> Result<(usize, usize)> {
        Ok(self.read()?.dimensions())
    }

    /// Total stored entries
    pub fn nvals(&self) -> Result<usize> {
        Ok(self.read()?.nvals())
    }
}

impl<T: Clone> Matrix<T> {
    /// Independent copy with its own storage
    pub fn deep_clone(&self) -> Result<Self> {
        Ok(self.snapshot()?.into())
    }

    /// Copy of the current contents
    pub fn snapshot(&self) -> Result<LilSparseMatrix<T>> {
        Ok(self.read()?.clone())
    }

    /// Stored value at a position, if any
    pub fn get_element(&self, row: usize, col: usize) -> Result<Option<T>> {
        Ok(self.read()?.get_element(row, col).cloned())
    }
}
