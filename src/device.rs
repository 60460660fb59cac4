//! Staging of converted matrices for accelerator transfer
//!
//! The core never depends on this module. A backend implements
//! [`DeviceStager`] and receives a read-only [`CompressedMatrix`]; what it
//! returns is an opaque handle owned by the caller.

use aligned_vec::AVec;
use log::debug;

use crate::error::Result;
use crate::matrix::{CompressedMatrix, Layout, MatrixValue};

/// Alignment of staged buffers in bytes
pub const STAGING_ALIGNMENT: usize = 64;

/// Capability interface for moving a compressed matrix to a device
pub trait DeviceStager<T: MatrixValue> {
    /// Handle to the staged copy
    type Handle;

    /// Copies `matrix` into device-accessible memory
    fn stage(&self, matrix: &CompressedMatrix<T>) -> Result<Self::Handle>;
}

/// Matrix buffers staged in aligned host memory
pub struct StagedMatrix<T> {
    pub n_rows: usize,
    pub n_cols: usize,
    pub layout: Layout,
    pub pointers: AVec<usize>,
    pub indices: AVec<usize>,
    pub values: AVec<T>,
}

impl<T> StagedMatrix<T> {
    pub fn nnz(&self) -> usize {
        self.values.len()
    }
}

/// Host-memory backend: stages into 64-byte aligned buffers
///
/// Useful as a pinned-memory staging area ahead of a DMA transfer, and as
/// the reference backend where no accelerator is present.
#[derive(Debug, Default, Clone, Copy)]
pub struct HostStager;

impl<T: MatrixValue> DeviceStager<T> for HostStager {
    type Handle = StagedMatrix<T>;

    fn stage(&self, matrix: &CompressedMatrix<T>) -> Result<StagedMatrix<T>> {
        debug!(
            "staging {} matrix ({} × {}, nnz {})",
            matrix.layout(),
            matrix.n_rows(),
            matrix.n_cols(),
            matrix.nnz()
        );

        Ok(StagedMatrix {
            n_rows: matrix.n_rows(),
            n_cols: matrix.n_cols(),
            layout: matrix.layout(),
            pointers: AVec::from_iter(STAGING_ALIGNMENT, matrix.pointers().iter().copied()),
            indices: AVec::from_iter(STAGING_ALIGNMENT, matrix.indices().iter().copied()),
            values: AVec::from_iter(STAGING_ALIGNMENT, matrix.values().iter().copied()),
        })
    }
}
