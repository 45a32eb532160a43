//! Binary correlator ingest.
//!
//! Each input file is a flat, headerless array of `2 * T` little-endian f64
//! values: row-major `(value, error)` pairs for time index `0..T-1`. The only
//! validation is the strict size check; anything else about the bytes is
//! trusted, matching the fixed-layout contract.
//!
//! Design goals:
//! - **Strict size check** with a clear error + exit code 2
//! - **Whole-file read** (records are a few KiB; no streaming needed)
//! - **Separation of concerns**: no fitting logic here

use std::fs;
use std::path::Path;

use byteorder::{ByteOrder, LittleEndian};

use crate::domain::FitWindow;
use crate::error::AppError;

/// One correlator time series: a value and a statistical error per time slice.
#[derive(Debug, Clone)]
pub struct CorrelatorRecord {
    pub values: Vec<f64>,
    pub errors: Vec<f64>,
}

impl CorrelatorRecord {
    /// Temporal extent of the record.
    pub fn t_size(&self) -> usize {
        self.values.len()
    }

    /// Slice values and errors to the fit window `[tmin, tmax)`.
    ///
    /// # Panics
    /// Panics if the window exceeds the record length. Callers validate the
    /// window against `t_size` before any file is read.
    pub fn window(&self, window: FitWindow) -> (&[f64], &[f64]) {
        (
            &self.values[window.tmin()..window.tmax()],
            &self.errors[window.tmin()..window.tmax()],
        )
    }
}

/// Bytes per time slice: one f64 value + one f64 error.
const ROW_BYTES: usize = 16;

/// Load a correlator record, enforcing the exact `2 * t_size` f64 layout.
pub fn read_correlator(path: &Path, t_size: usize) -> Result<CorrelatorRecord, AppError> {
    let bytes = fs::read(path).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to read correlator '{}': {e}", path.display()),
        )
    })?;

    let expected = t_size * ROW_BYTES;
    if bytes.len() != expected {
        return Err(AppError::new(
            2,
            format!(
                "Bad correlator '{}': {} bytes, expected {expected} ({t_size} (value, error) f64 pairs).",
                path.display(),
                bytes.len()
            ),
        ));
    }

    let mut values = Vec::with_capacity(t_size);
    let mut errors = Vec::with_capacity(t_size);
    for row in bytes.chunks_exact(ROW_BYTES) {
        values.push(LittleEndian::read_f64(&row[..8]));
        errors.push(LittleEndian::read_f64(&row[8..]));
    }

    Ok(CorrelatorRecord { values, errors })
}
