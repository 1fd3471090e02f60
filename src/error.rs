// In: src/error.rs

//! This module defines the single, unified error type for the feather bridge.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.
//!
//! Two families live here. Native failures (I/O, Arrow decoding, bad column
//! index, non-categorical view) are what the reader reports and are always
//! funnelled through a [`Status`](crate::native::Status) before a host sees
//! them. Binding failures (unknown method, wrong arguments) come from the
//! registry itself and are returned directly to the caller.

#[cfg(feature = "python")]
use pyo3::PyErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeatherError {
    // =========================================================================
    // === Native Reader Errors (reported through a Status)
    // =========================================================================
    /// An error originating from the underlying I/O subsystem (e.g., file not found).
    #[error("IOError: {0}")]
    Io(#[from] std::io::Error),

    /// An error originating from the Arrow library while decoding the file.
    #[error("Invalid: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[error("KeyError: column index {index} out of bounds for table with {num_columns} columns")]
    ColumnIndex { index: i64, num_columns: usize },

    #[error("Invalid: column '{0}' is not categorical")]
    NotCategorical(String),

    // =========================================================================
    // === Binding Errors (raised by the registry, never a Status)
    // =========================================================================
    #[error("no type named '{0}' is registered")]
    UnknownType(String),

    #[error("type '{type_name}' has no method '{method}'")]
    UnknownMethod { type_name: String, method: String },

    #[error("'{name}' expects {expected} argument(s), got {got}")]
    Arity {
        name: String,
        expected: usize,
        got: usize,
    },

    #[error("'{name}' argument {position} must be {expected}")]
    ArgumentType {
        name: String,
        position: usize,
        expected: &'static str,
    },

    /// A malformed `FEATHER_BRIDGE_CONFIG` document.
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

// =============================================================================
// === Manual `From` Implementations ===
// =============================================================================

#[cfg(feature = "python")]
impl From<FeatherError> for PyErr {
    fn from(err: FeatherError) -> PyErr {
        match err {
            FeatherError::UnknownType(_) | FeatherError::UnknownMethod { .. } => {
                pyo3::exceptions::PyAttributeError::new_err(err.to_string())
            }
            FeatherError::Arity { .. } | FeatherError::ArgumentType { .. } => {
                pyo3::exceptions::PyTypeError::new_err(err.to_string())
            }
            _ => pyo3::exceptions::PyValueError::new_err(err.to_string()),
        }
    }
}
