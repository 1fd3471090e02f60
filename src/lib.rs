//! This file is the root of the `feather_bridge` Rust crate.
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring all the top-level modules of our library (`native`, `bridge`, etc.)
//!     so the Rust compiler knows they exist.
//! 2.  Defining the `#[pymodule]` which acts as the main entry point when the
//!     compiled library is imported into Python (`python` feature).
//!
//! The C entry point `feather_openFeatherTable` is exported from `bridge::flat`
//! regardless of features.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
//==================================================================================
// 1. Module Declarations
//==================================================================================
#[macro_use]
pub mod observability; // Make macros available throughout the crate

pub mod bridge;
pub mod config;
pub mod error;
pub mod native;
pub mod types;

#[cfg(feature = "python")]
mod ffi;

#[cfg(test)]
mod test_support;

pub use bridge::{module, open_table, Outcome, Value};
pub use error::FeatherError;

//==================================================================================
// 2. Python Module Definition
//==================================================================================
#[cfg(feature = "python")]
use pyo3::prelude::*;

/// The `feather_bridge` Python module.
#[cfg(feature = "python")]
#[pymodule]
fn feather_bridge(m: &Bound<'_, PyModule>) -> PyResult<()> {
    use ffi::{PyBoundMethod, PyHandle, PyNamespace, PyRegisteredFunction};

    // --- Registered types and the Feather namespace ---
    m.add_class::<PyHandle>()?;
    m.add_class::<PyBoundMethod>()?;
    m.add_class::<PyNamespace>()?;
    m.add_class::<PyRegisteredFunction>()?;
    m.add(bridge::module().name(), PyNamespace)?;

    m.add_function(wrap_pyfunction!(ffi::try_call_py, m)?)?;

    // --- Expose the custom error type ---
    m.add("FeatherError", m.py().get_type_bound::<pyo3::exceptions::PyValueError>())?;

    // --- Expose version string as a module attribute ---
    m.add("__version__", VERSION)?;

    // --- Turn on logging for open/column tracing ---
    m.add_function(wrap_pyfunction!(ffi::enable_verbose_logging_py, m)?)?;

    Ok(())
}
