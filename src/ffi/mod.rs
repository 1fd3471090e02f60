//! This module serves as the public API for the host-language layers.
//!
//! The C ABI entry point lives with the bridge (`bridge::flat`) because it is
//! plain data in, plain data out. Hosts that hold object references get their
//! own adapter here; currently that is Python.

//==================================================================================
// 1. Module Declarations
//==================================================================================
/// Contains all logic for interfacing with the Python/CPython ecosystem.
pub mod python;

//==================================================================================
// 2. Public API Re-exports
//==================================================================================
pub use self::python::{
    enable_verbose_logging_py, try_call_py, PyBoundMethod, PyHandle, PyNamespace,
    PyRegisteredFunction,
};
