// In: src/ffi/python.rs

use log::LevelFilter;
use pyo3::exceptions::{PyAttributeError, PyIOError, PyTypeError};
use pyo3::prelude::*;
use pyo3::types::{PyBool, PyTuple};
use std::fs::OpenOptions;
use std::sync::Once;

use crate::bridge::{module, Handle, Value};

//==================================================================================
// I. Value Conversion
//==================================================================================

/// Converts a bridged value into a Python object.
///
/// A failed factory becomes `None`; its diagnostic has already been written
/// to the sink, and `try_call` is there for callers that want the status.
fn value_to_py(py: Python, value: Value) -> PyResult<PyObject> {
    match value {
        Value::Int(v) => Ok(v.into_py(py)),
        Value::Bool(v) => Ok(v.into_py(py)),
        Value::Text(v) => Ok(v.into_py(py)),
        Value::Handle(inner) => Ok(Py::new(py, PyHandle { inner })?.into_py(py)),
        Value::Absent(_) => Ok(py.None()),
    }
}

fn py_to_value(obj: &Bound<'_, PyAny>) -> PyResult<Value> {
    if let Ok(handle) = obj.extract::<PyRef<PyHandle>>() {
        return Ok(Value::Handle(handle.inner.clone()));
    }
    // Check bool BEFORE int: Python bools are ints.
    if obj.is_instance_of::<PyBool>() {
        return Ok(Value::Bool(obj.extract()?));
    }
    if let Ok(v) = obj.extract::<i64>() {
        return Ok(Value::Int(v));
    }
    if let Ok(v) = obj.extract::<String>() {
        return Ok(Value::Text(v));
    }
    if obj.is_none() {
        return Err(PyTypeError::new_err(
            "got None where a handle was expected; the call that produced it failed",
        ));
    }
    Err(PyTypeError::new_err(format!(
        "cannot pass {} to the Feather bridge",
        obj.get_type().name()?
    )))
}

//==================================================================================
// II. Handles and Bound Methods
//==================================================================================

/// An opaque reference to a native object. Attribute access resolves against
/// the methods registered for its type.
#[pyclass(name = "Handle", module = "feather_bridge")]
pub struct PyHandle {
    inner: Handle,
}

#[pymethods]
impl PyHandle {
    #[getter]
    fn type_name(&self) -> &'static str {
        self.inner.type_name()
    }

    fn __getattr__(&self, name: &str) -> PyResult<PyBoundMethod> {
        let methods = module().methods_of(self.inner.type_name())?;
        if !methods.contains(&name) {
            return Err(PyAttributeError::new_err(format!(
                "'{}' object has no attribute '{}'",
                self.inner.type_name(),
                name
            )));
        }
        Ok(PyBoundMethod {
            receiver: self.inner.clone(),
            method: name.to_string(),
        })
    }

    fn __dir__(&self) -> PyResult<Vec<&'static str>> {
        let mut names = module().methods_of(self.inner.type_name())?;
        names.push("type_name");
        Ok(names)
    }

    fn __repr__(&self) -> String {
        format!("<Feather.{}>", self.inner.type_name())
    }
}

#[pyclass(name = "BoundMethod", module = "feather_bridge")]
pub struct PyBoundMethod {
    receiver: Handle,
    method: String,
}

#[pymethods]
impl PyBoundMethod {
    fn __call__(&self, py: Python) -> PyResult<PyObject> {
        let value = module().invoke(&self.receiver, &self.method)?;
        value_to_py(py, value)
    }

    fn __repr__(&self) -> String {
        format!("<bound method {}.{}>", self.receiver.type_name(), self.method)
    }
}

//==================================================================================
// III. The Module Namespace
//==================================================================================

/// The `Feather` namespace: every registered module-level function is an attribute.
#[pyclass(name = "Namespace", module = "feather_bridge")]
pub struct PyNamespace;

#[pymethods]
impl PyNamespace {
    fn __getattr__(&self, name: &str) -> PyResult<PyRegisteredFunction> {
        if !module().function_names().contains(&name) {
            return Err(PyAttributeError::new_err(format!(
                "module '{}' has no function '{}'",
                module().name(),
                name
            )));
        }
        Ok(PyRegisteredFunction {
            name: name.to_string(),
        })
    }

    fn __dir__(&self) -> Vec<&'static str> {
        module().function_names()
    }
}

#[pyclass(name = "Function", module = "feather_bridge")]
pub struct PyRegisteredFunction {
    name: String,
}

#[pymethods]
impl PyRegisteredFunction {
    #[pyo3(signature = (*args))]
    fn __call__(&self, py: Python, args: &Bound<'_, PyTuple>) -> PyResult<PyObject> {
        let value = call_registered(py, &self.name, args)?;
        value_to_py(py, value)
    }

    fn __repr__(&self) -> String {
        format!("<function {}.{}>", module().name(), self.name)
    }
}

fn call_registered(py: Python, name: &str, args: &Bound<'_, PyTuple>) -> PyResult<Value> {
    let args = args
        .iter()
        .map(|arg| py_to_value(&arg))
        .collect::<PyResult<Vec<_>>>()?;
    // File reads happen in here; let other Python threads run meanwhile.
    let value = py.allow_threads(|| module().call(name, &args))?;
    Ok(value)
}

/// Calls a registered function and returns `(status, value)`, where `value`
/// is `None` whenever `status.ok()` is false.
#[pyfunction]
#[pyo3(name = "try_call", signature = (name, *args))]
pub fn try_call_py(py: Python, name: &str, args: &Bound<'_, PyTuple>) -> PyResult<PyObject> {
    let value = call_registered(py, name, args)?;
    let status = value_to_py(py, Value::Handle(Handle::Status(value.status())))?;
    let value = value_to_py(py, value)?;
    Ok(PyTuple::new_bound(py, [status, value]).into_py(py))
}

//==================================================================================
// IV. Logging
//==================================================================================

static INIT_LOGGER: Once = Once::new();

#[pyfunction]
#[pyo3(name = "enable_verbose_logging", signature = (log_file = None))]
pub fn enable_verbose_logging_py(log_file: Option<String>) -> PyResult<()> {
    let file = match log_file {
        Some(filename) => Some(
            OpenOptions::new()
                .append(true)
                .create(true)
                .open(&filename)
                .map_err(|e| PyIOError::new_err(format!("cannot open {}: {}", filename, e)))?,
        ),
        None => None,
    };

    INIT_LOGGER.call_once(|| {
        let mut builder = env_logger::Builder::new();

        builder.is_test(false);
        builder.filter_level(LevelFilter::Debug);

        // Custom formatter: just print the level and message
        builder.format(|buf, record| {
            use std::io::Write;
            writeln!(buf, "[{}] {}", record.level(), record.args())?;
            buf.flush()?;
            Ok(())
        });

        if let Some(file) = file {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }

        let _ = builder.try_init();
    });
    Ok(())
}
