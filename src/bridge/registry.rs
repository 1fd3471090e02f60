// In: src/bridge/registry.rs

//! The host-callable namespace.
//!
//! `Module` maps every registered type name to its accessor methods and every
//! module-level function name to a typed function pointer. It is built once,
//! on first use, and never changes afterwards; hosts only look things up.
//!
//! Accessors forward straight to the native object and never translate
//! errors. Factories (`open_table`, `get_column`, `category_column`, `values`)
//! status-check their own native call and hand back either a fresh handle or
//! `Value::Absent` carrying the failed status.

use std::sync::OnceLock;

use hashbrown::HashMap;

use crate::bridge::columns::{
    category_column_with, column_type, get_column_with, value_array_type,
};
use crate::bridge::handles::{ColumnHandle, Handle, TableHandle};
use crate::bridge::open::open_table_with;
use crate::bridge::status::Outcome;
use crate::config::{self, BridgeConfig};
use crate::error::FeatherError;
use crate::native::Status;

//==================================================================================
// I. Values Crossing the Boundary
//==================================================================================

/// Everything a host can pass in or get back.
#[derive(Clone, Debug)]
pub enum Value {
    Int(i64),
    Bool(bool),
    Text(String),
    Handle(Handle),
    /// The result of a failed factory. Holds the status that explains why.
    Absent(Status),
}

impl Value {
    /// False only for `Absent`.
    pub fn is_ok(&self) -> bool {
        !matches!(self, Value::Absent(_))
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_handle(&self) -> Option<&Handle> {
        match self {
            Value::Handle(h) => Some(h),
            _ => None,
        }
    }

    /// The status of this value: OK for anything but `Absent`.
    pub fn status(&self) -> Status {
        match self {
            Value::Absent(status) => status.clone(),
            _ => Status::new_ok(),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<Handle> for Value {
    fn from(v: Handle) -> Self {
        Value::Handle(v)
    }
}

impl<T: Into<Handle>> From<Outcome<T>> for Value {
    fn from(outcome: Outcome<T>) -> Self {
        match outcome.into_result() {
            Ok(value) => Value::Handle(value.into()),
            Err(status) => Value::Absent(status),
        }
    }
}

impl From<TableHandle> for Handle {
    fn from(v: TableHandle) -> Self {
        Handle::Table(v)
    }
}

impl From<ColumnHandle> for Handle {
    fn from(v: ColumnHandle) -> Self {
        Handle::Column(v)
    }
}

impl From<crate::bridge::handles::CategoryColumnHandle> for Handle {
    fn from(v: crate::bridge::handles::CategoryColumnHandle) -> Self {
        Handle::CategoryColumn(v)
    }
}

impl From<crate::bridge::handles::ArrayHandle> for Handle {
    fn from(v: crate::bridge::handles::ArrayHandle) -> Self {
        Handle::PrimitiveArray(v)
    }
}

//==================================================================================
// II. The Registry
//==================================================================================

/// An accessor forwarded to the object behind a handle.
pub type Method = fn(&Handle) -> Result<Value, FeatherError>;

/// A module-level function.
pub type Function = fn(&[Value], &BridgeConfig) -> Result<Value, FeatherError>;

#[derive(Debug)]
struct FunctionEntry {
    arity: usize,
    f: Function,
}

#[derive(Debug, Default)]
struct TypeEntry {
    methods: HashMap<&'static str, Method>,
}

/// A named namespace of registered types and functions.
#[derive(Debug)]
pub struct Module {
    name: &'static str,
    types: HashMap<&'static str, TypeEntry>,
    functions: HashMap<&'static str, FunctionEntry>,
}

/// Adds accessors to one registered type.
pub struct TypeBuilder<'a> {
    entry: &'a mut TypeEntry,
}

impl<'a> TypeBuilder<'a> {
    pub fn method(self, name: &'static str, f: Method) -> Self {
        self.entry.methods.insert(name, f);
        self
    }
}

impl Module {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            types: HashMap::new(),
            functions: HashMap::new(),
        }
    }

    pub fn add_type(&mut self, name: &'static str) -> TypeBuilder<'_> {
        TypeBuilder {
            entry: self.types.entry(name).or_default(),
        }
    }

    pub fn function(&mut self, name: &'static str, arity: usize, f: Function) -> &mut Self {
        self.functions.insert(name, FunctionEntry { arity, f });
        self
    }

    pub fn name(&self) -> &str {
        self.name
    }

    /// Registered type names, sorted.
    pub fn type_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.types.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Methods registered for `type_name`, sorted.
    pub fn methods_of(&self, type_name: &str) -> Result<Vec<&'static str>, FeatherError> {
        let entry = self
            .types
            .get(type_name)
            .ok_or_else(|| FeatherError::UnknownType(type_name.to_string()))?;
        let mut names: Vec<_> = entry.methods.keys().copied().collect();
        names.sort_unstable();
        Ok(names)
    }

    /// Module-level function names, sorted.
    pub fn function_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.functions.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Calls accessor `method` on the object behind `receiver`.
    pub fn invoke(&self, receiver: &Handle, method: &str) -> Result<Value, FeatherError> {
        let type_name = receiver.type_name();
        let f = self
            .types
            .get(type_name)
            .and_then(|entry| entry.methods.get(method))
            .ok_or_else(|| FeatherError::UnknownMethod {
                type_name: type_name.to_string(),
                method: method.to_string(),
            })?;
        f(receiver)
    }

    /// Calls a module-level function with the process-wide config.
    pub fn call(&self, function: &str, args: &[Value]) -> Result<Value, FeatherError> {
        self.call_with(function, args, &config::global())
    }

    pub fn call_with(
        &self,
        function: &str,
        args: &[Value],
        config: &BridgeConfig,
    ) -> Result<Value, FeatherError> {
        let entry = self
            .functions
            .get(function)
            .ok_or_else(|| FeatherError::UnknownMethod {
                type_name: self.name.to_string(),
                method: function.to_string(),
            })?;
        if args.len() != entry.arity {
            return Err(FeatherError::Arity {
                name: function.to_string(),
                expected: entry.arity,
                got: args.len(),
            });
        }
        (entry.f)(args, config)
    }
}

//==================================================================================
// III. Registrations
//==================================================================================

/// Builds an accessor that unwraps one handle variant and forwards to it.
macro_rules! forward {
    ($variant:ident, |$obj:ident| $body:expr) => {
        |handle: &Handle| match handle {
            Handle::$variant($obj) => Ok(Value::from($body)),
            other => Err(FeatherError::ArgumentType {
                name: other.type_name().to_string(),
                position: 0,
                expected: stringify!($variant),
            }),
        }
    };
}

static FEATHER: OnceLock<Module> = OnceLock::new();

/// The process-wide `Feather` namespace.
pub fn module() -> &'static Module {
    FEATHER.get_or_init(build)
}

fn build() -> Module {
    let mut m = Module::new("Feather");

    m.add_type("Status")
        .method("ok", forward!(Status, |st| st.ok()))
        .method("to_string", forward!(Status, |st| st.to_string()))
        .method("posix_code", forward!(Status, |st| st.posix_code()));

    m.add_type("TableReader")
        .method("num_columns", forward!(Table, |t| t.num_columns()))
        .method("num_rows", forward!(Table, |t| t.num_rows()))
        .method("version", forward!(Table, |t| t.version()))
        .method("has_description", forward!(Table, |t| t.has_description()))
        .method("get_description", forward!(Table, |t| t.get_description()));

    m.add_type("Column")
        .method("name", forward!(Column, |c| c.name()))
        .method("type", forward!(Column, |c| c.column_type().code()))
        .method("values", forward!(Column, |c| Handle::from(c.values())));

    m.add_type("CategoryColumn")
        .method("name", forward!(CategoryColumn, |c| c.name()))
        .method("type", forward!(CategoryColumn, |c| c.column_type().code()))
        .method("values", forward!(CategoryColumn, |c| Handle::from(c.values())))
        .method("ordered", forward!(CategoryColumn, |c| c.ordered()))
        .method("num_levels", forward!(CategoryColumn, |c| c.num_levels()));

    // Shape only: the raw buffer accessor is intentionally not registered.
    m.add_type("PrimitiveArray")
        .method("type", forward!(PrimitiveArray, |a| a.value_type().code()))
        .method("length", forward!(PrimitiveArray, |a| a.length()))
        .method("null_count", forward!(PrimitiveArray, |a| a.null_count()));

    m.function("open_table", 1, |args, config| {
        let path = text_arg("open_table", args, 0)?;
        Ok(Value::from(open_table_with(path, config)))
    })
    .function("get_column", 2, |args, config| {
        let table = table_arg("get_column", args, 0)?;
        let index = int_arg("get_column", args, 1)?;
        Ok(Value::from(get_column_with(table, index, config)))
    })
    .function("category_column", 1, |args, config| {
        let column = column_arg("category_column", args, 0)?;
        Ok(Value::from(category_column_with(column, config)))
    })
    .function("column_type", 1, |args, _| {
        Ok(Value::from(column_type(column_arg("column_type", args, 0)?)))
    })
    .function("value_array_type", 1, |args, _| {
        Ok(Value::from(value_array_type(column_arg("value_array_type", args, 0)?)))
    });

    m
}

fn text_arg<'a>(name: &str, args: &'a [Value], position: usize) -> Result<&'a str, FeatherError> {
    args[position]
        .as_text()
        .ok_or_else(|| argument_type(name, position, "text"))
}

fn int_arg(name: &str, args: &[Value], position: usize) -> Result<i64, FeatherError> {
    args[position]
        .as_int()
        .ok_or_else(|| argument_type(name, position, "an integer"))
}

fn table_arg<'a>(
    name: &str,
    args: &'a [Value],
    position: usize,
) -> Result<&'a TableHandle, FeatherError> {
    match &args[position] {
        Value::Handle(Handle::Table(table)) => Ok(table),
        _ => Err(argument_type(name, position, "a TableReader")),
    }
}

fn column_arg<'a>(
    name: &str,
    args: &'a [Value],
    position: usize,
) -> Result<&'a ColumnHandle, FeatherError> {
    match &args[position] {
        Value::Handle(Handle::Column(column)) => Ok(column),
        _ => Err(argument_type(name, position, "a Column")),
    }
}

fn argument_type(name: &str, position: usize, expected: &'static str) -> FeatherError {
    FeatherError::ArgumentType {
        name: name.to_string(),
        position,
        expected,
    }
}
