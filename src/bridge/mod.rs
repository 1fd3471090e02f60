// In: src/bridge/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Bridge Layer
// ====================================================================================
//
// The `bridge` sits between host environments and the `native` reader. It owns
// every native object a host can reach and decides what a host is allowed to
// see of it.
//
// Data Flow (handle-based hosts):
//
//   1. [Registry (registry::module)]        -> host calls "open_table" / "get_column"
//         |
//         `-> a. Factory calls `open` / `columns`
//         |
//         `-> b. Native call result goes through `status::check` exactly once
//         |
//   2. [Handles (handles::*)]               -> Arc-owned handle, or Value::Absent(Status)
//         |
//         `-> host calls accessors; registry forwards them to the native object
//
// Data Flow (flat-record hosts):
//
//   1. [C ABI (flat::feather_openFeatherTable)] -> receives *mut FeatherMetadata
//         |
//         `-> `open::open_and_introspect` (shared with the handle path)
//         |
//   2. Counts written into the record, reader dropped, i16 status returned
//
// ====================================================================================
pub mod columns;
pub mod flat;
pub mod handles;
pub mod open;
pub mod registry;
pub mod status;

// --- Handle-based API ---
pub use columns::{category_column, column_type, get_column, value_array_type};
pub use handles::{
    ArrayHandle, CategoryColumnHandle, ColumnHandle, Handle, TableHandle, WeakTableHandle,
};
pub use open::{open_table, open_table_with, TableSummary};
pub use registry::{module, Module, Value};
pub use status::Outcome;

// --- Flat-record API ---
pub use flat::{feather_openFeatherTable, open_flat, FeatherMetadata, FlatRequest};
