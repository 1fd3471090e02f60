//! This module defines the strongly-typed discriminators the bridge reports
//! for a column. Hosts receive them as plain integers; inside the crate they
//! stay enums so a wrong code cannot be constructed.

pub mod column_type;

// Re-export the main type(s) for easier access.
pub use column_type::{ColumnType, PrimitiveType};
