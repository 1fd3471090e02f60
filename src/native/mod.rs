//! The native reader layer.
//!
//! A thin Feather-shaped facade over Arrow's IPC file reader: `TableReader`,
//! `Column`, `CategoryColumn`, `PrimitiveArray` and `Status`. Everything in
//! here is host-agnostic and reports failures as `FeatherError`; turning those
//! into host-visible statuses is the bridge's job.

pub mod column;
pub mod reader;
pub mod status;

pub use column::{CategoryColumn, Column, PrimitiveArray};
pub use reader::TableReader;
pub use status::{Status, StatusKind};
