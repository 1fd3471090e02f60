// In: src/bridge/columns.rs

//! The Column Accessor.
//!
//! Index validation is left to the reader: whatever status it reports for an
//! index is what the host gets back.

use crate::bridge::handles::{CategoryColumnHandle, ColumnHandle, TableHandle};
use crate::bridge::status::{check, Outcome};
use crate::config::{self, BridgeConfig};

pub fn get_column(table: &TableHandle, index: i64) -> Outcome<ColumnHandle> {
    get_column_with(table, index, &config::global())
}

/// Resolves column `index` of `table` into a handle that keeps `table` alive.
pub fn get_column_with(
    table: &TableHandle,
    index: i64,
    config: &BridgeConfig,
) -> Outcome<ColumnHandle> {
    log::debug!("get_column {}", index);
    check(table.reader().get_column(index), config)
        .map(|column| ColumnHandle::new(table.clone(), column))
}

pub fn category_column(column: &ColumnHandle) -> Outcome<CategoryColumnHandle> {
    category_column_with(column, &config::global())
}

/// The categorical view of `column`; an `Invalid` status for non-categorical columns.
pub fn category_column_with(
    column: &ColumnHandle,
    config: &BridgeConfig,
) -> Outcome<CategoryColumnHandle> {
    check(column.column().as_category(), config)
        .map(|category| CategoryColumnHandle::new(column, category))
}

/// Logical type discriminator of `column`.
pub fn column_type(column: &ColumnHandle) -> i32 {
    column.column_type().code()
}

/// Physical value-array type discriminator of `column`.
pub fn value_array_type(column: &ColumnHandle) -> i32 {
    column.value_type().code()
}
