// In: src/bridge/handles.rs

//! Opaque handles over native objects.
//!
//! A handle is a reference-counted owner: cloning it shares the native
//! object, dropping the last clone frees it. Every handle derived from a table
//! (column, categorical view, value array) holds a strong reference to that
//! table, so a derived handle can never outlive the reader it came from and a
//! table with no outstanding handles is released immediately.
//!
//! Hosts never see the native layout. They see the registered type name and
//! the accessors the registry forwards.

use std::fmt;
use std::sync::{Arc, Weak};

use crate::native::{CategoryColumn, Column, Status, TableReader};
use crate::types::{ColumnType, PrimitiveType};

//==================================================================================
// I. Table
//==================================================================================

#[derive(Clone)]
pub struct TableHandle {
    reader: Arc<TableReader>,
}

impl TableHandle {
    pub(crate) fn new(reader: TableReader) -> Self {
        Self {
            reader: Arc::new(reader),
        }
    }

    pub(crate) fn reader(&self) -> &TableReader {
        &self.reader
    }

    pub fn num_columns(&self) -> i64 {
        self.reader.num_columns()
    }

    pub fn num_rows(&self) -> i64 {
        self.reader.num_rows()
    }

    pub fn version(&self) -> i64 {
        self.reader.version()
    }

    pub fn has_description(&self) -> bool {
        self.reader.has_description()
    }

    pub fn get_description(&self) -> String {
        self.reader.get_description()
    }

    /// Number of live handles (this one included) keeping the reader open.
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.reader)
    }

    /// A non-owning observer, used to tell when the reader has been freed.
    pub fn downgrade(&self) -> WeakTableHandle {
        WeakTableHandle(Arc::downgrade(&self.reader))
    }
}

impl fmt::Debug for TableHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableHandle")
            .field("num_columns", &self.num_columns())
            .field("num_rows", &self.num_rows())
            .finish()
    }
}

/// Observes a table without keeping it open.
#[derive(Clone, Debug)]
pub struct WeakTableHandle(Weak<TableReader>);

impl WeakTableHandle {
    /// True once every owning handle has been dropped.
    pub fn is_released(&self) -> bool {
        self.0.strong_count() == 0
    }

    /// Re-acquires the table if it is still open.
    pub fn upgrade(&self) -> Option<TableHandle> {
        self.0.upgrade().map(|reader| TableHandle { reader })
    }
}

//==================================================================================
// II. Columns
//==================================================================================

#[derive(Clone)]
pub struct ColumnHandle {
    table: TableHandle,
    column: Arc<Column>,
}

impl ColumnHandle {
    pub(crate) fn new(table: TableHandle, column: Column) -> Self {
        Self {
            table,
            column: Arc::new(column),
        }
    }

    pub(crate) fn column(&self) -> &Column {
        &self.column
    }

    pub fn table(&self) -> &TableHandle {
        &self.table
    }

    pub fn name(&self) -> String {
        self.column.name().to_string()
    }

    pub fn column_type(&self) -> ColumnType {
        self.column.column_type()
    }

    pub fn value_type(&self) -> PrimitiveType {
        self.column.values().value_type()
    }

    /// The column's value array. Shares ownership of the column and its table.
    pub fn values(&self) -> ArrayHandle {
        ArrayHandle {
            table: self.table.clone(),
            column: self.column.clone(),
        }
    }
}

impl fmt::Debug for ColumnHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnHandle")
            .field("name", &self.column.name())
            .field("type", &self.column_type())
            .finish()
    }
}

#[derive(Clone)]
pub struct CategoryColumnHandle {
    table: TableHandle,
    column: Arc<Column>,
    category: Arc<CategoryColumn>,
}

impl CategoryColumnHandle {
    pub(crate) fn new(column: &ColumnHandle, category: CategoryColumn) -> Self {
        Self {
            table: column.table.clone(),
            column: column.column.clone(),
            category: Arc::new(category),
        }
    }

    pub fn name(&self) -> String {
        self.category.column().name().to_string()
    }

    pub fn column_type(&self) -> ColumnType {
        self.category.column().column_type()
    }

    pub fn ordered(&self) -> bool {
        self.category.ordered()
    }

    pub fn num_levels(&self) -> i64 {
        self.category.num_levels()
    }

    pub fn values(&self) -> ArrayHandle {
        ArrayHandle {
            table: self.table.clone(),
            column: self.column.clone(),
        }
    }
}

impl fmt::Debug for CategoryColumnHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CategoryColumnHandle")
            .field("name", &self.category.column().name())
            .field("ordered", &self.ordered())
            .finish()
    }
}

//==================================================================================
// III. Value Arrays
//==================================================================================

/// A column's value array. Exposes its shape only; raw buffers are not reachable.
#[derive(Clone)]
pub struct ArrayHandle {
    #[allow(dead_code)] // keeps the owning reader alive
    table: TableHandle,
    column: Arc<Column>,
}

impl ArrayHandle {
    pub fn value_type(&self) -> PrimitiveType {
        self.column.values().value_type()
    }

    pub fn length(&self) -> i64 {
        self.column.values().length()
    }

    pub fn null_count(&self) -> i64 {
        self.column.values().null_count()
    }
}

impl fmt::Debug for ArrayHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayHandle")
            .field("type", &self.value_type())
            .field("length", &self.length())
            .finish()
    }
}

//==================================================================================
// IV. The Host-facing Union
//==================================================================================

/// Any object a host can hold a reference to.
#[derive(Clone, Debug)]
pub enum Handle {
    Table(TableHandle),
    Column(ColumnHandle),
    CategoryColumn(CategoryColumnHandle),
    PrimitiveArray(ArrayHandle),
    Status(Status),
}

impl Handle {
    /// The registered type name the host sees for this handle.
    pub fn type_name(&self) -> &'static str {
        match self {
            Handle::Table(_) => "TableReader",
            Handle::Column(_) => "Column",
            Handle::CategoryColumn(_) => "CategoryColumn",
            Handle::PrimitiveArray(_) => "PrimitiveArray",
            Handle::Status(_) => "Status",
        }
    }
}
