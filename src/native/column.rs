//! Columns, their categorical view, and their value arrays.

use arrow::array::{ArrayRef, AsArray};
use arrow::datatypes::FieldRef;

use crate::error::FeatherError;
use crate::types::{ColumnType, PrimitiveType};

/// The array physically storing a column's values, across all batches.
///
/// Only shape is exposed. The buffers themselves stay inside Arrow.
#[derive(Debug, Clone)]
pub struct PrimitiveArray {
    value_type: PrimitiveType,
    chunks: Vec<ArrayRef>,
}

impl PrimitiveArray {
    pub fn value_type(&self) -> PrimitiveType {
        self.value_type
    }

    pub fn length(&self) -> i64 {
        self.chunks.iter().map(|c| c.len() as i64).sum()
    }

    pub fn null_count(&self) -> i64 {
        self.chunks.iter().map(|c| c.null_count() as i64).sum()
    }
}

#[derive(Debug, Clone)]
pub struct Column {
    field: FieldRef,
    column_type: ColumnType,
    values: PrimitiveArray,
}

impl Column {
    pub(crate) fn new(field: FieldRef, chunks: Vec<ArrayRef>) -> Self {
        let value_type = PrimitiveType::from_arrow_type(field.data_type());
        if !value_type.is_supported() {
            log::debug!(
                "column '{}' has no Feather storage type for {}",
                field.name(),
                field.data_type()
            );
        }
        Self {
            column_type: ColumnType::from_arrow_type(field.data_type()),
            values: PrimitiveArray { value_type, chunks },
            field,
        }
    }

    pub fn name(&self) -> &str {
        self.field.name()
    }

    pub fn column_type(&self) -> ColumnType {
        self.column_type
    }

    pub fn values(&self) -> &PrimitiveArray {
        &self.values
    }

    /// The categorical view of this column. Fails with `Invalid` for any
    /// other logical type.
    pub fn as_category(&self) -> Result<CategoryColumn, FeatherError> {
        if self.column_type != ColumnType::Category {
            return Err(FeatherError::NotCategorical(self.name().to_string()));
        }
        // Later batches carry the dictionary as of that batch, so the last
        // one is the complete set.
        let num_levels = self
            .values
            .chunks
            .last()
            .and_then(|chunk| chunk.as_any_dictionary_opt())
            .map(|dict| dict.values().len() as i64)
            .unwrap_or(0);
        Ok(CategoryColumn {
            ordered: self.field.dict_is_ordered().unwrap_or(false),
            num_levels,
            column: self.clone(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct CategoryColumn {
    column: Column,
    ordered: bool,
    num_levels: i64,
}

impl CategoryColumn {
    pub fn column(&self) -> &Column {
        &self.column
    }

    pub fn ordered(&self) -> bool {
        self.ordered
    }

    /// Number of entries in the category dictionary, taken from the last
    /// batch. A table with no batches has no dictionary and reports 0.
    pub fn num_levels(&self) -> i64 {
        self.num_levels
    }
}
