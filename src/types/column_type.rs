//! The two discriminators a host can ask a column for.
//!
//! `ColumnType` is the logical, schema-level kind of a column and
//! `PrimitiveType` is the kind of array physically storing its values. Both
//! are derived from the Arrow field independently and neither is defined in
//! terms of the other. Their integer values follow the Feather numbering and
//! are part of the host contract. Arrow types outside the Feather set map
//! to `Other` on both sides, one past the last Feather code.

use arrow::datatypes::DataType as ArrowDataType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Logical column type.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(i32)]
pub enum ColumnType {
    Primitive = 0,
    Category = 1,
    Timestamp = 2,
    Date = 3,
    Time = 4,
    Other = 5,
}

impl ColumnType {
    /// Classifies an Arrow field type. Plain Feather value types are
    /// `Primitive`; nested, decimal, duration and the like are `Other`.
    pub fn from_arrow_type(arrow_type: &ArrowDataType) -> Self {
        match arrow_type {
            ArrowDataType::Dictionary(_, _) => Self::Category,
            ArrowDataType::Timestamp(_, _) => Self::Timestamp,
            ArrowDataType::Date32 | ArrowDataType::Date64 => Self::Date,
            ArrowDataType::Time32(_) | ArrowDataType::Time64(_) => Self::Time,
            ArrowDataType::Boolean
            | ArrowDataType::Int8
            | ArrowDataType::Int16
            | ArrowDataType::Int32
            | ArrowDataType::Int64
            | ArrowDataType::UInt8
            | ArrowDataType::UInt16
            | ArrowDataType::UInt32
            | ArrowDataType::UInt64
            | ArrowDataType::Float32
            | ArrowDataType::Float64
            | ArrowDataType::Utf8
            | ArrowDataType::LargeUtf8
            | ArrowDataType::Binary
            | ArrowDataType::LargeBinary => Self::Primitive,
            _ => Self::Other,
        }
    }

    pub fn code(&self) -> i32 {
        *self as i32
    }
}

/// Physical value-array type.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(i32)]
pub enum PrimitiveType {
    Bool = 0,
    Int8 = 1,
    Int16 = 2,
    Int32 = 3,
    Int64 = 4,
    UInt8 = 5,
    UInt16 = 6,
    UInt32 = 7,
    UInt64 = 8,
    Float = 9,
    Double = 10,
    Utf8 = 11,
    Binary = 12,
    Category = 13,
    Timestamp = 14,
    Date = 15,
    Time = 16,
    Other = 17,
}

impl PrimitiveType {
    /// Converts the Arrow type of a column's storage array into a `PrimitiveType`.
    ///
    /// Dictionary columns are stored as their key array, temporal columns as
    /// their integer storage. Anything without a Feather storage type, such as
    /// nested or decimal arrays, is `Other`.
    pub fn from_arrow_type(arrow_type: &ArrowDataType) -> Self {
        match arrow_type {
            ArrowDataType::Boolean => Self::Bool,
            ArrowDataType::Int8 => Self::Int8,
            ArrowDataType::Int16 => Self::Int16,
            ArrowDataType::Int32 => Self::Int32,
            ArrowDataType::Int64 => Self::Int64,
            ArrowDataType::UInt8 => Self::UInt8,
            ArrowDataType::UInt16 => Self::UInt16,
            ArrowDataType::UInt32 => Self::UInt32,
            ArrowDataType::UInt64 => Self::UInt64,
            ArrowDataType::Float32 => Self::Float,
            ArrowDataType::Float64 => Self::Double,
            ArrowDataType::Utf8 | ArrowDataType::LargeUtf8 => Self::Utf8,
            ArrowDataType::Binary | ArrowDataType::LargeBinary => Self::Binary,
            ArrowDataType::Dictionary(key, _) => Self::from_arrow_type(key),
            ArrowDataType::Timestamp(_, _)
            | ArrowDataType::Date64
            | ArrowDataType::Time64(_) => Self::Int64,
            ArrowDataType::Date32 | ArrowDataType::Time32(_) => Self::Int32,
            _ => Self::Other,
        }
    }

    /// True when the storage has a Feather type code in `0..=16`.
    pub fn is_supported(&self) -> bool {
        *self != Self::Other
    }

    pub fn code(&self) -> i32 {
        *self as i32
    }
}

/// Provides the canonical string representation for a `ColumnType`.
impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
