//! Feather fixtures shared by the unit tests.

use std::collections::HashMap;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use arrow::array::{
    ArrayRef, BinaryArray, BooleanArray, Date32Array, Date64Array, Decimal128Array,
    DictionaryArray, DurationSecondArray, Float32Array, Float64Array, Int16Array, Int32Array,
    Int64Array, Int8Array, StringArray, Time32MillisecondArray, Time64MicrosecondArray,
    TimestampMillisecondArray, UInt16Array, UInt32Array, UInt64Array, UInt8Array,
};
use arrow::datatypes::{DataType, Field, Int8Type, Schema, SchemaRef, TimeUnit};
use arrow::ipc::writer::FileWriter;
use arrow::record_batch::RecordBatch;

/// Routes `log` output through the test harness. Safe to call repeatedly.
pub fn init_logging() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Debug)
        .try_init();
}

pub fn write_feather(path: &Path, schema: SchemaRef, batches: &[RecordBatch]) {
    let file = File::create(path).unwrap();
    let mut writer = FileWriter::try_new(file, &schema).unwrap();
    for batch in batches {
        writer.write(batch).unwrap();
    }
    writer.finish().unwrap();
}

/// Writes a table of `num_columns` Int64 columns named `c0..` with `num_rows`
/// rows, optionally tagging the schema with one metadata entry.
pub fn write_table(
    dir: &Path,
    num_columns: usize,
    num_rows: usize,
    metadata: Option<(&str, &str)>,
) -> PathBuf {
    let fields: Vec<Field> = (0..num_columns)
        .map(|i| Field::new(format!("c{}", i), DataType::Int64, false))
        .collect();
    let metadata: HashMap<String, String> = metadata
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .into_iter()
        .collect();
    let schema = Arc::new(Schema::new_with_metadata(fields, metadata));

    let columns: Vec<ArrayRef> = (0..num_columns)
        .map(|c| {
            let values: Vec<i64> = (0..num_rows).map(|r| (r * num_columns + c) as i64).collect();
            Arc::new(Int64Array::from(values)) as ArrayRef
        })
        .collect();
    let batch = RecordBatch::try_new(schema.clone(), columns).unwrap();

    let path = dir.join(format!("table_{}x{}.feather", num_columns, num_rows));
    write_feather(&path, schema, &[batch]);
    path
}

/// A three-row table with a plain, a string, two categorical and a timestamp column.
pub fn mixed_table() -> (SchemaRef, RecordBatch) {
    let cat_type = DataType::Dictionary(Box::new(DataType::Int8), Box::new(DataType::Utf8));
    let schema = Arc::new(Schema::new(vec![
        Field::new("Aint32", DataType::Int32, true),
        Field::new("Autf8", DataType::Utf8, false),
        Field::new_dict("Acat", cat_type.clone(), false, 0, false),
        Field::new_dict("Acatordered", cat_type, false, 1, true),
        Field::new(
            "Adatetime",
            DataType::Timestamp(TimeUnit::Millisecond, None),
            false,
        ),
    ]));

    let acat = DictionaryArray::<Int8Type>::try_new(
        Int8Array::from(vec![0, 1, 2]),
        Arc::new(StringArray::from(vec!["a", "b", "c", "d"])),
    )
    .unwrap();
    let acatordered = DictionaryArray::<Int8Type>::try_new(
        Int8Array::from(vec![0, 1, 2]),
        Arc::new(StringArray::from(vec!["d", "e", "f"])),
    )
    .unwrap();

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(Int32Array::from(vec![Some(1), None, Some(0)])),
            Arc::new(StringArray::from(vec!["hey", "there", "sailor"])),
            Arc::new(acat),
            Arc::new(acatordered),
            Arc::new(TimestampMillisecondArray::from(vec![
                1_451_606_400_000,
                1_451_692_800_000,
                1_451_779_200_000,
            ])),
        ],
    )
    .unwrap();

    (schema, batch)
}

/// One column per Feather storage type, plus two Arrow types Feather has no
/// code for. Each entry pairs the column name with its expected
/// `(column_type, value_array_type)` codes.
pub const ALL_TYPES_CODES: [(&str, i32, i32); 21] = [
    ("Abool", 0, 0),
    ("Aint8", 0, 1),
    ("Aint16", 0, 2),
    ("Aint32", 0, 3),
    ("Aint64", 0, 4),
    ("Auint8", 0, 5),
    ("Auint16", 0, 6),
    ("Auint32", 0, 7),
    ("Auint64", 0, 8),
    ("Afloat32", 0, 9),
    ("Afloat64", 0, 10),
    ("Autf8", 0, 11),
    ("Abinary", 0, 12),
    ("Acat", 1, 1),
    ("Adatetime", 2, 4),
    ("Adate32", 3, 3),
    ("Adate64", 3, 4),
    ("Atime32", 4, 3),
    ("Atime64", 4, 4),
    ("Adecimal", 5, 17),
    ("Aduration", 5, 17),
];

/// A two-row table matching `ALL_TYPES_CODES` column for column.
pub fn all_types_table() -> (SchemaRef, RecordBatch) {
    let cat_type = DataType::Dictionary(Box::new(DataType::Int8), Box::new(DataType::Utf8));
    let schema = Arc::new(Schema::new(vec![
        Field::new("Abool", DataType::Boolean, true),
        Field::new("Aint8", DataType::Int8, true),
        Field::new("Aint16", DataType::Int16, true),
        Field::new("Aint32", DataType::Int32, true),
        Field::new("Aint64", DataType::Int64, true),
        Field::new("Auint8", DataType::UInt8, true),
        Field::new("Auint16", DataType::UInt16, true),
        Field::new("Auint32", DataType::UInt32, true),
        Field::new("Auint64", DataType::UInt64, true),
        Field::new("Afloat32", DataType::Float32, true),
        Field::new("Afloat64", DataType::Float64, true),
        Field::new("Autf8", DataType::Utf8, true),
        Field::new("Abinary", DataType::Binary, true),
        Field::new_dict("Acat", cat_type, false, 0, false),
        Field::new(
            "Adatetime",
            DataType::Timestamp(TimeUnit::Millisecond, None),
            true,
        ),
        Field::new("Adate32", DataType::Date32, true),
        Field::new("Adate64", DataType::Date64, true),
        Field::new("Atime32", DataType::Time32(TimeUnit::Millisecond), true),
        Field::new("Atime64", DataType::Time64(TimeUnit::Microsecond), true),
        Field::new("Adecimal", DataType::Decimal128(10, 2), true),
        Field::new("Aduration", DataType::Duration(TimeUnit::Second), true),
    ]));

    let acat = DictionaryArray::<Int8Type>::try_new(
        Int8Array::from(vec![0, 1]),
        Arc::new(StringArray::from(vec!["a", "b"])),
    )
    .unwrap();
    let decimals = Decimal128Array::from(vec![1_25, -3_50])
        .with_precision_and_scale(10, 2)
        .unwrap();

    let columns: Vec<ArrayRef> = vec![
        Arc::new(BooleanArray::from(vec![true, false])),
        Arc::new(Int8Array::from(vec![1, -1])),
        Arc::new(Int16Array::from(vec![1, -1])),
        Arc::new(Int32Array::from(vec![1, -1])),
        Arc::new(Int64Array::from(vec![1, -1])),
        Arc::new(UInt8Array::from(vec![1, 2])),
        Arc::new(UInt16Array::from(vec![1, 2])),
        Arc::new(UInt32Array::from(vec![1, 2])),
        Arc::new(UInt64Array::from(vec![1, 2])),
        Arc::new(Float32Array::from(vec![0.5, 1.5])),
        Arc::new(Float64Array::from(vec![0.5, 1.5])),
        Arc::new(StringArray::from(vec!["hey", "there"])),
        Arc::new(BinaryArray::from(vec![b"ab".as_ref(), b"cd".as_ref()])),
        Arc::new(acat),
        Arc::new(TimestampMillisecondArray::from(vec![1_451_606_400_000, 1_451_692_800_000])),
        Arc::new(Date32Array::from(vec![16_801, 16_802])),
        Arc::new(Date64Array::from(vec![1_451_606_400_000, 1_451_692_800_000])),
        Arc::new(Time32MillisecondArray::from(vec![1_000, 2_000])),
        Arc::new(Time64MicrosecondArray::from(vec![1_000_000, 2_000_000])),
        Arc::new(decimals),
        Arc::new(DurationSecondArray::from(vec![60, 120])),
    ];
    let batch = RecordBatch::try_new(schema.clone(), columns).unwrap();

    (schema, batch)
}
