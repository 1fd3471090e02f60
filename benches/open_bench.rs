// In benches/open_bench.rs

use std::ffi::CString;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, Int64Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::ipc::writer::FileWriter;
use arrow::record_batch::RecordBatch;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use feather_bridge::bridge::{
    feather_openFeatherTable, get_column, open_flat, open_table_with, FeatherMetadata,
    FlatRequest,
};
use feather_bridge::config::BridgeConfig;

// --- Fixture ---

const BENCH_ROWS: usize = 100_000;

/// Writes a two-column (Int64, Float64) Feather file of `rows` rows.
fn write_fixture(dir: &Path, rows: usize) -> PathBuf {
    let schema = Arc::new(Schema::new(vec![
        Field::new("id", DataType::Int64, false),
        Field::new("value", DataType::Float64, true),
    ]));
    let ids: ArrayRef = Arc::new(Int64Array::from_iter_values(0..rows as i64));
    let values: ArrayRef = Arc::new(Float64Array::from_iter_values(
        (0..rows).map(|i| i as f64 * 0.5),
    ));
    let batch = RecordBatch::try_new(schema.clone(), vec![ids, values]).unwrap();

    let path = dir.join("bench.feather");
    let mut writer = FileWriter::try_new(File::create(&path).unwrap(), &schema).unwrap();
    writer.write(&batch).unwrap();
    writer.finish().unwrap();
    path
}

// --- Benchmark Suite ---

fn bench_open_paths(c: &mut Criterion) {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(dir.path(), BENCH_ROWS);
    let c_path = CString::new(path.to_str().unwrap()).unwrap();
    let config = BridgeConfig::silent();

    let mut group = c.benchmark_group("Table Open");

    group.bench_function("Handle [1] open_table", |b| {
        b.iter(|| black_box(open_table_with(black_box(&path), &config).into_option()))
    });
    group.bench_function("Handle [2] open_table + get_column", |b| {
        b.iter(|| {
            let table = open_table_with(&path, &config).into_option().unwrap();
            black_box(get_column(&table, 1).into_option())
        })
    });
    group.bench_function("Flat [1] open_flat", |b| {
        b.iter(|| {
            let mut request = FlatRequest::new(path.to_str().unwrap());
            black_box(open_flat(&mut request, &config))
        })
    });
    // Goes through the process-wide config; set FEATHER_BRIDGE_CONFIG to silence it.
    group.bench_function("Flat [2] C entry point", |b| {
        b.iter(|| {
            let mut meta = FeatherMetadata {
                rows: 0,
                cols: 0,
                has_description: false,
                path: c_path.as_ptr(),
            };
            black_box(unsafe { feather_openFeatherTable(&mut meta) })
        })
    });

    group.finish();
}

// These two lines generate the main function and register the benchmark group.
criterion_group!(benches, bench_open_paths);
criterion_main!(benches);
