//! `TableReader`: an opened Feather file.
//!
//! Opening streams the file once through a buffered reader, records its shape
//! and metadata, and keeps the decoded batches as per-column chunks. Nothing is mutated after
//! `open_file` returns.

use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;

use arrow::array::ArrayRef;
use arrow::datatypes::SchemaRef;
use arrow::error::ArrowError;
use arrow::ipc::reader::FileReader;

use crate::error::FeatherError;
use crate::native::column::Column;

/// Bytes after the footer flatbuffer: its i32 length and the `ARROW1` magic.
const TRAILER_LEN: usize = 10;

#[derive(Debug)]
pub struct TableReader {
    schema: SchemaRef,
    chunks: Vec<Vec<ArrayRef>>,
    num_rows: i64,
    version: i64,
    description: Option<String>,
}

impl TableReader {
    /// Opens and decodes a Feather (Arrow IPC file) at `path`.
    ///
    /// `description_key` names the schema metadata entry read as the table
    /// description.
    pub fn open_file(path: impl AsRef<Path>, description_key: &str) -> Result<Self, FeatherError> {
        let mut file = BufReader::new(File::open(path.as_ref())?);
        let version = footer_version(&mut file)?;
        file.seek(SeekFrom::Start(0))?;
        let reader = FileReader::try_new(file, None)?;
        let schema = reader.schema();

        let mut chunks: Vec<Vec<ArrayRef>> = vec![Vec::new(); schema.fields().len()];
        let mut num_rows: i64 = 0;
        for batch in reader {
            let batch = batch?;
            num_rows += batch.num_rows() as i64;
            for (column, array) in chunks.iter_mut().zip(batch.columns()) {
                column.push(array.clone());
            }
        }

        let description = schema
            .metadata()
            .get(description_key)
            .filter(|text| !text.is_empty())
            .cloned();

        log::debug!(
            "opened {}: {} rows, {} columns, metadata version {}",
            path.as_ref().display(),
            num_rows,
            schema.fields().len(),
            version
        );

        Ok(Self {
            schema,
            chunks,
            num_rows,
            version,
            description,
        })
    }

    pub fn num_columns(&self) -> i64 {
        self.schema.fields().len() as i64
    }

    pub fn num_rows(&self) -> i64 {
        self.num_rows
    }

    /// The IPC metadata version recorded in the file footer.
    pub fn version(&self) -> i64 {
        self.version
    }

    /// True when the description metadata entry is present and non-empty.
    /// An empty entry is treated the same as a missing one.
    pub fn has_description(&self) -> bool {
        self.description.is_some()
    }

    /// The description text, or an empty string when the file has none.
    pub fn get_description(&self) -> String {
        self.description.clone().unwrap_or_default()
    }

    /// Materializes column `i`. Negative and past-the-end indices are a
    /// `KeyError`; every index in range succeeds.
    pub fn get_column(&self, i: i64) -> Result<Column, FeatherError> {
        let index = usize::try_from(i)
            .ok()
            .filter(|&index| index < self.chunks.len())
            .ok_or(FeatherError::ColumnIndex {
                index: i,
                num_columns: self.chunks.len(),
            })?;
        Ok(Column::new(
            self.schema.fields()[index].clone(),
            self.chunks[index].clone(),
        ))
    }
}

/// Reads the metadata version out of the IPC footer, leaving the cursor at
/// an unspecified position.
fn footer_version<R: Read + Seek>(file: &mut R) -> Result<i64, FeatherError> {
    let file_len = file.seek(SeekFrom::End(0))?;
    if file_len < TRAILER_LEN as u64 {
        return Err(ArrowError::ParseError("file too short for an IPC footer".into()).into());
    }
    file.seek(SeekFrom::End(-(TRAILER_LEN as i64)))?;
    let mut trailer = [0u8; TRAILER_LEN];
    file.read_exact(&mut trailer)?;

    let mut len_bytes = [0u8; 4];
    len_bytes.copy_from_slice(&trailer[..4]);
    let footer_len = u64::try_from(i32::from_le_bytes(len_bytes))
        .map_err(|_| ArrowError::ParseError("negative IPC footer length".into()))?;
    let start = (file_len - TRAILER_LEN as u64)
        .checked_sub(footer_len)
        .ok_or_else(|| ArrowError::ParseError("IPC footer length exceeds file size".into()))?;

    file.seek(SeekFrom::Start(start))?;
    let mut footer_bytes = vec![0u8; footer_len as usize];
    file.read_exact(&mut footer_bytes)?;
    let footer = arrow::ipc::root_as_footer(&footer_bytes)
        .map_err(|e| ArrowError::ParseError(format!("unable to read IPC footer: {}", e)))?;
    Ok(i64::from(footer.version().0))
}
