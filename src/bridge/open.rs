// In: src/bridge/open.rs

//! The Table-Open operation and the routine both host surfaces share.

use std::path::Path;

use crate::bridge::handles::TableHandle;
use crate::bridge::status::{check, Outcome};
use crate::config::{self, BridgeConfig};
use crate::error::FeatherError;
use crate::native::TableReader;

/// The metadata the flat entry point reports, captured at open time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSummary {
    pub num_rows: i64,
    pub num_columns: i64,
    pub has_description: bool,
}

/// Opens the file and reads off its summary. The handle-based and the
/// flat-record surfaces are both thin adapters over this.
pub(crate) fn open_and_introspect(
    path: &Path,
    config: &BridgeConfig,
) -> Result<(TableReader, TableSummary), FeatherError> {
    let reader = TableReader::open_file(path, &config.description_key)?;
    let summary = TableSummary {
        num_rows: reader.num_rows(),
        num_columns: reader.num_columns(),
        has_description: reader.has_description(),
    };
    Ok((reader, summary))
}

/// Opens `path` with the process-wide config.
pub fn open_table(path: impl AsRef<Path>) -> Outcome<TableHandle> {
    open_table_with(path, &config::global())
}

/// Opens `path` into a table handle.
///
/// The bridge does not check that the file exists or looks like Feather; the
/// reader does. On failure there is no handle, the diagnostic has been
/// written to the sink, and the returned status carries text and code.
pub fn open_table_with(path: impl AsRef<Path>, config: &BridgeConfig) -> Outcome<TableHandle> {
    let path = path.as_ref();
    log::debug!("open_table {}", path.display());
    check(open_and_introspect(path, config), config).map(|(reader, _)| TableHandle::new(reader))
}
