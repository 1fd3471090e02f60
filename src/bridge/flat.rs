// In: src/bridge/flat.rs

//! The flat-struct entry point, for hosts that can only exchange plain
//! fixed-layout records.
//!
//! The caller fills in `path`, calls `feather_openFeatherTable`, and reads
//! the counts back from the same record. No handle ever crosses this
//! boundary: the reader is opened, summarised and dropped inside the call.
//!
//! Contract: the return value is 0 on success. Anything else is the native
//! failure's platform code (or `EINVAL` for a malformed record) and the
//! output fields must not be trusted.

use std::ffi::CStr;
use std::os::raw::c_char;
use std::path::Path;

use crate::bridge::open::open_and_introspect;
use crate::bridge::status::check;
use crate::config::{self, BridgeConfig};
use crate::native::status::EINVAL;

/// The request/result record. Field order and types are part of the C ABI.
#[repr(C)]
#[derive(Debug)]
pub struct FeatherMetadata {
    pub rows: i64,
    pub cols: i64,
    pub has_description: bool,
    /// NUL-terminated UTF-8 path, owned by the caller.
    pub path: *const c_char,
}

/// The safe form of the request, used by Rust callers and by the C export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlatRequest {
    pub path: String,
    pub rows: i64,
    pub cols: i64,
    pub has_description: bool,
}

impl FlatRequest {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }
}

/// Opens `request.path` and writes its shape back into `request`.
pub fn open_flat(request: &mut FlatRequest, config: &BridgeConfig) -> i16 {
    if config.echo_flat_record {
        diag!(config, "{}", request.path);
    }
    let outcome = check(open_and_introspect(Path::new(&request.path), config), config);
    let status = outcome.status().posix_code();
    match outcome.into_option() {
        Some((_reader, summary)) => {
            request.rows = summary.num_rows;
            request.cols = summary.num_columns;
            request.has_description = summary.has_description;
            if config.echo_flat_record {
                diag!(
                    config,
                    "{}, {}, {}",
                    request.rows,
                    request.cols,
                    request.has_description
                );
            }
            0
        }
        None => status,
    }
}

/// C entry point. See the module docs for the contract.
///
/// # Safety
///
/// `meta` must be null or point to a valid, writable `FeatherMetadata` whose
/// `path` is null or a valid NUL-terminated string for the duration of the call.
#[no_mangle]
#[allow(non_snake_case)]
pub unsafe extern "C" fn feather_openFeatherTable(meta: *mut FeatherMetadata) -> i16 {
    let config = config::global();
    // SAFETY: the caller guarantees `meta` is either null or valid and writable.
    let Some(meta) = (unsafe { meta.as_mut() }) else {
        diag!(failure: &config, "Invalid: null metadata record");
        return EINVAL;
    };
    if meta.path.is_null() {
        diag!(failure: &config, "Invalid: null path");
        return EINVAL;
    }
    // SAFETY: non-null and NUL-terminated per the caller contract.
    let path = match unsafe { CStr::from_ptr(meta.path) }.to_str() {
        Ok(path) => path,
        Err(e) => {
            diag!(failure: &config, "Invalid: path is not UTF-8: {}", e);
            return EINVAL;
        }
    };

    let mut request = FlatRequest::new(path);
    let code = open_flat(&mut request, &config);
    if code == 0 {
        meta.rows = request.rows;
        meta.cols = request.cols;
        meta.has_description = request.has_description;
    }
    code
}
