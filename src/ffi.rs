use std::ffi::CStr;
use std::os::raw::{c_char, c_int};
use std::path::Path;

use tracing::error;

use crate::{convert_file, error::ConvertError, initialize_tracing};

pub const FFI_OK: c_int = 0;
pub const FFI_NOT_FOUND: c_int = 1;
pub const FFI_FAILED: c_int = 2;

static VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "\0");

#[no_mangle]
pub extern "C" fn ffi_version() -> *const c_char {
    VERSION.as_ptr() as *const c_char
}

/// Converts the file at `xml_file_path`, writing `<path>.kml` next to it.
///
/// # Safety
///
/// `xml_file_path` must be null or point to a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn ffi_convert(xml_file_path: *const c_char) -> c_int {
    initialize_tracing();
    if xml_file_path.is_null() {
        error!("ffi_convert called with a null path");
        return FFI_FAILED;
    }
    let c_str = CStr::from_ptr(xml_file_path);
    let Ok(path) = c_str.to_str() else {
        error!("ffi_convert called with a non UTF-8 path");
        return FFI_FAILED;
    };

    match convert_file(Path::new(path)) {
        Ok(_) => FFI_OK,
        Err(ConvertError::NotFound(path)) => {
            error!("File not found {:?}", path);
            FFI_NOT_FOUND
        }
        Err(e) => {
            error!("Failed to convert {:?}: {}", path, e);
            FFI_FAILED
        }
    }
}
