// FFI bindings for C/C++/C#
use std::ffi::CStr;
use std::os::raw::{c_char, c_float, c_int};
use std::slice;

use crate::{DetResFilter, FilterConfig, ImageShape, Point2f, Quad};

/// Opaque handle to a configured box filter
pub struct DFHandle {
    inner: DetResFilter,
}

/// Create a filter with the reference settings
#[no_mangle]
pub extern "C" fn detfilter_new() -> *mut DFHandle {
    Box::into_raw(Box::new(DFHandle {
        inner: DetResFilter::default(),
    }))
}

/// Create a filter from a JSON `FilterConfig`; missing fields keep defaults.
/// Returns null on invalid input.
///
/// # Safety
/// config_json must be a valid null-terminated UTF-8 string
#[no_mangle]
pub unsafe extern "C" fn detfilter_new_from_json(config_json: *const c_char) -> *mut DFHandle {
    if config_json.is_null() {
        return std::ptr::null_mut();
    }

    let json = match CStr::from_ptr(config_json).to_str() {
        Ok(s) => s,
        Err(_) => return std::ptr::null_mut(),
    };

    match serde_json::from_str::<FilterConfig>(json) {
        Ok(cfg) => Box::into_raw(Box::new(DFHandle {
            inner: DetResFilter::new(cfg),
        })),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Filter `num_boxes` boxes laid out as `num_boxes * 4 * 2` floats
/// (x, y per corner).
///
/// Survivors are written to `boxes_out` in the same layout and their number
/// to `count_out`.
///
/// # Safety
/// - handle must be a valid pointer returned from detfilter_new*
/// - boxes must point to `num_boxes * 8` floats
/// - boxes_out must have room for `num_boxes * 8` floats
#[no_mangle]
pub unsafe extern "C" fn detfilter_filter_boxes(
    handle: *const DFHandle,
    boxes: *const c_float,
    num_boxes: usize,
    img_height: u32,
    img_width: u32,
    boxes_out: *mut c_float,
    count_out: *mut usize,
) -> c_int {
    if handle.is_null() || count_out.is_null() {
        return -1;
    }
    if num_boxes > 0 && (boxes.is_null() || boxes_out.is_null()) {
        return -1;
    }

    let Some(num_floats) = num_boxes.checked_mul(8) else {
        return -1;
    };

    let filter = &(*handle).inner;
    let quads: Vec<Quad> = if num_boxes == 0 {
        Vec::new()
    } else {
        slice::from_raw_parts(boxes, num_floats)
            .chunks_exact(8)
            .map(|c| {
                [
                    Point2f::new(c[0], c[1]),
                    Point2f::new(c[2], c[3]),
                    Point2f::new(c[4], c[5]),
                    Point2f::new(c[6], c[7]),
                ]
            })
            .collect()
    };

    let kept = filter.filter(&quads, ImageShape::new(img_height, img_width));
    if !kept.is_empty() {
        let out = slice::from_raw_parts_mut(boxes_out, kept.len() * 8);
        for (dst, quad) in out.chunks_exact_mut(8).zip(&kept) {
            for (i, p) in quad.iter().enumerate() {
                dst[i * 2] = p.x;
                dst[i * 2 + 1] = p.y;
            }
        }
    }
    *count_out = kept.len();

    0
}

/// Free a filter handle
///
/// # Safety
/// handle must be a valid pointer returned from detfilter_new*
#[no_mangle]
pub unsafe extern "C" fn detfilter_free(handle: *mut DFHandle) {
    if !handle.is_null() {
        drop(Box::from_raw(handle));
    }
}

/// Get library version
#[no_mangle]
pub extern "C" fn detfilter_version() -> *const c_char {
    static VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "\0");
    VERSION.as_ptr() as *const c_char
}
