#![deny(missing_docs)]

//! # Reference Resolution
//!
//! Helpers for turning `$ref` pointers into schema names.

use percent_encoding::percent_decode_str;

/// Extracts the simple name from a reference string.
/// e.g. `#/components/schemas/User` -> `User`
///
/// The last pointer segment is decoded (`~1`, `~0`, percent escapes).
/// Returns `None` if the reference ends with an empty segment.
pub fn extract_ref_name(ref_loc: &str) -> Option<String> {
    let segment = ref_loc.split('/').next_back()?;
    let name = decode_pointer_segment(segment);
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Decodes a JSON Pointer segment (handles `~1` and `~0`).
pub fn decode_pointer_segment(segment: &str) -> String {
    let decoded = segment.replace("~1", "/").replace("~0", "~");
    percent_decode_str(&decoded)
        .decode_utf8_lossy()
        .into_owned()
}
