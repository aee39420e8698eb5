//! PID and file name rules.

/// Extension carried by every indexed document.
pub const JSON_EXTENSION: &str = "json";

/// Stem of catalog files, which are never indexed as data.
pub const CATALOG_STEM: &str = "catalog";

/// Returns true if `s` is a canonical PID: ASCII decimal digits with no sign
/// and no leading zero (other than `"0"` itself).
///
/// There is no upper bound on length, so PIDs are never parsed into a fixed
/// width integer.
pub fn is_valid_pid(s: &str) -> bool {
    let bytes = s.as_bytes();
    match bytes {
        [] => false,
        [b'0'] => true,
        [b'0', ..] => false,
        _ => bytes.iter().all(u8::is_ascii_digit),
    }
}

/// Extracts the PID from a document file name such as `295374.json`.
///
/// Returns `None` for names that do not split into exactly a stem and a
/// `json` extension, for `catalog.json`, and for stems that are not valid PIDs.
pub(crate) fn pid_from_file_name(name: &str) -> Option<&str> {
    let mut parts = name.split('.');
    let (Some(stem), Some(ext), None) = (parts.next(), parts.next(), parts.next()) else {
        return None;
    };
    if ext != JSON_EXTENSION || stem == CATALOG_STEM {
        return None;
    }
    is_valid_pid(stem).then_some(stem)
}
