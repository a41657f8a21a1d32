//! Extension labels used as report keys.

use compact_str::CompactString;

/// Label for files whose name has no extension.
pub const NO_EXTENSION: &str = "(NONE)";

/// Compute the extension label of a file name.
///
/// The label is everything after the final `.`, case preserved and without
/// the dot. Names without a dot map to [`NO_EXTENSION`], as does a suffix
/// that contains a path separator (a dot in a parent directory name).
pub fn extension_label(file_name: &str) -> CompactString {
    match file_name.rsplit_once('.') {
        Some((_, suffix)) if !suffix.contains(['/', '\\']) => CompactString::new(suffix),
        _ => CompactString::const_new(NO_EXTENSION),
    }
}

/// Format a label for display (`.rs`, or the no-extension label as is).
pub fn display_label(label: &str) -> String {
    if label == NO_EXTENSION {
        label.to_string()
    } else {
        format!(".{label}")
    }
}

/// Strip one leading dot from a requested extension.
pub fn normalize_extension(requested: &str) -> CompactString {
    CompactString::new(requested.strip_prefix('.').unwrap_or(requested))
}
