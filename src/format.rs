//! Human-readable formatting for file metadata.

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Format a byte count with two decimals and the largest fitting unit.
///
/// Drive omits `size` for some file types (native Docs), and a zero size is
/// not worth showing, so both render as "Unknown". The unit table stops at
/// GB; larger values clamp to GB instead of indexing past the table.
#[must_use]
pub fn format_size(bytes: Option<u64>) -> String {
    let bytes = match bytes {
        None | Some(0) => return "Unknown".to_string(),
        Some(b) => b,
    };

    let i = (bytes.ilog(1024) as usize).min(SIZE_UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(i as i32);
    format!("{value:.2} {}", SIZE_UNITS[i])
}

/// Render a Drive `createdTime` (RFC 3339) as an Indonesian-style short date.
///
/// Falls back to the raw string when the timestamp does not parse.
#[must_use]
pub fn format_created(created_time: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(created_time) {
        Ok(dt) => dt.format("%-d/%-m/%Y").to_string(),
        Err(_) => created_time.to_string(),
    }
}
