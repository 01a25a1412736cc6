//! Drive v3 query-string construction.

/// Escape a value for interpolation inside single quotes in the Drive query
/// grammar. Validated NISNs are digits-only, but the folder id is opaque and
/// the grammar reserves `\` and `'`.
#[must_use]
pub fn escape_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Build the `q` parameter: files whose name contains the NISN, inside the
/// configured folder, excluding trashed files.
#[must_use]
pub fn build_query(nisn: &str, folder_id: &str) -> String {
    format!(
        "name contains '{}' and '{}' in parents and trashed = false",
        escape_value(nisn),
        escape_value(folder_id)
    )
}
