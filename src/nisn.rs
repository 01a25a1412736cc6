use crate::error::{Result, SearchError};

pub const NISN_LEN: usize = 10;

/// A validated Nomor Induk Siswa Nasional: exactly 10 ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nisn(String);

impl Nisn {
    /// Validate a raw user-supplied string.
    ///
    /// The input is trimmed first. A trimmed-empty string fails with
    /// `EmptyInput`; anything that is not exactly 10 ASCII digits fails with
    /// `InvalidFormat`. The match is whole-string, no partial acceptance.
    ///
    /// # Errors
    ///
    /// Returns `EmptyInput` or `InvalidFormat` as described above.
    pub fn parse(raw: &str) -> Result<Self> {
        let clean = raw.trim();
        if clean.is_empty() {
            return Err(SearchError::EmptyInput);
        }
        if clean.len() != NISN_LEN || !clean.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SearchError::InvalidFormat);
        }
        Ok(Self(clean.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Nisn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Filter a keystroke-level input value: keep digits only, at most 10.
///
/// The input field stores only filtered values, so submitted strings are
/// always 0-10 digit characters.
#[must_use]
pub fn filter_input(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(NISN_LEN)
        .collect()
}
