use thiserror::Error;

pub type Result<T = (), E = SearchError> = std::result::Result<T, E>;

/// Classified outcome of a failed certificate search.
///
/// Every failure the client can produce is a distinct variant so callers can
/// branch on kind instead of parsing message text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("NISN must not be empty")]
    EmptyInput,

    #[error("NISN must be exactly 10 digits")]
    InvalidFormat,

    #[error("API key invalid or lacks Google Drive access")]
    Forbidden,

    #[error("Folder not found")]
    NotFound,

    #[error("An error occurred while searching; check your internet connection: {0}")]
    Network(String),

    #[error("Failed to access the Google Drive API (status {0})")]
    Api(u16),
}

impl SearchError {
    /// Translate error to Indonesian for UI display
    pub fn to_indonesian(&self) -> String {
        match self {
            Self::EmptyInput => "NISN tidak boleh kosong".to_string(),
            Self::InvalidFormat => "NISN harus berupa 10 digit angka".to_string(),
            Self::Forbidden => {
                "API Key tidak valid atau tidak memiliki akses ke Google Drive API".to_string()
            }
            Self::NotFound => "Folder tidak ditemukan".to_string(),
            Self::Network(_) => {
                "Terjadi kesalahan saat mencari file. Periksa koneksi internet Anda.".to_string()
            }
            Self::Api(_) => "Gagal mengakses Google Drive API".to_string(),
        }
    }
}
