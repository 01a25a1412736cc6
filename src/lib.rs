pub mod config;
pub mod drive;
pub mod error;
pub mod format;
pub mod links;
pub mod nisn;
pub mod query;

// Public, stable-ish API surface for consumers (UI / other crates)

pub use crate::config::{ConfigError, DriveConfig};

pub use crate::drive::{DriveClient, DriveFile};

pub use crate::error::{Result, SearchError};

pub use crate::format::{format_created, format_size};

pub use crate::links::{download_link, view_link};

pub use crate::nisn::{filter_input, Nisn, NISN_LEN};

pub mod prelude {
    pub use crate::config::{ConfigError, DriveConfig};
    pub use crate::drive::{DriveClient, DriveFile};
    pub use crate::error::{Result, SearchError};
    pub use crate::format::{format_created, format_size};
    pub use crate::links::{download_link, view_link};
    pub use crate::nisn::{filter_input, Nisn, NISN_LEN};
}
