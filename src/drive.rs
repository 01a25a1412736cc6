//! Google Drive v3 `files.list` client scoped to one certificate folder.

use crate::config::DriveConfig;
use crate::error::{Result, SearchError};
use crate::nisn::Nisn;
use crate::query;
use serde::Deserialize;

const DRIVE_FILES_URL: &str = "https://www.googleapis.com/drive/v3/files";

/// Restricted projection; everything the result rows need and nothing else.
const FILE_FIELDS: &str =
    "files(id, name, mimeType, webViewLink, webContentLink, size, createdTime)";

/// One file entry from the listing response.
///
/// `size` is an int64 the API serializes as a JSON string, and it is absent
/// for native Docs formats, so it deserializes leniently to `Option<u64>`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveFile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub mime_type: String,
    #[serde(default)]
    pub web_view_link: Option<String>,
    #[serde(default)]
    pub web_content_link: Option<String>,
    #[serde(default, deserialize_with = "deserialize_size")]
    pub size: Option<u64>,
    #[serde(default)]
    pub created_time: String,
}

#[derive(Debug, Deserialize)]
struct FileList {
    #[serde(default)]
    files: Vec<DriveFile>,
}

fn deserialize_size<'de, D>(deserializer: D) -> std::result::Result<Option<u64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawSize {
        Number(u64),
        Text(String),
    }

    match Option::<RawSize>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawSize::Number(n)) => Ok(Some(n)),
        Some(RawSize::Text(s)) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

fn map_status(status: u16) -> SearchError {
    match status {
        403 => SearchError::Forbidden,
        404 => SearchError::NotFound,
        other => SearchError::Api(other),
    }
}

/// Search client for the configured certificate folder.
#[derive(Debug, Clone)]
pub struct DriveClient {
    http: reqwest::Client,
    config: DriveConfig,
    endpoint: String,
}

impl DriveClient {
    #[must_use]
    pub fn new(config: DriveConfig) -> Self {
        Self::with_endpoint(config, DRIVE_FILES_URL)
    }

    /// Same client against a different listing endpoint. Used by tests to
    /// point at a local stub server.
    #[must_use]
    pub fn with_endpoint(config: DriveConfig, endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            endpoint: endpoint.into(),
        }
    }

    /// Find certificate files whose name contains the given NISN.
    ///
    /// Returns the provider-ordered list, possibly empty. Exactly one request
    /// is made per call; nothing is retried.
    ///
    /// # Errors
    ///
    /// `EmptyInput`/`InvalidFormat` from validation, `Forbidden` on 403,
    /// `NotFound` on 404, `Api` on any other non-2xx status, and `Network`
    /// for transport failures or an unparseable body.
    pub async fn search(&self, raw_nisn: &str) -> Result<Vec<DriveFile>> {
        let nisn = Nisn::parse(raw_nisn)?;
        let q = query::build_query(nisn.as_str(), &self.config.folder_id);

        let response = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("q", q.as_str()),
                ("key", self.config.api_key.as_str()),
                ("fields", FILE_FIELDS),
            ])
            .send()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // The error body carries no signal the UI can use; the status
            // code alone decides the classification.
            return Err(map_status(status.as_u16()));
        }

        let list: FileList = response
            .json()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;
        Ok(list.files)
    }
}
