//! Direct Drive links synthesized from a file id.
//!
//! The `webViewLink`/`webContentLink` fields the API returns are ignored on
//! purpose: the `uc?export=download` form downloads without the Drive preview
//! interstitial.

#[must_use]
pub fn download_link(file_id: &str) -> String {
    format!("https://drive.google.com/uc?export=download&id={file_id}")
}

#[must_use]
pub fn view_link(file_id: &str) -> String {
    format!("https://drive.google.com/file/d/{file_id}/view")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_link() {
        assert_eq!(
            download_link("abc123"),
            "https://drive.google.com/uc?export=download&id=abc123"
        );
    }

    #[test]
    fn test_view_link() {
        assert_eq!(view_link("abc123"), "https://drive.google.com/file/d/abc123/view");
    }
}
