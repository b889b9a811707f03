//! Turns the base64 ZIP payload of a generation result into bytes on disk.

use base64::{engine::general_purpose, Engine as _};
use std::path::Path;

pub const ZIP_CONTENT_TYPE: &str = "application/zip";
pub const DEFAULT_ARCHIVE_NAME: &str = "minisite.zip";

/// A decoded binary payload, tagged with the content type it was served as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteArchive {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

impl SiteArchive {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, &self.bytes)?;
        log::info!("wrote {} bytes to {}", self.bytes.len(), path.display());
        Ok(())
    }
}

/// Decode a base64 payload into a [`SiteArchive`].
///
/// Returns `None` for empty input (the service sends the ZIP only once its
/// dependency install has completed) and for undecodable input; never panics.
pub fn materialize(encoded: &str, content_type: &str) -> Option<SiteArchive> {
    if encoded.is_empty() {
        return None;
    }
    match general_purpose::STANDARD.decode(encoded) {
        Ok(bytes) => Some(SiteArchive {
            bytes,
            content_type: content_type.to_string(),
        }),
        Err(e) => {
            log::warn!("archive payload is not valid base64: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_nothing() {
        assert!(materialize("", ZIP_CONTENT_TYPE).is_none());
    }

    #[test]
    fn invalid_base64_yields_nothing() {
        assert!(materialize("not base64!!!", ZIP_CONTENT_TYPE).is_none());
    }

    #[test]
    fn decoded_length_matches_payload() {
        // "AAAA" decodes to three zero bytes
        let archive = materialize("AAAA", ZIP_CONTENT_TYPE).unwrap();
        assert_eq!(archive.len(), 3);
        assert_eq!(archive.bytes, vec![0, 0, 0]);
        assert_eq!(archive.content_type, ZIP_CONTENT_TYPE);
    }

    #[test]
    fn round_trips_through_reencoding() {
        let encoded = general_purpose::STANDARD.encode(b"PK\x03\x04 minimal zip bytes");
        let archive = materialize(&encoded, ZIP_CONTENT_TYPE).unwrap();
        assert_eq!(general_purpose::STANDARD.encode(&archive.bytes), encoded);
    }

    #[test]
    fn save_writes_exact_bytes() {
        let archive = materialize("aGVsbG8=", ZIP_CONTENT_TYPE).unwrap();
        let path = std::env::temp_dir().join("minisite-archive-test.zip");
        archive.save_to(&path).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"hello");
        let _ = std::fs::remove_file(&path);
    }
}
