//! Fixture ingestion: JSON record collections on disk to pages.
//!
//! Two document layouts are accepted:
//! - a bare array of records, wrapped as page 1 holding every record;
//! - a full page object `{"page": .., "rpp": .., "payload": [..]}`.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::info;

use partial_core::Page;

/// Fixture loading failure.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse records: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parses a fixture document already in memory.
pub fn parse_page<T: DeserializeOwned>(bytes: &[u8]) -> Result<Page<T>, IngestError> {
    let first = bytes.iter().copied().find(|b| !b.is_ascii_whitespace());

    let page = match first {
        Some(b'[') => Page::single(serde_json::from_slice(bytes)?),
        _ => serde_json::from_slice(bytes)?,
    };
    Ok(page)
}

/// Reads and parses the fixture at `path`.
pub fn load_page<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Page<T>, IngestError> {
    let path = path.as_ref();
    let started = Instant::now();

    let bytes = fs::read(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let page = parse_page(&bytes)?;

    info!(
        source = %path.display(),
        records = page.len(),
        elapsed_s = started.elapsed().as_secs_f64(),
        "parsed fixture"
    );
    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use partial_users::User;
    use serde_json::Value;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("partial-infra-{}-{name}", std::process::id()))
    }

    #[test]
    fn bare_array_becomes_single_page() {
        let page: Page<Value> = parse_page(b"  \n[{\"a\": 1}, {\"a\": 2}, {}]").unwrap();
        assert_eq!(page.page(), 1);
        assert_eq!(page.records_per_page(), 3);
        assert_eq!(page.len(), 3);
    }

    #[test]
    fn page_object_keeps_its_metadata() {
        let doc = br#"{"page": 4, "rpp": 2, "payload": [{"first_name": "Ada"}]}"#;
        let page: Page<User> = parse_page(doc).unwrap();
        assert_eq!((page.page(), page.records_per_page()), (4, 2));
        assert_eq!(page.payload()[0].first_name, "Ada");
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let err = parse_page::<User>(b"[{\"age\": \"old\"}]").unwrap_err();
        assert!(matches!(err, IngestError::Parse(_)));

        let err = parse_page::<Value>(b"").unwrap_err();
        assert!(matches!(err, IngestError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = temp_path("does-not-exist.json");
        let err = load_page::<Value>(&path).unwrap_err();

        assert!(matches!(err, IngestError::Io { .. }));
        assert!(err.to_string().contains("does-not-exist.json"));
    }

    #[test]
    fn loads_fixture_from_disk() {
        let path = temp_path("users.json");
        fs::write(
            &path,
            r#"[{"id": "00000000-0000-0000-0000-000000000001", "first_name": "Grace", "tz": "UTC"}]"#,
        )
        .unwrap();

        let page: Page<User> = load_page(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(page.len(), 1);
        assert_eq!(page.payload()[0].time_zone, "UTC");
    }

    #[test]
    fn repository_mock_data_parses() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../mock_data.json");
        let page: Page<User> = load_page(path).unwrap();

        assert!(!page.is_empty());
        assert_eq!(page.records_per_page(), page.len() as u64);
    }
}
