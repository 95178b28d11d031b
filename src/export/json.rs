//! JSON file export.
//!
//! The services response is written with 4-space indentation and object keys
//! in the order the API sent them, so the file mirrors the payload.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::config::JSON_INDENT;
use crate::error_handling::WriteError;

/// Serializes a value as pretty-printed JSON with 4-space indentation.
///
/// No trailing newline is appended.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(JSON_INDENT);
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    // serde_json only emits UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Writes a value to `filename` as pretty-printed JSON.
///
/// The path is resolved to an absolute form before the file is opened. An
/// existing file is overwritten.
///
/// # Arguments
///
/// * `value` - Value to write (the decoded API response)
/// * `filename` - Output path, relative to the working directory or absolute
///
/// # Returns
///
/// The absolute path written.
///
/// # Errors
///
/// Returns `WriteError::Io` if the path cannot be resolved or the file cannot
/// be written (missing directory, permissions, disk full), and
/// `WriteError::Serialize` if the value cannot be serialized.
pub async fn write_json<T: Serialize + ?Sized>(
    value: &T,
    filename: &Path,
) -> Result<PathBuf, WriteError> {
    let path = std::path::absolute(filename).map_err(|source| WriteError::Io {
        path: filename.to_path_buf(),
        source,
    })?;

    let text = to_pretty_json(value).map_err(|source| WriteError::Serialize {
        path: path.clone(),
        source,
    })?;

    let len = text.len();
    tokio::fs::write(&path, text)
        .await
        .map_err(|source| WriteError::Io {
            path: path.clone(),
            source,
        })?;

    log::debug!("Wrote {} bytes to {}", len, path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use tempfile::TempDir;

    #[test]
    fn test_to_pretty_json_uses_four_spaces() {
        let value = json!({"services": [{"id": 1, "name": "EC2"}]});
        let text = to_pretty_json(&value).expect("serializable");
        assert_eq!(
            text,
            "{\n    \"services\": [\n        {\n            \"id\": 1,\n            \"name\": \"EC2\"\n        }\n    ]\n}"
        );
    }

    #[test]
    fn test_to_pretty_json_preserves_key_order() {
        let value: Value =
            serde_json::from_str(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#).expect("valid json");
        let text = to_pretty_json(&value).expect("serializable");
        let zeta = text.find("zeta").expect("zeta present");
        let alpha = text.find("alpha").expect("alpha present");
        let mid = text.find("mid").expect("mid present");
        assert!(zeta < alpha && alpha < mid);
    }

    #[test]
    fn test_to_pretty_json_empty_containers() {
        assert_eq!(to_pretty_json(&json!({})).expect("serializable"), "{}");
        assert_eq!(to_pretty_json(&json!([])).expect("serializable"), "[]");
    }

    #[tokio::test]
    async fn test_write_json_creates_file() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let target = dir.path().join("services.json");
        let value = json!({"services": []});

        let written = write_json(&value, &target).await.expect("write succeeds");

        assert!(written.is_absolute());
        let content = std::fs::read_to_string(&written).expect("file readable");
        assert_eq!(content, "{\n    \"services\": []\n}");
    }

    #[tokio::test]
    async fn test_write_json_overwrites_existing_file() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let target = dir.path().join("services.json");
        std::fs::write(&target, "previous content that is much longer than the new one")
            .expect("seed file");

        write_json(&json!({}), &target).await.expect("write succeeds");

        assert_eq!(std::fs::read_to_string(&target).expect("readable"), "{}");
    }

    #[tokio::test]
    async fn test_write_json_missing_directory() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let target = dir.path().join("does-not-exist").join("services.json");

        let err = write_json(&json!({}), &target)
            .await
            .expect_err("missing directory should fail");

        match err {
            WriteError::Io { path, source } => {
                assert_eq!(path, target);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected I/O error, got {:?}", other),
        }
        assert!(!target.exists());
    }
}
