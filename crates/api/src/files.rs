//! File records as reported by the remote service.
//!
//! A [`FileRecord`] is created only by deserializing a listing or upload
//! response; the client never constructs or mutates one outside of a
//! confirmed round trip. The server sends more fields than the client uses
//! (`owner_id`, `created_at`); unknown fields are ignored on
//! deserialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether a file is reachable without authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Anyone with the link can fetch the file.
    Public,
    /// Only the owner can fetch the file.
    Private,
}

impl Visibility {
    /// Returns the opposite visibility.
    pub fn toggled(self) -> Self {
        match self {
            Visibility::Public => Visibility::Private,
            Visibility::Private => Visibility::Public,
        }
    }

    /// Returns the wire name (`"public"` / `"private"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
        }
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One stored file as known to the client.
///
/// Records are immutable snapshots: the canonical set they live in is
/// replaced wholesale on every successful listing fetch, never patched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Opaque identifier assigned by the server; unique and immutable.
    pub id: String,

    /// The name the file was uploaded with; also the display name.
    pub original_name: String,

    /// File size in bytes.
    #[serde(rename = "size")]
    pub size_bytes: u64,

    /// Current visibility of the file.
    pub visibility: Visibility,

    /// Server-assigned modification instant; non-decreasing across
    /// successful mutations of the same record.
    pub updated_at: DateTime<Utc>,

    /// Server-reported content type. Informational only.
    #[serde(rename = "mime")]
    pub mime_type: String,
}

impl FileRecord {
    /// Lower-cased suffix of `original_name` after the last `.`, or
    /// `"file"` when the name has no dot.
    pub fn extension(&self) -> String {
        match self.original_name.rfind('.') {
            Some(i) => self.original_name[i + 1..].to_lowercase(),
            None => "file".to_string(),
        }
    }
}

/// Aggregate figures over the canonical record set.
///
/// Always computed from the full set, never from a filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingSummary {
    /// Number of records.
    pub count: usize,
    /// Sum of `size_bytes` over all records.
    pub total_bytes: u64,
    /// Number of records with public visibility.
    pub public_count: usize,
    /// Download count over the reporting window.
    ///
    /// Always 0. TODO: populate once the service exposes a download-count
    /// endpoint.
    pub total_downloads: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> FileRecord {
        FileRecord {
            id: "64f0c2a9e13d5b0001a0b0c0".to_string(),
            original_name: name.to_string(),
            size_bytes: 1024,
            visibility: Visibility::Private,
            updated_at: "2025-03-01T12:00:00Z".parse().unwrap(),
            mime_type: "application/octet-stream".to_string(),
        }
    }

    #[test]
    fn test_extension_simple() {
        assert_eq!(record("report.pdf").extension(), "pdf");
    }

    #[test]
    fn test_extension_is_lowercased() {
        assert_eq!(record("Report.PDF").extension(), "pdf");
    }

    #[test]
    fn test_extension_takes_last_dot() {
        assert_eq!(record("archive.tar.gz").extension(), "gz");
    }

    #[test]
    fn test_extension_without_dot_falls_back() {
        assert_eq!(record("README").extension(), "file");
    }

    #[test]
    fn test_extension_leading_dot() {
        assert_eq!(record(".bashrc").extension(), "bashrc");
    }

    #[test]
    fn test_visibility_toggled() {
        assert_eq!(Visibility::Public.toggled(), Visibility::Private);
        assert_eq!(Visibility::Private.toggled(), Visibility::Public);
    }

    #[test]
    fn test_visibility_toggled_twice_is_identity() {
        assert_eq!(Visibility::Public.toggled().toggled(), Visibility::Public);
    }

    #[test]
    fn test_visibility_wire_names() {
        assert_eq!(
            serde_json::to_string(&Visibility::Public).unwrap(),
            "\"public\""
        );
        assert_eq!(
            serde_json::to_string(&Visibility::Private).unwrap(),
            "\"private\""
        );
    }

    #[test]
    fn test_record_deserializes_wire_names() {
        let json = r#"{
            "id": "64f0c2a9e13d5b0001a0b0c0",
            "owner_id": "64f0c2a9e13d5b0001a0b0ff",
            "original_name": "notes.txt",
            "mime": "text/plain",
            "size": 345,
            "visibility": "public",
            "created_at": "2025-02-28T09:30:00Z",
            "updated_at": "2025-03-01T12:00:00Z"
        }"#;

        let rec: FileRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.id, "64f0c2a9e13d5b0001a0b0c0");
        assert_eq!(rec.original_name, "notes.txt");
        assert_eq!(rec.size_bytes, 345);
        assert_eq!(rec.visibility, Visibility::Public);
        assert_eq!(rec.mime_type, "text/plain");
        assert_eq!(
            rec.updated_at,
            "2025-03-01T12:00:00Z".parse::<DateTime<Utc>>().unwrap()
        );
    }

    #[test]
    fn test_record_serializes_wire_names() {
        let json = serde_json::to_value(record("notes.txt")).unwrap();
        assert!(json.get("size").is_some());
        assert!(json.get("mime").is_some());
        assert!(json.get("size_bytes").is_none());
        assert!(json.get("mime_type").is_none());
    }
}
