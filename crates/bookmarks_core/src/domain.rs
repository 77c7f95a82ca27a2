//! crates/bookmarks_core/src/domain.rs
//!
//! Defines the passive data records exchanged with the bookmarks API.
//! Field names match the API's JSON exactly, so these structs deserialize
//! straight from response bodies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier used by every API record.
pub type Id = i64;

/// The logged in user's profile, as returned by the user details endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Id,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub telegram_id: Option<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
    /// Disk quota in Mb.
    #[serde(default)]
    pub disk_quota: i64,
    /// Disk space taken by the user's downloads, in Mb.
    #[serde(default)]
    pub disk_space_used: f64,
    #[serde(default)]
    pub is_staff: bool,
    #[serde(default)]
    pub is_superuser: bool,
    #[serde(default)]
    pub last_login: Option<DateTime<Utc>>,
    #[serde(default)]
    pub date_joined: Option<DateTime<Utc>>,
}

impl User {
    /// Full name when the profile has one, otherwise the username.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }
}

/// A user-created folder grouping bookmarks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    pub id: Id,
    pub user: Id,
    pub title: String,
    /// Only present in folder list responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bookmarks_qty: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: Id,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bookmarks_qty: Option<i64>,
}

/// Processing state of a download, encoded with the API's two-letter codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DownloadStatus {
    #[default]
    #[serde(rename = "PG")]
    Pending,
    #[serde(rename = "CD")]
    Completed,
    #[serde(rename = "FD")]
    Failed,
}

/// Content fetched from a bookmark's URL and packed into one file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Download {
    pub id: Id,
    pub title: Option<String>,
    #[serde(default)]
    pub status: DownloadStatus,
    pub file: Option<String>,
    /// File size in bytes.
    #[serde(default)]
    pub file_size: i64,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: Id,
    pub user: Id,
    pub url: String,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub folder: Option<Folder>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub download: Option<Download>,
    pub is_favorite: bool,
    #[serde(default)]
    pub is_read: bool,
    pub is_archived: bool,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bookmark_from_list_response() {
        let json = r#"{
            "id": 7,
            "user": 1,
            "url": "https://example.com/post",
            "title": "A post",
            "description": null,
            "image_url": "https://example.com/cover.png",
            "folder": {"id": 3, "user": 1, "title": "Reading"},
            "tags": [{"id": 1, "title": "rust"}, {"id": 2, "title": "web"}],
            "download": {
                "id": 11,
                "title": null,
                "status": "CD",
                "file": "/media/post.zip",
                "file_size": 2048,
                "created": "2023-05-01T10:00:00Z",
                "updated": "2023-05-01T10:05:00Z"
            },
            "is_favorite": true,
            "is_read": false,
            "is_archived": false,
            "created": "2023-05-01T09:59:00Z",
            "updated": "2023-05-01T10:05:00Z"
        }"#;

        let bookmark: Bookmark = serde_json::from_str(json).unwrap();
        assert_eq!(bookmark.folder.as_ref().map(|f| f.title.as_str()), Some("Reading"));
        assert_eq!(bookmark.tags.len(), 2);
        assert!(bookmark.description.is_none());
        let download = bookmark.download.unwrap();
        assert_eq!(download.status, DownloadStatus::Completed);
        assert_eq!(download.file_size, 2048);
        assert!(bookmark.is_favorite);
    }

    #[test]
    fn bookmark_without_folder_or_download() {
        let json = r#"{
            "id": 8, "user": 1, "url": "https://example.com", "title": "Home",
            "description": "", "image_url": null, "folder": null, "tags": [],
            "download": null, "is_favorite": false, "is_read": true,
            "is_archived": true,
            "created": "2023-05-01T09:59:00Z", "updated": "2023-05-01T09:59:00Z"
        }"#;

        let bookmark: Bookmark = serde_json::from_str(json).unwrap();
        assert!(bookmark.folder.is_none());
        assert!(bookmark.download.is_none());
        assert!(bookmark.is_read && bookmark.is_archived);
    }

    #[test]
    fn tag_list_carries_quantity() {
        let tags: Vec<Tag> =
            serde_json::from_str(r#"[{"id": 1, "title": "rust", "bookmarks_qty": 4}]"#).unwrap();
        assert_eq!(tags[0].bookmarks_qty, Some(4));

        let plain = serde_json::to_value(&Tag { id: 2, title: "go".into(), bookmarks_qty: None }).unwrap();
        assert!(plain.get("bookmarks_qty").is_none());
    }

    #[test]
    fn download_status_codes() {
        assert_eq!(serde_json::to_string(&DownloadStatus::Pending).unwrap(), r#""PG""#);
        assert_eq!(
            serde_json::from_str::<DownloadStatus>(r#""FD""#).unwrap(),
            DownloadStatus::Failed
        );
        assert!(serde_json::from_str::<DownloadStatus>(r#""XX""#).is_err());
    }

    #[test]
    fn user_profile_with_missing_optionals() {
        let user: User = serde_json::from_str(
            r#"{"id": 1, "username": "alice", "telegram_id": null, "disk_quota": 500}"#,
        )
        .unwrap();
        assert_eq!(user.disk_quota, 500);
        assert!(user.telegram_id.is_none());
        assert!(user.date_joined.is_none());
        assert_eq!(user.display_name(), "alice");
    }

    #[test]
    fn display_name_prefers_full_name() {
        let user = User {
            username: "alice".into(),
            first_name: "Alice".into(),
            last_name: "Liddell".into(),
            ..User::default()
        };
        assert_eq!(user.display_name(), "Alice Liddell");

        let first_only = User { last_name: String::new(), ..user };
        assert_eq!(first_only.display_name(), "Alice");
    }
}
