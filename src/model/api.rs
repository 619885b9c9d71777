use chrono::NaiveDate;
use rocket::serde::{Deserialize, Serialize};

use crate::model::file_types::FileCategory;
use crate::model::platforms::Platform;
use crate::model::repository::{FileRecord, ShareLink};
use crate::util::format_size;

/// a catalog file the way the dashboard renders it. Sizes are already
/// formatted for display, so `2_400_000` bytes goes out as `2.4 MB`
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Hash, Clone)]
#[serde(crate = "rocket::serde")]
pub struct FileApi {
    pub id: String,
    pub name: String,
    pub size: String,
    #[serde(rename = "type")]
    pub file_type: FileCategory,
    pub platform: Platform,
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
    pub shared: bool,
    #[serde(rename = "shareLink", skip_serializing_if = "Option::is_none")]
    pub share_link: Option<String>,
}

impl From<&FileRecord> for FileApi {
    fn from(value: &FileRecord) -> Self {
        Self {
            id: value.id.clone(),
            name: value.name.clone(),
            size: format_size(value.size),
            file_type: value.file_type,
            platform: value.platform,
            date: value.date,
            folder: value.folder.clone(),
            shared: value.shared,
            share_link: value.share_link.clone(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone)]
#[serde(crate = "rocket::serde")]
pub struct ShareLinkApi {
    pub id: String,
    #[serde(rename = "fileId")]
    pub file_id: String,
    /// the full url to hand out, e.g. `https://clouddrive.app/s/1`
    pub url: String,
    pub token: String,
    #[serde(rename = "expiresAt", skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub downloads: u32,
    #[serde(rename = "maxDownloads", skip_serializing_if = "Option::is_none")]
    pub max_downloads: Option<u32>,
}

impl ShareLinkApi {
    pub fn from_with_url(link: ShareLink, url: String) -> Self {
        Self {
            id: link.id,
            file_id: link.file_id,
            url,
            token: link.token,
            expires_at: link.expires_at,
            password: link.password,
            downloads: link.downloads,
            max_downloads: link.max_downloads,
        }
    }
}
