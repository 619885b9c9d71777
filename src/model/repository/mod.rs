use chrono::NaiveDate;
use rocket::serde::{Deserialize, Serialize};

use super::file_types::FileCategory;
use super::platforms::Platform;

/// a file entry in the catalog. These are seeded once at startup and never
/// written back, so sizes are raw byte counts and dates are plain days
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct FileRecord {
    pub id: String,
    pub name: String,
    /// raw size in bytes; formatted for display at the api boundary
    pub size: u64,
    pub file_type: FileCategory,
    pub platform: Platform,
    /// the day the file was indexed
    pub date: NaiveDate,
    /// the display name of the folder the file sits in. `None` means the file
    /// only shows under "All Files"
    pub folder: Option<String>,
    pub shared: bool,
    pub share_link: Option<String>,
}

/// a sidebar folder. `count` is the display count seeded with the folder and is
/// never recomputed from the catalog, so it may disagree with the number of
/// files actually assigned to the folder
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct Folder {
    pub id: String,
    pub name: String,
    pub count: u32,
}

#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Hash, Copy, Clone)]
#[serde(crate = "rocket::serde", rename_all = "lowercase")]
pub enum Plan {
    Free,
    Basic,
    Pro,
    Business,
}

/// the single account the catalog is seeded with
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
    pub plan: Plan,
    /// raw byte counts; formatted at the api boundary
    pub storage_used: u64,
    pub storage_limit: u64,
}

/// a linked platform account shown on the connections page. Purely decorative,
/// nothing is ever synced through these
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct PlatformConnection {
    pub id: String,
    pub platform: Platform,
    pub connected: bool,
    pub username: Option<String>,
    pub avatar: Option<String>,
}

/// a share link for a file. Links are derived on demand from the file id, so
/// the expiry / password / download fields always carry their defaults
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ShareLink {
    pub id: String,
    pub file_id: String,
    pub token: String,
    pub expires_at: Option<NaiveDate>,
    pub password: Option<String>,
    pub downloads: u32,
    pub max_downloads: Option<u32>,
}
