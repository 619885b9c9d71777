use rocket::serde::{Deserialize, Serialize};

use crate::model::platforms::Platform;
use crate::model::repository::{Plan, PlatformConnection};

/// storage usage the way the sidebar footer shows it, e.g. `45.2 GB` of
/// `100 GB` at `45` percent
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(crate = "rocket::serde")]
pub struct StorageApi {
    pub used: String,
    pub limit: String,
    pub percent: u8,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(crate = "rocket::serde")]
pub struct AccountApi {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub plan: Plan,
    pub storage: StorageApi,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(crate = "rocket::serde")]
pub struct ConnectionApi {
    pub id: String,
    pub platform: Platform,
    pub connected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl From<&PlatformConnection> for ConnectionApi {
    fn from(value: &PlatformConnection) -> Self {
        Self {
            id: value.id.clone(),
            platform: value.platform,
            connected: value.connected,
            username: value.username.clone(),
            avatar: value.avatar.clone(),
        }
    }
}
