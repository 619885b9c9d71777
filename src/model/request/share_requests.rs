use rocket::serde::{Deserialize, Serialize};

/// the toggles in the share dialog. These are accepted so the dialog can post
/// its state, but they don't change what gets copied; every link behaves the
/// same regardless
#[derive(Deserialize, Serialize, Debug)]
#[serde(crate = "rocket::serde")]
pub struct ShareOptionsRequest {
    #[serde(rename = "allowDownloads", default = "default_allow_downloads")]
    pub allow_downloads: bool,
    #[serde(rename = "setExpiration", default)]
    pub set_expiration: bool,
    #[serde(rename = "passwordProtect", default)]
    pub password_protect: bool,
}

/// the dialog renders with downloads allowed
fn default_allow_downloads() -> bool {
    true
}
