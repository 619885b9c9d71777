use rocket::serde::{Deserialize, Serialize};

/// the storage backend a file is indexed from. These are decorative tags on the
/// catalog records; no live platform integration exists behind them
#[derive(Deserialize, Serialize, Debug, Eq, PartialEq, Hash, Copy, Clone)]
#[serde(crate = "rocket::serde", rename_all = "lowercase")]
pub enum Platform {
    Telegram,
    Youtube,
    Github,
    Local,
}

/// the platform tab in the dashboard sidebar. `All` is the default and matches
/// every file; there is no `local` tab, local files only show under `All`
#[derive(Deserialize, Serialize, FromFormField, Debug, Eq, PartialEq, Copy, Clone)]
#[serde(crate = "rocket::serde", rename_all = "lowercase")]
pub enum PlatformFilter {
    All,
    Telegram,
    Youtube,
    Github,
}

impl PlatformFilter {
    /// whether a file on the passed platform is visible under this tab
    pub fn matches(self, platform: Platform) -> bool {
        match self {
            Self::All => true,
            Self::Telegram => platform == Platform::Telegram,
            Self::Youtube => platform == Platform::Youtube,
            Self::Github => platform == Platform::Github,
        }
    }
}

impl Default for PlatformFilter {
    fn default() -> Self {
        Self::All
    }
}
