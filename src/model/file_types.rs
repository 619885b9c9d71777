use rocket::serde::{Deserialize, Serialize};

/// all the file categories the dashboard knows how to badge.
/// These are assigned when the catalog is seeded, not sniffed from contents
#[derive(Deserialize, Serialize, Debug, Eq, PartialEq, Hash, Copy, Clone)]
#[serde(crate = "rocket::serde", rename_all = "lowercase")]
pub enum FileCategory {
    Pdf,
    Video,
    Image,
    Doc,
    Zip,
    Other,
}
