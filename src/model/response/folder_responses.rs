use rocket::serde::{json::Json, Deserialize, Serialize};

use crate::model::api::FileApi;
use crate::model::repository::Folder;
use crate::model::response::BasicMessage;

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(crate = "rocket::serde")]
pub struct FolderApi {
    pub id: String,
    pub name: String,
    /// the seeded display count, not the number of files the catalog actually
    /// holds for this folder
    pub count: u32,
}

impl From<&Folder> for FolderApi {
    fn from(value: &Folder) -> Self {
        Self {
            id: value.id.clone(),
            name: value.name.clone(),
            count: value.count,
        }
    }
}

/// a single folder plus the catalog files assigned to it
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(crate = "rocket::serde")]
pub struct FolderDetailApi {
    pub id: String,
    pub name: String,
    pub count: u32,
    pub files: Vec<FileApi>,
}

#[derive(Responder)]
pub enum GetFolderResponse {
    #[response(status = 404, content_type = "json")]
    FolderNotFound(Json<BasicMessage>),
    #[response(status = 200, content_type = "json")]
    Success(Json<FolderDetailApi>),
}
