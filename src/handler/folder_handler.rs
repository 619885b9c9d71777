use rocket::serde::json::Json;
use rocket::State;

use crate::model::error::folder_errors::GetFolderError;
use crate::model::response::folder_responses::{FolderApi, GetFolderResponse};
use crate::model::response::BasicMessage;
use crate::repository::SampleCatalog;
use crate::service::folder_service;

#[get("/")]
pub fn get_folders(catalog: &State<SampleCatalog>) -> Json<Vec<FolderApi>> {
    Json::from(folder_service::list_folders(catalog.inner()))
}

#[get("/<id>")]
pub fn get_folder(id: &str, catalog: &State<SampleCatalog>) -> GetFolderResponse {
    match folder_service::get_folder(catalog.inner(), id) {
        Ok(folder) => GetFolderResponse::Success(Json::from(folder)),
        Err(GetFolderError::NotFound) => GetFolderResponse::FolderNotFound(BasicMessage::new(
            "The folder with the passed id could not be found.",
        )),
    }
}
