use rocket::serde::json::Json;
use rocket::State;

use crate::model::api::FileApi;
use crate::model::error::file_errors::GetFileError;
use crate::model::platforms::PlatformFilter;
use crate::model::response::file_responses::GetFileResponse;
use crate::model::response::BasicMessage;
use crate::repository::SampleCatalog;
use crate::service::file_service;

/// the file list with every dashboard filter available as a query parameter.
/// Leaving them all off returns the whole catalog
#[get("/?<search>&<folder>&<platform>")]
pub fn search_files(
    search: Option<&str>,
    folder: Option<&str>,
    platform: Option<PlatformFilter>,
    catalog: &State<SampleCatalog>,
) -> Json<Vec<FileApi>> {
    let files = file_service::visible_files(
        catalog.inner(),
        folder,
        search.unwrap_or_default(),
        platform.unwrap_or_default(),
    );
    Json::from(files.into_iter().map(FileApi::from).collect::<Vec<FileApi>>())
}

#[get("/recent?<count>")]
pub fn recent_files(count: Option<usize>, catalog: &State<SampleCatalog>) -> Json<Vec<FileApi>> {
    let files = file_service::recent_files(
        catalog.inner(),
        count.unwrap_or(file_service::DEFAULT_RECENT_COUNT),
    );
    Json::from(files.into_iter().map(FileApi::from).collect::<Vec<FileApi>>())
}

#[get("/<id>")]
pub fn get_file(id: &str, catalog: &State<SampleCatalog>) -> GetFileResponse {
    match file_service::get_file(catalog.inner(), id) {
        Ok(file) => GetFileResponse::Success(Json::from(FileApi::from(file))),
        Err(GetFileError::NotFound) => GetFileResponse::FileNotFound(BasicMessage::new(
            "The file with the passed id could not be found.",
        )),
    }
}
