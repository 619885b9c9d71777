use crate::model::api::FileApi;
use crate::model::error::folder_errors::GetFolderError;
use crate::model::response::folder_responses::{FolderApi, FolderDetailApi};
use crate::repository::CatalogRepository;

pub fn list_folders(catalog: &impl CatalogRepository) -> Vec<FolderApi> {
    catalog.folders().iter().map(FolderApi::from).collect()
}

/// a folder plus the files the catalog assigns to it. Membership is by folder
/// name, and the advertised `count` is the stored display value regardless of
/// how many files actually come back
pub fn get_folder(
    catalog: &impl CatalogRepository,
    id: &str,
) -> Result<FolderDetailApi, GetFolderError> {
    let folder = catalog
        .folders()
        .iter()
        .find(|folder| folder.id == id)
        .ok_or(GetFolderError::NotFound)?;
    let files: Vec<FileApi> = catalog
        .files()
        .iter()
        .filter(|file| file.folder.as_deref() == Some(folder.name.as_str()))
        .map(FileApi::from)
        .collect();
    Ok(FolderDetailApi {
        id: folder.id.clone(),
        name: folder.name.clone(),
        count: folder.count,
        files,
    })
}
