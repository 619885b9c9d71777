use chrono::NaiveDate;

use crate::model::file_types::FileCategory;
use crate::model::platforms::Platform;
use crate::model::repository::{FileRecord, Folder};
use crate::repository::SampleCatalog;

/// a file with every field the tests don't care about pinned to the same
/// plain pdf defaults
#[cfg(test)]
pub fn file_record(id: &str, name: &str, folder: Option<&str>) -> FileRecord {
    FileRecord {
        id: String::from(id),
        name: String::from(name),
        size: 2_400_000,
        file_type: FileCategory::Pdf,
        platform: Platform::Local,
        date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        folder: folder.map(String::from),
        shared: false,
        share_link: None,
    }
}

#[cfg(test)]
pub fn folder_record(id: &str, name: &str, count: u32) -> Folder {
    Folder {
        id: String::from(id),
        name: String::from(name),
        count,
    }
}

#[cfg(test)]
pub fn catalog_with(files: Vec<FileRecord>, folders: Vec<Folder>) -> SampleCatalog {
    SampleCatalog::with_records(files, folders)
}
