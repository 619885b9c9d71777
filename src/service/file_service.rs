use crate::model::error::file_errors::GetFileError;
use crate::model::platforms::PlatformFilter;
use crate::model::repository::FileRecord;
use crate::repository::CatalogRepository;

/// how many files the recents rail shows when the caller doesn't ask for a count
pub const DEFAULT_RECENT_COUNT: usize = 3;

/// the files the dashboard currently shows: every filter has to hold at once,
/// and the catalog's own ordering is preserved.
///
/// `selected_folder` is a folder id. An id that doesn't resolve to a folder
/// matches nothing at all, it does not fall back to "All Files"
pub fn visible_files<'a>(
    catalog: &'a impl CatalogRepository,
    selected_folder: Option<&str>,
    search_query: &str,
    active_tab: PlatformFilter,
) -> Vec<&'a FileRecord> {
    // resolve the folder id once up front instead of per file
    let folder_name: Option<Option<&str>> = selected_folder.map(|id| {
        catalog
            .folders()
            .iter()
            .find(|folder| folder.id == id)
            .map(|folder| folder.name.as_str())
    });
    let query = search_query.to_lowercase();
    catalog
        .files()
        .iter()
        .filter(|file| {
            let matches_search = file.name.to_lowercase().contains(query.as_str());
            let matches_folder = match folder_name {
                None => true,
                // the selected id resolved to no folder
                Some(None) => false,
                Some(Some(name)) => file.folder.as_deref() == Some(name),
            };
            let matches_tab = active_tab.matches(file.platform);
            matches_search && matches_folder && matches_tab
        })
        .collect()
}

pub fn get_file<'a>(
    catalog: &'a impl CatalogRepository,
    id: &str,
) -> Result<&'a FileRecord, GetFileError> {
    catalog
        .files()
        .iter()
        .find(|file| file.id == id)
        .ok_or(GetFileError::NotFound)
}

/// the newest `count` files. Files indexed on the same day stay in catalog
/// order relative to each other
pub fn recent_files(catalog: &impl CatalogRepository, count: usize) -> Vec<&FileRecord> {
    let mut files: Vec<&FileRecord> = catalog.files().iter().collect();
    // sort_by is stable, so same-day files keep their seeded order
    files.sort_by(|first, second| second.date.cmp(&first.date));
    files.truncate(count);
    files
}


#[cfg(test)]
mod get_file_tests {
    use crate::model::error::file_errors::GetFileError;
    use crate::repository::SampleCatalog;

    use super::get_file;

    #[test]
    fn finds_a_file_by_id() {
        let catalog = SampleCatalog::new();
        let found = get_file(&catalog, "3").unwrap();
        assert_eq!("Code Backup.zip", found.name);
    }

    #[test]
    fn missing_id_is_not_found() {
        let catalog = SampleCatalog::new();
        let err = get_file(&catalog, "999").unwrap_err();
        assert_eq!(GetFileError::NotFound, err);
    }
}
