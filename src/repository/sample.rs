use chrono::NaiveDate;

use crate::model::file_types::FileCategory;
use crate::model::platforms::Platform;
use crate::model::repository::{FileRecord, Folder, Plan, PlatformConnection, User};

use super::CatalogRepository;

/// the built-in catalog every instance of the app serves. The product is a
/// showcase, so the data never changes after construction
pub struct SampleCatalog {
    files: Vec<FileRecord>,
    folders: Vec<Folder>,
    user: User,
    connections: Vec<PlatformConnection>,
}

impl SampleCatalog {
    pub fn new() -> Self {
        Self {
            files: sample_files(),
            folders: sample_folders(),
            user: sample_user(),
            connections: sample_connections(),
        }
    }

    /// a catalog with the passed files and folders instead of the samples, for
    /// exercising edge cases the sample data can't reach
    #[cfg(test)]
    pub fn with_records(files: Vec<FileRecord>, folders: Vec<Folder>) -> Self {
        Self {
            files,
            folders,
            user: sample_user(),
            connections: sample_connections(),
        }
    }
}

impl CatalogRepository for SampleCatalog {
    fn files(&self) -> &[FileRecord] {
        &self.files
    }

    fn folders(&self) -> &[Folder] {
        &self.folders
    }

    fn user(&self) -> &User {
        &self.user
    }

    fn connections(&self) -> &[PlatformConnection] {
        &self.connections
    }
}

impl Default for SampleCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// all sample dates are days in january 2024
fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
}

fn file(
    id: &str,
    name: &str,
    size: u64,
    file_type: FileCategory,
    platform: Platform,
    date: NaiveDate,
    folder: Option<&str>,
) -> FileRecord {
    FileRecord {
        id: id.to_string(),
        name: name.to_string(),
        size,
        file_type,
        platform,
        date,
        folder: folder.map(String::from),
        shared: false,
        share_link: None,
    }
}

fn sample_files() -> Vec<FileRecord> {
    vec![
        file(
            "1",
            "Project Presentation.pdf",
            2_400_000,
            FileCategory::Pdf,
            Platform::Local,
            day(15),
            Some("Work"),
        ),
        file(
            "2",
            "Vacation Video.mp4",
            45_200_000,
            FileCategory::Video,
            Platform::Youtube,
            day(14),
            Some("Personal"),
        ),
        file(
            "3",
            "Code Backup.zip",
            12_800_000,
            FileCategory::Zip,
            Platform::Github,
            day(13),
            Some("Development"),
        ),
        file(
            "4",
            "Team Photo.jpg",
            3_100_000,
            FileCategory::Image,
            Platform::Telegram,
            day(12),
            Some("Personal"),
        ),
        file(
            "5",
            "Document.docx",
            1_200_000,
            FileCategory::Doc,
            Platform::Local,
            day(11),
            None,
        ),
        file(
            "6",
            "Tutorial Video.mp4",
            78_500_000,
            FileCategory::Video,
            Platform::Youtube,
            day(10),
            None,
        ),
    ]
}

fn sample_folders() -> Vec<Folder> {
    vec![
        Folder {
            id: "1".to_string(),
            name: "Work".to_string(),
            count: 12,
        },
        Folder {
            id: "2".to_string(),
            name: "Personal".to_string(),
            count: 8,
        },
        Folder {
            id: "3".to_string(),
            name: "Development".to_string(),
            count: 24,
        },
        Folder {
            id: "4".to_string(),
            name: "Shared".to_string(),
            count: 5,
        },
    ]
}

fn sample_user() -> User {
    User {
        id: "1".to_string(),
        name: "Kevin".to_string(),
        email: "kevin@clouddrive.app".to_string(),
        avatar: None,
        plan: Plan::Pro,
        storage_used: 45_200_000_000,
        storage_limit: 100_000_000_000,
    }
}

fn sample_connections() -> Vec<PlatformConnection> {
    vec![
        PlatformConnection {
            id: "1".to_string(),
            platform: Platform::Telegram,
            connected: true,
            username: None,
            avatar: None,
        },
        PlatformConnection {
            id: "2".to_string(),
            platform: Platform::Youtube,
            connected: true,
            username: None,
            avatar: None,
        },
        PlatformConnection {
            id: "3".to_string(),
            platform: Platform::Github,
            connected: true,
            username: None,
            avatar: None,
        },
    ]
}

#[cfg(test)]
mod sample_catalog_tests {
    use crate::repository::CatalogRepository;

    use super::SampleCatalog;

    #[test]
    fn seeds_six_files_in_order() {
        let catalog = SampleCatalog::new();
        let names: Vec<&str> = catalog
            .files()
            .iter()
            .map(|file| file.name.as_str())
            .collect();
        assert_eq!(
            vec![
                "Project Presentation.pdf",
                "Vacation Video.mp4",
                "Code Backup.zip",
                "Team Photo.jpg",
                "Document.docx",
                "Tutorial Video.mp4"
            ],
            names
        );
    }

    #[test]
    fn seeds_four_folders_with_display_counts() {
        let catalog = SampleCatalog::new();
        let counts: Vec<(&str, u32)> = catalog
            .folders()
            .iter()
            .map(|folder| (folder.name.as_str(), folder.count))
            .collect();
        assert_eq!(
            vec![
                ("Work", 12),
                ("Personal", 8),
                ("Development", 24),
                ("Shared", 5)
            ],
            counts
        );
    }

    #[test]
    fn every_connection_is_connected() {
        let catalog = SampleCatalog::new();
        assert_eq!(3, catalog.connections().len());
        assert!(catalog.connections().iter().all(|con| con.connected));
    }
}
