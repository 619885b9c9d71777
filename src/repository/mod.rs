use crate::model::repository::{FileRecord, Folder, PlatformConnection, User};

pub mod sample;

pub use sample::SampleCatalog;

/// read access to the catalog the dashboard is built on. Everything is borrowed
/// straight out of the backing store since nothing in the app mutates it
pub trait CatalogRepository {
    /// every file in the catalog, in seeded order
    fn files(&self) -> &[FileRecord];
    /// the sidebar folders, in seeded order
    fn folders(&self) -> &[Folder];
    fn user(&self) -> &User;
    fn connections(&self) -> &[PlatformConnection];
}
