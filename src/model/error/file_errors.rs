#[derive(PartialEq, Debug)]
pub enum GetFileError {
    /// no file with the requested id in the catalog
    NotFound,
}
