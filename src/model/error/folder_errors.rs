#[derive(PartialEq, Debug)]
pub enum GetFolderError {
    NotFound,
}
