#[derive(PartialEq, Debug)]
pub enum GetShareError {
    /// the file the share link was requested for does not exist
    FileNotFound,
}

#[derive(PartialEq, Debug)]
pub enum CopyShareLinkError {
    /// the clipboard refused the write
    ClipboardDenied,
}
