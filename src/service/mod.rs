pub mod account_service;
pub mod file_service;
pub mod folder_service;
pub mod share_service;
