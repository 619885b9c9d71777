pub mod account_handler;
pub mod api_handler;
pub mod file_handler;
pub mod folder_handler;
pub mod share_handler;
