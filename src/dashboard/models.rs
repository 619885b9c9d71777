use rocket::serde::{Deserialize, Serialize};

use crate::model::api::FileApi;
use crate::model::platforms::PlatformFilter;
use crate::model::response::folder_responses::FolderApi;

/// how the file list is laid out. Purely cosmetic, the visible set is the same
/// either way
#[derive(Deserialize, Serialize, Debug, Eq, PartialEq, Copy, Clone)]
#[serde(crate = "rocket::serde", rename_all = "lowercase")]
pub enum ViewMode {
    Grid,
    List,
}

impl Default for ViewMode {
    fn default() -> Self {
        Self::Grid
    }
}

/// everything the dashboard tracks between actions. A fresh state is the
/// dashboard as it looks right after login: grid view, no folder, no query,
/// the all tab, and no dialogs open
#[derive(Deserialize, Serialize, Debug, PartialEq, Clone, Default)]
#[serde(crate = "rocket::serde")]
pub struct DashboardState {
    #[serde(rename = "viewMode")]
    pub view_mode: ViewMode,
    #[serde(rename = "selectedFolder", skip_serializing_if = "Option::is_none")]
    pub selected_folder: Option<String>,
    #[serde(rename = "searchQuery")]
    pub search_query: String,
    #[serde(rename = "activeTab")]
    pub active_tab: PlatformFilter,
    /// the file the share dialog was opened for. Kept even while the dialog is
    /// closed so reopening shows the same file
    #[serde(rename = "selectedFile", skip_serializing_if = "Option::is_none")]
    pub selected_file: Option<String>,
    #[serde(rename = "shareDialogOpen")]
    pub share_dialog_open: bool,
    #[serde(rename = "uploadDialogOpen")]
    pub upload_dialog_open: bool,
}

/// a discrete user action posted back from the dashboard
#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
#[serde(crate = "rocket::serde", tag = "type", rename_all = "camelCase")]
pub enum DashboardAction {
    SetSearch {
        query: String,
    },
    /// selecting the already-selected folder deselects it
    SelectFolder {
        #[serde(rename = "folderId")]
        folder_id: String,
    },
    SetTab {
        tab: PlatformFilter,
    },
    SetViewMode {
        mode: ViewMode,
    },
    OpenShareDialog {
        #[serde(rename = "fileId")]
        file_id: String,
    },
    CloseShareDialog,
    OpenUploadDialog,
    CloseUploadDialog,
}

/// the mock login. Nothing is authenticated; the flag just decides whether the
/// dashboard or the landing page shows
#[derive(Debug, Default)]
pub struct Session {
    pub logged_in: bool,
    pub state: DashboardState,
}

#[derive(Deserialize, Serialize, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct SessionStatus {
    #[serde(rename = "loggedIn")]
    pub logged_in: bool,
}

/// one full render of the dashboard for the current state
#[derive(Deserialize, Serialize, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct DashboardView {
    pub state: DashboardState,
    /// the heading over the file list: the selected folder's name, or
    /// "All Files" when nothing (or nothing known) is selected
    pub title: String,
    #[serde(rename = "fileCount")]
    pub file_count: usize,
    pub files: Vec<FileApi>,
    pub folders: Vec<FolderApi>,
}
