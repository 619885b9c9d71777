use crate::model::api::FileApi;
use crate::model::response::Notification;
use crate::repository::CatalogRepository;
use crate::service::{file_service, folder_service};

use super::models::{DashboardAction, DashboardState, DashboardView, Session};

/// applies one user action to the dashboard state. Pure; rendering is a
/// separate pass over the result
pub fn reduce(state: DashboardState, action: DashboardAction) -> DashboardState {
    let mut next = state;
    match action {
        DashboardAction::SetSearch { query } => next.search_query = query,
        DashboardAction::SelectFolder { folder_id } => {
            // clicking the selected folder again clears the selection
            if next.selected_folder.as_deref() == Some(folder_id.as_str()) {
                next.selected_folder = None;
            } else {
                next.selected_folder = Some(folder_id);
            }
        }
        DashboardAction::SetTab { tab } => next.active_tab = tab,
        DashboardAction::SetViewMode { mode } => next.view_mode = mode,
        DashboardAction::OpenShareDialog { file_id } => {
            next.selected_file = Some(file_id);
            next.share_dialog_open = true;
        }
        // the selected file is kept so the dialog can reopen on the same file
        DashboardAction::CloseShareDialog => next.share_dialog_open = false,
        DashboardAction::OpenUploadDialog => next.upload_dialog_open = true,
        DashboardAction::CloseUploadDialog => next.upload_dialog_open = false,
    }
    next
}

pub fn dashboard_view(catalog: &impl CatalogRepository, state: &DashboardState) -> DashboardView {
    let files: Vec<FileApi> = file_service::visible_files(
        catalog,
        state.selected_folder.as_deref(),
        &state.search_query,
        state.active_tab,
    )
    .into_iter()
    .map(FileApi::from)
    .collect();
    // an unknown folder id empties the list but the heading stays "All Files"
    let title = state
        .selected_folder
        .as_deref()
        .and_then(|id| catalog.folders().iter().find(|folder| folder.id == id))
        .map(|folder| folder.name.clone())
        .unwrap_or_else(|| "All Files".to_string());
    DashboardView {
        state: state.clone(),
        title,
        file_count: files.len(),
        files,
        folders: folder_service::list_folders(catalog),
    }
}

pub fn login(session: &mut Session) -> Notification {
    session.logged_in = true;
    Notification::success("Welcome to CloudDrive!")
}

/// flips the session back to logged out and resets the dashboard, so the next
/// login starts from a fresh screen
pub fn logout(session: &mut Session) -> Notification {
    session.logged_in = false;
    session.state = DashboardState::default();
    Notification::success("Logged out successfully")
}
