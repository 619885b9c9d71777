use std::sync::Mutex;

use rocket::serde::json::Json;
use rocket::State;

use crate::clipboard::SimulatedClipboard;
use crate::dashboard::service as dashboard_service;
use crate::dashboard::{DashboardAction, Session};
use crate::model::api::FileApi;
use crate::model::error::file_errors::GetFileError;
use crate::model::error::share_errors::{CopyShareLinkError, GetShareError};
use crate::model::request::share_requests::ShareOptionsRequest;
use crate::model::response::share_responses::{
    CopyShareResponse, GetShareResponse, ResolveShareResponse,
};
use crate::model::response::{BasicMessage, Notification};
use crate::repository::SampleCatalog;
use crate::service::{file_service, share_service};
use crate::util::lock_mutex;

#[get("/<file_id>")]
pub fn get_share(file_id: &str, catalog: &State<SampleCatalog>) -> GetShareResponse {
    match share_service::get_share_link(catalog.inner(), file_id) {
        Ok(link) => GetShareResponse::Success(Json::from(link)),
        Err(GetShareError::FileNotFound) => GetShareResponse::FileNotFound(BasicMessage::new(
            "The file with the passed id could not be found.",
        )),
    }
}

/// copies the file's share link to the clipboard. If the share dialog is open
/// on this file it gets closed, same as the dashboard does after a copy
#[post("/<file_id>/copy", data = "<options>")]
pub fn copy_share(
    file_id: &str,
    options: Option<Json<ShareOptionsRequest>>,
    clipboard: &State<SimulatedClipboard>,
    session: &State<Mutex<Session>>,
) -> CopyShareResponse {
    if let Some(options) = options {
        // the toggles are dialog cosmetics, they don't gate anything
        log::debug!("Ignoring share options {:?}", options.into_inner());
    }
    match share_service::copy_share_link(file_id, clipboard.inner()) {
        Ok(notification) => {
            let mut session = lock_mutex(session, "session");
            if session.state.share_dialog_open
                && session.state.selected_file.as_deref() == Some(file_id)
            {
                session.state = dashboard_service::reduce(
                    session.state.clone(),
                    DashboardAction::CloseShareDialog,
                );
            }
            CopyShareResponse::Success(Json::from(notification))
        }
        Err(CopyShareLinkError::ClipboardDenied) => {
            CopyShareResponse::Failure(Json::from(Notification::error(
                "Failed to copy share link to clipboard. Check server logs for details",
            )))
        }
    }
}

/// what a share url points at. The dashboard never calls this, it exists so
/// handed-out links resolve to something
#[get("/s/<file_id>")]
pub fn resolve_share(file_id: &str, catalog: &State<SampleCatalog>) -> ResolveShareResponse {
    match file_service::get_file(catalog.inner(), file_id) {
        Ok(file) => ResolveShareResponse::Success(Json::from(FileApi::from(file))),
        Err(GetFileError::NotFound) => ResolveShareResponse::LinkNotFound(BasicMessage::new(
            "The share link does not point to a known file.",
        )),
    }
}
