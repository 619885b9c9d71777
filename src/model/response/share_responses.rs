use rocket::serde::json::Json;

use crate::model::api::{FileApi, ShareLinkApi};
use crate::model::response::{BasicMessage, Notification};

#[derive(Responder)]
pub enum GetShareResponse {
    #[response(status = 404, content_type = "json")]
    FileNotFound(Json<BasicMessage>),
    #[response(status = 200, content_type = "json")]
    Success(Json<ShareLinkApi>),
}

#[derive(Responder)]
pub enum CopyShareResponse {
    /// the clipboard turned the write down, so nothing was copied
    #[response(status = 500, content_type = "json")]
    Failure(Json<Notification>),
    #[response(status = 200, content_type = "json")]
    Success(Json<Notification>),
}

#[derive(Responder)]
pub enum ResolveShareResponse {
    #[response(status = 404, content_type = "json")]
    LinkNotFound(Json<BasicMessage>),
    #[response(status = 200, content_type = "json")]
    Success(Json<FileApi>),
}
