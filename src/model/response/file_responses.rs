use rocket::serde::json::Json;

use crate::model::api::FileApi;
use crate::model::response::BasicMessage;

#[derive(Responder)]
pub enum GetFileResponse {
    #[response(status = 404, content_type = "json")]
    FileNotFound(Json<BasicMessage>),
    #[response(status = 200, content_type = "json")]
    Success(Json<FileApi>),
}
