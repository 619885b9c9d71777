use rocket::serde::json::Json;
use rocket::State;

use crate::model::response::account_responses::{AccountApi, ConnectionApi};
use crate::repository::SampleCatalog;
use crate::service::account_service;

#[get("/")]
pub fn get_account(catalog: &State<SampleCatalog>) -> Json<AccountApi> {
    Json::from(account_service::account_summary(catalog.inner()))
}

#[get("/connections")]
pub fn get_connections(catalog: &State<SampleCatalog>) -> Json<Vec<ConnectionApi>> {
    Json::from(account_service::connections(catalog.inner()))
}
