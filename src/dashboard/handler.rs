use std::sync::Mutex;

use rocket::serde::json::Json;
use rocket::State;

use crate::model::response::Notification;
use crate::repository::SampleCatalog;
use crate::util::lock_mutex;

use super::models::{DashboardAction, DashboardView, Session, SessionStatus};
use super::service;

#[get("/")]
pub fn get_dashboard(
    catalog: &State<SampleCatalog>,
    session: &State<Mutex<Session>>,
) -> Json<DashboardView> {
    let session = lock_mutex(session, "session");
    Json::from(service::dashboard_view(catalog.inner(), &session.state))
}

/// applies an action to the session's dashboard state and hands back the
/// re-rendered view
#[post("/actions", data = "<action>")]
pub fn dispatch_action(
    action: Json<DashboardAction>,
    catalog: &State<SampleCatalog>,
    session: &State<Mutex<Session>>,
) -> Json<DashboardView> {
    let mut session = lock_mutex(session, "session");
    session.state = service::reduce(session.state.clone(), action.into_inner());
    Json::from(service::dashboard_view(catalog.inner(), &session.state))
}

#[post("/session")]
pub fn login(session: &State<Mutex<Session>>) -> Json<Notification> {
    let mut session = lock_mutex(session, "session");
    Json::from(service::login(&mut session))
}

#[delete("/session")]
pub fn logout(session: &State<Mutex<Session>>) -> Json<Notification> {
    let mut session = lock_mutex(session, "session");
    Json::from(service::logout(&mut session))
}

#[get("/session")]
pub fn session_status(session: &State<Mutex<Session>>) -> Json<SessionStatus> {
    let session = lock_mutex(session, "session");
    Json::from(SessionStatus {
        logged_in: session.logged_in,
    })
}
