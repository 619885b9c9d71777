#[macro_use]
extern crate rocket;

use std::sync::Mutex;
use std::time::SystemTime;

use rocket::{Build, Rocket};

use dashboard::handler::{dispatch_action, get_dashboard, login, logout, session_status};
use handler::{
    account_handler::{get_account, get_connections},
    api_handler::api_version,
    file_handler::{get_file, recent_files, search_files},
    folder_handler::{get_folder, get_folders},
    share_handler::{copy_share, get_share, resolve_share},
};

use crate::clipboard::SimulatedClipboard;
use crate::config::CLOUD_DRIVE_CONFIG;
use crate::dashboard::Session;
use crate::repository::SampleCatalog;

mod clipboard;
mod config;
mod dashboard;
mod handler;
mod model;
mod repository;
mod service;
#[cfg(test)]
mod test;
mod util;

fn configure_logging() {
    // only the first apply in a process can succeed, and tests build the
    // server repeatedly, so later failures get dropped
    let _ = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                humantime::format_rfc3339_seconds(SystemTime::now()),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(CLOUD_DRIVE_CONFIG.logging.level_filter())
        .chain(std::io::stdout())
        .apply();
}

/// builds the server around the passed clipboard so tests can hand in a
/// denying one
fn server(clipboard: SimulatedClipboard) -> Rocket<Build> {
    rocket::build()
        .manage(SampleCatalog::new())
        .manage(Mutex::new(Session::default()))
        .manage(clipboard)
        .mount("/api", routes![api_version])
        .mount("/files", routes![search_files, recent_files, get_file])
        .mount("/folders", routes![get_folders, get_folder])
        .mount("/account", routes![get_account, get_connections])
        .mount("/shares", routes![get_share, copy_share])
        .mount("/", routes![resolve_share])
        .mount(
            "/dashboard",
            routes![get_dashboard, dispatch_action, login, logout, session_status],
        )
}

#[launch]
fn rocket() -> Rocket<Build> {
    configure_logging();
    server(SimulatedClipboard::new())
}



#[cfg(test)]
mod folder_tests {
    use rocket::http::Status;
    use rocket::local::blocking::Client;

    use crate::model::response::folder_responses::{FolderApi, FolderDetailApi};
    use crate::model::response::BasicMessage;

    use super::rocket;

    fn client() -> Client {
        Client::tracked(rocket()).unwrap()
    }

    #[test]
    fn get_folders_lists_the_sidebar_folders() {
        let client = client();
        let res = client.get(uri!("/folders")).dispatch();
        assert_eq!(res.status(), Status::Ok);
        let body: Vec<FolderApi> = res.into_json().unwrap();
        assert_eq!(4, body.len());
        assert_eq!(
            FolderApi {
                id: String::from("1"),
                name: String::from("Work"),
                count: 12
            },
            body[0]
        );
    }

    #[test]
    fn get_folder_includes_its_files() {
        let client = client();
        let res = client.get(uri!("/folders/3")).dispatch();
        assert_eq!(res.status(), Status::Ok);
        let body: FolderDetailApi = res.into_json().unwrap();
        assert_eq!("Development", body.name);
        // the display count comes from the seed, not from the file list
        assert_eq!(24, body.count);
        assert_eq!(1, body.files.len());
        assert_eq!("Code Backup.zip", body.files[0].name);
    }

    #[test]
    fn get_folder_not_found() {
        let client = client();
        let res = client.get(uri!("/folders/999")).dispatch();
        assert_eq!(res.status(), Status::NotFound);
        let body: BasicMessage = res.into_json().unwrap();
        assert_eq!(
            body.message,
            String::from("The folder with the passed id could not be found.")
        );
    }
}
