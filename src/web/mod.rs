use crate::web::server::build_server;
use rocket::{Build, Rocket};

pub mod api;
pub mod authentication;
pub mod notice;
pub mod server;
pub mod session;
pub mod session_storage;

pub fn start_server() -> Rocket<Build> {
    build_server()
}
