#[macro_use]
extern crate rocket;

use gym_manager::web::start_server;
use rocket::{Build, Rocket};

#[launch]
fn rocket() -> Rocket<Build> {
    env_logger::init();

    start_server()
}
