#[macro_use]
extern crate log;

use dto::gender::Gender;
use gym_manager::admin;
use gym_manager::database;
use gym_manager::tools::env_args::retrieve_expected_arg_value;
use gym_manager::tools::log_error_and_return;
use std::process::exit;
use std::str::FromStr;

const USERNAME_ARG: &str = "--admin-username";
const PASSWORD_ARG: &str = "--admin-password";
const FIRST_NAME_ARG: &str = "--admin-first-name";
const LAST_NAME_ARG: &str = "--admin-last-name";
const GENDER_ARG: &str = "--admin-gender";

/// Provision one admin account. The web surface treats admins as read-only;
/// this binary is the only writer.
fn main() {
    env_logger::init();

    if run().is_err() {
        exit(1);
    }
}

fn run() -> Result<(), ()> {
    let username = retrieve_expected_arg_value(USERNAME_ARG, "The --admin-username argument is missing.")
        .map_err(log_error_and_return(()))?;
    let password = retrieve_expected_arg_value(PASSWORD_ARG, "The --admin-password argument is missing.")
        .map_err(log_error_and_return(()))?;
    let first_name =
        retrieve_expected_arg_value(FIRST_NAME_ARG, "The --admin-first-name argument is missing.")
            .map_err(log_error_and_return(()))?;
    let last_name =
        retrieve_expected_arg_value(LAST_NAME_ARG, "The --admin-last-name argument is missing.")
            .map_err(log_error_and_return(()))?;
    let gender = retrieve_expected_arg_value(GENDER_ARG, "The --admin-gender argument is missing.")
        .map_err(log_error_and_return(()))
        .and_then(|value| Gender::from_str(&value).map_err(log_error_and_return(())))?;

    // init_db rather than a bare connection: provisioning usually runs
    // before the server ever did, so the schema may not exist yet.
    let pool = database::init_db().map_err(log_error_and_return(()))?;
    let mut connection = pool.get().map_err(log_error_and_return(()))?;
    admin::provision(
        &mut connection,
        &username,
        &password,
        &first_name,
        &last_name,
        &gender,
    )
    .map_err(log_error_and_return(()))?;
    info!("Provisioned admin {username}");

    Ok(())
}
