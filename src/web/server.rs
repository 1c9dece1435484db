use crate::tools::env_args::retrieve_arg_value;
use crate::web::api::server::ApiServer;
use rocket::{Build, Rocket};

const PORT_ARG: &str = "--port";
const DEFAULT_PORT: i32 = 8000;

pub trait Server {
    fn initialize_managed_states(&self, rocket_build: Rocket<Build>) -> Rocket<Build>;
    fn mount_routes(&self, rocket_build: Rocket<Build>) -> Rocket<Build>;
}

pub fn build_server() -> Rocket<Build> {
    let port = get_port();
    let rocket_build =
        rocket::build().configure(rocket::Config::figment().merge(("port", port)));

    let servers: Vec<Box<dyn Server>> = vec![Box::new(ApiServer::new())];
    servers.iter().fold(rocket_build, |rocket_build, server| {
        server.mount_routes(server.initialize_managed_states(rocket_build))
    })
}

fn get_port() -> i32 {
    retrieve_arg_value(PORT_ARG)
        .map(|port| port.parse::<i32>().ok())
        .unwrap_or(None)
        .unwrap_or(DEFAULT_PORT)
}

#[cfg(test)]
mod tests {
    use crate::tools::env_args::with_env_args;
    use crate::web::server::{DEFAULT_PORT, PORT_ARG, get_port};

    #[test]
    fn should_get_custom_port() {
        let expected_port = 10;
        let port = with_env_args(vec![format!("{PORT_ARG}={expected_port}")], get_port);

        assert_eq!(expected_port, port);
    }

    #[test]
    fn should_get_default_port_when_wrong_type() {
        let port = with_env_args(vec![format!("{PORT_ARG}=doe")], get_port);

        assert_eq!(DEFAULT_PORT, port);
    }

    #[test]
    fn should_get_default_port_when_no_arg() {
        let port = with_env_args(vec![], get_port);

        assert_eq!(DEFAULT_PORT, port);
    }
}
