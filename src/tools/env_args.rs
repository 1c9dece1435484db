#[cfg(test)]
use std::cell::RefCell;
#[cfg(not(test))]
use std::env;

/// Retrieve the value of a `--name=value` pair passed to the app.
pub fn retrieve_arg_value(arg_name: &str) -> Option<String> {
    let arg_prefix = format!("{arg_name}=");
    get_env_args()
        .into_iter()
        .find(|arg| arg.starts_with(&arg_prefix))
        .and_then(|arg| arg.split_once('=').map(|(_, value)| value.to_owned()))
}

/// Retrieve an arg value, failing with the given error when absent.
pub fn retrieve_expected_arg_value<E>(arg_name: &str, error_if_missing: E) -> Result<String, E> {
    retrieve_arg_value(arg_name).ok_or(error_if_missing)
}

#[cfg(not(test))]
fn get_env_args() -> Vec<String> {
    env::args().collect()
}

#[cfg(test)]
thread_local! {
    /// A mutable `Vec<String>` to host env args for tests.
    /// When a test is run with `with_env_args`,
    /// the inner `Vec` is set to whatever param is passed.
    /// It is then reset to its previous state.
    static ENV_ARGS: RefCell<Vec<String>> = const { RefCell::new(vec![]) };
}
#[cfg(test)]
fn get_env_args() -> Vec<String> {
    ENV_ARGS.with(|vec| vec.clone().into_inner())
}

#[cfg(test)]
/// When running tests, env args are swapped in from within the app.
/// Wrap your test with this function to set them up.
pub fn with_env_args<F, T>(mut args: Vec<String>, function: F) -> T
where
    F: FnOnce() -> T,
{
    ENV_ARGS.with(|refcell| {
        let global_env_args = std::env::args().collect::<Vec<String>>();
        args.extend_from_slice(&global_env_args);
        let old_value = refcell.replace(args);
        let result = function();
        refcell.replace(old_value);
        result
    })
}

#[cfg(test)]
pub mod tests {
    use crate::tools::env_args::{retrieve_arg_value, retrieve_expected_arg_value, with_env_args};
    use parameterized::{ide, parameterized};

    ide!();

    #[parameterized(
        args = {vec!["--database-url=gym.db".to_owned()], vec!["--port=9000".to_owned()], vec!["--another-arg=wrong".to_owned()]},
        arg_name = {"--database-url", "--port", "--port"},
        expected_result = {Some("gym.db".to_owned()), Some("9000".to_owned()), None}
    )]
    fn should_retrieve_arg_value(
        args: Vec<String>,
        arg_name: &str,
        expected_result: Option<String>,
    ) {
        let result = with_env_args(args, || retrieve_arg_value(arg_name));
        assert_eq!(expected_result, result);
    }

    #[test]
    fn should_retrieve_expected_arg_value() {
        let arg_name = "--arg-name";
        let arg_value = "arg-value";
        let error = "error!";
        let args = vec![format!("{arg_name}={arg_value}")];

        let result = with_env_args(args, || retrieve_expected_arg_value(arg_name, error)).unwrap();

        assert_eq!(arg_value, result);
    }

    #[test]
    fn should_fail_to_retrieve_expected_arg_value() {
        let arg_name = "--arg-name";
        let error = "error!";

        let result = retrieve_expected_arg_value(arg_name, error).unwrap_err();

        assert_eq!(error, result);
    }
}
