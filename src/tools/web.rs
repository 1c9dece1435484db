use crate::tools::error::Error::CantCreateClient;
use crate::tools::error::Result;
use crate::tools::log_message_and_return;
use reqwest::Client;
use std::time::Duration;

const REQUEST_TIMEOUT_IN_SECONDS: u64 = 30;

pub fn build_client() -> Result<Client> {
    reqwest::ClientBuilder::new()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_IN_SECONDS))
        .build()
        .map_err(log_message_and_return(
            "Can't build HTTP client.",
            CantCreateClient,
        ))
}
