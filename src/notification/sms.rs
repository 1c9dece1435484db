use crate::notification::error::NotificationError;
use crate::notification::error::NotificationError::{
    GatewayRejected, GatewayUnreachable, MissingSmsApiKey,
};
use crate::tools::env_args::{retrieve_arg_value, retrieve_expected_arg_value};
use crate::tools::log_message_and_return;
use crate::tools::web::build_client;
use reqwest::Client;

const SMS_API_KEY_ARG: &str = "--sms-api-key";
const SMS_SENDER_LINE_ARG: &str = "--sms-sender-line";
const SMS_GATEWAY_URL_ARG: &str = "--sms-gateway-url";
const DEFAULT_GATEWAY_URL: &str = "https://edge.ippanel.com/v1";
const DEFAULT_SENDER_LINE: &str = "+983000505";

type Result<T, E = NotificationError> = std::result::Result<T, E>;

/// The transactional messages the gym sends, each a fixed provider template
/// taking the athlete's first name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SmsPattern {
    Welcome,
    Birthday,
    ExpiryReminder,
}

impl SmsPattern {
    fn render(&self, first_name: &str) -> String {
        match self {
            SmsPattern::Welcome => {
                format!("{first_name} عزیز به باشگاه کیاپارس خوش امدید\nhttps://midn.me/BT9Dml")
            }
            SmsPattern::Birthday => format!("{first_name} زادروزت مبارک باد"),
            SmsPattern::ExpiryReminder => {
                format!("{first_name} عزیز سررسید دوره باشگاه شما 3 روزدیگر فرامیرسد")
            }
        }
    }
}

/// Client for the SMS provider's GET webservice endpoint.
pub struct SmsClient {
    client: Client,
    gateway_url: String,
    api_key: String,
    sender_line: String,
}

impl SmsClient {
    pub fn new(gateway_url: String, api_key: String, sender_line: String) -> Result<Self> {
        Ok(Self {
            client: build_client()?,
            gateway_url,
            api_key,
            sender_line,
        })
    }

    pub fn from_env_args() -> Result<Self> {
        let api_key = retrieve_expected_arg_value(SMS_API_KEY_ARG, MissingSmsApiKey)?;
        let gateway_url =
            retrieve_arg_value(SMS_GATEWAY_URL_ARG).unwrap_or(DEFAULT_GATEWAY_URL.to_owned());
        let sender_line =
            retrieve_arg_value(SMS_SENDER_LINE_ARG).unwrap_or(DEFAULT_SENDER_LINE.to_owned());

        Self::new(gateway_url, api_key, sender_line)
    }

    pub async fn send(&self, pattern: &SmsPattern, phone: &str, first_name: &str) -> Result<()> {
        let message = pattern.render(first_name);
        let recipient = format!("+98{phone}");
        let url = format!("{}/api/send/webservice", self.gateway_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("from", self.sender_line.as_str()),
                ("message", message.as_str()),
                ("to", recipient.as_str()),
                ("apikey", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(log_message_and_return(
                "Couldn't reach the SMS gateway",
                GatewayUnreachable,
            ))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(GatewayRejected(response.status().as_u16()))
        }
    }
}
