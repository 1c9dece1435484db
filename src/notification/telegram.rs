use crate::notification::error::NotificationError;
use crate::notification::error::NotificationError::{
    GatewayRejected, GatewayUnreachable, MissingTelegramBotToken, MissingTelegramChatId,
};
use crate::tools::env_args::{retrieve_arg_value, retrieve_expected_arg_value};
use crate::tools::log_message_and_return;
use crate::tools::web::build_client;
use reqwest::Client;

const TELEGRAM_BOT_TOKEN_ARG: &str = "--telegram-bot-token";
const TELEGRAM_CHAT_ID_ARG: &str = "--telegram-chat-id";
const TELEGRAM_API_URL_ARG: &str = "--telegram-api-url";
const DEFAULT_API_URL: &str = "https://api.telegram.org";

type Result<T, E = NotificationError> = std::result::Result<T, E>;

/// Operational reporting sink: every gateway outcome lands in the owner's
/// Telegram chat. Strictly fire-and-forget.
pub struct TelegramSink {
    client: Client,
    api_url: String,
    bot_token: String,
    chat_id: String,
}

impl TelegramSink {
    pub fn new(api_url: String, bot_token: String, chat_id: String) -> Result<Self> {
        Ok(Self {
            client: build_client()?,
            api_url,
            bot_token,
            chat_id,
        })
    }

    pub fn from_env_args() -> Result<Self> {
        let bot_token =
            retrieve_expected_arg_value(TELEGRAM_BOT_TOKEN_ARG, MissingTelegramBotToken)?;
        let chat_id = retrieve_expected_arg_value(TELEGRAM_CHAT_ID_ARG, MissingTelegramChatId)?;
        let api_url = retrieve_arg_value(TELEGRAM_API_URL_ARG).unwrap_or(DEFAULT_API_URL.to_owned());

        Self::new(api_url, bot_token, chat_id)
    }

    pub async fn send(&self, message: &str) -> Result<()> {
        let url = format!("{}/bot{}/sendMessage", self.api_url, self.bot_token);
        let response = self
            .client
            .get(&url)
            .query(&[("chat_id", self.chat_id.as_str()), ("text", message)])
            .send()
            .await
            .map_err(log_message_and_return(
                "Couldn't reach the Telegram API",
                GatewayUnreachable,
            ))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(GatewayRejected(response.status().as_u16()))
        }
    }
}
