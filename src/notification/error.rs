use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum NotificationError {
    #[error("The --sms-api-key argument is missing.")]
    MissingSmsApiKey,
    #[error("The --telegram-bot-token argument is missing.")]
    MissingTelegramBotToken,
    #[error("The --telegram-chat-id argument is missing.")]
    MissingTelegramChatId,
    #[error("The gateway couldn't be reached.")]
    GatewayUnreachable,
    #[error("The gateway rejected the message with status {0}.")]
    GatewayRejected(u16),
    #[error(transparent)]
    Client(#[from] crate::tools::error::Error),
}
