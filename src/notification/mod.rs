use crate::notification::sms::{SmsClient, SmsPattern};
use crate::notification::telegram::TelegramSink;
use crate::tools::log_error_and_return;
use rocket::tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use rocket::tokio::time::{Duration, sleep};

pub mod error;
pub mod reminder;
pub mod sms;
pub mod telegram;

const MAX_DELIVERY_ATTEMPTS: u32 = 3;
const DELIVERY_RETRY_BASE_DELAY_IN_SECONDS: u64 = 1;

/// A message the system intends to send. Handlers enqueue these after their
/// own mutation committed; delivery is the worker's problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationIntent {
    WelcomeSms { first_name: String, phone: String },
    BirthdaySms { first_name: String, phone: String },
    ExpiryReminderSms { first_name: String, phone: String },
}

impl NotificationIntent {
    fn pattern(&self) -> SmsPattern {
        match self {
            NotificationIntent::WelcomeSms { .. } => SmsPattern::Welcome,
            NotificationIntent::BirthdaySms { .. } => SmsPattern::Birthday,
            NotificationIntent::ExpiryReminderSms { .. } => SmsPattern::ExpiryReminder,
        }
    }

    fn first_name(&self) -> &str {
        match self {
            NotificationIntent::WelcomeSms { first_name, .. }
            | NotificationIntent::BirthdaySms { first_name, .. }
            | NotificationIntent::ExpiryReminderSms { first_name, .. } => first_name,
        }
    }

    fn phone(&self) -> &str {
        match self {
            NotificationIntent::WelcomeSms { phone, .. }
            | NotificationIntent::BirthdaySms { phone, .. }
            | NotificationIntent::ExpiryReminderSms { phone, .. } => phone,
        }
    }
}

/// The sending half of the notification channel, shared as managed state.
/// Enqueueing never blocks and never fails the caller: a closed channel is
/// logged and the intent dropped.
pub struct NotificationQueue {
    sender: UnboundedSender<NotificationIntent>,
}

impl NotificationQueue {
    pub fn enqueue(&self, intent: NotificationIntent) {
        self.sender
            .send(intent)
            .unwrap_or_else(log_error_and_return(()));
    }
}

pub fn channel() -> (NotificationQueue, UnboundedReceiver<NotificationIntent>) {
    let (sender, receiver) = mpsc::unbounded_channel();

    (NotificationQueue { sender }, receiver)
}

/// Drain the queue until every sender is gone. Runs as a background task on
/// the server's runtime, decoupled from the request path: no delivery outcome
/// ever reaches a request handler.
pub async fn run_worker(
    mut receiver: UnboundedReceiver<NotificationIntent>,
    sms_client: Option<SmsClient>,
    telegram: Option<TelegramSink>,
) {
    while let Some(intent) = receiver.recv().await {
        deliver_with_retry(&sms_client, &telegram, &intent).await;
    }
}

async fn deliver_with_retry(
    sms_client: &Option<SmsClient>,
    telegram: &Option<TelegramSink>,
    intent: &NotificationIntent,
) {
    let Some(client) = sms_client else {
        warn!("SMS gateway not configured, dropping {intent:?}");
        return;
    };

    for attempt in 1..=MAX_DELIVERY_ATTEMPTS {
        match client
            .send(&intent.pattern(), intent.phone(), intent.first_name())
            .await
        {
            Ok(()) => {
                report(telegram, "Message sender returned : 200").await;
                return;
            }
            Err(error) if attempt < MAX_DELIVERY_ATTEMPTS => {
                warn!("Delivery attempt {attempt} failed, will retry.\n{error:#?}");
                sleep(Duration::from_secs(
                    DELIVERY_RETRY_BASE_DELAY_IN_SECONDS * u64::from(attempt),
                ))
                .await;
            }
            Err(error) => {
                error!("Giving up on {intent:?} after {attempt} attempts.\n{error:#?}");
                report(telegram, &format!("Critical Error : \n{error}")).await;
            }
        }
    }
}

async fn report(telegram: &Option<TelegramSink>, message: &str) {
    if let Some(sink) = telegram {
        sink.send(message)
            .await
            .unwrap_or_else(log_error_and_return(()));
    }
}
