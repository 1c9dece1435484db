#[macro_use]
extern crate log;

use chrono::Local;
use gym_manager::database;
use gym_manager::error::Result;
use gym_manager::notification;
use gym_manager::notification::reminder::{birthday_intents, expiry_intents};
use gym_manager::notification::sms::SmsClient;
use gym_manager::notification::telegram::TelegramSink;
use gym_manager::tools::log_message_and_return;
use rocket::tokio::runtime::Runtime;
use rocket::tokio::time::sleep;
use std::process::exit;
use std::time::Duration;

const DELAY_BETWEEN_EXECUTIONS: Duration = Duration::from_secs(24 * 60 * 60);

/// Long-running companion process: once a day, queue birthday wishes and
/// expiry reminders for delivery. A failed run logs and waits for the next
/// day rather than dying.
fn main() {
    env_logger::init();

    let runtime = match Runtime::new() {
        Ok(runtime) => runtime,
        Err(error) => {
            error!("{error:#?}");
            exit(1);
        }
    };
    runtime.block_on(run_scheduler());
}

async fn run_scheduler() {
    loop {
        run_once()
            .await
            .unwrap_or_else(log_message_and_return("Reminder run failed", ()));
        sleep(DELAY_BETWEEN_EXECUTIONS).await;
    }
}

async fn run_once() -> Result<()> {
    let mut connection = database::establish_connection()?;
    let today = Local::now().date_naive();

    let mut intents = birthday_intents(&mut connection, today)?;
    intents.extend(expiry_intents(&mut connection, today)?);
    info!("Queueing {} reminder(s) for {today}", intents.len());

    let sms_client = SmsClient::from_env_args()
        .map_err(log_message_and_return("SMS gateway disabled", ()))
        .ok();
    let telegram = TelegramSink::from_env_args()
        .map_err(log_message_and_return("Telegram sink disabled", ()))
        .ok();

    let (queue, receiver) = notification::channel();
    for intent in intents {
        queue.enqueue(intent);
    }
    drop(queue);
    notification::run_worker(receiver, sms_client, telegram).await;

    Ok(())
}
