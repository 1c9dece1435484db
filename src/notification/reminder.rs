use crate::database::dao;
use crate::database::error::DatabaseError;
use crate::notification::NotificationIntent;
use chrono::{Datelike, Days, NaiveDate};
use diesel::SqliteConnection;

/// How many days before the end of a membership the reminder goes out.
const REMINDER_LEAD_DAYS: u64 = 3;

type Result<T, E = DatabaseError> = std::result::Result<T, E>;

/// Birthday messages for every athlete born on today's month and day.
pub fn birthday_intents(
    connection: &mut SqliteConnection,
    today: NaiveDate,
) -> Result<Vec<NotificationIntent>> {
    let intents = dao::athlete::find_everyone(connection)?
        .into_iter()
        .filter(|athlete| {
            athlete
                .birth_date()
                .map(|birth_date| {
                    birth_date.month() == today.month() && birth_date.day() == today.day()
                })
                .unwrap_or(false)
        })
        .map(|athlete| NotificationIntent::BirthdaySms {
            first_name: athlete.first_name().clone(),
            phone: athlete.phone().clone(),
        })
        .collect();

    Ok(intents)
}

/// Expiry reminders for every athlete whose membership ends in exactly three
/// days. Lapsed or longer-running memberships stay quiet.
pub fn expiry_intents(
    connection: &mut SqliteConnection,
    today: NaiveDate,
) -> Result<Vec<NotificationIntent>> {
    let target_date = today + Days::new(REMINDER_LEAD_DAYS);
    let intents = dao::athlete::find_everyone(connection)?
        .into_iter()
        .filter(|athlete| {
            athlete
                .start_date()
                .checked_add_days(Days::new((*athlete.original_days()).max(0) as u64))
                == Some(target_date)
        })
        .map(|athlete| NotificationIntent::ExpiryReminderSms {
            first_name: athlete.first_name().clone(),
            phone: athlete.phone().clone(),
        })
        .collect();

    Ok(intents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::with_temp_database;
    use dto::athlete::Athlete;
    use dto::gender::Gender;

    fn establish_connection() -> SqliteConnection {
        crate::database::establish_connection().unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 5).unwrap()
    }

    fn athlete(id: i32, birth_date: Option<NaiveDate>, start_date: NaiveDate, days: i32) -> Athlete {
        Athlete::new(
            id,
            format!("First{id}"),
            format!("Last{id}"),
            Gender::Male,
            "9123456789".to_owned(),
            None,
            None,
            birth_date,
            start_date.and_hms_opt(9, 0, 0).unwrap(),
            start_date,
            days,
        )
    }

    #[test]
    fn should_find_birthdays_matching_month_and_day() {
        with_temp_database(|| {
            let mut connection = establish_connection();
            let born_today = NaiveDate::from_ymd_opt(1995, 8, 5).unwrap();
            let born_yesterday = NaiveDate::from_ymd_opt(1995, 8, 4).unwrap();
            dao::athlete::insert(&mut connection, &athlete(1001, Some(born_today), today(), 30))
                .unwrap();
            dao::athlete::insert(
                &mut connection,
                &athlete(1002, Some(born_yesterday), today(), 30),
            )
            .unwrap();
            dao::athlete::insert(&mut connection, &athlete(1003, None, today(), 30)).unwrap();

            let intents = birthday_intents(&mut connection, today()).unwrap();

            assert_eq!(
                vec![NotificationIntent::BirthdaySms {
                    first_name: "First1001".to_owned(),
                    phone: "9123456789".to_owned(),
                }],
                intents
            );
        })
    }

    #[test]
    fn should_find_memberships_ending_in_exactly_three_days() {
        with_temp_database(|| {
            let mut connection = establish_connection();
            // Ends on 2026-08-08: reminded.
            dao::athlete::insert(
                &mut connection,
                &athlete(2001, None, today() - Days::new(27), 30),
            )
            .unwrap();
            // Ends today: not reminded.
            dao::athlete::insert(
                &mut connection,
                &athlete(2002, None, today() - Days::new(30), 30),
            )
            .unwrap();
            // Ends in four days: not reminded.
            dao::athlete::insert(
                &mut connection,
                &athlete(2003, None, today() - Days::new(26), 30),
            )
            .unwrap();

            let intents = expiry_intents(&mut connection, today()).unwrap();

            assert_eq!(
                vec![NotificationIntent::ExpiryReminderSms {
                    first_name: "First2001".to_owned(),
                    phone: "9123456789".to_owned(),
                }],
                intents
            );
        })
    }
}
