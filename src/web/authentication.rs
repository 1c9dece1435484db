use crate::tools::log_error_and_return;
use crate::web::session::AdminSession;
use crate::web::session_storage::SessionStorage;
use rocket::State;
use rocket::http::Status;
use rocket::outcome::{Outcome, try_outcome};
use rocket::request::{self, FromRequest, Request};
use std::sync::Mutex;

pub const SESSION_COOKIE: &str = "Gym-Admin-Session";

/// Every gated endpoint takes an [AdminSession] parameter. Rocket summons
/// this guard to resolve the private session cookie against the storage; a
/// missing or expired token yields an Unauthorized status.
#[rocket::async_trait]
impl<'r> FromRequest<'r> for AdminSession {
    type Error = ();

    async fn from_request(req: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        if let Some(cookie) = req.cookies().get_private(SESSION_COOKIE) {
            let session_storage = try_outcome!(req.guard::<&State<Mutex<SessionStorage>>>().await);
            match session_storage.lock() {
                Ok(mut session_storage) => match session_storage.get(cookie.value()) {
                    None => Outcome::Forward(Status::Unauthorized),
                    Some(session) => Outcome::Success(session.clone()),
                },
                Err(error) => {
                    log_error_and_return(Outcome::Error((Status::InternalServerError, ())))(error)
                }
            }
        } else {
            Outcome::Forward(Status::Unauthorized)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::session::tests::male_session;
    use rocket::http::Cookie;
    use rocket::local::asynchronous::Client;

    #[async_test]
    async fn should_resolve_stored_session() {
        let mut session_storage = SessionStorage::default();
        let token = "0ea9a5fb-0f46-4057-902a-2552ed956bde".to_owned();
        session_storage.store(token.clone(), male_session());
        let session_storage_mutex = Mutex::new(session_storage);

        let rocket = rocket::build().manage(session_storage_mutex);
        let client = Client::tracked(rocket).await.unwrap();
        let request = client
            .get("http://localhost")
            .private_cookie(Cookie::new(SESSION_COOKIE, token));

        let outcome = AdminSession::from_request(&request).await;

        assert_eq!(Some(male_session()), outcome.succeeded());
    }

    #[async_test]
    async fn should_forward_when_no_matching_session() {
        let session_storage_mutex = Mutex::new(SessionStorage::default());

        let rocket = rocket::build().manage(session_storage_mutex);
        let client = Client::tracked(rocket).await.unwrap();
        let request = client
            .get("http://localhost")
            .private_cookie(Cookie::new(SESSION_COOKIE, "unknown-token"));

        let outcome = AdminSession::from_request(&request).await;

        assert!(outcome.is_forward());
        assert_eq!(Status::Unauthorized, outcome.forwarded().unwrap());
    }

    #[async_test]
    async fn should_forward_without_cookie() {
        let session_storage_mutex = Mutex::new(SessionStorage::default());

        let rocket = rocket::build().manage(session_storage_mutex);
        let client = Client::tracked(rocket).await.unwrap();
        let request = client.get("http://localhost");

        let outcome = AdminSession::from_request(&request).await;

        assert!(outcome.is_forward());
        assert_eq!(Status::Unauthorized, outcome.forwarded().unwrap());
    }
}
