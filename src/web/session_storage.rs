use crate::web::session::AdminSession;
use cached::{Cached, TimedSizedCache};

const MAX_CONCURRENT_SESSIONS: usize = 100;
const SESSION_LIFESPAN_IN_SECONDS: u64 = 60 * 60 * 12;

/// Keyed store for live admin sessions. Bounded to 100 entries; a session
/// expires half a day after login, whatever the activity on it.
pub struct SessionStorage {
    sessions: TimedSizedCache<String, AdminSession>,
}

impl SessionStorage {
    pub fn store(&mut self, token: String, session: AdminSession) {
        self.sessions.cache_set(token, session);
    }

    pub fn get(&mut self, token: &str) -> Option<&AdminSession> {
        self.sessions.cache_get(token)
    }

    pub fn remove(&mut self, token: &str) {
        self.sessions.cache_remove(token);
    }
}

impl Default for SessionStorage {
    fn default() -> Self {
        let sessions = TimedSizedCache::with_size_and_lifespan(
            MAX_CONCURRENT_SESSIONS,
            SESSION_LIFESPAN_IN_SECONDS,
        );
        Self { sessions }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::session::tests::male_session;

    #[test]
    fn should_store_and_retrieve_sessions() {
        let mut storage = SessionStorage::default();
        storage.store("token-1".to_owned(), male_session());

        assert_eq!(Some(&male_session()), storage.get("token-1"));
        assert_eq!(None, storage.get("token-2"));
    }

    #[test]
    fn should_forget_removed_sessions() {
        let mut storage = SessionStorage::default();
        storage.store("token-1".to_owned(), male_session());

        storage.remove("token-1");

        assert_eq!(None, storage.get("token-1"));
    }

    #[test]
    fn should_evict_beyond_the_session_cap() {
        let mut storage = SessionStorage::default();
        (0..=MAX_CONCURRENT_SESSIONS).for_each(|index| {
            storage.store(format!("token-{index}"), male_session());
        });

        assert_eq!(None, storage.get("token-0"));
        assert!(storage.get(&format!("token-{MAX_CONCURRENT_SESSIONS}")).is_some());
    }
}
