use derive_getters::Getters;
use dto::gender::Gender;

/// Server-side state behind one admin's session token. Resolved once at the
/// boundary by the request guard; the gender scopes every downstream query.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct AdminSession {
    admin_id: i32,
    username: String,
    first_name: String,
    last_name: String,
    gender: Gender,
}

impl AdminSession {
    pub fn new(
        admin_id: i32,
        username: String,
        first_name: String,
        last_name: String,
        gender: Gender,
    ) -> Self {
        Self {
            admin_id,
            username,
            first_name,
            last_name,
            gender,
        }
    }

    pub fn to_profile(&self) -> dto::admin::AdminProfile {
        dto::admin::AdminProfile::new(
            self.username.clone(),
            self.first_name.clone(),
            self.last_name.clone(),
            self.gender,
        )
    }
}
