use crate::gender::Gender;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter};

/// The login payload. The password never appears in debug output.
#[derive(Serialize, Deserialize, Getters, PartialEq, Clone)]
pub struct AdminCredentials {
    username: String,
    password: String,
}

impl AdminCredentials {
    pub fn new(username: String, password: String) -> Self {
        Self { username, password }
    }
}

impl Debug for AdminCredentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "AdminCredentials {{username={}, password=MASKED}}", self.username)
    }
}

/// An admin as exposed to the client: no password material.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Clone)]
pub struct AdminProfile {
    username: String,
    first_name: String,
    last_name: String,
    gender: Gender,
}

impl AdminProfile {
    pub fn new(username: String, first_name: String, last_name: String, gender: Gender) -> Self {
        Self {
            username,
            first_name,
            last_name,
            gender,
        }
    }
}
