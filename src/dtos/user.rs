//! User DTOs

use crate::entities::UserAccount;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

lazy_static! {
    static ref USERNAME_RE: Regex = Regex::new("^[A-Za-z0-9_]{3,16}$").unwrap();
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UserDTO {
    pub id: Option<i32>,
    pub username: Option<String>,
    #[serde(skip_serializing)]
    pub password: Option<String>,
}

impl From<UserAccount> for UserDTO {
    fn from(value: UserAccount) -> Self {
        Self {
            id: Some(value.user_id),
            username: Some(value.username),
            // never exposed to the client
            password: None,
        }
    }
}

/// DTO for registering a new account (user_id assigned by the directory)
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateUserDTO {
    #[validate(regex(path = *USERNAME_RE, message = "Username must be 3-16 alphanumeric characters or underscores"))]
    pub username: String,

    #[validate(length(min = 8, max = 72, message = "Password must be between 8 and 72 characters"))]
    pub password: String,
}
