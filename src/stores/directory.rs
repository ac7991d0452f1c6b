//! User directory - in-memory account registry

use crate::entities::UserAccount;
use dashmap::DashMap;
use std::sync::atomic::{AtomicI32, Ordering};
use tracing::{info, instrument};

pub struct UserDirectory {
    accounts: DashMap<i32, UserAccount>,
    next_id: AtomicI32,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self {
            accounts: DashMap::new(),
            next_id: AtomicI32::new(1),
        }
    }

    /// Create a new account. The password must already be hashed.
    #[instrument(skip(self, password_hash), fields(username = %username))]
    pub fn create(&self, username: &str, password_hash: String) -> UserAccount {
        let user_id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let account = UserAccount {
            user_id,
            username: username.to_string(),
            password: password_hash,
        };
        self.accounts.insert(user_id, account.clone());
        info!("Registered account, {} accounts total", self.accounts.len());
        account
    }

    pub fn find_by_username(&self, username: &str) -> Option<UserAccount> {
        self.accounts
            .iter()
            .find(|entry| entry.value().username == username)
            .map(|entry| entry.value().clone())
    }

    pub fn read(&self, user_id: &i32) -> Option<UserAccount> {
        self.accounts.get(user_id).map(|entry| entry.value().clone())
    }
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::new()
    }
}
