//! User Storage
//! Mission: Hold the fixed set of user accounts loaded at startup

use crate::auth::models::{User, UserRole};
use anyhow::{bail, Result};
use std::collections::HashSet;
use tracing::info;

/// Read-only, in-memory credential store
#[derive(Debug)]
pub struct UserStore {
    users: Vec<User>,
}

impl UserStore {
    /// Create a store from a list of users; usernames must be unique
    pub fn new(users: Vec<User>) -> Result<Self> {
        let mut seen = HashSet::new();
        for user in &users {
            if !seen.insert(user.username.as_str()) {
                bail!("Duplicate username in user store: {}", user.username);
            }
        }

        Ok(Self { users })
    }

    /// Store with the built-in accounts
    pub fn seeded() -> Result<Self> {
        let store = Self::new(vec![
            User::new(1, "user1", "123", UserRole::Admin),
            User::new(2, "user2", "123", UserRole::Common),
        ])?;

        info!("🔐 User store loaded with {} accounts", store.len());

        Ok(store)
    }

    /// Get user by username
    pub fn get_user_by_username(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|u| u.username == username)
    }

    /// Return the user whose username and password both match exactly
    pub fn verify_credentials(&self, username: &str, password: &str) -> Option<&User> {
        self.get_user_by_username(username)
            .filter(|u| u.password == password)
    }

    /// List all users (admin only)
    pub fn list_users(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
