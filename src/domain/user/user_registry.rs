use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::loader::parser::parse_token_pairs;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub password: String,
}

/// Known box-office users, loaded from a credentials file of
/// `username password` pairs.
#[derive(Debug, Clone, Default)]
pub struct UserRegistry {
    users: Vec<User>,
}

impl UserRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_user(&mut self, username: impl Into<String>, password: impl Into<String>) {
        self.users.push(User { username: username.into(), password: password.into() });
    }

    /// Builds a registry from the text of a credentials file.
    pub fn parse(content: &str) -> Self {
        let mut registry = Self::new();
        for (username, password) in parse_token_pairs(content) {
            registry.add_user(username, password);
        }
        registry
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let registry = Self::parse(&content);
        log::info!("Loaded {} user(s) from '{}'.", registry.len(), path.display());
        Ok(registry)
    }

    /// Returns the matching user if both fields match exactly.
    pub fn authenticate(&self, username: &str, password: &str) -> Option<&User> {
        let user = self.users.iter().find(|user| user.username == username && user.password == password);
        if user.is_none() {
            log::warn!("Failed login attempt for user '{}'.", username);
        }
        user
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
