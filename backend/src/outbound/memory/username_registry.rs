//! In-memory username registry.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::ports::{Reservation, UsernameRegistry, UsernameRegistryError};
use crate::domain::{UserId, Username};

#[derive(Debug, Default)]
struct Registry {
    owners: HashMap<String, UserId>,
    handles: HashMap<UserId, Username>,
}

/// Two-way map between handles and accounts.
///
/// Handles are keyed case-insensitively even though validated usernames are
/// already lowercase.
#[derive(Debug, Default)]
pub struct InMemoryUsernameRegistry {
    registry: RwLock<Registry>,
}

impl InMemoryUsernameRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn key(username: &Username) -> String {
    username.as_str().to_lowercase()
}

fn poisoned() -> UsernameRegistryError {
    UsernameRegistryError::query("username registry lock poisoned")
}

#[async_trait]
impl UsernameRegistry for InMemoryUsernameRegistry {
    async fn reserve(
        &self,
        user_id: &UserId,
        username: &Username,
    ) -> Result<Reservation, UsernameRegistryError> {
        let mut registry = self.registry.write().map_err(|_| poisoned())?;
        let wanted = key(username);
        if let Some(owner) = registry.owners.get(&wanted) {
            if owner != user_id {
                return Ok(Reservation::Taken {
                    owner: owner.clone(),
                });
            }
        }

        if let Some(previous) = registry.handles.insert(user_id.clone(), username.clone()) {
            registry.owners.remove(&key(&previous));
        }
        registry.owners.insert(wanted, user_id.clone());
        Ok(Reservation::Granted)
    }

    async fn username_of(
        &self,
        user_id: &UserId,
    ) -> Result<Option<Username>, UsernameRegistryError> {
        let registry = self.registry.read().map_err(|_| poisoned())?;
        Ok(registry.handles.get(user_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn user(id: &str) -> UserId {
        UserId::new(id).expect("fixture user")
    }

    fn name(raw: &str) -> Username {
        Username::new(raw).expect("fixture username")
    }

    #[rstest]
    #[tokio::test]
    async fn second_account_cannot_take_handle() {
        let registry = InMemoryUsernameRegistry::new();
        let first = registry
            .reserve(&user("u1"), &name("mocha"))
            .await
            .expect("reserve");
        assert_eq!(first, Reservation::Granted);

        let second = registry
            .reserve(&user("u2"), &name("mocha"))
            .await
            .expect("reserve");
        assert_eq!(second, Reservation::Taken { owner: user("u1") });
    }

    #[rstest]
    #[tokio::test]
    async fn reclaiming_own_handle_is_granted() {
        let registry = InMemoryUsernameRegistry::new();
        for _ in 0..2 {
            let outcome = registry
                .reserve(&user("u1"), &name("mocha"))
                .await
                .expect("reserve");
            assert_eq!(outcome, Reservation::Granted);
        }
    }

    #[rstest]
    #[tokio::test]
    async fn renaming_releases_previous_handle() {
        let registry = InMemoryUsernameRegistry::new();
        registry
            .reserve(&user("u1"), &name("mocha"))
            .await
            .expect("reserve");
        registry
            .reserve(&user("u1"), &name("macchiato"))
            .await
            .expect("rename");

        let current = registry.username_of(&user("u1")).await.expect("lookup");
        assert_eq!(current, Some(name("macchiato")));

        let freed = registry
            .reserve(&user("u2"), &name("mocha"))
            .await
            .expect("reserve");
        assert_eq!(freed, Reservation::Granted);
    }
}
