use std::collections::HashMap;
use std::sync::Arc;

use teloxide::types::UserId;
use tokio::sync::RwLock;

use crate::models::Profile;

type ProfileMap = Arc<RwLock<HashMap<UserId, Profile>>>;

/// Process-lifetime profile storage. Nothing is evicted and nothing survives a restart.
#[derive(Clone, Default)]
pub struct ProfileStore {
    profiles: ProfileMap,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, user_id: UserId) -> Option<Profile> {
        let profiles = self.profiles.read().await;
        profiles.get(&user_id).cloned()
    }

    pub async fn contains(&self, user_id: UserId) -> bool {
        self.profiles.read().await.contains_key(&user_id)
    }

    /// Inserts or replaces the user's profile.
    pub async fn upsert(&self, user_id: UserId, profile: Profile) {
        let mut profiles = self.profiles.write().await;
        if profiles.insert(user_id, profile).is_some() {
            log::debug!("♻️ Profile replaced for user {}", user_id);
        }
    }

    /// Applies `f` to the stored profile in place. Returns `None` when the user has no profile.
    pub async fn mutate<F, R>(&self, user_id: UserId, f: F) -> Option<R>
    where
        F: FnOnce(&mut Profile) -> R,
    {
        let mut profiles = self.profiles.write().await;
        profiles.get_mut(&user_id).map(f)
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.profiles.read().await.len()
    }
}
