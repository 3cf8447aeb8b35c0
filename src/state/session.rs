//! In-memory session holder.
//!
//! One `SessionStore` is created by the application root and cloned into
//! whatever needs it; clones share the same slot. Writes are visible to all
//! readers as soon as `set` returns, and subscribers are woken on every
//! change so screens can re-render. Nothing here is persisted.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use crate::models::UserProfile;

#[derive(Debug, Clone)]
pub struct SessionStore {
    slot: Arc<watch::Sender<Option<UserProfile>>>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        let (slot, _) = watch::channel(None);
        Self {
            slot: Arc::new(slot),
        }
    }

    /// Snapshot of the current profile, `None` when signed out.
    pub fn get(&self) -> Option<UserProfile> {
        self.slot.borrow().clone()
    }

    pub fn is_active(&self) -> bool {
        self.slot.borrow().is_some()
    }

    pub fn set(&self, profile: UserProfile) {
        debug!(user_id = profile.id, "session set");
        self.slot.send_replace(Some(profile));
    }

    pub fn clear(&self) {
        let previous = self.slot.send_replace(None);
        if let Some(profile) = previous {
            debug!(user_id = profile.id, "session cleared");
        }
    }

    /// Applies `f` to the held profile in place. Returns false, and notifies
    /// nobody, when there is no session or `f` declines the change.
    pub fn update<F>(&self, f: F) -> bool
    where
        F: FnOnce(&mut UserProfile) -> bool,
    {
        self.slot.send_if_modified(|slot| match slot.as_mut() {
            Some(profile) => f(profile),
            None => false,
        })
    }

    /// Receiver that observes every subsequent `set`, `clear`, and applied
    /// `update`.
    pub fn subscribe(&self) -> watch::Receiver<Option<UserProfile>> {
        self.slot.subscribe()
    }
}
