//! In-memory session store. One independently locked `Conversation` per session id.
//!
//! Sessions end on an explicit `remove`, or are evicted by `evict_idle` once
//! nobody has looked them up for longer than the idle timeout.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, RwLock};
use tokio::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

use crate::interview::conversation::Conversation;

pub type SharedConversation = Arc<Mutex<Conversation>>;

struct Session {
    conversation: SharedConversation,
    last_seen: Instant,
}

/// Requests against the same session are serialized by that session's mutex;
/// the outer lock is only held long enough to look the session up.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self) -> SharedConversation {
        let id = Uuid::new_v4();
        let conversation = Arc::new(Mutex::new(Conversation::new(id)));
        self.sessions.write().await.insert(
            id,
            Session {
                conversation: conversation.clone(),
                last_seen: Instant::now(),
            },
        );
        info!(conversation_id = %id, "Conversation created");
        conversation
    }

    /// Looks the session up and marks it as active.
    pub async fn get(&self, id: Uuid) -> Option<SharedConversation> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id)?;
        session.last_seen = Instant::now();
        Some(session.conversation.clone())
    }

    /// Drops the session. Returns false if it did not exist.
    pub async fn remove(&self, id: Uuid) -> bool {
        let removed = self.sessions.write().await.remove(&id).is_some();
        if removed {
            info!(conversation_id = %id, "Conversation ended");
        }
        removed
    }

    /// Drops every session not looked up within `max_idle`. Returns how many went.
    pub async fn evict_idle(&self, max_idle: Duration) -> usize {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|id, session| {
            let keep = now.duration_since(session.last_seen) <= max_idle;
            if !keep {
                debug!(conversation_id = %id, "Evicting idle conversation");
            }
            keep
        });
        let evicted = before - sessions.len();
        if evicted > 0 {
            info!("Evicted {evicted} idle conversations");
        }
        evicted
    }

    /// Runs `evict_idle` every `every` until the runtime shuts down.
    pub fn spawn_eviction(&self, max_idle: Duration, every: Duration) {
        let store = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every.max(Duration::from_secs(1)));
            loop {
                ticker.tick().await;
                store.evict_idle(max_idle).await;
            }
        });
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interview::models::ProfileForm;
    use crate::interview::state::ConversationState;

    #[tokio::test]
    async fn test_create_then_get_returns_same_conversation() {
        let store = SessionStore::new();
        let created = store.create().await;
        let id = created.lock().await.id();

        let fetched = store.get(id).await.unwrap();
        assert!(Arc::ptr_eq(&created, &fetched));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let store = SessionStore::new();
        let a = store.create().await;
        let b = store.create().await;

        a.lock()
            .await
            .submit_profile(ProfileForm {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                phone: "1".to_string(),
                tech_stack: "Rust".to_string(),
                years_experience: Some(crate::interview::models::ExperienceLevel::TenPlus),
                job_role: "Tech Lead".to_string(),
                custom_role: None,
            })
            .unwrap();

        assert_eq!(a.lock().await.state(), ConversationState::Ready);
        assert_eq!(b.lock().await.state(), ConversationState::Greeting);
    }

    #[tokio::test(start_paused = true)]
    async fn test_idle_sessions_are_evicted() {
        let store = SessionStore::new();
        let idle = store.create().await.lock().await.id();
        let active = store.create().await.lock().await.id();

        tokio::time::advance(Duration::from_secs(50)).await;
        assert!(store.get(active).await.is_some());
        tokio::time::advance(Duration::from_secs(20)).await;

        assert_eq!(store.evict_idle(Duration::from_secs(60)).await, 1);
        assert!(store.get(idle).await.is_none());
        assert!(store.get(active).await.is_some());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_eviction_task_sweeps_in_background() {
        let store = SessionStore::new();
        store.create().await;
        store.spawn_eviction(Duration::from_secs(60), Duration::from_secs(30));

        tokio::time::sleep(Duration::from_secs(31)).await;
        assert_eq!(store.len().await, 1);

        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_remove() {
        let store = SessionStore::new();
        let id = store.create().await.lock().await.id();

        assert!(store.remove(id).await);
        assert!(!store.remove(id).await);
        assert!(store.get(id).await.is_none());
        assert_eq!(store.len().await, 0);
    }
}
