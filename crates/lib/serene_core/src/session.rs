//! Per-session orchestrators.
//!
//! Each session id maps to its own [`StressBot`] behind an async mutex, so
//! turns within a session run one at a time and sessions never share state.
//! Idle sessions expire, and the registry never holds more than its
//! configured number of sessions.

use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

use crate::bot::StressBot;
use crate::llm::ModelClient;

/// Sessions untouched for this long are dropped by [`SessionRegistry::cleanup`].
pub const DEFAULT_IDLE_TTL: Duration = Duration::from_secs(60 * 60);

/// Upper bound on live sessions before the least recently used is evicted.
pub const DEFAULT_MAX_SESSIONS: usize = 10_000;

/// Shared handle to one session's bot.
pub type SessionHandle = Arc<Mutex<StressBot>>;

/// Generate a fresh random session id.
pub fn new_session_id() -> String {
    Uuid::new_v4().to_string()
}

struct SessionEntry {
    bot: SessionHandle,
    last_seen: Instant,
}

/// Registry of live sessions. All bots share one model client.
pub struct SessionRegistry {
    model: Arc<dyn ModelClient>,
    sessions: DashMap<String, SessionEntry>,
    idle_ttl: Duration,
    max_sessions: usize,
}

impl SessionRegistry {
    pub fn new(model: Arc<dyn ModelClient>) -> Self {
        Self::with_limits(model, DEFAULT_IDLE_TTL, DEFAULT_MAX_SESSIONS)
    }

    /// Registry with a custom idle timeout and session cap (at least one).
    pub fn with_limits(model: Arc<dyn ModelClient>, idle_ttl: Duration, max_sessions: usize) -> Self {
        Self {
            model,
            sessions: DashMap::new(),
            idle_ttl,
            max_sessions: max_sessions.max(1),
        }
    }

    pub fn model(&self) -> &Arc<dyn ModelClient> {
        &self.model
    }

    /// Return the session's bot, creating an empty one on first use.
    ///
    /// Creating a session when the registry is full first drops expired
    /// sessions, then the least recently used ones.
    pub fn get_or_create(&self, id: &str) -> SessionHandle {
        if let Some(bot) = self.get(id) {
            return bot;
        }

        if self.sessions.len() >= self.max_sessions {
            self.cleanup();
            while self.sessions.len() >= self.max_sessions {
                if !self.evict_oldest() {
                    break;
                }
            }
        }

        self.sessions
            .entry(id.to_string())
            .or_insert_with(|| {
                debug!(session = %id, "new session");
                SessionEntry {
                    bot: Arc::new(Mutex::new(StressBot::new(self.model.clone()))),
                    last_seen: Instant::now(),
                }
            })
            .bot
            .clone()
    }

    /// Look up an existing session without creating one.
    pub fn get(&self, id: &str) -> Option<SessionHandle> {
        let mut entry = self.sessions.get_mut(id)?;
        entry.last_seen = Instant::now();
        Some(entry.bot.clone())
    }

    pub fn remove(&self, id: &str) -> Option<SessionHandle> {
        self.sessions.remove(id).map(|(_, entry)| entry.bot)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Evict sessions idle for longer than the configured timeout.
    pub fn cleanup(&self) {
        let ttl = self.idle_ttl;
        self.sessions.retain(|_, entry| entry.last_seen.elapsed() <= ttl);
    }

    /// Spawn a periodic cleanup task.
    pub fn spawn_cleanup_task(self: &Arc<Self>) -> tokio::task::JoinHandle<()> {
        let registry = Arc::clone(self);
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(60));
            loop {
                interval.tick().await;
                registry.cleanup();
            }
        })
    }

    fn evict_oldest(&self) -> bool {
        let oldest = self
            .sessions
            .iter()
            .min_by_key(|entry| entry.value().last_seen)
            .map(|entry| entry.key().clone());
        match oldest {
            Some(id) => {
                debug!(session = %id, "evicting least recently used session");
                self.sessions.remove(&id).is_some()
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::local::LocalModel;

    fn registry() -> SessionRegistry {
        SessionRegistry::new(Arc::new(LocalModel))
    }

    #[test]
    fn session_ids_are_unique() {
        assert_ne!(new_session_id(), new_session_id());
    }

    #[tokio::test]
    async fn same_id_returns_same_bot() {
        let sessions = registry();
        let a = sessions.get_or_create("abc");
        let b = sessions.get_or_create("abc");
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(sessions.len(), 1);
    }

    #[tokio::test]
    async fn sessions_do_not_share_history() {
        let sessions = registry();
        let first = sessions.get_or_create("first");
        let second = sessions.get_or_create("second");

        first.lock().await.process_message("hello").await.unwrap();

        assert_eq!(first.lock().await.history().len(), 2);
        assert!(second.lock().await.history().is_empty());
    }

    #[test]
    fn remove_forgets_session() {
        let sessions = registry();
        sessions.get_or_create("gone");
        assert!(sessions.remove("gone").is_some());
        assert!(sessions.get("gone").is_none());
        assert!(sessions.is_empty());
    }

    #[test]
    fn registry_never_exceeds_its_cap() {
        let sessions = SessionRegistry::with_limits(Arc::new(LocalModel), DEFAULT_IDLE_TTL, 3);
        for i in 0..50 {
            sessions.get_or_create(&format!("s{i}"));
            assert!(sessions.len() <= 3);
        }
        assert_eq!(sessions.len(), 3);
        assert!(sessions.get("s49").is_some());
    }

    #[test]
    fn least_recently_used_session_is_evicted() {
        let sessions = SessionRegistry::with_limits(Arc::new(LocalModel), DEFAULT_IDLE_TTL, 2);
        sessions.get_or_create("old");
        std::thread::sleep(Duration::from_millis(5));
        sessions.get_or_create("busy");
        std::thread::sleep(Duration::from_millis(5));
        // Touching "old" makes "busy" the eviction candidate.
        sessions.get("old");
        std::thread::sleep(Duration::from_millis(5));
        sessions.get_or_create("new");

        assert!(sessions.get("old").is_some());
        assert!(sessions.get("busy").is_none());
        assert!(sessions.get("new").is_some());
    }

    #[test]
    fn cleanup_drops_idle_sessions() {
        let sessions =
            SessionRegistry::with_limits(Arc::new(LocalModel), Duration::from_millis(1), 10);
        sessions.get_or_create("idle");
        std::thread::sleep(Duration::from_millis(20));
        sessions.cleanup();
        assert!(sessions.is_empty());
    }

    #[test]
    fn get_does_not_create() {
        let sessions = registry();
        assert!(sessions.get("nobody").is_none());
        assert!(sessions.is_empty());
    }
}
