//! Per-user conversational context store
//!
//! Keeps the last recognized region, crop, intent, disease and pest per
//! user so follow-up messages like "والبندورة؟" resolve against the
//! previous question. Records expire lazily after a TTL and the store is
//! capacity-bounded, so it never grows without limit.

use dashmap::DashMap;
use farm_advisor_core::{ContextPatch, ConversationContext};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct Entry {
    ctx: ConversationContext,
    updated_at: Instant,
}

impl Entry {
    fn fresh() -> Self {
        Self {
            ctx: ConversationContext::default(),
            updated_at: Instant::now(),
        }
    }
}

/// TTL-bounded context store, sharded by user id.
///
/// DashMap keeps different users on different shards; same-user
/// read-modify-write serializes on the entry lock.
pub struct ContextStore {
    entries: DashMap<String, Entry>,
    ttl: Duration,
    capacity: usize,
}

impl ContextStore {
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
            capacity,
        }
    }

    /// Current context for a user. Creates a fresh record on first
    /// contact and resets one whose TTL has lapsed. Reading does not
    /// refresh the timestamp; only writes extend a record's life.
    pub fn get(&self, user_id: &str) -> ConversationContext {
        if !self.entries.contains_key(user_id) {
            self.reserve_slot();
        }
        let mut entry = self
            .entries
            .entry(user_id.to_string())
            .or_insert_with(Entry::fresh);
        if entry.updated_at.elapsed() > self.ttl {
            tracing::debug!(user_id, "context expired, starting fresh");
            *entry = Entry::fresh();
        }
        entry.ctx.clone()
    }

    /// Merge-patch a user's context and refresh its timestamp. An
    /// expired record is reset before the patch applies, so stale
    /// entities never leak into a new conversation.
    pub fn set(&self, user_id: &str, patch: &ContextPatch) {
        if patch.is_empty() {
            return;
        }
        if !self.entries.contains_key(user_id) {
            self.reserve_slot();
        }
        let mut entry = self
            .entries
            .entry(user_id.to_string())
            .or_insert_with(Entry::fresh);
        if entry.updated_at.elapsed() > self.ttl {
            entry.ctx = ConversationContext::default();
        }
        entry.ctx.apply(patch);
        entry.updated_at = Instant::now();
    }

    /// Forget a user entirely.
    pub fn clear(&self, user_id: &str) {
        self.entries.remove(user_id);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all lapsed records eagerly.
    pub fn purge_expired(&self) {
        let ttl = self.ttl;
        self.entries.retain(|_, entry| entry.updated_at.elapsed() <= ttl);
    }

    /// Make room for one more record: expired entries go first, then the
    /// least recently updated one.
    fn reserve_slot(&self) {
        if self.entries.len() < self.capacity {
            return;
        }
        self.purge_expired();
        while self.entries.len() >= self.capacity {
            let oldest = self
                .entries
                .iter()
                .min_by_key(|e| e.value().updated_at)
                .map(|e| e.key().clone());
            match oldest {
                Some(key) => {
                    tracing::debug!(user_id = %key, "context store full, evicting oldest");
                    self.entries.remove(&key);
                }
                None => break,
            }
        }
    }
}
