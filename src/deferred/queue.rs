//! Deferred domain: a fire-time ordered queue of one-shot actions.

use bevy::prelude::*;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::audio::SoundCue;

/// What a deferred entry does when it comes due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredAction {
    PlayCue(SoundCue),
    RespawnEnemy(Entity),
    ReloadScene,
}

/// Which sequence scheduled an entry. Used for bulk cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeferredTag {
    EnemySequence,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeferredEntry {
    pub fire_at: f32,
    pub seq: u64,
    pub tag: DeferredTag,
    pub action: DeferredAction,
}

impl Eq for DeferredEntry {}

impl Ord for DeferredEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.fire_at
            .total_cmp(&other.fire_at)
            .then(self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for DeferredEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Session-owned queue of pending actions.
///
/// Entries fire once, earliest `fire_at` first. Entries sharing a fire time
/// fire in the order they were scheduled.
#[derive(Resource, Debug, Default)]
pub struct DeferredQueue {
    heap: BinaryHeap<Reverse<DeferredEntry>>,
    next_seq: u64,
}

impl DeferredQueue {
    /// Schedule `action` to fire `delay` seconds after `now`.
    pub fn schedule(&mut self, now: f32, delay: f32, tag: DeferredTag, action: DeferredAction) {
        let entry = DeferredEntry {
            fire_at: now + delay.max(0.0),
            seq: self.next_seq,
            tag,
            action,
        };
        self.next_seq += 1;
        self.heap.push(Reverse(entry));
    }

    /// Remove and return every entry due at `now`, in firing order.
    pub fn drain_due(&mut self, now: f32) -> Vec<DeferredEntry> {
        let mut due = Vec::new();
        while let Some(Reverse(entry)) = self.heap.peek() {
            if entry.fire_at > now {
                break;
            }
            if let Some(Reverse(entry)) = self.heap.pop() {
                due.push(entry);
            }
        }
        due
    }

    /// Drop every pending entry carrying `tag`. Returns how many were dropped.
    pub fn cancel(&mut self, tag: DeferredTag) -> usize {
        let before = self.heap.len();
        self.heap.retain(|Reverse(entry)| entry.tag != tag);
        before - self.heap.len()
    }

    /// Pending entries in firing order.
    pub fn pending(&self) -> Vec<DeferredEntry> {
        let mut entries: Vec<_> = self.heap.iter().map(|Reverse(entry)| *entry).collect();
        entries.sort();
        entries
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
