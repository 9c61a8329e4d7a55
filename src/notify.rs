// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Transient notifications. One slot: showing a new notice replaces the
//! current one and restarts its timer.

use serde::Serialize;
use std::time::{Duration, Instant};

pub const NOTICE_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug)]
struct Scheduled {
    notice: Notice,
    generation: u64,
    dismiss_at: Instant,
}

#[derive(Debug)]
pub struct Snackbar {
    ttl: Duration,
    current: Option<Scheduled>,
    generation: u64,
}

impl Snackbar {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            current: None,
            generation: 0,
        }
    }

    /// Show `notice` from `now`; the previous notice and its timer are dropped.
    /// Returns the generation identifying this showing.
    pub fn show(&mut self, notice: Notice, now: Instant) -> u64 {
        self.generation += 1;
        self.current = Some(Scheduled {
            notice,
            generation: self.generation,
            dismiss_at: now + self.ttl,
        });
        self.generation
    }

    pub fn visible(&self, now: Instant) -> Option<&Notice> {
        self.current
            .as_ref()
            .filter(|s| now < s.dismiss_at)
            .map(|s| &s.notice)
    }

    /// Most recent notice regardless of its timer.
    pub fn last(&self) -> Option<&Notice> {
        self.current.as_ref().map(|s| &s.notice)
    }

    /// Fire the dismiss timer for `generation`. Stale timers are no-ops.
    pub fn expire(&mut self, generation: u64) -> bool {
        if self.current.as_ref().map(|s| s.generation) == Some(generation) {
            self.current = None;
            true
        } else {
            false
        }
    }

    /// Drop the notice if its timer ran out.
    pub fn tick(&mut self, now: Instant) {
        if self.current.as_ref().is_some_and(|s| now >= s.dismiss_at) {
            self.current = None;
        }
    }
}

impl Default for Snackbar {
    fn default() -> Self {
        Self::new(NOTICE_TTL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_notice_replaces_and_restarts_timer() {
        let t0 = Instant::now();
        let mut bar = Snackbar::default();
        let first = bar.show(Notice::success("saved"), t0);
        let t1 = t0 + Duration::from_secs(2);
        let second = bar.show(Notice::error("failed"), t1);

        // The first timer would have fired at t0 + 3s; it no longer applies.
        assert!(!bar.expire(first));
        let at = t0 + Duration::from_millis(3500);
        assert_eq!(bar.visible(at), Some(&Notice::error("failed")));

        bar.tick(t1 + NOTICE_TTL);
        assert!(bar.visible(t1 + NOTICE_TTL).is_none());
        assert!(!bar.expire(second));
    }
}
