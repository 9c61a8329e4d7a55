// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use tracing::info;

/// Used when the host does not tell us who the user is (local development).
pub const FALLBACK_USER_ID: i64 = 123456789;

/// Handle to the shell hosting the view.
pub trait HostBridge {
    fn ready(&self);
    fn expand(&self);
    fn close(&self);
    fn send_data(&self, payload: &str);
    fn user_id(&self) -> Option<i64>;

    fn resolved_user_id(&self) -> i64 {
        self.user_id().unwrap_or(FALLBACK_USER_ID)
    }
}

/// Bridge for the terminal front-end: the user comes from settings or flags
/// and outbound host events go to the log.
#[derive(Debug, Clone, Default)]
pub struct ConsoleBridge {
    user_id: Option<i64>,
}

impl ConsoleBridge {
    pub fn new(user_id: Option<i64>) -> Self {
        Self { user_id }
    }
}

impl HostBridge for ConsoleBridge {
    fn ready(&self) {}

    fn expand(&self) {}

    fn close(&self) {}

    fn send_data(&self, payload: &str) {
        info!(payload, "host event");
    }

    fn user_id(&self) -> Option<i64> {
        self.user_id
    }
}
