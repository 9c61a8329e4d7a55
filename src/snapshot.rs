// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::FinanceApi;
use crate::models::Snapshot;
use tracing::warn;

/// Fetch a user's snapshot. Any failure yields an empty snapshot for that
/// user instead of an error.
pub fn load<A: FinanceApi + ?Sized>(api: &A, telegram_id: i64) -> Snapshot {
    match api.fetch_snapshot(telegram_id) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            warn!(telegram_id, error = %e, "snapshot unavailable, showing an empty one");
            Snapshot::empty(telegram_id)
        }
    }
}
