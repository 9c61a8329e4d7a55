// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::FinanceApi;
use crate::bridge::HostBridge;
use crate::categories::CategoryResolver;
use crate::models::Snapshot;
use crate::session::FinanceSession;
use crate::utils::pretty_table;
use anyhow::Result;
use rust_decimal::Decimal;

/// `[issue, detail]` pairs for everything odd in the snapshot.
pub fn issues(snapshot: &Snapshot) -> Vec<Vec<String>> {
    let cats = CategoryResolver::new(&snapshot.categories);
    let mut rows = Vec::new();

    // 1) Categories that no longer resolve (deleted or legacy ids)
    for t in &snapshot.transactions {
        if !cats.is_known(t.category.as_str(), t.kind) {
            rows.push(vec![
                "unknown_category".into(),
                format!("tx {} -> '{}' ({})", t.id, t.category, t.kind),
            ]);
        }
    }

    // 2) Transactions pointing at accounts that are gone
    for t in &snapshot.transactions {
        if let Some(acc) = t.account_id {
            if snapshot.account(acc).is_none() {
                rows.push(vec![
                    "missing_account".into(),
                    format!("tx {} -> account {}", t.id, acc),
                ]);
            }
        }
    }

    // 3) Amounts must be positive; the type carries the sign
    for t in &snapshot.transactions {
        if t.amount <= Decimal::ZERO {
            rows.push(vec![
                "non_positive_amount".into(),
                format!("tx {} amount {}", t.id, t.amount),
            ]);
        }
    }
    rows
}

pub fn handle<A: FinanceApi, B: HostBridge>(session: &FinanceSession<A, B>) -> Result<()> {
    let rows = issues(session.snapshot());
    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
