// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::filters::Filter;
use crate::models::{Snapshot, Transaction, TxKind};
use rust_decimal::Decimal;
use serde::Serialize;

/// How many filtered transactions the overview lists.
pub const RECENT_LIMIT: usize = 20;

/// Derived view state for one snapshot under one filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stats {
    pub total_balance: Decimal,
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub filtered: Vec<Transaction>,
}

impl Stats {
    /// Balances are point-in-time, so `total_balance` ignores the filter.
    /// `filtered` keeps snapshot order.
    pub fn derive(snapshot: &Snapshot, filter: &Filter) -> Self {
        let total_balance = snapshot.accounts.iter().map(|a| a.balance).sum();
        let filtered: Vec<Transaction> = snapshot
            .transactions
            .iter()
            .filter(|t| filter.matches(t))
            .cloned()
            .collect();
        let total_income = sum_kind(&filtered, TxKind::Income);
        let total_expense = sum_kind(&filtered, TxKind::Expense);
        Stats {
            total_balance,
            total_income,
            total_expense,
            filtered,
        }
    }

    pub fn recent(&self, limit: usize) -> &[Transaction] {
        &self.filtered[..self.filtered.len().min(limit)]
    }
}

fn sum_kind(txs: &[Transaction], kind: TxKind) -> Decimal {
    txs.iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.amount)
        .sum()
}
