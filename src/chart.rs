// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::categories::CategoryResolver;
use crate::filters::DateRange;
use crate::models::{Snapshot, TxKind};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;

pub const PALETTE: [&str; 8] = [
    "#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF", "#FF9F40", "#C9CBCF", "#4CAF50",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartBucket {
    pub category_id: String,
    pub label: String,
    pub amount: Decimal,
}

/// Expense totals per category, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExpenseChart {
    pub buckets: Vec<ChartBucket>,
}

impl ExpenseChart {
    /// Only expenses inside `range` count; the type filter plays no part here.
    pub fn build(snapshot: &Snapshot, range: &DateRange) -> Self {
        let resolver = CategoryResolver::new(&snapshot.categories);
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut buckets: Vec<ChartBucket> = Vec::new();

        for t in snapshot
            .transactions
            .iter()
            .filter(|t| t.kind == TxKind::Expense && range.contains(t.date()))
        {
            let key = t.category.as_str().trim().to_string();
            match index.get(&key) {
                Some(&i) => buckets[i].amount += t.amount,
                None => {
                    index.insert(key.clone(), buckets.len());
                    buckets.push(ChartBucket {
                        label: resolver.name(&key, TxKind::Expense),
                        category_id: key,
                        amount: t.amount,
                    });
                }
            }
        }
        ExpenseChart { buckets }
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn labels(&self) -> Vec<String> {
        self.buckets.iter().map(|b| b.label.clone()).collect()
    }

    pub fn values(&self) -> Vec<Decimal> {
        self.buckets.iter().map(|b| b.amount).collect()
    }

    pub fn total(&self) -> Decimal {
        self.buckets.iter().map(|b| b.amount).sum()
    }

    /// Percentage of the total taken by bucket `i`.
    pub fn share(&self, i: usize) -> Decimal {
        let total = self.total();
        match self.buckets.get(i) {
            Some(b) if !total.is_zero() => b.amount * Decimal::ONE_HUNDRED / total,
            _ => Decimal::ZERO,
        }
    }

    pub fn color(i: usize) -> &'static str {
        PALETTE[i % PALETTE.len()]
    }
}
