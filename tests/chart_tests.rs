// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use common::{custom, dec, range, snapshot, tx};
use pocketbook::chart::ExpenseChart;
use pocketbook::filters::{Filter, TypeFilter};
use pocketbook::models::TxKind;
use pocketbook::stats::Stats;

#[test]
fn only_in_range_expenses_are_bucketed() {
    let snap = snapshot(
        vec![],
        vec![
            tx(1, TxKind::Expense, "50.5", "food", "2025-05-10"),
            tx(2, TxKind::Expense, "10", "food", "2025-04-30"),
        ],
        vec![],
    );
    let r = range("2025-05-01", "2025-05-31");
    let chart = ExpenseChart::build(&snap, &r);
    assert_eq!(chart.buckets.len(), 1);
    assert_eq!(chart.buckets[0].category_id, "food");
    assert_eq!(format!("{:.2}", chart.buckets[0].amount), "50.50");

    let stats = Stats::derive(&snap, &Filter::new(r, TypeFilter::All));
    assert_eq!(format!("{:.2}", stats.total_expense), "50.50");
}

#[test]
fn buckets_follow_first_appearance_and_resolve_labels() {
    let snap = snapshot(
        vec![],
        vec![
            tx(1, TxKind::Expense, "5", "transport", "2025-05-02"),
            tx(2, TxKind::Income, "999", "salary", "2025-05-02"),
            tx(3, TxKind::Expense, "7", "17", "2025-05-03"),
            tx(4, TxKind::Expense, "3", "transport", "2025-05-04"),
            tx(5, TxKind::Expense, "1", "legacy_id", "2025-05-05"),
        ],
        vec![custom(17, TxKind::Expense, "Pets", "🐶")],
    );
    let chart = ExpenseChart::build(&snap, &range("2025-05-01", "2025-05-31"));
    assert_eq!(chart.labels(), vec!["Transport", "Pets", "legacy_id"]);
    assert_eq!(chart.values(), vec![dec("8"), dec("7"), dec("1")]);
    // Building twice gives the same result
    assert_eq!(chart, ExpenseChart::build(&snap, &range("2025-05-01", "2025-05-31")));
}

#[test]
fn bucket_sum_matches_total_expense() {
    let snap = snapshot(
        vec![],
        vec![
            tx(1, TxKind::Expense, "12.25", "food", "2025-06-01"),
            tx(2, TxKind::Expense, "7.75", "health", "2025-06-02"),
            tx(3, TxKind::Income, "40", "gift", "2025-06-03"),
            tx(4, TxKind::Expense, "30", "food", "2025-06-30"),
        ],
        vec![],
    );
    let r = range("2025-06-01", "2025-06-30");
    let chart = ExpenseChart::build(&snap, &r);
    for kind in [TypeFilter::All, TypeFilter::Expense] {
        let stats = Stats::derive(&snap, &Filter::new(r, kind));
        assert_eq!(chart.total(), stats.total_expense);
    }
    assert_eq!(chart.share(0), dec("84.5"));
    assert_eq!(ExpenseChart::color(0), ExpenseChart::color(8));
}

#[test]
fn no_expenses_means_no_buckets() {
    let snap = snapshot(
        vec![],
        vec![tx(1, TxKind::Income, "10", "salary", "2025-06-01")],
        vec![],
    );
    let chart = ExpenseChart::build(&snap, &range("2025-06-01", "2025-06-30"));
    assert!(chart.is_empty());
    assert!(chart.total().is_zero());
    assert!(chart.share(0).is_zero());
}

#[test]
fn builtin_name_wins_over_custom_with_same_id() {
    let snap = snapshot(
        vec![],
        vec![tx(1, TxKind::Expense, "4", "food", "2025-07-01")],
        vec![{
            let mut c = custom(0, TxKind::Expense, "Groceries", "🥕");
            c.id = "food".into();
            c
        }],
    );
    let chart = ExpenseChart::build(&snap, &range("2025-07-01", "2025-07-31"));
    assert_eq!(chart.labels(), vec!["Food"]);
}
