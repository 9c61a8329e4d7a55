// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use common::{TestSession, account, session, snapshot, tx};
use pocketbook::{cli, commands::exporter, models::TxKind};
use serde_json::json;
use tempfile::tempdir;

fn base() -> TestSession {
    let mut lunch = tx(1, TxKind::Expense, "12.3", "food", "2025-01-02");
    lunch.description = Some("Corner Shop".into());
    session(snapshot(
        vec![account(1, "Checking", "500")],
        vec![
            lunch,
            tx(2, TxKind::Income, "1000", "salary", "2025-01-03"),
            tx(3, TxKind::Expense, "99", "food", "2025-02-01"),
        ],
        vec![],
    ))
}

fn export(s: &mut TestSession, args: &[&str]) -> anyhow::Result<()> {
    let matches = cli::build_cli().get_matches_from(args.iter().copied());
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(s, export_m)
    } else {
        panic!("no export subcommand");
    }
}

#[test]
fn export_transactions_streams_pretty_json() {
    let mut s = base();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.json");
    let out_str = out_path.to_string_lossy().to_string();

    export(
        &mut s,
        &[
            "pocketbook", "export", "transactions", "--format", "json", "--out", &out_str,
            "--month", "2025-01", "--type", "expense",
        ],
    )
    .unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(
        parsed,
        json!([
            {
                "created_at": "2025-01-02T12:00:00",
                "account": "Checking",
                "type": "expense",
                "amount": "12.30",
                "category_id": "food",
                "category": "Food",
                "description": "Corner Shop",
                "currency": "RUB"
            }
        ])
    );
}

#[test]
fn export_transactions_writes_csv_for_the_range() {
    let mut s = base();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.csv");
    let out_str = out_path.to_string_lossy().to_string();

    export(
        &mut s,
        &[
            "pocketbook", "export", "transactions", "--out", &out_str, "--from", "2025-01-01",
            "--to", "2025-01-31",
        ],
    )
    .unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "created_at,account,type,amount,category_id,category,description"
    );
    assert_eq!(
        lines[2],
        "2025-01-03T12:00:00,Checking,income,1000.00,salary,Salary,"
    );
}

#[test]
fn export_transactions_rejects_unknown_format() {
    let mut s = base();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.unknown");
    let out_str = out_path.to_string_lossy().to_string();

    let res = export(
        &mut s,
        &["pocketbook", "export", "transactions", "--format", "xml", "--out", &out_str],
    );
    assert!(res.is_err());
    assert!(!out_path.exists());
}
