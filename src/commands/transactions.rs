// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::FinanceApi;
use crate::bridge::HostBridge;
use crate::commands::report;
use crate::forms::{ModalForm, TransactionForm};
use crate::models::Transaction;
use crate::session::FinanceSession;
use crate::stats::RECENT_LIMIT;
use crate::utils::{
    filter_from_args, flag, fmt_money, fmt_signed, maybe_print_json, opt_str, parse_kind,
    pretty_table,
};
use anyhow::{Result, anyhow};
use serde::Serialize;

pub fn handle<A: FinanceApi, B: HostBridge>(
    session: &mut FinanceSession<A, B>,
    m: &clap::ArgMatches,
) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(session, sub)?,
        Some(("edit", sub)) => edit(session, sub)?,
        Some(("list", sub)) => list(session, sub)?,
        Some(("rm", sub)) => rm(session, sub)?,
        _ => {}
    }
    Ok(())
}

fn fill(form: &mut TransactionForm, sub: &clap::ArgMatches) {
    if let Some(v) = opt_str(sub, "amount") {
        form.amount = v.to_string();
    }
    if let Some(v) = opt_str(sub, "account") {
        form.account_id = v.to_string();
    }
    if let Some(v) = opt_str(sub, "category") {
        form.category = v.to_string();
    }
    if let Some(v) = opt_str(sub, "description") {
        form.description = v.to_string();
    }
}

fn add<A: FinanceApi, B: HostBridge>(
    session: &mut FinanceSession<A, B>,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let kind = parse_kind(opt_str(sub, "type").unwrap_or_default())?;
    session.open_new_transaction(kind);
    if let Some(ModalForm::NewTransaction(form)) = session.form_mut() {
        fill(form, sub);
    }
    let outcome = session.submit();
    report(session, outcome);
    Ok(())
}

fn edit<A: FinanceApi, B: HostBridge>(
    session: &mut FinanceSession<A, B>,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let id = sub
        .get_one::<i64>("id")
        .copied()
        .ok_or_else(|| anyhow!("--id is required"))?;
    if !session.open_edit_transaction(id) {
        return Err(anyhow!("Transaction {} not found", id));
    }
    if let Some(ModalForm::EditTransaction { form, .. }) = session.form_mut() {
        fill(form, sub);
    }
    let outcome = session.submit();
    report(session, outcome);
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: i64,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub icon: String,
    pub category: String,
    pub account: String,
    pub description: String,
    pub amount: String,
}

pub fn row<A: FinanceApi, B: HostBridge>(
    session: &FinanceSession<A, B>,
    t: &Transaction,
) -> TransactionRow {
    let cats = session.categories();
    let account = t
        .account_id
        .and_then(|id| session.snapshot().account(id))
        .map(|a| a.name.clone())
        .unwrap_or_default();
    TransactionRow {
        id: t.id,
        date: t.date().to_string(),
        kind: t.kind.to_string(),
        icon: cats.icon(t.category.as_str(), t.kind),
        category: cats.name(t.category.as_str(), t.kind),
        account,
        description: t.description.clone().unwrap_or_default(),
        amount: fmt_signed(t.kind, &t.amount, session.currency()),
    }
}

/// Filtered transactions in snapshot order, capped at `--limit`.
pub fn query_rows<A: FinanceApi, B: HostBridge>(
    session: &mut FinanceSession<A, B>,
    sub: &clap::ArgMatches,
) -> Result<Vec<TransactionRow>> {
    let filter = filter_from_args(sub)?;
    session.set_date_range(filter.range);
    session.set_type_filter(filter.kind);
    let limit = sub
        .try_get_one::<usize>("limit")
        .ok()
        .flatten()
        .copied()
        .unwrap_or(RECENT_LIMIT);
    let stats = session.stats();
    Ok(stats.recent(limit).iter().map(|t| row(session, t)).collect())
}

fn list<A: FinanceApi, B: HostBridge>(
    session: &mut FinanceSession<A, B>,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let data = query_rows(session, sub)?;
    if !maybe_print_json(flag(sub, "json"), flag(sub, "jsonl"), &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.date.clone(),
                    format!("{} {}", r.icon, r.category),
                    r.account.clone(),
                    r.description.clone(),
                    r.amount.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["ID", "Date", "Category", "Account", "Description", "Amount"],
                rows,
            )
        );
    }
    Ok(())
}

fn rm<A: FinanceApi, B: HostBridge>(
    session: &mut FinanceSession<A, B>,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let id = sub
        .get_one::<i64>("id")
        .copied()
        .ok_or_else(|| anyhow!("--id is required"))?;
    let tx = session
        .snapshot()
        .transaction(id)
        .cloned()
        .ok_or_else(|| anyhow!("Transaction {} not found", id))?;
    if !flag(sub, "yes") {
        println!("Delete this transaction?");
        println!("Amount: {}", fmt_money(&tx.amount, session.currency()));
        println!("Re-run with --yes to confirm.");
        return Ok(());
    }
    let outcome = session.delete_transaction(id);
    report(session, outcome);
    Ok(())
}
