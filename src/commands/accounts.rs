// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::FinanceApi;
use crate::bridge::HostBridge;
use crate::commands::report;
use crate::forms::ModalForm;
use crate::session::FinanceSession;
use crate::utils::{flag, fmt_money, maybe_print_json, opt_str, pretty_table};
use anyhow::{Result, anyhow};

pub fn handle<A: FinanceApi, B: HostBridge>(
    session: &mut FinanceSession<A, B>,
    m: &clap::ArgMatches,
) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(session, sub)?,
        Some(("list", sub)) => list(session, sub)?,
        Some(("rm", sub)) => rm(session, sub)?,
        _ => {}
    }
    Ok(())
}

fn add<A: FinanceApi, B: HostBridge>(
    session: &mut FinanceSession<A, B>,
    sub: &clap::ArgMatches,
) -> Result<()> {
    session.open_create_account();
    if let Some(ModalForm::CreateAccount(form)) = session.form_mut() {
        form.name = opt_str(sub, "name").unwrap_or_default().to_string();
        form.balance = opt_str(sub, "balance").unwrap_or_default().to_string();
    }
    let outcome = session.submit();
    report(session, outcome);
    Ok(())
}

fn list<A: FinanceApi, B: HostBridge>(
    session: &FinanceSession<A, B>,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let accounts = &session.snapshot().accounts;
    if !maybe_print_json(flag(sub, "json"), flag(sub, "jsonl"), accounts)? {
        let ccy = session.currency();
        let rows = accounts
            .iter()
            .map(|a| vec![a.id.to_string(), a.name.clone(), fmt_money(&a.balance, ccy)])
            .collect();
        println!("{}", pretty_table(&["ID", "Name", "Balance"], rows));
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
    let account = session
        .snapshot()
        .account(id)
        .cloned()
        .ok_or_else(|| anyhow!("Account {} not found", id))?;
    if !flag(sub, "yes") {
        println!("Delete account \"{}\"?", account.name);
        if !account.balance.is_zero() {
            println!("Account balance: {}", fmt_money(&account.balance, session.currency()));
        }
        println!("Re-run with --yes to confirm.");
        return Ok(());
    }
    let outcome = session.delete_account(id);
    report(session, outcome);
    Ok(())
}
