// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::FinanceApi;
use crate::bridge::HostBridge;
use crate::commands::transactions::{TransactionRow, row};
use crate::filters::Filter;
use crate::models::Account;
use crate::session::FinanceSession;
use crate::stats::RECENT_LIMIT;
use crate::utils::{filter_from_args, flag, fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Serialize)]
pub struct Overview {
    pub currency: String,
    pub filter: Filter,
    pub total_balance: Decimal,
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub accounts: Vec<Account>,
    pub recent: Vec<TransactionRow>,
}

pub fn build<A: FinanceApi, B: HostBridge>(
    session: &mut FinanceSession<A, B>,
    sub: &clap::ArgMatches,
) -> Result<Overview> {
    let filter = filter_from_args(sub)?;
    session.set_date_range(filter.range);
    session.set_type_filter(filter.kind);
    let stats = session.stats();
    Ok(Overview {
        currency: session.currency().to_string(),
        filter,
        total_balance: stats.total_balance,
        total_income: stats.total_income,
        total_expense: stats.total_expense,
        accounts: session.snapshot().accounts.clone(),
        recent: stats
            .recent(RECENT_LIMIT)
            .iter()
            .map(|t| row(session, t))
            .collect(),
    })
}

pub fn handle<A: FinanceApi, B: HostBridge>(
    session: &mut FinanceSession<A, B>,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let o = build(session, sub)?;
    if maybe_print_json(flag(sub, "json"), flag(sub, "jsonl"), &o)? {
        return Ok(());
    }
    let ccy = &o.currency;
    println!("Balance: {}", fmt_money(&o.total_balance, ccy));
    println!(
        "{} .. {}  income +{}  expense -{}",
        o.filter.range.start,
        o.filter.range.end,
        fmt_money(&o.total_income, ccy),
        fmt_money(&o.total_expense, ccy)
    );

    if o.accounts.is_empty() {
        println!("No accounts yet. Create one with `pocketbook account add`.");
    } else {
        let rows = o
            .accounts
            .iter()
            .map(|a| vec![a.name.clone(), fmt_money(&a.balance, ccy)])
            .collect();
        println!("{}", pretty_table(&["Account", "Balance"], rows));
    }

    if o.recent.is_empty() {
        println!("No transactions in this period.");
    } else {
        let rows = o
            .recent
            .iter()
            .map(|r| {
                vec![
                    r.date.clone(),
                    format!("{} {}", r.icon, r.category),
                    r.description.clone(),
                    r.amount.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Date", "Category", "Description", "Amount"], rows)
        );
    }
    Ok(())
}
