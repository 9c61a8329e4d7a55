// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::FinanceApi;
use crate::bridge::HostBridge;
use crate::session::FinanceSession;
use crate::utils::{filter_from_args, opt_str};
use anyhow::{Context, Result, anyhow};
use serde_json::json;

pub fn handle<A: FinanceApi, B: HostBridge>(
    session: &mut FinanceSession<A, B>,
    m: &clap::ArgMatches,
) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(session, sub),
        _ => Ok(()),
    }
}

fn export_transactions<A: FinanceApi, B: HostBridge>(
    session: &mut FinanceSession<A, B>,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let fmt = opt_str(sub, "format").unwrap_or("csv").to_lowercase();
    let out = opt_str(sub, "out").ok_or_else(|| anyhow!("--out is required"))?;
    if fmt != "csv" && fmt != "json" {
        return Err(anyhow!("Unknown format: {} (use csv|json)", fmt));
    }

    let filter = filter_from_args(sub)?;
    session.set_date_range(filter.range);
    session.set_type_filter(filter.kind);
    let stats = session.stats();
    let cats = session.categories();
    let snapshot = session.snapshot();
    let rows = stats.filtered.iter().map(|t| {
        let account = t
            .account_id
            .and_then(|id| snapshot.account(id))
            .map(|a| a.name.clone())
            .unwrap_or_default();
        (
            t.created_at.format("%Y-%m-%dT%H:%M:%S").to_string(),
            account,
            t.kind.to_string(),
            format!("{:.2}", t.amount),
            t.category.to_string(),
            cats.name(t.category.as_str(), t.kind),
            t.description.clone().unwrap_or_default(),
        )
    });

    match fmt.as_str() {
        "csv" => {
            let mut wtr =
                csv::Writer::from_path(out).with_context(|| format!("Create {}", out))?;
            wtr.write_record([
                "created_at",
                "account",
                "type",
                "amount",
                "category_id",
                "category",
                "description",
            ])?;
            for (ts, a, k, amt, cid, cat, desc) in rows {
                wtr.write_record([ts, a, k, amt, cid, cat, desc])?;
            }
            wtr.flush()?;
        }
        _ => {
            let items: Vec<_> = rows
                .map(|(ts, a, k, amt, cid, cat, desc)| {
                    json!({
                        "created_at": ts, "account": a, "type": k, "amount": amt,
                        "category_id": cid, "category": cat, "description": desc,
                        "currency": snapshot.currency()
                    })
                })
                .collect();
            std::fs::write(out, serde_json::to_string_pretty(&items)?)
                .with_context(|| format!("Write {}", out))?;
        }
    }
    println!("Exported {} transactions to {}", stats.filtered.len(), out);
    Ok(())
}
