// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::FinanceApi;
use crate::bridge::HostBridge;
use crate::categories::CategoryEntry;
use crate::commands::report;
use crate::forms::ModalForm;
use crate::models::TxKind;
use crate::session::FinanceSession;
use crate::utils::{flag, maybe_print_json, opt_str, parse_kind, pretty_table};
use anyhow::{Result, anyhow};
use serde::Serialize;

pub fn handle<A: FinanceApi, B: HostBridge>(
    session: &mut FinanceSession<A, B>,
    m: &clap::ArgMatches,
) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let kind = parse_kind(opt_str(sub, "type").unwrap_or_default())?;
            session.open_add_category(kind);
            if let Some(ModalForm::AddCategory(form)) = session.form_mut() {
                form.name = opt_str(sub, "name").unwrap_or_default().to_string();
                if let Some(icon) = opt_str(sub, "icon") {
                    form.icon = icon.to_string();
                }
            }
            let outcome = session.submit();
            report(session, outcome);
        }
        Some(("list", sub)) => list(session, sub)?,
        Some(("rm", sub)) => {
            let id = opt_str(sub, "id").unwrap_or_default().trim().to_string();
            let cat = session
                .snapshot()
                .category(&id)
                .cloned()
                .ok_or_else(|| anyhow!("Category '{}' is built-in or unknown", id))?;
            if !flag(sub, "yes") {
                println!("Delete category {} {} ({})?", cat.icon, cat.name, cat.kind);
                println!("Re-run with --yes to confirm.");
                return Ok(());
            }
            let outcome = session.delete_category(&id);
            report(session, outcome);
        }
        _ => {}
    }
    Ok(())
}

#[derive(Serialize)]
struct CategoryRow {
    #[serde(rename = "type")]
    kind: TxKind,
    #[serde(flatten)]
    entry: CategoryEntry,
}

fn list<A: FinanceApi, B: HostBridge>(
    session: &FinanceSession<A, B>,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let kinds = match opt_str(sub, "type") {
        Some(t) => vec![parse_kind(t)?],
        None => vec![TxKind::Income, TxKind::Expense],
    };
    let resolver = session.categories();
    let data: Vec<CategoryRow> = kinds
        .into_iter()
        .flat_map(|kind| {
            resolver
                .all(kind)
                .into_iter()
                .map(move |entry| CategoryRow { kind, entry })
        })
        .collect();
    if !maybe_print_json(flag(sub, "json"), flag(sub, "jsonl"), &data)? {
        let rows = data
            .iter()
            .map(|r| {
                vec![
                    r.kind.to_string(),
                    r.entry.id.clone(),
                    format!("{} {}", r.entry.icon, r.entry.name),
                    if r.entry.builtin { "built-in" } else { "custom" }.to_string(),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Type", "ID", "Category", "Source"], rows));
    }
    Ok(())
}
