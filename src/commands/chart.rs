// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::FinanceApi;
use crate::bridge::HostBridge;
use crate::chart::ExpenseChart;
use crate::session::FinanceSession;
use crate::utils::{filter_from_args, flag, fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;
use rust_decimal::prelude::ToPrimitive;

const BAR_WIDTH: u32 = 30;

pub fn handle<A: FinanceApi, B: HostBridge>(
    session: &mut FinanceSession<A, B>,
    sub: &clap::ArgMatches,
) -> Result<()> {
    session.set_date_range(filter_from_args(sub)?.range);
    let chart = session.chart();
    if maybe_print_json(flag(sub, "json"), flag(sub, "jsonl"), &chart)? {
        return Ok(());
    }
    if chart.is_empty() {
        println!("No expenses in this period.");
        return Ok(());
    }
    let ccy = session.currency();
    let rows = chart
        .buckets
        .iter()
        .enumerate()
        .map(|(i, b)| {
            let share = chart.share(i);
            let width = (share * rust_decimal::Decimal::from(BAR_WIDTH)
                / rust_decimal::Decimal::ONE_HUNDRED)
                .round()
                .to_usize()
                .unwrap_or(0);
            vec![
                b.label.clone(),
                fmt_money(&b.amount, ccy),
                format!("{:.1}%", share),
                "█".repeat(width),
                ExpenseChart::color(i).to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Category", "Spent", "Share", "", "Colour"], rows)
    );
    Ok(())
}
