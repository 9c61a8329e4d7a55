// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::filters::{DateRange, Filter, TypeFilter};
use crate::models::TxKind;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rust_decimal::Decimal;

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_kind(s: &str) -> Result<TxKind> {
    Ok(s.parse::<TxKind>()?)
}

/// Always two fractional digits.
pub fn fmt_money(d: &Decimal, ccy: &str) -> String {
    format!("{:.2} {}", d, ccy)
}

pub fn fmt_signed(kind: TxKind, d: &Decimal, ccy: &str) -> String {
    format!("{}{}", kind.sign(), fmt_money(d, ccy))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

/// Filter from `--month` or `--from/--to` (each defaulting to the current
/// month's bound) plus `--type`, when the subcommand defines them.
pub fn filter_from_args(sub: &clap::ArgMatches) -> Result<Filter> {
    let month = DateRange::current_month();
    let mut range = match opt_str(sub, "month") {
        Some(m) => DateRange::month(m)?,
        None => month,
    };
    if let Some(from) = opt_str(sub, "from") {
        range.start = parse_date(from)?;
    }
    if let Some(to) = opt_str(sub, "to") {
        range.end = parse_date(to)?;
    }
    let kind = match opt_str(sub, "type") {
        Some(t) => t.parse::<TypeFilter>()?,
        None => TypeFilter::All,
    };
    Ok(Filter::new(range, kind))
}

/// `get_one` that tolerates args the subcommand does not define.
pub fn opt_str<'a>(sub: &'a clap::ArgMatches, id: &str) -> Option<&'a str> {
    sub.try_get_one::<String>(id)
        .ok()
        .flatten()
        .map(|s| s.as_str())
}

pub fn flag(sub: &clap::ArgMatches, id: &str) -> bool {
    sub.try_get_one::<bool>(id).ok().flatten().copied().unwrap_or(false)
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
