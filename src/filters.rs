// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Transaction, TxKind};
use anyhow::{Context, Result};
use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;
use std::str::FromStr;

/// Inclusive calendar-day range. A reversed range is allowed and matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn month_of(day: NaiveDate) -> Self {
        let start = day.with_day(1).unwrap_or(day);
        Self {
            start,
            end: last_day_of_month(day.year(), day.month()).unwrap_or(day),
        }
    }

    pub fn current_month() -> Self {
        Self::month_of(Local::now().date_naive())
    }

    /// Range for a `YYYY-MM` month.
    pub fn month(month: &str) -> Result<Self> {
        let first = NaiveDate::parse_from_str(&format!("{}-01", month.trim()), "%Y-%m-%d")
            .with_context(|| format!("Invalid month '{}', expected YYYY-MM", month))?;
        Ok(Self::month_of(first))
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }
}

impl Default for DateRange {
    fn default() -> Self {
        Self::current_month()
    }
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (y, m) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1)?.pred_opt()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl TypeFilter {
    pub fn admits(&self, kind: TxKind) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Income => kind == TxKind::Income,
            TypeFilter::Expense => kind == TxKind::Expense,
        }
    }
}

impl FromStr for TypeFilter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(TypeFilter::All),
            "income" => Ok(TypeFilter::Income),
            "expense" => Ok(TypeFilter::Expense),
            other => Err(anyhow::anyhow!(
                "Unknown type filter '{}' (use all|income|expense)",
                other
            )),
        }
    }
}

/// UI filter state; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Filter {
    pub range: DateRange,
    pub kind: TypeFilter,
}

impl Filter {
    pub fn new(range: DateRange, kind: TypeFilter) -> Self {
        Self { range, kind }
    }

    pub fn matches(&self, t: &Transaction) -> bool {
        self.range.contains(t.date()) && self.kind.admits(t.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn month_bounds_handle_leap_years_and_december() {
        let feb = DateRange::month("2024-02").unwrap();
        assert_eq!((feb.start, feb.end), (d(2024, 2, 1), d(2024, 2, 29)));
        let dec = DateRange::month_of(d(2025, 12, 17));
        assert_eq!((dec.start, dec.end), (d(2025, 12, 1), d(2025, 12, 31)));
        assert!(DateRange::month("2025-13").is_err());
    }

    #[test]
    fn bounds_are_inclusive() {
        let r = DateRange::new(d(2025, 1, 1), d(2025, 1, 31));
        assert!(r.contains(d(2025, 1, 1)));
        assert!(r.contains(d(2025, 1, 31)));
        assert!(!r.contains(d(2025, 2, 1)));
        let reversed = DateRange::new(d(2025, 1, 31), d(2025, 1, 1));
        assert!(!reversed.contains(d(2025, 1, 15)));
    }
}
