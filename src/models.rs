// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::warn;

pub const DEFAULT_CURRENCY: &str = "RUB";
pub const DEFAULT_ICON: &str = "📝";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Income,
    Expense,
}

impl TxKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxKind::Income => "income",
            TxKind::Expense => "expense",
        }
    }

    /// Sign shown in front of an amount of this kind.
    pub fn sign(&self) -> &'static str {
        match self {
            TxKind::Income => "+",
            TxKind::Expense => "-",
        }
    }
}

impl fmt::Display for TxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown transaction type '{0}', expected income|expense")]
pub struct UnknownKind(pub String);

impl FromStr for TxKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(TxKind::Income),
            "expense" => Ok(TxKind::Expense),
            other => Err(UnknownKind(other.to_string())),
        }
    }
}

/// Category identifier. Built-in ids are symbolic strings, user-defined ones
/// come back from the API as numbers; both compare by their string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    pub fn new(raw: impl Into<String>) -> Self {
        CategoryId(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn matches(&self, other: &str) -> bool {
        self.0.trim() == other.trim()
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CategoryId {
    fn from(s: &str) -> Self {
        CategoryId(s.to_string())
    }
}

impl From<i64> for CategoryId {
    fn from(n: i64) -> Self {
        CategoryId(n.to_string())
    }
}

impl<'de> Deserialize<'de> for CategoryId {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(i64),
            Float(f64),
            Text(String),
        }
        Ok(match Raw::deserialize(d)? {
            Raw::Int(n) => CategoryId(n.to_string()),
            Raw::Float(f) => CategoryId(f.to_string()),
            Raw::Text(s) => CategoryId(s),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub telegram_id: i64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    pub name: String,
    pub balance: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(rename = "type")]
    pub kind: TxKind,
    pub name: String,
    #[serde(default = "default_icon")]
    pub icon: String,
}

fn default_icon() -> String {
    DEFAULT_ICON.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub account_id: Option<i64>,
    #[serde(rename = "type")]
    pub kind: TxKind,
    pub amount: Decimal,
    pub category: CategoryId,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(deserialize_with = "de_timestamp")]
    pub created_at: NaiveDateTime,
}

impl Transaction {
    /// Calendar day the transaction is filed under (UTC).
    pub fn date(&self) -> NaiveDate {
        self.created_at.date()
    }
}

fn de_timestamp<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
    let raw = String::deserialize(d)?;
    parse_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp '{}'", raw)))
}

/// Accepts RFC 3339 (normalised to UTC), a naive ISO date-time, or a bare date.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(n) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(n);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Records that fail to decode are dropped so the rest of the snapshot
/// (accounts in particular) still loads.
fn de_transactions<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<Transaction>, D::Error> {
    let raw = Option::<Vec<serde_json::Value>>::deserialize(d)?.unwrap_or_default();
    Ok(raw
        .into_iter()
        .filter_map(|v| {
            let id = v.get("id").cloned();
            serde_json::from_value::<Transaction>(v)
                .map_err(|e| warn!(?id, error = %e, "skipping malformed transaction"))
                .ok()
        })
        .collect())
}

/// Everything the API knows about one user, fetched as a unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub user: User,
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default, deserialize_with = "de_transactions")]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl Snapshot {
    pub fn empty(telegram_id: i64) -> Self {
        Snapshot {
            user: User {
                telegram_id,
                currency: default_currency(),
            },
            accounts: Vec::new(),
            transactions: Vec::new(),
            categories: Vec::new(),
        }
    }

    pub fn currency(&self) -> &str {
        if self.user.currency.trim().is_empty() {
            DEFAULT_CURRENCY
        } else {
            &self.user.currency
        }
    }

    pub fn account(&self, id: i64) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    pub fn transaction(&self, id: i64) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id.matches(id))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewAccount {
    pub user_id: i64,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTransaction {
    pub user_id: i64,
    pub account_id: i64,
    #[serde(rename = "type")]
    pub kind: TxKind,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub category: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionUpdate {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub category: String,
    pub description: String,
    pub account_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCategory {
    pub user_id: i64,
    pub name: String,
    pub icon: String,
    #[serde(rename = "type")]
    pub kind: TxKind,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn snapshot_accepts_server_shape() {
        let raw = json!({
            "user": {"telegram_id": 42, "currency": "EUR"},
            "accounts": [{"id": 1, "user_id": 42, "name": "Main", "balance": "1000.00"}],
            "transactions": [{
                "id": 7, "account_id": 1, "type": "expense", "amount": 50.5,
                "category": "food", "description": null,
                "created_at": "2025-03-04T10:11:12.123456"
            }]
        });
        let snap: Snapshot = serde_json::from_value(raw).unwrap();
        assert_eq!(snap.accounts[0].balance, Decimal::new(100000, 2));
        assert_eq!(snap.transactions[0].amount, Decimal::new(505, 1));
        assert_eq!(
            snap.transactions[0].date(),
            NaiveDate::from_ymd_opt(2025, 3, 4).unwrap()
        );
        assert!(snap.categories.is_empty());
    }

    #[test]
    fn malformed_transactions_do_not_sink_the_accounts() {
        let raw = json!({
            "user": {"telegram_id": 42, "currency": "RUB"},
            "accounts": [{"id": 1, "name": "Main", "balance": 300}],
            "transactions": [
                {"id": 1, "account_id": 1, "type": "income", "amount": 10,
                 "category": "salary", "created_at": null},
                {"id": 2, "account_id": 1, "type": "refund", "amount": 5,
                 "category": "food", "created_at": "2025-03-04T10:00:00"},
                {"id": 3, "account_id": 1, "type": "expense", "amount": 7,
                 "category": "food", "created_at": "2025-03-04T11:00:00"}
            ],
            "categories": []
        });
        let snap: Snapshot = serde_json::from_value(raw).unwrap();
        assert_eq!(snap.accounts.len(), 1);
        assert_eq!(snap.accounts[0].balance, Decimal::new(300, 0));
        let ids: Vec<i64> = snap.transactions.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3]);

        let none: Snapshot =
            serde_json::from_value(json!({"user": {"telegram_id": 1}, "transactions": null}))
                .unwrap();
        assert!(none.transactions.is_empty());
    }

    #[test]
    fn numeric_category_ids_compare_as_strings() {
        let cat: Category =
            serde_json::from_value(json!({"id": 12, "type": "income", "name": "Tips"})).unwrap();
        assert!(cat.id.matches("12"));
        assert_eq!(cat.icon, DEFAULT_ICON);
    }

    #[test]
    fn timestamps_with_offset_land_on_utc_day() {
        let t = parse_timestamp("2025-01-01T01:30:00+03:00").unwrap();
        assert_eq!(t.date(), NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
        assert!(parse_timestamp("2025-01-01").is_some());
        assert!(parse_timestamp("yesterday").is_none());
    }

    #[test]
    fn outgoing_amounts_are_numbers() {
        let body = serde_json::to_value(NewAccount {
            user_id: 1,
            name: "Cash".into(),
            balance: Decimal::new(2550, 2),
        })
        .unwrap();
        assert_eq!(body, json!({"user_id": 1, "name": "Cash", "balance": 25.5}));
    }
}
