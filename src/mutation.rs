// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::FinanceApi;
use crate::errors::ApiResult;
use crate::models::{NewAccount, NewCategory, NewTransaction, TransactionUpdate};
use rust_decimal::prelude::ToPrimitive;
use serde_json::{Value, json};

/// A validated write, ready to send.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    CreateAccount(NewAccount),
    DeleteAccount {
        id: i64,
        name: String,
    },
    CreateTransaction {
        tx: NewTransaction,
        account_name: Option<String>,
    },
    UpdateTransaction {
        id: i64,
        update: TransactionUpdate,
    },
    DeleteTransaction(i64),
    CreateCategory(NewCategory),
    DeleteCategory(String),
}

impl Mutation {
    pub fn run<A: FinanceApi + ?Sized>(&self, api: &A) -> ApiResult<()> {
        match self {
            Mutation::CreateAccount(a) => api.create_account(a),
            Mutation::DeleteAccount { id, .. } => api.delete_account(*id),
            Mutation::CreateTransaction { tx, .. } => api.create_transaction(tx),
            Mutation::UpdateTransaction { id, update } => api.update_transaction(*id, update),
            Mutation::DeleteTransaction(id) => api.delete_transaction(*id),
            Mutation::CreateCategory(c) => api.create_category(c),
            Mutation::DeleteCategory(id) => api.delete_category(id),
        }
    }

    pub fn success_message(&self) -> String {
        match self {
            Mutation::CreateAccount(_) => "Account created!".into(),
            Mutation::DeleteAccount { name, .. } => format!("Account \"{}\" deleted!", name),
            Mutation::CreateTransaction { .. } => "Transaction created!".into(),
            Mutation::UpdateTransaction { .. } => "Transaction updated!".into(),
            Mutation::DeleteTransaction(_) => "Transaction deleted!".into(),
            Mutation::CreateCategory(_) => "Category added!".into(),
            Mutation::DeleteCategory(_) => "Category deleted!".into(),
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            Mutation::CreateAccount(_) => "Could not create account",
            Mutation::DeleteAccount { .. } => "Could not delete account",
            Mutation::CreateTransaction { .. } => "Could not create transaction",
            Mutation::UpdateTransaction { .. } => "Could not update transaction",
            Mutation::DeleteTransaction(_) => "Could not delete transaction",
            Mutation::CreateCategory(_) => "Could not add category",
            Mutation::DeleteCategory(_) => "Could not delete category",
        }
    }

    /// Event reported to the host shell after a successful write, if any.
    pub fn host_event(&self) -> Option<Value> {
        match self {
            Mutation::CreateAccount(a) => Some(json!({
                "type": "create_account",
                "name": a.name,
                "balance": a.balance.to_f64(),
            })),
            Mutation::CreateTransaction { tx, account_name } => Some(json!({
                "type": tx.kind.as_str(),
                "amount": tx.amount.to_f64(),
                "account_id": tx.account_id,
                "account": account_name,
                "category": tx.category,
                "description": tx.description,
            })),
            _ => None,
        }
    }
}
