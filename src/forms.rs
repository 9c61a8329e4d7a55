// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Per-modal input structs. Each one validates itself; a form with a blank or
//! unparseable required field produces nothing to submit.

use crate::models::{
    DEFAULT_ICON, NewAccount, NewCategory, NewTransaction, Transaction, TransactionUpdate, TxKind,
};
use rust_decimal::Decimal;

fn required(s: &str) -> Option<&str> {
    let s = s.trim();
    if s.is_empty() { None } else { Some(s) }
}

fn decimal(s: &str) -> Option<Decimal> {
    required(s)?.parse::<Decimal>().ok()
}

fn positive(s: &str) -> Option<Decimal> {
    decimal(s).filter(|d| *d > Decimal::ZERO)
}

fn id(s: &str) -> Option<i64> {
    required(s)?.parse::<i64>().ok()
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AccountForm {
    pub name: String,
    pub balance: String,
}

impl AccountForm {
    pub fn validate(&self, user_id: i64) -> Option<NewAccount> {
        Some(NewAccount {
            user_id,
            name: required(&self.name)?.to_string(),
            balance: decimal(&self.balance)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransactionForm {
    pub kind: TxKind,
    pub amount: String,
    pub account_id: String,
    pub category: String,
    pub description: String,
}

impl TransactionForm {
    pub fn blank(kind: TxKind, default_account: Option<i64>) -> Self {
        Self {
            kind,
            amount: String::new(),
            account_id: default_account.map(|a| a.to_string()).unwrap_or_default(),
            category: String::new(),
            description: String::new(),
        }
    }

    pub fn from_transaction(t: &Transaction) -> Self {
        Self {
            kind: t.kind,
            amount: t.amount.to_string(),
            account_id: t.account_id.map(|a| a.to_string()).unwrap_or_default(),
            category: t.category.to_string(),
            description: t.description.clone().unwrap_or_default(),
        }
    }

    pub fn account(&self) -> Option<i64> {
        id(&self.account_id)
    }

    pub fn to_new(&self, user_id: i64) -> Option<NewTransaction> {
        Some(NewTransaction {
            user_id,
            account_id: self.account()?,
            kind: self.kind,
            amount: positive(&self.amount)?,
            category: required(&self.category)?.to_string(),
            description: self.description.trim().to_string(),
        })
    }

    pub fn to_update(&self) -> Option<TransactionUpdate> {
        Some(TransactionUpdate {
            amount: positive(&self.amount)?,
            category: required(&self.category)?.to_string(),
            description: self.description.trim().to_string(),
            account_id: self.account()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryForm {
    pub kind: TxKind,
    pub name: String,
    pub icon: String,
}

impl CategoryForm {
    pub fn blank(kind: TxKind) -> Self {
        Self {
            kind,
            name: String::new(),
            icon: DEFAULT_ICON.to_string(),
        }
    }

    pub fn validate(&self, user_id: i64) -> Option<NewCategory> {
        let icon = required(&self.icon).unwrap_or(DEFAULT_ICON);
        Some(NewCategory {
            user_id,
            name: required(&self.name)?.to_string(),
            icon: icon.to_string(),
            kind: self.kind,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ModalForm {
    CreateAccount(AccountForm),
    NewTransaction(TransactionForm),
    EditTransaction { id: i64, form: TransactionForm },
    AddCategory(CategoryForm),
    ManageCategories,
}

impl ModalForm {
    pub fn title(&self) -> &'static str {
        match self {
            ModalForm::CreateAccount(_) => "New account",
            ModalForm::NewTransaction(f) if f.kind == TxKind::Income => "New income",
            ModalForm::NewTransaction(_) => "New expense",
            ModalForm::EditTransaction { .. } => "Edit transaction",
            ModalForm::AddCategory(_) => "New category",
            ModalForm::ManageCategories => "Manage categories",
        }
    }
}

/// `Idle -> Editing -> Submitting -> Idle | Editing`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormState {
    #[default]
    Idle,
    Editing(ModalForm),
    Submitting(ModalForm),
}

impl FormState {
    pub fn is_open(&self) -> bool {
        !matches!(self, FormState::Idle)
    }

    pub fn form(&self) -> Option<&ModalForm> {
        match self {
            FormState::Idle => None,
            FormState::Editing(f) | FormState::Submitting(f) => Some(f),
        }
    }
}
