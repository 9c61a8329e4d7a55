// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

#![allow(dead_code)]

use chrono::NaiveDate;
use pocketbook::api::FinanceApi;
use pocketbook::bridge::HostBridge;
use pocketbook::errors::{ApiError, ApiResult};
use pocketbook::filters::DateRange;
use pocketbook::models::{
    Account, Category, CategoryId, NewAccount, NewCategory, NewTransaction, Snapshot,
    Transaction, TransactionUpdate, TxKind, User,
};
use pocketbook::session::FinanceSession;
use rust_decimal::Decimal;
use std::cell::{Cell, RefCell};
use std::time::Duration;

pub const USER: i64 = 42;

pub fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

pub fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn range(start: &str, end: &str) -> DateRange {
    DateRange::new(day(start), day(end))
}

pub fn account(id: i64, name: &str, balance: &str) -> Account {
    Account {
        id,
        user_id: Some(USER),
        name: name.into(),
        balance: dec(balance),
    }
}

pub fn tx(id: i64, kind: TxKind, amount: &str, category: &str, date: &str) -> Transaction {
    Transaction {
        id,
        user_id: Some(USER),
        account_id: Some(1),
        kind,
        amount: dec(amount),
        category: CategoryId::from(category),
        description: None,
        created_at: day(date).and_hms_opt(12, 0, 0).unwrap(),
    }
}

pub fn custom(id: i64, kind: TxKind, name: &str, icon: &str) -> Category {
    Category {
        id: CategoryId::from(id),
        user_id: Some(USER),
        kind,
        name: name.into(),
        icon: icon.into(),
    }
}

pub fn snapshot(
    accounts: Vec<Account>,
    transactions: Vec<Transaction>,
    categories: Vec<Category>,
) -> Snapshot {
    Snapshot {
        user: User {
            telegram_id: USER,
            currency: "RUB".into(),
        },
        accounts,
        transactions,
        categories,
    }
}

/// In-memory stand-in for the finance API. Writes are applied to the held
/// snapshot so the next fetch sees them.
pub struct FakeApi {
    pub state: RefCell<Snapshot>,
    pub calls: RefCell<Vec<String>>,
    pub fail_reads: Cell<bool>,
    pub fail_writes: Cell<bool>,
    pub read_delay: Cell<Duration>,
    next_id: Cell<i64>,
}

impl FakeApi {
    pub fn new(state: Snapshot) -> Self {
        Self {
            state: RefCell::new(state),
            calls: RefCell::new(Vec::new()),
            fail_reads: Cell::new(false),
            fail_writes: Cell::new(false),
            read_delay: Cell::new(Duration::ZERO),
            next_id: Cell::new(100),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn writes(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|c| !c.starts_with("GET"))
            .collect()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }

    fn write(&self, call: String) -> ApiResult<i64> {
        self.record(call);
        if self.fail_writes.get() {
            return Err(ApiError::Status {
                status: 500,
                body: "boom".into(),
            });
        }
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        Ok(id)
    }
}

impl FinanceApi for FakeApi {
    fn fetch_snapshot(&self, telegram_id: i64) -> ApiResult<Snapshot> {
        self.record(format!("GET user/{}", telegram_id));
        std::thread::sleep(self.read_delay.get());
        if self.fail_reads.get() {
            return Err(ApiError::Status {
                status: 404,
                body: "User not found".into(),
            });
        }
        Ok(self.state.borrow().clone())
    }

    fn create_account(&self, a: &NewAccount) -> ApiResult<()> {
        let id = self.write(format!("POST accounts {}", a.name))?;
        self.state.borrow_mut().accounts.push(Account {
            id,
            user_id: Some(a.user_id),
            name: a.name.clone(),
            balance: a.balance,
        });
        Ok(())
    }

    fn delete_account(&self, id: i64) -> ApiResult<()> {
        self.write(format!("DELETE accounts/{}", id))?;
        self.state.borrow_mut().accounts.retain(|a| a.id != id);
        Ok(())
    }

    fn create_transaction(&self, t: &NewTransaction) -> ApiResult<()> {
        let id = self.write(format!("POST transactions {} {}", t.kind, t.amount))?;
        self.state.borrow_mut().transactions.insert(
            0,
            Transaction {
                id,
                user_id: Some(t.user_id),
                account_id: Some(t.account_id),
                kind: t.kind,
                amount: t.amount,
                category: CategoryId::from(t.category.as_str()),
                description: Some(t.description.clone()),
                created_at: chrono::Utc::now().naive_utc(),
            },
        );
        Ok(())
    }

    fn update_transaction(&self, id: i64, u: &TransactionUpdate) -> ApiResult<()> {
        self.write(format!("PUT transactions/{}", id))?;
        if let Some(t) = self
            .state
            .borrow_mut()
            .transactions
            .iter_mut()
            .find(|t| t.id == id)
        {
            t.amount = u.amount;
            t.category = CategoryId::from(u.category.as_str());
            t.description = Some(u.description.clone());
            t.account_id = Some(u.account_id);
        }
        Ok(())
    }

    fn delete_transaction(&self, id: i64) -> ApiResult<()> {
        self.write(format!("DELETE transactions/{}", id))?;
        self.state.borrow_mut().transactions.retain(|t| t.id != id);
        Ok(())
    }

    fn create_category(&self, c: &NewCategory) -> ApiResult<()> {
        let id = self.write(format!("POST categories {}", c.name))?;
        self.state.borrow_mut().categories.push(Category {
            id: CategoryId::from(id),
            user_id: Some(c.user_id),
            kind: c.kind,
            name: c.name.clone(),
            icon: c.icon.clone(),
        });
        Ok(())
    }

    fn delete_category(&self, id: &str) -> ApiResult<()> {
        self.write(format!("DELETE categories/{}", id))?;
        self.state
            .borrow_mut()
            .categories
            .retain(|c| !c.id.matches(id));
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingBridge {
    pub user: Option<i64>,
    pub sent: RefCell<Vec<String>>,
    pub lifecycle: RefCell<Vec<&'static str>>,
}

impl RecordingBridge {
    pub fn for_user(user: i64) -> Self {
        Self {
            user: Some(user),
            ..Self::default()
        }
    }
}

impl HostBridge for RecordingBridge {
    fn ready(&self) {
        self.lifecycle.borrow_mut().push("ready");
    }

    fn expand(&self) {
        self.lifecycle.borrow_mut().push("expand");
    }

    fn close(&self) {
        self.lifecycle.borrow_mut().push("close");
    }

    fn send_data(&self, payload: &str) {
        self.sent.borrow_mut().push(payload.to_string());
    }

    fn user_id(&self) -> Option<i64> {
        self.user
    }
}

pub type TestSession = FinanceSession<FakeApi, RecordingBridge>;

pub fn session(state: Snapshot) -> TestSession {
    FinanceSession::new(FakeApi::new(state), RecordingBridge::for_user(USER))
}
