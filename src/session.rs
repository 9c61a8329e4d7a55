// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The finance view model: snapshot, filters, derived state, the open form
//! and the write commands. Errors never leave this type; reads degrade to an
//! empty snapshot and writes to an error notice.

use crate::api::FinanceApi;
use crate::bridge::HostBridge;
use crate::categories::CategoryResolver;
use crate::chart::ExpenseChart;
use crate::errors::ApiResult;
use crate::filters::{DateRange, Filter, TypeFilter};
use crate::forms::{AccountForm, CategoryForm, FormState, ModalForm, TransactionForm};
use crate::models::{Snapshot, TxKind};
use crate::mutation::Mutation;
use crate::notify::{Notice, Snackbar};
use crate::snapshot;
use crate::stats::Stats;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Write accepted and the snapshot re-fetched.
    Submitted,
    /// Write rejected or never reached the server; snapshot unchanged.
    Failed,
    /// Required field blank or unparseable; nothing sent, form still open.
    Invalid,
    /// Another write is still in flight; nothing sent.
    Busy,
    /// No form open.
    NoForm,
}

pub struct FinanceSession<A, B> {
    api: A,
    bridge: B,
    user_id: i64,
    snapshot: Snapshot,
    filter: Filter,
    form: FormState,
    in_flight: bool,
    snackbar: Snackbar,
}

impl<A: FinanceApi, B: HostBridge> FinanceSession<A, B> {
    pub fn new(api: A, bridge: B) -> Self {
        bridge.ready();
        bridge.expand();
        let user_id = bridge.resolved_user_id();
        let snapshot = snapshot::load(&api, user_id);
        Self {
            api,
            bridge,
            user_id,
            snapshot,
            filter: Filter::default(),
            form: FormState::Idle,
            in_flight: false,
            snackbar: Snackbar::default(),
        }
    }

    pub fn with_notice_ttl(mut self, ttl: Duration) -> Self {
        self.snackbar = Snackbar::new(ttl);
        self
    }

    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = filter;
        self
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn bridge(&self) -> &B {
        &self.bridge
    }

    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn currency(&self) -> &str {
        self.snapshot.currency()
    }

    pub fn refresh(&mut self) {
        self.snapshot = snapshot::load(&self.api, self.user_id);
    }

    pub fn close(&self) {
        self.bridge.close();
    }

    // --- filters and derived state ---

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn set_date_range(&mut self, range: DateRange) {
        self.filter.range = range;
    }

    pub fn set_type_filter(&mut self, kind: TypeFilter) {
        self.filter.kind = kind;
    }

    pub fn stats(&self) -> Stats {
        Stats::derive(&self.snapshot, &self.filter)
    }

    pub fn chart(&self) -> ExpenseChart {
        ExpenseChart::build(&self.snapshot, &self.filter.range)
    }

    pub fn categories(&self) -> CategoryResolver<'_> {
        CategoryResolver::new(&self.snapshot.categories)
    }

    // --- notifications ---

    pub fn notice(&self) -> Option<&Notice> {
        self.snackbar.visible(Instant::now())
    }

    pub fn notice_at(&self, now: Instant) -> Option<&Notice> {
        self.snackbar.visible(now)
    }

    /// Notice left by the last write, whether or not its timer has run out.
    pub fn last_notice(&self) -> Option<&Notice> {
        self.snackbar.last()
    }

    pub fn snackbar_mut(&mut self) -> &mut Snackbar {
        &mut self.snackbar
    }

    fn notify(&mut self, notice: Notice) {
        self.snackbar.show(notice, Instant::now());
    }

    // --- forms ---

    pub fn form_state(&self) -> &FormState {
        &self.form
    }

    /// The open form, while it can still be edited.
    pub fn form_mut(&mut self) -> Option<&mut ModalForm> {
        match &mut self.form {
            FormState::Editing(f) => Some(f),
            _ => None,
        }
    }

    fn open(&mut self, form: ModalForm) -> bool {
        if matches!(self.form, FormState::Submitting(_)) {
            return false;
        }
        debug!(modal = form.title(), "opening form");
        self.form = FormState::Editing(form);
        true
    }

    pub fn open_create_account(&mut self) -> bool {
        self.open(ModalForm::CreateAccount(AccountForm::default()))
    }

    pub fn open_new_transaction(&mut self, kind: TxKind) -> bool {
        let default_account = self.snapshot.accounts.first().map(|a| a.id);
        self.open(ModalForm::NewTransaction(TransactionForm::blank(
            kind,
            default_account,
        )))
    }

    /// Opens the edit form pre-filled from the transaction; `false` if the id
    /// is not in the snapshot.
    pub fn open_edit_transaction(&mut self, id: i64) -> bool {
        let Some(form) = self
            .snapshot
            .transaction(id)
            .map(TransactionForm::from_transaction)
        else {
            return false;
        };
        self.open(ModalForm::EditTransaction { id, form })
    }

    pub fn open_add_category(&mut self, kind: TxKind) -> bool {
        self.open(ModalForm::AddCategory(CategoryForm::blank(kind)))
    }

    pub fn open_manage_categories(&mut self) -> bool {
        self.open(ModalForm::ManageCategories)
    }

    pub fn close_modal(&mut self) {
        if let FormState::Editing(_) = self.form {
            self.form = FormState::Idle;
        }
    }

    fn validate(&self, form: &ModalForm) -> Option<Mutation> {
        match form {
            ModalForm::CreateAccount(f) => f.validate(self.user_id).map(Mutation::CreateAccount),
            ModalForm::NewTransaction(f) => f.to_new(self.user_id).map(|tx| {
                let account_name = self.snapshot.account(tx.account_id).map(|a| a.name.clone());
                Mutation::CreateTransaction { tx, account_name }
            }),
            ModalForm::EditTransaction { id, form } => form
                .to_update()
                .map(|update| Mutation::UpdateTransaction { id: *id, update }),
            ModalForm::AddCategory(f) => f.validate(self.user_id).map(Mutation::CreateCategory),
            ModalForm::ManageCategories => None,
        }
    }

    // --- writes ---

    /// Validate the open form and mark it as submitting. The returned
    /// mutation must be handed back through [`Self::complete`].
    pub fn begin_submit(&mut self) -> Result<Mutation, SubmitOutcome> {
        if self.in_flight {
            return Err(SubmitOutcome::Busy);
        }
        let FormState::Editing(form) = &self.form else {
            return Err(SubmitOutcome::NoForm);
        };
        let form = form.clone();
        let Some(mutation) = self.validate(&form) else {
            debug!(modal = form.title(), "form incomplete, nothing submitted");
            return Err(SubmitOutcome::Invalid);
        };
        self.form = FormState::Submitting(form);
        self.in_flight = true;
        Ok(mutation)
    }

    /// Mark a form-less write (a delete) as in flight.
    pub fn begin(&mut self, mutation: Mutation) -> Result<Mutation, SubmitOutcome> {
        if self.in_flight {
            return Err(SubmitOutcome::Busy);
        }
        self.in_flight = true;
        Ok(mutation)
    }

    /// Settle an in-flight write with the server's answer.
    pub fn complete(&mut self, mutation: &Mutation, result: ApiResult<()>) -> SubmitOutcome {
        self.in_flight = false;
        let submitting = std::mem::take(&mut self.form);
        match result {
            Ok(()) => {
                info!(user_id = self.user_id, "{}", mutation.success_message());
                if let Some(event) = mutation.host_event() {
                    self.bridge.send_data(&event.to_string());
                }
                self.form = match submitting {
                    FormState::Submitting(_) => FormState::Idle,
                    other => other,
                };
                self.refresh();
                self.notify(Notice::success(mutation.success_message()));
                SubmitOutcome::Submitted
            }
            Err(e) => {
                warn!(error = %e, "{}", mutation.failure_message());
                self.form = match submitting {
                    FormState::Submitting(f) => FormState::Editing(f),
                    other => other,
                };
                self.notify(Notice::error(mutation.failure_message()));
                SubmitOutcome::Failed
            }
        }
    }

    fn execute(&mut self, started: Result<Mutation, SubmitOutcome>) -> SubmitOutcome {
        match started {
            Err(outcome) => outcome,
            Ok(mutation) => {
                let result = mutation.run(&self.api);
                self.complete(&mutation, result)
            }
        }
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        let started = self.begin_submit();
        self.execute(started)
    }

    pub fn delete_account(&mut self, id: i64) -> SubmitOutcome {
        let name = self
            .snapshot
            .account(id)
            .map(|a| a.name.clone())
            .unwrap_or_else(|| format!("#{}", id));
        let started = self.begin(Mutation::DeleteAccount { id, name });
        self.execute(started)
    }

    pub fn delete_transaction(&mut self, id: i64) -> SubmitOutcome {
        let started = self.begin(Mutation::DeleteTransaction(id));
        self.execute(started)
    }

    pub fn delete_category(&mut self, id: &str) -> SubmitOutcome {
        if id.trim().is_empty() {
            return SubmitOutcome::Invalid;
        }
        let started = self.begin(Mutation::DeleteCategory(id.trim().to_string()));
        self.execute(started)
    }
}
