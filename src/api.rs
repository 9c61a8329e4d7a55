// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::errors::{ApiError, ApiResult};
use crate::models::{NewAccount, NewCategory, NewTransaction, Snapshot, TransactionUpdate};
use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

const UA: &str = concat!("pocketbook/", env!("CARGO_PKG_VERSION"));

/// Data access for the finance API. Writes report only success or failure;
/// callers re-fetch the snapshot to see the result.
pub trait FinanceApi {
    fn fetch_snapshot(&self, telegram_id: i64) -> ApiResult<Snapshot>;
    fn create_account(&self, account: &NewAccount) -> ApiResult<()>;
    fn delete_account(&self, id: i64) -> ApiResult<()>;
    fn create_transaction(&self, tx: &NewTransaction) -> ApiResult<()>;
    fn update_transaction(&self, id: i64, update: &TransactionUpdate) -> ApiResult<()>;
    fn delete_transaction(&self, id: i64) -> ApiResult<()>;
    fn create_category(&self, category: &NewCategory) -> ApiResult<()>;
    fn delete_category(&self, id: &str) -> ApiResult<()>;
}

pub fn http_client(timeout: Duration) -> ApiResult<Client> {
    let c = Client::builder().timeout(timeout).user_agent(UA).build()?;
    Ok(c)
}

pub struct HttpApi {
    base_url: String,
    client: Client,
}

impl HttpApi {
    pub fn new(base_url: &str, timeout: Duration) -> ApiResult<Self> {
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: http_client(timeout)?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn send_json<T: Serialize>(&self, method: reqwest::Method, path: &str, body: &T) -> ApiResult<()> {
        let url = self.url(path);
        debug!(%method, %url, "api write");
        let resp = self.client.request(method, url).json(body).send()?;
        check(resp).map(|_| ())
    }

    fn delete(&self, path: &str) -> ApiResult<()> {
        let url = self.url(path);
        debug!(%url, "api delete");
        let resp = self.client.delete(url).send()?;
        check(resp).map(|_| ())
    }
}

fn check(resp: Response) -> ApiResult<Response> {
    let status = resp.status();
    if status.is_success() {
        Ok(resp)
    } else {
        let body = resp.text().unwrap_or_default();
        Err(ApiError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

fn read_snapshot(status: StatusCode, body: &str) -> ApiResult<Snapshot> {
    if !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
            body: body.to_string(),
        });
    }
    Ok(serde_json::from_str(body)?)
}

impl FinanceApi for HttpApi {
    fn fetch_snapshot(&self, telegram_id: i64) -> ApiResult<Snapshot> {
        let url = self.url(&format!("user/{}", telegram_id));
        debug!(%url, "fetching snapshot");
        let resp = self.client.get(url).send()?;
        let status = resp.status();
        let body = resp.text()?;
        read_snapshot(status, &body)
    }

    fn create_account(&self, account: &NewAccount) -> ApiResult<()> {
        self.send_json(reqwest::Method::POST, "accounts", account)
    }

    fn delete_account(&self, id: i64) -> ApiResult<()> {
        self.delete(&format!("accounts/{}", id))
    }

    fn create_transaction(&self, tx: &NewTransaction) -> ApiResult<()> {
        self.send_json(reqwest::Method::POST, "transactions", tx)
    }

    fn update_transaction(&self, id: i64, update: &TransactionUpdate) -> ApiResult<()> {
        self.send_json(reqwest::Method::PUT, &format!("transactions/{}", id), update)
    }

    fn delete_transaction(&self, id: i64) -> ApiResult<()> {
        self.delete(&format!("transactions/{}", id))
    }

    fn create_category(&self, category: &NewCategory) -> ApiResult<()> {
        self.send_json(reqwest::Method::POST, "categories", category)
    }

    fn delete_category(&self, id: &str) -> ApiResult<()> {
        self.delete(&format!("categories/{}", id.trim()))
    }
}
