// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Thin client for the hosted PostgREST-style store. All persistence,
//! authorization, and query execution live on the other side of this module;
//! our contract is filtered per-user reads and fire-and-confirm writes,
//! followed by a re-fetch.

use anyhow::Result;
use serde_json::Value;
use thiserror::Error;

use crate::config::Config;

const UA: &str = concat!(
    "pesowise/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/alphavelocity/pesowise)"
);

/// Transport and auth failures talking to the store. Distinct from the local
/// advisory pre-checks in [`crate::aggregate`]: these mean the attempt
/// failed and the user should retry, not that a business rule fired.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("store rejected credentials (HTTP {0})")]
    Auth(u16),
    #[error("unexpected response from store: {0}")]
    Decode(String),
}

pub struct Store {
    client: reqwest::blocking::Client,
    base: String,
    key: String,
    user: String,
}

impl Store {
    pub fn from_config(cfg: &Config) -> Result<Self> {
        cfg.validate()?;
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(15))
            .user_agent(UA)
            .build()?;
        Ok(Store {
            client,
            base: cfg.service_url.trim_end_matches('/').to_string(),
            key: cfg.api_key.clone(),
            user: cfg.user_id.clone(),
        })
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    /// Read rows from `table`, always filtered to the configured user.
    /// Extra filters use PostgREST operator syntax, e.g. `("period", "eq.monthly")`.
    pub fn select(
        &self,
        table: &str,
        filters: &[(&str, String)],
        order: Option<&str>,
    ) -> Result<Vec<Value>, StoreError> {
        let mut query: Vec<(&str, String)> = vec![
            ("select", "*".to_string()),
            ("user_id", format!("eq.{}", self.user)),
        ];
        query.extend(filters.iter().cloned());
        if let Some(o) = order {
            query.push(("order", o.to_string()));
        }
        let resp = self
            .client
            .get(self.url(table))
            .header("apikey", &self.key)
            .bearer_auth(&self.key)
            .query(&query)
            .send()?;
        let resp = Self::check_auth(resp)?.error_for_status()?;
        let body = resp.text()?;
        serde_json::from_str(&body).map_err(|e| StoreError::Decode(e.to_string()))
    }

    pub fn insert(&self, table: &str, row: Value) -> Result<(), StoreError> {
        let resp = self
            .client
            .post(self.url(table))
            .header("apikey", &self.key)
            .header("Prefer", "return=minimal")
            .bearer_auth(&self.key)
            .json(&row)
            .send()?;
        Self::check_auth(resp)?.error_for_status()?;
        Ok(())
    }

    pub fn update(&self, table: &str, id: &str, patch: Value) -> Result<(), StoreError> {
        let resp = self
            .client
            .patch(self.url(table))
            .header("apikey", &self.key)
            .header("Prefer", "return=minimal")
            .bearer_auth(&self.key)
            .query(&[("id", format!("eq.{}", id))])
            .json(&patch)
            .send()?;
        Self::check_auth(resp)?.error_for_status()?;
        Ok(())
    }

    pub fn delete(&self, table: &str, id: &str) -> Result<(), StoreError> {
        let resp = self
            .client
            .delete(self.url(table))
            .header("apikey", &self.key)
            .bearer_auth(&self.key)
            .query(&[("id", format!("eq.{}", id))])
            .send()?;
        Self::check_auth(resp)?.error_for_status()?;
        Ok(())
    }

    /// Cheap reachability probe used by `doctor`: a zero-row read against a
    /// known table.
    pub fn ping(&self) -> Result<(), StoreError> {
        self.select("budgets", &[("limit", "0".to_string())], None)?;
        Ok(())
    }

    fn url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base, table)
    }

    fn check_auth(
        resp: reqwest::blocking::Response,
    ) -> Result<reqwest::blocking::Response, StoreError> {
        let status = resp.status();
        if status.as_u16() == 401 || status.as_u16() == 403 {
            return Err(StoreError::Auth(status.as_u16()));
        }
        Ok(resp)
    }
}
