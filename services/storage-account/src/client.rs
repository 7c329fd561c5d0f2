// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.


use std::fmt::Debug;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use azacct_core::{Context, Error, ProvideCredential, Result, SigningCredential};
use bytes::Bytes;
use http::header::{ACCEPT, AUTHORIZATION};
use http::{Method, StatusCode};
use log::debug;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;

use crate::constants::STORAGE_PROVIDER;
use crate::model::{ErrorResponse, StorageAccountListKeysResult, StorageAccountListResult};
use crate::{Config, Credential, DefaultCredentialProvider};

/// StorageAccountClient is the management API surface the queries rely on.
///
/// Errors are returned to callers of [`crate::StorageAccounts`] unchanged.
#[async_trait]
pub trait StorageAccountClient: Debug + Send + Sync + 'static {
    /// List all storage accounts in a resource group.
    async fn list_by_resource_group(&self, resource_group: &str)
        -> Result<StorageAccountListResult>;

    /// List the access keys of a storage account.
    async fn list_keys(
        &self,
        resource_group: &str,
        account: &str,
    ) -> Result<StorageAccountListKeysResult>;
}

/// Unreserved characters of RFC 3986 stay as is, everything else in a path segment is encoded.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// StorageAccountClient backed by the Azure Resource Manager REST API.
///
/// Reference: <https://learn.microsoft.com/en-us/rest/api/storagerp/storage-accounts>
#[derive(Clone, Debug)]
pub struct ArmStorageAccountClient {
    ctx: Context,
    endpoint: String,
    api_version: String,
    subscription_id: String,
    loader: Arc<dyn ProvideCredential<Credential = Credential>>,
    credential: Arc<Mutex<Option<Credential>>>,
}

impl ArmStorageAccountClient {
    /// Create a client for the given subscription.
    pub fn new(
        ctx: Context,
        subscription_id: impl Into<String>,
        loader: impl ProvideCredential<Credential = Credential>,
    ) -> Self {
        let config = Config::default();
        Self {
            ctx,
            endpoint: config.endpoint().to_string(),
            api_version: config.api_version().to_string(),
            subscription_id: subscription_id.into(),
            loader: Arc::new(loader),
            credential: Arc::new(Mutex::new(None)),
        }
    }

    /// Create a client from config, loading tokens with [`DefaultCredentialProvider`].
    pub fn from_config(ctx: Context, config: &Config) -> Result<Self> {
        let subscription_id = config.require_subscription_id()?;
        Ok(
            Self::new(ctx, subscription_id, DefaultCredentialProvider::from_config(config))
                .with_endpoint(config.endpoint())
                .with_api_version(config.api_version()),
        )
    }

    /// Set the resource manager endpoint.
    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.trim_end_matches('/').to_string();
        self
    }

    /// Set the api version of the storage resource provider.
    pub fn with_api_version(mut self, api_version: &str) -> Self {
        self.api_version = api_version.to_string();
        self
    }

    fn url(&self, resource_group: &str, suffix: &str) -> String {
        format!(
            "{}/subscriptions/{}/resourceGroups/{}/providers/{}{}?api-version={}",
            self.endpoint,
            utf8_percent_encode(&self.subscription_id, PATH_SEGMENT),
            utf8_percent_encode(resource_group, PATH_SEGMENT),
            STORAGE_PROVIDER,
            suffix,
            utf8_percent_encode(&self.api_version, PATH_SEGMENT),
        )
    }

    async fn credential(&self) -> Result<Credential> {
        let cached = self.credential.lock().expect("lock poisoned").clone();
        if let Some(cred) = cached.filter(|c| c.is_valid()) {
            return Ok(cred);
        }

        let cred = self
            .loader
            .provide_credential(&self.ctx)
            .await?
            .filter(|c| c.is_valid())
            .ok_or_else(|| {
                Error::credential_invalid("no valid credential found for resource manager")
            })?;
        *self.credential.lock().expect("lock poisoned") = Some(cred.clone());
        Ok(cred)
    }

    async fn send<T: DeserializeOwned + Send>(&self, method: Method, url: &str) -> Result<T> {
        let cred = self.credential().await?;

        let req = http::Request::builder()
            .method(method.clone())
            .uri(url)
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, format!("Bearer {}", cred.token))
            .body(Bytes::new())?;

        debug!("sending resource manager request: {method} {url}");
        let resp = self.ctx.http_send(req).await?;
        let status = resp.status();

        if status == StatusCode::UNAUTHORIZED {
            // Force the next call to load a fresh token.
            *self.credential.lock().expect("lock poisoned") = None;
        }

        if !status.is_success() {
            return Err(Error::unexpected(format!(
                "{method} {url} failed with status {status}: {}",
                describe_error(resp.body())
            )));
        }

        serde_json::from_slice(resp.body()).map_err(|e| {
            Error::unexpected(format!("failed to parse response of {method} {url}")).with_source(e)
        })
    }
}

/// Prefer the structured `code: message` of a resource manager error, fall back to the raw body.
fn describe_error(body: &[u8]) -> String {
    match serde_json::from_slice::<ErrorResponse>(body)
        .ok()
        .and_then(|r| r.error)
    {
        Some(detail) => format!(
            "{}: {}",
            detail.code.unwrap_or_default(),
            detail.message.unwrap_or_default()
        ),
        None => String::from_utf8_lossy(body).to_string(),
    }
}

#[async_trait]
impl StorageAccountClient for ArmStorageAccountClient {
    async fn list_by_resource_group(
        &self,
        resource_group: &str,
    ) -> Result<StorageAccountListResult> {
        let url = self.url(resource_group, "");
        self.send(Method::GET, &url).await
    }

    async fn list_keys(
        &self,
        resource_group: &str,
        account: &str,
    ) -> Result<StorageAccountListKeysResult> {
        let suffix = format!("/{}/listKeys", utf8_percent_encode(account, PATH_SEGMENT));
        let url = self.url(resource_group, &suffix);
        self.send(Method::POST, &url).await
    }
}
