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


use std::sync::Arc;

use azacct_core::{Context, NoopRateLimit, RateLimit, Result};
use log::debug;

use crate::{
    first_valid_key, select_accounts, AccountWithLocation, ArmStorageAccountClient, Config,
    StorageAccountClient,
};

/// StorageAccounts answers storage account queries for one resource group.
///
/// Every query waits on the rate limiter once and then issues exactly one
/// call through the client. Client errors are returned as is.
#[derive(Clone, Debug)]
pub struct StorageAccounts {
    client: Arc<dyn StorageAccountClient>,
    rate_limit: Arc<dyn RateLimit>,
    resource_group: String,
}

impl StorageAccounts {
    /// Create a new StorageAccounts scoped to `resource_group`.
    pub fn new(client: impl StorageAccountClient, resource_group: impl Into<String>) -> Self {
        Self {
            client: Arc::new(client),
            rate_limit: Arc::new(NoopRateLimit),
            resource_group: resource_group.into(),
        }
    }

    /// Build an [`ArmStorageAccountClient`] backed instance from config.
    pub fn from_config(ctx: Context, config: &Config) -> Result<Self> {
        let resource_group = config.require_resource_group()?.to_string();
        let client = ArmStorageAccountClient::from_config(ctx, config)?;
        Ok(Self::new(client, resource_group))
    }

    /// Set the rate limiter consulted before every outbound call.
    pub fn with_rate_limit(mut self, rate_limit: impl RateLimit) -> Self {
        self.rate_limit = Arc::new(rate_limit);
        self
    }

    /// The resource group every query is scoped to.
    pub fn resource_group(&self) -> &str {
        &self.resource_group
    }

    /// Get name, type and location of all storage accounts in the resource group
    /// whose type and location match.
    ///
    /// Matching is case-insensitive and an empty string matches any value.
    pub async fn get_storage_accounts(
        &self,
        matching_type: &str,
        matching_location: &str,
    ) -> Result<Vec<AccountWithLocation>> {
        self.rate_limit.accept().await;
        debug!(
            "listing storage accounts in resource group {}",
            self.resource_group
        );
        let result = self
            .client
            .list_by_resource_group(&self.resource_group)
            .await?;

        select_accounts(
            &self.resource_group,
            &result,
            matching_type,
            matching_location,
        )
    }

    /// Get an access key of the storage account.
    pub async fn get_storage_access_key(&self, account: &str) -> Result<String> {
        self.rate_limit.accept().await;
        debug!(
            "listing keys of storage account {account} in resource group {}",
            self.resource_group
        );
        let result = self
            .client
            .list_keys(&self.resource_group, account)
            .await?;

        first_valid_key(&result)
    }
}
