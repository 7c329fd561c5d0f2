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


//! Payloads of the `Microsoft.Storage/storageAccounts` resource provider.
//!
//! Every field the service may omit is an `Option`, so callers can tell a
//! missing value apart from an empty one.

use azacct_core::utils::Redact;
use serde::Deserialize;
use std::fmt::{Debug, Formatter};

/// Response of `storageAccounts` list by resource group.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct StorageAccountListResult {
    /// Listed accounts, `None` if the service omitted the list entirely.
    pub value: Option<Vec<StorageAccount>>,
}

/// A storage account resource.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct StorageAccount {
    /// Fully qualified resource id.
    pub id: Option<String>,
    /// Account name.
    pub name: Option<String>,
    /// Azure region, e.g. `eastus`.
    pub location: Option<String>,
    /// Account kind, e.g. `StorageV2`.
    pub kind: Option<String>,
    /// Pricing tier and replication of this account.
    pub sku: Option<Sku>,
}

/// SKU of a storage account.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Sku {
    /// Storage account type, e.g. `Standard_LRS` or `Premium_LRS`.
    #[serde(default)]
    pub name: String,
    /// `Standard` or `Premium`.
    pub tier: Option<String>,
}

/// Response of `listKeys` on a storage account.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct StorageAccountListKeysResult {
    /// Access keys, `None` if the service omitted them.
    pub keys: Option<Vec<StorageAccountKey>>,
}

/// One access key of a storage account.
#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageAccountKey {
    /// Key name, e.g. `key1`.
    pub key_name: Option<String>,
    /// Base64 key value.
    pub value: Option<String>,
    /// `Full` or `Read`.
    pub permissions: Option<String>,
}

impl Debug for StorageAccountKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageAccountKey")
            .field("key_name", &self.key_name)
            .field("value", &Redact::from(&self.value))
            .field("permissions", &self.permissions)
            .finish()
    }
}

/// Error body returned by the resource manager.
#[derive(Clone, Debug, Default, Deserialize)]
pub(crate) struct ErrorResponse {
    pub error: Option<ErrorDetail>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub(crate) struct ErrorDetail {
    pub code: Option<String>,
    pub message: Option<String>,
}
