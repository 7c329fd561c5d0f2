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


use async_trait::async_trait;
use azacct_core::{Error, ErrorKind, RateLimit, Result};
use azacct_storage_account::model::{
    Sku, StorageAccount, StorageAccountKey, StorageAccountListKeysResult,
    StorageAccountListResult,
};
use azacct_storage_account::{AccountWithLocation, StorageAccountClient, StorageAccounts};
use pretty_assertions::assert_eq;

use crate::{init_logger, CallLog};

#[derive(Debug)]
struct MockClient {
    log: CallLog,
    accounts: Result<StorageAccountListResult>,
    keys: Result<StorageAccountListKeysResult>,
}

fn clone_result<T: Clone>(r: &Result<T>) -> Result<T> {
    match r {
        Ok(v) => Ok(v.clone()),
        Err(e) => Err(Error::new(e.kind(), e.to_string())),
    }
}

#[async_trait]
impl StorageAccountClient for MockClient {
    async fn list_by_resource_group(
        &self,
        resource_group: &str,
    ) -> Result<StorageAccountListResult> {
        self.log.push(format!("list_by_resource_group {resource_group}"));
        clone_result(&self.accounts)
    }

    async fn list_keys(
        &self,
        resource_group: &str,
        account: &str,
    ) -> Result<StorageAccountListKeysResult> {
        self.log.push(format!("list_keys {resource_group} {account}"));
        clone_result(&self.keys)
    }
}

#[derive(Debug)]
struct RecordingRateLimit(CallLog);

#[async_trait]
impl RateLimit for RecordingRateLimit {
    async fn accept(&self) {
        self.0.push("accept");
    }
}

fn account(name: &str, sku: &str, location: &str) -> StorageAccount {
    StorageAccount {
        name: Some(name.to_string()),
        location: Some(location.to_string()),
        sku: Some(Sku {
            name: sku.to_string(),
            tier: Some("Standard".to_string()),
        }),
        ..Default::default()
    }
}

fn key(value: Option<&str>) -> StorageAccountKey {
    StorageAccountKey {
        key_name: Some("key".to_string()),
        value: value.map(str::to_string),
        permissions: Some("FULL".to_string()),
    }
}

fn build_service(
    accounts: Result<StorageAccountListResult>,
    keys: Result<StorageAccountListKeysResult>,
) -> (StorageAccounts, CallLog) {
    init_logger();

    let log = CallLog::default();
    let client = MockClient {
        log: log.clone(),
        accounts,
        keys,
    };
    let service = StorageAccounts::new(client, "kubernetes")
        .with_rate_limit(RecordingRateLimit(log.clone()));
    (service, log)
}

#[tokio::test]
async fn test_get_storage_accounts() {
    let (service, log) = build_service(
        Ok(StorageAccountListResult {
            value: Some(vec![
                account("pvc01", "Standard_LRS", "eastus"),
                account("pvc02", "Premium_LRS", "eastus"),
                account("pvc03", "Standard_LRS", "westus"),
            ]),
        }),
        Ok(StorageAccountListKeysResult::default()),
    );

    let accounts = service
        .get_storage_accounts("standard_lrs", "EastUS")
        .await
        .unwrap();

    assert_eq!(
        accounts,
        vec![AccountWithLocation {
            name: "pvc01".to_string(),
            storage_type: "Standard_LRS".to_string(),
            location: "eastus".to_string(),
        }]
    );
    assert_eq!(
        log.entries(),
        vec!["accept", "list_by_resource_group kubernetes"]
    );
}

#[tokio::test]
async fn test_get_storage_accounts_without_filter() {
    let (service, _) = build_service(
        Ok(StorageAccountListResult {
            value: Some(vec![
                account("pvc01", "Standard_LRS", "eastus"),
                account("pvc02", "Premium_LRS", "westus"),
            ]),
        }),
        Ok(StorageAccountListKeysResult::default()),
    );

    let accounts = service.get_storage_accounts("", "").await.unwrap();
    assert_eq!(accounts.len(), 2);
}

#[tokio::test]
async fn test_get_storage_accounts_null_list() {
    let (service, _) = build_service(
        Ok(StorageAccountListResult { value: None }),
        Ok(StorageAccountListKeysResult::default()),
    );

    let err = service.get_storage_accounts("", "").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AccountListMissing);
    assert_eq!(
        err.to_string(),
        "unexpected error when listing storage accounts from resource group kubernetes"
    );
}

#[tokio::test]
async fn test_get_storage_accounts_passes_client_error() {
    let (service, log) = build_service(
        Err(Error::unexpected("connection refused")),
        Ok(StorageAccountListKeysResult::default()),
    );

    let err = service.get_storage_accounts("", "").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unexpected);
    assert_eq!(err.to_string(), "connection refused");
    assert_eq!(log.entries().len(), 2);
}

#[tokio::test]
async fn test_get_storage_access_key() {
    let (service, log) = build_service(
        Ok(StorageAccountListResult::default()),
        Ok(StorageAccountListKeysResult {
            keys: Some(vec![
                key(None),
                key(Some("")),
                key(Some("DefaultEndpointsProtocol=https c2VjcmV0")),
                key(Some("b3RoZXI=")),
            ]),
        }),
    );

    let key = service.get_storage_access_key("pvc01").await.unwrap();

    assert_eq!(key, "c2VjcmV0");
    assert_eq!(log.entries(), vec!["accept", "list_keys kubernetes pvc01"]);
}

#[tokio::test]
async fn test_get_storage_access_key_errors() {
    let (service, _) = build_service(
        Ok(StorageAccountListResult::default()),
        Ok(StorageAccountListKeysResult { keys: None }),
    );
    let err = service.get_storage_access_key("pvc01").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::KeyNotFound);
    assert_eq!(err.to_string(), "empty keys");

    let (service, _) = build_service(
        Ok(StorageAccountListResult::default()),
        Ok(StorageAccountListKeysResult {
            keys: Some(vec![key(Some("")), key(None)]),
        }),
    );
    let err = service.get_storage_access_key("pvc01").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::KeyNotFound);
    assert_eq!(err.to_string(), "no valid keys");

    let (service, _) = build_service(
        Ok(StorageAccountListResult::default()),
        Err(Error::credential_invalid("token expired")),
    );
    let err = service.get_storage_access_key("pvc01").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
}
