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


use std::env;

use anyhow::Result;
use azacct_core::{Context, OsEnv};
use azacct_http_send_reqwest::ReqwestHttpSend;
use azacct_storage_account::{Config, StorageAccounts};
use log::{debug, warn};

fn init_service() -> Option<StorageAccounts> {
    crate::init_logger();
    let _ = dotenv::dotenv();

    if env::var("AZACCT_STORAGE_ACCOUNT_TEST").unwrap_or_default() != "on" {
        return None;
    }

    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv);
    let config = Config::default().from_env(&ctx);

    Some(StorageAccounts::from_config(ctx, &config).expect("config must be valid"))
}

#[tokio::test]
async fn test_live_list_and_fetch_key() -> Result<()> {
    let Some(service) = init_service() else {
        warn!("AZACCT_STORAGE_ACCOUNT_TEST is not set, skipped");
        return Ok(());
    };

    let accounts = service.get_storage_accounts("", "").await?;
    debug!("got accounts: {accounts:?}");

    let Some(first) = accounts.first() else {
        warn!("resource group {} has no storage accounts", service.resource_group());
        return Ok(());
    };

    let filtered = service
        .get_storage_accounts(&first.storage_type.to_uppercase(), &first.location)
        .await?;
    assert!(filtered.contains(first));

    let key = service.get_storage_access_key(&first.name).await?;
    assert!(!key.is_empty());
    assert!(!key.contains(' '));
    Ok(())
}
