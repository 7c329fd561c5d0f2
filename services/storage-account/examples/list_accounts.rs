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


use anyhow::Result;
use azacct_core::{Context, OsEnv};
use azacct_http_send_reqwest::ReqwestHttpSend;
use azacct_storage_account::{Config, StorageAccounts};

/// List storage accounts of `$AZURE_RESOURCE_GROUP`, optionally filtered:
///
/// ```shell
/// AZURE_SUBSCRIPTION_ID=... AZURE_RESOURCE_GROUP=... AZURE_MANAGEMENT_TOKEN=$(az account get-access-token --query accessToken -o tsv) \
///     cargo run --example list_accounts -- Standard_LRS eastus
/// ```
#[tokio::main]
async fn main() -> Result<()> {
    let _ = env_logger::try_init();

    let mut args = std::env::args().skip(1);
    let matching_type = args.next().unwrap_or_default();
    let matching_location = args.next().unwrap_or_default();

    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv);
    let config = Config::default().from_env(&ctx);
    let service = StorageAccounts::from_config(ctx, &config)?;

    let accounts = service
        .get_storage_accounts(&matching_type, &matching_location)
        .await?;
    println!(
        "{} matching storage accounts in {}:",
        accounts.len(),
        service.resource_group()
    );
    for acct in &accounts {
        let key = service.get_storage_access_key(&acct.name).await?;
        println!(
            "  {:<24} {:<16} {:<16} key {}...",
            acct.name,
            acct.storage_type,
            acct.location,
            &key[..key.len().min(4)]
        );
    }

    Ok(())
}
