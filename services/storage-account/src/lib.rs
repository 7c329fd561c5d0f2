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


//! Storage account queries against the Azure Resource Manager API.
//!
//! This crate answers two questions about a resource group:
//!
//! - which storage accounts of a given type live in a given location
//!   ([`StorageAccounts::get_storage_accounts`]);
//! - what access key to use for a named account
//!   ([`StorageAccounts::get_storage_access_key`]).
//!
//! The management API is reached through the [`StorageAccountClient`]
//! trait. [`ArmStorageAccountClient`] implements it over REST, any other
//! implementation can be injected as well.
//!
//! # Example
//!
//! ```rust,no_run
//! use azacct_core::{Context, OsEnv, Result};
//! use azacct_http_send_reqwest::ReqwestHttpSend;
//! use azacct_storage_account::{Config, StorageAccounts};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let ctx = Context::new()
//!         .with_http_send(ReqwestHttpSend::default())
//!         .with_env(OsEnv);
//!
//!     // Reads AZURE_SUBSCRIPTION_ID and AZURE_RESOURCE_GROUP.
//!     let config = Config::default().from_env(&ctx);
//!     let accounts = StorageAccounts::from_config(ctx, &config)?;
//!
//!     for acct in accounts.get_storage_accounts("Standard_LRS", "eastus").await? {
//!         println!("{} ({}, {})", acct.name, acct.storage_type, acct.location);
//!     }
//!
//!     let key = accounts.get_storage_access_key("mystorageaccount").await?;
//!     println!("got key of {} bytes", key.len());
//!     Ok(())
//! }
//! ```

mod constants;
pub use constants::{
    AZURE_MANAGEMENT_TOKEN, AZURE_MANAGEMENT_TOKEN_EXPIRES_ON, AZURE_RESOURCE_GROUP,
    AZURE_RESOURCE_MANAGER_ENDPOINT, AZURE_STORAGE_API_VERSION, AZURE_SUBSCRIPTION_ID,
};

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod provide_credential;
pub use provide_credential::*;

pub mod model;

mod client;
pub use client::{ArmStorageAccountClient, StorageAccountClient};

mod accounts;
pub use accounts::{select_accounts, AccountWithLocation};

mod keys;
pub use keys::first_valid_key;

mod service;
pub use service::StorageAccounts;
