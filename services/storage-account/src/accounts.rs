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


use azacct_core::{Error, Result};
use log::debug;

use crate::model::StorageAccountListResult;

/// A storage account together with its type and location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountWithLocation {
    /// Account name.
    pub name: String,
    /// Storage account type, the sku name such as `Standard_LRS`.
    pub storage_type: String,
    /// Azure region of the account.
    pub location: String,
}

/// Pick the accounts matching `matching_type` and `matching_location` out of a list result.
///
/// Both filters compare case-insensitively and an empty filter matches
/// everything. Accounts without a name, location or sku are skipped.
/// A result without an account list fails with
/// [`azacct_core::ErrorKind::AccountListMissing`].
pub fn select_accounts(
    resource_group: &str,
    result: &StorageAccountListResult,
    matching_type: &str,
    matching_location: &str,
) -> Result<Vec<AccountWithLocation>> {
    let Some(accounts) = &result.value else {
        return Err(Error::account_list_missing(format!(
            "unexpected error when listing storage accounts from resource group {resource_group}"
        )));
    };

    let mut selected = Vec::new();
    for acct in accounts {
        let (Some(name), Some(location), Some(sku)) = (&acct.name, &acct.location, &acct.sku)
        else {
            debug!("skipping storage account with incomplete fields: {acct:?}");
            continue;
        };

        if !matching_type.is_empty() && !equal_fold(matching_type, &sku.name) {
            continue;
        }
        if !matching_location.is_empty() && !equal_fold(matching_location, location) {
            continue;
        }

        selected.push(AccountWithLocation {
            name: name.clone(),
            storage_type: sku.name.clone(),
            location: location.clone(),
        });
    }

    Ok(selected)
}

fn equal_fold(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
