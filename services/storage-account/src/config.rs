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


use azacct_core::{Context, Error, Result};

use crate::constants::*;

/// Config carries everything needed to reach the storage accounts of one resource group.
#[derive(Clone, Default)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Config {
    /// `subscription_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AZURE_SUBSCRIPTION_ID`]
    pub subscription_id: Option<String>,
    /// `resource_group` scopes every call and will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AZURE_RESOURCE_GROUP`]
    pub resource_group: Option<String>,
    /// `endpoint` of the resource manager, will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AZURE_RESOURCE_MANAGER_ENDPOINT`]
    /// - default: `https://management.azure.com`
    pub endpoint: Option<String>,
    /// `api_version` sent with every storage request, will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AZURE_STORAGE_API_VERSION`]
    /// - default: `2023-01-01`
    pub api_version: Option<String>,
    /// A fixed bearer token for the management API.
    ///
    /// Only settable in code. Tokens from the environment are picked up by
    /// [`crate::EnvCredentialProvider`] instead.
    pub access_token: Option<String>,
}

impl Config {
    /// Load config from env.
    ///
    /// Fields that are already set are kept.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        let envs = ctx.env_vars();
        let get = |k: &str| envs.get(k).filter(|v| !v.is_empty()).cloned();

        if self.subscription_id.is_none() {
            self.subscription_id = get(AZURE_SUBSCRIPTION_ID);
        }
        if self.resource_group.is_none() {
            self.resource_group = get(AZURE_RESOURCE_GROUP);
        }
        if self.endpoint.is_none() {
            self.endpoint = get(AZURE_RESOURCE_MANAGER_ENDPOINT);
        }
        if self.api_version.is_none() {
            self.api_version = get(AZURE_STORAGE_API_VERSION);
        }

        self
    }

    /// Resource manager endpoint without trailing slash.
    pub fn endpoint(&self) -> &str {
        self.endpoint
            .as_deref()
            .unwrap_or(AZURE_PUBLIC_CLOUD_ENDPOINT)
            .trim_end_matches('/')
    }

    /// Storage resource provider api version.
    pub fn api_version(&self) -> &str {
        self.api_version.as_deref().unwrap_or(DEFAULT_API_VERSION)
    }

    pub(crate) fn require_subscription_id(&self) -> Result<&str> {
        require(&self.subscription_id, "subscription_id")
    }

    pub(crate) fn require_resource_group(&self) -> Result<&str> {
        require(&self.resource_group, "resource_group")
    }
}

fn require<'a>(value: &'a Option<String>, name: &str) -> Result<&'a str> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(Error::config_invalid(format!("{name} is required"))),
    }
}
