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
use azacct_core::{Context, ProvideCredential, ProvideCredentialChain, Result};

use crate::provide_credential::{EnvCredentialProvider, StaticCredentialProvider};
use crate::{Config, Credential};

/// Default provider that tries multiple token sources in order.
///
/// 1. `access_token` from [`Config`], when set
/// 2. Environment (`AZURE_MANAGEMENT_TOKEN`)
#[derive(Debug)]
pub struct DefaultCredentialProvider {
    chain: ProvideCredentialChain<Credential>,
}

impl Default for DefaultCredentialProvider {
    fn default() -> Self {
        Self {
            chain: ProvideCredentialChain::new().push(EnvCredentialProvider::new()),
        }
    }
}

impl DefaultCredentialProvider {
    /// Create a new default provider that only reads the environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a default provider that prefers the token set in config.
    pub fn from_config(config: &Config) -> Self {
        let mut chain = ProvideCredentialChain::new();
        if let Some(token) = config.access_token.as_deref().filter(|t| !t.is_empty()) {
            chain = chain.push(StaticCredentialProvider::new(token));
        }

        Self {
            chain: chain.push(EnvCredentialProvider::new()),
        }
    }
}

#[async_trait]
impl ProvideCredential for DefaultCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        self.chain.provide_credential(ctx).await
    }
}
