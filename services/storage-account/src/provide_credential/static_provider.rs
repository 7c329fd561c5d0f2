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
use azacct_core::{Context, ProvideCredential, Result};

use crate::Credential;

/// StaticCredentialProvider always returns the same bearer token.
#[derive(Clone, Debug)]
pub struct StaticCredentialProvider {
    credential: Credential,
}

impl StaticCredentialProvider {
    /// Create a provider for a token that never expires.
    pub fn new(token: &str) -> Self {
        Self {
            credential: Credential::with_bearer_token(token, None),
        }
    }

    /// Create a provider from an existing credential.
    pub fn from_credential(credential: Credential) -> Self {
        Self { credential }
    }
}

#[async_trait]
impl ProvideCredential for StaticCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        Ok(Some(self.credential.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_static_credential_provider() {
        let provider = StaticCredentialProvider::new("mytoken");
        let cred = provider.provide_credential(&Context::new()).await.unwrap();

        let cred = cred.expect("credential must be loaded");
        assert_eq!(cred.token, "mytoken");
        assert_eq!(cred.expires_in, None);
    }
}
