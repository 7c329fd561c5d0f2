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
use azacct_core::{Context, Error, ProvideCredential, Result};
use chrono::{DateTime, Utc};

use crate::constants::{AZURE_MANAGEMENT_TOKEN, AZURE_MANAGEMENT_TOKEN_EXPIRES_ON};
use crate::Credential;

/// EnvCredentialProvider loads a bearer token from the environment.
///
/// - `AZURE_MANAGEMENT_TOKEN`: the access token itself
/// - `AZURE_MANAGEMENT_TOKEN_EXPIRES_ON`: optional RFC 3339 expiry
#[derive(Clone, Debug, Default)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new env provider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let Some(token) = ctx
            .env_var(AZURE_MANAGEMENT_TOKEN)
            .filter(|v| !v.is_empty())
        else {
            return Ok(None);
        };

        let expires_in = match ctx
            .env_var(AZURE_MANAGEMENT_TOKEN_EXPIRES_ON)
            .filter(|v| !v.is_empty())
        {
            None => None,
            Some(v) => Some(
                DateTime::parse_from_rfc3339(&v)
                    .map_err(|e| {
                        Error::credential_invalid(format!(
                            "{AZURE_MANAGEMENT_TOKEN_EXPIRES_ON} is not a valid RFC 3339 time: {v}"
                        ))
                        .with_source(e)
                    })?
                    .with_timezone(&Utc),
            ),
        };

        Ok(Some(Credential::with_bearer_token(&token, expires_in)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use azacct_core::{ErrorKind, StaticEnv};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_env_credential_provider_token() {
        let ctx = Context::new().with_env(StaticEnv::from_pairs([
            (AZURE_MANAGEMENT_TOKEN, "mytoken"),
            (AZURE_MANAGEMENT_TOKEN_EXPIRES_ON, "2030-01-01T00:00:00Z"),
        ]));

        let cred = EnvCredentialProvider::new()
            .provide_credential(&ctx)
            .await
            .unwrap()
            .expect("credential must be loaded");

        assert_eq!(cred.token, "mytoken");
        assert_eq!(
            cred.expires_in.map(|t| t.to_rfc3339()),
            Some("2030-01-01T00:00:00+00:00".to_string())
        );
    }

    #[tokio::test]
    async fn test_env_credential_provider_none() {
        let ctx = Context::new().with_env(StaticEnv::from_pairs([(AZURE_MANAGEMENT_TOKEN, "")]));

        let cred = EnvCredentialProvider::new()
            .provide_credential(&ctx)
            .await
            .unwrap();
        assert!(cred.is_none());
    }

    #[tokio::test]
    async fn test_env_credential_provider_bad_expiry() {
        let ctx = Context::new().with_env(StaticEnv::from_pairs([
            (AZURE_MANAGEMENT_TOKEN, "mytoken"),
            (AZURE_MANAGEMENT_TOKEN_EXPIRES_ON, "tomorrow"),
        ]));

        let err = EnvCredentialProvider::new()
            .provide_credential(&ctx)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
    }
}
