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


use azacct_core::utils::Redact;
use azacct_core::SigningCredential;
use chrono::{DateTime, TimeDelta, Utc};
use std::fmt::{Debug, Formatter};

/// Bearer token used to call the Azure Resource Manager API.
#[derive(Clone)]
pub struct Credential {
    /// Access token.
    pub token: String,
    /// Expiration time for this credential, `None` means it never expires.
    pub expires_in: Option<DateTime<Utc>>,
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("token", &Redact::from(&self.token))
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        if self.token.is_empty() {
            return false;
        }

        // Take 20s as buffer so a token doesn't expire while in flight.
        match self.expires_in {
            Some(expires) => expires > Utc::now() + TimeDelta::seconds(20),
            None => true,
        }
    }
}

impl Credential {
    /// Create a new bearer token credential.
    pub fn with_bearer_token(token: &str, expires_in: Option<DateTime<Utc>>) -> Self {
        Self {
            token: token.to_string(),
            expires_in,
        }
    }
}
