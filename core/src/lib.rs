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

//! Core components for querying the Azure management API.
//!
//! This crate provides the foundational types and traits shared by the
//! azacct service crates.
//!
//! ## Overview
//!
//! - **Context**: holds the HTTP transport and environment access
//! - **Traits**: [`ProvideCredential`] for loading management tokens and
//!   [`RateLimit`] for gating outbound calls
//! - **Error**: a single [`Error`] type carrying an [`ErrorKind`]
//!
//! ## Example
//!
//! ```no_run
//! use azacct_core::{Context, OsEnv, ProvideCredential, Result, SigningCredential};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct MyToken(String);
//!
//! impl SigningCredential for MyToken {
//!     fn is_valid(&self) -> bool {
//!         !self.0.is_empty()
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MyProvider;
//!
//! #[async_trait]
//! impl ProvideCredential for MyProvider {
//!     type Credential = MyToken;
//!
//!     async fn provide_credential(&self, ctx: &Context) -> Result<Option<MyToken>> {
//!         Ok(ctx.env_var("MY_TOKEN").map(MyToken))
//!     }
//! }
//!
//! # async fn example() -> Result<()> {
//! let ctx = Context::new().with_env(OsEnv);
//! let token = MyProvider.provide_credential(&ctx).await?;
//! # Ok(())
//! # }
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod utils;

mod context;
pub use context::{Context, Env, HttpSend, NoopEnv, NoopHttpSend, OsEnv, StaticEnv};

mod error;
pub use error::{Error, ErrorKind, Result};

mod api;
pub use api::{ProvideCredential, ProvideCredentialChain, SigningCredential};

mod rate_limit;
pub use rate_limit::{NoopRateLimit, RateLimit};
