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

use std::fmt::Debug;

/// RateLimit gates outbound calls to the management service.
///
/// `accept` is awaited once before every remote request and returns when
/// the caller is allowed to proceed. The throttling policy itself (token
/// bucket, shared quota, ...) lives with the implementor.
#[async_trait::async_trait]
pub trait RateLimit: Debug + Send + Sync + 'static {
    /// Wait until one more request may be sent.
    async fn accept(&self);
}

/// NoopRateLimit lets every request through immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRateLimit;

#[async_trait::async_trait]
impl RateLimit for NoopRateLimit {
    async fn accept(&self) {}
}
