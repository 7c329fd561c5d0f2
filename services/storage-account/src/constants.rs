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


// Env values used to build a config.
pub const AZURE_SUBSCRIPTION_ID: &str = "AZURE_SUBSCRIPTION_ID";
pub const AZURE_RESOURCE_GROUP: &str = "AZURE_RESOURCE_GROUP";
pub const AZURE_RESOURCE_MANAGER_ENDPOINT: &str = "AZURE_RESOURCE_MANAGER_ENDPOINT";
pub const AZURE_STORAGE_API_VERSION: &str = "AZURE_STORAGE_API_VERSION";

// Env values used by the env credential provider.
pub const AZURE_MANAGEMENT_TOKEN: &str = "AZURE_MANAGEMENT_TOKEN";
pub const AZURE_MANAGEMENT_TOKEN_EXPIRES_ON: &str = "AZURE_MANAGEMENT_TOKEN_EXPIRES_ON";

pub const AZURE_PUBLIC_CLOUD_ENDPOINT: &str = "https://management.azure.com";
pub const DEFAULT_API_VERSION: &str = "2023-01-01";

pub const STORAGE_PROVIDER: &str = "Microsoft.Storage/storageAccounts";
