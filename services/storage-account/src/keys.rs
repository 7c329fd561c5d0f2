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

use crate::model::StorageAccountListKeysResult;

/// Return the first usable access key of a `listKeys` result.
///
/// Keys without a value or with an empty value are skipped. When the value
/// contains spaces only the part after the last space is returned.
pub fn first_valid_key(result: &StorageAccountListKeysResult) -> Result<String> {
    let Some(keys) = &result.keys else {
        return Err(Error::key_not_found("empty keys"));
    };

    keys.iter()
        .filter_map(|k| k.value.as_deref())
        .find(|v| !v.is_empty())
        .map(|v| v.rsplit_once(' ').map_or(v, |(_, key)| key).to_string())
        .ok_or_else(|| Error::key_not_found("no valid keys"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StorageAccountKey;
    use azacct_core::ErrorKind;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn keys(values: &[Option<&str>]) -> StorageAccountListKeysResult {
        StorageAccountListKeysResult {
            keys: Some(
                values
                    .iter()
                    .enumerate()
                    .map(|(i, v)| StorageAccountKey {
                        key_name: Some(format!("key{}", i + 1)),
                        value: v.map(str::to_string),
                        permissions: Some("FULL".to_string()),
                    })
                    .collect(),
            ),
        }
    }

    #[test_case(&[Some("abc")], "abc"; "single key")]
    #[test_case(&[None, Some(""), Some("second")], "second"; "skips missing and empty")]
    #[test_case(&[Some("first"), Some("second")], "first"; "first wins")]
    #[test_case(&[Some("prefix abc")], "abc"; "strips prefix")]
    #[test_case(&[Some("a b c")], "c"; "strips up to last space")]
    fn test_first_valid_key(values: &[Option<&str>], expected: &str) {
        assert_eq!(first_valid_key(&keys(values)).unwrap(), expected);
    }

    #[test]
    fn test_first_valid_key_missing_keys() {
        let err = first_valid_key(&StorageAccountListKeysResult::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::KeyNotFound);
        assert_eq!(err.to_string(), "empty keys");
    }

    #[test_case(&[]; "no keys")]
    #[test_case(&[None, Some("")]; "all empty")]
    fn test_first_valid_key_no_valid_keys(values: &[Option<&str>]) {
        let err = first_valid_key(&keys(values)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::KeyNotFound);
        assert_eq!(err.to_string(), "no valid keys");
    }
}
