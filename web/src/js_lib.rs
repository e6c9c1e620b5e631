// Copyright 2022 Jeremy Wall (Jeremy@marzhilsltudios.com)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use recipes::{FavoritesBackend, StorageError};
use web_sys::{window, Storage};

/// The browser's local storage, if this context has one. Private browsing
/// modes and sandboxed frames can refuse access.
pub fn get_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

/// A single localStorage key holding the serialized favorites list.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalStorageSlot {
    key: String,
}

impl LocalStorageSlot {
    pub fn new<S: Into<String>>(key: S) -> Self {
        Self { key: key.into() }
    }

    fn storage(&self) -> Result<Storage, StorageError> {
        get_storage().ok_or_else(|| StorageError::new("No storage available"))
    }
}

impl FavoritesBackend for LocalStorageSlot {
    fn read(&self) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(&self.key)
            .map_err(|e| StorageError::new(format!("{:?}", e)))
    }

    fn write(&self, serialized: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(&self.key, serialized)
            .map_err(|e| StorageError::new(format!("{:?}", e)))
    }
}
