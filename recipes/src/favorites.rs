// Copyright 2021 Jeremy Wall
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
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::RecipeSummary;

/// Storage slot the favorites list is kept under.
pub const DEFAULT_FAVORITES_KEY: &str = "favorites";

/// An ordered list of favorite recipes, unique by id.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(from = "Vec<RecipeSummary>", into = "Vec<RecipeSummary>")]
pub struct FavoritesList(Vec<RecipeSummary>);

impl From<Vec<RecipeSummary>> for FavoritesList {
    fn from(entries: Vec<RecipeSummary>) -> Self {
        let mut list = Vec::with_capacity(entries.len());
        for entry in entries {
            if !list.iter().any(|r: &RecipeSummary| r.id == entry.id) {
                list.push(entry);
            }
        }
        Self(list)
    }
}

impl From<FavoritesList> for Vec<RecipeSummary> {
    fn from(list: FavoritesList) -> Self {
        list.0
    }
}

impl FavoritesList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|r| r.id == id)
    }

    /// Returns the list with the recipe removed if a recipe with the same id
    /// is present, or appended otherwise.
    pub fn toggled(&self, recipe: RecipeSummary) -> Self {
        if self.contains(&recipe.id) {
            Self(
                self.0
                    .iter()
                    .filter(|r| r.id != recipe.id)
                    .cloned()
                    .collect(),
            )
        } else {
            let mut list = self.0.clone();
            list.push(recipe);
            Self(list)
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RecipeSummary> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[RecipeSummary] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<RecipeSummary> {
        self.0.clone()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(serialized: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(serialized)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageError(String);

impl StorageError {
    pub fn new<S: Into<String>>(msg: S) -> Self {
        Self(msg.into())
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "storage error: {}", self.0)
    }
}

impl std::error::Error for StorageError {}

impl From<serde_json::Error> for StorageError {
    fn from(item: serde_json::Error) -> Self {
        StorageError(format!("{}", item))
    }
}

/// A single string slot the favorites list is serialized into.
pub trait FavoritesBackend {
    fn read(&self) -> Result<Option<String>, StorageError>;
    fn write(&self, serialized: &str) -> Result<(), StorageError>;
}

/// The favorites list together with the backend it is persisted to.
///
/// Every mutation serializes and writes the whole list before returning.
#[derive(Debug, Clone, PartialEq)]
pub struct FavoritesStore<B> {
    backend: B,
    list: FavoritesList,
}

impl<B: FavoritesBackend> FavoritesStore<B> {
    /// Reads the list from the backend. A missing slot yields an empty list;
    /// unreadable or malformed content is logged and also yields an empty
    /// list.
    pub fn load(backend: B) -> Self {
        let list = match backend.read() {
            Ok(Some(serialized)) => match FavoritesList::from_json(&serialized) {
                Ok(list) => {
                    debug!(count = list.len(), "Loaded favorites");
                    list
                }
                Err(err) => {
                    warn!(?err, "Stored favorites are malformed, starting empty");
                    FavoritesList::new()
                }
            },
            Ok(None) => {
                debug!("No stored favorites");
                FavoritesList::new()
            }
            Err(err) => {
                warn!(?err, "Unable to read stored favorites, starting empty");
                FavoritesList::new()
            }
        };
        Self { backend, list }
    }

    pub fn list(&self) -> &FavoritesList {
        &self.list
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn contains(&self, id: &str) -> bool {
        self.list.contains(id)
    }

    /// Toggles membership of the recipe and persists the result. Returns
    /// whether the recipe is a favorite afterwards.
    pub fn toggle(&mut self, recipe: RecipeSummary) -> bool {
        let id = recipe.id.clone();
        self.list = self.list.toggled(recipe);
        self.persist();
        self.list.contains(&id)
    }

    /// Adds the recipe unless it is already present.
    pub fn add(&mut self, recipe: RecipeSummary) {
        if !self.list.contains(&recipe.id) {
            self.toggle(recipe);
        }
    }

    /// Removes the recipe with this id if present.
    pub fn remove(&mut self, id: &str) {
        if let Some(recipe) = self.list.iter().find(|r| r.id == id).cloned() {
            self.toggle(recipe);
        }
    }

    fn persist(&self) {
        let result = self
            .list
            .to_json()
            .map_err(StorageError::from)
            .and_then(|serialized| self.backend.write(&serialized));
        if let Err(err) = result {
            error!(?err, "Failed to persist favorites");
        }
    }
}
