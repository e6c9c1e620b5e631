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
use crate::{Category, RecipeSummary};

pub const NO_RECIPE_FOUND: &str = "No recipe found.";
pub const FAILED_TO_FETCH_RECIPES: &str = "Failed to fetch recipes.";
pub const FAILED_TO_LOAD_CATEGORIES: &str = "Failed to load categories.";

/// Result area of the recipe finder.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListState {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<RecipeSummary>),
    NoResults,
    Failed,
}

impl ListState {
    /// Folds a search or filter outcome into a list state. An empty result
    /// is a "no match", not an error.
    pub fn from_result<E>(result: Result<Vec<RecipeSummary>, E>) -> Self {
        match result {
            Ok(recipes) if recipes.is_empty() => ListState::NoResults,
            Ok(recipes) => ListState::Loaded(recipes),
            Err(_) => ListState::Failed,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ListState::Loading)
    }

    pub fn recipes(&self) -> &[RecipeSummary] {
        match self {
            ListState::Loaded(recipes) => recipes.as_slice(),
            _ => &[],
        }
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            ListState::NoResults => Some(NO_RECIPE_FOUND),
            ListState::Failed => Some(FAILED_TO_FETCH_RECIPES),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoriesState {
    #[default]
    Loading,
    Loaded(Vec<Category>),
    Failed,
}

impl CategoriesState {
    pub fn from_result<E>(result: Result<Vec<Category>, E>) -> Self {
        match result {
            Ok(categories) => CategoriesState::Loaded(categories),
            Err(_) => CategoriesState::Failed,
        }
    }

    pub fn categories(&self) -> &[Category] {
        match self {
            CategoriesState::Loaded(categories) => categories.as_slice(),
            _ => &[],
        }
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            CategoriesState::Failed => Some(FAILED_TO_LOAD_CATEGORIES),
            _ => None,
        }
    }
}
