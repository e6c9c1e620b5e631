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
pub mod favorites;
pub mod load;
pub mod media;
pub mod modal;
pub mod slot;
pub mod view;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

pub use favorites::{
    FavoritesBackend, FavoritesList, FavoritesStore, StorageError, DEFAULT_FAVORITES_KEY,
};
pub use load::{CategoriesState, ListState};
pub use modal::{ModalState, OpenError};
pub use slot::{RequestSlot, Ticket};
pub use view::{ActiveView, HomeMode, ViewState};

/// Number of numbered ingredient/measure slots a full recipe record carries.
pub const INGREDIENT_SLOTS: usize = 20;

/// The listing form of a recipe. Search results, category listings and
/// favorites all carry this shape.
///
/// The serialized field names match the recipe service's records so that
/// anything written to storage by older clients still loads.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct RecipeSummary {
    #[serde(rename = "idMeal", default, deserialize_with = "null_as_empty")]
    pub id: String,
    #[serde(rename = "strMeal", default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(rename = "strMealThumb", default, deserialize_with = "null_as_empty")]
    pub thumbnail_url: String,
}

// The service and older stored records both use null for missing strings.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl RecipeSummary {
    pub fn new<I, N, T>(id: I, name: N, thumbnail_url: T) -> Self
    where
        I: Into<String>,
        N: Into<String>,
        T: Into<String>,
    {
        Self {
            id: id.into(),
            name: name.into(),
            thumbnail_url: thumbnail_url.into(),
        }
    }

    pub fn has_id(&self) -> bool {
        !self.id.trim().is_empty()
    }
}

/// A single rendered row of a recipe's ingredient list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientLine {
    pub name: String,
    pub measure: String,
}

impl fmt::Display for IngredientLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.measure)
    }
}

/// Builds the ingredient list from the numbered slots of a recipe record.
///
/// Slots are visited in order. A slot is kept only when its ingredient name
/// is non-blank after trimming; a missing measure renders as empty.
pub fn collect_ingredients<I, S>(slots: I) -> Vec<IngredientLine>
where
    I: IntoIterator<Item = (Option<S>, Option<S>)>,
    S: Into<String>,
{
    slots
        .into_iter()
        .take(INGREDIENT_SLOTS)
        .filter_map(|(name, measure)| {
            let name: String = name?.into();
            if name.trim().is_empty() {
                return None;
            }
            Some(IngredientLine {
                name,
                measure: measure.map(Into::into).unwrap_or_default(),
            })
        })
        .collect()
}

/// Splits the service's comma separated tag string into trimmed tags.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
}

/// The full recipe record. Fetched on demand for the detail overlay and
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecipeDetail {
    pub summary: RecipeSummary,
    pub area: Option<String>,
    pub tags: Option<Vec<String>>,
    pub ingredients: Vec<IngredientLine>,
    pub instructions: String,
    pub youtube_url: Option<String>,
}

impl RecipeDetail {
    pub fn new(summary: RecipeSummary) -> Self {
        Self {
            summary,
            ..Self::default()
        }
    }

    pub fn id(&self) -> &str {
        self.summary.id.as_str()
    }

    pub fn name(&self) -> &str {
        self.summary.name.as_str()
    }

    /// Tags joined for display, or None when the recipe has no tags.
    pub fn tag_line(&self) -> Option<String> {
        match &self.tags {
            Some(tags) if !tags.is_empty() => Some(tags.join(", ")),
            _ => None,
        }
    }

    pub fn embed_url(&self) -> Option<String> {
        self.youtube_url
            .as_deref()
            .and_then(media::youtube_embed_url)
    }
}

/// A server defined recipe grouping, e.g. "Seafood".
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Category {
    pub name: String,
}

impl Category {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self { name: name.into() }
    }
}

#[cfg(test)]
mod test;
