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
use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;
use serde_json::Value;

use recipes::{collect_ingredients, parse_tags, Category, RecipeDetail, RecipeSummary};

pub const DEFAULT_API_ROOT: &str = "https://www.themealdb.com/api/json/v1/1";

/// Free text search by recipe name. The term is sent even when empty.
pub fn search_path(root: &str, query: &str) -> String {
    format!("{}/search.php?s={}", root, urlencoding::encode(query))
}

pub fn filter_path(root: &str, category: &str) -> String {
    format!("{}/filter.php?c={}", root, urlencoding::encode(category))
}

pub fn lookup_path(root: &str, id: &str) -> String {
    format!("{}/lookup.php?i={}", root, urlencoding::encode(id))
}

pub fn categories_path(root: &str) -> String {
    format!("{}/list.php?c=list", root)
}

/// The service's envelope. An absent or null `meals` field means no match.
#[derive(Deserialize, Debug)]
pub struct MealsResponse<T> {
    pub meals: Option<Vec<T>>,
}

impl<T> MealsResponse<T> {
    pub fn is_empty(&self) -> bool {
        self.meals.as_ref().map_or(true, |m| m.is_empty())
    }

    pub fn into_meals(self) -> Vec<T> {
        self.meals.unwrap_or_default()
    }
}

pub type SearchResponse = MealsResponse<RecipeSummary>;

pub type FilterResponse = MealsResponse<RecipeSummary>;

pub type LookupResponse = MealsResponse<MealRecord>;

impl LookupResponse {
    /// The detail for `id`, if the response carries it.
    pub fn into_detail(self, id: &str) -> Option<RecipeDetail> {
        self.into_meals()
            .into_iter()
            .find(|m| m.id.as_deref() == Some(id))
            .map(MealRecord::into_detail)
    }
}

/// A full recipe record as returned by a lookup.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct MealRecord {
    #[serde(rename = "idMeal", default)]
    pub id: Option<String>,
    #[serde(rename = "strMeal", default)]
    pub name: Option<String>,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail_url: Option<String>,
    #[serde(rename = "strArea", default)]
    pub area: Option<String>,
    #[serde(rename = "strTags", default)]
    pub tags: Option<String>,
    #[serde(rename = "strInstructions", default)]
    pub instructions: Option<String>,
    #[serde(rename = "strYoutube", default)]
    pub youtube: Option<String>,
    // The numbered strIngredientN/strMeasureN slots and anything else.
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

impl MealRecord {
    fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    /// The ingredient and measure of a numbered slot, starting at 1.
    pub fn slot(&self, n: usize) -> (Option<&str>, Option<&str>) {
        (
            self.field(&format!("strIngredient{}", n)),
            self.field(&format!("strMeasure{}", n)),
        )
    }

    pub fn into_detail(self) -> RecipeDetail {
        let ingredients = collect_ingredients((1..=recipes::INGREDIENT_SLOTS).map(|n| self.slot(n)));
        RecipeDetail {
            summary: RecipeSummary {
                id: self.id.unwrap_or_default(),
                name: self.name.unwrap_or_default(),
                thumbnail_url: self.thumbnail_url.unwrap_or_default(),
            },
            area: non_blank(self.area),
            tags: non_blank(self.tags).map(|t| parse_tags(&t)),
            ingredients,
            instructions: self.instructions.unwrap_or_default(),
            youtube_url: non_blank(self.youtube),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct CategoryEntry {
    #[serde(rename = "strCategory", default)]
    pub name: Option<String>,
}

/// The category list. The service answers with `categories`, but a `meals`
/// array of the same shape is accepted as well.
#[derive(Deserialize, Debug, Default)]
pub struct CategoryListResponse {
    #[serde(default)]
    pub categories: Option<Vec<CategoryEntry>>,
    #[serde(default)]
    pub meals: Option<Vec<CategoryEntry>>,
}

impl CategoryListResponse {
    /// Named categories in service order. Repeated names keep the first.
    pub fn into_categories(self) -> Vec<Category> {
        let mut seen = BTreeSet::new();
        self.categories
            .or(self.meals)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|c| c.name)
            .filter(|name| !name.trim().is_empty())
            .filter(|name| seen.insert(name.clone()))
            .map(Category::new)
            .collect()
    }
}

#[cfg(test)]
mod test;
