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
use crate::*;

use serde_json::from_str;

const LOOKUP_52772: &str = r#"{"meals":[{
    "idMeal":"52772",
    "strMeal":"Teriyaki Chicken Casserole",
    "strDrinkAlternate":null,
    "strCategory":"Chicken",
    "strArea":"Japanese",
    "strInstructions":"Preheat oven to 350.",
    "strMealThumb":"https://www.themealdb.com/images/media/meals/wvpsxx1468256321.jpg",
    "strTags":"Meat,Casserole",
    "strYoutube":"https://www.youtube.com/watch?v=4aZr5hZXP_s",
    "strIngredient1":"soy sauce",
    "strIngredient2":"water",
    "strIngredient3":"",
    "strIngredient4":null,
    "strIngredient5":"brown sugar",
    "strMeasure1":"3/4 cup",
    "strMeasure2":"1/2 cup",
    "strMeasure3":"",
    "strMeasure4":null,
    "strMeasure5":null,
    "strSource":null,
    "dateModified":null
}]}"#;

#[test]
fn test_search_path_passes_empty_term() {
    assert_eq!(
        search_path(DEFAULT_API_ROOT, ""),
        "https://www.themealdb.com/api/json/v1/1/search.php?s="
    );
}

#[test]
fn test_search_path_encodes_term() {
    assert_eq!(
        search_path("/root", "mac & cheese"),
        "/root/search.php?s=mac%20%26%20cheese"
    );
}

#[test]
fn test_filter_path_encodes_category() {
    assert_eq!(search_path("/r", "Seafood"), "/r/search.php?s=Seafood");
    assert_eq!(filter_path("/r", "Seafood"), "/r/filter.php?c=Seafood");
    assert_eq!(filter_path("/r", "Side Dish"), "/r/filter.php?c=Side%20Dish");
}

#[test]
fn test_lookup_and_categories_paths() {
    assert_eq!(lookup_path("/r", "52772"), "/r/lookup.php?i=52772");
    assert_eq!(categories_path("/r"), "/r/list.php?c=list");
}

#[test]
fn test_search_without_meals_is_empty() {
    let resp: SearchResponse = from_str(r#"{"meals":null}"#).expect("valid response");
    assert!(resp.is_empty());
    assert!(resp.into_meals().is_empty());

    let resp: SearchResponse = from_str("{}").expect("valid response");
    assert!(resp.into_meals().is_empty());
}

#[test]
fn test_filter_response_summaries() {
    let resp: FilterResponse = from_str(
        r#"{"meals":[
            {"strMeal":"Baked salmon with fennel & tomatoes","strMealThumb":"https://img/1.jpg","idMeal":"52959"},
            {"strMeal":"Cajun spiced fish tacos","strMealThumb":"https://img/2.jpg","idMeal":"52819"}
        ]}"#,
    )
    .expect("valid response");
    let meals = resp.into_meals();
    assert_eq!(meals.len(), 2);
    assert_eq!(
        meals[0],
        RecipeSummary::new(
            "52959",
            "Baked salmon with fennel & tomatoes",
            "https://img/1.jpg"
        )
    );
    assert_eq!(meals[1].id, "52819");
}

#[test]
fn test_malformed_response_is_an_error() {
    assert!(from_str::<SearchResponse>(r#"{"meals":"nope"}"#).is_err());
    assert!(from_str::<SearchResponse>("<html>").is_err());
}

#[test]
fn test_lookup_detail() {
    let resp: LookupResponse = from_str(LOOKUP_52772).expect("valid response");
    let detail = resp.into_detail("52772").expect("recipe is present");
    assert_eq!(detail.id(), "52772");
    assert_eq!(detail.name(), "Teriyaki Chicken Casserole");
    assert_eq!(detail.area.as_deref(), Some("Japanese"));
    assert_eq!(detail.tag_line().as_deref(), Some("Meat, Casserole"));
    assert_eq!(detail.instructions, "Preheat oven to 350.");
    let lines: Vec<String> = detail.ingredients.iter().map(|l| l.to_string()).collect();
    assert_eq!(
        lines,
        vec!["soy sauce - 3/4 cup", "water - 1/2 cup", "brown sugar - "]
    );
    assert_eq!(
        detail.embed_url().as_deref(),
        Some("https://www.youtube.com/embed/4aZr5hZXP_s")
    );
}

#[test]
fn test_lookup_single_salt_slot() {
    let resp: LookupResponse = from_str(
        r#"{"meals":[{"idMeal":"1","strMeal":"Salted",
            "strIngredient1":"Salt","strMeasure1":"1 tsp",
            "strIngredient2":"","strMeasure2":""}]}"#,
    )
    .expect("valid response");
    let detail = resp.into_detail("1").expect("recipe is present");
    assert_eq!(detail.ingredients.len(), 1);
    assert_eq!(detail.ingredients[0].to_string(), "Salt - 1 tsp");
    assert_eq!(detail.area, None);
    assert_eq!(detail.tags, None);
    assert_eq!(detail.youtube_url, None);
}

#[test]
fn test_lookup_not_found() {
    let resp: LookupResponse = from_str(r#"{"meals":null}"#).expect("valid response");
    assert_eq!(resp.into_detail("52772"), None);
    let resp: LookupResponse = from_str(LOOKUP_52772).expect("valid response");
    assert_eq!(resp.into_detail("1"), None);
}

#[test]
fn test_categories_response() {
    let resp: CategoryListResponse = from_str(
        r#"{"categories":[{"strCategory":"Beef"},{"strCategory":"Seafood"},{"strCategory":""}]}"#,
    )
    .expect("valid response");
    assert_eq!(
        resp.into_categories(),
        vec![Category::new("Beef"), Category::new("Seafood")]
    );
}

#[test]
fn test_categories_fall_back_to_meals() {
    let resp: CategoryListResponse =
        from_str(r#"{"meals":[{"strCategory":"Dessert"},{"other":"x"}]}"#)
            .expect("valid response");
    assert_eq!(resp.into_categories(), vec![Category::new("Dessert")]);

    let resp: CategoryListResponse = from_str("{}").expect("valid response");
    assert!(resp.into_categories().is_empty());
}

#[test]
fn test_categories_collapse_repeated_names() {
    let resp: CategoryListResponse = from_str(
        r#"{"meals":[{"strCategory":"Beef"},{"strCategory":"Dessert"},{"strCategory":"Beef"}]}"#,
    )
    .expect("valid response");
    assert_eq!(
        resp.into_categories(),
        vec![Category::new("Beef"), Category::new("Dessert")]
    );
}

#[test]
fn test_filter_tolerates_null_fields() {
    let resp: FilterResponse = from_str(
        r#"{"meals":[
            {"strMeal":"Kedgeree","strMealThumb":null,"idMeal":"52887"},
            {"strMeal":null,"strMealThumb":"https://img/2.jpg","idMeal":"52819"}
        ]}"#,
    )
    .expect("null fields still parse");
    let meals = resp.into_meals();
    assert_eq!(meals.len(), 2);
    assert_eq!(meals[0], RecipeSummary::new("52887", "Kedgeree", ""));
    assert_eq!(meals[1].name, "");
    assert_eq!(meals[1].thumbnail_url, "https://img/2.jpg");
}
