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
use crate::load::*;
use crate::media::*;
use crate::*;

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Default)]
struct MemoryBackend {
    slot: Rc<RefCell<Option<String>>>,
    writes: Rc<RefCell<usize>>,
}

impl MemoryBackend {
    fn with_contents(contents: &str) -> Self {
        let backend = Self::default();
        *backend.slot.borrow_mut() = Some(contents.to_owned());
        backend
    }
}

impl FavoritesBackend for MemoryBackend {
    fn read(&self) -> Result<Option<String>, StorageError> {
        Ok(self.slot.borrow().clone())
    }

    fn write(&self, serialized: &str) -> Result<(), StorageError> {
        *self.slot.borrow_mut() = Some(serialized.to_owned());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }
}

struct BrokenBackend;

impl FavoritesBackend for BrokenBackend {
    fn read(&self) -> Result<Option<String>, StorageError> {
        Err(StorageError::new("no storage"))
    }

    fn write(&self, _serialized: &str) -> Result<(), StorageError> {
        Err(StorageError::new("no storage"))
    }
}

macro_rules! summary {
    ($id:expr) => {
        RecipeSummary::new($id, format!("Recipe {}", $id), format!("https://img/{}.jpg", $id))
    };
}

fn id_set(list: &FavoritesList) -> std::collections::BTreeSet<String> {
    list.iter().map(|r| r.id.clone()).collect()
}

#[test]
fn test_toggle_twice_is_identity() {
    let base = FavoritesList::from(vec![summary!("1"), summary!("2")]);
    // Not a member: the add is undone exactly.
    let recipe = summary!("3");
    let toggled = base.toggled(recipe.clone());
    assert_ne!(toggled, base);
    assert_eq!(toggled.toggled(recipe), base);
    // Members come back at the end, so only the set of ids is restored.
    for recipe in [summary!("1"), summary!("2")] {
        let toggled = base.toggled(recipe.clone());
        assert_ne!(id_set(&toggled), id_set(&base));
        let restored = toggled.toggled(recipe);
        assert_eq!(id_set(&restored), id_set(&base));
        assert_eq!(restored.len(), base.len());
    }
    let ids: Vec<String> = base
        .toggled(summary!("1"))
        .toggled(summary!("1"))
        .iter()
        .map(|r| r.id.clone())
        .collect();
    assert_eq!(ids, vec!["2", "1"]);
}

#[test]
fn test_toggle_flips_membership() {
    let base = FavoritesList::from(vec![summary!("52772")]);
    for id in ["52772", "52773"] {
        let toggled = base.toggled(summary!(id));
        assert_eq!(toggled.contains(id), !base.contains(id));
    }
}

#[test]
fn test_toggle_matches_by_id_only() {
    let base = FavoritesList::from(vec![summary!("7")]);
    let renamed = RecipeSummary::new("7", "Something else", "");
    let toggled = base.toggled(renamed);
    assert!(toggled.is_empty());
}

#[test]
fn test_toggle_sequence_never_duplicates() {
    let mut list = FavoritesList::new();
    let ids = ["a", "b", "a", "c", "b", "b", "a", "c", "d", "a"];
    for id in ids.iter() {
        list = list.toggled(summary!(*id));
        let mut seen = std::collections::BTreeSet::new();
        for r in list.iter() {
            assert!(seen.insert(r.id.clone()), "duplicate id {}", r.id);
        }
    }
}

#[test]
fn test_removal_preserves_order() {
    let list = FavoritesList::from(vec![summary!("1"), summary!("2"), summary!("3")]);
    let list = list.toggled(summary!("2"));
    let ids: Vec<&str> = list.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3"]);
    let list = list.toggled(summary!("2"));
    let ids: Vec<&str> = list.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3", "2"]);
}

#[test]
fn test_favorites_list_dedupes_on_construction() {
    let list = FavoritesList::from(vec![
        summary!("1"),
        RecipeSummary::new("1", "Duplicate", ""),
        summary!("2"),
    ]);
    assert_eq!(list.len(), 2);
    assert_eq!(list.as_slice()[0].name, "Recipe 1");
}

#[test]
fn test_store_load_missing_slot_is_empty() {
    let store = FavoritesStore::load(MemoryBackend::default());
    assert!(store.list().is_empty());
    assert_eq!(*store.backend().writes.borrow(), 0);
}

#[test]
fn test_store_load_malformed_slot_is_empty() {
    let store = FavoritesStore::load(MemoryBackend::with_contents("{not json"));
    assert!(store.list().is_empty());
}

#[test]
fn test_store_load_unreadable_backend_is_empty() {
    let mut store = FavoritesStore::load(BrokenBackend);
    assert!(store.list().is_empty());
    // A failing write is logged but the in-memory list still changes.
    assert!(store.toggle(summary!("1")));
    assert!(store.contains("1"));
}

#[test]
fn test_store_load_ignores_extra_fields() {
    let stored = r#"[
        {"idMeal":"52772","strMeal":"Teriyaki Chicken Casserole",
         "strMealThumb":"https://www.themealdb.com/images/media/meals/wvpsxx1468256321.jpg",
         "strArea":"Japanese","strIngredient1":"soy sauce"},
        {"idMeal":"52772","strMeal":"Again","strMealThumb":""}
    ]"#;
    let store = FavoritesStore::load(MemoryBackend::with_contents(stored));
    assert_eq!(store.list().len(), 1);
    assert!(store.contains("52772"));
    assert_eq!(store.list().as_slice()[0].name, "Teriyaki Chicken Casserole");
}

#[test]
fn test_store_load_tolerates_null_fields() {
    let stored = r#"[
        {"idMeal":"1","strMeal":"Recipe 1","strMealThumb":"https://img/1.jpg"},
        {"idMeal":"2","strMeal":"Recipe 2","strMealThumb":null,"strTags":null}
    ]"#;
    let backend = MemoryBackend::with_contents(stored);
    let mut store = FavoritesStore::load(backend.clone());
    assert_eq!(store.list().len(), 2);
    assert_eq!(store.list().as_slice()[1].thumbnail_url, "");

    // The next write keeps everything that was loaded.
    store.toggle(summary!("3"));
    let persisted = backend.slot.borrow().clone().expect("favorites were written");
    let reloaded = FavoritesList::from_json(&persisted).expect("valid json");
    let ids: Vec<&str> = reloaded.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
}

#[test]
fn test_store_persists_every_mutation() {
    let backend = MemoryBackend::default();
    let mut store = FavoritesStore::load(backend.clone());

    assert!(store.toggle(summary!("1")));
    assert_eq!(*backend.writes.borrow(), 1);
    store.add(summary!("2"));
    assert_eq!(*backend.writes.borrow(), 2);
    // Already present so nothing to persist.
    store.add(summary!("2"));
    assert_eq!(*backend.writes.borrow(), 2);
    store.remove("1");
    assert_eq!(*backend.writes.borrow(), 3);

    let persisted = backend.slot.borrow().clone().expect("favorites were written");
    assert_eq!(
        FavoritesList::from_json(&persisted).expect("valid json"),
        *store.list()
    );
    let reloaded = FavoritesStore::load(backend.clone());
    assert_eq!(reloaded.list(), store.list());
}

#[test]
fn test_store_serialized_shape() {
    let backend = MemoryBackend::default();
    let mut store = FavoritesStore::load(backend.clone());
    store.toggle(RecipeSummary::new("52959", "Baked salmon", "https://img/s.jpg"));
    let persisted = backend.slot.borrow().clone().unwrap();
    assert_eq!(
        persisted,
        r#"[{"idMeal":"52959","strMeal":"Baked salmon","strMealThumb":"https://img/s.jpg"}]"#
    );
}

#[test]
fn test_navigate_always_resets() {
    for target in ActiveView::ALL {
        for current in ActiveView::ALL {
            let mut state = ViewState {
                active_view: current,
                active_category: Some("Seafood".to_owned()),
                has_searched: true,
            };
            state.navigate(target);
            assert_eq!(state.active_view, target);
            assert_eq!(state.active_category, None);
            assert!(!state.has_searched);
        }
    }
}

#[test]
fn test_navigate_home_returns_to_idle() {
    let mut state = ViewState::new();
    state.mark_searched();
    assert_eq!(state.home_mode(), HomeMode::Results);
    state.navigate(ActiveView::Home);
    assert_eq!(state.home_mode(), HomeMode::Idle);
}

#[test]
fn test_select_category_shows_results() {
    let mut state = ViewState::new();
    state.navigate(ActiveView::Categories);
    state.select_category("Seafood");
    assert_eq!(state.active_view, ActiveView::Home);
    assert_eq!(state.active_category.as_deref(), Some("Seafood"));
    assert!(state.has_searched);
    assert_eq!(state.home_mode(), HomeMode::Results);
}

#[test]
fn test_search_keeps_category() {
    let mut state = ViewState::new();
    state.select_category("Dessert");
    state.mark_searched();
    assert_eq!(state.active_category.as_deref(), Some("Dessert"));
    assert_eq!(state.active_view, ActiveView::Home);
}

#[test]
fn test_empty_result_is_no_recipe_found() {
    let state = ListState::from_result::<()>(Ok(Vec::new()));
    assert_eq!(state, ListState::NoResults);
    assert_eq!(state.error_message(), Some("No recipe found."));
    assert!(state.recipes().is_empty());
    assert!(!state.is_loading());
}

#[test]
fn test_failed_fetch_message() {
    let state = ListState::from_result::<&str>(Err("Status: 500"));
    assert_eq!(state.error_message(), Some("Failed to fetch recipes."));
    assert!(state.recipes().is_empty());
}

#[test]
fn test_loaded_list_has_no_error() {
    let state = ListState::from_result::<()>(Ok(vec![summary!("1")]));
    assert_eq!(state.error_message(), None);
    assert_eq!(state.recipes().len(), 1);
    assert_eq!(ListState::Loading.error_message(), None);
    assert!(ListState::Loading.recipes().is_empty());
}

#[test]
fn test_categories_state() {
    let state = CategoriesState::from_result::<()>(Ok(vec![Category::new("Seafood")]));
    assert_eq!(state.categories(), &[Category::new("Seafood")]);
    assert_eq!(state.error_message(), None);
    let state = CategoriesState::from_result::<()>(Err(()));
    assert_eq!(state.error_message(), Some("Failed to load categories."));
    assert_eq!(CategoriesState::default(), CategoriesState::Loading);
}

#[test]
fn test_request_slot_supersedes() {
    let mut slot = RequestSlot::new();
    let first = slot.begin();
    let second = slot.begin();
    assert!(!slot.is_current(first));
    assert!(slot.is_current(second));
    slot.invalidate();
    assert!(!slot.is_current(second));
}

#[test]
fn test_modal_close_ignores_late_response() {
    let mut modal = ModalState::new();
    let ticket = modal
        .open(&summary!("52772"))
        .expect("summary has an id");
    assert!(modal.is_visible());
    assert!(modal.is_loading());
    assert!(modal.recipe().is_none());

    modal.close();
    assert!(!modal.is_visible());

    let detail = RecipeDetail::new(summary!("52772"));
    assert!(!modal.resolve(ticket, Some(detail)));
    assert!(!modal.is_visible());
    assert!(!modal.is_loading());
    assert!(modal.recipe().is_none());
}

#[test]
fn test_modal_open_replaces_previous() {
    let mut modal = ModalState::new();
    let first = modal.open(&summary!("1")).unwrap();
    let second = modal.open(&summary!("2")).unwrap();
    assert!(!modal.resolve(first, Some(RecipeDetail::new(summary!("1")))));
    assert!(modal.is_loading());
    assert!(modal.resolve(second, Some(RecipeDetail::new(summary!("2")))));
    assert_eq!(modal.recipe().map(|r| r.id()), Some("2"));

    // Opening again clears the loaded recipe straight away.
    modal.open(&summary!("3")).unwrap();
    assert!(modal.recipe().is_none());
    assert!(modal.is_loading());
}

#[test]
fn test_modal_pending_lookup_follows_latest_open() {
    let mut modal = ModalState::new();
    assert_eq!(modal.pending_lookup(), None);

    let first = modal.open(&summary!("52772")).unwrap();
    assert_eq!(modal.pending_lookup(), Some((first, "52772")));
    let second = modal.open(&summary!("52773")).unwrap();
    assert_eq!(modal.pending_lookup(), Some((second, "52773")));

    assert!(modal.resolve(second, Some(RecipeDetail::new(summary!("52773")))));
    assert_eq!(modal.pending_lookup(), None);

    let third = modal.open(&summary!("1")).unwrap();
    assert_eq!(modal.pending_lookup(), Some((third, "1")));
    modal.close();
    assert_eq!(modal.pending_lookup(), None);
}

#[test]
fn test_modal_lookup_failure_is_visible() {
    let mut modal = ModalState::new();
    let ticket = modal.open(&summary!("999")).unwrap();
    assert!(modal.resolve(ticket, None));
    assert!(modal.is_visible());
    assert!(modal.is_unavailable());
    assert!(!modal.is_loading());
    assert!(modal.recipe().is_none());
    modal.close();
    assert!(!modal.is_visible());
    assert!(!modal.is_unavailable());
}

#[test]
fn test_modal_rejects_missing_id() {
    let mut modal = ModalState::new();
    let before = modal.clone();
    assert_eq!(
        modal.open(&RecipeSummary::new("", "Nameless", "")),
        Err(OpenError::MissingId)
    );
    assert_eq!(modal, before);
    assert!(!modal.is_visible());
}

#[test]
fn test_collect_ingredients_drops_blank_names() {
    let slots = vec![
        (Some("Salt"), Some("1 tsp")),
        (Some(""), Some("2 cups")),
    ];
    let lines = collect_ingredients(slots);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].to_string(), "Salt - 1 tsp");
}

#[test]
fn test_collect_ingredients_keeps_slot_order() {
    let slots = vec![
        (Some("Flour"), Some("200g")),
        (None, None),
        (Some("   "), Some("pinch")),
        (Some("Eggs"), None),
        (Some("Milk"), Some("300ml")),
    ];
    let lines: Vec<String> = collect_ingredients(slots)
        .iter()
        .map(|l| l.to_string())
        .collect();
    assert_eq!(lines, vec!["Flour - 200g", "Eggs - ", "Milk - 300ml"]);
}

#[test]
fn test_collect_ingredients_stops_at_slot_limit() {
    let slots = (1..=25).map(|i| (Some(format!("item{}", i)), Some(String::new())));
    assert_eq!(collect_ingredients(slots).len(), INGREDIENT_SLOTS);
}

#[test]
fn test_parse_tags() {
    assert_eq!(parse_tags("Meat, Casserole,,  Spicy "), vec!["Meat", "Casserole", "Spicy"]);
    assert!(parse_tags("").is_empty());
    let mut detail = RecipeDetail::new(summary!("1"));
    assert_eq!(detail.tag_line(), None);
    detail.tags = Some(parse_tags("Fish,Light"));
    assert_eq!(detail.tag_line().as_deref(), Some("Fish, Light"));
}

#[test]
fn test_youtube_long_url() {
    let url = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";
    assert_eq!(youtube_video_id(url), Some("dQw4w9WgXcQ"));
    assert_eq!(
        youtube_embed_url(url).as_deref(),
        Some("https://www.youtube.com/embed/dQw4w9WgXcQ")
    );
}

#[test]
fn test_youtube_short_url() {
    assert_eq!(
        youtube_video_id("https://youtu.be/4aZr5hZXP_s?t=10"),
        Some("4aZr5hZXP_s")
    );
}

#[test]
fn test_youtube_unrecognized_url() {
    assert_eq!(youtube_embed_url("https://vimeo.com/123456"), None);
    assert_eq!(youtube_embed_url("https://www.youtube.com/watch?v=short"), None);
    assert_eq!(youtube_embed_url(""), None);

    let mut detail = RecipeDetail::new(summary!("1"));
    detail.youtube_url = Some("not a link".to_owned());
    assert_eq!(detail.embed_url(), None);
}
