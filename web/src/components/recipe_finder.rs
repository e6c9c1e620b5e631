// Copyright 2022 Jeremy Wall
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
use std::cell::RefCell;
use std::future::Future;

use recipes::{HomeMode, ListState, RecipeSummary, RequestSlot};
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use tracing::{debug, error};
use web_sys::Event;

use crate::api::{Error, HttpStore};
use crate::app_state::{Message, StateHandler};
use crate::components::RecipeList;

/// Issues `query` from `slot` and applies its outcome to `results` unless a
/// later query has superseded it by the time it resolves.
fn run_query<'ctx, F>(
    cx: Scope<'ctx>,
    slot: &'ctx RefCell<RequestSlot>,
    results: &'ctx Signal<ListState>,
    query: F,
) where
    F: Future<Output = Result<Vec<RecipeSummary>, Error>> + 'ctx,
{
    let ticket = slot.borrow_mut().begin();
    results.set(ListState::Loading);
    spawn_local_scoped(cx, async move {
        let outcome = query.await;
        if let Err(err) = &outcome {
            error!(?err, "Failed to fetch recipes");
        }
        if slot.borrow().is_current(ticket) {
            results.set(ListState::from_result(outcome));
        } else {
            debug!("Ignoring superseded recipe query");
        }
    });
}

#[derive(Prop)]
pub struct RecipeFinderProps<'ctx> {
    sh: StateHandler<'ctx>,
}

#[component]
pub fn RecipeFinder<'ctx, G: Html>(cx: Scope<'ctx>, props: RecipeFinderProps<'ctx>) -> View<G> {
    let RecipeFinderProps { sh } = props;
    let store = create_ref(cx, HttpStore::get_from_context(cx));
    let query = create_signal(cx, String::new());
    let results = create_signal(cx, ListState::Idle);
    let slot = create_ref(cx, RefCell::new(RequestSlot::new()));

    let category = sh.get_selector(cx, |state| state.get().view.active_category.clone());
    let show_results =
        sh.get_selector(cx, |state| state.get().view.home_mode() == HomeMode::Results);

    // Back to idle drops whatever is still in flight.
    create_effect(cx, move || {
        if !*show_results.get() {
            slot.borrow_mut().invalidate();
            results.set(ListState::Idle);
        }
    });

    create_effect(cx, move || {
        if let Some(category) = category.get().as_ref().clone() {
            debug!(category, "Filtering recipes by category");
            query.set(String::new());
            run_query(cx, slot, results, async move {
                store.filter_by_category(&category).await
            });
        }
    });

    let on_search = move |ev: Event| {
        ev.prevent_default();
        sh.dispatch(cx, Message::Searched);
        let term = query.get_untracked().as_ref().clone();
        debug!(term, "Searching recipes");
        run_query(cx, slot, results, async move {
            store.search_by_name(&term).await
        });
    };

    let recipes = create_memo(cx, move || results.get().recipes().to_vec());
    let loading = create_memo(cx, move || results.get().is_loading());
    let error_message = create_memo(cx, move || results.get().error_message());

    view! {cx,
        div(class="recipe-finder") {
            form(class="search-form", on:submit=on_search) {
                input(
                    type="text",
                    class="input-field",
                    placeholder="Search for a recipe... ",
                    bind:value=query,
                )
                button(type="submit", class="btn-primary") { "Search" }
            }
            (if *show_results.get() {
                view! {cx,
                    (if *loading.get() {
                        view! {cx,
                            p(class="loading-text") {
                                span(class="loading-icon") { "🔄" }
                                " Loading recipes..."
                            }
                        }
                    } else {
                        View::empty()
                    })
                    (match *error_message.get() {
                        Some(msg) => view! {cx,
                            p(class="error-text") {
                                span(class="error-icon") { "😔" }
                                " " (msg)
                            }
                        },
                        None => View::empty(),
                    })
                    RecipeList(sh=sh, recipes=recipes)
                }
            } else {
                View::empty()
            })
        }
    }
}
