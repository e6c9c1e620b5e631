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
use recipes::CategoriesState;
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use tracing::{debug, instrument};

use crate::api::HttpStore;
use crate::app_state::{Message, StateHandler};

#[derive(Prop)]
pub struct CategoryGridProps<'ctx> {
    sh: StateHandler<'ctx>,
}

/// Every recipe category as a button. Picking one switches to the home view
/// filtered by that category.
#[instrument(skip_all)]
#[component]
pub fn CategoryGrid<'ctx, G: Html>(cx: Scope<'ctx>, props: CategoryGridProps<'ctx>) -> View<G> {
    let CategoryGridProps { sh } = props;
    let store = HttpStore::get_from_context(cx);
    let state = create_signal(cx, CategoriesState::Loading);
    spawn_local_scoped(cx, async move {
        let result = store.fetch_categories().await;
        if let Ok(categories) = &result {
            debug!(count = categories.len(), "Loaded categories");
        }
        state.set(CategoriesState::from_result(result));
    });
    let categories = create_memo(cx, move || state.get().categories().to_vec());

    view! {cx,
        (match state.get().as_ref() {
            CategoriesState::Loading => view! {cx,
                div(class="loading-section") {
                    h2 { "Categories" }
                    p { "Loading categories..." }
                }
            },
            CategoriesState::Failed => {
                let message = state.get().error_message().unwrap_or_default();
                view! {cx,
                    div(class="error-section") {
                        h2 { "Categories" }
                        p { (message) }
                    }
                }
            }
            CategoriesState::Loaded(_) => view! {cx,
                div(class="categories-section") {
                    h2 { "Categories" }
                    div(class="categories-grid") {
                        Keyed(
                            iterable=categories,
                            view=move |cx, category| {
                                let label = category.name.clone();
                                view! {cx,
                                    button(class="category-button", on:click=move |_| {
                                        sh.dispatch(cx, Message::SelectCategory(category.name.clone()));
                                    }) { (label) }
                                }
                            },
                            key=|category| category.name.clone(),
                        )
                    }
                }
            },
        })
    }
}
