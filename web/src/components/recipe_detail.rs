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
use recipes::{ModalState, RecipeDetail, RecipeSummary};
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use tracing::error;
use web_sys::Event;

use crate::api::HttpStore;
use crate::app_state::{Message, StateHandler};
use crate::components::{heart_glyph, heart_title};

fn favorite_button<'ctx, G: Html>(
    cx: Scope<'ctx>,
    sh: StateHandler<'ctx>,
    favorited: &'ctx ReadSignal<bool>,
    summary: RecipeSummary,
) -> View<G> {
    let title = create_memo(cx, move || heart_title(*favorited.get()));
    view! {cx,
        button(class="modal-fav-btn", title=title.get(), on:click=move |_| {
            sh.dispatch(cx, Message::ToggleFavorite(summary.clone()));
        }) { (heart_glyph(*favorited.get())) }
    }
}

fn recipe_body<G: Html>(cx: Scope, detail: &RecipeDetail) -> View<G> {
    let title = detail.name().to_owned();
    let image = detail.summary.thumbnail_url.clone();
    let alt = detail.name().to_owned();
    let area = match &detail.area {
        Some(area) => {
            let area = format!("🌎 {}", area);
            view! {cx, span(class="meta-item") { (area) } }
        }
        None => View::empty(),
    };
    let tags = match detail.tag_line() {
        Some(tags) => {
            let tags = format!("🏷️ {}", tags);
            view! {cx, span(class="meta-item") { (tags) } }
        }
        None => View::empty(),
    };
    let ingredients = View::new_fragment(
        detail
            .ingredients
            .iter()
            .map(|line| {
                let line = line.to_string();
                view! {cx, li { (line) } }
            })
            .collect(),
    );
    let instructions = detail.instructions.clone();
    let video = match detail.embed_url() {
        Some(src) => view! {cx,
            div(class="video-container") {
                iframe(src=src, title="YouTube video", frameborder="0", allowfullscreen=true)
            }
        },
        None => View::empty(),
    };
    view! {cx,
        h2(class="modal-title") { (title) }
        img(src=image, alt=alt, class="modal-image")
        div(class="modal-meta") {
            (area)
            (tags)
        }
        h3 { "Ingredients:" }
        ul(class="ingredients-list") { (ingredients) }
        h3 { "Instructions:" }
        p(class="instructions") { (instructions) }
        (video)
    }
}

fn overlay_content<'ctx, G: Html>(
    cx: Scope<'ctx>,
    sh: StateHandler<'ctx>,
    favorited: &'ctx ReadSignal<bool>,
    modal: &ModalState,
) -> View<G> {
    if modal.is_loading() {
        return view! {cx, div(class="modal-loading") { "Loading recipe details..." } };
    }
    match modal.recipe() {
        Some(detail) => {
            let fav = favorite_button(cx, sh, favorited, detail.summary.clone());
            let body = recipe_body(cx, detail);
            view! {cx,
                (fav)
                (body)
            }
        }
        None => view! {cx,
            div(class="modal-error") {
                p { "Unable to load recipe details." }
                button(class="btn-primary", on:click=move |_| sh.dispatch(cx, Message::CloseRecipe)) {
                    "Close"
                }
            }
        },
    }
}

#[derive(Prop)]
pub struct RecipeDetailProps<'ctx> {
    sh: StateHandler<'ctx>,
}

/// The recipe overlay. Shown while a lookup is pending, once it has loaded,
/// and after a failed lookup until dismissed.
///
/// The overlay issues the lookups itself. It is mounted for the whole app,
/// so a lookup outlives whichever view asked for it.
#[component]
pub fn RecipeDetailOverlay<'ctx, G: Html>(
    cx: Scope<'ctx>,
    props: RecipeDetailProps<'ctx>,
) -> View<G> {
    let RecipeDetailProps { sh } = props;
    let store = create_ref(cx, HttpStore::get_from_context(cx));
    let pending = sh.get_selector(cx, |state| {
        state
            .get()
            .modal
            .pending_lookup()
            .map(|(ticket, id)| (ticket, id.to_owned()))
    });
    create_effect(cx, move || {
        if let Some((ticket, id)) = pending.get().as_ref().clone() {
            spawn_local_scoped(cx, async move {
                let detail = match store.lookup_by_id(&id).await {
                    Ok(Some(detail)) => Some(detail),
                    Ok(None) => {
                        error!(id, "No recipe data found");
                        None
                    }
                    Err(err) => {
                        error!(id, ?err, "Failed to fetch recipe details");
                        None
                    }
                };
                sh.dispatch(cx, Message::RecipeLoaded(ticket, detail));
            });
        }
    });
    let modal = sh.get_selector(cx, |state| state.get().modal.clone());
    let favorited = sh.get_selector(cx, |state| {
        let state = state.get();
        state
            .modal
            .recipe()
            .map_or(false, |detail| state.favorites.contains(detail.id()))
    });
    view! {cx,
        (if modal.get().is_visible() {
            let content = overlay_content(cx, sh, favorited, modal.get().as_ref());
            view! {cx,
                div(class="modal-overlay", on:click=move |_| sh.dispatch(cx, Message::CloseRecipe)) {
                    div(class="modal-content", on:click=|ev: Event| ev.stop_propagation()) {
                        button(class="modal-close", title="Close", on:click=move |_| {
                            sh.dispatch(cx, Message::CloseRecipe)
                        }) { "×" }
                        (content)
                    }
                }
            }
        } else {
            View::empty()
        })
    }
}
