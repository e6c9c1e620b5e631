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
use recipes::RecipeSummary;
use sycamore::prelude::*;
use web_sys::Event;

use crate::app_state::{Message, StateHandler};

pub fn heart_glyph(favorited: bool) -> &'static str {
    if favorited {
        "♥"
    } else {
        "♡"
    }
}

pub fn heart_title(favorited: bool) -> &'static str {
    if favorited {
        "Remove from favorites"
    } else {
        "Add to favorites"
    }
}

#[derive(Prop)]
pub struct RecipeCardProps<'ctx> {
    sh: StateHandler<'ctx>,
    recipe: RecipeSummary,
}

/// A single listing entry. Clicking the card opens the detail overlay,
/// clicking the heart only toggles the favorite.
#[component]
pub fn RecipeCard<'ctx, G: Html>(cx: Scope<'ctx>, props: RecipeCardProps<'ctx>) -> View<G> {
    let RecipeCardProps { sh, recipe } = props;
    let recipe = create_ref(cx, recipe);
    let favorited = sh.get_selector(cx, move |state| state.get().favorites.contains(&recipe.id));
    let image = recipe.thumbnail_url.clone();
    let alt = recipe.name.clone();
    let title = recipe.name.clone();
    let heart_class = create_memo(cx, move || {
        if *favorited.get() {
            "fav-icon favorited"
        } else {
            "fav-icon"
        }
    });
    view! {cx,
        div(class="recipe-card", on:click=move |_| {
            sh.dispatch(cx, Message::OpenRecipe(recipe.clone()));
        }) {
            img(src=image, alt=alt, loading="lazy", class="recipe-image")
            h3(class="recipe-title") {
                (title)
                span(
                    class=heart_class.get(),
                    title=heart_title(*favorited.get()),
                    on:click=move |ev: Event| {
                        ev.stop_propagation();
                        sh.dispatch(cx, Message::ToggleFavorite(recipe.clone()));
                    }
                ) { (heart_glyph(*favorited.get())) }
            }
        }
    }
}
