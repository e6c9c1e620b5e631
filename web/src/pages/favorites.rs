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
use sycamore::prelude::*;

use crate::components::RecipeList;
use crate::pages::PageProps;

#[component]
pub fn FavoritesPage<'ctx, G: Html>(cx: Scope<'ctx>, props: PageProps<'ctx>) -> View<G> {
    let PageProps { sh } = props;
    let favorites = sh.get_selector(cx, |state| state.get().favorites.list().to_vec());
    let empty = create_memo(cx, move || favorites.get().is_empty());
    view! {cx,
        div(class="favorites-section") {
            h2 { "Your Favorite Recipes" }
            (if *empty.get() {
                view! {cx, p(class="no-favorites") { "No favorites yet. Go add some!" } }
            } else {
                view! {cx, RecipeList(sh=sh, recipes=favorites) }
            })
        }
    }
}
