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
use tracing::debug;

use crate::app_state::StateHandler;
use crate::components::RecipeCard;

#[derive(Prop)]
pub struct RecipeListProps<'ctx> {
    sh: StateHandler<'ctx>,
    recipes: &'ctx ReadSignal<Vec<RecipeSummary>>,
}

#[component]
pub fn RecipeList<'ctx, G: Html>(cx: Scope<'ctx>, props: RecipeListProps<'ctx>) -> View<G> {
    let RecipeListProps { sh, recipes } = props;
    view! {cx,
        div(class="recipe-list") {
            Keyed(
                iterable=recipes,
                view=move |cx, recipe| {
                    debug!(id=%recipe.id, "Rendering recipe card");
                    view! {cx, RecipeCard(sh=sh, recipe=recipe) }
                },
                key=|recipe| recipe.id.clone(),
            )
        }
    }
}
