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
use recipes::{ActiveView, FavoritesStore};
use sycamore::prelude::*;
use tracing::{info, instrument};

use crate::api::HttpStore;
use crate::app_state::{get_state_handler, AppState, Config, StateHandler};
use crate::components::*;
use crate::js_lib::LocalStorageSlot;
use crate::pages::*;

fn view_switch<'ctx, G: Html>(cx: Scope<'ctx>, sh: StateHandler<'ctx>, active: ActiveView) -> View<G> {
    match active {
        ActiveView::Home => view! {cx,
            HomePage(sh=sh)
        },
        ActiveView::Categories => view! {cx,
            CategoriesPage(sh=sh)
        },
        ActiveView::Favorites => view! {cx,
            FavoritesPage(sh=sh)
        },
        ActiveView::About => view! {cx,
            AboutPage()
        },
    }
}

#[instrument]
#[component]
pub fn UI<G: Html>(cx: Scope) -> View<G> {
    let config = Config::default();
    info!(api_root = %config.api_root, "Starting UI");
    HttpStore::provide_context(cx, config.api_root.clone());
    let favorites = FavoritesStore::load(LocalStorageSlot::new(config.favorites_key));
    let sh = get_state_handler(cx, AppState::new(favorites));
    let active_view = sh.get_selector(cx, |state| state.get().view.active_view);

    view! {cx,
        div(class="app") {
            Header(sh=sh)
            main(class="main-content") {
                (view_switch(cx, sh, *active_view.get()))
            }
            RecipeDetailOverlay(sh=sh)
            Footer()
        }
    }
}
