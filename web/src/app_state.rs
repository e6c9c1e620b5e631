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
use client_api::DEFAULT_API_ROOT;
use recipes::{
    ActiveView, FavoritesStore, ModalState, RecipeDetail, RecipeSummary, Ticket, ViewState,
    DEFAULT_FAVORITES_KEY,
};
use sycamore::prelude::*;
use sycamore_state::{Handler, MessageMapper};
use tracing::{debug, error, instrument};

use crate::js_lib::LocalStorageSlot;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_root: String,
    pub favorites_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_root: option_env!("MEALDB_API_ROOT")
                .unwrap_or(DEFAULT_API_ROOT)
                .to_owned(),
            favorites_key: DEFAULT_FAVORITES_KEY.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub view: ViewState,
    pub favorites: FavoritesStore<LocalStorageSlot>,
    pub modal: ModalState,
}

impl AppState {
    pub fn new(favorites: FavoritesStore<LocalStorageSlot>) -> Self {
        Self {
            view: ViewState::new(),
            favorites,
            modal: ModalState::new(),
        }
    }
}

#[derive(Debug)]
pub enum Message {
    Navigate(ActiveView),
    SelectCategory(String),
    Searched,
    ToggleFavorite(RecipeSummary),
    OpenRecipe(RecipeSummary),
    /// The outcome of the lookup issued for `Ticket`.
    RecipeLoaded(Ticket, Option<RecipeDetail>),
    CloseRecipe,
}

pub struct StateMachine;

impl MessageMapper<Message, AppState> for StateMachine {
    #[instrument(skip_all, fields(?msg))]
    fn map<'ctx>(&self, _cx: Scope<'ctx>, msg: Message, original: &'ctx Signal<AppState>) {
        let mut original_copy = original.get().as_ref().clone();
        match msg {
            Message::Navigate(target) => {
                original_copy.view.navigate(target);
            }
            Message::SelectCategory(category) => {
                original_copy.view.select_category(category);
            }
            Message::Searched => {
                original_copy.view.mark_searched();
            }
            Message::ToggleFavorite(recipe) => {
                let id = recipe.id.clone();
                let favorited = original_copy.favorites.toggle(recipe);
                debug!(id, favorited, "Toggled favorite");
            }
            Message::OpenRecipe(summary) => {
                if let Err(err) = original_copy.modal.open(&summary) {
                    error!(?summary, %err, "Invalid recipe object");
                    return;
                }
            }
            Message::RecipeLoaded(ticket, detail) => {
                if !original_copy.modal.resolve(ticket, detail) {
                    debug!(?ticket, "Ignoring stale recipe lookup");
                    return;
                }
            }
            Message::CloseRecipe => {
                original_copy.modal.close();
            }
        }
        original.set(original_copy);
    }
}

pub type StateHandler<'ctx> = &'ctx Handler<'ctx, StateMachine, AppState, Message>;

pub fn get_state_handler<'ctx>(cx: Scope<'ctx>, initial: AppState) -> StateHandler<'ctx> {
    Handler::new(cx, initial, StateMachine)
}
