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

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActiveView {
    #[default]
    Home,
    Categories,
    Favorites,
    About,
}

impl ActiveView {
    /// Navigation targets in header order.
    pub const ALL: [ActiveView; 4] = [
        ActiveView::Home,
        ActiveView::Categories,
        ActiveView::Favorites,
        ActiveView::About,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ActiveView::Home => "Home",
            ActiveView::Categories => "Categories",
            ActiveView::Favorites => "Favorites",
            ActiveView::About => "About",
        }
    }
}

/// What the home view shows below the search form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeMode {
    /// Nothing searched and no category chosen: the welcome panel.
    Idle,
    /// A search was submitted or a category was chosen.
    Results,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    pub active_view: ActiveView,
    pub active_category: Option<String>,
    pub has_searched: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A header navigation click. Always clears the category and the search
    /// flag, even when `target` is the view already shown.
    pub fn navigate(&mut self, target: ActiveView) {
        self.active_view = target;
        self.active_category = None;
        self.has_searched = false;
    }

    /// A category picked from the categories view.
    pub fn select_category<S: Into<String>>(&mut self, category: S) {
        self.active_view = ActiveView::Home;
        self.active_category = Some(category.into());
        self.has_searched = true;
    }

    /// A search submitted from the home view. Leaves the category alone.
    pub fn mark_searched(&mut self) {
        self.has_searched = true;
    }

    pub fn home_mode(&self) -> HomeMode {
        if self.has_searched || self.active_category.is_some() {
            HomeMode::Results
        } else {
            HomeMode::Idle
        }
    }
}
