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
use recipes::HomeMode;
use sycamore::prelude::*;

use crate::app_state::StateHandler;
use crate::components::RecipeFinder;

const WELCOME_ICON: &str = "https://cdn-icons-png.flaticon.com/512/1046/1046857.png";

#[derive(Prop)]
pub struct PageProps<'ctx> {
    pub sh: StateHandler<'ctx>,
}

#[component]
pub fn HomePage<'ctx, G: Html>(cx: Scope<'ctx>, props: PageProps<'ctx>) -> View<G> {
    let PageProps { sh } = props;
    let idle = sh.get_selector(cx, |state| state.get().view.home_mode() == HomeMode::Idle);
    view! {cx,
        div(class="home-section") {
            (if *idle.get() {
                view! {cx,
                    div(class="welcome-section") {
                        img(src=WELCOME_ICON, alt="Cooking", class="welcome-icon")
                        h2 { "Welcome to Recipe Finder!" }
                        p { "Type an ingredient or dish name below and discover delicious recipes." }
                    }
                }
            } else {
                View::empty()
            })
            RecipeFinder(sh=sh)
        }
    }
}
