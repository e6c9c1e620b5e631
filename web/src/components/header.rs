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
use recipes::ActiveView;
use sycamore::prelude::*;
use web_sys::Event;

use crate::app_state::{Message, StateHandler};

#[derive(Prop)]
pub struct HeaderProps<'ctx> {
    sh: StateHandler<'ctx>,
}

#[component]
pub fn Header<'ctx, G: Html>(cx: Scope<'ctx>, props: HeaderProps<'ctx>) -> View<G> {
    let HeaderProps { sh } = props;
    let targets = create_signal(cx, ActiveView::ALL.to_vec());
    view! {cx,
        header(class="app-header") {
            h1(class="header-title") { "🥞 recipe finder" }
            nav(class="header-nav") {
                Indexed(
                    iterable=targets,
                    view=move |cx, target| {
                        view! {cx,
                            a(href="#", class="nav-link", on:click=move |ev: Event| {
                                ev.prevent_default();
                                sh.dispatch(cx, Message::Navigate(target));
                            }) { (target.label()) }
                        }
                    }
                )
            }
        }
    }
}
