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

#[component]
pub fn AboutPage<G: Html>(cx: Scope) -> View<G> {
    view! {cx,
        div(class="about-section") {
            h2 { "🍳 About Recipe Finder" }
            p {
                "A small helper for finding something good to cook. Search by dish or "
                "ingredient, browse by category, and keep the ones you like as favorites. "
                "Favorites stay in this browser only."
            }
            p(class="highlight") { "Recipe data comes from TheMealDB." }
        }
    }
}
