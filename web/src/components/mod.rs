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
pub mod categories;
pub mod footer;
pub mod header;
pub mod recipe;
pub mod recipe_detail;
pub mod recipe_finder;
pub mod recipe_list;

pub use categories::*;
pub use footer::*;
pub use header::*;
pub use recipe::*;
pub use recipe_detail::*;
pub use recipe_finder::*;
pub use recipe_list::*;
