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
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use sycamore::prelude::*;
use tracing::{debug, error, instrument};

use client_api::*;
use recipes::{Category, RecipeDetail, RecipeSummary};
use wasm_bindgen::JsValue;

#[derive(Debug)]
pub struct Error(String);

impl From<JsValue> for Error {
    fn from(item: JsValue) -> Self {
        Error(format!("{:?}", item))
    }
}

impl From<String> for Error {
    fn from(item: String) -> Self {
        Error(item)
    }
}

impl From<&'static str> for Error {
    fn from(item: &'static str) -> Self {
        Error(item.to_owned())
    }
}

impl From<gloo_net::Error> for Error {
    fn from(item: gloo_net::Error) -> Self {
        Error(format!("{:?}", item))
    }
}

impl From<Error> for String {
    fn from(item: Error) -> Self {
        format!("{:?}", item)
    }
}

/// Read only client for the recipe lookup service. One attempt per call, no
/// retries and no caching.
#[derive(Clone, Debug)]
pub struct HttpStore {
    root: String,
}

impl HttpStore {
    pub fn new(root: String) -> Self {
        Self { root }
    }

    pub fn provide_context<S: Into<String>>(cx: Scope, root: S) {
        provide_context(cx, std::rc::Rc::new(Self::new(root.into())));
    }

    pub fn get_from_context(cx: Scope) -> std::rc::Rc<Self> {
        use_context::<std::rc::Rc<Self>>(cx).clone()
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let resp = match Request::get(path).send().await {
            Ok(resp) => resp,
            Err(err) => {
                error!(path, ?err, "Error hitting api");
                return Err(err.into());
            }
        };
        if resp.status() != 200 {
            error!(path, status = resp.status(), "Unexpected status from api");
            Err(format!("Status: {}", resp.status()).into())
        } else {
            debug!("We got a valid response back!");
            resp.json::<T>().await.map_err(|err| {
                error!(path, ?err, "Unparseable response from api");
                err.into()
            })
        }
    }

    #[instrument]
    pub async fn search_by_name(&self, query: &str) -> Result<Vec<RecipeSummary>, Error> {
        let path = search_path(&self.root, query);
        let resp = self.get_json::<SearchResponse>(&path).await?;
        if resp.is_empty() {
            debug!(query, "No recipes matched search");
        }
        Ok(resp.into_meals())
    }

    #[instrument]
    pub async fn filter_by_category(&self, category: &str) -> Result<Vec<RecipeSummary>, Error> {
        let path = filter_path(&self.root, category);
        let resp = self.get_json::<FilterResponse>(&path).await?;
        if resp.is_empty() {
            debug!(category, "No recipes in category");
        }
        Ok(resp.into_meals())
    }

    #[instrument]
    pub async fn lookup_by_id(&self, id: &str) -> Result<Option<RecipeDetail>, Error> {
        let path = lookup_path(&self.root, id);
        let detail = self
            .get_json::<LookupResponse>(&path)
            .await?
            .into_detail(id);
        if detail.is_none() {
            debug!(id, "Recipe doesn't exist");
        }
        Ok(detail)
    }

    #[instrument]
    pub async fn fetch_categories(&self) -> Result<Vec<Category>, Error> {
        let path = categories_path(&self.root);
        Ok(self
            .get_json::<CategoryListResponse>(&path)
            .await?
            .into_categories())
    }
}
