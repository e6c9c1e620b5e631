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
use std::fmt;

use crate::{RecipeDetail, RecipeSummary, RequestSlot, Ticket};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenError {
    MissingId,
}

impl fmt::Display for OpenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpenError::MissingId => write!(f, "recipe summary has no id"),
        }
    }
}

impl std::error::Error for OpenError {}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum Phase {
    #[default]
    Closed,
    Loading { ticket: Ticket, id: String },
    Loaded(RecipeDetail),
    Unavailable,
}

/// State of the recipe detail overlay.
///
/// The overlay is shown while a lookup is pending, once a recipe has
/// loaded, and after a failed lookup so the failure can be reported. Only
/// the response to the most recent [`ModalState::open`] is ever applied.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModalState {
    phase: Phase,
    slot: RequestSlot,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears any previous recipe and starts loading the given one.
    pub fn open(&mut self, summary: &RecipeSummary) -> Result<Ticket, OpenError> {
        if !summary.has_id() {
            return Err(OpenError::MissingId);
        }
        let ticket = self.slot.begin();
        self.phase = Phase::Loading {
            ticket,
            id: summary.id.clone(),
        };
        Ok(ticket)
    }

    /// The lookup still waiting for a result, if any.
    pub fn pending_lookup(&self) -> Option<(Ticket, &str)> {
        match &self.phase {
            Phase::Loading { ticket, id } => Some((*ticket, id.as_str())),
            _ => None,
        }
    }

    /// Applies a lookup result. `None` means the recipe could not be loaded.
    /// Returns false without touching the state when the ticket is stale.
    pub fn resolve(&mut self, ticket: Ticket, detail: Option<RecipeDetail>) -> bool {
        if !self.slot.is_current(ticket) || !self.is_loading() {
            return false;
        }
        self.phase = match detail {
            Some(detail) => Phase::Loaded(detail),
            None => Phase::Unavailable,
        };
        true
    }

    pub fn close(&mut self) {
        self.phase = Phase::Closed;
        self.slot.invalidate();
    }

    pub fn is_visible(&self) -> bool {
        self.phase != Phase::Closed
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading { .. })
    }

    /// True when the last lookup finished without a recipe.
    pub fn is_unavailable(&self) -> bool {
        self.phase == Phase::Unavailable
    }

    pub fn recipe(&self) -> Option<&RecipeDetail> {
        match &self.phase {
            Phase::Loaded(detail) => Some(detail),
            _ => None,
        }
    }
}
