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

/// Identifies one request issued from a [`RequestSlot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Tracks which in-flight request a view still cares about.
///
/// Nothing cancels the underlying request, so every response has to be
/// checked against the slot before it is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestSlot {
    generation: u64,
}

impl RequestSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new request, superseding any earlier one.
    pub fn begin(&mut self) -> Ticket {
        self.generation = self.generation.wrapping_add(1);
        Ticket(self.generation)
    }

    /// Marks every outstanding ticket stale without starting a new request.
    pub fn invalidate(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.generation == ticket.0
    }
}
