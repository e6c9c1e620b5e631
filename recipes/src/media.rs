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
use once_cell::sync::Lazy;
use regex::Regex;

pub const YOUTUBE_EMBED_ROOT: &str = "https://www.youtube.com/embed/";

// Long form `watch?v=<id>` or short form `youtu.be/<id>`.
static VIDEO_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:v=|\.be/)([A-Za-z0-9_-]{11})").unwrap());

/// Extracts the 11 character video id from a video link.
pub fn youtube_video_id(url: &str) -> Option<&str> {
    VIDEO_ID
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Embeddable player URL for a video link. Links without a recognizable
/// video id yield None.
pub fn youtube_embed_url(url: &str) -> Option<String> {
    youtube_video_id(url).map(|id| format!("{}{}", YOUTUBE_EMBED_ROOT, id))
}
