// Copyright (c) 2022 Espresso Systems (espressosys.com)
// This file is part of the Messenger library.

// This program is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// This program is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
// You should have received a copy of the GNU General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.

use serde::{Deserialize, Serialize};

pub const DEFAULT_GRAPH_URL: &str = "https://graph.facebook.com/v2.6";

/// Environment variable overriding [Config::graph_url] in [Config::from_env].
pub const GRAPH_URL_ENV: &str = "MESSENGER_GRAPH_URL";

/// Location of the Graph API.
///
/// All endpoints used by the senders are derived from `graph_url`, which includes the API version.
/// Pointing it somewhere else is mostly useful for tests and proxies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub graph_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            graph_url: DEFAULT_GRAPH_URL.to_string(),
        }
    }
}

impl Config {
    pub fn new(graph_url: impl Into<String>) -> Self {
        Self {
            graph_url: graph_url.into(),
        }
    }

    /// The default configuration, with `graph_url` taken from `MESSENGER_GRAPH_URL` if it is set.
    pub fn from_env() -> Self {
        match std::env::var(GRAPH_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    fn base(&self) -> &str {
        self.graph_url.trim_end_matches('/')
    }

    pub fn messages_endpoint(&self) -> String {
        format!("{}/me/messages", self.base())
    }

    pub fn thread_settings_endpoint(&self) -> String {
        format!("{}/me/thread_settings", self.base())
    }

    /// Base of the user profile endpoint; profiles live at `{profile_endpoint}/{user_id}`.
    pub fn profile_endpoint(&self) -> String {
        self.base().to_string()
    }
}
