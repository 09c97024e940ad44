// Copyright (c) 2022 Espresso Systems (espressosys.com)
// This file is part of the Messenger library.

// This program is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// This program is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
// You should have received a copy of the GNU General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.

use crate::client::{response_to_result, HttpRequest, SurfTransport, Transport};
use crate::config::Config;
use crate::error::{DecodeSnafu, Error, TransportSnafu};
use crate::types::Profile;
use serde_json::Value;
use snafu::ResultExt;
use std::sync::Arc;
use surf::http::Method;
use tracing::{event, Level};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProfileField {
    FirstName,
    LastName,
    ProfilePic,
    Locale,
    Timezone,
    Gender,
}

impl ProfileField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::ProfilePic => "profile_pic",
            Self::Locale => "locale",
            Self::Timezone => "timezone",
            Self::Gender => "gender",
        }
    }
}

/// Looks up the public profile of users who messaged the page.
#[derive(Clone)]
pub struct UserProfiles {
    endpoint: String,
    transport: Arc<dyn Transport>,
}

impl UserProfiles {
    pub fn new() -> Self {
        Self::with_transport(&Config::default(), Arc::new(SurfTransport::new()))
    }

    pub fn with_transport(config: &Config, transport: Arc<dyn Transport>) -> Self {
        Self {
            endpoint: config.profile_endpoint(),
            transport,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the profile of `user_id` as returned by the Graph API.
    pub async fn get_profile(&self, user_id: &str, access_token: &str) -> Result<Value, Error> {
        self.get(user_id, &[], access_token).await
    }

    /// Fetch only the given `fields` of the profile of `user_id`.
    pub async fn get_profile_fields(
        &self,
        user_id: &str,
        fields: &[ProfileField],
        access_token: &str,
    ) -> Result<Value, Error> {
        self.get(user_id, fields, access_token).await
    }

    /// Fetch the profile of `user_id` and decode it.
    pub async fn profile(&self, user_id: &str, access_token: &str) -> Result<Profile, Error> {
        let body = self.get_profile(user_id, access_token).await?;
        serde_json::from_value(body).context(DecodeSnafu)
    }

    async fn get(
        &self,
        user_id: &str,
        fields: &[ProfileField],
        access_token: &str,
    ) -> Result<Value, Error> {
        event!(Level::DEBUG, "fetching profile of {}", user_id);
        let mut req = HttpRequest::new(Method::Get, format!("{}/{}", self.endpoint, user_id))
            .with_query("access_token", access_token);
        if !fields.is_empty() {
            let fields = fields
                .iter()
                .map(|field| field.as_str())
                .collect::<Vec<_>>()
                .join(",");
            req = req.with_query("fields", fields);
        }
        let res = self
            .transport
            .execute(req)
            .await
            .map_err(|error| TransportSnafu { error }.build())?;
        response_to_result(res)
    }
}

impl Default for UserProfiles {
    fn default() -> Self {
        Self::new()
    }
}
