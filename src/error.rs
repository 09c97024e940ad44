// Copyright (c) 2022 Espresso Systems (espressosys.com)
// This file is part of the Messenger library.

// This program is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// This program is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
// You should have received a copy of the GNU General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.

use crate::types::GraphApiError;
use serde_json::Value;
use snafu::Snafu;

/// Errors raised while rendering a payload, before anything is sent.
///
/// The display text of each variant is stable and can be matched on by callers.
#[derive(Clone, Debug, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum RenderError {
    #[snafu(display("{} {} property cannot be null or undefined.", entity, property))]
    MissingProperty {
        entity: &'static str,
        property: &'static str,
    },

    #[snafu(display("Cannot have url and attachment_id in same message."))]
    UrlWithAttachmentId,

    #[snafu(display("Cannot have attachment_id and is_reusable in same message."))]
    ReusableAttachmentId,

    #[snafu(display("GenericTemplate must have at least one Element."))]
    NoElements,

    #[snafu(display("ButtonTemplate must have at least one Button."))]
    NoButtons,

    #[snafu(display("text property must be set to post GreetingText."))]
    MissingGreeting,

    #[snafu(display("one or more cta's are required to post {}.", setting))]
    NoCallToActions { setting: &'static str },
}

/// Errors returned by the senders.
///
/// A request either never leaves the client ([Error::Render]), fails in the transport
/// ([Error::Transport]), or reaches the Graph API and comes back with a status outside the 2xx
/// range ([Error::UnexpectedStatus]). None of these are retried.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("{}", source))]
    Render { source: RenderError },

    // surf::Error does not implement std::error::Error, so it is carried as a plain field.
    #[snafu(display("{}", error))]
    Transport { error: surf::Error },

    #[snafu(display("Unexpected statusCode: {} - {}", status, body))]
    UnexpectedStatus { status: u16, body: Value },

    #[snafu(display("response body fails to deserialize: {}", source))]
    Decode { source: serde_json::Error },
}

impl Error {
    /// The HTTP status of the response that caused this error, if there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Decode the Graph API error envelope from a rejected response body.
    ///
    /// Returns `None` for errors that did not come from a response, or whose body does not contain
    /// an `error` object.
    pub fn api_error(&self) -> Option<GraphApiError> {
        match self {
            Self::UnexpectedStatus { body, .. } => body
                .get("error")
                .and_then(|err| serde_json::from_value(err.clone()).ok()),
            _ => None,
        }
    }
}

impl From<RenderError> for Error {
    fn from(source: RenderError) -> Self {
        Self::Render { source }
    }
}
