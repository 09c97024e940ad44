// Copyright (c) 2022 Espresso Systems (espressosys.com)
// This file is part of the Messenger library.

// This program is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// This program is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
// You should have received a copy of the GNU General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.

//! The Send API: messages and sender actions addressed to a single recipient.

use crate::attachment::Attachment;
use crate::client::{response_to_result, HttpRequest, SurfTransport, Transport};
use crate::config::Config;
use crate::error::{Error, RenderSnafu, TransportSnafu};
use crate::render::{Mapping, Render};
use crate::template::{ButtonTemplate, GenericTemplate, Template};
use crate::text::Text;
use crate::RenderError;
use serde_json::{json, Value};
use snafu::ResultExt;
use std::sync::Arc;
use surf::http::Method;
use tracing::{event, Level};

/// The content of a request to the messages endpoint.
pub enum Body {
    /// Rendered and sent as `{"message": ...}`.
    Render(Box<dyn Render + Send + Sync>),
    /// Sent as `{"message": {"text": ...}}`.
    Text(String),
    /// Merged as-is into the top level of the request, next to `recipient`.
    ///
    /// This bypasses rendering and validation entirely. It is how sender actions are sent, and
    /// can be used for any request shape this crate does not model.
    Raw(Mapping),
}

impl Body {
    fn merge_into(self, json: &mut Mapping) -> Result<(), RenderError> {
        match self {
            Self::Render(body) => {
                json.insert("message".to_string(), Value::Object(body.render()?));
            }
            Self::Text(text) => {
                json.insert("message".to_string(), json!({ "text": text }));
            }
            Self::Raw(raw) => json.extend(raw),
        }
        Ok(())
    }
}

macro_rules! renderable_body {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Body {
                fn from(body: $t) -> Self {
                    Self::Render(Box::new(body))
                }
            }
        )*
    };
}

renderable_body!(Text, Attachment, GenericTemplate, ButtonTemplate, Template);

impl From<String> for Body {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Body {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<Mapping> for Body {
    fn from(raw: Mapping) -> Self {
        Self::Raw(raw)
    }
}

/// Sends messages to the messages endpoint.
#[derive(Clone)]
pub struct MessageSender {
    endpoint: String,
    transport: Arc<dyn Transport>,
}

impl MessageSender {
    pub fn new() -> Self {
        Self::with_transport(&Config::default(), Arc::new(SurfTransport::new()))
    }

    pub fn with_transport(config: &Config, transport: Arc<dyn Transport>) -> Self {
        Self {
            endpoint: config.messages_endpoint(),
            transport,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Build the request which [MessageSender::send] would issue.
    pub fn make_request(
        &self,
        recipient_id: &str,
        body: Body,
        access_token: &str,
    ) -> Result<HttpRequest, RenderError> {
        let mut json = Mapping::new();
        json.insert("recipient".to_string(), json!({ "id": recipient_id }));
        body.merge_into(&mut json)?;
        Ok(HttpRequest::new(Method::Post, self.endpoint.as_str())
            .with_query("access_token", access_token)
            .with_body(Value::Object(json)))
    }

    /// Send `body` to `recipient_id` and return the parsed response body.
    pub async fn send(
        &self,
        recipient_id: &str,
        body: impl Into<Body>,
        access_token: &str,
    ) -> Result<Value, Error> {
        let req = self
            .make_request(recipient_id, body.into(), access_token)
            .context(RenderSnafu)?;
        event!(Level::DEBUG, "sending message to {}", recipient_id);
        let res = self
            .transport
            .execute(req)
            .await
            .map_err(|error| TransportSnafu { error }.build())?;
        response_to_result(res)
    }
}

impl Default for MessageSender {
    fn default() -> Self {
        Self::new()
    }
}

/// Lightweight status signals shown to the recipient in place of a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SenderAction {
    MarkSeen,
    TypingOn,
    TypingOff,
}

impl SenderAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MarkSeen => "mark_seen",
            Self::TypingOn => "typing_on",
            Self::TypingOff => "typing_off",
        }
    }
}

/// Sends `{"sender_action": ...}` requests through the messages endpoint.
#[derive(Clone, Default)]
pub struct ActionSender {
    sender: MessageSender,
}

impl ActionSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_transport(config: &Config, transport: Arc<dyn Transport>) -> Self {
        Self {
            sender: MessageSender::with_transport(config, transport),
        }
    }

    pub fn endpoint(&self) -> &str {
        self.sender.endpoint()
    }

    pub async fn send(
        &self,
        recipient_id: &str,
        action: SenderAction,
        access_token: &str,
    ) -> Result<Value, Error> {
        let mut body = Mapping::new();
        body.insert("sender_action".to_string(), Value::from(action.as_str()));
        self.sender.send(recipient_id, body, access_token).await
    }
}
