// Copyright (c) 2022 Espresso Systems (espressosys.com)
// This file is part of the Messenger library.

// This program is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// This program is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
// You should have received a copy of the GNU General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Thread settings: the greeting text, the get started button and the persistent menu.
//!
//! Each setting has two request bodies. The post form installs the setting and carries its
//! content; the delete form only identifies which setting to remove.

use crate::button::{Button, PostbackButton, UrlButton};
use crate::client::{response_to_result, HttpRequest, SurfTransport, Transport};
use crate::config::Config;
use crate::error::{
    Error, MissingGreetingSnafu, NoCallToActionsSnafu, RenderSnafu, TransportSnafu,
};
use crate::render::{render_all, render_with_tag, Mapping, Render};
use crate::RenderError;
use serde_json::{json, Value};
use snafu::{ensure, OptionExt, ResultExt};
use std::sync::Arc;
use surf::http::Method;
use tracing::{event, Level};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SettingType {
    Greeting,
    CallToActions,
}

impl SettingType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Greeting => "greeting",
            Self::CallToActions => "call_to_actions",
        }
    }
}

/// Which conversations a call-to-action setting applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThreadState {
    NewThread,
    ExistingThread,
}

impl ThreadState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NewThread => "new_thread",
            Self::ExistingThread => "existing_thread",
        }
    }
}

/// An entry of a call-to-action setting.
///
/// The get started button takes a bare payload; menu entries are postback or url buttons.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CallToAction {
    Payload(String),
    Button(Button),
}

impl CallToAction {
    pub fn payload(payload: impl Into<String>) -> Self {
        Self::Payload(payload.into())
    }
}

impl Render for CallToAction {
    fn render(&self) -> Result<Mapping, RenderError> {
        match self {
            Self::Payload(payload) => {
                let mut res = Mapping::new();
                res.insert("payload".to_string(), Value::from(payload.as_str()));
                Ok(res)
            }
            Self::Button(button) => button.render(),
        }
    }
}

impl From<Button> for CallToAction {
    fn from(b: Button) -> Self {
        Self::Button(b)
    }
}

impl From<PostbackButton> for CallToAction {
    fn from(b: PostbackButton) -> Self {
        Self::Button(b.into())
    }
}

impl From<UrlButton> for CallToAction {
    fn from(b: UrlButton) -> Self {
        Self::Button(b.into())
    }
}

/// A thread setting which can be installed with [ThreadSettings::apply] and removed with
/// [ThreadSettings::remove].
pub trait Setting {
    fn setting_type(&self) -> SettingType;

    fn thread_state(&self) -> Option<ThreadState> {
        None
    }

    /// The content of the post form, without the identifying fields.
    fn post_data(&self) -> Result<Mapping, RenderError>;

    fn render_post(&self) -> Result<Mapping, RenderError> {
        let data = self.post_data()?;
        Ok(render_setting(self.setting_type(), self.thread_state(), data))
    }

    fn render_delete(&self) -> Mapping {
        render_setting(self.setting_type(), self.thread_state(), Mapping::new())
    }
}

fn render_setting(kind: SettingType, state: Option<ThreadState>, data: Mapping) -> Mapping {
    let mut extra = Mapping::new();
    if let Some(state) = state {
        extra.insert("thread_state".to_string(), Value::from(state.as_str()));
    }
    extra.extend(data);
    render_with_tag("setting_type", kind.as_str(), extra)
}

fn render_call_to_actions(
    actions: &[CallToAction],
    setting: &'static str,
) -> Result<Mapping, RenderError> {
    ensure!(!actions.is_empty(), NoCallToActionsSnafu { setting });
    let mut res = Mapping::new();
    res.insert(
        "call_to_actions".to_string(),
        Value::Array(render_all(actions)?),
    );
    Ok(res)
}

/// Text shown on the welcome screen of a new conversation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GreetingText {
    pub text: Option<String>,
}

impl GreetingText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

impl Setting for GreetingText {
    fn setting_type(&self) -> SettingType {
        SettingType::Greeting
    }

    fn post_data(&self) -> Result<Mapping, RenderError> {
        let text = self
            .text
            .as_deref()
            .filter(|text| !text.is_empty())
            .context(MissingGreetingSnafu)?;
        let mut res = Mapping::new();
        res.insert("greeting".to_string(), json!({ "text": text }));
        Ok(res)
    }
}

/// The button shown on the welcome screen of a new conversation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GetStartedButton {
    pub call_to_actions: Vec<CallToAction>,
}

impl GetStartedButton {
    pub fn new(call_to_actions: Vec<CallToAction>) -> Self {
        Self { call_to_actions }
    }

    /// A get started button posting `payload` back when tapped.
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self::new(vec![CallToAction::payload(payload)])
    }
}

impl Setting for GetStartedButton {
    fn setting_type(&self) -> SettingType {
        SettingType::CallToActions
    }

    fn thread_state(&self) -> Option<ThreadState> {
        Some(ThreadState::NewThread)
    }

    fn post_data(&self) -> Result<Mapping, RenderError> {
        render_call_to_actions(&self.call_to_actions, "GetStartedButton")
    }
}

/// The menu available in existing conversations. Entries are shown in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PersistentMenu {
    pub call_to_actions: Vec<CallToAction>,
}

impl PersistentMenu {
    pub fn new(call_to_actions: Vec<CallToAction>) -> Self {
        Self { call_to_actions }
    }

    pub fn with_item(mut self, item: impl Into<CallToAction>) -> Self {
        self.call_to_actions.push(item.into());
        self
    }
}

impl Setting for PersistentMenu {
    fn setting_type(&self) -> SettingType {
        SettingType::CallToActions
    }

    fn thread_state(&self) -> Option<ThreadState> {
        Some(ThreadState::ExistingThread)
    }

    fn post_data(&self) -> Result<Mapping, RenderError> {
        render_call_to_actions(&self.call_to_actions, "PersistentMenu")
    }
}

/// Installs and removes thread settings through the thread settings endpoint.
#[derive(Clone)]
pub struct ThreadSettings {
    endpoint: String,
    transport: Arc<dyn Transport>,
}

impl ThreadSettings {
    pub fn new() -> Self {
        Self::with_transport(&Config::default(), Arc::new(SurfTransport::new()))
    }

    pub fn with_transport(config: &Config, transport: Arc<dyn Transport>) -> Self {
        Self {
            endpoint: config.thread_settings_endpoint(),
            transport,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submit an already rendered setting body using `method`.
    pub async fn send(
        &self,
        method: Method,
        body: Mapping,
        access_token: &str,
    ) -> Result<Value, Error> {
        event!(Level::DEBUG, "{} thread setting", method);
        let req = HttpRequest::new(method, self.endpoint.as_str())
            .with_query("access_token", access_token)
            .with_body(Value::Object(body));
        let res = self
            .transport
            .execute(req)
            .await
            .map_err(|error| TransportSnafu { error }.build())?;
        response_to_result(res)
    }

    /// Post the setting, failing without a request if it is incomplete.
    pub async fn apply<S: Setting + ?Sized>(
        &self,
        setting: &S,
        access_token: &str,
    ) -> Result<Value, Error> {
        let body = setting.render_post().context(RenderSnafu)?;
        self.send(Method::Post, body, access_token).await
    }

    pub async fn remove<S: Setting + ?Sized>(
        &self,
        setting: &S,
        access_token: &str,
    ) -> Result<Value, Error> {
        self.send(Method::Delete, setting.render_delete(), access_token)
            .await
    }
}

impl Default for ThreadSettings {
    fn default() -> Self {
        Self::new()
    }
}
