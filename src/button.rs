// Copyright (c) 2022 Espresso Systems (espressosys.com)
// This file is part of the Messenger library.

// This program is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// This program is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
// You should have received a copy of the GNU General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Buttons attached to templates and menus.

use crate::render::{insert_opt, render_with_tag, required, Mapping, Render};
use crate::RenderError;
use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ButtonKind {
    Postback,
    WebUrl,
    PhoneNumber,
    ElementShare,
}

impl ButtonKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Postback => "postback",
            Self::WebUrl => "web_url",
            Self::PhoneNumber => "phone_number",
            Self::ElementShare => "element_share",
        }
    }
}

/// Height of the webview opened by a [UrlButton].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WebviewHeightRatio {
    Compact,
    Tall,
    Full,
}

impl WebviewHeightRatio {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Tall => "tall",
            Self::Full => "full",
        }
    }
}

fn render_titled(
    kind: ButtonKind,
    entity: &'static str,
    title: &Option<String>,
    mut data: Mapping,
) -> Result<Mapping, RenderError> {
    let title = required(title, entity, "title")?;
    data.insert("title".to_string(), Value::from(title));
    Ok(render_with_tag("type", kind.as_str(), data))
}

/// Sends `payload` back to the webhook when tapped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostbackButton {
    pub title: Option<String>,
    pub payload: Option<String>,
}

impl PostbackButton {
    pub fn new(title: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            payload: Some(payload.into()),
        }
    }

    pub fn kind(&self) -> ButtonKind {
        ButtonKind::Postback
    }
}

impl Render for PostbackButton {
    fn render(&self) -> Result<Mapping, RenderError> {
        let mut data = Mapping::new();
        let payload = required(&self.payload, "PostbackButton", "payload")?;
        data.insert("payload".to_string(), Value::from(payload));
        render_titled(self.kind(), "PostbackButton", &self.title, data)
    }
}

/// Opens `url` in a webview.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UrlButton {
    pub title: Option<String>,
    pub url: Option<String>,
    pub webview_height_ratio: Option<WebviewHeightRatio>,
    pub messenger_extensions: bool,
    pub fallback_url: Option<String>,
}

impl UrlButton {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            url: Some(url.into()),
            ..Self::default()
        }
    }

    pub fn kind(&self) -> ButtonKind {
        ButtonKind::WebUrl
    }
}

impl Render for UrlButton {
    fn render(&self) -> Result<Mapping, RenderError> {
        let mut data = Mapping::new();
        let url = required(&self.url, "UrlButton", "url")?;
        data.insert("url".to_string(), Value::from(url));
        if let Some(ratio) = self.webview_height_ratio {
            data.insert("webview_height_ratio".to_string(), Value::from(ratio.as_str()));
        }
        if self.messenger_extensions {
            data.insert("messenger_extensions".to_string(), Value::Bool(true));
        }
        insert_opt(&mut data, "fallback_url", &self.fallback_url);
        render_titled(self.kind(), "UrlButton", &self.title, data)
    }
}

/// Dials the phone number held in `payload`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CallButton {
    pub title: Option<String>,
    pub payload: Option<String>,
}

impl CallButton {
    pub fn new(title: impl Into<String>, phone_number: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            payload: Some(phone_number.into()),
        }
    }

    pub fn kind(&self) -> ButtonKind {
        ButtonKind::PhoneNumber
    }
}

impl Render for CallButton {
    fn render(&self) -> Result<Mapping, RenderError> {
        let mut data = Mapping::new();
        let payload = required(&self.payload, "CallButton", "payload")?;
        data.insert("payload".to_string(), Value::from(payload));
        render_titled(self.kind(), "CallButton", &self.title, data)
    }
}

/// Shares the enclosing template element. Has no title.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShareButton;

impl ShareButton {
    pub fn kind(&self) -> ButtonKind {
        ButtonKind::ElementShare
    }
}

impl Render for ShareButton {
    fn render(&self) -> Result<Mapping, RenderError> {
        Ok(render_with_tag("type", self.kind().as_str(), Mapping::new()))
    }
}

/// Any of the button types, for use in heterogeneous lists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Button {
    Postback(PostbackButton),
    Url(UrlButton),
    Call(CallButton),
    Share(ShareButton),
}

impl Button {
    pub fn kind(&self) -> ButtonKind {
        match self {
            Self::Postback(b) => b.kind(),
            Self::Url(b) => b.kind(),
            Self::Call(b) => b.kind(),
            Self::Share(b) => b.kind(),
        }
    }
}

impl Render for Button {
    fn render(&self) -> Result<Mapping, RenderError> {
        match self {
            Self::Postback(b) => b.render(),
            Self::Url(b) => b.render(),
            Self::Call(b) => b.render(),
            Self::Share(b) => b.render(),
        }
    }
}

impl From<PostbackButton> for Button {
    fn from(b: PostbackButton) -> Self {
        Self::Postback(b)
    }
}

impl From<UrlButton> for Button {
    fn from(b: UrlButton) -> Self {
        Self::Url(b)
    }
}

impl From<CallButton> for Button {
    fn from(b: CallButton) -> Self {
        Self::Call(b)
    }
}

impl From<ShareButton> for Button {
    fn from(b: ShareButton) -> Self {
        Self::Share(b)
    }
}
