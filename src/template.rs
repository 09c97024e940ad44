// Copyright (c) 2022 Espresso Systems (espressosys.com)
// This file is part of the Messenger library.

// This program is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// This program is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
// You should have received a copy of the GNU General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Structured message templates.
//!
//! A template renders as a complete message body:
//! ```json
//! { "attachment": { "type": "template", "payload": { "template_type": "...", ... } } }
//! ```
//! Quick replies attached to a template are rendered inside the template payload, after the
//! template's own content.

use crate::button::Button;
use crate::error::{NoButtonsSnafu, NoElementsSnafu};
use crate::quick_reply::QuickReply;
use crate::render::{insert_list, insert_opt, render_all, render_with_tag, required, Mapping, Render};
use crate::RenderError;
use serde_json::Value;
use snafu::ensure;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    Generic,
    Button,
}

impl TemplateKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Button => "button",
        }
    }
}

fn render_template(
    kind: TemplateKind,
    mut data: Mapping,
    quick_replies: &[QuickReply],
) -> Result<Mapping, RenderError> {
    insert_list(&mut data, "quick_replies", quick_replies)?;
    let mut attachment = Mapping::new();
    attachment.insert("type".to_string(), Value::from("template"));
    attachment.insert(
        "payload".to_string(),
        Value::Object(render_with_tag("template_type", kind.as_str(), data)),
    );

    let mut res = Mapping::new();
    res.insert("attachment".to_string(), Value::Object(attachment));
    Ok(res)
}

/// One card of a [GenericTemplate].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Element {
    pub title: Option<String>,
    pub item_url: Option<String>,
    pub image_url: Option<String>,
    pub subtitle: Option<String>,
    pub buttons: Vec<Button>,
}

impl Element {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn with_button(mut self, button: impl Into<Button>) -> Self {
        self.buttons.push(button.into());
        self
    }
}

impl Render for Element {
    fn render(&self) -> Result<Mapping, RenderError> {
        let title = required(&self.title, "GenericTemplateElement", "title")?;
        let mut res = Mapping::new();
        res.insert("title".to_string(), Value::from(title));
        insert_opt(&mut res, "item_url", &self.item_url);
        insert_opt(&mut res, "image_url", &self.image_url);
        insert_opt(&mut res, "subtitle", &self.subtitle);
        insert_list(&mut res, "buttons", &self.buttons)?;
        Ok(res)
    }
}

/// A horizontally scrolling carousel of [Element]s.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenericTemplate {
    pub elements: Vec<Element>,
    pub quick_replies: Vec<QuickReply>,
}

impl GenericTemplate {
    pub fn new(elements: Vec<Element>) -> Self {
        Self {
            elements,
            quick_replies: Vec::new(),
        }
    }

    pub fn kind(&self) -> TemplateKind {
        TemplateKind::Generic
    }
}

impl Render for GenericTemplate {
    fn render(&self) -> Result<Mapping, RenderError> {
        ensure!(!self.elements.is_empty(), NoElementsSnafu);
        let mut data = Mapping::new();
        data.insert(
            "elements".to_string(),
            Value::Array(render_all(&self.elements)?),
        );
        render_template(self.kind(), data, &self.quick_replies)
    }
}

/// Text followed by up to three buttons.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ButtonTemplate {
    pub text: Option<String>,
    pub buttons: Vec<Button>,
    pub quick_replies: Vec<QuickReply>,
}

impl ButtonTemplate {
    pub fn new(text: impl Into<String>, buttons: Vec<Button>) -> Self {
        Self {
            text: Some(text.into()),
            buttons,
            quick_replies: Vec::new(),
        }
    }

    pub fn kind(&self) -> TemplateKind {
        TemplateKind::Button
    }
}

impl Render for ButtonTemplate {
    fn render(&self) -> Result<Mapping, RenderError> {
        let text = required(&self.text, "ButtonTemplate", "text")?;
        ensure!(!self.buttons.is_empty(), NoButtonsSnafu);
        let mut data = Mapping::new();
        data.insert("text".to_string(), Value::from(text));
        data.insert(
            "buttons".to_string(),
            Value::Array(render_all(&self.buttons)?),
        );
        render_template(self.kind(), data, &self.quick_replies)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Template {
    Generic(GenericTemplate),
    Button(ButtonTemplate),
}

impl Template {
    pub fn kind(&self) -> TemplateKind {
        match self {
            Self::Generic(t) => t.kind(),
            Self::Button(t) => t.kind(),
        }
    }
}

impl Render for Template {
    fn render(&self) -> Result<Mapping, RenderError> {
        match self {
            Self::Generic(t) => t.render(),
            Self::Button(t) => t.render(),
        }
    }
}

impl From<GenericTemplate> for Template {
    fn from(t: GenericTemplate) -> Self {
        Self::Generic(t)
    }
}

impl From<ButtonTemplate> for Template {
    fn from(t: ButtonTemplate) -> Self {
        Self::Button(t)
    }
}
