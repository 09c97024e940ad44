// Copyright (c) 2022 Espresso Systems (espressosys.com)
// This file is part of the Messenger library.

// This program is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// This program is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
// You should have received a copy of the GNU General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.

use crate::render::{insert_opt, render_with_tag, required, Mapping, Render};
use crate::RenderError;
use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QuickReplyKind {
    Text,
    Location,
}

impl QuickReplyKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Location => "location",
        }
    }
}

/// A reply option shown above the composer.
///
/// Text quick replies need a `title` and a `payload`. Location quick replies ask the user to share
/// their location and need neither, but render whichever fields are set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuickReply {
    kind: QuickReplyKind,
    pub title: Option<String>,
    pub payload: Option<String>,
    pub image_url: Option<String>,
}

impl QuickReply {
    pub fn new(kind: QuickReplyKind) -> Self {
        Self {
            kind,
            title: None,
            payload: None,
            image_url: None,
        }
    }

    pub fn text(title: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            payload: Some(payload.into()),
            ..Self::new(QuickReplyKind::Text)
        }
    }

    pub fn location() -> Self {
        Self::new(QuickReplyKind::Location)
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    pub fn kind(&self) -> QuickReplyKind {
        self.kind
    }
}

impl Render for QuickReply {
    fn render(&self) -> Result<Mapping, RenderError> {
        let mut data = Mapping::new();
        if self.kind == QuickReplyKind::Text {
            let title = required(&self.title, "TextQuickReply", "title")?;
            let payload = required(&self.payload, "TextQuickReply", "payload")?;
            data.insert("title".to_string(), Value::from(title));
            data.insert("payload".to_string(), Value::from(payload));
        } else {
            insert_opt(&mut data, "title", &self.title);
            insert_opt(&mut data, "payload", &self.payload);
        }
        insert_opt(&mut data, "image_url", &self.image_url);
        Ok(render_with_tag("content_type", self.kind.as_str(), data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_quick_reply() {
        let q = QuickReply::text("test-title", "test-payload");
        assert_eq!(q.kind().as_str(), "text");
        assert_eq!(
            Value::Object(q.render().unwrap()),
            json!({ "content_type": "text", "title": "test-title", "payload": "test-payload" })
        );

        let q = q.with_image_url("url");
        assert_eq!(
            Value::Object(q.render().unwrap()),
            json!({
                "content_type": "text",
                "title": "test-title",
                "payload": "test-payload",
                "image_url": "url"
            })
        );
    }

    #[test]
    fn text_quick_reply_requires_title_and_payload() {
        let mut q = QuickReply::text("test-title", "test-payload");
        q.title = None;
        assert_eq!(
            q.render().unwrap_err().to_string(),
            "TextQuickReply title property cannot be null or undefined."
        );

        let mut q = QuickReply::text("test-title", "test-payload");
        q.payload = None;
        assert_eq!(
            q.render().unwrap_err().to_string(),
            "TextQuickReply payload property cannot be null or undefined."
        );

        // Required properties are only checked for presence.
        let q = QuickReply::text("", "test-payload");
        assert_eq!(
            Value::Object(q.render().unwrap()),
            json!({ "content_type": "text", "title": "", "payload": "test-payload" })
        );
    }

    #[test]
    fn location_quick_reply_has_no_required_fields() {
        let mut q = QuickReply::location();
        assert_eq!(
            Value::Object(q.render().unwrap()),
            json!({ "content_type": "location" })
        );

        q.title = Some("test-title".into());
        assert_eq!(
            Value::Object(q.render().unwrap()),
            json!({ "content_type": "location", "title": "test-title" })
        );
    }
}
