// Copyright (c) 2022 Espresso Systems (espressosys.com)
// This file is part of the Messenger library.

// This program is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// This program is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
// You should have received a copy of the GNU General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.

use crate::error::{ReusableAttachmentIdSnafu, UrlWithAttachmentIdSnafu};
use crate::render::{insert_opt, present, render_with_tag, Mapping, Render};
use crate::RenderError;
use serde_json::Value;
use snafu::ensure;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AttachmentKind {
    Image,
    Audio,
    Video,
    File,
}

impl AttachmentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Audio => "audio",
            Self::Video => "video",
            Self::File => "file",
        }
    }
}

/// A media attachment, referenced either by `url` or by the `attachment_id` of a previously
/// uploaded reusable asset.
///
/// Setting `is_reusable` on a url attachment asks the platform to keep the asset for later reuse;
/// it cannot be combined with `attachment_id`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attachment {
    kind: AttachmentKind,
    pub url: Option<String>,
    pub attachment_id: Option<String>,
    pub is_reusable: bool,
}

impl Attachment {
    pub fn new(kind: AttachmentKind) -> Self {
        Self {
            kind,
            url: None,
            attachment_id: None,
            is_reusable: false,
        }
    }

    pub fn image(url: impl Into<String>) -> Self {
        Self::new(AttachmentKind::Image).with_url(url)
    }

    pub fn audio(url: impl Into<String>) -> Self {
        Self::new(AttachmentKind::Audio).with_url(url)
    }

    pub fn video(url: impl Into<String>) -> Self {
        Self::new(AttachmentKind::Video).with_url(url)
    }

    pub fn file(url: impl Into<String>) -> Self {
        Self::new(AttachmentKind::File).with_url(url)
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_attachment_id(mut self, id: impl Into<String>) -> Self {
        self.attachment_id = Some(id.into());
        self
    }

    pub fn reusable(mut self) -> Self {
        self.is_reusable = true;
        self
    }

    pub fn kind(&self) -> AttachmentKind {
        self.kind
    }
}

impl Render for Attachment {
    fn render(&self) -> Result<Mapping, RenderError> {
        ensure!(
            !(present(&self.url).is_some() && present(&self.attachment_id).is_some()),
            UrlWithAttachmentIdSnafu
        );
        ensure!(
            !(present(&self.attachment_id).is_some() && self.is_reusable),
            ReusableAttachmentIdSnafu
        );

        let mut payload = Mapping::new();
        insert_opt(&mut payload, "url", &self.url);
        insert_opt(&mut payload, "attachment_id", &self.attachment_id);
        if self.is_reusable {
            payload.insert("is_reusable".to_string(), Value::Bool(true));
        }

        let mut data = Mapping::new();
        data.insert("payload".to_string(), Value::Object(payload));
        let mut res = Mapping::new();
        res.insert(
            "attachment".to_string(),
            Value::Object(render_with_tag("type", self.kind.as_str(), data)),
        );
        Ok(res)
    }
}
