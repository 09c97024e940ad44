// Copyright (c) 2022 Espresso Systems (espressosys.com)
// This file is part of the Messenger library.

// This program is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// This program is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
// You should have received a copy of the GNU General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.

use crate::quick_reply::QuickReply;
use crate::render::{insert_list, required, Mapping, Render};
use crate::RenderError;
use serde_json::Value;

/// A plain text message, optionally offering quick replies.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Text {
    pub text: Option<String>,
    pub quick_replies: Vec<QuickReply>,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            quick_replies: Vec::new(),
        }
    }

    pub fn with_quick_reply(mut self, reply: QuickReply) -> Self {
        self.quick_replies.push(reply);
        self
    }
}

impl Render for Text {
    fn render(&self) -> Result<Mapping, RenderError> {
        let text = required(&self.text, "Text", "text")?;
        let mut res = Mapping::new();
        res.insert("text".to_string(), Value::from(text));
        insert_list(&mut res, "quick_replies", &self.quick_replies)?;
        Ok(res)
    }
}
