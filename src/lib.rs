// Copyright (c) 2022 Espresso Systems (espressosys.com)
// This file is part of the Messenger library.

// This program is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// This program is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
// You should have received a copy of the GNU General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.

//! # Client interfaces for the Messenger Platform.
//!
//! Outgoing payloads (text, attachments, templates, buttons and quick replies) and thread settings
//! (greeting text, get started button and persistent menu) are plain Rust values. Each one
//! implements [Render] (or [Setting]), which validates the required fields and produces the JSON
//! object the Graph API expects, leaving out unset optional fields. Lists keep the order in which
//! they were built, since the platform shows buttons, elements and menu items in that order.
//!
//! The senders wrap a rendered payload in a request and perform a single HTTP call:
//! [MessageSender] and [ActionSender] post to the messages endpoint, [ThreadSettings] posts or
//! deletes against the thread settings endpoint, and [UserProfiles] fetches profiles. HTTP is
//! handled by a [Transport], by default a [surf] client. A 2xx response resolves to its parsed
//! body; anything else is an [Error].
//!
//! ```no_run
//! # async fn example() -> Result<(), messenger::Error> {
//! use messenger::{Element, GenericTemplate, MessageSender, PostbackButton};
//!
//! let template = GenericTemplate::new(vec![Element::new("Classic T-Shirt")
//!     .with_button(PostbackButton::new("Buy", "BUY_CLASSIC_TSHIRT"))]);
//! MessageSender::new()
//!     .send("USER_ID", template, "PAGE_ACCESS_TOKEN")
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod attachment;
pub mod button;
pub mod client;
pub mod config;
pub mod error;
pub mod message;
pub mod quick_reply;
pub mod render;
pub mod template;
pub mod text;
pub mod thread_settings;
pub mod types;
pub mod user_profile;

pub use attachment::*;
pub use button::*;
pub use client::{HttpRequest, HttpResponse, SurfTransport, Transport};
pub use config::Config;
pub use error::*;
pub use message::*;
pub use quick_reply::*;
pub use render::{render_with_tag, Mapping, Render};
pub use template::*;
pub use text::*;
pub use thread_settings::*;
pub use types::*;
pub use user_profile::*;
