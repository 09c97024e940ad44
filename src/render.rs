// Copyright (c) 2022 Espresso Systems (espressosys.com)
// This file is part of the Messenger library.

// This program is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// This program is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
// You should have received a copy of the GNU General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Conversion of payload objects into the JSON objects expected by the Messenger Platform.

use crate::error::{MissingPropertySnafu, RenderError};
use serde_json::{Map, Value};
use snafu::OptionExt;

/// A JSON object, as produced by [Render::render].
pub type Mapping = Map<String, Value>;

/// Types which can produce their wire representation.
///
/// Rendering is pure: it reads the current field values, validates them, and builds a new
/// [Mapping]. Optional fields which are unset are left out of the result rather than rendered as
/// `null`. Composite types render their children in order and stop at the first child that fails.
pub trait Render {
    fn render(&self) -> Result<Mapping, RenderError>;
}

/// Build a mapping holding the discriminant `key: tag`, followed by the entries of `extra`.
pub fn render_with_tag(key: &str, tag: &str, extra: Mapping) -> Mapping {
    let mut res = Mapping::new();
    res.insert(key.to_string(), Value::from(tag));
    res.extend(extra);
    res
}

/// Render each item in order, failing on the first error.
pub(crate) fn render_all<R: Render>(items: &[R]) -> Result<Vec<Value>, RenderError> {
    items
        .iter()
        .map(|item| item.render().map(Value::Object))
        .collect()
}

/// The value of a required property, or a [RenderError::MissingProperty] naming it.
pub(crate) fn required<'a>(
    value: &'a Option<String>,
    entity: &'static str,
    property: &'static str,
) -> Result<&'a str, RenderError> {
    value
        .as_deref()
        .context(MissingPropertySnafu { entity, property })
}

/// The value of an optional property, treating the empty string as unset.
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

pub(crate) fn insert_opt(map: &mut Mapping, key: &str, value: &Option<String>) {
    if let Some(value) = present(value) {
        map.insert(key.to_string(), Value::from(value));
    }
}

/// Insert `key` holding the rendered `items`, unless there are none.
pub(crate) fn insert_list<R: Render>(
    map: &mut Mapping,
    key: &str,
    items: &[R],
) -> Result<(), RenderError> {
    if !items.is_empty() {
        map.insert(key.to_string(), Value::Array(render_all(items)?));
    }
    Ok(())
}
