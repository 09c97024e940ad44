// Copyright (c) 2022 Espresso Systems (espressosys.com)
// This file is part of the Messenger library.

// This program is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// This program is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
// You should have received a copy of the GNU General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.

use crate::error::{Error, UnexpectedStatusSnafu};
use futures::future::BoxFuture;
use serde_json::Value;
use surf::http::Method;
use surf::{middleware::Next, Client, Request, Response, StatusCode, Url};
use tracing::{event, Level};

/// A request to one of the Graph API endpoints.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl HttpRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Look up the first query parameter named `key`.
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// The status and parsed body of a response.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Value,
}

/// An HTTP client capable of executing [HttpRequest]s.
///
/// Every sender in this crate performs exactly one call to [Transport::execute] per operation.
/// Timeouts and cancellation belong to the implementation. A failure to produce a response at all
/// is reported as a [surf::Error], which the senders pass on unchanged in
/// [Error::Transport](crate::Error::Transport).
pub trait Transport: Send + Sync {
    fn execute(&self, request: HttpRequest) -> BoxFuture<'_, Result<HttpResponse, surf::Error>>;
}

/// [Transport] backed by a [surf::Client].
#[derive(Clone, Debug)]
pub struct SurfTransport {
    client: Client,
}

impl SurfTransport {
    /// A transport using a default client with the [trace] middleware attached.
    pub fn new() -> Self {
        Self::from_client(Client::new().with(trace))
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for SurfTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for SurfTransport {
    fn execute(&self, request: HttpRequest) -> BoxFuture<'_, Result<HttpResponse, surf::Error>> {
        Box::pin(async move {
            let mut url = Url::parse(&request.url)
                .map_err(|err| surf::Error::new(StatusCode::BadRequest, err))?;
            for (key, value) in &request.query {
                url.query_pairs_mut().append_pair(key, value);
            }
            let mut req = Request::new(request.method, url);
            if let Some(body) = &request.body {
                req.set_body(surf::Body::from_json(body)?);
            }
            let mut res = self.client.send(req).await?;
            let status = u16::from(res.status());
            let body = response_body(&mut res).await?;
            Ok(HttpResponse { status, body })
        })
    }
}

/// Read the body of a response as JSON.
///
/// The Graph API answers with JSON, but intermediaries may not: an empty body is read as `null`
/// and any other text which is not valid JSON is kept as a JSON string.
pub async fn response_body(res: &mut Response) -> Result<Value, surf::Error> {
    let text = res.body_string().await?;
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(&text).unwrap_or(Value::String(text)))
}

/// Map a response to the result of an operation.
///
/// Any 2xx status yields the body. Every other status becomes an
/// [Error::UnexpectedStatus] carrying the status and the body.
pub fn response_to_result(res: HttpResponse) -> Result<Value, Error> {
    if (200..300).contains(&res.status) {
        Ok(res.body)
    } else {
        event!(
            Level::WARN,
            "request rejected {{status: {}, body: {}}}",
            res.status,
            res.body
        );
        UnexpectedStatusSnafu {
            status: res.status,
            body: res.body,
        }
        .fail()
    }
}

/// Client middleware which logs requests and responses.
///
/// Only the path of the request URL is logged, since the query string carries the access token.
pub fn trace(req: Request, client: Client, next: Next<'_>) -> BoxFuture<surf::Result<Response>> {
    let method = req.method();
    let path = req.url().path().to_string();
    Box::pin(async move {
        event!(
            Level::DEBUG,
            "--> sending request {{method: {}, path: {}}}",
            method,
            path
        );
        let res = next.run(req, client).await;
        match &res {
            Ok(res) => event!(
                Level::DEBUG,
                "<-- received response {{path: {}, status: {}}}",
                path,
                res.status()
            ),
            Err(err) => event!(
                Level::WARN,
                "<-- request failed {{path: {}, error: {}}}",
                path,
                err
            ),
        }
        res
    })
}
