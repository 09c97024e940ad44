// Copyright (c) 2022 Espresso Systems (espressosys.com)
// This file is part of the Messenger library.

// This program is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// This program is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
// You should have received a copy of the GNU General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.

#![allow(dead_code)]

use futures::future::BoxFuture;
use messenger::{Config, HttpRequest, HttpResponse, Transport};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use surf::StatusCode;

pub const GRAPH_URL: &str = "https://graph.test/v2.6";
pub const TOKEN: &str = "test-token";

enum Reply {
    Respond(u16, Value),
    Fail(&'static str),
}

/// Transport which records every request and answers with a canned reply.
pub struct MockTransport {
    reply: Reply,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn respond(status: u16, body: Value) -> Arc<Self> {
        Arc::new(Self {
            reply: Reply::Respond(status, body),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn fail(message: &'static str) -> Arc<Self> {
        Arc::new(Self {
            reply: Reply::Fail(message),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn only_request(&self) -> HttpRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}

impl Transport for MockTransport {
    fn execute(&self, request: HttpRequest) -> BoxFuture<'_, Result<HttpResponse, surf::Error>> {
        self.requests.lock().unwrap().push(request);
        let res = match &self.reply {
            Reply::Respond(status, body) => Ok(HttpResponse {
                status: *status,
                body: body.clone(),
            }),
            Reply::Fail(message) => Err(surf::Error::from_str(StatusCode::BadGateway, *message)),
        };
        Box::pin(async move { res })
    }
}

pub fn config() -> Config {
    Config::new(GRAPH_URL)
}
