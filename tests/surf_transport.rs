// Copyright (c) 2022 Espresso Systems (espressosys.com)
// This file is part of the Messenger library.

// This program is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// This program is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
// You should have received a copy of the GNU General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.

use async_std::task;
use messenger::{
    Config, GreetingText, HttpRequest, MessageSender, SurfTransport, ThreadSettings, Transport,
    UserProfiles,
};
use serde_json::{json, Value};
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;
use surf::http::Method;
use tide::{Request, Response};

fn free_port() -> u16 {
    TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}

fn access_token<S>(req: &Request<S>) -> Option<String> {
    req.url()
        .query_pairs()
        .find(|(k, _)| k == "access_token")
        .map(|(_, v)| v.into_owned())
}

async fn messages(mut req: Request<()>) -> tide::Result {
    let body: Value = req.body_json().await?;
    if body["message"]["text"] == "fail" {
        return Ok(Response::builder(400)
            .body(json!({ "msg": "fail" }))
            .build());
    }
    Ok(Response::builder(200)
        .body(json!({ "received": body, "access_token": access_token(&req) }))
        .build())
}

async fn post_setting(mut req: Request<()>) -> tide::Result {
    let body: Value = req.body_json().await?;
    Ok(Response::builder(200)
        .body(json!({ "method": "POST", "received": body }))
        .build())
}

async fn delete_setting(mut req: Request<()>) -> tide::Result {
    let body: Value = req.body_json().await?;
    Ok(Response::builder(200)
        .body(json!({ "method": "DELETE", "received": body }))
        .build())
}

async fn profile(req: Request<()>) -> tide::Result {
    let user_id = req.param("user_id")?.to_string();
    Ok(Response::builder(200)
        .body(json!({ "id": user_id, "access_token": access_token(&req) }))
        .build())
}

async fn plain(_: Request<()>) -> tide::Result {
    Ok(Response::builder(502).body("Bad Gateway").build())
}

/// A stand-in for the Graph API which echoes what it receives.
async fn start_server() -> Config {
    let port = free_port();
    let mut app = tide::new();
    app.at("/v2.6/me/messages").post(messages);
    app.at("/v2.6/me/thread_settings")
        .post(post_setting)
        .delete(delete_setting);
    app.at("/v2.6/plain").get(plain);
    app.at("/v2.6/:user_id").get(profile);

    task::spawn(app.listen(format!("127.0.0.1:{}", port)));
    // Wait for the listener to come up.
    let url = format!("http://127.0.0.1:{}", port);
    for _ in 0..50 {
        if surf::get(format!("{}/v2.6/probe", url)).await.is_ok() {
            break;
        }
        task::sleep(Duration::from_millis(20)).await;
    }
    Config::new(format!("{}/v2.6", url))
}

#[async_std::test]
async fn end_to_end() {
    let cfg = start_server().await;
    let transport = Arc::new(SurfTransport::new());

    let sender = MessageSender::with_transport(&cfg, transport.clone());
    let res = sender.send("R", "hi", "secret").await.unwrap();
    assert_eq!(
        res,
        json!({
            "received": { "recipient": { "id": "R" }, "message": { "text": "hi" } },
            "access_token": "secret"
        })
    );

    let err = sender.send("R", "fail", "secret").await.unwrap_err();
    assert_eq!(err.status(), Some(400));
    assert_eq!(err.to_string(), r#"Unexpected statusCode: 400 - {"msg":"fail"}"#);

    let settings = ThreadSettings::with_transport(&cfg, transport.clone());
    let res = settings
        .apply(&GreetingText::new("Hello!"), "secret")
        .await
        .unwrap();
    assert_eq!(res["method"], "POST");
    assert_eq!(res["received"]["greeting"]["text"], "Hello!");
    let res = settings
        .remove(&GreetingText::default(), "secret")
        .await
        .unwrap();
    assert_eq!(
        res,
        json!({ "method": "DELETE", "received": { "setting_type": "greeting" } })
    );

    let profiles = UserProfiles::with_transport(&cfg, transport.clone());
    let res = profiles.get_profile("1234", "secret").await.unwrap();
    assert_eq!(res, json!({ "id": "1234", "access_token": "secret" }));

    // Text that is not JSON is kept as a string.
    let res = transport
        .execute(HttpRequest::new(
            Method::Get,
            format!("{}/plain", cfg.graph_url),
        ))
        .await
        .unwrap();
    assert_eq!(res.status, 502);
    assert_eq!(res.body, json!("Bad Gateway"));
}

#[async_std::test]
async fn connection_failure_is_a_transport_error() {
    let cfg = Config::new(format!("http://127.0.0.1:{}/v2.6", free_port()));
    let sender = MessageSender::with_transport(&cfg, Arc::new(SurfTransport::new()));
    let err = sender.send("R", "hi", "secret").await.unwrap_err();
    assert!(matches!(err, messenger::Error::Transport { .. }));
}
