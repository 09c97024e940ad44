// Copyright (c) 2022 Espresso Systems (espressosys.com)
// This file is part of the Messenger library.

// This program is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// This program is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
// You should have received a copy of the GNU General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.

mod common;

use common::{config, MockTransport, GRAPH_URL, TOKEN};
use messenger::{
    CallToAction, Error, GetStartedButton, GreetingText, PersistentMenu, PostbackButton,
    ThreadSettings, UrlButton,
};
use serde_json::json;
use surf::http::Method;

#[test]
fn default_endpoint() {
    let settings =
        ThreadSettings::with_transport(&Default::default(), MockTransport::respond(200, json!({})));
    assert_eq!(
        settings.endpoint(),
        "https://graph.facebook.com/v2.6/me/thread_settings"
    );
}

#[async_std::test]
async fn apply_posts_the_rendered_setting() {
    let transport = MockTransport::respond(200, json!({ "result": "Successfully updated greeting" }));
    let settings = ThreadSettings::with_transport(&config(), transport.clone());

    let res = settings
        .apply(&GreetingText::new("Hello!"), TOKEN)
        .await
        .unwrap();
    assert_eq!(res, json!({ "result": "Successfully updated greeting" }));

    let req = transport.only_request();
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.url, format!("{}/me/thread_settings", GRAPH_URL));
    assert_eq!(req.query_param("access_token"), Some(TOKEN));
    assert_eq!(
        req.body,
        Some(json!({ "setting_type": "greeting", "greeting": { "text": "Hello!" } }))
    );
}

#[async_std::test]
async fn remove_deletes_the_setting() {
    let transport = MockTransport::respond(200, json!({ "result": "Successfully deleted" }));
    let settings = ThreadSettings::with_transport(&config(), transport.clone());

    settings
        .remove(&GetStartedButton::with_payload("GET_STARTED"), TOKEN)
        .await
        .unwrap();

    let req = transport.only_request();
    assert_eq!(req.method, Method::Delete);
    assert_eq!(
        req.body,
        Some(json!({ "setting_type": "call_to_actions", "thread_state": "new_thread" }))
    );
}

#[async_std::test]
async fn incomplete_setting_is_not_applied() {
    let transport = MockTransport::respond(200, json!({}));
    let settings = ThreadSettings::with_transport(&config(), transport.clone());

    let err = settings
        .apply(&PersistentMenu::default(), TOKEN)
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "one or more cta's are required to post PersistentMenu."
    );
    assert!(transport.requests().is_empty());

    // Removal needs no content.
    settings
        .remove(&GreetingText::default(), TOKEN)
        .await
        .unwrap();
    assert_eq!(
        transport.only_request().body,
        Some(json!({ "setting_type": "greeting" }))
    );
}

#[async_std::test]
async fn send_uses_the_given_method() {
    let transport = MockTransport::respond(204, json!(null));
    let settings = ThreadSettings::with_transport(&config(), transport.clone());
    let menu = PersistentMenu::new(vec![
        CallToAction::from(PostbackButton::new("Help", "HELP")),
        CallToAction::from(UrlButton::new("Site", "https://example.com")),
    ]);
    use messenger::Setting;

    let res = settings
        .send(Method::Post, menu.render_post().unwrap(), TOKEN)
        .await
        .unwrap();
    assert_eq!(res, json!(null));
    let req = transport.only_request();
    assert_eq!(req.method, Method::Post);
    assert_eq!(
        req.body.unwrap()["call_to_actions"],
        json!([
            { "type": "postback", "title": "Help", "payload": "HELP" },
            { "type": "web_url", "title": "Site", "url": "https://example.com" }
        ])
    );
}

#[async_std::test]
async fn failures_are_reported() {
    let settings = ThreadSettings::with_transport(&config(), MockTransport::fail("timed out"));
    let err = settings
        .apply(&GreetingText::new("Hello!"), TOKEN)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Transport { .. }));
    assert_eq!(err.to_string(), "timed out");

    let settings = ThreadSettings::with_transport(
        &config(),
        MockTransport::respond(500, json!({ "msg": "fail" })),
    );
    let err = settings
        .remove(&GreetingText::default(), TOKEN)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), r#"Unexpected statusCode: 500 - {"msg":"fail"}"#);
}
