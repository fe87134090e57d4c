use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::{body_json, spawn_app};

fn queued() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "messageId": "msg_wl",
        "status": "pending"
    }))
}

#[tokio::test]
async fn test_non_whitelisted_recipients_are_redirected_before_dispatch() {
    let app = spawn_app(vec![
        "allowed@example.com".into(),
        "*@company.com".into(),
        "user+newsletter@test.com".into(),
    ])
    .await;

    Mock::given(path("/send"))
        .and(method("POST"))
        .respond_with(queued())
        .expect(1)
        .mount(&app.email_server)
        .await;

    app.client
        .email()
        .from("noreply@internal.example")
        .to("blocked@example.com")
        .cc("ADMIN@COMPANY.COM")
        .bcc("user+anything@test.com")
        .subject("Deploy finished")
        .text("All green.")
        .send()
        .await
        .expect("The send call failed");

    let received = &app.email_server.received_requests().await.unwrap()[0];
    let body = body_json(received);
    // The blocked address was replaced at the moment it was added
    assert_eq!(body["to"], serde_json::json!(["ok@testing.lettermint.co"]));
    // A domain wildcard match passes with its original casing
    assert_eq!(body["cc"], serde_json::json!(["ADMIN@COMPANY.COM"]));
    // A plus-tag folds to the configured base address
    assert_eq!(body["bcc"], serde_json::json!(["user+anything@test.com"]));
    // The sender is exempt from filtering
    assert_eq!(body["from"], "noreply@internal.example");
}

#[tokio::test]
async fn test_an_empty_whitelist_leaves_recipients_untouched() {
    let app = spawn_app(vec![]).await;

    assert!(!app.client.whitelist().is_enabled());

    Mock::given(path("/send"))
        .respond_with(queued())
        .expect(1)
        .mount(&app.email_server)
        .await;

    app.client
        .email()
        .from("noreply@acme.dev")
        .to("anyone@anywhere.com")
        .subject("Hi")
        .text("no filtering in production")
        .send()
        .await
        .expect("The send call failed");

    let received = &app.email_server.received_requests().await.unwrap()[0];
    let body = body_json(received);
    assert_eq!(body["to"], serde_json::json!(["anyone@anywhere.com"]));
}

#[tokio::test]
async fn test_every_recipient_in_a_batch_is_filtered() {
    let app = spawn_app(vec!["*@company.com".into()]).await;

    Mock::given(path("/send/batch"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "messageId": "msg_1", "status": "pending" },
            { "messageId": "msg_2", "status": "pending" }
        ])))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let inside = app
        .client
        .email()
        .from("noreply@company.com")
        .to("dev@company.com")
        .subject("Inside")
        .text("stays")
        .build();
    let outside = app
        .client
        .email()
        .from("noreply@company.com")
        .to("friend@gmail.com")
        .subject("Outside")
        .text("redirected")
        .build();

    app.client
        .send_batch(&[inside, outside])
        .await
        .expect("The batch call failed");

    let received = &app.email_server.received_requests().await.unwrap()[0];
    let body = body_json(received);
    assert_eq!(body[0]["to"], serde_json::json!(["dev@company.com"]));
    assert_eq!(body[1]["to"], serde_json::json!(["ok@testing.lettermint.co"]));
}
