use anyhow::Result;
use mockito::Matcher;
use serde_derive::Deserialize;

use super::Fetch;
use crate::domain::models::FetchError;

#[derive(Debug, PartialEq, Eq, Deserialize)]
struct Pong {
    pong: bool,
}

#[tokio::test]
async fn it_gets_json() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/ping")
        .with_status(200)
        .with_body(r#"{"pong":true}"#)
        .create();

    let res: Pong = Fetch::default()
        .get(&format!("{}/ping", server.url()))
        .await?;

    assert_eq!(res, Pong { pong: true });
    mock.assert();

    return Ok(());
}

#[tokio::test]
async fn it_posts_json_bodies() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/ping")
        .match_header("content-type", "application/json")
        .match_body(Matcher::JsonString(r#"{"message":"hi"}"#.to_string()))
        .with_status(200)
        .with_body(r#"{"pong":true}"#)
        .create();

    let res: Pong = Fetch::default()
        .post(
            &format!("{}/ping", server.url()),
            Some(r#"{"message":"hi"}"#.to_string()),
        )
        .await?;

    assert_eq!(res, Pong { pong: true });
    mock.assert();

    return Ok(());
}

#[tokio::test]
async fn it_posts_without_a_body() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/ping")
        .match_body("")
        .with_status(201)
        .with_body(r#"{"pong":false}"#)
        .create();

    let res: Pong = Fetch::default()
        .post(&format!("{}/ping", server.url()), None)
        .await?;

    assert_eq!(res, Pong { pong: false });
    mock.assert();

    return Ok(());
}

#[tokio::test]
async fn it_fails_on_non_success_status() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/ping")
        .with_status(404)
        .with_body(r#"{"detail":"Conversation not found."}"#)
        .create();

    let res = Fetch::default()
        .get::<Pong>(&format!("{}/ping", server.url()))
        .await;

    match res {
        Err(FetchError::Status { status, body, .. }) => {
            assert_eq!(status, 404);
            assert_eq!(body, r#"{"detail":"Conversation not found."}"#);
        }
        _ => panic!("expected a status error"),
    }
    mock.assert();
}

#[tokio::test]
async fn it_fails_on_malformed_json() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/ping")
        .with_status(200)
        .with_body("<html>oops</html>")
        .create();

    let res = Fetch::default()
        .get::<Pong>(&format!("{}/ping", server.url()))
        .await;

    assert!(matches!(res, Err(FetchError::Decode { .. })));
    mock.assert();
}

#[tokio::test]
async fn it_fails_on_unreachable_hosts() {
    let res = Fetch::default()
        .get::<Pong>("http://127.0.0.1:1/ping")
        .await;

    assert!(matches!(res, Err(FetchError::Transport { .. })));
}

#[tokio::test]
async fn it_rejects_relative_urls() {
    let res = Fetch::default().get::<Pong>("/chat").await;

    match res {
        Err(FetchError::InvalidUrl { url, .. }) => assert_eq!(url, "/chat"),
        _ => panic!("expected an invalid url error"),
    }
}
