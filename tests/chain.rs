use std::sync::{Arc, Mutex};
use std::time::Duration;

use http::{HeaderName, HeaderValue, StatusCode};
use httpmock::MockServer;
use httpx::http_client::reqwest::ReqwestHttpClient;
use httpx::{do_request, do_request_with_context, Client, ClientExt, Context, ErrorKind, Result};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::common::init_tracing;

mod common;

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
struct MyType {
    foo: String,
    bar: String,
}

fn post_value<C: Client>(client: C, address: &str, body: MyType) -> Result<()> {
    let client = client
        .with_json_body(body)
        .with_header(
            HeaderName::from_static("x-custom-header"),
            HeaderValue::from_static("my-header"),
        );
    do_request(&client, "POST", address, None)?;
    Ok(())
}

fn get_value<C: Client>(client: C, address: &str) -> Result<MyType> {
    let value = Arc::new(Mutex::new(MyType::default()));
    let client = client.decode_json(Arc::clone(&value));
    let response = do_request(&client, "GET", address, None)?;
    if let Some(body) = response.into_body() {
        body.close();
    }

    let value = std::mem::take(&mut *value.lock().unwrap());
    Ok(value)
}

fn common_client(ctx: Context) -> impl Client + Send + Sync {
    ReqwestHttpClient::default()
        .check_status(StatusCode::OK)
        .check_header_error()
        .check_body()
        .with_context(ctx)
}

#[test]
fn post_then_get() {
    init_tracing();
    let server = MockServer::start();
    let post = server.mock(|when, then| {
        when.method(httpmock::Method::POST)
            .path("/my/api")
            .header("x-custom-header", "my-header")
            .header("content-type", "application/json")
            .json_body(json!({"foo": "bar", "bar": ""}));
        then.status(200).body("created");
    });
    let get = server.mock(|when, then| {
        when.method(httpmock::Method::GET)
            .path("/my/api")
            .query_param("foo", "bar");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({"foo": "bar", "bar": "baz"}));
    });

    let (ctx, _cancel) = Context::background().with_timeout(Duration::from_secs(60));
    let client = common_client(ctx);

    post_value(
        &client,
        &server.url("/my/api"),
        MyType {
            foo: String::from("bar"),
            ..MyType::default()
        },
    )
    .unwrap();
    let value = get_value(&client, &server.url("/my/api?foo=bar")).unwrap();

    post.assert();
    get.assert();
    assert_eq!(
        MyType {
            foo: String::from("bar"),
            bar: String::from("baz")
        },
        value
    );
}

#[test]
fn status_mismatch_keeps_the_response() {
    init_tracing();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.path("/missing");
        then.status(404).body("no such thing");
    });

    let client = common_client(Context::background());
    let err = do_request(&client, "GET", &server.url("/missing"), None).unwrap_err();

    assert!(err.is_validation());
    match err.kind() {
        ErrorKind::UnexpectedStatus { expected, actual } => {
            assert_eq!(StatusCode::OK, *expected);
            assert_eq!(StatusCode::NOT_FOUND, *actual);
        }
        kind => panic!("unexpected error: {kind:?}"),
    }
    let body = err.into_response().unwrap().into_body().unwrap();
    assert_eq!("no such thing", body.into_string().unwrap());
}

#[test]
fn errors_header_fails_a_successful_response() {
    init_tracing();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.path("/flaky");
        then.status(200).header("ERRORS", "backend unavailable").body("{}");
    });

    let client = common_client(Context::background());
    let err = do_request(&client, "GET", &server.url("/flaky"), None).unwrap_err();

    assert!(matches!(
        err.kind(),
        ErrorKind::HeaderError { value, .. } if value == "backend unavailable"
    ));
}

#[test]
fn cancelled_chain_never_hits_the_server() {
    init_tracing();
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.path("/my/api");
        then.status(200).body("{}");
    });

    let (ctx, cancel) = Context::background().with_cancel();
    let client = common_client(ctx);
    cancel.cancel();

    let err = do_request(&client, "GET", &server.url("/my/api"), None).unwrap_err();

    assert!(err.is_cancelled());
    assert_eq!(0, mock.hits());
}

#[test]
fn caller_context_is_used_without_substitution() {
    init_tracing();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.path("/slow");
        then.status(200).delay(Duration::from_secs(2)).body("late");
    });

    let client = ReqwestHttpClient::default().check_status(StatusCode::OK);
    let (ctx, _cancel) = Context::background().with_timeout(Duration::from_millis(200));

    let err = do_request_with_context(ctx, &client, "GET", &server.url("/slow"), None).unwrap_err();

    assert!(err.is_deadline_exceeded());
    assert!(err.response().is_none());
}
