//! Behavioral tests for type resolution and dispatch.

use multiform::checkers::{AcceptHeader, FirstOf, QueryVersion, UrlExtension};
use multiform::testing::FakeRequest;
use multiform::{
    MimeMap, MissingMethod, NegotiateError, Negotiator, TypeResolver,
};
use std::sync::Arc;

mod common;
use common::{TestReport, negotiator};

#[tokio::test]
async fn responds_to_extension_in_the_route() {
    let response = negotiator()
        .respond(&FakeRequest::get("location.csv"), &TestReport)
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(response.body(), "expected csv response");
}

#[tokio::test]
async fn responds_to_accept_header() {
    let request = FakeRequest::get("location").accepts(&["application/json"]);

    let response = negotiator().respond(&request, &TestReport).await.unwrap();

    assert_eq!(response.body(), "expected json response");
}

#[tokio::test]
async fn responds_to_first_matching_accept_header() {
    let request = FakeRequest::get("location").accepts(&["text/csv", "text/css"]);

    let response = negotiator().respond(&request, &TestReport).await.unwrap();

    assert_eq!(response.body(), "expected csv response");
}

#[tokio::test]
async fn responds_to_a_more_obscure_accept_header() {
    let request = FakeRequest::get("location").accepts(&[
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    ]);

    let response = negotiator().respond(&request, &TestReport).await.unwrap();

    assert_eq!(response.body(), "expected xlsx response");
}

#[tokio::test]
async fn last_dot_segment_is_used_as_the_extension() {
    let response = negotiator()
        .respond(&FakeRequest::get("websites/example.com.json"), &TestReport)
        .await
        .unwrap();

    assert_eq!(response.body(), "expected json response");
}

#[tokio::test]
async fn file_extension_takes_precedence_over_accept_header() {
    let request = FakeRequest::get("location.csv").accepts(&["application/json"]);

    let response = negotiator().respond(&request, &TestReport).await.unwrap();

    assert_eq!(response.body(), "expected csv response");
}

#[tokio::test]
async fn extension_only_path_resolves() {
    let response = negotiator()
        .respond(&FakeRequest::get(".csv"), &TestReport)
        .await
        .unwrap();

    assert_eq!(response.body(), "expected csv response");
}

#[tokio::test]
async fn query_string_has_no_impact_on_the_extension() {
    // The path is already query-stripped by the host; a format-looking
    // query parameter must not influence resolution.
    let request = FakeRequest::get("location")
        .accepts(&["text/html"])
        .query("format", ".csv");

    let response = negotiator().respond(&request, &TestReport).await.unwrap();

    assert_eq!(response.body(), "expected html response");
}

#[tokio::test]
async fn overriding_a_mime_type_redirects_dispatch() {
    let negotiator = Negotiator::builder()
        .resolver(TypeResolver::first_match([Arc::new(AcceptHeader::new(
            Arc::new(MimeMap::with_overrides([("text/csv", "json")])),
        )) as _]))
        .build();

    let request = FakeRequest::get("location").accepts(&["text/csv"]);

    let response = negotiator.respond(&request, &TestReport).await.unwrap();

    assert_eq!(response.body(), "expected json response");
}

#[tokio::test]
async fn strict_dispatch_fails_on_a_missing_handler() {
    let negotiator = Negotiator::builder()
        .resolver(TypeResolver::first_match([Arc::new(UrlExtension) as _]))
        .missing_method(MissingMethod::Strict)
        .build();

    let err = negotiator
        .respond(&FakeRequest::get("location.mp3"), &TestReport)
        .await
        .unwrap_err();

    match err {
        NegotiateError::MethodNotFound { target, method } => {
            assert!(target.ends_with("TestReport"));
            assert_eq!(method, "toMp3Response");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn accumulating_axes_compose_into_one_handler_name() {
    // Content type and version are independent dimensions; together they
    // dispatch to toJsonVersion5Response.
    let negotiator = Negotiator::builder()
        .resolver(TypeResolver::accumulate([
            Arc::new(FirstOf::new([
                Arc::new(UrlExtension) as _,
                Arc::new(AcceptHeader::default()) as _,
            ])) as _,
            Arc::new(QueryVersion::new()) as _,
        ]))
        .build();

    let request = FakeRequest::get("location")
        .accepts(&["application/json"])
        .query("v", "5");

    let response = negotiator.respond(&request, &TestReport).await.unwrap();

    assert_eq!(response.body(), "expected json v5 response");
}

#[tokio::test]
async fn invalid_version_values_do_not_poison_resolution() {
    let negotiator = Negotiator::builder()
        .resolver(TypeResolver::accumulate([
            Arc::new(AcceptHeader::default()) as _,
            Arc::new(QueryVersion::new()) as _,
        ]))
        .build();

    // "!!!" has no name-safe characters: the version checker stays silent
    // and the json axis still resolves alone.
    let request = FakeRequest::get("location")
        .accepts(&["application/json"])
        .query("v", "!!!");

    let response = negotiator.respond(&request, &TestReport).await.unwrap();

    assert_eq!(response.body(), "expected json response");
}
