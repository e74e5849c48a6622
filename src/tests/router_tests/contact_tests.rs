// src/tests/router_tests/contact_tests.rs
use crate::router::{handle, respond};
use crate::tests::utils::{
    body_string, post_form, select_attr, select_text, test_app, StubGithub,
};

#[test]
fn missing_required_fields_render_inline_errors() {
    let app = test_app(StubGithub::ok(vec![]));

    let req = post_form("/contact", "name=&email=&subject=Hello&message=", true);
    let resp = handle(req, &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert_eq!(
        select_attr(&body, ".field-error", "data-field"),
        ["name", "email", "message"]
    );
    assert_eq!(select_attr(&body, "#subject", "value"), ["Hello"]);
    assert_eq!(
        select_text(&body, ".alert-error"),
        ["Please fix the highlighted fields and try again."]
    );
    assert!(!body.contains("<html"), "htmx gets only the form fragment");
}

#[test]
fn malformed_email_is_rejected_and_values_kept() {
    let app = test_app(StubGithub::ok(vec![]));

    let req = post_form(
        "/contact",
        "name=Ada&email=ada%40example&message=Hello+there",
        true,
    );
    let body = body_string(handle(req, &app).unwrap());

    assert_eq!(
        select_text(&body, ".field-error"),
        ["Please enter a valid email address."]
    );
    assert_eq!(select_attr(&body, "#email", "aria-invalid"), ["true"]);
    assert_eq!(select_attr(&body, "#name", "value"), ["Ada"]);
    assert_eq!(select_text(&body, "#message"), ["Hello there"]);
}

#[test]
fn valid_submission_shows_success_and_clears_form() {
    let app = test_app(StubGithub::ok(vec![]));

    let req = post_form(
        "/contact",
        "name=Ada+Lovelace&email=ada%40example.com&subject=&message=Let%27s+talk",
        true,
    );
    let body = body_string(handle(req, &app).unwrap());

    let success = select_text(&body, ".alert-success");
    assert_eq!(success.len(), 1);
    assert!(success[0].starts_with("Thanks, Ada Lovelace!"));
    assert!(select_attr(&body, ".field-error", "data-field").is_empty());
    assert_eq!(select_attr(&body, "#name", "value"), [""]);
    assert_eq!(select_attr(&body, "#email", "value"), [""]);
    assert_eq!(select_text(&body, "#message"), [""]);
}

#[test]
fn plain_form_post_gets_full_page() {
    let app = test_app(StubGithub::ok(vec![]));

    let req = post_form(
        "/contact",
        "name=Ada&email=ada%40example.com&message=Hi",
        false,
    );
    let body = body_string(handle(req, &app).unwrap());

    assert!(body.contains("<html"));
    assert_eq!(select_attr(&body, "main > section", "id").len(), 9);
    assert_eq!(select_text(&body, "#contact .alert-success").len(), 1);
}

#[test]
fn non_form_content_type_is_bad_request() {
    let app = test_app(StubGithub::ok(vec![]));

    let req = http::Request::builder()
        .method(http::Method::POST)
        .uri("/contact")
        .header("Content-Type", "application/json")
        .body(astra::Body::from(r#"{"name":"Ada"}"#))
        .unwrap();

    let resp = respond(req, &app);
    assert_eq!(resp.status(), 400);
}

#[test]
fn oversized_body_is_bad_request() {
    let app = test_app(StubGithub::ok(vec![]));

    let message = "x".repeat(70 * 1024);
    let req = post_form(
        "/contact",
        &format!("name=Ada&email=ada%40example.com&message={message}"),
        true,
    );

    let err = handle(req, &app).unwrap_err();
    assert_eq!(err.status(), 400);
}
