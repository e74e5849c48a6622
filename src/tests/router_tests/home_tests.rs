// src/tests/router_tests/home_tests.rs
use crate::router::{handle, respond};
use crate::tests::utils::{
    body_string, get, header, select_attr, select_text, test_app, StubGithub,
};
use astra::Body;
use http::{Method, Request};

#[test]
fn home_renders_every_section_in_order() {
    let app = test_app(StubGithub::ok(vec![]));

    let resp = handle(get("/"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert!(header(&resp, "Content-Type").starts_with("text/html"));

    let body = body_string(resp);
    let ids = select_attr(&body, "main > section", "id");
    assert_eq!(
        ids,
        [
            "hero",
            "about",
            "skills",
            "projects",
            "designs",
            "github",
            "ml",
            "resume",
            "testimonials",
            "contact"
        ]
    );

    // The header nav follows the page order.
    let nav: Vec<String> = select_attr(&body, ".site-header nav a", "href");
    assert_eq!(
        nav,
        [
            "#about",
            "#skills",
            "#projects",
            "#designs",
            "#github",
            "#ml",
            "#resume",
            "#testimonials",
            "#contact"
        ]
    );

    assert!(body.contains("Alex Morgan"));
    // Panels that hit GitHub are lazy placeholders on first render.
    assert_eq!(select_attr(&body, "#github-panel", "hx-trigger"), ["revealed"]);
    assert_eq!(select_attr(&body, "#github-summary", "hx-get"), ["/github/summary"]);
}

#[test]
fn home_shows_featured_projects_until_expanded() {
    let app = test_app(StubGithub::ok(vec![]));

    let body = body_string(handle(get("/"), &app).unwrap());
    assert_eq!(
        select_text(&body, ".project-card h3"),
        ["Ledgerly", "trailhead", "Harbour Maps"]
    );
    assert_eq!(select_text(&body, "#projects-body .show-more"), ["Show more"]);
    assert_eq!(
        select_attr(&body, "#projects-body .show-more", "hx-get"),
        ["/projects?expanded=true"]
    );

    let body = body_string(handle(get("/?projects=all"), &app).unwrap());
    assert_eq!(select_attr(&body, ".project-card img", "alt").len(), 5);
    assert_eq!(select_text(&body, "#projects-body .show-more"), ["Show less"]);
}

#[test]
fn projects_fragment_toggles_show_more() {
    let app = test_app(StubGithub::ok(vec![]));

    let expanded = body_string(handle(get("/projects?expanded=true"), &app).unwrap());
    assert!(!expanded.contains("<html"), "fragment should not include the layout");
    assert_eq!(
        select_text(&expanded, ".project-card h3"),
        ["Ledgerly", "trailhead", "Harbour Maps", "Pocket Pantry", "logfold"]
    );
    assert_eq!(
        select_attr(&expanded, "#projects-body .show-more", "hx-get"),
        ["/projects?expanded=false"]
    );

    let collapsed = body_string(handle(get("/projects?expanded=false"), &app).unwrap());
    assert_eq!(select_text(&collapsed, ".project-card h3").len(), 3);
}

#[test]
fn home_tech_query_filters_projects() {
    let app = test_app(StubGithub::ok(vec![]));

    let body = body_string(handle(get("/?tech=rust"), &app).unwrap());
    assert_eq!(select_text(&body, ".project-card h3"), ["trailhead", "logfold"]);
    assert_eq!(select_text(&body, ".filter.active"), ["Rust"]);
    // A technology filter already shows every match.
    assert!(select_text(&body, "#projects-body .show-more").is_empty());
}

#[test]
fn projects_fragment_filters_by_technology() {
    let app = test_app(StubGithub::ok(vec![]));

    let body = body_string(handle(get("/projects?tech=TypeScript"), &app).unwrap());
    assert_eq!(
        select_text(&body, ".project-card h3"),
        ["Ledgerly", "Harbour Maps"]
    );
    assert_eq!(
        select_text(&body, ".filters .filter"),
        ["All", "Rust", "TypeScript", "React", "Python"]
    );
    assert_eq!(
        select_attr(&body, ".filter[aria-pressed='true']", "hx-get"),
        ["/projects?tech=TypeScript"]
    );

    let body = body_string(handle(get("/projects?tech=Solidity"), &app).unwrap());
    assert!(select_text(&body, ".project-card h3").is_empty());
    assert_eq!(
        select_text(&body, ".empty-state"),
        ["No projects use this technology yet."]
    );

    let body = body_string(handle(get("/projects?tech=all"), &app).unwrap());
    assert_eq!(select_text(&body, ".project-card h3").len(), 3);
}

#[test]
fn ml_section_splits_featured_and_collapses_tags() {
    let app = test_app(StubGithub::ok(vec![]));

    let body = body_string(handle(get("/"), &app).unwrap());

    assert_eq!(
        select_text(&body, "#ml .ml-card h3"),
        ["Invoice field extraction", "Harbour traffic forecasting"]
    );
    assert_eq!(
        select_text(&body, "#ml .ml-card .accuracy"),
        ["96.4%", "91.2%"]
    );
    assert_eq!(
        select_text(&body, "#ml .ml-item h4"),
        [
            "Support ticket triage",
            "Receipt classifier",
            "Commit message linter"
        ]
    );

    // Five technologies: three shown, the rest summarised.
    assert_eq!(
        select_text(&body, "#ml .ml-item:nth-child(1) .tag"),
        ["Python", "scikit-learn", "spaCy", "+2 more"]
    );
    // Exactly three: no summary tag.
    assert!(select_text(&body, "#ml .ml-item:nth-child(2) .tag.more").is_empty());
    assert_eq!(
        select_text(&body, "#ml .ml-item:nth-child(3) .tag.more"),
        ["+1 more"]
    );
    assert_eq!(
        select_text(&body, "#ml .ml-item .accuracy"),
        ["88.7% accuracy", "93.0% accuracy", "85.1% accuracy"]
    );
}

#[test]
fn designs_fragment_expands_and_collapses() {
    let app = test_app(StubGithub::ok(vec![]));

    let collapsed = body_string(handle(get("/designs"), &app).unwrap());
    assert_eq!(select_attr(&collapsed, ".design-tile", "href").len(), 6);
    assert_eq!(
        select_attr(&collapsed, "#designs-body .btn", "hx-get"),
        ["/designs?expanded=true"]
    );

    let expanded = body_string(handle(get("/designs?expanded=true"), &app).unwrap());
    assert_eq!(select_attr(&expanded, ".design-tile", "href").len(), 8);
    assert_eq!(select_text(&expanded, "#designs-body .btn"), ["Show less"]);

    let page = body_string(handle(get("/?designs=all"), &app).unwrap());
    assert_eq!(select_attr(&page, ".design-tile", "href").len(), 8);
}

#[test]
fn testimonial_carousel_wraps_and_schedules_next_slide() {
    let app = test_app(StubGithub::ok(vec![]));

    // Index 3 of 3 wraps to the first testimonial.
    let body = body_string(handle(get("/testimonials?index=3"), &app).unwrap());
    assert_eq!(select_text(&body, "figcaption strong"), ["Priya Raman"]);
    assert_eq!(
        select_attr(&body, "#testimonial-carousel", "hx-get"),
        ["/testimonials?index=1"]
    );
    assert_eq!(
        select_attr(&body, "#testimonial-carousel", "hx-trigger"),
        ["every 6s"]
    );

    let nav = select_attr(&body, ".carousel-nav", "hx-get");
    assert_eq!(
        nav,
        [
            "/testimonials?index=2&auto=false",
            "/testimonials?index=1&auto=false"
        ]
    );

    let body = body_string(handle(get("/testimonials?index=bogus"), &app).unwrap());
    assert_eq!(select_text(&body, "figcaption strong"), ["Priya Raman"]);
}

#[test]
fn manual_carousel_navigation_stops_auto_advance() {
    let app = test_app(StubGithub::ok(vec![]));

    let first = body_string(handle(get("/testimonials?index=0"), &app).unwrap());
    let next_link = select_attr(&first, ".carousel-nav[aria-label='Next testimonial']", "hx-get");
    assert_eq!(next_link.len(), 1);

    // Follow the control the way htmx would.
    let body = body_string(handle(get(&next_link[0]), &app).unwrap());
    assert_eq!(select_text(&body, "figcaption strong"), ["Tomás Ferreira"]);
    assert!(select_attr(&body, "#testimonial-carousel", "hx-trigger").is_empty());
    assert!(select_attr(&body, "#testimonial-carousel", "hx-get").is_empty());

    // Controls are still there and keep the carousel paused.
    let dots = select_attr(&body, ".carousel-dots a", "hx-get");
    assert_eq!(dots.len(), 3);
    assert!(dots.iter().all(|url| url.ends_with("&auto=false")));

    // The no-JS fallback is manual navigation too.
    let page = body_string(handle(get("/?testimonial=2"), &app).unwrap());
    assert_eq!(select_text(&page, "figcaption strong"), ["Hannah Okafor"]);
    assert!(select_attr(&page, "#testimonial-carousel", "hx-trigger").is_empty());
}

#[test]
fn resume_redirects_to_asset() {
    let app = test_app(StubGithub::ok(vec![]));

    let resp = handle(get("/resume"), &app).unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(header(&resp, "Location"), "/static/resume.pdf");
}

#[test]
fn healthz_is_plain_text() {
    let app = test_app(StubGithub::ok(vec![]));

    let resp = handle(get("/healthz"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(header(&resp, "Content-Type").starts_with("text/plain"));
    assert_eq!(body_string(resp), "ok");
}

#[test]
fn unknown_path_is_not_found_page() {
    let app = test_app(StubGithub::ok(vec![]));

    let err = handle(get("/nope"), &app).unwrap_err();
    assert_eq!(err.status(), 404);

    let resp = respond(get("/nope"), &app);
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Error 404"));
}

#[test]
fn wrong_method_on_known_path_is_405() {
    let app = test_app(StubGithub::ok(vec![]));

    let req = Request::builder()
        .method(Method::DELETE)
        .uri("/github")
        .body(Body::empty())
        .unwrap();

    let resp = respond(req, &app);
    assert_eq!(resp.status(), 405);
}
