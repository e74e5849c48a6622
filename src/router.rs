use crate::app::App;
use crate::domain::{Carousel, ContactForm, ProjectFilter, ProjectView};
use crate::errors::ServerError;
use crate::github::{load_panel, load_summary};
use crate::responses::{
    error_to_response, html_response, redirect_response, static_file_response, text_response,
    ResultResp,
};
use crate::templates::pages::{home_page, HomeVm};
use crate::templates::sections::{self, ContactView};
use astra::{Request, Response};
use std::collections::HashMap;
use std::io::Read;
use std::time::Instant;

/// Upper bound on a contact form body.
const MAX_FORM_BYTES: u64 = 64 * 1024;

const KNOWN_PATHS: &[&str] = &[
    "/",
    "/projects",
    "/designs",
    "/testimonials",
    "/github",
    "/github/summary",
    "/contact",
    "/resume",
    "/healthz",
];

/// Entry point for the server: routes, turns errors into pages and logs the outcome.
pub fn respond(req: Request, app: &App) -> Response {
    let started = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    let resp = match handle(req, app) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    };

    tracing::debug!(
        %method,
        %path,
        status = resp.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request"
    );

    resp
}

pub fn handle(mut req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();
    let query = parse_query(&req);

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => home(app, &query),

        ("GET", "/projects") => {
            let view = ProjectView::new(
                ProjectFilter::from_query(query.get("tech").map(String::as_str)),
                query.get("expanded").is_some_and(|v| v == "true"),
            );
            html_response(sections::projects_body(&app.content, &view))
        }

        ("GET", "/designs") => {
            let expanded = query.get("expanded").is_some_and(|v| v == "true");
            html_response(sections::designs_body(&app.content.designs, expanded))
        }

        ("GET", "/testimonials") => {
            let testimonials = &app.content.testimonials;
            let carousel =
                Carousel::from_query(testimonials.len(), query.get("index").map(String::as_str))
                    .with_auto_query(query.get("auto").map(String::as_str));
            html_response(sections::testimonial_carousel(testimonials, carousel))
        }

        ("GET", "/github") => github_panel(app),
        ("GET", "/github/summary") => github_summary(app),

        ("POST", "/contact") => contact(&mut req, app),

        ("GET", "/resume") => redirect_response(&app.content.site.resume_url),
        ("GET", "/healthz") => text_response("ok"),

        ("GET", p) if p.starts_with("/static/") => {
            static_file_response(&app.config.static_dir, &p["/static/".len()..])
        }

        (_, p) if KNOWN_PATHS.contains(&p) => Err(ServerError::MethodNotAllowed),
        _ => Err(ServerError::NotFound),
    }
}

fn home(app: &App, query: &HashMap<String, String>) -> ResultResp {
    let content = &app.content;
    let mut vm = HomeVm::new(content);

    vm.projects = ProjectView::new(
        ProjectFilter::from_query(query.get("tech").map(String::as_str)),
        query.get("projects").is_some_and(|v| v == "all"),
    );
    vm.designs_expanded = query.get("designs").is_some_and(|v| v == "all");
    // `?testimonial=` only appears on the no-JS carousel controls.
    let picked = query.get("testimonial").map(String::as_str);
    vm.carousel = Carousel::from_query(content.testimonials.len(), picked);
    if picked.is_some() {
        vm.carousel = vm.carousel.paused();
    }

    html_response(home_page(content, &vm))
}

fn github_panel(app: &App) -> ResultResp {
    let user = &app.config.github_username;

    let markup = match load_panel(app.github.as_ref(), user, app.config.github_repo_limit) {
        Ok(data) => sections::github_panel(&data),
        Err(e) => {
            tracing::warn!(error = %e, user = %user, "github panel unavailable");
            sections::github_fallback(&app.config.github_profile_url())
        }
    };

    html_response(markup)
}

fn github_summary(app: &App) -> ResultResp {
    let user = &app.config.github_username;

    let markup = match load_summary(app.github.as_ref(), user) {
        Ok(profile) => sections::github_summary(&profile),
        Err(e) => {
            tracing::warn!(error = %e, user = %user, "github summary unavailable");
            sections::github_summary_fallback(&app.config.github_profile_url())
        }
    };

    html_response(markup)
}

/// Validate and "send" the contact form. Nothing is delivered; a valid
/// submission waits `contact_delay` and reports success.
fn contact(req: &mut Request, app: &App) -> ResultResp {
    if let Some(content_type) = req.headers().get("Content-Type") {
        let content_type = content_type.to_str().unwrap_or_default();
        if !content_type.starts_with("application/x-www-form-urlencoded") {
            return Err(ServerError::BadRequest(
                "Contact form must be form-encoded.".into(),
            ));
        }
    }

    let mut body = Vec::new();
    req.body_mut()
        .reader()
        .take(MAX_FORM_BYTES + 1)
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("Could not read form body: {e}")))?;

    if body.len() as u64 > MAX_FORM_BYTES {
        return Err(ServerError::BadRequest("Message is too large.".into()));
    }

    let form = ContactForm::from_urlencoded(&body);

    let view = match form.validate() {
        Ok(valid) => {
            if !app.config.contact_delay.is_zero() {
                std::thread::sleep(app.config.contact_delay);
            }
            tracing::info!(
                subject = %valid.subject,
                message_chars = valid.message.chars().count(),
                "contact message accepted (simulated delivery)"
            );
            ContactView::Sent { name: valid.name }
        }
        Err(errors) => {
            tracing::debug!(failed = errors.len(), "contact form rejected");
            ContactView::Invalid { form, errors }
        }
    };

    if is_htmx(req) {
        return html_response(sections::contact_form(&view));
    }

    let mut vm = HomeVm::new(&app.content);
    vm.contact = view;
    html_response(home_page(&app.content, &vm))
}

fn is_htmx(req: &Request) -> bool {
    req.headers()
        .get("HX-Request")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == "true")
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
