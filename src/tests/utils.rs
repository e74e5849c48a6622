use crate::app::App;
use crate::config::Config;
use crate::content::Content;
use crate::github::{GithubError, GithubSource, Profile, Repo};
use astra::{Body, Request, Response};
use chrono::{TimeZone, Utc};
use std::collections::HashMap;
use std::io::Read;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Canned GitHub responses. `repo_calls` is shared so tests can inspect it
/// after the stub has been moved into the app.
pub struct StubGithub {
    pub fail_with: Option<u16>,
    pub repos: Vec<Repo>,
    pub repo_calls: Arc<AtomicUsize>,
}

impl StubGithub {
    pub fn ok(repos: Vec<Repo>) -> Self {
        Self {
            fail_with: None,
            repos,
            repo_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            fail_with: Some(status),
            repos: Vec::new(),
            repo_calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl GithubSource for StubGithub {
    fn fetch_profile(&self, user: &str) -> Result<Profile, GithubError> {
        if let Some(status) = self.fail_with {
            return Err(GithubError::Status(status));
        }
        Ok(Profile {
            login: user.to_string(),
            name: Some("The Octocat".into()),
            avatar_url: "https://avatars.example.com/octocat.png".into(),
            html_url: format!("https://github.com/{user}"),
            bio: Some("Loves open source".into()),
            location: Some("San Francisco".into()),
            blog: None,
            public_repos: 8,
            followers: 120,
            following: 9,
        })
    }

    fn fetch_recent_repos(&self, _user: &str, limit: u32) -> Result<Vec<Repo>, GithubError> {
        self.repo_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.repos.iter().take(limit as usize).cloned().collect())
    }
}

pub fn repo(name: &str, stars: u32, language: Option<&str>) -> Repo {
    Repo {
        name: name.to_string(),
        html_url: format!("https://github.com/octocat/{name}"),
        description: Some(format!("{name} description")),
        language: language.map(String::from),
        stargazers_count: stars,
        forks_count: 1,
        watchers_count: 2,
        homepage: None,
        fork: false,
        updated_at: Utc.with_ymd_and_hms(2024, 3, 4, 12, 0, 0).unwrap(),
    }
}

pub fn test_config() -> Config {
    let env: HashMap<String, String> = [
        ("CONTACT_DELAY_MS", "0".to_string()),
        (
            "PORTFOLIO_STATIC_DIR",
            concat!(env!("CARGO_MANIFEST_DIR"), "/static").to_string(),
        ),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect();

    Config::from_sources(None, &env).expect("test config is valid")
}

/// App over the embedded content with a stubbed GitHub source.
pub fn test_app(github: StubGithub) -> App {
    let content = Content::embedded().expect("embedded content parses");
    App::new(test_config(), content, Box::new(github))
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method(http::Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, body: &str, htmx: bool) -> Request {
    let mut builder = http::Request::builder()
        .method(http::Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded");
    if htmx {
        builder = builder.header("HX-Request", "true");
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn header(resp: &Response, name: &str) -> String {
    resp.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string()
}

/// Text of every element matching `selector`, whitespace-collapsed.
pub fn select_text(html: &str, selector: &str) -> Vec<String> {
    let doc = scraper::Html::parse_document(html);
    let sel = scraper::Selector::parse(selector).unwrap();
    doc.select(&sel)
        .map(|el| el.text().collect::<Vec<_>>().join(" "))
        .map(|t| t.split_whitespace().collect::<Vec<_>>().join(" "))
        .collect()
}

/// Value of `attr` on every element matching `selector`.
pub fn select_attr(html: &str, selector: &str, attr: &str) -> Vec<String> {
    let doc = scraper::Html::parse_document(html);
    let sel = scraper::Selector::parse(selector).unwrap();
    doc.select(&sel)
        .filter_map(|el| el.value().attr(attr).map(String::from))
        .collect()
}
