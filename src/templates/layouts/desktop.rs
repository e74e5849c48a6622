use crate::content::Site;
use crate::templates::components::social_links;
use chrono::{Datelike, Utc};
use maud::{html, Markup, DOCTYPE};

/// Anchor targets in page order; the header nav is built from this.
pub const NAV_SECTIONS: &[(&str, &str)] = &[
    ("about", "About"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("designs", "Designs"),
    ("github", "GitHub"),
    ("ml", "ML"),
    ("resume", "Resume"),
    ("testimonials", "Testimonials"),
    ("contact", "Contact"),
];

pub fn desktop_layout(title: &str, site: &Site, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content=(site.tagline);
                title { (title) }
                link rel="icon" type="image/svg+xml" href="/static/img/favicon.svg";
                link rel="stylesheet" href="/static/main.css";
                script src="/static/htmx.js" defer {};
            }
            body {
                header class="site-header" {
                    a href="#hero" class="brand" { (site.name) }
                    nav {
                        ul {
                            @for (id, label) in NAV_SECTIONS {
                                li { a href=(format!("#{id}")) { (label) } }
                            }
                        }
                    }
                    a href="/resume" class="btn btn-outline" { "Resume" }
                }

                main { (content) }

                footer class="site-footer" {
                    (social_links(&site.socials))
                    p { "© " (Utc::now().year()) " " (site.name) }
                }
            }
        }
    }
}
