use maud::{html, Markup};

pub mod card;
pub mod error;
pub mod section;

pub use card::card;
pub use error::error_page;
pub use section::section;

pub fn button_link(label: &str, href: &str, primary: bool) -> Markup {
    let class = if primary { "btn btn-primary" } else { "btn btn-outline" };
    html! {
        a class=(class) href=(href) { (label) }
    }
}

/// Opens in a new tab; used for every off-site link.
pub fn external_link(label: &str, href: &str) -> Markup {
    html! {
        a href=(href) target="_blank" rel="noopener noreferrer" { (label) }
    }
}

pub fn tag_list(tags: &[String]) -> Markup {
    html! {
        @if !tags.is_empty() {
            ul class="tags" {
                @for tag in tags {
                    li class="tag" { (tag) }
                }
            }
        }
    }
}

pub fn social_links(links: &[crate::content::SocialLink]) -> Markup {
    html! {
        ul class="socials" {
            @for link in links {
                li { (external_link(&link.label, &link.url)) }
            }
        }
    }
}
