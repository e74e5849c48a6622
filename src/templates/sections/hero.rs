use crate::content::Site;
use crate::templates::components::button_link;
use maud::{html, Markup};

pub fn hero_section(site: &Site) -> Markup {
    html! {
        section id="hero" class="hero" {
            div class="container hero-inner" {
                div class="hero-text" {
                    p class="eyebrow" { "Hi, I'm" }
                    h1 { (site.name) }
                    @if !site.role.is_empty() {
                        p class="role" { (site.role) }
                    }
                    @if !site.tagline.is_empty() {
                        p class="lead" { (site.tagline) }
                    }
                    div class="hero-actions" {
                        (button_link("View my work", "#projects", true))
                        (button_link("Get in touch", "#contact", false))
                    }
                }
                img class="avatar" src=(site.avatar_url) alt=(format!("Portrait of {}", site.name));
            }
        }
    }
}
