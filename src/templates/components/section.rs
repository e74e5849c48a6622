use maud::{html, Markup};

/// A full-width page section. `reveal` hooks up the scroll-in animation in CSS.
pub fn section(id: &str, heading: &str, body: Markup) -> Markup {
    html! {
        section id=(id) class="section reveal" {
            div class="container" {
                h2 class="section-title" { (heading) }
                (body)
            }
        }
    }
}
