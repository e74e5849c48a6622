use crate::content::Design;
use crate::domain::{has_hidden_designs, visible_designs};
use crate::templates::components::section;
use maud::{html, Markup};

pub fn designs_section(designs: &[Design], expanded: bool) -> Markup {
    section("designs", "Designs", designs_body(designs, expanded))
}

pub fn designs_body(designs: &[Design], expanded: bool) -> Markup {
    let (label, fallback, next) = if expanded {
        ("Show less", "preview", "false")
    } else {
        ("Show all designs", "all", "true")
    };

    html! {
        div id="designs-body" {
            @if designs.is_empty() {
                p class="empty-state" { "Design work coming soon." }
            } @else {
                div class="design-grid" {
                    @for design in visible_designs(designs, expanded) {
                        a class="design-tile" href=(design.link_url) target="_blank" rel="noopener noreferrer" {
                            img src=(design.image_url) alt=(design.title) loading="lazy";
                            div class="design-caption" {
                                h3 { (design.title) }
                                p { (design.description) }
                                @if !design.tool.is_empty() {
                                    span class="tag" { (design.tool) }
                                }
                            }
                        }
                    }
                }

                @if has_hidden_designs(designs) {
                    div class="center" {
                        a
                            class="btn btn-outline"
                            href=(format!("/?designs={fallback}#designs"))
                            hx-get=(format!("/designs?expanded={next}"))
                            hx-target="#designs-body"
                            hx-swap="outerHTML"
                        {
                            (label)
                        }
                    }
                }
            }
        }
    }
}
