use crate::content::Testimonial;
use crate::domain::{Carousel, CAROUSEL_INTERVAL_SECS};
use crate::templates::components::section;
use maud::{html, Markup};

pub fn testimonials_section(testimonials: &[Testimonial], carousel: Carousel) -> Markup {
    section(
        "testimonials",
        "What people say",
        testimonial_carousel(testimonials, carousel),
    )
}

/// One slide plus controls. While autoplay is on the element polls for the
/// next slide; manual controls ask for a paused carousel, which renders
/// without the poll.
pub fn testimonial_carousel(testimonials: &[Testimonial], carousel: Carousel) -> Markup {
    let Some(current) = testimonials.get(carousel.index()) else {
        return html! {
            div id="testimonial-carousel" class="carousel" {
                p class="empty-state" { "No testimonials yet." }
            }
        };
    };

    let next = carousel.next().index();
    let prev = carousel.prev().index();
    let autoplay = carousel.autoplay();

    html! {
        div
            id="testimonial-carousel"
            class="carousel"
            aria-roledescription="carousel"
            hx-get=[autoplay.then(|| format!("/testimonials?index={next}"))]
            hx-trigger=[autoplay.then(|| format!("every {CAROUSEL_INTERVAL_SECS}s"))]
            hx-swap="outerHTML"
        {
            figure class="testimonial" aria-live="polite" {
                blockquote { p { "“" (current.quote) "”" } }
                figcaption {
                    img class="avatar-sm" src=(current.avatar_url) alt="" loading="lazy";
                    div {
                        strong { (current.author) }
                        @if !current.role.is_empty() {
                            span class="muted" { (current.role) }
                        }
                    }
                }
            }

            @if carousel.len() > 1 {
                div class="carousel-controls" {
                    (nav_link("‹", "Previous testimonial", prev))
                    ol class="carousel-dots" {
                        @for i in 0..carousel.len() {
                            li {
                                (dot_link(i, i == carousel.index()))
                            }
                        }
                    }
                    (nav_link("›", "Next testimonial", next))
                }
            }
        }
    }
}

fn nav_link(symbol: &str, label: &str, index: usize) -> Markup {
    html! {
        a
            class="carousel-nav"
            href=(format!("/?testimonial={index}#testimonials"))
            hx-get=(format!("/testimonials?index={index}&auto=false"))
            hx-target="#testimonial-carousel"
            hx-swap="outerHTML"
            aria-label=(label)
        {
            (symbol)
        }
    }
}

fn dot_link(index: usize, current: bool) -> Markup {
    let class = if current { "dot active" } else { "dot" };
    html! {
        a
            class=(class)
            href=(format!("/?testimonial={index}#testimonials"))
            hx-get=(format!("/testimonials?index={index}&auto=false"))
            hx-target="#testimonial-carousel"
            hx-swap="outerHTML"
            aria-label=(format!("Show testimonial {}", index + 1))
            aria-current=[current.then_some("true")]
        {}
    }
}
