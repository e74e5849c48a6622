use crate::content::Site;
use crate::domain::{ContactForm, FieldError};
use crate::templates::components::section;
use maud::{html, Markup};

/// What the contact form shows after the last interaction.
#[derive(Debug, Clone, Default)]
pub enum ContactView {
    #[default]
    Blank,
    Invalid {
        form: ContactForm,
        errors: Vec<FieldError>,
    },
    Sent {
        name: String,
    },
}

pub fn contact_section(site: &Site, view: &ContactView) -> Markup {
    section(
        "contact",
        "Get in touch",
        html! {
            div class="contact-grid" {
                div class="contact-details" {
                    p { "Have a project in mind or just want to say hello? My inbox is open." }
                    @if !site.email.is_empty() {
                        p { a href=(format!("mailto:{}", site.email)) { (site.email) } }
                    }
                    @if !site.location.is_empty() {
                        p class="muted" { (site.location) }
                    }
                }
                (contact_form(view))
            }
        },
    )
}

/// The form fragment swapped in after each submission.
pub fn contact_form(view: &ContactView) -> Markup {
    let empty = ContactForm::default();
    let (values, errors): (&ContactForm, &[FieldError]) = match view {
        ContactView::Invalid { form, errors } => (form, errors.as_slice()),
        _ => (&empty, &[][..]),
    };

    html! {
        form
            id="contact-form"
            class="contact-form"
            method="post"
            action="/contact#contact"
            hx-post="/contact"
            hx-swap="outerHTML"
            hx-disabled-elt="button"
            novalidate
        {
            @match view {
                ContactView::Sent { name } => {
                    div class="alert alert-success" role="status" {
                        "Thanks, " (name) "! Your message has been sent. I'll get back to you soon."
                    }
                }
                ContactView::Invalid { .. } => {
                    div class="alert alert-error" role="alert" {
                        "Please fix the highlighted fields and try again."
                    }
                }
                ContactView::Blank => {}
            }

            (text_field("name", "Name", "text", &values.name, true, errors))
            (text_field("email", "Email", "email", &values.email, true, errors))
            (text_field("subject", "Subject", "text", &values.subject, false, errors))

            div class="field" {
                label for="message" { "Message" }
                textarea id="message" name="message" rows="6" required {
                    (values.message)
                }
                (field_error("message", errors))
            }

            button type="submit" class="btn btn-primary" {
                span class="btn-text" { "Send message" }
                span class="spinner" aria-hidden="true" {}
            }
        }
    }
}

fn text_field(
    name: &str,
    label: &str,
    kind: &str,
    value: &str,
    required: bool,
    errors: &[FieldError],
) -> Markup {
    let invalid = errors.iter().any(|e| e.field == name);
    html! {
        div class="field" {
            label for=(name) { (label) @if !required { " " span class="muted" { "(optional)" } } }
            input
                type=(kind)
                id=(name)
                name=(name)
                value=(value)
                required[required]
                aria-invalid=[invalid.then_some("true")];
            (field_error(name, errors))
        }
    }
}

fn field_error(name: &str, errors: &[FieldError]) -> Markup {
    html! {
        @for error in errors.iter().filter(|e| e.field == name) {
            p class="field-error" data-field=(error.field) { (error.message) }
        }
    }
}
