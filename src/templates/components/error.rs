use maud::{html, Markup, DOCTYPE};

/// Standalone error page. Does not depend on the loaded content.
pub fn error_page(status: u16, message: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Error " (status) }
                link rel="stylesheet" href="/static/main.css";
            }
            body class="error-page" {
                main class="container narrow" {
                    h1 { "Error " (status) }
                    p { (message) }
                    p { a href="/" { "← Back to home" } }
                }
            }
        }
    }
}
