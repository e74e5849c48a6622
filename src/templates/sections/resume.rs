use crate::content::{Education, Experience};
use crate::templates::components::{button_link, section};
use maud::{html, Markup};

pub fn resume_section(experience: &[Experience], education: &[Education]) -> Markup {
    section(
        "resume",
        "Resume",
        html! {
            div class="resume-grid" {
                div {
                    h3 { "Experience" }
                    ol class="timeline" {
                        @for job in experience {
                            li class="timeline-item" {
                                span class="period" { (job.period) }
                                h4 { (job.role) @if !job.organisation.is_empty() { " · " (job.organisation) } }
                                p { (job.summary) }
                                @if !job.achievements.is_empty() {
                                    ul {
                                        @for item in &job.achievements {
                                            li { (item) }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                div {
                    h3 { "Education" }
                    ol class="timeline" {
                        @for entry in education {
                            li class="timeline-item" {
                                span class="period" { (entry.period) }
                                h4 { (entry.degree) }
                                p { (entry.institution) }
                            }
                        }
                    }
                }
            }
            div class="center" {
                (button_link("Download resume (PDF)", "/resume", true))
            }
        },
    )
}
