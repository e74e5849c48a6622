use crate::content::SkillGroup;
use crate::templates::components::{card, section};
use maud::{html, Markup};

pub fn skills_section(groups: &[SkillGroup]) -> Markup {
    section(
        "skills",
        "Skills",
        html! {
            div class="skills-grid" {
                @for group in groups {
                    (card(&group.category, html! {
                        ul class="skill-list" {
                            @for skill in &group.skills {
                                li class="skill" {
                                    div class="skill-label" {
                                        span { (skill.name) }
                                        span class="muted" { (skill.level) "%" }
                                    }
                                    div
                                        class="skill-bar"
                                        role="progressbar"
                                        aria-label=(skill.name)
                                        aria-valuemin="0"
                                        aria-valuemax="100"
                                        aria-valuenow=(skill.level)
                                    {
                                        div class="skill-fill" style=(format!("width: {}%", skill.level)) {}
                                    }
                                }
                            }
                        }
                    }))
                }
            }
        },
    )
}
