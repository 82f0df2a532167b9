use leptos::prelude::*;

use crate::content::{TECH_STACK, TechEntry, TechGroup};
use crate::scroll::Section;

#[component]
pub fn TechStack() -> impl IntoView {
    view! {
        <section id=Section::Tech.anchor() class="tech">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Under the Hood"</p>
                    <h2 class="section-title">"Tech stack"</h2>
                </div>
                <div class="tech-grid">
                    {TECH_STACK.iter().map(tech_column).collect_view()}
                </div>
            </div>
        </section>
    }
}

fn tech_column(group: &'static TechGroup) -> impl IntoView {
    view! {
        <div class="tech-column">
            <h3 class="tech-group-title">{group.title}</h3>
            {group.entries.iter().map(tech_card).collect_view()}
        </div>
    }
}

fn tech_card(entry: &'static TechEntry) -> impl IntoView {
    view! {
        <div class="tech-card">
            <h4 class="tech-name">{entry.name}</h4>
            {(!entry.summary.is_empty())
                .then(|| view! { <p class="tech-summary">{entry.summary}</p> })}
            {(!entry.points.is_empty()).then(|| view! {
                <ul class="tech-points">
                    {entry
                        .points
                        .iter()
                        .map(|point| view! { <li class="tech-point">{*point}</li> })
                        .collect_view()}
                </ul>
            })}
        </div>
    }
}
