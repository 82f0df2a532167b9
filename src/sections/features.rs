use leptos::prelude::*;

use crate::content::{FEATURES, Feature};
use crate::scroll::Section;

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id=Section::Features.anchor() class="features">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Engineering Highlights"</p>
                    <h2 class="section-title">"What actually moved the needle"</h2>
                    <p class="section-description">
                        "Rendering, storage, AI, and access control — the four pieces of work "
                        "behind the numbers below."
                    </p>
                </div>
                <div class="features-list">
                    {FEATURES.iter().map(feature_card).collect_view()}
                </div>
            </div>
        </section>
    }
}

fn feature_card(feature: &'static Feature) -> impl IntoView {
    view! {
        <article class="feature-card">
            <div class="feature-head">
                <div class="feature-icon">{feature.icon}</div>
                <div>
                    <h3 class="feature-title">{feature.title}</h3>
                    <p class="feature-summary">{feature.summary}</p>
                </div>
            </div>
            <ul class="feature-details">
                {feature
                    .details
                    .iter()
                    .map(|detail| view! { <li class="feature-detail">{*detail}</li> })
                    .collect_view()}
            </ul>
        </article>
    }
}
