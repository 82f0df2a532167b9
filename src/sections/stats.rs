use leptos::prelude::*;

use crate::content::STATS;

#[component]
pub fn Stats() -> impl IntoView {
    view! {
        <section class="stats">
            <div class="container">
                <div class="results-grid">
                    {STATS
                        .iter()
                        .map(|stat| view! {
                            <div class="result-card">
                                <div class="result-number">{stat.value}</div>
                                <div class="result-label">{stat.label}</div>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
