use leptos::prelude::*;

use crate::scroll::{Section, scroll_to_section, use_scroll_state};

/// Fixed page chrome driven by scroll state: the top progress bar and the
/// floating section nav that appears past the scroll threshold.
#[component]
pub fn ScrollChrome() -> impl IntoView {
    let state = use_scroll_state();

    view! {
        <div class="progress-bar" style:width=move || format!("{:.2}%", state.get().progress)></div>

        <Show when=move || state.get().floating_nav>
            <nav class="floating-nav">
                <ul class="floating-nav-list">
                    {Section::ALL
                        .into_iter()
                        .map(|section| view! {
                            <li>
                                <button
                                    class=move || if state.get().active == section {
                                        "floating-link active"
                                    } else {
                                        "floating-link"
                                    }
                                    on:click=move |_| scroll_to_section(section)
                                >
                                    {section.label()}
                                </button>
                            </li>
                        })
                        .collect_view()}
                </ul>
            </nav>
        </Show>
    }
}
