use leptos::prelude::*;

use super::VERSION;
use crate::content::{REPO_URL, SITE_URL};
use crate::scroll::Section;

#[component]
pub fn Hero() -> impl IntoView {
    let badge_text = format!("{} — rubric grading is live", VERSION);
    view! {
        <section id=Section::Overview.anchor() class="hero">
            <div class="container">
                <div class="hero-content">
                    <div class="hero-badge">
                        <span class="hero-badge-dot"></span>
                        {badge_text}
                    </div>
                    <h1 class="hero-title">"StudyForge"</h1>
                    <p class="hero-description">
                        "AI-assisted exam authoring, delivery, and grading. "
                        "Draft questions from course material, publish search-friendly exams, "
                        "and let a rubric-guided model handle the first grading pass."
                    </p>
                    <div class="hero-actions">
                        <a href=SITE_URL target="_blank" rel="noopener noreferrer" class="btn btn-primary">
                            "Visit the Site"
                        </a>
                        <a href=REPO_URL target="_blank" rel="noopener noreferrer" class="btn btn-secondary">
                            "View on GitHub →"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
