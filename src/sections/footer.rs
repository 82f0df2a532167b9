use leptos::prelude::*;

use crate::content::{REPO_URL, SITE_URL};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-brand">
                    <span class="footer-title">"StudyForge"</span>
                </div>
                <div class="footer-links">
                    <a href=SITE_URL target="_blank" rel="noopener noreferrer" class="footer-link">"studyforge.app"</a>
                    <a href=REPO_URL target="_blank" rel="noopener noreferrer" class="footer-link">"GitHub"</a>
                </div>
                <p class="footer-copyright">"© 2025 StudyForge. All rights reserved."</p>
            </div>
        </footer>
    }
}
