use leptos::*;

use crate::content::STATS;

#[component]
pub fn Stats() -> impl IntoView {
    view! {
        <section class="stats">
            <div class="container stats-grid">
                {STATS
                    .iter()
                    .map(|stat| view! {
                        <div class="stat">
                            <div class="stat-icon">{stat.icon}</div>
                            <div class="stat-number">{stat.number}</div>
                            <div class="stat-label">{stat.label}</div>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
